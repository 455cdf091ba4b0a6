use foursight_core::guess::{CardRanking, GuessBelief, infer_guesses};
use foursight_core::model::card::Card;
use foursight_core::model::deck::Deck;
use foursight_core::model::seat::Seat;
use foursight_core::model::view::{GuessRecord, PlayerView};
use std::collections::BTreeSet;

fn card_with_id(id: u8) -> Card {
    Card::from_id(id).unwrap()
}

#[test]
fn ranking_values_form_a_permutation() {
    let deck = Deck::standard();
    for seed in [0, 1, 42, 999] {
        let ranking = CardRanking::with_seed(deck.cards(), seed);
        let values: BTreeSet<u8> = deck
            .cards()
            .iter()
            .map(|card| ranking.rank_of(*card).unwrap())
            .collect();
        let expected: BTreeSet<u8> = (0..52).collect();
        assert_eq!(values, expected);
    }
}

#[test]
fn ranking_is_deterministic_per_seed() {
    let deck = Deck::standard();
    let a = CardRanking::with_seed(deck.cards(), 123);
    let b = CardRanking::with_seed(deck.cards(), 123);
    assert!(deck.cards().iter().all(|c| a.rank_of(*c) == b.rank_of(*c)));
}

#[test]
fn card_id_roundtrips_for_the_whole_deck() {
    for card in Deck::standard().cards() {
        assert_eq!(Card::from_id(card.to_id()), Some(*card));
    }
}

#[test]
fn guesses_never_include_seen_or_failed_cards() {
    let hand: Vec<Card> = (0..5).map(card_with_id).collect();
    let played = vec![card_with_id(10), card_with_id(11)];
    let mut exposed: [Vec<Card>; 4] = Default::default();
    exposed[Seat::East.index()].push(card_with_id(12));
    exposed[Seat::West.index()].push(card_with_id(13));
    let failed: Vec<Card> = (14..18).map(card_with_id).collect();
    let history = vec![
        GuessRecord::new(failed.clone(), 0),
        GuessRecord::new(vec![card_with_id(20), card_with_id(21)], 1),
    ];
    let view = PlayerView::from_parts(Seat::North, hand.clone(), played.clone(), exposed, history);

    let deck = Deck::standard();
    let guesses = infer_guesses(&view, &deck, 3);
    for card in &guesses {
        assert!(!hand.contains(card));
        assert!(!played.contains(card));
        assert_ne!(card.to_id(), 12);
        assert_ne!(card.to_id(), 13);
        assert!(!failed.contains(card));
    }
}

#[test]
fn round_one_returns_twelve_centered_on_the_midpoint() {
    let view = PlayerView::from_parts(
        Seat::North,
        Vec::new(),
        Vec::new(),
        Default::default(),
        Vec::new(),
    );
    let deck = Deck::standard();
    let guesses = infer_guesses(&view, &deck, 1);
    let ids: Vec<u8> = guesses.iter().map(|card| card.to_id()).collect();
    assert_eq!(ids, (20..32).collect::<Vec<u8>>());
}

#[test]
fn output_size_is_the_requested_count_or_the_pool() {
    // Plenty of candidates: exact requested size.
    let view = PlayerView::from_parts(
        Seat::North,
        Vec::new(),
        Vec::new(),
        Default::default(),
        vec![GuessRecord::new(vec![card_with_id(3)], 1); 4],
    );
    let deck = Deck::standard();
    assert_eq!(infer_guesses(&view, &deck, 5).len(), 8);

    // Pool exhausted: degrade to what remains.
    let mut exposed: [Vec<Card>; 4] = Default::default();
    for id in 0..49 {
        exposed[Seat::West.index()].push(card_with_id(id));
    }
    let starved = PlayerView::from_parts(
        Seat::North,
        Vec::new(),
        Vec::new(),
        exposed,
        vec![GuessRecord::new(vec![card_with_id(3)], 1); 4],
    );
    assert_eq!(infer_guesses(&starved, &deck, 5).len(), 3);
}

#[test]
fn odd_round_partner_exposure_eliminates_above() {
    let mut exposed: [Vec<Card>; 4] = Default::default();
    exposed[Seat::South.index()].push(card_with_id(30));
    let view = PlayerView::from_parts(Seat::North, Vec::new(), Vec::new(), exposed, Vec::new());

    let mut belief = GuessBelief::new();
    belief.exclude_seen(&view);
    belief.apply_exposure_bounds(&view, 1);
    for id in 31..52 {
        assert!(!belief.is_available(card_with_id(id)));
    }
    // The exposed card itself is seen, everything at or below index 30 stays.
    assert!(!belief.is_available(card_with_id(30)));
    assert!(belief.is_available(card_with_id(29)));
}
