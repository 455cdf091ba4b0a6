//! Deterministic randomization: reproducible full-deck rankings keyed by a
//! per-round seed.

use crate::model::card::Card;
use crate::model::deck::Deck;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Immutable table of per-round seeds, one per play/guess event. Constructed
/// once and passed by reference; alternate tables slot in for tests.
#[derive(Debug, Clone)]
pub struct SeedSchedule {
    seeds: Vec<u64>,
}

impl SeedSchedule {
    pub const LENGTH: usize = 1000;

    /// The standard schedule `0, 1, .., 999`.
    pub fn standard() -> Self {
        Self {
            seeds: (0..Self::LENGTH as u64).collect(),
        }
    }

    pub fn from_seeds(seeds: Vec<u64>) -> Self {
        Self { seeds }
    }

    /// Seed for the `event_index`-th play/guess event (0-indexed).
    pub fn seed_for(&self, event_index: usize) -> Option<u64> {
        self.seeds.get(event_index).copied()
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}

impl Default for SeedSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

/// A bijection from the cards of a deck onto a pseudo-random permutation of
/// `0..52`, reproducible from its seed.
#[derive(Debug, Clone)]
pub struct CardRanking {
    by_id: [Option<u8>; Deck::SIZE],
}

impl CardRanking {
    /// Shuffles a `0..52` permutation with a generator seeded by `seed` and
    /// zips it against `cards` in their given order.
    pub fn with_seed(cards: &[Card], seed: u64) -> Self {
        let mut order: Vec<u8> = (0..Deck::SIZE as u8).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        order.shuffle(&mut rng);

        let mut by_id = [None; Deck::SIZE];
        for (card, rank) in cards.iter().zip(order) {
            by_id[card.to_id() as usize] = Some(rank);
        }
        Self { by_id }
    }

    /// Rank assigned to `card`, or `None` when the card was absent from the
    /// list the ranking was built over. Callers log and skip on `None`;
    /// a missing card never halts the game.
    pub fn rank_of(&self, card: Card) -> Option<u8> {
        self.by_id[card.to_id() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::{CardRanking, SeedSchedule};
    use crate::model::card::Card;
    use crate::model::deck::Deck;
    use std::collections::BTreeSet;

    #[test]
    fn ranking_is_a_bijection_for_every_seed() {
        let deck = Deck::standard();
        for seed in 0..16 {
            let ranking = CardRanking::with_seed(deck.cards(), seed);
            let values: BTreeSet<u8> = deck
                .cards()
                .iter()
                .map(|card| ranking.rank_of(*card).unwrap())
                .collect();
            assert_eq!(values.len(), Deck::SIZE);
            assert_eq!(values.iter().copied().max(), Some(51));
        }
    }

    #[test]
    fn same_seed_reproduces_the_mapping() {
        let deck = Deck::standard();
        let a = CardRanking::with_seed(deck.cards(), 7);
        let b = CardRanking::with_seed(deck.cards(), 7);
        for card in deck.cards() {
            assert_eq!(a.rank_of(*card), b.rank_of(*card));
        }
    }

    #[test]
    fn different_seeds_differ_somewhere() {
        let deck = Deck::standard();
        let a = CardRanking::with_seed(deck.cards(), 1);
        let b = CardRanking::with_seed(deck.cards(), 2);
        assert!(
            deck.cards()
                .iter()
                .any(|card| a.rank_of(*card) != b.rank_of(*card))
        );
    }

    #[test]
    fn cards_outside_the_source_list_have_no_rank() {
        let deck = Deck::standard();
        let truncated = &deck.cards()[..40];
        let ranking = CardRanking::with_seed(truncated, 3);
        let missing = Card::from_id(51).unwrap();
        assert_eq!(ranking.rank_of(missing), None);
        assert!(ranking.rank_of(deck.cards()[0]).is_some());
    }

    #[test]
    fn schedule_hands_out_one_seed_per_event() {
        let schedule = SeedSchedule::standard();
        assert_eq!(schedule.len(), SeedSchedule::LENGTH);
        assert_eq!(schedule.seed_for(0), Some(0));
        assert_eq!(schedule.seed_for(12), Some(12));
        assert_eq!(schedule.seed_for(SeedSchedule::LENGTH), None);
    }
}
