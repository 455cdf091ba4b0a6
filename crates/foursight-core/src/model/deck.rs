use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;

/// The canonical 52-card enumeration. Iteration order matches the deck-index
/// codec: `cards()[i].to_id() == i`.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub const SIZE: usize = 52;

    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(Self::SIZE);
        for rank in Rank::ORDERED.iter().copied() {
            for suit in Suit::ALL.iter().copied() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}
