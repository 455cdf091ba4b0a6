use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Deck-index of this card: `value_rank * 4 + suit_rank`, a total order
    /// over the 52-card deck in the range `0..=51`.
    pub const fn to_id(self) -> u8 {
        self.rank.index() * 4 + self.suit as u8
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        if id >= 52 {
            return None;
        }
        let rank = match Rank::from_value(id / 4 + 2) {
            Some(rank) => rank,
            None => return None,
        };
        let suit = match Suit::from_index((id % 4) as usize) {
            Some(suit) => suit,
            None => return None,
        };
        Some(Self { rank, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
