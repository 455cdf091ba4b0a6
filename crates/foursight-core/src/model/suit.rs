use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Diamonds = 0,
    Clubs = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Diamonds),
            1 => Some(Suit::Clubs),
            2 => Some(Suit::Hearts),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Suit paired with this one under the exposure-signalling convention:
    /// the black suits pair with the red suit of matching weight.
    pub const fn paired(self) -> Suit {
        match self {
            Suit::Spades => Suit::Hearts,
            Suit::Hearts => Suit::Spades,
            Suit::Clubs => Suit::Diamonds,
            Suit::Diamonds => Suit::Clubs,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        };
        f.write_str(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::Suit;

    #[test]
    fn display_returns_ascii_symbols() {
        assert_eq!(Suit::Diamonds.to_string(), "D");
        assert_eq!(Suit::Spades.to_string(), "S");
    }

    #[test]
    fn from_index_maps_valid_values() {
        assert_eq!(Suit::from_index(0), Some(Suit::Diamonds));
        assert_eq!(Suit::from_index(3), Some(Suit::Spades));
        assert_eq!(Suit::from_index(4), None);
    }

    #[test]
    fn pairing_is_an_involution() {
        for suit in Suit::ALL {
            assert_eq!(suit.paired().paired(), suit);
            assert_ne!(suit.paired(), suit);
        }
    }
}
