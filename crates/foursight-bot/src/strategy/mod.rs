mod inference;
mod pairing;

pub use inference::InferenceStrategy;
pub use pairing::PairingStrategy;

use core::fmt;
use foursight_core::model::card::Card;
use foursight_core::model::deck::Deck;
use foursight_core::model::seat::Seat;
use foursight_core::model::view::PlayerView;

/// Decision inputs for one call: the acting player's snapshot, the canonical
/// deck, and the 1-indexed round number.
pub struct StrategyContext<'a> {
    pub view: &'a PlayerView,
    pub deck: &'a Deck,
    pub round: u8,
}

/// Unified interface over the two table-facing decisions. Implementations
/// are swappable per partnership via [`TableAssignment`].
pub trait Strategy: Send {
    /// Choose the card to play, as an index into the view's hand. The table
    /// engine guarantees a non-empty hand; an empty one is reported back as
    /// [`PlayError::EmptyHand`] rather than a bogus index.
    fn choose_play(&mut self, ctx: &StrategyContext) -> Result<usize, PlayError>;

    /// Produce this round's guess set, at most `13 - round` cards.
    fn choose_guesses(&mut self, ctx: &StrategyContext) -> Vec<Card>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
    EmptyHand { seat: Seat },
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::EmptyHand { seat } => {
                write!(f, "{seat} asked to play from an empty hand")
            }
        }
    }
}

impl std::error::Error for PlayError {}

/// Which strategy a partnership runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Parity play plus the probability-vector guess engine.
    Inference,
    /// The suit-pairing and value-grouping heuristic.
    Pairing,
}

/// Per-partnership strategy selection, fixed at table setup.
#[derive(Debug, Clone, Copy)]
pub struct TableAssignment {
    north_south: StrategyKind,
    east_west: StrategyKind,
}

impl TableAssignment {
    pub fn new(north_south: StrategyKind, east_west: StrategyKind) -> Self {
        Self {
            north_south,
            east_west,
        }
    }

    pub fn uniform(kind: StrategyKind) -> Self {
        Self::new(kind, kind)
    }

    pub fn kind_for(&self, seat: Seat) -> StrategyKind {
        match seat {
            Seat::North | Seat::South => self.north_south,
            Seat::East | Seat::West => self.east_west,
        }
    }

    pub fn build_for(&self, seat: Seat) -> Box<dyn Strategy> {
        match self.kind_for(seat) {
            StrategyKind::Inference => Box::new(InferenceStrategy::new()),
            StrategyKind::Pairing => Box::new(PairingStrategy::new()),
        }
    }
}

impl Default for TableAssignment {
    fn default() -> Self {
        Self::uniform(StrategyKind::Inference)
    }
}

#[cfg(test)]
mod tests {
    use super::{PlayError, StrategyKind, TableAssignment};
    use foursight_core::model::seat::Seat;

    #[test]
    fn assignment_follows_partnerships() {
        let table = TableAssignment::new(StrategyKind::Inference, StrategyKind::Pairing);
        assert_eq!(table.kind_for(Seat::North), StrategyKind::Inference);
        assert_eq!(table.kind_for(Seat::South), StrategyKind::Inference);
        assert_eq!(table.kind_for(Seat::East), StrategyKind::Pairing);
        assert_eq!(table.kind_for(Seat::West), StrategyKind::Pairing);
    }

    #[test]
    fn empty_hand_error_names_the_seat() {
        let err = PlayError::EmptyHand { seat: Seat::West };
        assert_eq!(err.to_string(), "West asked to play from an empty hand");
    }
}
