use crate::model::card::Card;
use crate::model::seat::Seat;
use crate::model::view::{GuessRecord, PlayerView};
use core::fmt;
use serde::{Deserialize, Serialize};

/// Serializable image of a [`PlayerView`], with cards encoded as deck-index
/// ids. Lets the table engine checkpoint and replay decision inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub seat: Seat,
    pub hand: Vec<u8>,
    pub played: Vec<u8>,
    pub exposed: [Vec<u8>; 4],
    pub history: Vec<GuessRecordSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuessRecordSnapshot {
    pub cards: Vec<u8>,
    pub correct: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotError {
    UnknownCardId(u8),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::UnknownCardId(id) => {
                write!(f, "card id {id} is outside the 52-card deck")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

impl PlayerSnapshot {
    pub fn capture(view: &PlayerView) -> Self {
        PlayerSnapshot {
            seat: view.seat(),
            hand: encode(view.hand()),
            played: encode(view.played()),
            exposed: Seat::LOOP.map(|seat| encode(view.exposed(seat))),
            history: view
                .history()
                .iter()
                .map(|record| GuessRecordSnapshot {
                    cards: encode(&record.cards),
                    correct: record.correct,
                })
                .collect(),
        }
    }

    pub fn restore(self) -> Result<PlayerView, SnapshotError> {
        let hand = decode(&self.hand)?;
        let played = decode(&self.played)?;
        let mut exposed: [Vec<Card>; 4] = Default::default();
        for (slot, ids) in exposed.iter_mut().zip(&self.exposed) {
            *slot = decode(ids)?;
        }
        let mut history = Vec::with_capacity(self.history.len());
        for record in &self.history {
            history.push(GuessRecord::new(decode(&record.cards)?, record.correct));
        }
        Ok(PlayerView::from_parts(
            self.seat, hand, played, exposed, history,
        ))
    }

    pub fn to_json(view: &PlayerView) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self::capture(view))
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

fn encode(cards: &[Card]) -> Vec<u8> {
    cards.iter().map(|card| card.to_id()).collect()
}

fn decode(ids: &[u8]) -> Result<Vec<Card>, SnapshotError> {
    ids.iter()
        .map(|id| Card::from_id(*id).ok_or(SnapshotError::UnknownCardId(*id)))
        .collect()
}
