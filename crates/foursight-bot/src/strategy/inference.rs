use super::{PlayError, Strategy, StrategyContext};
use foursight_core::guess::infer_guesses;
use foursight_core::model::card::Card;
use tracing::{Level, event};

/// The authoritative strategy: parity-driven play selection and the
/// probability-vector guess engine.
#[derive(Debug, Default)]
pub struct InferenceStrategy;

impl InferenceStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for InferenceStrategy {
    fn choose_play(&mut self, ctx: &StrategyContext) -> Result<usize, PlayError> {
        let hand = ctx.view.hand();
        if hand.is_empty() {
            return Err(PlayError::EmptyHand {
                seat: ctx.view.seat(),
            });
        }

        // Alternate between the extremes of the deck-index order: highest
        // card on odd turns, lowest on even ones. First occurrence wins a
        // tie, though a legal hand holds no duplicates.
        let turn = ctx.view.played().len() + 1;
        let pick = if turn % 2 == 1 {
            position_of_extreme(hand, |a, b| a > b)
        } else {
            position_of_extreme(hand, |a, b| a < b)
        };

        event!(
            Level::DEBUG,
            seat = %ctx.view.seat(),
            turn,
            card = %hand[pick],
            "parity play"
        );
        Ok(pick)
    }

    fn choose_guesses(&mut self, ctx: &StrategyContext) -> Vec<Card> {
        let guesses = infer_guesses(ctx.view, ctx.deck, ctx.round);
        event!(
            Level::DEBUG,
            seat = %ctx.view.seat(),
            round = ctx.round,
            count = guesses.len(),
            "inferred guesses"
        );
        guesses
    }
}

fn position_of_extreme(hand: &[Card], beats: impl Fn(u8, u8) -> bool) -> usize {
    let mut best = 0;
    for (i, card) in hand.iter().enumerate().skip(1) {
        if beats(card.to_id(), hand[best].to_id()) {
            best = i;
        }
    }
    best
}
