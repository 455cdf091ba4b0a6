//! Per-round orchestration of the inference rules.

use super::belief::{GuessBelief, NUM_ROUNDS};
use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::view::PlayerView;

/// Infers this round's guess set: `13 - round` cards for rounds 1..=12, an
/// empty set for the final round. The working mask and vector are allocated
/// fresh per call, so concurrent simulations of different players cannot
/// contaminate each other.
///
/// When elimination leaves fewer candidates than requested, the result
/// degrades to the candidates that remain; a short set is valid output.
pub fn infer_guesses(view: &PlayerView, deck: &Deck, round: u8) -> Vec<Card> {
    if round == 0 || round >= NUM_ROUNDS {
        return Vec::new();
    }
    let want = usize::from(NUM_ROUNDS - round);

    let mut belief = GuessBelief::new();
    belief.exclude_seen(view);
    belief.exclude_failed_guesses(view);
    belief.apply_exposure_bounds(view, round);
    belief.backfill_accuracy(view);
    belief.refine_subset_delta(view);
    belief.enforce_mask();

    let ids = if round == 1 {
        // No history to rank by yet: sample the middle of the sorted
        // availability list instead of its extremes.
        belief.centered_band(want)
    } else {
        belief.top_ranked(want)
    };

    ids.into_iter()
        .filter_map(Card::from_id)
        .filter(|card| deck.contains(*card))
        .collect()
}
