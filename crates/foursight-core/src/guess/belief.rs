//! Availability mask and probability vector over the 52-card deck.
//!
//! Hard rules flip availability; refinement rules rewrite probabilities for
//! cards that are still candidates. The mask is enforced over the vector
//! last, so elimination always wins over refinement.

use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::seat::Seat;
use crate::model::view::{GuessRecord, PlayerView};

pub const OPENING_HAND_SIZE: u8 = 13;
pub const NUM_ROUNDS: u8 = 13;
/// Fixed prior for every card before any evidence is applied.
pub const PAR_PROBABILITY: f32 = 1.0 / 3.0;

/// Per-call working state of the inference engine. Freshly allocated for
/// every `infer_guesses` call; never shared between players.
#[derive(Debug, Clone)]
pub struct GuessBelief {
    available: [bool; Deck::SIZE],
    probs: [f32; Deck::SIZE],
}

impl GuessBelief {
    pub fn new() -> Self {
        Self {
            available: [true; Deck::SIZE],
            probs: [PAR_PROBABILITY; Deck::SIZE],
        }
    }

    pub fn is_available(&self, card: Card) -> bool {
        self.available[card.to_id() as usize]
    }

    pub fn prob(&self, card: Card) -> f32 {
        self.probs[card.to_id() as usize]
    }

    pub fn available_count(&self) -> usize {
        self.available.iter().filter(|flag| **flag).count()
    }

    /// Deck-indices still available, ascending.
    pub fn available_ids(&self) -> Vec<u8> {
        (0..Deck::SIZE as u8)
            .filter(|id| self.available[*id as usize])
            .collect()
    }

    pub fn exclude(&mut self, card: Card) {
        self.available[card.to_id() as usize] = false;
    }

    /// Everything publicly accounted for is not a candidate: own hand, own
    /// played cards, and all four exposure lists.
    pub fn exclude_seen(&mut self, view: &PlayerView) {
        for card in view.hand().iter().chain(view.played()) {
            self.exclude(*card);
        }
        for seat in Seat::LOOP {
            for card in view.exposed(seat) {
                self.exclude(*card);
            }
        }
    }

    /// A guess round scored fully wrong excludes every card it
    /// named. The true answer set is disjoint from a wholly-wrong guess.
    pub fn exclude_failed_guesses(&mut self, view: &PlayerView) {
        for record in view.history() {
            if record.is_fully_wrong() {
                for card in &record.cards {
                    self.exclude(*card);
                }
            }
        }
    }

    /// Partner exposures bound the unseen range on alternating
    /// rounds. The partner's i-th exposure (1-indexed) eliminates every
    /// candidate above its deck-index when i is odd, below it when i is
    /// even.
    pub fn apply_exposure_bounds(&mut self, view: &PlayerView, round: u8) {
        let exposures = view.partner_exposed().iter().take(round as usize);
        for (offset, exposed) in exposures.enumerate() {
            let round_no = offset + 1;
            let bound = exposed.to_id();
            for id in 0..Deck::SIZE as u8 {
                let above = id > bound;
                if (round_no % 2 == 1 && above) || (round_no % 2 == 0 && id < bound) {
                    self.available[id as usize] = false;
                }
            }
        }
    }

    /// Back-fills each past guess round's cards with the accuracy
    /// observed for that round, after discounting cards that have since been
    /// exposed (partner exposures were correct guesses, so they reduce both
    /// numerator and denominator; opponent exposures reduce only the pool).
    pub fn backfill_accuracy(&mut self, view: &PlayerView) {
        for (i, record) in view.history().iter().enumerate() {
            let mut numerator = i32::from(record.correct);
            let mut denominator = i32::from(OPENING_HAND_SIZE) - 1 - i as i32;
            for card in &record.cards {
                if view.is_partner_exposed(*card) {
                    numerator -= 1;
                    denominator -= 1;
                } else if view.is_opponent_exposed(*card) {
                    denominator -= 1;
                }
            }
            let accuracy = safe_ratio(numerator, denominator);
            for card in &record.cards {
                if view.is_partner_exposed(*card) || view.is_opponent_exposed(*card) {
                    continue;
                }
                self.assign(*card, accuracy);
            }
        }
    }

    /// When one round's reduced guess set strictly contains its
    /// neighbour's, the correctness delta is carried entirely by the cards
    /// present in only one of the two sets.
    pub fn refine_subset_delta(&mut self, view: &PlayerView) {
        for pair in view.history().windows(2) {
            let earlier = reduced_set(view, &pair[0].cards);
            let later = reduced_set(view, &pair[1].cards);
            let earlier_count = adjusted_count(view, &pair[0]);
            let later_count = adjusted_count(view, &pair[1]);

            if is_strict_subset(&earlier, &later) {
                let fresh = difference(&later, &earlier);
                let marginal = safe_ratio(later_count - earlier_count, fresh.len() as i32);
                self.assign_marginal(&fresh, marginal);
            } else if is_strict_subset(&later, &earlier) {
                let dropped = difference(&earlier, &later);
                let marginal = safe_ratio(earlier_count - later_count, dropped.len() as i32);
                self.assign_marginal(&dropped, marginal);
            }
        }
    }

    /// The mask overrides any refinement.
    pub fn enforce_mask(&mut self) {
        for id in 0..Deck::SIZE {
            if !self.available[id] {
                self.probs[id] = 0.0;
            }
        }
    }

    /// Available deck-indices centered on the midpoint of the sorted
    /// availability list; a deliberate non-extremes sample for the round
    /// with no history.
    pub fn centered_band(&self, width: usize) -> Vec<u8> {
        let ids = self.available_ids();
        let mid = ids.len() / 2;
        let start = mid.saturating_sub(width / 2);
        let end = (mid + width.div_ceil(2)).min(ids.len());
        ids[start..end].to_vec()
    }

    /// The `count` most probable available deck-indices, probability
    /// descending with deck-index as tie-break. Degrades to fewer entries
    /// when candidates run short.
    pub fn top_ranked(&self, count: usize) -> Vec<u8> {
        let mut ids = self.available_ids();
        ids.sort_by(|a, b| {
            let pa = self.probs[*a as usize];
            let pb = self.probs[*b as usize];
            pb.total_cmp(&pa).then(a.cmp(b))
        });
        ids.truncate(count);
        ids
    }

    fn assign(&mut self, card: Card, prob: f32) {
        let id = card.to_id() as usize;
        if self.available[id] && !is_pinned(self.probs[id]) {
            self.probs[id] = prob;
        }
    }

    fn assign_marginal(&mut self, ids: &[u8], prob: f32) {
        for id in ids {
            let slot = *id as usize;
            if self.available[slot] && !is_pinned(self.probs[slot]) && self.probs[slot] != 0.0 {
                self.probs[slot] = prob;
            }
        }
    }
}

impl Default for GuessBelief {
    fn default() -> Self {
        Self::new()
    }
}

fn is_pinned(prob: f32) -> bool {
    prob == 0.0 || prob == 1.0
}

/// Ratio guarded against empty pools and over-discounted numerators; both
/// collapse to probability zero rather than an error.
fn safe_ratio(numerator: i32, denominator: i32) -> f32 {
    if denominator <= 0 || numerator <= 0 {
        0.0
    } else {
        numerator as f32 / denominator as f32
    }
}

/// Guess set minus every card exposed by partner or opponents, as ids.
fn reduced_set(view: &PlayerView, cards: &[Card]) -> Vec<u8> {
    cards
        .iter()
        .filter(|card| !view.is_partner_exposed(**card) && !view.is_opponent_exposed(**card))
        .map(|card| card.to_id())
        .collect()
}

/// Correct count minus the partner-exposed overlap, which is known-correct.
fn adjusted_count(view: &PlayerView, record: &GuessRecord) -> i32 {
    let overlap = record
        .cards
        .iter()
        .filter(|card| view.is_partner_exposed(**card))
        .count() as i32;
    i32::from(record.correct) - overlap
}

fn is_strict_subset(a: &[u8], b: &[u8]) -> bool {
    a.len() < b.len() && a.iter().all(|id| b.contains(id))
}

fn difference(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().filter(|id| !b.contains(id)).copied().collect()
}
