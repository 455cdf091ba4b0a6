use super::{PlayError, Strategy, StrategyContext};
use foursight_core::guess::{CardRanking, NUM_ROUNDS, SeedSchedule};
use foursight_core::model::card::Card;
use foursight_core::model::rank::Rank;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{Level, event};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueGroup {
    High,
    Mid,
    Low,
}

impl ValueGroup {
    fn of(rank: Rank) -> Self {
        match rank {
            Rank::Ace | Rank::King | Rank::Queen => ValueGroup::High,
            Rank::Jack | Rank::Ten | Rank::Nine | Rank::Eight => ValueGroup::Mid,
            _ => ValueGroup::Low,
        }
    }
}

/// Suit-pairing heuristic: partner exposures signal holdings in the paired
/// suit, low cards are shed first, and guesses favour the paired suit with a
/// mid-value fill. The play fallback keeps the seeded-ranking selection from
/// the strategy's earlier revision.
pub struct PairingStrategy {
    schedule: SeedSchedule,
    rng: StdRng,
}

impl PairingStrategy {
    pub fn new() -> Self {
        Self::with_rng_seed(7)
    }

    pub fn with_rng_seed(seed: u64) -> Self {
        Self {
            schedule: SeedSchedule::standard(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Hand position holding the card with the highest rank under this
    /// event's seeded deck ranking. Cards the ranking cannot resolve are
    /// logged and skipped.
    fn max_seeded_rank(&mut self, ctx: &StrategyContext) -> usize {
        let hand = ctx.view.hand();
        let Some(seed) = self.schedule.seed_for(ctx.view.played().len()) else {
            tracing::warn!(
                seat = %ctx.view.seat(),
                events = ctx.view.played().len(),
                "seed schedule exhausted, playing at random"
            );
            return self.rng.gen_range(0..hand.len());
        };

        let ranking = CardRanking::with_seed(ctx.deck.cards(), seed);
        let mut best: Option<(usize, u8)> = None;
        for (i, card) in hand.iter().enumerate() {
            let Some(rank) = ranking.rank_of(*card) else {
                tracing::warn!(seat = %ctx.view.seat(), card = %card, "card missing from ranking");
                continue;
            };
            if best.is_none_or(|(_, top)| rank > top) {
                best = Some((i, rank));
            }
        }
        match best {
            Some((i, _)) => i,
            None => self.rng.gen_range(0..hand.len()),
        }
    }
}

impl Default for PairingStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for PairingStrategy {
    fn choose_play(&mut self, ctx: &StrategyContext) -> Result<usize, PlayError> {
        let hand = ctx.view.hand();
        if hand.is_empty() {
            return Err(PlayError::EmptyHand {
                seat: ctx.view.seat(),
            });
        }

        // The partner's latest exposure signals the paired suit.
        if let Some(signal) = ctx.view.partner_exposed().last() {
            let wanted = signal.suit.paired();
            if let Some(pick) = hand
                .iter()
                .position(|card| card.suit == wanted && ValueGroup::of(card.rank) == ValueGroup::Low)
            {
                event!(Level::DEBUG, seat = %ctx.view.seat(), card = %hand[pick], "paired-suit low");
                return Ok(pick);
            }
        }

        if let Some(pick) = hand
            .iter()
            .position(|card| ValueGroup::of(card.rank) == ValueGroup::Low)
        {
            event!(Level::DEBUG, seat = %ctx.view.seat(), card = %hand[pick], "any low");
            return Ok(pick);
        }

        let pick = self.max_seeded_rank(ctx);
        event!(Level::DEBUG, seat = %ctx.view.seat(), card = %hand[pick], "seeded fallback");
        Ok(pick)
    }

    fn choose_guesses(&mut self, ctx: &StrategyContext) -> Vec<Card> {
        let want = usize::from(NUM_ROUNDS.saturating_sub(ctx.round));
        if want == 0 {
            return Vec::new();
        }

        let remaining: Vec<Card> = ctx
            .deck
            .cards()
            .iter()
            .copied()
            .filter(|card| !ctx.view.has_seen(*card))
            .collect();

        let mut guessed: Vec<Card> = match ctx.view.partner_exposed().last() {
            Some(signal) => remaining
                .iter()
                .copied()
                .filter(|card| card.suit == signal.suit.paired())
                .collect(),
            None => Vec::new(),
        };

        if guessed.len() < want {
            for card in &remaining {
                if ValueGroup::of(card.rank) == ValueGroup::Mid && !guessed.contains(card) {
                    guessed.push(*card);
                }
            }
        }

        if guessed.len() >= want {
            return guessed
                .choose_multiple(&mut self.rng, want)
                .copied()
                .collect();
        }

        let pool: Vec<Card> = remaining
            .into_iter()
            .filter(|card| !guessed.contains(card))
            .collect();
        let need = want - guessed.len();
        guessed.extend(pool.choose_multiple(&mut self.rng, need).copied());
        guessed
    }
}
