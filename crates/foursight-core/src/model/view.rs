use crate::model::card::Card;
use crate::model::seat::Seat;

/// One completed guess round: the cards guessed and the number the scorer
/// verified as correct. Keeping the pair in one record guarantees the two
/// histories never drift out of step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub cards: Vec<Card>,
    pub correct: u8,
}

impl GuessRecord {
    pub fn new(cards: Vec<Card>, correct: u8) -> Self {
        Self { cards, correct }
    }

    /// A fully wrong guess: none of the guessed cards can be among the
    /// sought ones, so all of them are hard-excludable.
    pub fn is_fully_wrong(&self) -> bool {
        self.correct == 0
    }
}

/// Read-only snapshot of one player's public knowledge, owned by the table
/// engine. The decision core only reads it and returns fresh values.
#[derive(Debug, Clone)]
pub struct PlayerView {
    seat: Seat,
    hand: Vec<Card>,
    played: Vec<Card>,
    exposed: [Vec<Card>; 4],
    history: Vec<GuessRecord>,
}

impl PlayerView {
    pub fn new(seat: Seat, hand: Vec<Card>) -> Self {
        Self::from_parts(seat, hand, Vec::new(), Default::default(), Vec::new())
    }

    pub fn from_parts(
        seat: Seat,
        hand: Vec<Card>,
        played: Vec<Card>,
        exposed: [Vec<Card>; 4],
        history: Vec<GuessRecord>,
    ) -> Self {
        Self {
            seat,
            hand,
            played,
            exposed,
            history,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Hand in the table engine's order. Play selection returns an index
    /// into this slice, so the order must be preserved as given.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn played(&self) -> &[Card] {
        &self.played
    }

    /// Cards `seat` has voluntarily revealed, in chronological order.
    pub fn exposed(&self, seat: Seat) -> &[Card] {
        &self.exposed[seat.index()]
    }

    pub fn partner_exposed(&self) -> &[Card] {
        self.exposed(self.seat.partner())
    }

    pub fn opponent_exposed(&self) -> [&[Card]; 2] {
        let [a, b] = self.seat.opponents();
        [self.exposed(a), self.exposed(b)]
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// True when `card` is publicly accounted for from this player's point
    /// of view: in hand, already played, or exposed by anyone.
    pub fn has_seen(&self, card: Card) -> bool {
        self.hand.contains(&card)
            || self.played.contains(&card)
            || self.exposed.iter().any(|cards| cards.contains(&card))
    }

    pub fn is_partner_exposed(&self, card: Card) -> bool {
        self.partner_exposed().contains(&card)
    }

    pub fn is_opponent_exposed(&self, card: Card) -> bool {
        self.opponent_exposed()
            .iter()
            .any(|cards| cards.contains(&card))
    }
}
