pub mod card;
pub mod deck;
pub mod rank;
pub mod seat;
pub mod suit;
pub mod view;
