//! Cards, hands and hand evaluation.
//!
//! - [`Card`]: a `(Rank, Suit)` encoded in one byte
//! - [`Hand`]: an unordered set of cards as a 64-bit mask
//! - [`Hole`] / [`Board`]: private and community cards
//! - [`Deck`]: a seeded, shuffled deck dealt from the top
//! - [`Evaluator`] → [`Strength`] = [`Ranking`] + [`Kickers`]
mod board;
mod card;
mod deck;
mod evaluator;
mod hand;
mod hole;
mod kicks;
mod rank;
mod ranking;
mod street;
mod strength;
mod suit;

pub use board::*;
pub use card::*;
pub use deck::*;
pub use evaluator::*;
pub use hand::*;
pub use hole::*;
pub use kicks::*;
pub use rank::*;
pub use ranking::*;
pub use street::*;
pub use strength::*;
pub use suit::*;
