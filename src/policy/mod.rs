mod chart;
mod dispatcher;
pub mod features;
mod heuristic;
mod inference;
mod neural;
mod random;
mod scripted;
mod tag;

pub use chart::*;
pub use dispatcher::*;
pub use heuristic::*;
pub use inference::*;
pub use neural::*;
pub use random::*;
pub use scripted::*;
pub use tag::*;

use crate::gameplay::Action;
use crate::gameplay::Spot;
use crate::rng::Source;

/// Anything that can pick an action for the seat to act.
///
/// Policies see only the [`Spot`] and draw randomness only from the
/// tournament's [`Source`]. They may return any action; the table snaps it
/// to the nearest legal one before applying it.
pub trait Policy: Send + Sync {
    fn decide(&self, spot: &Spot, rng: &mut Source) -> crate::Result<Action>;
}

/// A seat's resolved policy.
#[derive(Debug, Clone)]
pub enum Agent {
    Random(Random),
    Scripted(Scripted),
    CheckCall(CheckCall),
    Heuristic(Heuristic),
    Neural(Neural),
}

impl Policy for Agent {
    fn decide(&self, spot: &Spot, rng: &mut Source) -> crate::Result<Action> {
        match self {
            Self::Random(p) => p.decide(spot, rng),
            Self::Scripted(p) => p.decide(spot, rng),
            Self::CheckCall(p) => p.decide(spot, rng),
            Self::Heuristic(p) => p.decide(spot, rng),
            Self::Neural(p) => p.decide(spot, rng),
        }
    }
}
