use super::*;
use crate::gameplay::*;
use crate::rng::Source;

/// Deterministic aggressor: min-raise when legal, else call, else check.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scripted;

impl Policy for Scripted {
    fn decide(&self, spot: &Spot, _: &mut Source) -> crate::Result<Action> {
        Ok(spot
            .find("Raise")
            .or_else(|| spot.find("Call"))
            .unwrap_or_else(|| spot.passive()))
    }
}

/// Calling station: check when possible, else call, else shove to call.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckCall;

impl Policy for CheckCall {
    fn decide(&self, spot: &Spot, _: &mut Source) -> crate::Result<Action> {
        Ok(spot
            .find("Check")
            .or_else(|| spot.find("Call"))
            .or_else(|| spot.find("Shove"))
            .unwrap_or(Action::Fold))
    }
}
