use super::*;
use crate::gameplay::*;
use crate::rng::Source;

/// Picks uniformly among legal actions. Raises draw their size uniformly
/// from the legal raise range `[to_raise, stack)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Random;

impl Policy for Random {
    fn decide(&self, spot: &Spot, rng: &mut Source) -> crate::Result<Action> {
        let legal = spot.legal();
        match legal[rng.uniform(0..legal.len())] {
            Action::Raise(_) => Ok(Action::Raise(rng.uniform(spot.to_raise()..spot.stack()))),
            action => Ok(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::*;

    #[test]
    fn always_legal() {
        let mut rng = Source::from(11);
        for _ in 0..200 {
            let mut game = Game::new(
                vec![
                    (Hole::try_from("As Ks").unwrap(), 1000),
                    (Hole::try_from("7c 2d").unwrap(), 1000),
                ],
                0,
                25,
                50,
            );
            while game.must_post() {
                game.act(game.posts());
            }
            let action = Random.decide(&game.spot(), &mut rng).unwrap();
            assert!(game.is_allowed(&action), "{}", action);
        }
    }
}
