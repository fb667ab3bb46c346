//! Fixed-width observation encoding for learned policies.
//!
//! | offset | width | contents                                             |
//! |--------|-------|------------------------------------------------------|
//! | 0      | 5     | legal mask over [`CHOICES`]                          |
//! | 5      | 35    | 2 hole + 5 board cards, each `rank/14` + suit one-hot |
//! | 40     | 4     | to-call, stack, pot, spent over total chips          |
//! | 44     | 10    | one-hot seat offset from the button                  |
//! | 54     | 1     | ranking category / 8                                 |
//! | 55     | 2     | active and remaining seats over entrants             |
//!
//! The head is 5 choice logits followed by a raise fraction in `[0, 1]`
//! of the way from the min-raise to all-in.
use crate::Error;
use crate::MAX_PLAYERS;
use crate::Probability;
use crate::cards::*;
use crate::gameplay::*;
use crate::rng::Source;

pub const N_INPUTS: usize = 57;
pub const N_OUTPUTS: usize = 6;
/// Action kinds in head order.
pub const CHOICES: [&str; 5] = ["Fold", "Check", "Call", "Raise", "Shove"];

pub fn encode(spot: &Spot) -> Vec<f32> {
    let mut x = Vec::with_capacity(N_INPUTS);
    x.extend(CHOICES.iter().map(|c| spot.may(c) as u8 as f32));
    let (hi, lo) = spot.hole().cards();
    let cards = [Some(hi), Some(lo)]
        .into_iter()
        .chain((0..5).map(|i| spot.board().cards().get(i).copied()));
    for card in cards {
        match card {
            Some(card) => {
                x.push(card.rank().pips() as f32 / 14.);
                x.extend(Suit::all().iter().map(|s| (card.suit() == *s) as u8 as f32));
            }
            None => x.extend([0.; 5]),
        }
    }
    let chips = spot.chips().max(1) as f32;
    x.push(spot.to_call() as f32 / chips);
    x.push(spot.stack() as f32 / chips);
    x.push(spot.pot() as f32 / chips);
    x.push(spot.spent() as f32 / chips);
    x.extend((0..MAX_PLAYERS).map(|i| (spot.offset() == i) as u8 as f32));
    x.push(spot.strength().ranking().category() as f32 / 8.);
    let entrants = spot.entrants().max(1) as f32;
    x.push(spot.active() as f32 / entrants);
    x.push(spot.seats() as f32 / entrants);
    debug_assert_eq!(x.len(), N_INPUTS);
    x
}

/// Samples an action from the network head, masked to legal choices.
pub fn decode(spot: &Spot, head: &[f32], rng: &mut Source) -> crate::Result<Action> {
    if head.len() != N_OUTPUTS {
        return Err(Error::InferenceFailure(format!(
            "expected {} outputs, got {}",
            N_OUTPUTS,
            head.len()
        )));
    }
    if head.iter().any(|y| !y.is_finite()) {
        return Err(Error::InferenceFailure("non-finite output".to_string()));
    }
    let logits = &head[..CHOICES.len()];
    let max = CHOICES
        .iter()
        .zip(logits)
        .filter(|(c, _)| spot.may(c))
        .map(|(_, y)| *y)
        .fold(f32::NEG_INFINITY, f32::max);
    let weights = CHOICES
        .iter()
        .zip(logits)
        .map(|(c, y)| match spot.may(c) {
            true => (y - max).exp() as Probability,
            false => 0.,
        })
        .collect::<Vec<Probability>>();
    let choice = CHOICES[rng.weighted(&weights)];
    match spot.find(choice) {
        Some(Action::Raise(_)) => {
            let fraction = head[CHOICES.len()].clamp(0., 1.);
            let room = (spot.stack() - 1 - spot.to_raise()) as f32;
            Ok(Action::Raise(spot.to_raise() + (fraction * room) as crate::Chips))
        }
        Some(action) => Ok(action),
        None => Ok(spot.passive()),
    }
}

/// Supervised target for a taken action: choice one-hot and raise fraction.
pub fn target(spot: &Spot, action: &Action) -> [f32; N_OUTPUTS] {
    let mut y = [0.; N_OUTPUTS];
    if let Some(i) = CHOICES.iter().position(|c| *c == action.label()) {
        y[i] = 1.;
    }
    if let Action::Raise(amount) = action {
        let room = (spot.stack() - 1 - spot.to_raise()).max(1) as f32;
        y[CHOICES.len()] = ((amount - spot.to_raise()) as f32 / room).clamp(0., 1.);
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot() -> Spot {
        let mut game = Game::new(
            vec![
                (Hole::try_from("As Ks").unwrap(), 1000),
                (Hole::try_from("7c 2d").unwrap(), 1000),
                (Hole::try_from("Qh Qd").unwrap(), 1000),
            ],
            0,
            25,
            50,
        );
        while game.must_post() {
            game.act(game.posts());
        }
        game.spot().within(4, 4000)
    }

    #[test]
    fn encoding_has_fixed_width() {
        let x = encode(&spot());
        assert_eq!(x.len(), N_INPUTS);
        assert_eq!(&x[..5], &[1., 0., 1., 1., 1.]);
        assert_eq!(x[5], 14. / 14.);
        assert_eq!(x[44], 1.);
        assert_eq!(x[55], 3. / 4.);
    }

    #[test]
    fn decode_respects_mask() {
        let spot = spot();
        let ref mut rng = Source::from(5);
        let head = [0., 100., 0., 0., 0., 0.5];
        for _ in 0..50 {
            let action = decode(&spot, &head, rng).unwrap();
            assert!(spot.legal().contains(&action) || action.is_aggro());
            assert_ne!(action, Action::Check);
        }
    }

    #[test]
    fn decode_rejects_bad_shape() {
        let ref mut rng = Source::from(5);
        assert!(matches!(
            decode(&spot(), &[0.; 3], rng),
            Err(Error::InferenceFailure(_))
        ));
        assert!(matches!(
            decode(&spot(), &[f32::NAN; 6], rng),
            Err(Error::InferenceFailure(_))
        ));
    }

    #[test]
    fn target_one_hot() {
        let spot = spot();
        assert_eq!(target(&spot, &Action::Fold), [1., 0., 0., 0., 0., 0.]);
        let y = target(&spot, &Action::Raise(spot.to_raise()));
        assert_eq!(y[3], 1.);
        assert_eq!(y[5], 0.);
    }
}
