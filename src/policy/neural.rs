use super::*;
use crate::gameplay::*;
use crate::rng::Source;
use std::sync::Arc;

/// Learned policy: encode the spot, ask the model, sample its masked head.
#[derive(Debug, Clone)]
pub struct Neural {
    inference: Arc<dyn Inference>,
}

impl Neural {
    pub fn new(inference: Arc<dyn Inference>) -> Self {
        Self { inference }
    }
}

impl Policy for Neural {
    fn decide(&self, spot: &Spot, rng: &mut Source) -> crate::Result<Action> {
        let head = self.inference.infer(&features::encode(spot))?;
        features::decode(spot, &head, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::cards::*;

    #[derive(Debug)]
    struct Broken;
    impl Inference for Broken {
        fn infer(&self, _: &[f32]) -> crate::Result<Vec<f32>> {
            Err(Error::InferenceFailure("offline".to_string()))
        }
    }

    fn spot() -> Spot {
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
        game.spot()
    }

    #[test]
    fn zeroed_model_plays_legal() {
        let neural = Neural::new(Arc::new(Mlp::zeroed()));
        let ref mut rng = Source::from(1);
        let spot = spot();
        for _ in 0..50 {
            let action = neural.decide(&spot, rng).unwrap();
            assert!(spot.legal().iter().any(|a| a.label() == action.label()));
        }
    }

    #[test]
    fn failures_propagate() {
        let neural = Neural::new(Arc::new(Broken));
        let ref mut rng = Source::from(1);
        assert!(matches!(
            neural.decide(&spot(), rng),
            Err(Error::InferenceFailure(_))
        ));
    }
}
