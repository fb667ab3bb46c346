use super::*;
use std::sync::Arc;

/// The one place tags become policies.
///
/// Holds the shared inference model so every NeuralNet seat in a batch
/// reads the same weights.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    inference: Arc<dyn Inference>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Arc::new(Mlp::zeroed()))
    }
}

impl Dispatcher {
    pub fn new(inference: Arc<dyn Inference>) -> Self {
        Self { inference }
    }
    pub fn resolve(&self, tag: AiType) -> Agent {
        match tag {
            AiType::Random => Agent::Random(Random),
            AiType::Scripted => Agent::Scripted(Scripted),
            AiType::CheckCall => Agent::CheckCall(CheckCall),
            AiType::TAG => Agent::Heuristic(Heuristic::tag()),
            AiType::LAG => Agent::Heuristic(Heuristic::lag()),
            AiType::MTAG => Agent::Heuristic(Heuristic::mtag()),
            AiType::NeuralNet => Agent::Neural(Neural::new(self.inference.clone())),
        }
    }
    /// Parses every raw tag, failing on the first unknown one.
    pub fn validate(tags: &[i32]) -> crate::Result<Vec<AiType>> {
        tags.iter().copied().map(AiType::try_from).collect()
    }
    /// One agent per seat, in seat order.
    pub fn seat(&self, tags: &[AiType]) -> Vec<Agent> {
        tags.iter().map(|t| self.resolve(*t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn unknown_tag_fails_fast() {
        assert!(matches!(
            Dispatcher::validate(&[0, 6, 42, 3]),
            Err(Error::InvalidPolicyTag(42))
        ));
    }

    #[test]
    fn resolves_every_tag() {
        let dispatcher = Dispatcher::default();
        let tags = Dispatcher::validate(&[0, 1, 2, 3, 4, 5, 6]).unwrap();
        let agents = dispatcher.seat(&tags);
        assert_eq!(agents.len(), 7);
        assert!(matches!(agents[0], Agent::Random(_)));
        assert!(matches!(agents[4], Agent::Heuristic(h) if h == Heuristic::lag()));
        assert!(matches!(agents[6], Agent::Neural(_)));
    }
}
