use super::features::N_INPUTS;
use super::features::N_OUTPUTS;
use crate::Error;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Opaque model behind [`Neural`](super::Neural) seats.
///
/// Shared read-only across every worker in a batch. Implementations may be
/// slow or fail; a failure ends the calling tournament and nothing else.
pub trait Inference: Send + Sync + std::fmt::Debug {
    fn infer(&self, features: &[f32]) -> crate::Result<Vec<f32>>;
}

/// One dense layer, row-major `outputs × inputs` weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub inputs: usize,
    pub outputs: usize,
    pub weights: Vec<f32>,
    pub biases: Vec<f32>,
}

/// Multi-layer perceptron with ReLU hidden activations and a linear head.
///
/// Loaded from a JSON manifest:
///
/// ```json
/// { "layers": [ { "inputs": 57, "outputs": 32, "weights": [...], "biases": [...] }, ... ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mlp {
    pub layers: Vec<Layer>,
}

impl Mlp {
    /// Single all-zero layer. Every legal action gets the same logit.
    pub fn zeroed() -> Self {
        Self {
            layers: vec![Layer {
                inputs: N_INPUTS,
                outputs: N_OUTPUTS,
                weights: vec![0.; N_INPUTS * N_OUTPUTS],
                biases: vec![0.; N_OUTPUTS],
            }],
        }
    }
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let mlp = serde_json::from_str::<Self>(json)
            .map_err(|e| Error::InvalidConfiguration(format!("weights: {}", e)))?;
        mlp.validate()?;
        Ok(mlp)
    }
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let json = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::InvalidConfiguration(format!("weights {}: {}", path.as_ref().display(), e))
        })?;
        Self::from_json_str(&json)
    }
    /// Checks layer shapes chain from the observation to the head.
    pub fn validate(&self) -> crate::Result<()> {
        let invalid = |reason: String| Err(Error::InvalidConfiguration(reason));
        let mut width = N_INPUTS;
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.inputs != width {
                return invalid(format!("layer {} takes {} inputs, expected {}", i, layer.inputs, width));
            }
            if layer.weights.len() != layer.inputs * layer.outputs {
                return invalid(format!("layer {} has {} weights", i, layer.weights.len()));
            }
            if layer.biases.len() != layer.outputs {
                return invalid(format!("layer {} has {} biases", i, layer.biases.len()));
            }
            width = layer.outputs;
        }
        match (self.layers.len(), width) {
            (0, _) => invalid("no layers".to_string()),
            (_, N_OUTPUTS) => Ok(()),
            (_, w) => invalid(format!("head has {} outputs, expected {}", w, N_OUTPUTS)),
        }
    }
    fn forward(layer: &Layer, input: &[f32]) -> Vec<f32> {
        layer
            .weights
            .chunks(layer.inputs)
            .zip(layer.biases.iter())
            .map(|(row, b)| row.iter().zip(input).map(|(w, x)| w * x).sum::<f32>() + b)
            .collect()
    }
}

impl Default for Mlp {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Inference for Mlp {
    fn infer(&self, features: &[f32]) -> crate::Result<Vec<f32>> {
        if features.len() != N_INPUTS {
            return Err(Error::InferenceFailure(format!(
                "expected {} features, got {}",
                N_INPUTS,
                features.len()
            )));
        }
        let last = self.layers.len().saturating_sub(1);
        let output = self
            .layers
            .iter()
            .enumerate()
            .fold(features.to_vec(), |x, (i, layer)| {
                let mut y = Self::forward(layer, &x);
                if i < last {
                    y.iter_mut().for_each(|v| *v = v.max(0.));
                }
                y
            });
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_is_valid_and_flat() {
        let mlp = Mlp::zeroed();
        assert!(mlp.validate().is_ok());
        assert_eq!(mlp.infer(&[1.; N_INPUTS]).unwrap(), vec![0.; N_OUTPUTS]);
    }

    #[test]
    fn wrong_feature_width_fails_inference() {
        assert!(matches!(
            Mlp::zeroed().infer(&[0.; 3]),
            Err(Error::InferenceFailure(_))
        ));
    }

    #[test]
    fn hidden_layers_rectify() {
        let hidden = Layer {
            inputs: N_INPUTS,
            outputs: 1,
            weights: vec![-1.; N_INPUTS],
            biases: vec![0.],
        };
        let head = Layer {
            inputs: 1,
            outputs: N_OUTPUTS,
            weights: vec![1.; N_OUTPUTS],
            biases: vec![0.5; N_OUTPUTS],
        };
        let mlp = Mlp {
            layers: vec![hidden, head],
        };
        assert!(mlp.validate().is_ok());
        assert_eq!(mlp.infer(&[1.; N_INPUTS]).unwrap(), vec![0.5; N_OUTPUTS]);
    }

    #[test]
    fn json_round_trip_and_shape_errors() {
        let json = serde_json::to_string(&Mlp::zeroed()).unwrap();
        assert_eq!(Mlp::from_json_str(&json).unwrap(), Mlp::zeroed());
        let mut broken = Mlp::zeroed();
        broken.layers[0].biases.pop();
        let json = serde_json::to_string(&broken).unwrap();
        assert!(matches!(
            Mlp::from_json_str(&json),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(Mlp::from_json_str("{}").is_err());
    }
}
