use crate::Error;

/// Stable integer identifiers for seat policies.
///
/// The integers are part of the record format and the batch configuration,
/// so variants may be added but never renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AiType {
    Random = 0,
    Scripted = 1,
    CheckCall = 2,
    TAG = 3,
    LAG = 4,
    MTAG = 5,
    NeuralNet = 6,
}

impl AiType {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Random,
            Self::Scripted,
            Self::CheckCall,
            Self::TAG,
            Self::LAG,
            Self::MTAG,
            Self::NeuralNet,
        ]
    }
}

impl TryFrom<i32> for AiType {
    type Error = Error;
    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Random),
            1 => Ok(Self::Scripted),
            2 => Ok(Self::CheckCall),
            3 => Ok(Self::TAG),
            4 => Ok(Self::LAG),
            5 => Ok(Self::MTAG),
            6 => Ok(Self::NeuralNet),
            _ => Err(Error::InvalidPolicyTag(tag)),
        }
    }
}

impl From<AiType> for i32 {
    fn from(tag: AiType) -> Self {
        tag as i32
    }
}
impl From<AiType> for i8 {
    fn from(tag: AiType) -> Self {
        tag as i8
    }
}

impl TryFrom<&str> for AiType {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "RANDOM" => Ok(Self::Random),
            "SCRIPTED" => Ok(Self::Scripted),
            "CHECKCALL" => Ok(Self::CheckCall),
            "TAG" => Ok(Self::TAG),
            "LAG" => Ok(Self::LAG),
            "MTAG" => Ok(Self::MTAG),
            "NEURALNET" | "NN" => Ok(Self::NeuralNet),
            other => Ok(Self::try_from(other.parse::<i32>()?)?),
        }
    }
}

impl std::fmt::Display for AiType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "Random"),
            Self::Scripted => write!(f, "Scripted"),
            Self::CheckCall => write!(f, "CheckCall"),
            Self::TAG => write!(f, "TAG"),
            Self::LAG => write!(f, "LAG"),
            Self::MTAG => write!(f, "MTAG"),
            Self::NeuralNet => write!(f, "NeuralNet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_stable() {
        for tag in AiType::all() {
            assert_eq!(AiType::try_from(i32::from(*tag)).ok(), Some(*tag));
        }
        assert_eq!(i32::from(AiType::NeuralNet), 6);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(matches!(
            AiType::try_from(7),
            Err(Error::InvalidPolicyTag(7))
        ));
        assert!(matches!(
            AiType::try_from(-1),
            Err(Error::InvalidPolicyTag(-1))
        ));
    }

    #[test]
    fn names_and_numbers_parse() {
        assert_eq!(AiType::try_from("lag").ok(), Some(AiType::LAG));
        assert_eq!(AiType::try_from("6").ok(), Some(AiType::NeuralNet));
        assert!(AiType::try_from("shark").is_err());
    }
}
