use std::path::PathBuf;

/// Everything that can go wrong between configuring a batch and reading its
/// records back.
///
/// The first two variants are configuration-level and abort a batch before
/// any tournament starts. `InferenceFailure` and `SerializationFailure` are
/// scoped to the tournament that raised them. The last two only come out of
/// the record readers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("invalid policy tag {0}")]
    InvalidPolicyTag(i32),
    #[error("inference failed: {0}")]
    InferenceFailure(String),
    #[error("failed to write {path}: {source}")]
    SerializationFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record {path}: {reason}")]
    MalformedRecord { path: PathBuf, reason: String },
    #[error("record not found: {0}")]
    RecordNotFound(PathBuf),
}

impl Error {
    /// True for errors that must stop a batch before it starts.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfiguration(_) | Self::InvalidPolicyTag(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
