use std::path::PathBuf;

/// Errors raised while loading or validating a [`crate::BurstConfig`].
///
/// The particle engine itself has no failure modes; only the configuration
/// surface can reject input.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read burst config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed burst config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("`{field}` range is inverted: min {min} > max {max}")]
    InvertedRange { field: &'static str, min: u32, max: u32 },

    #[error("`count` must allow at least one particle")]
    EmptyBurst,

    #[error("animation duration must be positive")]
    ZeroDuration,

    #[error("`count` allows up to {max} particles, limit is {limit}")]
    TooManyParticles { max: u32, limit: u32 },

    #[error("`angle` reaches {max} degrees, limit is 360")]
    AngleOutOfRange { max: u32 },

    #[error("`{field}` reaches {max}, limit is {limit}")]
    ExceedsLimit { field: &'static str, max: u32, limit: u32 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
