use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Length of one burst animation.
pub const ANIMATION_DURATION_MS: u32 = 300;

/// Particle count per burst, both ends inclusive.
pub const PARTICLE_COUNT: Span = Span::new(12, 15);

/// Count range with the historical off-by-one: a bound drawn from 12..=15
/// followed by a loop over `0..=bound`, which adds one extra particle.
pub const LEGACY_PARTICLE_COUNT: Span = Span::new(13, 16);

/// Most particles a single burst may hold.
pub const MAX_PARTICLE_COUNT: u32 = 64;

/// Farthest a particle may travel from the icon center.
pub const MAX_TARGET_DISTANCE: u32 = 1_000;

/// Largest particle radius.
pub const MAX_PARTICLE_SIZE: u32 = 100;

/// Largest travel angle in degrees.
pub const MAX_ANGLE: u32 = 360;

/// Base color of every particle (alpha is replaced per frame).
pub const PARTICLE_COLOR: [u8; 3] = [228, 13, 86];

/// Inclusive integer range. Sampled values are whole numbers, matching the
/// integer ranges the burst recipe was tuned with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub min: u32,
    pub max: u32,
}

impl Span {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: u32) -> Self {
        Self::new(value, value)
    }

    pub fn contains(self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(self, field: &'static str) -> Result<()> {
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    fn check_limit(self, field: &'static str, limit: u32) -> Result<()> {
        if self.max > limit {
            return Err(ConfigError::ExceedsLimit {
                field,
                max: self.max,
                limit,
            });
        }
        Ok(())
    }
}

/// The burst recipe: how many particles, how far they travel, how big they
/// are, which directions they take and how long the animation runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    pub count: Span,
    pub target_distance: Span,
    pub size: Span,
    /// Degrees, measured from the +y axis.
    pub angle: Span,
    pub duration_ms: u32,
    pub color: [u8; 3],
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            target_distance: Span::new(60, 70),
            size: Span::new(2, 6),
            angle: Span::new(0, 360),
            duration_ms: ANIMATION_DURATION_MS,
            color: PARTICLE_COLOR,
        }
    }
}

impl BurstConfig {
    /// Same recipe as [`Default`], but with [`LEGACY_PARTICLE_COUNT`].
    pub fn legacy() -> Self {
        Self {
            count: LEGACY_PARTICLE_COUNT,
            ..Self::default()
        }
    }

    pub fn base_color(&self) -> Color32 {
        let [r, g, b] = self.color;
        Color32::from_rgb(r, g, b)
    }

    /// # Errors
    ///
    /// Fails when a range is inverted or exceeds its limit, the count allows
    /// no particles, or the duration is zero.
    pub fn validate(&self) -> Result<()> {
        self.count.validate("count")?;
        self.target_distance.validate("target_distance")?;
        self.size.validate("size")?;
        self.angle.validate("angle")?;
        if self.count.max == 0 {
            return Err(ConfigError::EmptyBurst);
        }
        if self.count.max > MAX_PARTICLE_COUNT {
            return Err(ConfigError::TooManyParticles {
                max: self.count.max,
                limit: MAX_PARTICLE_COUNT,
            });
        }
        if self.angle.max > MAX_ANGLE {
            return Err(ConfigError::AngleOutOfRange { max: self.angle.max });
        }
        self.target_distance
            .check_limit("target_distance", MAX_TARGET_DISTANCE)?;
        self.size.check_limit("size", MAX_PARTICLE_SIZE)?;
        if self.duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON, otherwise whatever
    /// [`BurstConfig::validate`] reports.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if let Err(err) = config.validate() {
            log::warn!("rejecting burst config: {err}");
            return Err(err);
        }
        Ok(config)
    }

    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file can't be read, otherwise as
    /// [`BurstConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::debug!("loaded burst config from {}", path.display());
        Ok(config)
    }
}
