//! A like button for egui that celebrates each tap with a short burst of
//! confetti-style particles.
//!
//! [`ParticleEngine`] is the host-driven animation core: trigger a burst,
//! call [`ParticleEngine::on_frame`] once per display refresh until it
//! reports completion, and draw what [`ParticleEngine::render`] yields.
//! [`LikeView`] pairs an engine with liked/unliked state, and
//! [`LikeButton`] puts both on screen.

pub mod burst;
pub mod config;
pub mod easing;
pub mod engine;
pub mod error;
pub mod like;
pub mod particle;
pub mod widget;

pub use burst::BurstGenerator;
pub use config::{
    BurstConfig, Span, ANIMATION_DURATION_MS, LEGACY_PARTICLE_COUNT, MAX_PARTICLE_COUNT,
    PARTICLE_COUNT,
};
pub use engine::{advance, EngineState, Frame, FrameResult, ParticleEngine};
pub use error::{ConfigError, Result};
pub use like::{LikeIcons, LikeView};
pub use particle::{with_alpha, Particle, ParticleVisual};
pub use widget::{LikeButton, DEFAULT_ICON_SIZE};
