//! Burst lifecycle: generate on trigger, advance once per display refresh,
//! retire particles as they land.
//!
//! The engine owns no timer. The host calls [`ParticleEngine::on_frame`]
//! with its own clock for as long as the previous call reported
//! `completed == false`.

use egui::Pos2;

use crate::burst::BurstGenerator;
use crate::config::BurstConfig;
use crate::easing::{decelerate, fast_out_slow_in};
use crate::particle::{Particle, ParticleVisual};

/// One particle's state at a given point of the animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub distance: f32,
    pub alpha: u8,
    pub done: bool,
}

/// Computes where `particle` is `elapsed_ms` into an animation lasting
/// `duration_ms`.
///
/// Distance follows [`fast_out_slow_in`]. Alpha is
/// `255 - trunc(base * decelerate(t)) / 3 * 2`, truncating before the
/// integer division, so a particle still in flight never fades below a third
/// of full opacity and drops to zero only once it lands.
pub fn advance(particle: &Particle, elapsed_ms: u64, duration_ms: u32) -> Frame {
    let path_gone = elapsed_ms as f32 / duration_ms.max(1) as f32;
    if path_gone >= 1.0 {
        return Frame {
            distance: particle.target_distance,
            alpha: 0,
            done: true,
        };
    }

    let distance = particle.target_distance * fast_out_slow_in(path_gone);
    let faded = (f32::from(particle.color.a()) * decelerate(path_gone)) as u8;
    Frame {
        distance,
        alpha: u8::MAX - faded / 3 * 2,
        done: distance == particle.target_distance,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// No particles and no clock.
    Idle,
    /// A burst is live; the host must keep requesting frames.
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameResult {
    /// The burst is over and no further frames are needed.
    pub completed: bool,
}

#[derive(Clone, Debug)]
pub struct ParticleEngine {
    generator: BurstGenerator,
    particles: Vec<Particle>,
    start_ms: Option<u64>,
    dirty: bool,
}

impl Default for ParticleEngine {
    fn default() -> Self {
        Self::new(BurstConfig::default())
    }
}

impl ParticleEngine {
    pub fn new(config: BurstConfig) -> Self {
        Self::from_generator(BurstGenerator::new(config))
    }

    pub fn with_seed(config: BurstConfig, seed: u64) -> Self {
        Self::from_generator(BurstGenerator::with_seed(config, seed))
    }

    pub fn from_generator(generator: BurstGenerator) -> Self {
        Self {
            generator,
            particles: Vec::new(),
            start_ms: None,
            dirty: false,
        }
    }

    pub fn config(&self) -> &BurstConfig {
        self.generator.config()
    }

    /// Replaces whatever burst is in flight with a fresh one around `center`.
    /// The clock starts on the next [`ParticleEngine::on_frame`].
    pub fn on_trigger(&mut self, center: Pos2) {
        self.particles = self.generator.generate(center);
        self.start_ms = None;
        self.dirty = true;
        log::debug!(
            "burst of {} particles at ({:.1}, {:.1})",
            self.particles.len(),
            center.x,
            center.y
        );
    }

    pub fn on_frame(&mut self, now_ms: u64) -> FrameResult {
        if self.particles.is_empty() {
            self.start_ms = None;
            return FrameResult { completed: true };
        }

        let start = *self.start_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start);
        let duration = self.generator.config().duration_ms;

        // Rebuild the store from the previous frame instead of removing in place.
        self.particles = std::mem::take(&mut self.particles)
            .into_iter()
            .filter_map(|mut particle| {
                let frame = advance(&particle, elapsed, duration);
                if frame.done {
                    return None;
                }
                particle.current_distance = frame.distance.max(particle.current_distance);
                particle.alpha = frame.alpha;
                Some(particle)
            })
            .collect();

        log::trace!("frame at +{elapsed}ms, {} particles live", self.particles.len());

        if self.particles.is_empty() {
            self.start_ms = None;
            log::debug!("burst finished after {elapsed}ms");
            return FrameResult { completed: true };
        }
        FrameResult { completed: false }
    }

    /// Current visual state of every live particle, in insertion order.
    pub fn render(&self) -> impl Iterator<Item = ParticleVisual> + '_ {
        self.particles.iter().map(Particle::visual)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn state(&self) -> EngineState {
        if self.particles.is_empty() {
            EngineState::Idle
        } else {
            EngineState::Running
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == EngineState::Running
    }

    /// Timestamp of the first frame of the current burst, if it has started.
    pub fn start_time(&self) -> Option<u64> {
        self.start_ms
    }

    /// Returns whether a trigger happened since the last call, clearing the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
