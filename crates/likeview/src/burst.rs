use egui::Pos2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{BurstConfig, Span};
use crate::particle::Particle;

/// Rolls a fresh cohort of particles around a center point.
#[derive(Clone, Debug)]
pub struct BurstGenerator {
    config: BurstConfig,
    rng: Pcg32,
}

impl BurstGenerator {
    pub fn new(config: BurstConfig) -> Self {
        Self {
            config,
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible generator; the same seed yields the same bursts.
    pub fn with_seed(config: BurstConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &BurstConfig {
        &self.config
    }

    pub fn generate(&mut self, center: Pos2) -> Vec<Particle> {
        let count = self.roll(self.config.count) as usize;
        let color = self.config.base_color();

        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let target_distance = self.roll(self.config.target_distance) as f32;
            let size = self.roll(self.config.size) as f32;
            let angle = self.roll(self.config.angle) as f32;
            particles.push(Particle::new(center, target_distance, size, angle, color));
        }
        particles
    }

    fn roll(&mut self, span: Span) -> u32 {
        self.rng.random_range(span.min..=span.max)
    }
}
