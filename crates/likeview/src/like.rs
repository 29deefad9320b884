use egui::Pos2;

use crate::config::BurstConfig;
use crate::engine::{FrameResult, ParticleEngine};

/// The pair of icon handles a like button switches between.
///
/// Handles are opaque here; only the host's icon painter interprets them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeIcons<I> {
    pub liked: I,
    pub unliked: I,
}

impl<I> LikeIcons<I> {
    pub fn new(liked: I, unliked: I) -> Self {
        Self { liked, unliked }
    }
}

/// State behind one on-screen like button: the liked flag, its icons and the
/// particle engine that celebrates each tap.
#[derive(Clone, Debug)]
pub struct LikeView<I> {
    liked: bool,
    icons: LikeIcons<I>,
    engine: ParticleEngine,
}

impl<I> LikeView<I> {
    pub fn new(icons: LikeIcons<I>, config: BurstConfig) -> Self {
        Self::with_engine(icons, ParticleEngine::new(config))
    }

    pub fn with_engine(icons: LikeIcons<I>, engine: ParticleEngine) -> Self {
        Self {
            liked: false,
            icons,
            engine,
        }
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    /// Sets the flag without a burst.
    pub fn set_liked(&mut self, liked: bool) {
        self.liked = liked;
    }

    /// Icon matching the current state.
    pub fn icon(&self) -> &I {
        if self.liked {
            &self.icons.liked
        } else {
            &self.icons.unliked
        }
    }

    pub fn icons(&self) -> &LikeIcons<I> {
        &self.icons
    }

    pub fn set_icons(&mut self, liked: I, unliked: I) {
        self.icons = LikeIcons::new(liked, unliked);
    }

    /// Flips the liked state and fires a burst around `center`.
    /// Returns the new state.
    pub fn on_tap(&mut self, center: Pos2) -> bool {
        self.liked = !self.liked;
        log::debug!("like toggled to {}", self.liked);
        self.engine.on_trigger(center);
        self.liked
    }

    pub fn on_frame(&mut self, now_ms: u64) -> FrameResult {
        self.engine.on_frame(now_ms)
    }

    pub fn is_animating(&self) -> bool {
        self.engine.is_running()
    }

    pub fn engine(&self) -> &ParticleEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ParticleEngine {
        &mut self.engine
    }
}
