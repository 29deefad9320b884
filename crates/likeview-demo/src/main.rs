mod app;
mod ui;

use anyhow::{Context, Result};
use eframe::NativeOptions;
use likeview::BurstConfig;

use crate::app::LikeDemoApp;

/// Usage: `likeview-demo [burst-config.json]`
fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => BurstConfig::load(&path)
            .with_context(|| format!("Failed to load burst config from {path}"))?,
        None => BurstConfig::default(),
    };
    log::debug!("starting with {config:?}");

    let native_options = NativeOptions::default();
    eframe::run_native(
        "LikeView",
        native_options,
        Box::new(|cc| Ok(Box::new(LikeDemoApp::new(cc, config)))),
    )
    .map_err(|err| anyhow::anyhow!("Failed to start native app: {err}"))
}
