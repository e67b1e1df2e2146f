mod config;
mod demo;
mod script;
mod session;

use std::io;

use anyhow::Context;
use clap::Parser;
use vellum_engine::coords::Viewport;
use vellum_engine::logging::{init_logging, LoggingConfig};
use vellum_engine::render::TextRenderer;

use crate::config::StudioConfig;

fn main() -> anyhow::Result<()> {
    let config = StudioConfig::parse();

    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        timestamps: false,
        ..LoggingConfig::default()
    });

    let source = match &config.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => script::DEMO_SCRIPT.to_string(),
    };
    let steps = script::parse(&source)?;

    let viewport = Viewport::new(config.width as f32, config.height as f32);
    log::info!(
        "replaying {} steps ({} frames) at {}x{}",
        steps.len(),
        script::frame_count(&steps),
        config.width,
        config.height
    );

    let stdout = io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock());
    let state = session::run(&steps, viewport, &mut renderer)?;

    log::info!(
        "session done: clicks={} picked={:?} checkbox={} slider={} scroll=({}, {})",
        state.clicks,
        state.picked,
        state.checkbox,
        state.slider,
        state.showcase_scroll,
        state.list_scroll
    );

    Ok(())
}
