//! Trace replay driver.
//!
//! Reads a recorded hand-tracking trace, runs it through the gesture
//! pipeline, and writes the resulting pointer actions as JSON (or logs
//! them when no output path is given).

use anyhow::{bail, Context, Result};
use gesture_mouse::config::GestureConfig;
use gesture_mouse::processing::{replay_trace, RecordedTrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gesture_mouse=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        bail!(
            "usage: {} <trace.json> [actions-out.json] [config.json]",
            args[0]
        );
    }

    let config = match args.get(3) {
        Some(path) => GestureConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path))?,
        None => GestureConfig::default(),
    };

    let content = std::fs::read_to_string(&args[1])
        .with_context(|| format!("failed to read trace {}", args[1]))?;
    let trace: RecordedTrace =
        serde_json::from_str(&content).with_context(|| format!("failed to parse {}", args[1]))?;

    tracing::info!(
        "replaying {} frames against a {}x{} screen",
        trace.frames.len(),
        trace.screen_width,
        trace.screen_height
    );

    let actions = replay_trace(&trace, &config);
    tracing::info!("replay produced {} pointer actions", actions.len());

    match args.get(2) {
        Some(out) => {
            let json = serde_json::to_vec_pretty(&actions)?;
            std::fs::write(out, json).with_context(|| format!("failed to write {}", out))?;
            tracing::info!("wrote {} actions to {}", actions.len(), out);
        }
        None => {
            for action in &actions {
                println!("{}", serde_json::to_string(action)?);
            }
        }
    }

    Ok(())
}
