#![deny(clippy::all, clippy::pedantic)]
//! # Logo viewer
//!
//! Entry point for the viewer binary. Opens a window, spins the logo and
//! exposes the debug panel on the first key press. The process takes no
//! arguments: the model path is fixed and every tunable resets to its
//! hard-coded default on restart.

use std::path::Path;

use anyhow::Result;

/// Fixed location of the logo asset, relative to the working directory.
const MODEL_PATH: &str = "models/logo.glb";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("starting viewer, loading model from {MODEL_PATH}");
    render::run(Path::new(MODEL_PATH))
}
