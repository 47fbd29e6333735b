// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Timed review comments and drawings for video.
//!
//! Loads a session description (API endpoint, credentials or share
//! token, version list) from the path given on the command line or the
//! `REVU_SESSION` environment variable, then runs the review window.

mod app;
mod engine;
mod io;
mod models;
mod playback;
mod sync;
mod ui;
mod util;

use anyhow::{Context, Result};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let session_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("REVU_SESSION").map(PathBuf::from))
        .context("Usage: revu <session.json> (or set REVU_SESSION)")?;
    let session = io::session::load_session(&session_path)?;

    let application = app::ReviewApp::new(session)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("REVU")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "REVU",
        options,
        Box::new(move |_cc| Ok(Box::new(application))),
    )
    .map_err(|e| anyhow::anyhow!("Window error: {}", e))?;

    Ok(())
}
