//! PDF drop-merge desktop tool
//!
//! Drag PDF files into the list, press "Merge PDFs", pick a destination.

use anyhow::anyhow;
use eframe::egui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pdf_dropmerge::ui::{DropMergeApp, APP_TITLE};

fn main() -> anyhow::Result<()> {
    setup_logging();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 450.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(|_cc| Ok(Box::new(DropMergeApp::new()))),
    )
    .map_err(|e| anyhow!("failed to start UI: {e}"))?;

    Ok(())
}

/// Setup tracing for the process-output side of the log.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
