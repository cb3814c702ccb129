//! PDF Drop-Merge Library
//!
//! Core logic for a drag-and-drop PDF merging desktop tool:
//! - Filter dropped paths for PDFs and keep them in drop order
//! - Merge the listed files into a single document with lopdf
//! - Log every step to a console buffer mirrored to `tracing`
//!
//! The GUI in [`ui`] is a thin eframe wrapper; everything above it runs
//! headless, which is how the tests drive it.
//!
//! # Example
//!
//! ```no_run
//! use pdf_dropmerge::AppState;
//! use std::path::PathBuf;
//!
//! let mut state = AppState::new();
//! state.handle_drop(&[PathBuf::from("1. intro.pdf")]);
//! state.handle_drop(&[PathBuf::from("2. advanced.pdf")]);
//!
//! match state.merge_with_prompt(|| Some(PathBuf::from("merged.pdf"))) {
//!     pdf_dropmerge::MergeOutcome::Merged(report) => {
//!         println!("wrote {} pages", report.pages);
//!     }
//!     other => eprintln!("merge did not complete: {other:?}"),
//! }
//! ```

pub mod console;
pub mod controller;
pub mod error;
pub mod list;
pub mod pdf;
pub mod ui;

// Re-export commonly used items
pub use controller::{AppState, DropOutcome, MergeOutcome, MergeReport};
pub use error::{Error, MergeError, Result};
