//! eframe/egui front end

mod app;
mod console;
mod dialogs;
mod file_list;

pub use app::{DropMergeApp, APP_TITLE};
