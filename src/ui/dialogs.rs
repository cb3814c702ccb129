//! Native dialogs (rfd)
//!
//! All dialogs block the event loop, matching the rest of the synchronous
//! flow.

use std::path::PathBuf;

use chrono::Local;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

/// Ask the user where to save the merged PDF. `None` means cancelled.
pub fn prompt_save_path() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Save Merged PDF")
        .add_filter("PDF Files", &["pdf"])
        .set_file_name(default_output_name())
        .save_file()
}

fn default_output_name() -> String {
    format!("merged_{}.pdf", Local::now().format("%Y-%m-%d"))
}

pub fn warning(title: &str, text: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(text)
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn info(title: &str, text: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(text)
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn error(title: &str, text: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(text)
        .set_buttons(MessageButtons::Ok)
        .show();
}
