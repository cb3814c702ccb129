//! Application state and the merge flow
//!
//! All mutable state lives in [`AppState`], owned by the event loop and
//! passed by reference to handlers. Destination selection is injected as a
//! closure so the whole flow runs in tests without a GUI.

use std::path::{Path, PathBuf};

use crate::console::ConsoleLog;
use crate::error::{Error, MergeError};
use crate::list::{is_pdf_path, FileList, MIN_MERGE_FILES};
use crate::pdf::MergeAccumulator;

/// Result of offering a drop event's paths to the file list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The first PDF-suffixed path was appended
    Accepted(PathBuf),
    /// No path in the event had a PDF suffix; list unchanged
    Rejected,
}

/// What a merge attempt ended as. Returned rather than surfaced directly so
/// the caller decides how to present it (dialogs in the UI, asserts in tests).
#[derive(Debug)]
pub enum MergeOutcome {
    /// Fewer than two files in the list; the save prompt was never shown
    TooFewFiles { have: usize },
    /// User dismissed the save dialog; not a failure
    Cancelled,
    /// Output file written
    Merged(MergeReport),
    /// Merge aborted; no output file was written
    Failed(MergeError),
}

/// Summary of a completed merge
#[derive(Debug, Clone)]
pub struct MergeReport {
    pub output: PathBuf,
    pub files: usize,
    pub pages: usize,
}

/// Mutable application state: the ordered file list and the console log
#[derive(Debug, Default)]
pub struct AppState {
    pub files: FileList,
    pub console: ConsoleLog,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one drop event.
    ///
    /// Accepts at most one file per event: the first path with a `.pdf`
    /// suffix is appended and the rest are ignored. A non-matching event
    /// leaves the list untouched and logs a rejection trace.
    pub fn handle_drop(&mut self, dropped: &[PathBuf]) -> DropOutcome {
        for path in dropped {
            if is_pdf_path(path) {
                self.files.push(path.clone());
                self.console.raw(format!("URL {}", path.display()));
                return DropOutcome::Accepted(path.clone());
            }
        }
        self.console.raw("File ignored, not a PDF?");
        DropOutcome::Rejected
    }

    /// Run the merge flow: validate, ask `prompt` for a destination, merge.
    ///
    /// `prompt` is only invoked once validation has passed; returning `None`
    /// means the user cancelled and is logged as informational, not an error.
    pub fn merge_with_prompt(
        &mut self,
        prompt: impl FnOnce() -> Option<PathBuf>,
    ) -> MergeOutcome {
        let have = self.files.len();
        if have < MIN_MERGE_FILES {
            self.console.error(Error::TooFewFiles(have).to_string());
            return MergeOutcome::TooFewFiles { have };
        }

        let Some(output) = prompt() else {
            self.console.info("Merge cancelled by user.");
            return MergeOutcome::Cancelled;
        };

        match self.merge_to(&output) {
            Ok(report) => {
                self.console
                    .success(format!("Merged PDF saved: {}", report.output.display()));
                MergeOutcome::Merged(report)
            }
            Err(err) => {
                self.console.error(format!("Failed to merge PDFs: {err}"));
                MergeOutcome::Failed(err)
            }
        }
    }

    /// Append every listed file into a fresh accumulator and write the
    /// result. The accumulator is dropped on the error path, so a failed
    /// merge leaves nothing on disk.
    fn merge_to(&mut self, output: &Path) -> Result<MergeReport, MergeError> {
        let mut accumulator = MergeAccumulator::new();

        for path in self.files.iter() {
            self.console.info(format!("Adding {}", path.display()));
            accumulator.append_file(path)?;
        }

        let pages = accumulator.page_count();
        accumulator.write(output)?;

        Ok(MergeReport {
            output: output.to_path_buf(),
            files: self.files.len(),
            pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_drop_without_pdf_is_rejected() {
        let mut state = AppState::new();
        let outcome = state.handle_drop(&paths(&["notes.txt", "image.png"]));

        assert_eq!(outcome, DropOutcome::Rejected);
        assert!(state.files.is_empty());
        assert_eq!(state.console.entries().last().unwrap(), "File ignored, not a PDF?");
    }

    #[test]
    fn test_drop_accepts_only_first_pdf() {
        let mut state = AppState::new();
        let outcome = state.handle_drop(&paths(&["notes.txt", "a.pdf", "b.pdf"]));

        assert_eq!(outcome, DropOutcome::Accepted(PathBuf::from("a.pdf")));
        assert_eq!(state.files.len(), 1);
        assert_eq!(state.files.entries()[0], PathBuf::from("a.pdf"));
        assert_eq!(state.console.entries().last().unwrap(), "URL a.pdf");
    }

    #[test]
    fn test_drop_suffix_check_is_case_insensitive() {
        let mut state = AppState::new();
        let outcome = state.handle_drop(&paths(&["SCAN.PDF"]));

        assert_eq!(outcome, DropOutcome::Accepted(PathBuf::from("SCAN.PDF")));
        assert_eq!(state.files.len(), 1);
    }

    #[test]
    fn test_repeated_drops_keep_order() {
        let mut state = AppState::new();
        state.handle_drop(&paths(&["a.pdf"]));
        state.handle_drop(&paths(&["b.pdf"]));
        state.handle_drop(&paths(&["c.pdf"]));

        let listed: Vec<_> = state.files.iter().map(|p| p.display().to_string()).collect();
        assert_eq!(listed, vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn test_merge_with_too_few_files_never_prompts() {
        let mut state = AppState::new();
        state.handle_drop(&paths(&["only.pdf"]));

        let mut prompted = false;
        let outcome = state.merge_with_prompt(|| {
            prompted = true;
            None
        });

        assert!(matches!(outcome, MergeOutcome::TooFewFiles { have: 1 }));
        assert!(!prompted);
        assert_eq!(
            state.console.entries().last().unwrap(),
            "[ERROR] Please add at least 2 PDF files."
        );
    }

    #[test]
    fn test_cancelled_prompt_is_not_an_error() {
        let mut state = AppState::new();
        state.handle_drop(&paths(&["a.pdf"]));
        state.handle_drop(&paths(&["b.pdf"]));

        let outcome = state.merge_with_prompt(|| None);

        assert!(matches!(outcome, MergeOutcome::Cancelled));
        assert_eq!(state.files.len(), 2);
        assert_eq!(
            state.console.entries().last().unwrap(),
            "[INFO] Merge cancelled by user."
        );
    }

    #[test]
    fn test_merge_missing_file_fails_without_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("merged.pdf");

        let mut state = AppState::new();
        state.handle_drop(&[PathBuf::from("a.pdf")]);
        state.handle_drop(&[PathBuf::from("missing.pdf")]);

        let outcome = state.merge_with_prompt(|| Some(output.clone()));

        assert!(matches!(
            outcome,
            MergeOutcome::Failed(MergeError::FileNotFound(_))
        ));
        assert!(!output.exists());

        // The failing file was attempted and the failure logged
        let entries = state.console.entries();
        assert!(entries.iter().any(|e| e == "[INFO] Adding a.pdf"));
        assert!(entries
            .last()
            .unwrap()
            .starts_with("[ERROR] Failed to merge PDFs:"));
    }
}
