//! Append-only console log mirrored to the tracing subscriber
//!
//! Every entry lands in two sinks: the in-memory buffer rendered by the
//! console panel, and the process log stream via `tracing`. The buffer is
//! write-only from the application's point of view; nothing reads it back
//! except the panel.

/// In-memory console log.
///
/// Entries carry their severity tag (`[INFO]`, `[ERROR]`, `[SUCCESS]`) as
/// part of the text; raw drop-event traces are untagged.
#[derive(Debug, Default)]
pub struct ConsoleLog {
    entries: Vec<String>,
}

impl ConsoleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an untagged trace line
    pub fn raw(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{message}");
        self.entries.push(message);
    }

    /// Append an `[INFO]`-tagged entry
    pub fn info(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        tracing::info!("{message}");
        self.entries.push(format!("[INFO] {message}"));
    }

    /// Append an `[ERROR]`-tagged entry
    pub fn error(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        tracing::error!("{message}");
        self.entries.push(format!("[ERROR] {message}"));
    }

    /// Append a `[SUCCESS]`-tagged entry
    pub fn success(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        tracing::info!("{message}");
        self.entries.push(format!("[SUCCESS] {message}"));
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_tags() {
        let mut log = ConsoleLog::new();
        log.info("merge started");
        log.error("something broke");
        log.success("done");

        assert_eq!(
            log.entries(),
            &[
                "[INFO] merge started",
                "[ERROR] something broke",
                "[SUCCESS] done",
            ]
        );
    }

    #[test]
    fn test_raw_entries_are_untagged() {
        let mut log = ConsoleLog::new();
        log.raw("URL /tmp/a.pdf");

        assert_eq!(log.entries(), &["URL /tmp/a.pdf"]);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut log = ConsoleLog::new();
        log.raw("first");
        log.info("second");
        log.raw("third");

        assert_eq!(log.entries().len(), 3);
        assert_eq!(log.entries()[0], "first");
        assert_eq!(log.entries()[2], "third");
    }
}
