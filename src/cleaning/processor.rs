/*!
 * Whole-document cleaning pass.
 *
 * `BatchProcessor` runs the `TextCleaner` over every entry of a
 * `SubtitleCollection`, deletes entries that come back empty, and reports
 * what happened through an injected `CleaningReporter`. It performs no
 * I/O itself — loading and saving stay with the caller.
 */

use log::{error, info, warn};

use crate::cleaning::cleaner::TextCleaner;
use crate::subtitle_processor::SubtitleCollection;

/// Receiver for structured cleaning events.
///
/// The processor depends only on this trait, so tests can run without
/// capturing process output and the binary can render however it likes.
pub trait CleaningReporter {
    /// Plain informational message
    fn info(&self, message: &str);

    /// Something suspicious but not fatal
    fn warn(&self, message: &str);

    /// A failure worth surfacing
    fn error(&self, message: &str);

    /// A completed step worth highlighting
    fn success(&self, message: &str);

    /// An entry whose text changed, with the rules that fired
    fn entry_cleaned(&self, original: &str, cleaned: &str, applied: &[String]);

    /// An entry that became empty and will be deleted
    fn entry_deleted(&self, original: &str);
}

/// Renders cleaning events to the console.
///
/// Entry diffs go to stdout in the same ANSI palette the binary's logger
/// uses; diagnostics go through the `log` macros.
pub struct ConsoleReporter;

impl CleaningReporter for ConsoleReporter {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }

    fn success(&self, message: &str) {
        info!("\x1B[1;32m{}\x1B[0m", message);
    }

    fn entry_cleaned(&self, original: &str, cleaned: &str, applied: &[String]) {
        println!("\x1B[36mCleaned with: \x1B[0m{}", applied.join(", "));
        println!("\x1B[33m{}\x1B[0m", original);
        println!("\x1B[32m{}\x1B[0m", cleaned);
        println!();
    }

    fn entry_deleted(&self, original: &str) {
        println!("\x1B[31m{}\x1B[0m", original);
        println!();
    }
}

/// Swallows every event. For tests and library embedding.
pub struct NullReporter;

impl CleaningReporter for NullReporter {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn entry_cleaned(&self, _original: &str, _cleaned: &str, _applied: &[String]) {}
    fn entry_deleted(&self, _original: &str) {}
}

/// Runs the cleaner over every entry of a subtitle document
pub struct BatchProcessor<'a> {
    cleaner: TextCleaner,
    reporter: &'a dyn CleaningReporter,
}

impl<'a> BatchProcessor<'a> {
    /// Create a processor from a cleaner and an event receiver
    pub fn new(cleaner: TextCleaner, reporter: &'a dyn CleaningReporter) -> Self {
        Self { cleaner, reporter }
    }

    /// Clean every entry in place.
    ///
    /// Entries whose text becomes empty are deleted from the collection.
    /// Returns true when at least one entry was changed or deleted;
    /// running a second pass over the same collection returns false.
    pub fn process(&self, subs: &mut SubtitleCollection) -> bool {
        let mut delete: Vec<usize> = Vec::new();
        let mut modified = false;

        for (index, entry) in subs.entries.iter_mut().enumerate() {
            let outcome = self.cleaner.clean(&entry.text);

            if outcome.text.is_empty() {
                self.reporter.entry_deleted(&entry.text);
                delete.push(index);
                modified = true;
            } else if outcome.text != entry.text {
                self.reporter
                    .entry_cleaned(&entry.text, &outcome.text, &outcome.applied);
                modified = true;
            }

            entry.text = outcome.text;
        }

        // back to front so earlier removals do not shift later indices
        for index in delete.into_iter().rev() {
            subs.remove_entry(index);
        }

        modified
    }
}
