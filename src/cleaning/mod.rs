/*!
 * Cleaning engine for closed-captioning artifacts.
 *
 * This module removes captioning noise from subtitle text:
 * - Speaker labels ("JOHN:", multi-line speaker/dialogue pairs)
 * - Sound-effect annotations ("(LAUGHING)", "[THUNDER]")
 * - Song lines (entries carrying the musical-note glyph)
 * - Font styling tags and stray punctuation artifacts
 *
 * # Architecture
 *
 * - `rules`: The fixed, ordered removal and replacement rule set
 * - `cleaner`: Applies the rule set to a single entry's text
 * - `processor`: Runs the cleaner over a whole subtitle document
 */

pub mod cleaner;
pub mod processor;
pub mod rules;

// Re-export main types
pub use cleaner::{CleaningOutcome, LineJoiner, TextCleaner};
pub use processor::{BatchProcessor, CleaningReporter, ConsoleReporter, NullReporter};
pub use rules::{RemovalRule, ReplacementRule, RuleSet};
