/*!
 * # subsweep
 *
 * A Rust library and CLI for removing closed-captioning artifacts from
 * SRT subtitles.
 *
 * ## Features
 *
 * - Strip speaker labels, sound-effect annotations, song lines and font
 *   styling from subtitle text
 * - Merge short multi-line captions into a single line when safe
 * - Delete captions that become empty after cleaning
 * - Extract text subtitle tracks from video containers before cleaning
 * - Idempotent: an already-clean file produces no output
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: SRT parsing and serialization
 * - `cleaning`: The cleaning engine:
 *   - `cleaning::rules`: Ordered removal and replacement rule set
 *   - `cleaning::cleaner`: Per-entry cleaning pipeline and line joiner
 *   - `cleaning::processor`: Whole-document pass and event reporting
 * - `track_extractor`: Subtitle track listing and extraction from videos
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod cleaning;
pub mod errors;
pub mod file_utils;
pub mod subtitle_processor;
pub mod track_extractor;

// Re-export main types for easier usage
pub use app_config::{CleaningConfig, Config};
pub use cleaning::cleaner::{CleaningOutcome, LineJoiner, TextCleaner};
pub use cleaning::processor::{BatchProcessor, CleaningReporter, NullReporter};
pub use errors::{AppError, ExtractionError, SubtitleError};
pub use subtitle_processor::{SubtitleCollection, SubtitleEntry};
