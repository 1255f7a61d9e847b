/*!
 * Per-entry cleaning pipeline.
 *
 * `TextCleaner` runs the ordered rule set over a single caption text and
 * reports which rules fired. `LineJoiner` is the final step: short
 * multi-line results are merged into one line when that cannot break a
 * dialogue exchange.
 */

use crate::app_config::CleaningConfig;
use crate::cleaning::rules::{RuleSet, JOINED_LINES_RULE_NAME, SONG_RULE_NAME};

/// Result of cleaning a single caption text
#[derive(Debug, Clone, PartialEq)]
pub struct CleaningOutcome {
    /// The cleaned text, empty when the entry should be dropped
    pub text: String,
    /// Names of the rules that fired, in application order
    pub applied: Vec<String>,
}

impl CleaningOutcome {
    /// Check whether cleaning left the text exactly as it came in
    pub fn is_untouched(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Merges short multi-line captions into a single line
#[derive(Debug, Clone)]
pub struct LineJoiner {
    config: CleaningConfig,
}

impl LineJoiner {
    /// Create a joiner with default thresholds
    pub fn new() -> Self {
        Self::with_config(CleaningConfig::default())
    }

    /// Create a joiner with custom thresholds
    pub fn with_config(config: CleaningConfig) -> Self {
        Self { config }
    }

    /// Join a short multi-line text into one line when safe.
    ///
    /// Returns `(was_joined, result_text)`. A text containing a dash is a
    /// two-speaker exchange and is never joined; a first line ending in a
    /// question mark keeps its answer on a separate line. Lengths are
    /// counted in chars.
    pub fn join_short(&self, text: &str) -> (bool, String) {
        let lines: Vec<&str> = text.split('\n').collect();

        if lines.len() > 1 && !text.contains('-') {
            let mut max_len = 0;
            for (i, line) in lines.iter().enumerate() {
                if i == 0 && line.ends_with('?') {
                    return (false, text.to_string());
                }
                max_len = max_len.max(line.chars().count());
            }

            let joined = lines.join(" ");
            if max_len < self.config.max_line_length
                && joined.chars().count() < self.config.max_joined_length
            {
                return (true, joined);
            }
        }

        (false, text.to_string())
    }
}

impl Default for LineJoiner {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the closed-captioning rule set to a single caption text
#[derive(Debug)]
pub struct TextCleaner {
    rules: &'static RuleSet,
    joiner: LineJoiner,
    config: CleaningConfig,
}

impl TextCleaner {
    /// Create a cleaner with the standard rule set and default thresholds
    pub fn new() -> Self {
        Self::with_config(CleaningConfig::default())
    }

    /// Create a cleaner with custom thresholds and song marker
    pub fn with_config(config: CleaningConfig) -> Self {
        Self {
            rules: RuleSet::standard(),
            joiner: LineJoiner::with_config(config.clone()),
            config,
        }
    }

    /// Clean one caption text.
    ///
    /// Total over any input: never panics and never errors, including on
    /// empty strings and unmatched brackets. An empty result text means
    /// the entry was consumed entirely and should be deleted.
    pub fn clean(&self, text: &str) -> CleaningOutcome {
        // a song line is discarded outright, no other rule runs
        if text.contains(self.config.song_marker) {
            return CleaningOutcome {
                text: String::new(),
                applied: vec![SONG_RULE_NAME.to_string()],
            };
        }

        let mut applied: Vec<String> = Vec::new();
        let mut text = text.to_string();

        for rule in &self.rules.removals {
            let before = text.clone();

            // whole-text pass first, catches spans crossing a line break
            text = rule.pattern.replace_all(&text, "").into_owned();

            // then each line on its own, catches anchored matches the
            // whole-text pass cannot see
            text = text
                .split('\n')
                .map(|line| rule.pattern.replace_all(line, ""))
                .collect::<Vec<_>>()
                .join("\n");

            // a rule that empties the line-joined text has consumed the
            // whole entry, e.g. an effect annotation split across lines:
            //   ( FOO BAR
            //   LOREM IPSUM )
            // known to misfire on multi-line text that only matches once
            // joined; kept as-is
            let joined = text.replace('\n', " ");
            if rule.pattern.replace_all(&joined, "").trim().is_empty() {
                applied.push(format!("multiline with {}", rule.name));
                text = String::new();
                break;
            }

            if text != before {
                applied.push(rule.name.to_string());
            }
            text = text.trim().to_string();
        }

        for rule in &self.rules.replacements {
            let before = text.clone();

            text = rule
                .pattern
                .replace_all(&text, rule.replacement)
                .into_owned();

            if text != before {
                applied.push(rule.name.to_string());
            }
            text = text.trim().to_string();
        }

        let (was_joined, text) = self.joiner.join_short(&text);
        if was_joined {
            applied.push(JOINED_LINES_RULE_NAME.to_string());
        }

        CleaningOutcome { text, applied }
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}
