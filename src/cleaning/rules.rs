/*!
 * The fixed closed-captioning rule set.
 *
 * Two ordered lists: removal rules whose matches are deleted, and
 * replacement rules that re-insert missing punctuation spacing. Ordering
 * is significant — later rules see the output of earlier rules.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Name recorded when a song entry is discarded
pub const SONG_RULE_NAME: &str = "song";

/// Name recorded when short lines are merged into one
pub const JOINED_LINES_RULE_NAME: &str = "joined lines";

/// A rule whose matches are stripped from the text
#[derive(Debug)]
pub struct RemovalRule {
    /// Name recorded in the applied-rules list when the rule fires
    pub name: &'static str,
    /// Compiled pattern
    pub pattern: Regex,
}

/// A rule that rewrites matches through a substitution
#[derive(Debug)]
pub struct ReplacementRule {
    /// Name recorded in the applied-rules list when the rule fires
    pub name: &'static str,
    /// Compiled pattern
    pub pattern: Regex,
    /// Substitution template, `$1` style capture references
    pub replacement: &'static str,
}

/// The ordered rule lists applied to every subtitle entry
#[derive(Debug)]
pub struct RuleSet {
    /// Removal rules, evaluated first, in order
    pub removals: Vec<RemovalRule>,
    /// Replacement rules, evaluated after all removals, in order
    pub replacements: Vec<ReplacementRule>,
}

impl RuleSet {
    /// The standard closed-captioning rule set
    pub fn standard() -> &'static RuleSet {
        &STANDARD_RULES
    }
}

fn removal(name: &'static str, pattern: &str) -> RemovalRule {
    RemovalRule {
        name,
        pattern: Regex::new(pattern).expect("Invalid removal rule regex"),
    }
}

fn replacement(name: &'static str, pattern: &str, replacement: &'static str) -> ReplacementRule {
    ReplacementRule {
        name,
        pattern: Regex::new(pattern).expect("Invalid replacement rule regex"),
        replacement,
    }
}

static STANDARD_RULES: Lazy<RuleSet> = Lazy::new(|| RuleSet {
    removals: vec![
        // <font color="#ffff00">...</font> — italics and other tags stay
        removal("font styling", r"</?font.*?>"),
        // SOMEONE:
        // - says
        removal("multiline person", r"^[0-9A-Z\s#.\-]+:\n-\s"),
        // SOMEONE: says / SOME ONE : says / SOME-ONE: says
        removal("person", r"^[0-9A-Z\s#.\-]*?\s?:\s"),
        // speaker token after the line start, e.g. "middle. SOMEONE: text"
        removal("person middle", r"[0-9A-Z]{3,10}\s?:\s"),
        // (LOUDLY)
        removal("effect", r"\(.*?\)"),
        // [LOUDLY]
        removal("effect", r"\[.*?\]"),
        // a line holding nothing but a dash
        removal("empty dash", r"^\s?-\s?$"),
        removal("double spaces", r"\s\s"),
    ],
    replacements: vec![
        // -word
        replacement("dash missing space", r"^-(\w)", "- $1"),
        // word.word
        replacement("dot missing space", r"\.(\w)", ". $1"),
        // word,word
        replacement("comma missing space", r",(\w)", ", $1"),
        // word?word
        replacement("? missing space", r"\?(\w)", "? $1"),
        // word!word
        replacement("! missing space", r"!(\w)", "! $1"),
    ],
});
