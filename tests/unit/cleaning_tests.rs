/*!
 * Tests for the cleaning engine against the public API
 */

use std::path::PathBuf;
use subsweep::app_config::CleaningConfig;
use subsweep::cleaning::processor::{BatchProcessor, NullReporter};
use subsweep::cleaning::cleaner::TextCleaner;
use subsweep::subtitle_processor::{SubtitleCollection, SubtitleEntry};

fn collection_with(texts: &[&str]) -> SubtitleCollection {
    let mut subs = SubtitleCollection::new(PathBuf::from("test.srt"));
    for (i, text) in texts.iter().enumerate() {
        subs.entries.push(SubtitleEntry::new(
            i + 1,
            (i as u64) * 2_000,
            (i as u64) * 2_000 + 1_500,
            text.to_string(),
        ));
    }
    subs
}

/// Any text carrying the song marker collapses to the song rule alone
#[test]
fn test_clean_withSongMarkerAnywhere_shouldReturnOnlySongRule() {
    let cleaner = TextCleaner::new();
    let samples = [
        "\u{266a}",
        "\u{266a} lyrics \u{266a}",
        "JOHN: \u{266a} singing along",
        "(EFFECT) before \u{266a}\nand a second line",
    ];

    for sample in samples {
        let outcome = cleaner.clean(sample);
        assert_eq!(outcome.text, "", "song text should be discarded: {:?}", sample);
        assert_eq!(outcome.applied, vec!["song"]);
    }
}

/// Applied rules come back in configured order, not match order
#[test]
fn test_clean_withSeveralRules_shouldRecordConfiguredOrder() {
    let cleaner = TextCleaner::new();

    // effect appears before the speaker label in the text, but the person
    // rule is configured first
    let outcome = cleaner.clean("<font size=3>JOHN: sure (QUIETLY)</font>");

    assert_eq!(outcome.applied, vec!["font styling", "person", "effect"]);
    assert_eq!(outcome.text, "sure");
}

/// Cleaning twice never changes the text a second time
#[test]
fn test_clean_withAnyInput_shouldBeIdempotent() {
    let cleaner = TextCleaner::new();
    let samples = [
        "JOHN: Hello there",
        "MARY ANN : you too",
        "(laughing)",
        "[THUNDER]",
        "-hello",
        "wait.what",
        "really?yes",
        "now!go",
        "so,then",
        "Hi\nthere",
        "Yes?\nNo.",
        "- First speaker\n- Second speaker",
        "( FOO BAR\nLOREM IPSUM )",
        "<font color=\"#00ff00\">JOHN: (LAUGHS) fine</font>",
        "\u{266a} humming \u{266a}",
        "An open ( bracket survives",
    ];

    for sample in samples {
        let first = cleaner.clean(sample);
        let second = cleaner.clean(&first.text);
        assert_eq!(
            second.text, first.text,
            "cleaning is not idempotent for {:?}",
            sample
        );
        assert!(
            second.is_untouched() || second.text.is_empty(),
            "second pass applied rules to {:?}: {:?}",
            sample,
            second.applied
        );
    }
}

/// Punctuation spacing replacements fire one by one
#[test]
fn test_clean_withMissingSpaces_shouldInsertThem() {
    let cleaner = TextCleaner::new();

    assert_eq!(cleaner.clean("wait.what").text, "wait. what");
    assert_eq!(cleaner.clean("really?yes").text, "really? yes");
    assert_eq!(cleaner.clean("now!go").text, "now! go");
    assert_eq!(cleaner.clean("so,then").text, "so, then");
    assert_eq!(cleaner.clean("-hello").text, "- hello");
}

/// Batch processing twice leaves the document alone the second time
#[test]
fn test_process_withDocumentTwice_shouldBeIdempotent() {
    let mut subs = collection_with(&[
        "JOHN: Hello there",
        "(laughing)",
        "\u{266a} song \u{266a}",
        "Hi\nthere",
        "Left alone.",
    ]);
    let processor = BatchProcessor::new(TextCleaner::new(), &NullReporter);

    assert!(processor.process(&mut subs));
    assert!(!processor.process(&mut subs));

    assert_eq!(subs.len(), 3);
    assert_eq!(subs.entries[0].text, "Hello there");
    assert_eq!(subs.entries[1].text, "Hi there");
    assert_eq!(subs.entries[2].text, "Left alone.");
}

/// Custom thresholds flow through the whole pipeline
#[test]
fn test_process_withCustomConfig_shouldRespectThresholds() {
    let config = CleaningConfig {
        max_line_length: 100,
        max_joined_length: 200,
        ..CleaningConfig::default()
    };
    let mut subs = collection_with(&["A noticeably longer first line\nand a second one"]);
    let processor = BatchProcessor::new(TextCleaner::with_config(config), &NullReporter);

    let modified = processor.process(&mut subs);

    // generous thresholds allow a join the defaults would refuse
    assert!(modified);
    assert_eq!(
        subs.entries[0].text,
        "A noticeably longer first line and a second one"
    );
}
