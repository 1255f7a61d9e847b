/*!
 * End-to-end cleaning workflow tests
 */

use anyhow::Result;
use std::fs;
use subsweep::app_controller::Controller;
use subsweep::cleaning::processor::{BatchProcessor, NullReporter};
use subsweep::cleaning::cleaner::TextCleaner;
use subsweep::subtitle_processor::SubtitleCollection;

use crate::common;

/// Test the full cleaning workflow on a captioned subtitle file
#[tokio::test]
async fn test_run_withCaptionedFile_shouldWriteCleanedOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_captioned_subtitle(&temp_dir.path().to_path_buf(), "show.srt")?;

    let controller = Controller::new_for_test()?;
    controller.run(input.clone(), None, false).await?;

    let output = temp_dir.path().join("show_clean.srt");
    assert!(output.exists(), "Cleaned output file should exist");

    let content = fs::read_to_string(&output)?;
    let entries = SubtitleCollection::parse_srt_string(&content)?;

    // the effect-only and song entries are gone, the label is stripped
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "Hello there");
    assert_eq!(entries[1].text, "Nothing wrong with this one.");

    Ok(())
}

/// Test that an already clean file produces no output write
#[tokio::test]
async fn test_run_withCleanFile_shouldNotWriteOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_clean_subtitle(&temp_dir.path().to_path_buf(), "pristine.srt")?;

    let controller = Controller::new_for_test()?;
    controller.run(input, None, false).await?;

    let output = temp_dir.path().join("pristine_clean.srt");
    assert!(!output.exists(), "Clean file must not produce an output");

    Ok(())
}

/// Test that a previously derived output is not reprocessed
#[tokio::test]
async fn test_run_withDerivedInput_shouldSkipIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input =
        common::create_captioned_subtitle(&temp_dir.path().to_path_buf(), "show_clean.srt")?;

    let controller = Controller::new_for_test()?;
    controller.run(input, None, false).await?;

    let output = temp_dir.path().join("show_clean_clean.srt");
    assert!(!output.exists(), "Derived inputs must be skipped");

    Ok(())
}

/// Test the force-overwrite guard on existing outputs
#[tokio::test]
async fn test_run_withExistingOutput_shouldRespectForceFlag() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_captioned_subtitle(&dir, "show.srt")?;
    let output = common::create_test_file(&dir, "show_clean.srt", "placeholder")?;

    let controller = Controller::new_for_test()?;

    // without the flag the existing file stays untouched
    controller.run(input.clone(), None, false).await?;
    assert_eq!(fs::read_to_string(&output)?, "placeholder");

    // with the flag it is replaced by the cleaned document
    controller.run(input, None, true).await?;
    let entries = SubtitleCollection::parse_srt_string(&fs::read_to_string(&output)?)?;
    assert_eq!(entries.len(), 2);

    Ok(())
}

/// Test that a second pass over the written output changes nothing
#[tokio::test]
async fn test_run_withCleanedOutput_shouldBeIdempotent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_captioned_subtitle(&temp_dir.path().to_path_buf(), "show.srt")?;

    let controller = Controller::new_for_test()?;
    controller.run(input, None, false).await?;

    let output = temp_dir.path().join("show_clean.srt");
    let mut subs = SubtitleCollection::parse_srt_file(&output)?;

    let processor = BatchProcessor::new(TextCleaner::new(), &NullReporter);
    assert!(
        !processor.process(&mut subs),
        "A cleaned document must come back unmodified"
    );

    Ok(())
}

/// Test that a missing input path is an error
#[tokio::test]
async fn test_run_withMissingInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("nope.srt");

    let controller = Controller::new_for_test()?;
    let result = controller.run(missing, None, false).await;

    assert!(result.is_err());

    Ok(())
}

/// Test directory processing cleans every file it finds
#[tokio::test]
async fn test_run_withDirectory_shouldProcessAllSubtitles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_captioned_subtitle(&dir, "one.srt")?;
    common::create_captioned_subtitle(&dir, "two.srt")?;
    common::create_clean_subtitle(&dir, "three.srt")?;

    let controller = Controller::new_for_test()?;
    controller.run(dir.clone(), None, false).await?;

    assert!(dir.join("one_clean.srt").exists());
    assert!(dir.join("two_clean.srt").exists());
    assert!(!dir.join("three_clean.srt").exists());

    Ok(())
}
