/*!
 * Tests for file and folder utilities
 */

use anyhow::Result;
use std::path::{Path, PathBuf};
use subsweep::file_utils::{FileManager, FileType};

use crate::common;

/// Test output path derivation
#[test]
fn test_derive_output_path_withSrtFile_shouldAppendSuffix() {
    let output = FileManager::derive_output_path(Path::new("/movies/show.srt"), "_clean");

    assert_eq!(output, PathBuf::from("/movies/show_clean.srt"));
}

/// Test output path derivation without a parent directory
#[test]
fn test_derive_output_path_withBareFilename_shouldStayRelative() {
    let output = FileManager::derive_output_path(Path::new("show.srt"), "_clean");

    assert_eq!(output, PathBuf::from("show_clean.srt"));
}

/// Test recognition of previously derived outputs
#[test]
fn test_is_derived_output_withSuffixedStem_shouldReturnTrue() {
    assert!(FileManager::is_derived_output(
        Path::new("/movies/show_clean.srt"),
        "_clean"
    ));
    assert!(!FileManager::is_derived_output(
        Path::new("/movies/show.srt"),
        "_clean"
    ));
}

/// Test track name sanitization
#[test]
fn test_sanitize_track_name_withSpecialChars_shouldStripThem() {
    assert_eq!(
        FileManager::sanitize_track_name("English (SDH)!", 3),
        "English_SDH"
    );
    assert_eq!(FileManager::sanitize_track_name("Signs & Songs", 3), "Signs__Songs");
}

/// Test track name sanitization fallback
#[test]
fn test_sanitize_track_name_withNothingLeft_shouldFallBackToTrackId() {
    assert_eq!(FileManager::sanitize_track_name("???", 7), "track7");
    assert_eq!(FileManager::sanitize_track_name("", 2), "track2");
}

/// Test file type detection by extension
#[test]
fn test_detect_file_type_withSrtExtension_shouldReturnSubtitle() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_clean_subtitle(&temp_dir.path().to_path_buf(), "test.srt")?;

    assert_eq!(FileManager::detect_file_type(&path)?, FileType::Subtitle);

    Ok(())
}

/// Test file type detection falls back to content sniffing
#[test]
fn test_detect_file_type_withSrtContentButOddExtension_shouldReturnSubtitle() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_clean_subtitle(&temp_dir.path().to_path_buf(), "test.sub_backup")?;

    assert_eq!(FileManager::detect_file_type(&path)?, FileType::Subtitle);

    Ok(())
}

/// Test file type detection of a missing file
#[test]
fn test_detect_file_type_withMissingFile_shouldFail() {
    assert!(FileManager::detect_file_type(Path::new("/no/such/file.srt")).is_err());
}

/// Test finding files by extension
#[test]
fn test_find_files_withMixedExtensions_shouldOnlyMatchRequested() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "a.srt", "x")?;
    common::create_test_file(&dir, "b.SRT", "x")?;
    common::create_test_file(&dir, "c.txt", "x")?;

    let found = FileManager::find_files(&dir, "srt")?;

    assert_eq!(found.len(), 2);

    Ok(())
}
