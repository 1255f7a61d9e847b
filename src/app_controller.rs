use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::app_config::Config;
use crate::cleaning::cleaner::TextCleaner;
use crate::cleaning::processor::{BatchProcessor, CleaningReporter, ConsoleReporter};
use crate::file_utils::{FileManager, FileType};
use crate::subtitle_processor::SubtitleCollection;
use crate::track_extractor;

// @module: Application controller for subtitle cleaning

/// Main application controller for closed-caption removal
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Receiver for cleaning events
    reporter: Box<dyn CleaningReporter>,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        let mut controller = Self::with_config(Config::default())?;
        controller.reporter = Box::new(crate::cleaning::processor::NullReporter);
        Ok(controller)
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            reporter: Box::new(ConsoleReporter),
        })
    }

    /// Run the cleaning workflow for one input path (file or directory)
    pub async fn run(
        &self,
        input_path: PathBuf,
        language_filter: Option<&str>,
        force_overwrite: bool,
    ) -> Result<()> {
        if input_path.is_dir() {
            return self
                .run_folder(&input_path, language_filter, force_overwrite)
                .await;
        }

        if !input_path.exists() {
            return Err(anyhow!("Input path does not exist: {:?}", input_path));
        }

        self.process_path(&input_path, language_filter, force_overwrite)
            .await
    }

    /// Process every subtitle and video file under a directory
    async fn run_folder(
        &self,
        input_dir: &Path,
        language_filter: Option<&str>,
        force_overwrite: bool,
    ) -> Result<()> {
        info!("Scanning directory: {:?}", input_dir);

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(input_dir).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            // outputs of a previous run are not inputs
            if FileManager::is_derived_output(path, &self.config.output_suffix) {
                continue;
            }
            match FileManager::detect_file_type(path) {
                Ok(FileType::Subtitle) | Ok(FileType::Video) => files.push(path.to_path_buf()),
                _ => {}
            }
        }

        if files.is_empty() {
            warn!("No subtitle or video files found in {:?}", input_dir);
            return Ok(());
        }

        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut processed_count = 0;
        let mut error_count = 0;

        for path in &files {
            progress.set_message(
                path.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );

            if let Err(e) = self
                .process_path(path, language_filter, force_overwrite)
                .await
            {
                self.reporter
                    .error(&format!("Error processing {:?}: {}", path, e));
                error_count += 1;
            } else {
                processed_count += 1;
            }

            progress.inc(1);
        }

        progress.finish_and_clear();
        info!(
            "Finished processing {} file(s), {} error(s)",
            processed_count, error_count
        );

        Ok(())
    }

    /// Dispatch a single file to the subtitle or video flow
    async fn process_path(
        &self,
        path: &Path,
        language_filter: Option<&str>,
        force_overwrite: bool,
    ) -> Result<()> {
        match FileManager::detect_file_type(path)? {
            FileType::Subtitle => {
                if language_filter.is_some() {
                    self.reporter.warn(&format!(
                        "Warning: --lang is only used for video files. Ignoring for {:?}",
                        path
                    ));
                }
                self.clean_subtitle_input(path, force_overwrite)
            }
            FileType::Video => {
                self.process_video(path, language_filter, force_overwrite)
                    .await
            }
            FileType::Unknown => Err(anyhow!("Unsupported file type: {:?}", path)),
        }
    }

    /// Clean a standalone subtitle file, writing next to the source
    fn clean_subtitle_input(&self, input_file: &Path, force_overwrite: bool) -> Result<()> {
        if FileManager::is_derived_output(input_file, &self.config.output_suffix) {
            self.reporter
                .warn(&format!("Ignored already processed file: {:?}", input_file));
            return Ok(());
        }

        let output_path = FileManager::derive_output_path(input_file, &self.config.output_suffix);
        if output_path.exists() && !force_overwrite {
            self.reporter.warn(&format!(
                "Output file already exists: {:?}. Use -f to force overwrite.",
                output_path
            ));
            return Ok(());
        }

        let modified = self.process_subtitle_file(input_file, &output_path)?;

        if modified {
            self.reporter
                .success(&format!("Saved cleaned subtitles to: {:?}", output_path));
        } else {
            self.reporter
                .success(&format!("Already clean file: {:?}", input_file));
        }

        Ok(())
    }

    /// Parse, clean and conditionally persist one subtitle file.
    ///
    /// Writes `output_path` only when the cleaning pass changed or deleted
    /// at least one entry. Returns whether it did.
    fn process_subtitle_file(&self, input_file: &Path, output_path: &Path) -> Result<bool> {
        let mut subs = SubtitleCollection::parse_srt_file(input_file)?;
        debug!("Parsed {} entries from {:?}", subs.len(), input_file);

        let cleaner = TextCleaner::with_config(self.config.cleaning.clone());
        let processor = BatchProcessor::new(cleaner, self.reporter.as_ref());
        let modified = processor.process(&mut subs);

        if modified {
            subs.write_to_srt(output_path)?;
        }

        Ok(modified)
    }

    /// Extract and clean every text subtitle track of a video file
    async fn process_video(
        &self,
        video_file: &Path,
        language_filter: Option<&str>,
        force_overwrite: bool,
    ) -> Result<()> {
        self.reporter
            .info(&format!("Processing video file: {:?}", video_file));

        let all_tracks = track_extractor::list_subtitle_tracks(video_file).await?;
        if all_tracks.is_empty() {
            self.reporter.warn("No subtitle tracks found in video file.");
            return Ok(());
        }

        let bitmap_count = all_tracks.iter().filter(|t| t.is_bitmap()).count();
        if bitmap_count > 0 {
            self.reporter.warn(&format!(
                "Skipping {} bitmap subtitle track(s) — only text-based tracks can be cleaned",
                bitmap_count
            ));
        }

        let text_tracks: Vec<_> = all_tracks.iter().filter(|t| !t.is_bitmap()).collect();
        if text_tracks.is_empty() {
            self.reporter
                .warn("All subtitle tracks are bitmap-based, nothing to extract.");
            return Ok(());
        }

        let tracks: Vec<_> = match language_filter {
            Some(lang) => {
                let matching: Vec<_> = text_tracks
                    .iter()
                    .filter(|t| {
                        t.language
                            .as_ref()
                            .is_some_and(|l| l.eq_ignore_ascii_case(lang))
                    })
                    .copied()
                    .collect();

                if matching.is_empty() {
                    self.reporter.warn(&format!(
                        "No subtitle tracks found with language code: {}",
                        lang
                    ));
                    self.reporter.info("Available tracks:");
                    for track in &text_tracks {
                        self.reporter.info(&format!(
                            "  Track {}: {} - {}",
                            track.index,
                            track.display_name(),
                            track.language.as_deref().unwrap_or("(no language specified)")
                        ));
                    }
                    return Ok(());
                }

                self.reporter
                    .info(&format!("Filtering by language: {}", lang));
                matching
            }
            None => text_tracks,
        };

        self.reporter
            .info(&format!("Found {} text subtitle track(s)", tracks.len()));

        let temp_dir = TempDir::new()?;
        let base_stem = video_file
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "video".to_string());
        let output_dir = video_file.parent().unwrap_or(Path::new("."));

        for track in tracks {
            let lang_display = track
                .language
                .as_ref()
                .map(|l| format!(" ({})", l))
                .unwrap_or_default();
            self.reporter.info(&format!(
                "Processing track {}: {}{}",
                track.index,
                track.display_name(),
                lang_display
            ));

            let safe_name = FileManager::sanitize_track_name(&track.display_name(), track.index);
            let output_name = format!("{}_track{}_{}.srt", base_stem, track.index, safe_name);
            let output_path = output_dir.join(output_name);

            if output_path.exists() && !force_overwrite {
                self.reporter.warn(&format!(
                    "Output file already exists: {:?}. Use -f to force overwrite.",
                    output_path
                ));
                continue;
            }

            let temp_srt = temp_dir.path().join(format!("track_{}.srt", track.index));

            // one broken track must not take its siblings down
            if let Err(e) =
                track_extractor::extract_track(video_file, track.index, &temp_srt).await
            {
                self.reporter
                    .error(&format!("Failed to extract track {}: {}", track.index, e));
                continue;
            }

            match self.process_subtitle_file(&temp_srt, &output_path) {
                Ok(true) => {
                    self.reporter
                        .success(&format!("Saved processed track to: {:?}", output_path));
                }
                Ok(false) => {
                    // already clean, still published under the output name
                    FileManager::copy_file(&temp_srt, &output_path)?;
                    self.reporter
                        .success(&format!("Saved clean track to: {:?}", output_path));
                }
                Err(e) => {
                    self.reporter
                        .error(&format!("Failed to clean track {}: {}", track.index, e));
                }
            }
        }

        Ok(())
    }
}
