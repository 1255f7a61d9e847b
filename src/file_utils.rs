use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use walkdir::WalkDir;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Derive the output path for a cleaned subtitle file.
    ///
    /// "movie.srt" with suffix "_clean" becomes "movie_clean.srt" next to
    /// the source.
    pub fn derive_output_path<P: AsRef<Path>>(input_file: P, suffix: &str) -> PathBuf {
        let input_file = input_file.as_ref();

        let stem = input_file.file_stem().unwrap_or_default();
        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push_str(suffix);
        output_filename.push_str(".srt");

        match input_file.parent() {
            Some(parent) => parent.join(output_filename),
            None => PathBuf::from(output_filename),
        }
    }

    /// Check whether a file looks like it was produced by a previous run
    pub fn is_derived_output<P: AsRef<Path>>(path: P, suffix: &str) -> bool {
        path.as_ref()
            .file_stem()
            .map(|stem| stem.to_string_lossy().contains(suffix))
            .unwrap_or(false)
    }

    /// Sanitize a track title into a filename fragment
    pub fn sanitize_track_name(name: &str, track_id: usize) -> String {
        let keep = Regex::new(r"[^\w\s-]").expect("Invalid sanitize regex");
        let cleaned = keep.replace_all(name, "");
        let cleaned = cleaned.trim().replace(' ', "_");

        if cleaned.is_empty() {
            format!("track{}", track_id)
        } else {
            cleaned
        }
    }

    /// Find files with a specific extension in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = if extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{}", extension)
        };

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(&normalized_ext[1..]) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Copy a file from one location to another, ensuring the target directory exists
    pub fn copy_file<P1: AsRef<Path>, P2: AsRef<Path>>(from: P1, to: P2) -> Result<()> {
        let from = from.as_ref();
        let to = to.as_ref();

        if !from.exists() {
            return Err(anyhow::anyhow!("Source file does not exist: {:?}", from));
        }

        if let Some(parent) = to.parent() {
            Self::ensure_dir(parent)?;
        }

        fs::copy(from, to)?;

        Ok(())
    }

    /// Detect if a file is a subtitle file (SRT) or a video file supported by ffmpeg
    pub fn detect_file_type<P: AsRef<Path>>(path: P) -> Result<FileType> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(anyhow::anyhow!("File does not exist: {:?}", path));
        }

        // Check file extension
        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy().to_lowercase();

            if ext_str == "srt" {
                return Ok(FileType::Subtitle);
            }

            // Common video file extensions supported by ffmpeg
            let video_extensions = [
                "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "mpg", "mpeg", "ogv",
                "ts", "mts", "m2ts",
            ];

            if video_extensions.contains(&ext_str.as_str()) {
                return Ok(FileType::Video);
            }
        }

        // If extension check doesn't work, try to examine the file with ffprobe
        let output = Command::new("ffprobe")
            .arg("-v")
            .arg("error")
            .arg("-show_entries")
            .arg("format=format_name")
            .arg("-of")
            .arg("default=noprint_wrappers=1:nokey=1")
            .arg(path)
            .output();

        if let Ok(output) = output {
            if output.status.success() {
                let format = String::from_utf8_lossy(&output.stdout).trim().to_lowercase();
                // ffprobe also recognizes bare subtitle files as a format
                if format.contains("srt") || format.contains("subrip") {
                    return Ok(FileType::Subtitle);
                }
                if !format.is_empty() {
                    return Ok(FileType::Video);
                }
            }
        }

        // Fall back to examining file contents
        if let Ok(content) = fs::read_to_string(path) {
            if content.contains("-->") {
                // sequence number followed by a timestamp line
                let re = Regex::new(
                    r"\d+\s*\r?\n\d{2}:\d{2}:\d{2},\d{3}\s+-->\s+\d{2}:\d{2}:\d{2},\d{3}",
                )
                .unwrap();
                if re.is_match(&content) {
                    return Ok(FileType::Subtitle);
                }
            }
        }

        Ok(FileType::Unknown)
    }
}

/// Enum representing different file types
#[derive(Debug, PartialEq, Eq)]
pub enum FileType {
    /// Subtitle file (SRT)
    Subtitle,
    /// Video file supported by ffmpeg
    Video,
    /// Unknown file type
    Unknown,
}
