/*!
 * Subtitle track listing and extraction for video containers.
 *
 * Drives `ffprobe` to enumerate subtitle streams and `ffmpeg` to pull a
 * single text track out as a standalone SRT file. Both invocations run
 * with a timeout so a damaged container cannot hang the run. Bitmap
 * subtitle codecs (PGS, VobSub and friends) carry no text and are
 * reported so callers can skip them.
 */

use anyhow::{anyhow, Context, Result};
use log::{debug, error};
use serde_json::{from_str, Value};
use std::path::Path;
use tokio::process::Command;

/// One subtitle stream of a video container
#[derive(Debug, Clone)]
pub struct TrackInfo {
    /// Absolute stream index within the container
    pub index: usize,

    /// Codec identifier as reported by ffprobe
    pub codec_name: String,

    /// Language tag, when the container carries one
    pub language: Option<String>,

    /// Track title, when the container carries one
    pub title: Option<String>,
}

impl TrackInfo {
    /// Display name for the track, falling back to the stream index
    pub fn display_name(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("Track {}", self.index),
        }
    }

    /// Check if the track's codec is bitmap-based (no extractable text)
    pub fn is_bitmap(&self) -> bool {
        matches!(
            self.codec_name.as_str(),
            "hdmv_pgs_subtitle" | "dvd_subtitle" | "dvb_subtitle" | "xsub"
        )
    }
}

/// List subtitle tracks in a video file
pub async fn list_subtitle_tracks<P: AsRef<Path>>(video_path: P) -> Result<Vec<TrackInfo>> {
    let video_path = video_path.as_ref();

    if !video_path.exists() {
        return Err(anyhow!("Video file not found: {:?}", video_path));
    }

    let ffprobe_future = Command::new("ffprobe")
        .args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_streams",
            "-select_streams",
            "s",
            video_path.to_str().unwrap_or(""),
        ])
        .output();

    let timeout_duration = std::time::Duration::from_secs(60);
    let output = tokio::select! {
        result = ffprobe_future => {
            result.map_err(|e| anyhow!("Failed to execute ffprobe command: {}", e))?
        },
        _ = tokio::time::sleep(timeout_duration) => {
            return Err(anyhow!("ffprobe command timed out after 60 seconds"));
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        error!("ffprobe failed: {}", stderr);
        return Err(anyhow!("ffprobe command failed: {}", stderr));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout.trim().is_empty() {
        return Ok(Vec::new());
    }

    let json: Value = from_str(&stdout).context("Failed to parse ffprobe JSON output")?;

    let mut tracks = Vec::new();

    if let Some(streams) = json.get("streams").and_then(|s| s.as_array()) {
        for stream in streams.iter() {
            let index = stream
                .get("index")
                .and_then(|v| v.as_u64())
                .map(|v| v as usize)
                .unwrap_or(0);

            let codec_name = stream
                .get("codec_name")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown");

            let language = stream
                .get("tags")
                .and_then(|t| t.get("language"))
                .and_then(|l| l.as_str())
                .map(|s| s.to_string());

            let title = stream
                .get("tags")
                .and_then(|t| t.get("title"))
                .and_then(|l| l.as_str())
                .map(|s| s.to_string());

            tracks.push(TrackInfo {
                index,
                codec_name: codec_name.to_string(),
                language,
                title,
            });
        }
    }

    debug!("Found {} subtitle stream(s) in {:?}", tracks.len(), video_path);

    Ok(tracks)
}

/// Extract a single subtitle track to a standalone SRT file.
///
/// Fails only for this track; sibling extractions are unaffected.
pub async fn extract_track<P1: AsRef<Path>, P2: AsRef<Path>>(
    video_path: P1,
    track_id: usize,
    output_path: P2,
) -> Result<()> {
    let video_path = video_path.as_ref();
    let output_path = output_path.as_ref();

    if !video_path.exists() {
        return Err(anyhow!("Video file does not exist: {:?}", video_path));
    }

    let ffmpeg_future = Command::new("ffmpeg")
        .args([
            "-y",
            "-i",
            video_path.to_str().unwrap_or_default(),
            "-map",
            &format!("0:{}", track_id),
            "-c:s",
            "srt",
            output_path.to_str().unwrap_or_default(),
        ])
        .output();

    let timeout_duration = std::time::Duration::from_secs(120);
    let result = tokio::select! {
        result = ffmpeg_future => {
            result.map_err(|e| anyhow!("Failed to execute ffmpeg command for subtitle extraction: {}", e))?
        },
        _ = tokio::time::sleep(timeout_duration) => {
            return Err(anyhow!("ffmpeg command timed out after 2 minutes"));
        }
    };

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        let filtered = filter_ffmpeg_stderr(&stderr);
        error!("Subtitle extraction failed: {}", filtered);
        return Err(anyhow!("ffmpeg extraction failed: {}", filtered));
    }

    let file_size = std::fs::metadata(output_path)?.len();
    if file_size == 0 {
        return Err(anyhow!(
            "Extracted file is empty — no subtitles found in track {}",
            track_id
        ));
    }

    Ok(())
}

/// Filter ffmpeg stderr to only show meaningful error lines, stripping the
/// version banner, build configuration, and stream metadata noise.
fn filter_ffmpeg_stderr(stderr: &str) -> String {
    let dominated_prefixes = [
        "ffmpeg version",
        "  built with",
        "  configuration:",
        "  lib",
        "Input #",
        "  Metadata:",
        "  Duration:",
        "  Chapter",
        "    Chapter",
        "  Stream #",
        "      Metadata:",
        "        title",
        "        BPS",
        "        DURATION",
        "        NUMBER_OF",
        "        _STATISTICS",
        "Output #",
        "Stream mapping:",
        "Press [q]",
    ];

    let meaningful: Vec<&str> = stderr
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return false;
            }
            !dominated_prefixes.iter().any(|p| trimmed.starts_with(p))
        })
        .collect();

    if meaningful.is_empty() {
        "unknown ffmpeg error (stderr was empty after filtering)".to_string()
    } else {
        meaningful.join("\n")
    }
}
