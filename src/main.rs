// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod cleaning;
mod errors;
mod file_utils;
mod subtitle_processor;
mod track_extractor;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Remove closed-captioning artifacts from subtitle files (default command)
    Clean(CleanArgs),

    /// Generate shell completions for subsweep
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct CleanArgs {
    /// Subtitle files (.srt), video files or directories to process
    #[arg(value_name = "INPUT_PATHS", required = true)]
    input_paths: Vec<PathBuf>,

    /// Language code to filter video subtitle tracks (e.g., --lang en)
    #[arg(short, long)]
    lang: Option<String>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subsweep - remove closed captioning from subtitles
///
/// Strips speaker labels, sound-effect annotations, song lines and font
/// styling from SRT files, extracting text tracks from video containers
/// first when needed.
#[derive(Parser, Debug)]
#[command(name = "subsweep")]
#[command(version = "1.0.0")]
#[command(about = "Remove closed captioning from subtitles")]
#[command(long_about = "subsweep strips closed-captioning artifacts from SRT subtitle files.

EXAMPLES:
    subsweep movie.srt                    # Clean a subtitle file
    subsweep movie.mkv                    # Extract and clean all text tracks
    subsweep --lang en movie.mkv          # Only tracks tagged English
    subsweep -f movie.srt                 # Overwrite an existing output file
    subsweep --log-level debug /shows/    # Process a directory, verbose
    subsweep completions bash             # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.

OUTPUT:
    Cleaned files are written next to their source with a configurable
    suffix (movie_clean.srt). Files that are already clean produce no
    output.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Subtitle files (.srt), video files or directories to process
    #[arg(value_name = "INPUT_PATHS")]
    input_paths: Vec<PathBuf>,

    /// Language code to filter video subtitle tracks (e.g., --lang en)
    #[arg(short, long)]
    lang: Option<String>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subsweep", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Clean(args)) => run_clean(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            if cli.input_paths.is_empty() {
                return Err(anyhow!(
                    "INPUT_PATHS is required when no subcommand is specified"
                ));
            }

            let clean_args = CleanArgs {
                input_paths: cli.input_paths,
                lang: cli.lang,
                force_overwrite: cli.force_overwrite,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_clean(clean_args).await
        }
    }
}

async fn run_clean(options: CleanArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let mut config = Config::default();

        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let controller = Controller::with_config(config)?;

    let mut failures = 0;
    for input_path in &options.input_paths {
        if let Err(e) = controller
            .run(
                input_path.clone(),
                options.lang.as_deref(),
                options.force_overwrite,
            )
            .await
        {
            log::error!("Error processing {:?}: {}", input_path, e);
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(anyhow!("{} input path(s) failed", failures));
    }

    Ok(())
}
