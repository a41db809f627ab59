//! Command-line interface for dirsort.
//!
//! Parses arguments, loads the filter configuration, runs the organize pass and the
//! optional empty-folder pass, and prints the summaries.

use crate::config::FilterConfig;
use crate::file_organizer::{OrganizeError, OrganizeMode, Organizer};
use crate::logging::DEFAULT_LOG_FILE;
use crate::output::OutputFormatter;
use clap::Parser;
use log::error;
use std::path::{Path, PathBuf};

/// Organize files into category or month folders.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Args {
    /// Directory to organize [default: your Downloads folder]
    pub directory: Option<PathBuf>,

    /// Organization mode
    #[arg(short, long, value_enum, default_value_t = OrganizeMode::Type)]
    pub mode: OrganizeMode,

    /// Remove empty folders after organizing
    #[arg(long)]
    pub clean: bool,

    /// Show what would be moved without touching any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Filter configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file to append to
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The directory to organize, falling back to the user's download directory.
    pub fn target_directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(default_directory)
    }
}

/// The platform download directory, `~/Downloads`, or the working directory.
pub fn default_directory() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Runs one invocation.
///
/// A missing source directory is logged and still counts as a completed run. Only a
/// broken configuration file produces an error.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use dirsort::cli::{Args, run_cli};
///
/// let args = Args::parse_from(["dirsort", "/tmp/inbox", "--mode", "date", "--clean"]);
/// if let Err(e) = run_cli(&args) {
///     eprintln!("Error: {}", e);
/// }
/// ```
pub fn run_cli(args: &Args) -> Result<(), String> {
    let directory = args.target_directory();

    OutputFormatter::info(&format!(
        "Starting file organization in: {}",
        directory.display()
    ));
    OutputFormatter::info(&format!("Organization mode: {}", args.mode));
    if args.dry_run {
        OutputFormatter::dry_run_notice("No files will be moved.");
    }

    let mut config = FilterConfig::load(args.config.as_deref())
        .map_err(|e| format!("Error loading configuration: {}", e))?;
    if let Some(log_name) = args.log_file.file_name() {
        config.exclude_filename(&log_name.to_string_lossy());
    }
    let filters = config
        .compile()
        .map_err(|e| format!("Error compiling filters: {}", e))?;

    let organizer = Organizer::new(&directory)
        .with_filters(filters)
        .dry_run(args.dry_run);

    let source_exists = match organizer.organize(args.mode) {
        Ok(report) => {
            OutputFormatter::summary_table(
                "SUMMARY",
                &report.counts_by_folder(),
                report.moved_count(),
            );
            if !report.failures.is_empty() {
                OutputFormatter::warning(&format!(
                    "{} files could not be organized. Please review the errors above.",
                    report.failures.len()
                ));
            }
            true
        }
        // Already logged by the organizer.
        Err(OrganizeError::InvalidSourceDir { .. }) => false,
        Err(e) => {
            error!("{}", e);
            true
        }
    };

    if args.clean && source_exists {
        match organizer.clean_empty_folders() {
            Ok(report) => {
                if !report.failures.is_empty() {
                    OutputFormatter::warning(&format!(
                        "{} folders could not be removed.",
                        report.failures.len()
                    ));
                }
            }
            Err(e) => error!("{}", e),
        }
    }

    finish(&args.log_file, args.dry_run);
    Ok(())
}

fn finish(log_file: &Path, dry_run: bool) {
    OutputFormatter::success(completion_message(dry_run));
    OutputFormatter::info(&format!(
        "Check {} for detailed information",
        log_file.display()
    ));
}

fn completion_message(dry_run: bool) -> &'static str {
    if dry_run {
        "Dry run complete. No files were modified."
    } else {
        "File organization complete!"
    }
}
