//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ListingError, ListingErrorKind, ListingResult};
use crate::listing::config::DEFAULT_INDENT;
use crate::listing::{ListingConfig, OutputConfig};
use crate::output::OutputTarget;

/// Main CLI arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pathlist")]
#[command(about = "Generate a JSON file with file paths in a directory")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// The directory to scan for files
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// The output JSON file to write the file paths to (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Spaces per indentation level (0-8, default: 4)
    #[arg(long)]
    pub indent: Option<u8>,

    /// Write non-ASCII characters as UTF-8 instead of \uXXXX escapes
    #[arg(long)]
    pub unicode: bool,

    /// Sort entries by file name within each directory
    #[arg(long)]
    pub sort: bool,

    /// Follow symbolic links while walking
    #[arg(long)]
    pub follow_links: bool,

    /// Maximum depth to descend (root is depth 0)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Skip entries that cannot be read instead of aborting
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Print a run summary to stderr
    #[arg(long)]
    pub stats: bool,

    /// Print run statistics to stderr as JSON
    #[arg(long)]
    pub stats_json: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub listing_config: ListingConfig,
    pub output_config: OutputConfig,
    pub target: OutputTarget,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ListingResult<Self> {
        let input_dir = args.input.clone().ok_or_else(|| {
            ListingError::configuration("No input directory provided. Use -i/--input <DIR>")
        })?;

        let listing_config = ListingConfig::new(input_dir)
            .with_follow_links(args.follow_links)
            .with_sort_by_name(args.sort)
            .with_max_depth(args.max_depth)
            .with_skip_unreadable(args.skip_unreadable);
        listing_config
            .validate()
            .map_err(ListingError::configuration)?;

        let output_config = OutputConfig {
            indent_size: args.indent.unwrap_or(DEFAULT_INDENT),
            ensure_ascii: !args.unicode,
        };
        output_config
            .validate()
            .map_err(ListingError::configuration)?;

        let target = OutputTarget::from_option(args.output.clone());

        Ok(Self {
            args,
            listing_config,
            output_config,
            target,
        })
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Check if machine-readable stats are requested
    pub fn want_stats_json(&self) -> bool {
        self.args.stats_json
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        format!("'{}'", self.listing_config.input_dir.display())
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Create a spinner for the walk, if stderr is an interactive terminal
    pub fn create_spinner(quiet: bool) -> Option<indicatif::ProgressBar> {
        if quiet || !atty::is(atty::Stream::Stderr) {
            return None;
        }

        let pb = indicatif::ProgressBar::new_spinner();
        if let Ok(style) =
            indicatif::ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")
        {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }
}

/// Suggestion printed after an error, if one applies
pub fn error_tip(error: &ListingError) -> Option<&'static str> {
    match error.kind()? {
        ListingErrorKind::InputNotFound { .. } | ListingErrorKind::NotADirectory { .. } => {
            Some("Tip: --input must point at an existing directory")
        }
        ListingErrorKind::Traversal { .. } => {
            Some("Tip: Use --skip-unreadable to skip entries that cannot be read")
        }
        ListingErrorKind::Io { .. } => Some("Tip: Check that the --output location is writable"),
        _ => None,
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ListingError) {
    CliUtils::show_error(&error.user_message());

    if let Some(tip) = error_tip(error) {
        eprintln!("\n{}", tip);
    }

    eprintln!("\nTry 'pathlist --help' for usage information.");
}
