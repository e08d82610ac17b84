//! Command-line interface module

use clap::Parser;
use console::style;
use std::path::PathBuf;
use std::time::Duration;

use crate::conversion::config::DEFAULT_MAX_INPUT_SIZE;
use crate::conversion::{ConversionConfig, ConversionResult, TagMapping};
use crate::error::{ConversionError, ConversionErrorKind};
use crate::parser::JsonSource;

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "htmlconv")]
#[command(about = "Convert JSON data to HTML markup")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Input JSON source (string, file, or directory)
    #[arg()]
    pub input: Option<String>,

    /// Output file to append to, or output directory (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read JSON from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Recursively process directories
    #[arg(long)]
    pub recursive: bool,

    /// Render arrays of objects as nested <ul>/<li> lists
    #[arg(long)]
    pub table_like: bool,

    /// Keep <, >, &, " and ' in text values unescaped
    #[arg(long)]
    pub no_escape: bool,

    /// Read tag.class#id shorthand in tag names
    #[arg(long)]
    pub tag_options: bool,

    /// Map a data key to a tag, e.g. -m title=h1 (repeatable)
    #[arg(short = 'm', long = "map", value_name = "KEY=TAG")]
    pub map: Vec<String>,

    /// JSON file holding a {"key": "tag"} mapping; -m entries win over it
    #[arg(long, value_name = "FILE")]
    pub map_file: Option<PathBuf>,

    /// Maximum input size (e.g., 100MB, default: 100MB)
    #[arg(long)]
    pub max_input_size: Option<String>,

    /// Only load and check the JSON, don't convert
    #[arg(long)]
    pub validate_only: bool,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Continue converting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let mut tag_mapping = match &args.map_file {
            Some(path) => TagMapping::from_json_file(path)?,
            None => TagMapping::new(),
        };
        tag_mapping.extend_from(TagMapping::from_entries(&args.map)?);

        let config = ConversionConfig::default()
            .with_table_like(args.table_like)
            .with_html_like_text(!args.no_escape)
            .with_tag_options(args.tag_options)
            .with_tag_mapping(tag_mapping)
            .with_max_input_size(parse_size(&args.max_input_size)?);

        config
            .validate()
            .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;

        Ok(config)
    }

    /// Work out where the JSON comes from
    pub fn input_source(&self) -> ConversionResult<JsonSource> {
        if self.args.stdin {
            return Ok(JsonSource::Stdin);
        }

        let Some(input) = &self.args.input else {
            return Err(ConversionError::conversion(ConversionErrorKind::configuration(
                "No input provided. Use --stdin or provide an input path".to_string(),
            )));
        };

        // Inline JSON: starts with { or [ and ends with the matching bracket
        let trimmed = input.trim();
        if (trimmed.starts_with('{') && trimmed.ends_with('}'))
            || (trimmed.starts_with('[') && trimmed.ends_with(']'))
        {
            return Ok(JsonSource::String(input.clone()));
        }

        let path = PathBuf::from(input);
        if path.is_file() {
            Ok(JsonSource::File(path))
        } else if path.is_dir() {
            Ok(JsonSource::Directory(path))
        } else {
            Err(ConversionError::conversion(ConversionErrorKind::io(
                format!("Input path does not exist: {}", input),
                Some(path),
            )))
        }
    }

    /// Check if we should continue on error
    pub fn continue_on_error(&self) -> bool {
        self.args.continue_on_error
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Check if only validation is requested
    pub fn is_validate_only(&self) -> bool {
        self.args.validate_only
    }

    /// Default tracing filter directive for the chosen verbosity
    pub fn log_directive(&self) -> &'static str {
        if self.is_verbose() {
            "htmlconv=debug"
        } else if self.is_quiet() {
            "htmlconv=error"
        } else {
            "htmlconv=warn"
        }
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        if let Some(output) = &self.args.output {
            format!("'{}'", output.display())
        } else {
            "standard output".to_string()
        }
    }
}

/// Parse a size string (e.g., "100MB", "1GB", "500KB", "2048")
pub fn parse_size(limit: &Option<String>) -> ConversionResult<usize> {
    let Some(limit) = limit else {
        return Ok(DEFAULT_MAX_INPUT_SIZE);
    };

    let limit_str = limit.trim().to_uppercase();
    let (number, multiplier) = if let Some(n) = limit_str.strip_suffix("GB") {
        (n, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(n) = limit_str.strip_suffix("MB") {
        (n, 1024.0 * 1024.0)
    } else if let Some(n) = limit_str.strip_suffix("KB") {
        (n, 1024.0)
    } else if let Some(n) = limit_str.strip_suffix('B') {
        (n, 1.0)
    } else {
        (limit_str.as_str(), 1.0)
    };

    number
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| (n * multiplier) as usize)
        .ok_or_else(|| {
            ConversionError::conversion(ConversionErrorKind::Configuration {
                message: format!("Invalid size: {}", limit),
            })
        })
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a progress bar for file processing; hidden in quiet mode
    pub fn create_progress_bar(total: u64, quiet: bool) -> indicatif::ProgressBar {
        if quiet {
            return indicatif::ProgressBar::hidden();
        }

        let pb = indicatif::ProgressBar::new(total);
        let style = indicatif::ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
            .map(|s| s.progress_chars("#>-"))
            .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar());
        pb.set_style(style);
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", style("⚠").yellow(), message);
        }
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    CliUtils::show_error(&error.user_message());

    // Provide helpful suggestions
    match error {
        ConversionError::ParseError(_) => {
            eprintln!("\nTip: Use --validate-only to check JSON syntax before conversion");
        }
        ConversionError::Conversion { kind, .. } => match kind {
            ConversionErrorKind::InputTooLarge { .. } => {
                eprintln!("\nTip: Use --max-input-size to raise the limit");
            }
            ConversionErrorKind::MalformedItem { .. } => {
                eprintln!("\nTip: Top-level arrays must contain only objects");
            }
            _ => {}
        },
        ConversionError::Other(_) => {}
    }

    eprintln!("\nTry 'htmlconv --help' for usage information.");
}
