use clap::Parser;
use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use htmlconv::cli::{handle_error, Args, CliConfig, CliUtils};
use htmlconv::conversion::batch::{self, FileReport};
use htmlconv::conversion::engine::ConversionEngine;
use htmlconv::conversion::limits;
use htmlconv::conversion::stats::ConversionStatistics;
use htmlconv::sink;
use htmlconv::{
    ConversionError, ConversionErrorKind, ConversionResult, DataNode, HtmlData, JsonSource,
};

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            handle_error(&e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config);

    let result = if config.is_validate_only() {
        handle_validation(&config)
    } else {
        handle_conversion(&config)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            handle_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &CliConfig) {
    // RUST_LOG wins over the verbosity flags
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_validation(config: &CliConfig) -> ConversionResult<()> {
    let quiet = config.is_quiet();

    match config.input_source()? {
        JsonSource::Directory(dir) => validate_directory(&dir, config),
        source => {
            let data = load(&source, config)?;
            check_top_level(&data)?;
            CliUtils::show_success("Valid JSON", quiet);
            Ok(())
        }
    }
}

fn validate_directory(dir: &Path, config: &CliConfig) -> ConversionResult<()> {
    let quiet = config.is_quiet();
    let mut invalid = 0usize;

    for json_file in batch::discover(dir, config.args.recursive)? {
        let relative = json_file.strip_prefix(dir).unwrap_or(&json_file);
        let outcome = load(&JsonSource::File(json_file.clone()), config)
            .and_then(|data| check_top_level(&data));

        match outcome {
            Ok(()) => CliUtils::show_success(&relative.display().to_string(), quiet),
            Err(e) => {
                invalid += 1;
                CliUtils::show_error(&format!("{}: {}", relative.display(), e.user_message()));
            }
        }
    }

    if invalid > 0 {
        return Err(ConversionError::conversion(
            ConversionErrorKind::ConversionFailed {
                message: format!("{} invalid JSON file(s) in {}", invalid, dir.display()),
            },
        ));
    }
    Ok(())
}

fn handle_conversion(config: &CliConfig) -> ConversionResult<()> {
    let source = config.input_source()?;
    debug!(source = %source.description(), output = %config.output_description(), "starting conversion");

    match source {
        JsonSource::Directory(dir) => convert_directory(&dir, config),
        source => {
            let engine = ConversionEngine::new(config.conversion_config.clone());
            let html = match &source {
                JsonSource::Stdin => engine.convert_string(&read_stdin(config)?)?,
                other => engine.convert_from_source(other)?,
            };
            write_output(&html, config)?;

            if config.want_stats() {
                output_statistics(&ConversionStatistics::for_conversion(&html.metadata));
            }
            Ok(())
        }
    }
}

fn write_output(html: &HtmlData, config: &CliConfig) -> ConversionResult<()> {
    match &config.args.output {
        Some(output_path) => {
            sink::append_html(output_path, html.as_str())?;
            CliUtils::show_success(
                &format!("Converted to: {}", output_path.display()),
                config.is_quiet(),
            );
        }
        None => {
            // stdout gets exactly the bytes a file sink would
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_str().as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| ConversionError::io(e, "<stdout>"))?;
        }
    }
    Ok(())
}

fn convert_directory(input_dir: &Path, config: &CliConfig) -> ConversionResult<()> {
    let output_dir = config.args.output.as_deref().ok_or_else(|| {
        ConversionError::conversion(ConversionErrorKind::configuration(
            "Output directory required for directory conversion (use -o DIR)".to_string(),
        ))
    })?;

    let quiet = config.is_quiet();
    let total = batch::discover(input_dir, config.args.recursive)?.len();
    if total == 0 {
        CliUtils::show_warning(
            &format!("No JSON files found in {}", input_dir.display()),
            quiet,
        );
        return Ok(());
    }

    let progress = CliUtils::create_progress_bar(total as u64, quiet);
    let stats = batch::convert_directory(
        input_dir,
        output_dir,
        config.args.recursive,
        &config.conversion_config,
        config.continue_on_error(),
        |report: FileReport<'_>| {
            let relative = report.input.strip_prefix(input_dir).unwrap_or(report.input);
            progress.suspend(|| match report.result {
                Ok(_) => CliUtils::show_success(
                    &format!("{} -> {}", relative.display(), report.output.display()),
                    quiet,
                ),
                Err(e) => CliUtils::show_error(&format!(
                    "Error converting {}: {}",
                    relative.display(),
                    e.user_message()
                )),
            });
            progress.inc(1);
        },
    );
    progress.finish_and_clear();

    let stats = stats?;
    CliUtils::show_success(&stats.summary(), quiet);
    if config.want_stats() {
        output_statistics(&stats);
    }
    Ok(())
}

fn load(source: &JsonSource, config: &CliConfig) -> ConversionResult<DataNode> {
    match source {
        JsonSource::Stdin => {
            let json = read_stdin(config)?;
            Ok(JsonSource::String(json).load()?)
        }
        other => {
            limits::check_source_size_before_read(other, &config.conversion_config)?;
            Ok(other.load()?)
        }
    }
}

fn check_top_level(data: &DataNode) -> ConversionResult<()> {
    if data.is_mapping() || data.is_sequence() {
        Ok(())
    } else {
        Err(ConversionError::conversion(
            ConversionErrorKind::invalid_input_kind(data.kind_name()),
        ))
    }
}

fn read_stdin(config: &CliConfig) -> ConversionResult<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| ConversionError::parse(format!("Failed to read stdin: {}", e), None))?;
    limits::check_size(buffer.len(), &config.conversion_config)?;
    Ok(buffer)
}

fn output_statistics(stats: &ConversionStatistics) {
    eprintln!("\nConversion Statistics:");
    eprintln!(
        "Input size: {}",
        CliUtils::format_file_size(stats.input_size_bytes)
    );
    eprintln!(
        "Output size: {}",
        CliUtils::format_file_size(stats.output_size_bytes)
    );
    eprintln!("Elements: {}", stats.element_count);
    if stats.input_size_bytes > 0 {
        eprintln!("Expansion: {:.1}%", stats.expansion_percent());
    }
    eprintln!(
        "Processing time: {}",
        CliUtils::format_duration(Duration::from_millis(stats.processing_time_ms))
    );
    if stats.failed_count > 0 {
        eprintln!("Failed files: {}", stats.failed_count);
    }
}
