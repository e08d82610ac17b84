use crate::cli::path_mapping::map_input_to_output;
use crate::conversion::engine::{ConversionEngine, HtmlData};
use crate::conversion::stats::ConversionStatistics;
use crate::conversion::{ConversionConfig, ConversionResult};
use crate::error::{ConversionError, ConversionErrorKind};
use crate::parser::directory::find_json_files;
use std::path::Path;
use tracing::{debug, warn};

/// What happened to one file of a directory conversion
#[derive(Debug)]
pub struct FileReport<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub result: Result<&'a HtmlData, &'a ConversionError>,
}

/// List the JSON files a directory conversion would pick up
pub fn discover(input_dir: &Path, recursive: bool) -> ConversionResult<Vec<std::path::PathBuf>> {
    find_json_files(input_dir, recursive).map_err(|e| ConversionError::io(e, input_dir))
}

/// Convert every JSON file under `input_dir` into `output_dir/<relative>.html`.
///
/// Output files are appended to, like single-file conversion. `on_file` sees
/// each file as it finishes. Without `continue_on_error` the first failure
/// aborts the run.
pub fn convert_directory<F>(
    input_dir: &Path,
    output_dir: &Path,
    recursive: bool,
    config: &ConversionConfig,
    continue_on_error: bool,
    mut on_file: F,
) -> ConversionResult<ConversionStatistics>
where
    F: FnMut(FileReport<'_>),
{
    let json_files = discover(input_dir, recursive)?;
    debug!(count = json_files.len(), dir = %input_dir.display(), "found JSON files");

    let engine = ConversionEngine::new(config.clone());
    let mut stats = ConversionStatistics::new();

    for json_file in &json_files {
        let output_file = map_input_to_output(input_dir, json_file, output_dir, "html");

        match engine.convert_file(json_file, &output_file) {
            Ok(html) => {
                stats.combine(&ConversionStatistics::for_conversion(&html.metadata));
                on_file(FileReport {
                    input: json_file,
                    output: &output_file,
                    result: Ok(&html),
                });
            }
            Err(e) => {
                warn!(file = %json_file.display(), error = %e, "conversion failed");
                stats.record_failure();
                on_file(FileReport {
                    input: json_file,
                    output: &output_file,
                    result: Err(&e),
                });
                if !continue_on_error {
                    return Err(ConversionError::conversion_with_source(
                        ConversionErrorKind::ConversionFailed {
                            message: format!("Failed to convert {}", json_file.display()),
                        },
                        e.into(),
                    ));
                }
            }
        }
    }

    Ok(stats)
}
