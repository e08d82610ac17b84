use std::path::{Path, PathBuf};

/// Map an input JSON file to its output file under `output_dir`.
/// Keeps the path relative to `input_dir` and swaps the extension.
pub fn map_input_to_output(
    input_dir: &Path,
    input_file: &Path,
    output_dir: &Path,
    extension: &str,
) -> PathBuf {
    let relative = input_file.strip_prefix(input_dir).unwrap_or(input_file);
    output_dir.join(relative).with_extension(extension)
}
