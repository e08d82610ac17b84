//! Output sink: appends rendered HTML to a destination file

use crate::error::{ConversionError, ConversionResult};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Append `content` to the file at `path`.
///
/// The file and any missing parent directories are created. Existing content
/// is never truncated. A failed write is not rolled back.
pub fn append_html(path: &Path, content: &str) -> ConversionResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ConversionError::io(e, parent))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ConversionError::io(e, path))?;

    file.write_all(content.as_bytes())
        .map_err(|e| ConversionError::io(e, path))?;

    debug!(path = %path.display(), bytes = content.len(), "appended to sink");
    Ok(())
}
