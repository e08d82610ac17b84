use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Return true if the path is an existing file with a .json extension
pub fn is_json_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "json")
}

/// Find JSON files in a directory, sorted by path.
/// If recursive is true, use walkdir; otherwise list the top level only.
pub fn find_json_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut json_files = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir) {
            let entry = entry?;
            if is_json_file(entry.path()) {
                json_files.push(entry.into_path());
            }
        }
    } else {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if is_json_file(&path) {
                json_files.push(path);
            }
        }
    }

    json_files.sort();
    Ok(json_files)
}
