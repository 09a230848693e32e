//! Shared path helpers.

use std::path::{Path, PathBuf};

use crate::error::{PrepError, Result};

/// Insert `_<value>` just before the file extension.
///
/// `a/b/c.jpg` with value `7` becomes `a/b/c_7.jpg`. Sweep operations call
/// this once per parameter value to fan a single requested output path into
/// a family of sibling paths. Only the final path segment is touched, so
/// directory names containing dots are left alone.
///
/// Paths without a file name or without an extension are rejected with
/// [`PrepError::MissingExtension`].
pub fn parameterized_path(path: &Path, value: i32) -> Result<PathBuf> {
    let stem = path.file_stem().filter(|s| !s.is_empty());
    let ext = path.extension();
    match (stem, ext) {
        (Some(stem), Some(ext)) => {
            let mut name = stem.to_os_string();
            name.push(format!("_{value}"));
            name.push(".");
            name.push(ext);
            Ok(path.with_file_name(name))
        }
        _ => Err(PrepError::MissingExtension(path.to_path_buf())),
    }
}
