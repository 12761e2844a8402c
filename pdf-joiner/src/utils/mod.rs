//! Utilities for path collection and file checks.

use crate::{Result, error::JoinerError};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Check that `path` exists and is not a directory.
///
/// Symlinks are followed; a dangling link counts as missing.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    std::fs::metadata(path).is_ok_and(|meta| !meta.is_dir())
}

/// Check whether `path` carries a `.pdf` extension.
///
/// The comparison is exact, so `report.PDF` is flagged too.
pub fn has_pdf_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().extension().is_some_and(|ext| ext == "pdf")
}

/// Expand multiple glob patterns into filesystem paths.
///
/// Accepts anything iterable with items that convert to `&OsStr`, e.g.:
/// `&[&str]`, `Vec<PathBuf>`, or `Vec<OsString>`.
///
/// Returns a flattened list of resolved paths, in argument order.
/// An argument naming an existing path is taken literally, even when it
/// contains glob characters. A pattern that matches nothing is kept as a
/// literal path so a later existence check can report it by name.
///
/// Errors:
/// - Propagates `glob` parse errors.
/// - Propagates filesystem errors from glob iterator.
pub fn collect_paths_for_patterns<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<OsStr>,
{
    let mut resolved_paths = Vec::new();

    for pattern in patterns.into_iter() {
        let paths = collect_paths_for_pattern(pattern.as_ref())?;
        resolved_paths.extend(paths);
    }

    Ok(resolved_paths)
}

/// Expand a single glob pattern into filesystem paths.
///
/// Pattern examples:
/// - `"chapter-*.pdf"`
/// - `"./scans/page-?.pdf"`
///
/// Arguments that are not valid UTF-8 are never expanded.
fn collect_paths_for_pattern(argument: &OsStr) -> Result<Vec<PathBuf>> {
    let literal = Path::new(argument);
    let pattern = match argument.to_str() {
        Some(pattern) if is_glob(pattern) && !literal.exists() => pattern,
        _ => return Ok(vec![literal.to_path_buf()]),
    };

    let invalid = |reason: String| JoinerError::InvalidPattern {
        pattern: pattern.to_string(),
        reason,
    };

    let paths = glob::glob(pattern).map_err(|err| invalid(err.to_string()))?;

    let mut resolved_paths = Vec::new();
    for entry in paths {
        let path = entry.map_err(|err| invalid(err.to_string()))?;
        resolved_paths.push(path);
    }

    if resolved_paths.is_empty() {
        resolved_paths.push(literal.to_path_buf());
    }

    Ok(resolved_paths)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
