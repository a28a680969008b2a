//! Discovery Module for JSX Origin Lint
//!
//! Recursively scans directories for JSX sources and lints them in parallel.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use walkdir::{DirEntry, WalkDir};

use crate::diagnostic::Diagnostic;
use crate::error::{LintError, Result};
use crate::linter::Linter;

pub const LINTABLE_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "tsx"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub file: String,
    pub diagnostics: Vec<Diagnostic>,
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name == "node_modules" || name.starts_with('.'))
}

fn is_lintable(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| LINTABLE_EXTENSIONS.contains(&ext))
}

/// Recursively find lintable files, skipping `node_modules` and dot-directories.
pub fn find_source_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e))
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_lintable(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

pub fn lint_file(linter: &Linter, path: &Path) -> Result<Vec<Diagnostic>> {
    let source = fs::read_to_string(path).map_err(|source| LintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    linter.lint_source(&path.to_string_lossy(), &source)
}

/// Lints every source file under `root`. Files that fail to read or parse are
/// logged and left out of the result.
pub fn lint_directory(root: &Path, linter: &Linter) -> Result<Vec<FileReport>> {
    let files = find_source_files(root)?;

    let reports = files
        .par_iter()
        .filter_map(|path| match lint_file(linter, path) {
            Ok(diagnostics) => Some(FileReport {
                file: path.to_string_lossy().to_string(),
                diagnostics,
            }),
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                None
            }
        })
        .collect();

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, contents: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_find_source_files_filters() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/App.jsx", "<div />;");
        write(dir.path(), "src/lib/util.js", "export const a = 1;");
        write(dir.path(), "src/README.md", "# readme");
        write(dir.path(), "node_modules/pkg/index.js", "module.exports = {};");
        write(dir.path(), ".cache/App.jsx", "<div />;");

        let files = find_source_files(dir.path()).unwrap();
        let rel: Vec<String> = files
            .iter()
            .map(|p| {
                p.strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(rel, vec!["src/App.jsx", "src/lib/util.js"]);
    }

    #[test]
    fn test_lint_directory_reports_and_skips_broken_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.jsx", "<div style={{ color: 'red' }} />;");
        write(dir.path(), "b.jsx", "<div style={{ color: 'red' }>");
        write(dir.path(), "c.jsx", "<div style={styles.root} />;");

        let mut reports = lint_directory(dir.path(), &Linter::recommended()).unwrap();
        reports.sort_by(|a, b| a.file.cmp(&b.file));

        assert_eq!(reports.len(), 2);
        assert!(reports[0].file.ends_with("a.jsx"));
        assert_eq!(reports[0].diagnostics.len(), 1);
        assert!(reports[1].file.ends_with("c.jsx"));
        assert!(reports[1].diagnostics.is_empty());
    }

    #[test]
    fn test_lint_file_missing() {
        let err = lint_file(&Linter::recommended(), Path::new("/definitely/not/here.jsx"))
            .unwrap_err();
        assert!(matches!(err, LintError::Io { .. }));
    }
}
