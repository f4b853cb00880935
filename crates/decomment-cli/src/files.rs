//! File collection for a target path.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::errors::{AppError, FileError};

/// Restricts directory walks to a set of file extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ExtensionFilter {
    extensions: Option<BTreeSet<String>>,
}

impl ExtensionFilter {
    /// Builds a filter from values such as `.js` or `TS`. An empty list
    /// accepts every file.
    pub(crate) fn new(extensions: &[String]) -> Self {
        let normalised: BTreeSet<String> = extensions
            .iter()
            .map(|extension| extension.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|extension| !extension.is_empty())
            .collect();
        Self {
            extensions: (!normalised.is_empty()).then_some(normalised),
        }
    }

    pub(crate) fn accepts(&self, path: &Path) -> bool {
        let Some(extensions) = &self.extensions else {
            return true;
        };
        path.extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extensions.contains(&extension.to_ascii_lowercase()))
    }
}

/// Files found under a target, plus entries that could not be listed.
#[derive(Debug, Default)]
pub(crate) struct Collected {
    pub(crate) files: Vec<PathBuf>,
    pub(crate) failures: Vec<(PathBuf, FileError)>,
}

/// Lists the files to process under `root`.
///
/// A file root is returned as-is, whatever its extension. Directory entries
/// are visited in file-name order and filtered by extension.
pub(crate) fn collect(
    root: &Path,
    recursive: bool,
    filter: &ExtensionFilter,
) -> Result<Collected, AppError> {
    let metadata = fs::metadata(root).map_err(|source| AppError::Access {
        path: root.to_path_buf(),
        source,
    })?;
    if metadata.is_file() {
        return Ok(Collected {
            files: vec![root.to_path_buf()],
            failures: Vec::new(),
        });
    }

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(if recursive { usize::MAX } else { 1 })
        .sort_by_file_name();
    let mut collected = Collected::default();
    for result in walker {
        match result {
            Ok(entry) if entry.file_type().is_file() => {
                if filter.accepts(entry.path()) {
                    collected.files.push(entry.into_path());
                } else {
                    debug!(path = %entry.path().display(), "skipping filtered file");
                }
            }
            Ok(_) => {}
            Err(error) => {
                let path = error
                    .path()
                    .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                collected.failures.push((path, FileError::Walk(error)));
            }
        }
    }
    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let dir = TempDir::new().expect("temp dir");
        fs::create_dir(dir.path().join("nested")).expect("nested dir");
        for name in ["b.js", "a.ts", "notes.txt", "nested/c.JS"] {
            fs::write(dir.path().join(name), "x").expect("write file");
        }
        dir
    }

    fn names(root: &Path, collected: &Collected) -> Vec<String> {
        collected
            .files
            .iter()
            .map(|path| {
                path.strip_prefix(root)
                    .expect("path under root")
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[rstest]
    #[case(&[], "notes.txt", true)]
    #[case(&[".js"], "x.js", true)]
    #[case(&[".js"], "notes.txt", false)]
    #[case(&["TS", "js"], "y.ts", true)]
    #[case(&[".js"], "Makefile", false)]
    #[case(&[" "], "notes.txt", true)]
    fn filter_accepts_by_extension(
        #[case] extensions: &[&str],
        #[case] path: &str,
        #[case] expected: bool,
    ) {
        let owned: Vec<String> = extensions.iter().map(|value| (*value).to_owned()).collect();
        assert_eq!(ExtensionFilter::new(&owned).accepts(Path::new(path)), expected);
    }

    #[test]
    fn walks_recursively_in_name_order() {
        let dir = tree();
        let collected =
            collect(dir.path(), true, &ExtensionFilter::default()).expect("collect files");
        assert_eq!(
            names(dir.path(), &collected),
            vec!["a.ts", "b.js", "nested/c.JS", "notes.txt"]
        );
        assert!(collected.failures.is_empty());
    }

    #[test]
    fn non_recursive_walk_stays_at_top_level() {
        let dir = tree();
        let filter = ExtensionFilter::new(&[".js".to_owned()]);
        let collected = collect(dir.path(), false, &filter).expect("collect files");
        assert_eq!(names(dir.path(), &collected), vec!["b.js"]);
    }

    #[test]
    fn extension_filter_is_case_insensitive() {
        let dir = tree();
        let filter = ExtensionFilter::new(&[".js".to_owned()]);
        let collected = collect(dir.path(), true, &filter).expect("collect files");
        assert_eq!(names(dir.path(), &collected), vec!["b.js", "nested/c.JS"]);
    }

    #[test]
    fn file_root_ignores_filter() {
        let dir = tree();
        let root = dir.path().join("notes.txt");
        let filter = ExtensionFilter::new(&[".js".to_owned()]);
        let collected = collect(&root, true, &filter).expect("collect files");
        assert_eq!(collected.files, vec![root]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = TempDir::new().expect("temp dir");
        let result = collect(&dir.path().join("absent"), true, &ExtensionFilter::default());
        assert!(matches!(result, Err(AppError::Access { .. })));
    }
}
