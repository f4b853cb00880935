//! Per-file comment removal.

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use decomment_syntax::{Removal, Remover, language_for_path};
use tracing::debug;

use crate::errors::FileError;

/// How changed files are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Overwrite changed files, optionally saving `<file>.bak` first.
    Write { backup: bool },
    /// Report changed files without touching them.
    DryRun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileOutcome {
    Unchanged,
    Updated,
    WouldChange,
}

impl FileOutcome {
    pub(crate) const fn is_change(self) -> bool {
        matches!(self, Self::Updated | Self::WouldChange)
    }
}

/// Applies a [`Remover`] to files on disk.
pub(crate) struct Processor<'a> {
    remover: &'a Remover,
    language: Option<&'a str>,
    mode: Mode,
}

impl<'a> Processor<'a> {
    pub(crate) const fn new(remover: &'a Remover, language: Option<&'a str>, mode: Mode) -> Self {
        Self {
            remover,
            language,
            mode,
        }
    }

    /// Strips comments from `path`, writing the result back unless running
    /// dry.
    pub(crate) fn process(&self, path: &Path) -> Result<FileOutcome, FileError> {
        let text = fs::read_to_string(path).map_err(FileError::Read)?;
        let language = self.language.unwrap_or_else(|| language_for_path(path));
        let Removal::Rewritten(stripped) = self.remover.remove(&text, language) else {
            debug!(path = %path.display(), language, "no comments removed");
            return Ok(FileOutcome::Unchanged);
        };

        match self.mode {
            Mode::DryRun => Ok(FileOutcome::WouldChange),
            Mode::Write { backup } => {
                if backup {
                    let copy = backup_path(path);
                    fs::write(&copy, &text)
                        .map_err(|source| FileError::Backup { path: copy, source })?;
                }
                fs::write(path, stripped).map_err(FileError::Write)?;
                debug!(path = %path.display(), language, "file updated");
                Ok(FileOutcome::Updated)
            }
        }
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".bak");
    PathBuf::from(name)
}

/// Totals reported once every file has been visited. Files that failed
/// still count as processed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) processed: usize,
    pub(crate) updated: usize,
}

impl Summary {
    pub(crate) const fn record(&mut self, outcome: FileOutcome) {
        self.processed += 1;
        if outcome.is_change() {
            self.updated += 1;
        }
    }

    pub(crate) const fn record_failure(&mut self) {
        self.processed += 1;
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Processed {} files, updated {}",
            self.processed, self.updated
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decomment_syntax::RemovalOptions;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    const SOURCE: &str = "let a = 1; // note\n";
    const STRIPPED: &str = "let a = 1;\n";

    #[fixture]
    fn remover() -> Remover {
        Remover::new(RemovalOptions::default())
    }

    fn source_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("write source");
        path
    }

    #[rstest]
    fn write_mode_rewrites_the_file(remover: Remover) {
        let dir = TempDir::new().expect("temp dir");
        let path = source_file(&dir, "a.js", SOURCE);
        let processor = Processor::new(&remover, None, Mode::Write { backup: false });
        assert_eq!(processor.process(&path).expect("process"), FileOutcome::Updated);
        assert_eq!(fs::read_to_string(&path).expect("read"), STRIPPED);
        assert!(!dir.path().join("a.js.bak").exists());
    }

    #[rstest]
    fn backup_keeps_the_original_text(remover: Remover) {
        let dir = TempDir::new().expect("temp dir");
        let path = source_file(&dir, "a.js", SOURCE);
        let processor = Processor::new(&remover, None, Mode::Write { backup: true });
        processor.process(&path).expect("process");
        let backup = fs::read_to_string(dir.path().join("a.js.bak")).expect("read backup");
        assert_eq!(backup, SOURCE);
        assert_eq!(fs::read_to_string(&path).expect("read"), STRIPPED);
    }

    #[rstest]
    fn dry_run_leaves_the_file_alone(remover: Remover) {
        let dir = TempDir::new().expect("temp dir");
        let path = source_file(&dir, "a.js", SOURCE);
        let processor = Processor::new(&remover, None, Mode::DryRun);
        assert_eq!(
            processor.process(&path).expect("process"),
            FileOutcome::WouldChange
        );
        assert_eq!(fs::read_to_string(&path).expect("read"), SOURCE);
    }

    #[rstest]
    fn unknown_extension_is_unchanged(remover: Remover) {
        let dir = TempDir::new().expect("temp dir");
        let path = source_file(&dir, "notes.txt", SOURCE);
        let processor = Processor::new(&remover, None, Mode::Write { backup: true });
        assert_eq!(
            processor.process(&path).expect("process"),
            FileOutcome::Unchanged
        );
        assert!(!dir.path().join("notes.txt.bak").exists());
    }

    #[rstest]
    fn language_override_replaces_detection(remover: Remover) {
        let dir = TempDir::new().expect("temp dir");
        let path = source_file(&dir, "notes.txt", SOURCE);
        let processor = Processor::new(&remover, Some("javascript"), Mode::Write { backup: false });
        assert_eq!(processor.process(&path).expect("process"), FileOutcome::Updated);
        assert_eq!(fs::read_to_string(&path).expect("read"), STRIPPED);
    }

    #[rstest]
    fn unreadable_file_is_a_read_error(remover: Remover) {
        let dir = TempDir::new().expect("temp dir");
        let processor = Processor::new(&remover, None, Mode::DryRun);
        let result = processor.process(&dir.path().join("absent.js"));
        assert!(matches!(result, Err(FileError::Read(_))));
    }

    #[test]
    fn summary_counts_changes() {
        let mut summary = Summary::default();
        summary.record(FileOutcome::Updated);
        summary.record(FileOutcome::Unchanged);
        summary.record(FileOutcome::WouldChange);
        summary.record_failure();
        assert_eq!(summary.to_string(), "Processed 4 files, updated 2");
    }
}
