//! CLI argument definitions for the decomment binary.

use std::path::PathBuf;

use clap::Parser;
use decomment_config::Config;
use decomment_syntax::{RemovalOptions, RetentionPattern};

use crate::process::Mode;

/// Command-line interface for the decomment comment stripper.
///
/// Configuration flags (`--config-path`, `--log-filter`, `--log-format`,
/// `--blank-lines-before`, `--blank-lines-after`, `--keep-prefix`) must appear
/// before `PATH`.
#[derive(Parser, Debug)]
#[command(name = "decomment", version, about = "Strip comments from source files")]
pub(crate) struct Cli {
    /// File or directory to process.
    #[arg(value_name = "PATH")]
    pub(crate) path: PathBuf,
    /// Recurse into subdirectories (the default).
    #[arg(short = 'r', long, overrides_with = "no_recursive")]
    pub(crate) recursive: bool,
    /// Only process the top level of a directory.
    #[arg(long, overrides_with = "recursive")]
    pub(crate) no_recursive: bool,
    /// Only process files with these extensions, for example `.js,.ts`.
    #[arg(long, value_name = "EXTS", value_delimiter = ',')]
    pub(crate) ext: Vec<String>,
    /// Remove only single-line comments.
    #[arg(long, conflicts_with = "multi")]
    pub(crate) single: bool,
    /// Remove only multi-line comments.
    #[arg(long)]
    pub(crate) multi: bool,
    /// Save a `.bak` copy of each file before overwriting it.
    #[arg(long)]
    pub(crate) backup: bool,
    /// Show which files would change without writing them.
    #[arg(long)]
    pub(crate) dry_run: bool,
    /// Keep comments that start with this prefix.
    #[arg(long, value_name = "STR")]
    pub(crate) prefix: Option<String>,
    /// Keep comments matching this pattern; accepts `pattern` or
    /// `/pattern/flags`. May be repeated.
    #[arg(long = "keep-regex", value_name = "PATTERN")]
    pub(crate) keep_regex: Vec<RetentionPattern>,
    /// Treat `//` as a comment in C files.
    #[arg(long)]
    pub(crate) c99: bool,
    /// Remove JavaScript and TypeScript `/** */` blocks too.
    #[arg(long)]
    pub(crate) no_doc_blocks: bool,
    /// Use this language identifier instead of detecting it per file.
    #[arg(long, value_name = "ID")]
    pub(crate) language: Option<String>,
}

impl Cli {
    /// Returns true unless `--no-recursive` was the last recursion flag.
    pub(crate) const fn walks_recursively(&self) -> bool {
        self.recursive || !self.no_recursive
    }

    pub(crate) const fn mode(&self) -> Mode {
        if self.dry_run {
            Mode::DryRun
        } else {
            Mode::Write {
                backup: self.backup,
            }
        }
    }

    /// Merges per-invocation flags over the loaded configuration. The
    /// `--prefix` flag replaces the configured prefix; `--keep-regex` patterns
    /// are tested after the configured ones.
    pub(crate) fn removal_options(&self, config: &Config) -> RemovalOptions {
        let retention_prefix = self
            .prefix
            .clone()
            .or_else(|| config.keep_prefix().map(str::to_owned));
        let retention_patterns = config
            .keep_patterns()
            .iter()
            .chain(&self.keep_regex)
            .cloned()
            .collect();
        RemovalOptions {
            remove_single_line: !self.multi,
            remove_multi_line: !self.single,
            retention_prefix,
            retention_patterns,
            blank_lines_before: config.blank_lines_before(),
            blank_lines_after: config.blank_lines_after(),
            c99_line_comments: self.c99,
            preserve_doc_blocks: !self.no_doc_blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("decomment").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn defaults_remove_everything_recursively() {
        let cli = parse(&["src"]);
        assert!(cli.walks_recursively());
        assert_eq!(cli.mode(), Mode::Write { backup: false });
        let options = cli.removal_options(&Config::default());
        assert_eq!(options, RemovalOptions::default());
    }

    #[rstest]
    #[case(&["src", "--single"], true, false)]
    #[case(&["src", "--multi"], false, true)]
    fn only_flags_select_comment_kinds(
        #[case] args: &[&str],
        #[case] single_line: bool,
        #[case] multi_line: bool,
    ) {
        let options = parse(args).removal_options(&Config::default());
        assert_eq!(options.remove_single_line, single_line);
        assert_eq!(options.remove_multi_line, multi_line);
    }

    #[test]
    fn single_and_multi_conflict() {
        let result = Cli::try_parse_from(["decomment", "src", "--single", "--multi"]);
        assert!(result.is_err());
    }

    #[rstest]
    #[case(&["src", "--no-recursive"], false)]
    #[case(&["src", "--no-recursive", "-r"], true)]
    #[case(&["src", "-r", "--no-recursive"], false)]
    fn last_recursion_flag_wins(#[case] args: &[&str], #[case] recursive: bool) {
        assert_eq!(parse(args).walks_recursively(), recursive);
    }

    #[test]
    fn extensions_split_on_commas() {
        let cli = parse(&["src", "--ext", ".js,.ts"]);
        assert_eq!(cli.ext, vec![".js".to_owned(), ".ts".to_owned()]);
    }

    #[test]
    fn prefix_flag_overrides_configuration() {
        let config = Config::default().with_keep_prefix("#");
        let inherited = parse(&["src"]).removal_options(&config);
        assert_eq!(inherited.retention_prefix.as_deref(), Some("#"));
        let overridden = parse(&["src", "--prefix", "!"]).removal_options(&config);
        assert_eq!(overridden.retention_prefix.as_deref(), Some("!"));
    }

    #[test]
    fn keep_regex_follows_configured_patterns() {
        let config =
            Config::default().with_keep_patterns(vec![RetentionPattern::new("license", "")]);
        let cli = parse(&["src", "--keep-regex", "/todo/i", "--keep-regex", "fixme"]);
        let options = cli.removal_options(&config);
        assert_eq!(
            options.retention_patterns,
            vec![
                RetentionPattern::new("license", ""),
                RetentionPattern::new("todo", "i"),
                RetentionPattern::new("fixme", ""),
            ]
        );
    }

    #[test]
    fn dry_run_takes_precedence_over_backup() {
        let cli = parse(&["src", "--dry-run", "--backup"]);
        assert_eq!(cli.mode(), Mode::DryRun);
    }

    #[test]
    fn language_flags_reach_removal_options() {
        let options = parse(&["src", "--c99", "--no-doc-blocks"]).removal_options(&Config::default());
        assert!(options.c99_line_comments);
        assert!(!options.preserve_doc_blocks);
    }
}
