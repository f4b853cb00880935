//! End-to-end tests for decomment-syntax using insta for snapshot testing.
//!
//! These tests drive the public API across happy and unhappy paths, with
//! snapshot testing for the rewritten text.

#[path = "e2e/snapshots.rs"]
mod snapshots;

use std::path::Path;

use rstest::{fixture, rstest};

use decomment_syntax::{
    Removal, RemovalOptions, Remover, RetentionPattern, language_for_path,
};

#[fixture]
fn remover() -> Remover {
    Remover::new(RemovalOptions::default())
}

// =============================================================================
// Happy Path: Removal by file type
// =============================================================================

#[rstest]
#[case("main.rs", "fn main() {\n    // greet\n    println!(\"hi\"); /* done */\n}\n", "fn main() {\n    println!(\"hi\");\n}\n")]
#[case("app.py", "def f():\n    # note\n    return '#'  # tail\n", "def f():\n    return '#'\n")]
#[case("query.sql", "select 1; -- one\n/* two */\nselect 2;\n", "select 1;\nselect 2;\n")]
#[case("init.lua", "--[[ header\n]]\nlocal x = 1 -- tail\n", "local x = 1\n")]
#[case("style.css", "a { color: red; } /* red */\n", "a { color: red; }\n")]
fn strips_by_detected_language(
    remover: Remover,
    #[case] path: &str,
    #[case] source: &str,
    #[case] expected: &str,
) {
    let language = language_for_path(Path::new(path));
    let removal = remover.remove(source, language);
    assert_eq!(removal.text(source), expected);
}

#[rstest]
fn selection_limits_removal_to_its_range(remover: Remover) {
    let source = "a(); // one\nb(); // two\nc(); // three\n";
    let removal = remover.remove_in(source, "javascript", &[12..24]);
    assert_eq!(
        removal.text(source),
        "a(); // one\nb();\nc(); // three\n"
    );
}

#[rstest]
fn multiple_selections_are_processed_independently(remover: Remover) {
    let source = "a(); // one\nb(); // two\nc(); // three\n";
    let removal = remover.remove_in(source, "javascript", &[0..12, 24..source.len()]);
    assert_eq!(removal.text(source), "a();\nb(); // two\nc();\n");
}

#[test]
fn retention_patterns_parse_from_delimited_syntax() {
    let pattern: RetentionPattern = "/copyright/i"
        .parse()
        .unwrap_or_else(|err| panic!("parse: {err}"));
    let remover = Remover::new(RemovalOptions {
        retention_patterns: vec![pattern],
        ..RemovalOptions::default()
    });
    let source = "// Copyright 2026\n// scratch\nx = 1;\n";
    let removal = remover.remove(source, "javascript");
    assert_eq!(removal.text(source), "// Copyright 2026\nx = 1;\n");
}

// =============================================================================
// Unhappy Path: Nothing to do
// =============================================================================

#[rstest]
#[case("", "javascript")]
#[case("let a = 1;\n", "javascript")]
#[case("// comment\n", "not-a-language")]
#[case("# comment\n", "unknown")]
fn unchanged_text_reports_no_changes(
    remover: Remover,
    #[case] source: &str,
    #[case] language: &str,
) {
    let removal = remover.remove(source, language);
    assert_eq!(removal, Removal::Unchanged);
    assert!(!removal.has_changes());
}

#[rstest]
fn unterminated_block_comment_is_left_in_place(remover: Remover) {
    let source = "x(); // gone\ny(); /* never closed\nz();\n";
    let removal = remover.remove(source, "javascript");
    assert_eq!(removal.text(source), "x();\ny(); /* never closed\nz();\n");
}

#[test]
fn malformed_retention_patterns_are_skipped() {
    let remover = Remover::new(RemovalOptions {
        retention_patterns: vec![
            RetentionPattern::new("(broken", ""),
            RetentionPattern::new("keep", ""),
        ],
        ..RemovalOptions::default()
    });
    let source = "# keep me\n# drop me\n";
    let removal = remover.remove(source, "python");
    assert_eq!(removal.text(source), "# keep me\n");
}
