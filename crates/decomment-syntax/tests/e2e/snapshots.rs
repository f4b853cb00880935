//! Snapshot tests for the `decomment-syntax` end-to-end suite.
//!
//! These tests use `insta` to pin stable, user-facing outputs.

use std::path::Path;

use insta::assert_snapshot;

use decomment_syntax::{RemovalOptions, Remover, language_for_path};

fn strip(source: &str, language: &str) -> String {
    Remover::new(RemovalOptions::default())
        .remove(source, language)
        .text(source)
        .to_owned()
}

#[test]
fn snapshot_language_detection() {
    let detected: Vec<_> = ["rs", "py", "vue", "h", "jsx", "txt"]
        .iter()
        .map(|ext| language_for_path(Path::new(&format!("file.{ext}"))))
        .collect();
    assert_snapshot!(format!("{detected:?}"), @r#"["rust", "python", "vue", "c", "javascriptreact", "unknown"]"#);
}

#[test]
fn snapshot_vue_single_file_component() {
    let source = concat!(
        "<template>\n",
        "  <!-- header -->\n",
        "  <p>hi</p>\n",
        "</template>\n",
        "<script>\n",
        "// setup\n",
        "export default {};\n",
        "</script>\n",
        "<style>\n",
        "/* theme */\n",
        "p { color: red; }\n",
        "</style>\n",
    );
    let stripped = strip(source, "vue");
    assert_snapshot!(format!("{stripped:?}"), @r#""<template>\n  <p>hi</p>\n</template>\n<script>\nexport default {};\n</script>\n<style>\np { color: red; }\n</style>\n""#);
}

#[test]
fn snapshot_multi_line_comment_removal() {
    let source = "int main(void) {\n    /*\n     * banner\n     */\n    return 0; /* ok */\n}\n";
    let stripped = strip(source, "c");
    assert_snapshot!(format!("{stripped:?}"), @r#""int main(void) {\n    return 0;\n}\n""#);
}
