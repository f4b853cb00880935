//! Behaviour-driven development (BDD) step definitions for decomment-syntax scenarios.

mod scenarios;

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, then, when};

use crate::{Removal, RemovalOptions, Remover, RetentionPattern};

// =============================================================================
// Test World
// =============================================================================

/// State shared across BDD steps.
#[derive(Default)]
struct TestWorld {
    /// Language identifier for the source.
    language: String,
    /// Source text to strip.
    source: String,
    /// Options for the remover.
    options: RemovalOptions,
    /// Result of the last removal.
    removal: Option<Removal>,
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

/// Strips surrounding double quotes from a string if present.
fn strip_quotes(s: &str) -> &str {
    s.trim_matches('"')
}

/// Expands `\n` escapes written in feature files.
fn unescape(s: &str) -> String {
    strip_quotes(s).replace("\\n", "\n")
}

// =============================================================================
// Given Steps
// =============================================================================

#[given("language {language}")]
fn given_language(world: &RefCell<TestWorld>, language: String) {
    world.borrow_mut().language = strip_quotes(&language).to_owned();
}

#[given("source {source}")]
fn given_source(world: &RefCell<TestWorld>, source: String) {
    world.borrow_mut().source = unescape(&source);
}

#[given("retention prefix {prefix}")]
fn given_prefix(world: &RefCell<TestWorld>, prefix: String) {
    world.borrow_mut().options.retention_prefix = Some(strip_quotes(&prefix).to_owned());
}

#[given("retention pattern {pattern}")]
fn given_pattern(world: &RefCell<TestWorld>, pattern: String) {
    let parsed: RetentionPattern = strip_quotes(&pattern).parse().expect("pattern");
    world.borrow_mut().options.retention_patterns.push(parsed);
}

#[given("{before} blank lines before and {after} after are removed")]
fn given_blank_lines(world: &RefCell<TestWorld>, before: usize, after: usize) {
    let mut w = world.borrow_mut();
    w.options.blank_lines_before = before;
    w.options.blank_lines_after = after;
}

#[given("single-line comments are kept")]
fn given_single_line_kept(world: &RefCell<TestWorld>) {
    world.borrow_mut().options.remove_single_line = false;
}

// =============================================================================
// When Steps
// =============================================================================

#[when("comments are removed")]
fn when_comments_removed(world: &RefCell<TestWorld>) {
    let mut w = world.borrow_mut();
    let remover = Remover::new(w.options.clone());
    let removal = remover.remove(&w.source, &w.language);
    w.removal = Some(removal);
}

// =============================================================================
// Then Steps
// =============================================================================

#[then("the result is {expected}")]
fn then_result_is(world: &RefCell<TestWorld>, expected: String) {
    let w = world.borrow();
    let removal = w.removal.as_ref().expect("removal should have run");
    assert_eq!(removal.text(&w.source), unescape(&expected));
}

#[then("the text is unchanged")]
fn then_unchanged(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    let removal = w.removal.as_ref().expect("removal should have run");
    assert!(!removal.has_changes());
}
