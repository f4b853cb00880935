//! Scenario bindings for the `decomment-syntax` BDD feature file.
//!
//! These functions bind Gherkin scenario names to the step definitions in the
//! parent module.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::scenario;

use super::TestWorld;

/// Fixture providing the shared BDD world.
#[fixture]
fn world() -> RefCell<TestWorld> {
    super::world()
}

#[scenario(
    path = "tests/features/decomment_syntax.feature",
    name = "Trailing line comment is removed"
)]
fn trailing_line_comment(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/decomment_syntax.feature",
    name = "Comment markers inside strings survive"
)]
fn markers_inside_strings(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/decomment_syntax.feature",
    name = "Nested block comments close at matching depth"
)]
fn nested_block_comments(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/decomment_syntax.feature",
    name = "Prefixed comments are retained"
)]
fn prefixed_comments_retained(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/decomment_syntax.feature",
    name = "Pattern-matched comments are retained"
)]
fn pattern_comments_retained(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/decomment_syntax.feature",
    name = "Embedded stylesheet comments are removed"
)]
fn embedded_stylesheet(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/decomment_syntax.feature",
    name = "Surrounding blank lines are collapsed"
)]
fn blank_lines_collapsed(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/decomment_syntax.feature",
    name = "Single-line comments can be kept"
)]
fn single_line_kept(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/decomment_syntax.feature",
    name = "Unsupported languages are left alone"
)]
fn unsupported_language(world: RefCell<TestWorld>) {
    drop(world);
}
