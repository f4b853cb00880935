//! Crate-level test suites.

mod behaviour;
