//! Language-aware comment removal for the decomment toolchain.
//!
//! This crate turns source text into source text without comments:
//!
//! - **Language profiles** via [`LanguageProfile`] describe the string and
//!   comment delimiters of each supported language
//! - **Section splitting** via [`SectionRules`] tags embedded languages such as
//!   CSS inside HTML or PHP inside a template
//! - **Scanning** via [`Scanner`] finds comment ranges while skipping string
//!   literals, carrying state across pieces
//! - **Retention** via [`RetentionPolicy`] keeps comments that match a prefix
//!   or a user pattern
//! - **Blank-line collapsing** via [`BlankLineCollapser`] removes lines left
//!   empty by a removal
//!
//! [`Remover`] runs the whole pipeline and applies every deletion at once.
//!
//! # Example
//!
//! ```
//! use decomment_syntax::{RemovalOptions, Remover};
//!
//! let remover = Remover::new(RemovalOptions::default());
//! let source = "let a = 1; // note\n";
//! let removal = remover.remove(source, "javascript");
//! assert_eq!(removal.text(source), "let a = 1;\n");
//! ```
//!
//! # Language identifiers
//!
//! Languages are named by lower-case identifiers (`rust`, `python`, `html`).
//! [`language_for_path`] maps a file path to its identifier, returning
//! [`UNKNOWN_LANGUAGE`] when nothing matches. Unsupported languages are left
//! untouched.

mod blank_lines;
mod document;
mod language;
mod remover;
mod retention;
mod scanner;
mod sections;

pub use blank_lines::{BlankLineCollapser, LineWindow};
pub use document::{Document, Position, TextRange};
pub use language::{
    BlockClose, BlockComment, CommentDelimiter, LanguageProfile, LineRule, ProfileOptions,
    StringClose, StringDelimiter, UNKNOWN_LANGUAGE, language_for_extension, language_for_path,
};
pub use remover::{Removal, RemovalOptions, Remover};
pub use retention::{CommentCandidate, RetentionPattern, RetentionPatternError, RetentionPolicy};
pub use scanner::{CommentKinds, ScanMode, ScanOutcome, ScanState, Scanner};
pub use sections::{Piece, SectionBreak, SectionLanguage, SectionRule, SectionRules, Sections};

#[cfg(test)]
mod tests;
