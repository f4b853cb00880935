//! Per-language delimiter profiles.
//!
//! A [`LanguageProfile`] describes how one language spells strings and
//! comments. Profiles are assembled from small shared fragments (quote sets,
//! C-family comments, hash comments, markup comments) so the table below reads
//! as data rather than control flow.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::sections::{SectionLanguage, SectionRule, SectionRules};

/// Identifier of the empty profile used for text outside embedded sections.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// How a string literal ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringClose {
    /// Closed by the same token that opened it.
    Open,
    /// Closed by a distinct token.
    Token(&'static str),
    /// Runs to the end of the line with no closing token.
    EndOfLine,
}

/// A string literal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringDelimiter {
    open: &'static str,
    close: StringClose,
    unless_followed_by: &'static [&'static str],
}

impl StringDelimiter {
    /// A literal opened and closed by the same token.
    #[must_use]
    pub const fn symmetric(open: &'static str) -> Self {
        Self {
            open,
            close: StringClose::Open,
            unless_followed_by: &[],
        }
    }

    /// A literal with distinct open and close tokens.
    #[must_use]
    pub const fn paired(open: &'static str, close: &'static str) -> Self {
        Self {
            open,
            close: StringClose::Token(close),
            unless_followed_by: &[],
        }
    }

    /// A literal that extends to the end of its line.
    #[must_use]
    pub const fn to_line_end(open: &'static str) -> Self {
        Self {
            open,
            close: StringClose::EndOfLine,
            unless_followed_by: &[],
        }
    }

    /// Rejects the open token when it is immediately followed by any of
    /// `suffixes`.
    #[must_use]
    pub const fn unless_followed_by(self, suffixes: &'static [&'static str]) -> Self {
        Self {
            unless_followed_by: suffixes,
            ..self
        }
    }

    /// Returns the opening token.
    #[must_use]
    pub const fn open(&self) -> &'static str {
        self.open
    }

    /// Returns how the literal ends.
    #[must_use]
    pub const fn close(&self) -> StringClose {
        self.close
    }

    /// Returns true when `rest` begins with this literal's open token and the
    /// token is not followed by a rejected suffix.
    #[must_use]
    pub fn opens(&self, rest: &str) -> bool {
        rest.strip_prefix(self.open).is_some_and(|after| {
            !self
                .unless_followed_by
                .iter()
                .any(|suffix| after.starts_with(suffix))
        })
    }
}

/// How a block comment ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockClose {
    /// Closed by a token.
    Token(&'static str),
    /// Closed at the end of the first line that does not end with the given
    /// continuation character.
    LineEndUnless(char),
}

/// A block comment form, optionally nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockComment {
    open: &'static str,
    nested_open: Option<&'static str>,
    close: BlockClose,
}

impl BlockComment {
    /// A non-nesting block comment.
    #[must_use]
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self {
            open,
            nested_open: None,
            close: BlockClose::Token(close),
        }
    }

    /// A nesting block comment. Each `nested_open` inside the body must be
    /// matched by its own `close`.
    #[must_use]
    pub const fn nested(
        open: &'static str,
        nested_open: &'static str,
        close: &'static str,
    ) -> Self {
        Self {
            open,
            nested_open: Some(nested_open),
            close: BlockClose::Token(close),
        }
    }

    /// A comment that continues while lines end with `continuation`.
    #[must_use]
    pub const fn until_line_end(open: &'static str, continuation: char) -> Self {
        Self {
            open,
            nested_open: None,
            close: BlockClose::LineEndUnless(continuation),
        }
    }

    /// Returns the opening token.
    #[must_use]
    pub const fn open(&self) -> &'static str {
        self.open
    }

    /// Returns the token that increases nesting depth, if the form nests.
    #[must_use]
    pub const fn nested_open(&self) -> Option<&'static str> {
        self.nested_open
    }

    /// Returns how the comment ends.
    #[must_use]
    pub const fn close(&self) -> BlockClose {
        self.close
    }

    /// Returns true when the form tracks nesting depth.
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        self.nested_open.is_some()
    }
}

/// A comment form recognised by the character scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentDelimiter {
    /// Runs from the open token to the end of the line.
    Line(&'static str),
    /// Runs from the open token to its close.
    Block(BlockComment),
}

impl CommentDelimiter {
    /// Returns the opening token.
    #[must_use]
    pub const fn open(&self) -> &'static str {
        match self {
            Self::Line(open) => open,
            Self::Block(block) => block.open(),
        }
    }
}

/// A whole-line comment test for languages whose comments are defined by
/// line prefixes rather than delimiters.
#[derive(Debug, Clone, Copy)]
pub struct LineRule {
    pattern: &'static Regex,
    exclude: Option<&'static Regex>,
}

impl LineRule {
    const fn new(pattern: &'static Regex) -> Self {
        Self {
            pattern,
            exclude: None,
        }
    }

    const fn excluding(self, exclude: &'static Regex) -> Self {
        Self {
            exclude: Some(exclude),
            ..self
        }
    }

    /// Returns the byte offset just past the comment prefix when `line` is a
    /// comment line.
    #[must_use]
    pub fn match_end(&self, line: &str) -> Option<usize> {
        if self.exclude.is_some_and(|exclude| exclude.is_match(line)) {
            return None;
        }
        self.pattern
            .find(line)
            .filter(|found| found.start() == 0)
            .map(|found| found.end())
    }
}

/// Switches that alter individual profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileOptions {
    /// Treat `//` as a comment in C.
    pub c99_line_comments: bool,
    /// Treat JavaScript and TypeScript `/** */` blocks as strings.
    pub preserve_doc_blocks: bool,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            c99_line_comments: false,
            preserve_doc_blocks: true,
        }
    }
}

/// String and comment recognition rules for one language.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    language: String,
    supported: bool,
    strings: Vec<StringDelimiter>,
    comments: Vec<CommentDelimiter>,
    line_rule: Option<LineRule>,
    indent_sensitive: bool,
    sections: Option<&'static SectionRules>,
}

impl LanguageProfile {
    /// Resolves a case-insensitive language identifier.
    ///
    /// Unrecognised identifiers produce an unsupported profile with no rules,
    /// for which removal is the identity.
    #[must_use]
    pub fn resolve(language: &str, options: &ProfileOptions) -> Self {
        let id = language.to_ascii_lowercase();
        let found = fragments_for(&id, options);
        let supported = found.is_some();
        let fragments = found.unwrap_or_default();
        Self {
            language: id,
            supported,
            strings: fragments.strings,
            comments: fragments.comments,
            line_rule: fragments.line_rule,
            indent_sensitive: fragments.indent_sensitive,
            sections: fragments.sections,
        }
    }

    /// Returns the lower-cased language identifier.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns true when the identifier was recognised.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        self.supported
    }

    /// String forms, in matching order.
    #[must_use]
    pub fn strings(&self) -> &[StringDelimiter] {
        &self.strings
    }

    /// Comment forms, in matching order.
    #[must_use]
    pub fn comments(&self) -> &[CommentDelimiter] {
        &self.comments
    }

    /// Whole-line comment rule, if the language uses one.
    #[must_use]
    pub const fn line_rule(&self) -> Option<&LineRule> {
        self.line_rule.as_ref()
    }

    /// Returns true when more-indented lines continue a line comment.
    #[must_use]
    pub const fn is_indent_sensitive(&self) -> bool {
        self.indent_sensitive
    }

    /// Embedded-language split rules, for markup languages.
    #[must_use]
    pub const fn sections(&self) -> Option<&'static SectionRules> {
        self.sections
    }
}

#[derive(Debug, Default)]
struct Fragments {
    strings: Vec<StringDelimiter>,
    comments: Vec<CommentDelimiter>,
    line_rule: Option<LineRule>,
    indent_sensitive: bool,
    sections: Option<&'static SectionRules>,
}

impl Fragments {
    fn strings(mut self, strings: &[StringDelimiter]) -> Self {
        self.strings.extend_from_slice(strings);
        self
    }

    fn comments(mut self, comments: &[CommentDelimiter]) -> Self {
        self.comments.extend_from_slice(comments);
        self
    }

    fn line_rule(mut self, rule: LineRule) -> Self {
        self.line_rule = Some(rule);
        self
    }

    fn indented(mut self) -> Self {
        self.indent_sensitive = true;
        self
    }

    fn sections(mut self, rules: &'static Lazy<SectionRules>) -> Self {
        self.sections = Some(Lazy::force(rules));
        self
    }

    fn when(self, condition: bool, extend: impl FnOnce(Self) -> Self) -> Self {
        if condition { extend(self) } else { self }
    }
}

const DOUBLE: StringDelimiter = StringDelimiter::symmetric("\"");
const SINGLE: StringDelimiter = StringDelimiter::symmetric("'");
const BACKTICK: StringDelimiter = StringDelimiter::symmetric("`");
const TRIPLE_DOUBLE: StringDelimiter = StringDelimiter::symmetric("\"\"\"");
const TRIPLE_SINGLE: StringDelimiter = StringDelimiter::symmetric("'''");
const DOC_BLOCK: StringDelimiter =
    StringDelimiter::paired("/**", "*/").unless_followed_by(&["*", "/"]);

const C_BLOCK: CommentDelimiter = CommentDelimiter::Block(BlockComment::new("/*", "*/"));
const SLASH: CommentDelimiter = CommentDelimiter::Line("//");
const HASH: CommentDelimiter = CommentDelimiter::Line("#");
const DASH: CommentDelimiter = CommentDelimiter::Line("--");
const SEMICOLON: CommentDelimiter = CommentDelimiter::Line(";");
const MARKUP: CommentDelimiter = CommentDelimiter::Block(BlockComment::new("<!--", "-->"));

const QUOTES: &[StringDelimiter] = &[DOUBLE, SINGLE];
const C_COMMENTS: &[CommentDelimiter] = &[C_BLOCK, SLASH];

#[expect(
    clippy::expect_used,
    reason = "built-in patterns are literals exercised by the profile tests"
)]
pub(crate) fn builtin(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

static SHELL_LINE: Lazy<Regex> = Lazy::new(|| builtin(r"^[ \t]*#"));
static HASH_LINE: Lazy<Regex> = Lazy::new(|| builtin(r"^\s*#"));
static LATEX_LINE: Lazy<Regex> = Lazy::new(|| builtin("^%"));
static DOCKERFILE_LINE: Lazy<Regex> = Lazy::new(|| builtin("^#"));
static DOCKERFILE_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| builtin(r"(?i)^#\s*(syntax|escape)\s*="));
static COBOL_LINE: Lazy<Regex> = Lazy::new(|| builtin("^......[*/]"));
static SASS_LINE: Lazy<Regex> = Lazy::new(|| builtin(r"^(//|/\*)"));
static PUG_LINE: Lazy<Regex> = Lazy::new(|| builtin(r"^[ \t]*(//|//-)$"));

fn markup_rules(typescript_scripts: bool) -> SectionRules {
    let typescript = typescript_scripts.then(|| {
        SectionRule::new(
            builtin(r#"<script[^>]* lang="ts"[^>]*>"#),
            builtin("</script>"),
            SectionLanguage::Fixed("typescript"),
        )
    });
    let rules = typescript
        .into_iter()
        .chain([
            SectionRule::new(
                builtin("<style[^>/]*>"),
                builtin("</style>"),
                SectionLanguage::Fixed("css"),
            ),
            SectionRule::new(
                builtin("<script[^>]*>"),
                builtin("</script>"),
                SectionLanguage::Fixed("javascript"),
            ),
        ])
        .collect();
    SectionRules::new("html", rules)
}

static HTML_SECTIONS: Lazy<SectionRules> = Lazy::new(|| markup_rules(false));
static SVELTE_SECTIONS: Lazy<SectionRules> = Lazy::new(|| markup_rules(true));
static VUE_SECTIONS: Lazy<SectionRules> = Lazy::new(|| {
    SectionRules::new(
        "html",
        vec![
            SectionRule::new(
                builtin(r#"<template( lang="([^"]+)")?>"#),
                builtin("</template>"),
                SectionLanguage::Captured {
                    group: 2,
                    fallback: "html",
                },
            ),
            SectionRule::new(
                builtin("<script[^>]*>"),
                builtin("</script>"),
                SectionLanguage::Fixed("javascript"),
            ),
            SectionRule::new(
                builtin(r#"<style( lang="([^"]+)")?>"#),
                builtin("</style>"),
                SectionLanguage::Captured {
                    group: 2,
                    fallback: "css",
                },
            ),
        ],
    )
});
static PHP_SECTIONS: Lazy<SectionRules> = Lazy::new(|| {
    SectionRules::new(
        UNKNOWN_LANGUAGE,
        vec![SectionRule::new(
            builtin(r"<\?php"),
            builtin(r"\?>"),
            SectionLanguage::Fixed("php"),
        )],
    )
});

fn script(base: Fragments, options: &ProfileOptions) -> Fragments {
    base.when(options.preserve_doc_blocks, |fragments| {
        fragments.strings(&[DOC_BLOCK])
    })
    .strings(&[BACKTICK, SINGLE, DOUBLE])
    .comments(C_COMMENTS)
}

fn fragments_for(language: &str, options: &ProfileOptions) -> Option<Fragments> {
    let base = Fragments::default();
    let fragments = match language {
        UNKNOWN_LANGUAGE => base,
        "python" | "toml" => base
            .strings(&[TRIPLE_SINGLE, TRIPLE_DOUBLE, SINGLE, DOUBLE])
            .comments(&[HASH]),
        "lmps" => base
            .strings(&[TRIPLE_DOUBLE, SINGLE, DOUBLE])
            .comments(&[CommentDelimiter::Block(BlockComment::until_line_end(
                "#", '&',
            ))]),
        "yaml" => base.strings(&[SINGLE, DOUBLE]).comments(&[HASH]),
        "r" | "uiua" => base.strings(&[DOUBLE]).comments(&[HASH]),
        "javascript" | "typescript" => script(base, options),
        "javascriptreact" | "typescriptreact" => script(
            base.comments(&[CommentDelimiter::Block(BlockComment::new("{/*", "*/}"))]),
            options,
        ),
        "dart" | "haxe" => base.strings(&[SINGLE, DOUBLE]).comments(C_COMMENTS),
        "go" => base.strings(&[BACKTICK, DOUBLE]).comments(C_COMMENTS),
        "cpp" | "csharp" | "objective-c" | "objective-cpp" | "java" | "kotlin" | "scala"
        | "shaderlab" | "solidity" | "swift" | "verilog" | "systemverilog" | "jsonc" => {
            base.strings(&[DOUBLE]).comments(C_COMMENTS)
        }
        "c" => base
            .strings(&[DOUBLE])
            .comments(&[C_BLOCK])
            .when(options.c99_line_comments, |fragments| {
                fragments.comments(&[SLASH])
            }),
        "rust" => base.strings(&[DOUBLE]).comments(&[
            CommentDelimiter::Block(BlockComment::nested("/*", "/*", "*/")),
            SLASH,
        ]),
        "racket" => base.strings(&[DOUBLE]).comments(&[
            CommentDelimiter::Block(BlockComment::nested("#|", "#|", "|#")),
            CommentDelimiter::Line("#!"),
            SEMICOLON,
        ]),
        "scheme" => base.strings(&[DOUBLE]).comments(&[
            CommentDelimiter::Block(BlockComment::nested("#|", "#|", "|#")),
            CommentDelimiter::Block(BlockComment::new("#!", "!#")),
            SEMICOLON,
        ]),
        "elixir" => base
            .strings(&[
                StringDelimiter::paired("@moduledoc \"\"\"", "\"\"\""),
                StringDelimiter::paired("@doc \"\"\"", "\"\"\""),
                DOUBLE,
            ])
            .comments(&[HASH]),
        "graphql" => base.strings(&[TRIPLE_DOUBLE, DOUBLE]).comments(&[HASH]),
        "julia" => base.strings(&[DOUBLE]).comments(&[
            CommentDelimiter::Block(BlockComment::new("#=", "=#")),
            HASH,
        ]),
        "clojure" => base.strings(&[SINGLE, DOUBLE]).comments(&[SEMICOLON]),
        "lisp" => base.strings(&[DOUBLE]).comments(&[SEMICOLON]),
        "erlang" => base
            .strings(&[DOUBLE])
            .comments(&[CommentDelimiter::Line("%")]),
        "groovy" => base
            .strings(&[TRIPLE_DOUBLE, TRIPLE_SINGLE, DOUBLE, SINGLE])
            .comments(C_COMMENTS),
        "al" => base.strings(QUOTES).comments(&[SLASH]),
        "lua" => base.strings(QUOTES).comments(&[
            CommentDelimiter::Block(BlockComment::new("--[[", "]]")),
            DASH,
        ]),
        "vhdl" => base.strings(&[DOUBLE]).comments(&[C_BLOCK, DASH]),
        "ada" => base.strings(&[DOUBLE]).comments(&[DASH]),
        "haskell" => base.strings(&[DOUBLE]).comments(&[
            CommentDelimiter::Block(BlockComment::nested("{-", "{-", "-}")),
            DASH,
        ]),
        "sql" => base.strings(QUOTES).comments(&[DASH, C_BLOCK]),
        "plsql" | "spark" => base.strings(&[SINGLE]).comments(&[DASH, C_BLOCK]),
        "fsharp" => base.strings(&[TRIPLE_DOUBLE, DOUBLE]).comments(&[
            SLASH,
            CommentDelimiter::Block(BlockComment::new("(*", "*)")),
        ]),
        "pascal" | "objectpascal" => base.strings(&[SINGLE]).comments(&[
            SLASH,
            CommentDelimiter::Block(BlockComment::new("(*", "*)")),
            CommentDelimiter::Block(BlockComment::new("{", "}")),
        ]),
        "coffeescript" => base.strings(&[DOUBLE]).comments(&[
            CommentDelimiter::Block(BlockComment::new("###", "###")),
            HASH,
        ]),
        "cfml" => base.comments(&[SLASH, C_BLOCK]),
        "less" | "scss" | "stylus" => base.strings(QUOTES).comments(&[SLASH, C_BLOCK]),
        "css" | "tailwindcss" => base.strings(QUOTES).comments(&[C_BLOCK]),
        "sass" => base
            .line_rule(LineRule::new(&SASS_LINE))
            .indented()
            .comments(&[SLASH, C_BLOCK]),
        "xml" => base.comments(&[MARKUP]),
        "html" => base.comments(&[MARKUP]).sections(&HTML_SECTIONS),
        "svelte" => base.comments(&[MARKUP]).sections(&SVELTE_SECTIONS),
        "vue" => base.sections(&VUE_SECTIONS),
        "php" => base
            .strings(QUOTES)
            .comments(&[C_BLOCK, SLASH, HASH])
            .sections(&PHP_SECTIONS),
        "blade" => base.strings(QUOTES).comments(&[
            CommentDelimiter::Block(BlockComment::new("{{--", "--}}")),
            C_BLOCK,
            SLASH,
            HASH,
        ]),
        "terraform" => base.comments(&[HASH, SLASH, C_BLOCK]),
        "powershell" => base.strings(&[DOUBLE, SINGLE]).comments(&[
            CommentDelimiter::Block(BlockComment::new("<#", "#>")),
            HASH,
        ]),
        "perl" => base.strings(&[SINGLE, DOUBLE]).comments(&[
            HASH,
            CommentDelimiter::Block(BlockComment::new("=begin", "=cut")),
        ]),
        "ruby" => base.strings(&[DOUBLE]).comments(&[
            HASH,
            CommentDelimiter::Block(BlockComment::new("=begin", "=end")),
        ]),
        "perl6" => base
            .strings(&[
                DOUBLE,
                SINGLE,
                StringDelimiter::paired("｢", "｣"),
                StringDelimiter::paired("“", "”"),
            ])
            .comments(&[
                CommentDelimiter::Block(BlockComment::nested("#`(", "(", ")")),
                CommentDelimiter::Block(BlockComment::nested("#`{", "{", "}")),
                CommentDelimiter::Block(BlockComment::nested("#`[", "[", "]")),
                CommentDelimiter::Block(BlockComment::nested("#`<", "<", ">")),
                HASH,
                CommentDelimiter::Block(BlockComment::new("=begin", "=cut")),
            ]),
        "vb" => base
            .strings(&[DOUBLE])
            .comments(&[CommentDelimiter::Line("'")]),
        "zig" => base
            .strings(&[DOUBLE, SINGLE, StringDelimiter::to_line_end(r"\\")])
            .comments(&[SLASH]),
        "pug" | "jade" => base
            .line_rule(LineRule::new(&PUG_LINE))
            .indented()
            .strings(QUOTES)
            .comments(&[SLASH, CommentDelimiter::Line("//-")]),
        "shellscript" => base.line_rule(LineRule::new(&SHELL_LINE)),
        "makefile" | "ini" | "properties" => base.line_rule(LineRule::new(&HASH_LINE)),
        "latex" => base.line_rule(LineRule::new(&LATEX_LINE)),
        "dockerfile" => base.line_rule(
            LineRule::new(&DOCKERFILE_LINE).excluding(&DOCKERFILE_DIRECTIVE),
        ),
        "cobol" | "opencobol" | "acucobol" | "bitlang-cobol" => {
            base.line_rule(LineRule::new(&COBOL_LINE))
        }
        _ => return None,
    };
    Some(fragments)
}

/// Maps a file extension (with or without the leading dot, any case) to a
/// language identifier.
#[must_use]
pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    let normalised = extension.trim_start_matches('.').to_ascii_lowercase();
    let language = match normalised.as_str() {
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "javascriptreact",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "typescriptreact",
        "py" | "pyi" => "python",
        "java" => "java",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => "cpp",
        "cs" => "csharp",
        "m" => "objective-c",
        "mm" => "objective-cpp",
        "go" => "go",
        "rs" => "rust",
        "php" => "php",
        "swift" => "swift",
        "kt" | "kts" => "kotlin",
        "scala" => "scala",
        "sh" | "bash" | "zsh" => "shellscript",
        "css" => "css",
        "scss" => "scss",
        "sass" => "sass",
        "less" => "less",
        "styl" => "stylus",
        "html" | "htm" => "html",
        "vue" => "vue",
        "svelte" => "svelte",
        "xml" | "svg" => "xml",
        "sql" => "sql",
        "lua" => "lua",
        "rb" => "ruby",
        "pl" | "pm" => "perl",
        "raku" | "rakumod" | "p6" => "perl6",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "json" | "jsonc" => "jsonc",
        "ini" => "ini",
        "properties" | "conf" => "properties",
        "mk" => "makefile",
        "tex" => "latex",
        "cob" | "cbl" => "cobol",
        "dart" => "dart",
        "hx" => "haxe",
        "ex" | "exs" => "elixir",
        "erl" | "hrl" => "erlang",
        "hs" => "haskell",
        "jl" => "julia",
        "clj" | "cljs" => "clojure",
        "lisp" | "el" => "lisp",
        "scm" => "scheme",
        "rkt" => "racket",
        "groovy" | "gradle" => "groovy",
        "fs" | "fsx" => "fsharp",
        "pas" | "pp" => "pascal",
        "coffee" => "coffeescript",
        "cfm" | "cfc" => "cfml",
        "graphql" | "gql" => "graphql",
        "r" => "r",
        "adb" | "ads" => "ada",
        "vhd" | "vhdl" => "vhdl",
        "v" => "verilog",
        "sv" => "systemverilog",
        "sol" => "solidity",
        "tf" => "terraform",
        "ps1" | "psm1" => "powershell",
        "vb" => "vb",
        "zig" => "zig",
        "pug" => "pug",
        "jade" => "jade",
        _ => return None,
    };
    Some(language)
}

/// Detects the language of a file from its name, falling back to
/// [`UNKNOWN_LANGUAGE`].
#[must_use]
pub fn language_for_path(path: &Path) -> &'static str {
    let by_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| match name {
            "Dockerfile" => Some("dockerfile"),
            "Makefile" | "GNUmakefile" | "makefile" => Some("makefile"),
            _ => None,
        });
    by_name
        .or_else(|| {
            path.extension()
                .and_then(|extension| extension.to_str())
                .and_then(language_for_extension)
        })
        .unwrap_or(UNKNOWN_LANGUAGE)
}
