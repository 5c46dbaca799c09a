//! Related-file extraction from task descriptions
//!
//! Five independent pattern passes feed one insertion-ordered set:
//! 1. bare tokens ending in a recognized extension
//! 2. backtick-quoted paths
//! 3. paths following a verb or preposition ("update", "in", ...)
//! 4. directory paths (`src/components` -> `src/components/`)
//! 5. glob patterns (`**/*.ts`, `*/mod.rs`, `*.json`)
//!
//! Global invariants enforced:
//! - Output is unique, non-empty, and in discovery order
//! - At most `limit` entries (10 by default)
//! - Linear-time matching: the `regex` crate never backtracks
//!
//! The `regex` crate has no lookaround, so patterns that must be followed by
//! a delimiter capture greedily and the delimiter is checked afterwards.
//! Every pattern body is a maximal run over a character set that excludes
//! the delimiters, so this accepts exactly the tokens a lookahead would.

use crate::extensions::{is_recognized_extension, split_extension};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::debug;

/// Default cap on the number of related files returned
pub const DEFAULT_MAX_RELATED_FILES: usize = 10;

/// Insertion-ordered set of strings
#[derive(Debug, Clone, Default)]
pub struct OrderedFileSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value; returns false if it was already present
    pub fn insert(&mut self, value: String) -> bool {
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.items.push(value);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// Extract related files with the default cap of 10
pub fn extract_related_files(description: &str) -> Vec<String> {
    extract_related_files_with_limit(description, DEFAULT_MAX_RELATED_FILES)
}

/// Extract related files, keeping the first `limit` distinct matches
///
/// Passes run in a fixed order and the merge stops as soon as `limit`
/// entries are collected; the result equals merging everything and
/// truncating afterwards.
pub fn extract_related_files_with_limit(description: &str, limit: usize) -> Vec<String> {
    let passes: [(&str, fn(&str) -> Vec<String>); 5] = [
        ("extension", extension_matches),
        ("backtick", backtick_matches),
        ("keyword", keyword_matches),
        ("directory", directory_matches),
        ("glob", glob_matches),
    ];

    let mut files = OrderedFileSet::new();
    for (name, pass) in passes {
        if files.len() >= limit {
            break;
        }
        let matches = pass(description);
        debug!(pass = name, matches = matches.len(), "related-file pass");
        for token in matches {
            if files.len() >= limit {
                break;
            }
            files.insert(token);
        }
    }

    files.into_vec()
}

/// Pass 1: tokens of path characters ending in a recognized extension
///
/// Left delimiter: start, whitespace, quote, backtick or `(`.
/// Right delimiter: end, whitespace, quote, backtick or `)`.
pub fn extension_matches(description: &str) -> Vec<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re =
        RE.get_or_init(|| Regex::new(r#"(?:^|[\s"'`(])([A-Za-z0-9_./-]+)"#).unwrap());

    let mut out = Vec::new();
    for caps in re.captures_iter(description) {
        let Some(token) = caps.get(1) else { continue };
        if !followed_by(description, token.end(), is_closing_delimiter) {
            continue;
        }
        let text = token.as_str();
        // No relative-path filtering: `./x.ts`, `../x.ts` and `x.ts` all count.
        if let Some((stem, ext)) = split_extension(text) {
            if !stem.is_empty() && is_recognized_extension(ext) {
                out.push(text.to_string());
            }
        }
    }
    out
}

/// Pass 2: `` `path.ext` `` with a recognized extension
pub fn backtick_matches(description: &str) -> Vec<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"`([A-Za-z0-9_./-]+\.[A-Za-z0-9]+)`").unwrap());

    re.captures_iter(description)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|path| recognized_suffix(path))
        .map(str::to_string)
        .collect()
}

/// Pass 3: a path directly after "in", "the", "file", "update", "modify",
/// "edit", "create", "add to" or "change"
pub fn keyword_matches(description: &str) -> Vec<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(
            r"\b(?i:in|the|file|update|modify|edit|create|add to|change)\s([A-Za-z0-9_./-]+\.[A-Za-z0-9]+)",
        )
        .unwrap()
    });

    re.captures_iter(description)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|path| recognized_suffix(path))
        .map(str::to_string)
        .collect()
}

/// Pass 4: `segment/segment(/segment)*` tokens that are not files
///
/// Results always carry exactly one trailing slash.
pub fn directory_matches(description: &str) -> Vec<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r#"(?:^|[\s"'`])([A-Za-z0-9_.-]+(?:/[A-Za-z0-9_.-]+)+/?)"#).unwrap()
    });

    let mut out = Vec::new();
    for caps in re.captures_iter(description) {
        let Some(token) = caps.get(1) else { continue };
        if !followed_by(description, token.end(), is_token_delimiter) {
            continue;
        }
        let dir = token.as_str();
        let dir = dir.strip_suffix('/').unwrap_or(dir);
        if recognized_suffix(dir) {
            continue;
        }
        out.push(format!("{}/", dir));
    }
    out
}

/// Pass 5: glob patterns `**/body`, `*/body` and `*.ext`
pub fn glob_matches(description: &str) -> Vec<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(
            r#"(?:^|[\s"'`])(\*\*/[A-Za-z0-9_.*/-]+|\*/[A-Za-z0-9_.*/-]+|\*\.[A-Za-z0-9]+)"#,
        )
        .unwrap()
    });

    let mut out = Vec::new();
    for caps in re.captures_iter(description) {
        let Some(token) = caps.get(1) else { continue };
        if followed_by(description, token.end(), is_token_delimiter) {
            out.push(token.as_str().to_string());
        }
    }
    out
}

fn recognized_suffix(token: &str) -> bool {
    split_extension(token).is_some_and(|(_, ext)| is_recognized_extension(ext))
}

/// True if `pos` is the end of `text` or the char at `pos` satisfies `pred`
fn followed_by(text: &str, pos: usize, pred: fn(char) -> bool) -> bool {
    match text[pos..].chars().next() {
        Some(c) => pred(c),
        None => true,
    }
}

fn is_token_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '"' | '\'' | '`')
}

fn is_closing_delimiter(c: char) -> bool {
    is_token_delimiter(c) || c == ')'
}
