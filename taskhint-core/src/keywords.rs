//! Keyword tables for complexity estimation
//!
//! Matching is substring containment against the lower-cased description,
//! so "systems" hits "system" and "prefix" hits "fix".

/// Words that suggest broad, cross-cutting work (+3)
pub const HIGH_COMPLEXITY_KEYWORDS: &[&str] = &[
    "refactor",
    "architect",
    "redesign",
    "migrate",
    "implement",
    "integration",
    "system",
    "infrastructure",
];

/// Words that suggest additive feature work (+1)
pub const MEDIUM_COMPLEXITY_KEYWORDS: &[&str] = &[
    "add", "create", "build", "update", "enhance", "extend", "modify",
];

/// Words that suggest small, local edits (-1)
pub const LOW_COMPLEXITY_KEYWORDS: &[&str] = &[
    "fix", "typo", "rename", "remove", "delete", "cleanup", "comment",
];

/// Return true if any keyword occurs in `haystack`
///
/// `haystack` must already be lower-cased.
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}
