//! Recognized source/config file extensions
//!
//! A token only counts as a file reference when its final `.ext` is one of
//! these. Lookups are ASCII case-insensitive.

/// Extensions recognized as file references, without the leading dot
pub const RECOGNIZED_EXTENSIONS: &[&str] = &[
    // JavaScript / TypeScript
    "ts", "tsx", "js", "jsx", "mjs", "cjs",
    // General purpose languages
    "py", "java", "c", "cpp", "h", "hpp", "cs", "go", "rs", "rb", "php", "swift", "kt", "scala",
    // Web
    "html", "css", "scss", "sass", "less",
    // Data and config
    "json", "yaml", "yml", "xml", "toml", "ini", "env",
    // Docs
    "md", "txt", "rst", "mdx",
    // Query languages
    "sql", "graphql", "gql",
    // Shell
    "sh", "bash", "zsh", "ps1", "bat", "cmd",
    // Build and VCS files used as suffixes
    "dockerfile", "makefile", "gitignore",
];

/// Check whether `ext` (without the dot) is a recognized extension
pub fn is_recognized_extension(ext: &str) -> bool {
    RECOGNIZED_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
}

/// Check whether a token ends in `.<recognized extension>`
///
/// The part before the final dot may be empty here; callers that need a
/// non-empty stem check it themselves.
pub fn has_recognized_extension(token: &str) -> bool {
    match token.rfind('.') {
        Some(dot) => is_recognized_extension(&token[dot + 1..]),
        None => false,
    }
}

/// Split a token into `(stem, extension)` at its final dot
pub(crate) fn split_extension(token: &str) -> Option<(&str, &str)> {
    let dot = token.rfind('.')?;
    Some((&token[..dot], &token[dot + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_common_extensions() {
        for ext in ["ts", "tsx", "rs", "py", "json", "md", "gitignore"] {
            assert!(is_recognized_extension(ext), "{} should be recognized", ext);
        }
    }

    #[test]
    fn test_extension_lookup_is_case_insensitive() {
        assert!(is_recognized_extension("TS"));
        assert!(is_recognized_extension("Json"));
        assert!(is_recognized_extension("DockerFile"));
    }

    #[test]
    fn test_rejects_unknown_extensions() {
        assert!(!is_recognized_extension("bak"));
        assert!(!is_recognized_extension("exe"));
        assert!(!is_recognized_extension(""));
        assert!(!is_recognized_extension(".ts"));
    }

    #[test]
    fn test_has_recognized_extension_uses_last_dot() {
        assert!(has_recognized_extension("src/app.config.ts"));
        assert!(has_recognized_extension("jquery.min.js"));
        assert!(!has_recognized_extension("config.ts.bak"));
        assert!(!has_recognized_extension("Makefile"));
        assert!(!has_recognized_extension("src/components"));
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("src/utils.ts"), Some(("src/utils", "ts")));
        assert_eq!(split_extension(".env"), Some(("", "env")));
        assert_eq!(split_extension("README"), None);
    }

    #[test]
    fn test_table_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for ext in RECOGNIZED_EXTENSIONS {
            assert!(seen.insert(*ext), "duplicate extension: {}", ext);
        }
        assert_eq!(RECOGNIZED_EXTENSIONS.len(), 48);
    }
}
