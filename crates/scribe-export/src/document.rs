//! Logical document and filename helpers

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    /// Editor language tag ("javascript", "markdown", ...). Unknown
    /// tags export as plain text.
    pub doc_type: String,
    pub content: String,
}

/// Map an editor type tag to a file extension, without the dot.
pub fn extension_for(doc_type: &str) -> &'static str {
    match doc_type {
        "javascript" => "js",
        "python" => "py",
        "php" => "php",
        "html" => "html",
        "css" => "css",
        "markdown" => "md",
        _ => "txt",
    }
}

/// Sanitize a title into a filesystem-safe file stem.
///
/// Characters outside `[A-Za-z0-9_\-\s]` become `_`, whitespace runs
/// collapse to a single `_`. An empty result falls back to `untitled`.
pub fn sanitize_title(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c.is_whitespace() {
                c
            } else {
                '_'
            }
        })
        .collect();

    let stem = replaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");

    if stem.is_empty() {
        "untitled".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_table() {
        assert_eq!(extension_for("javascript"), "js");
        assert_eq!(extension_for("python"), "py");
        assert_eq!(extension_for("php"), "php");
        assert_eq!(extension_for("html"), "html");
        assert_eq!(extension_for("css"), "css");
        assert_eq!(extension_for("markdown"), "md");
        assert_eq!(extension_for("brainfuck"), "txt");
        assert_eq!(extension_for(""), "txt");
    }

    #[test]
    fn test_sanitize_strips_disallowed_characters() {
        let stem = sanitize_title("notes: draft #3 (v2)!");
        for c in stem.chars() {
            assert!(c.is_ascii_alphanumeric() || c == '_' || c == '-');
        }
    }

    #[test]
    fn test_sanitize_collapses_whitespace_runs() {
        assert_eq!(sanitize_title("my    great\t\tnote"), "my_great_note");
        assert!(!sanitize_title("a  \n  b").contains("__"));
    }

    #[test]
    fn test_sanitize_keeps_allowed_characters() {
        assert_eq!(sanitize_title("todo-list_v2"), "todo-list_v2");
    }

    #[test]
    fn test_sanitize_empty_falls_back() {
        assert_eq!(sanitize_title(""), "untitled");
        assert_eq!(sanitize_title("   "), "untitled");
    }
}
