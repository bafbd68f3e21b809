//! Derived views of `full_name`.
//!
//! Templates may show the name split into first/last spans or as a lowercase
//! handle. These are computed on every render and every edit of a span is
//! recomposed into the single stored `full_name`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamePart {
    First,
    Last,
    /// `first_last` in lowercase, as printed by terminal-style layouts.
    Handle,
}

/// Splits on the first space: the first word, then everything after it.
pub fn split_full_name(full_name: &str) -> (&str, &str) {
    full_name.split_once(' ').unwrap_or((full_name, ""))
}

pub fn compose_full_name(first: &str, last: &str) -> String {
    [first.trim(), last.trim()]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn name_handle(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Text of `part` as shown for `full_name`.
pub fn name_part(full_name: &str, part: NamePart) -> String {
    let (first, last) = split_full_name(full_name);
    match part {
        NamePart::First => first.to_string(),
        NamePart::Last => last.to_string(),
        NamePart::Handle => name_handle(full_name),
    }
}

/// Returns the new `full_name` after the span `part` was edited to `value`.
pub fn recompose(full_name: &str, part: NamePart, value: &str) -> String {
    let (first, last) = split_full_name(full_name);
    match part {
        NamePart::First => compose_full_name(value, last),
        NamePart::Last => compose_full_name(first, value),
        // an untouched handle keeps the original casing
        NamePart::Handle if value.trim() == name_handle(full_name) => full_name.to_string(),
        NamePart::Handle => value
            .split(|c: char| c == '_' || c.is_whitespace())
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_multi_word_last_name() {
        assert_eq!(split_full_name("Ana Maria da Silva"), ("Ana", "Maria da Silva"));
        assert_eq!(split_full_name("Prince"), ("Prince", ""));
    }

    #[test]
    fn test_editing_first_span_keeps_last() {
        assert_eq!(recompose("Ana Maria da Silva", NamePart::First, "Joana"), "Joana Maria da Silva");
    }

    #[test]
    fn test_editing_last_span_keeps_first() {
        assert_eq!(recompose("Ana Silva", NamePart::Last, "Souza Lima"), "Ana Souza Lima");
    }

    #[test]
    fn test_recompose_single_word_has_no_trailing_space() {
        assert_eq!(recompose("Prince", NamePart::First, "Madonna"), "Madonna");
        assert_eq!(recompose("Ana Silva", NamePart::Last, "  "), "Ana");
    }

    #[test]
    fn test_handle_view() {
        assert_eq!(name_handle("Guilherme  Tebaldi"), "guilherme_tebaldi");
        assert_eq!(name_part("Guilherme Tebaldi", NamePart::Handle), "guilherme_tebaldi");
    }

    #[test]
    fn test_unchanged_handle_preserves_casing() {
        assert_eq!(
            recompose("Guilherme Tebaldi", NamePart::Handle, "guilherme_tebaldi"),
            "Guilherme Tebaldi"
        );
        assert_eq!(recompose("Guilherme Tebaldi", NamePart::Handle, "ada_lovelace"), "ada lovelace");
    }
}
