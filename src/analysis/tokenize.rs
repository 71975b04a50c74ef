//! Identifier and documentation tokenization.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Split an identifier into lowercase word fragments.
///
/// Handles `snake_case`, `camelCase`, `PascalCase`, `SCREAMING_CASE`,
/// acronym runs (`HTTPServer` -> `http`, `server`) and digit boundaries.
/// Leading and trailing underscores (dunder names) are ignored.
pub fn split_identifier(identifier: &str) -> Vec<String> {
    let mut fragments = Vec::new();

    for part in identifier.split(|c: char| c == '_' || c == '-' || c == '.' || c.is_whitespace()) {
        if part.is_empty() {
            continue;
        }
        let chars: Vec<char> = part.chars().collect();
        let mut current = String::new();

        for (i, &c) in chars.iter().enumerate() {
            if !c.is_alphanumeric() {
                flush(&mut current, &mut fragments);
                continue;
            }
            if let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p)) {
                let next = chars.get(i + 1).copied();
                let lower_to_upper = prev.is_lowercase() && c.is_uppercase();
                // "HTTPServer": split before the 'S' that starts a lowercase run
                let acronym_end = prev.is_uppercase()
                    && c.is_uppercase()
                    && next.map(char::is_lowercase).unwrap_or(false);
                let digit_edge = prev.is_ascii_digit() != c.is_ascii_digit();
                if lower_to_upper || acronym_end || digit_edge {
                    flush(&mut current, &mut fragments);
                }
            }
            current.extend(c.to_lowercase());
        }
        flush(&mut current, &mut fragments);
    }

    fragments
}

fn flush(current: &mut String, fragments: &mut Vec<String>) {
    if !current.is_empty() {
        fragments.push(std::mem::take(current));
    }
}

/// Tokenize documentation prose into lowercase words.
///
/// Words that look like identifiers (`user_id`, `getUser`) are split the
/// same way names are, so code references in docs line up with name tokens.
pub fn tokenize_docs(docs: &str) -> Vec<String> {
    docs.split_whitespace()
        .flat_map(|chunk| {
            chunk
                .unicode_words()
                .flat_map(split_identifier)
                .collect::<Vec<_>>()
        })
        .filter(|word| word.chars().any(char::is_alphabetic))
        .collect()
}

/// Casing convention of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameStyle {
    /// `delete_user`
    #[default]
    Snake,
    /// `deleteUser`
    Camel,
    /// `DeleteUser`
    Pascal,
}

impl NameStyle {
    /// Infer the style of an existing identifier.
    pub fn detect(identifier: &str) -> Self {
        let trimmed = identifier.trim_matches('_');
        if trimmed.contains('_') || !trimmed.chars().any(char::is_uppercase) {
            return NameStyle::Snake;
        }
        match trimmed.chars().next() {
            Some(first) if first.is_uppercase() => NameStyle::Pascal,
            _ => NameStyle::Camel,
        }
    }

    /// Join lowercase fragments in this style.
    pub fn join<S: AsRef<str>>(&self, fragments: &[S]) -> String {
        match self {
            NameStyle::Snake => fragments
                .iter()
                .map(|f| f.as_ref().to_lowercase())
                .collect::<Vec<_>>()
                .join("_"),
            NameStyle::Camel => fragments
                .iter()
                .enumerate()
                .map(|(i, f)| {
                    if i == 0 {
                        f.as_ref().to_lowercase()
                    } else {
                        capitalize(f.as_ref())
                    }
                })
                .collect(),
            NameStyle::Pascal => fragments.iter().map(|f| capitalize(f.as_ref())).collect(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
