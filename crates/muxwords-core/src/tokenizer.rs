//! Four-pass token extraction over captured pane text.

use std::collections::BTreeSet;

use crate::filter::FilterSpec;

/// Deduplicated candidate tokens. BTreeSet gives the final output a
/// deterministic lexicographic order; the accumulation itself only needs
/// set semantics.
pub type TokenSet = BTreeSet<String>;

/// Extract candidate tokens from `text`, merge the four passes, then apply
/// `filter`. Same text and filter always yield the same set.
///
/// The passes, each feeding the one merged set:
/// 1. whitespace-delimited chunks, verbatim;
/// 2. the same chunks with leading/trailing non-word characters stripped;
/// 3. whole lines, trimmed (multi-word phrases as single tokens);
/// 4. word-character runs only, splitting on all punctuation.
pub fn tokenize(text: &str, filter: &FilterSpec) -> TokenSet {
    let mut set = TokenSet::new();

    for chunk in text.split_whitespace() {
        set.insert(chunk.to_string());
        let stripped = chunk.trim_matches(|c: char| !is_word_char(c));
        if !stripped.is_empty() {
            set.insert(stripped.to_string());
        }
    }

    for line in text.lines() {
        let line = line.trim();
        if !line.is_empty() {
            set.insert(line.to_string());
        }
    }

    for word in text.split(|c: char| !is_word_char(c)) {
        if !word.is_empty() {
            set.insert(word.to_string());
        }
    }

    if filter.is_unfiltered() {
        return set;
    }
    set.retain(|token| filter.matches(token));
    set
}

/// Word characters are ASCII alphanumerics and underscore, the same class
/// tmux-adjacent shells treat as one word.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
