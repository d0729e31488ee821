//! Helpers over the borrowed word array.
//!
//! Words are validated once, before any insertion, so the rest of the crate can
//! treat every word as a non-empty run of ASCII lowercase bytes.

use crate::error::TrieError;

pub(crate) fn validate<S: AsRef<str>>(words: &[S]) -> Result<(), TrieError> {
    for (index, word) in words.iter().enumerate() {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(TrieError::EmptyWord { index });
        }
        if let Some(character) = word.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(TrieError::InvalidCharacter { index, character });
        }
    }
    Ok(())
}

/// Byte of `words[word_index]` at `position`, `None` past the end.
pub(crate) fn byte_at<S: AsRef<str>>(
    words: &[S],
    word_index: usize,
    position: usize,
) -> Option<u8> {
    words
        .get(word_index)
        .and_then(|word| word.as_ref().as_bytes().get(position).copied())
}

pub(crate) fn word_len<S: AsRef<str>>(words: &[S], word_index: usize) -> Option<usize> {
    words.get(word_index).map(|word| word.as_ref().len())
}

pub(crate) fn word<S: AsRef<str>>(words: &[S], word_index: usize) -> &str {
    words
        .get(word_index)
        .map(|word| word.as_ref())
        .unwrap_or_default()
}
