use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error("word {index} is empty")]
    EmptyWord { index: usize },
    #[error("word {index} contains {character:?}, only 'a'..='z' is accepted")]
    InvalidCharacter { index: usize, character: char },
    #[error("word index {word_index} is out of bounds ({len} words)")]
    WordOutOfBounds { word_index: usize, len: usize },
    #[error("range {start}..={end} is invalid for word {word_index} of length {word_len}")]
    InvalidRange {
        word_index: usize,
        start: usize,
        end: usize,
        word_len: usize,
    },
}
