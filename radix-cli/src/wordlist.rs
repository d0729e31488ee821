use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordListError {
    #[error("Cannot open word list")]
    OpeningFile(#[from] std::io::Error),
}

/// Words in file order, one per line. Blank lines and `#` comments are
/// skipped; validation is left to the trie builder.
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn try_read_from_path(path: &Path) -> Result<Self, WordListError> {
        let file = File::open(path)?;
        Self::try_read(BufReader::new(file))
    }

    pub fn try_read<T>(reader: T) -> Result<Self, WordListError>
    where
        T: BufRead,
    {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.push(word.to_string());
        }
        Ok(Self { words })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_keeps_order() {
        let input = "bear\nbull\nstock\nbell\n";
        let list = WordList::try_read(input.as_bytes()).unwrap();
        assert_eq!(list.words(), ["bear", "bull", "stock", "bell"]);
    }

    #[test]
    fn test_read_skips_blank_and_comments() {
        let input = "# market words\n\n  bear  \n\t\nbull\r\n# done\n";
        let list = WordList::try_read(input.as_bytes()).unwrap();
        assert_eq!(list.words(), ["bear", "bull"]);
    }

    #[test]
    fn test_read_empty() {
        let list = WordList::try_read("".as_bytes()).unwrap();
        assert!(list.words().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = WordList::try_read_from_path(Path::new("/definitely/not/here.txt"));
        assert!(matches!(result, Err(WordListError::OpeningFile(_))));
    }
}
