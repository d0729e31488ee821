use crate::error::TrieError;
use crate::words;

/// Edge label: the characters `words[word_index][start..stop]`.
///
/// The trie never copies word contents, it only keeps these offsets into the
/// borrowed word array. A label is either a non-empty range, or a terminal
/// label (`start == stop == words[word_index].len()`) marking that the word
/// ends where the parent edge ends. Terminal labels are only carried by leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Indexes {
    word_index: usize,
    start: usize,
    stop: usize,
}

impl Indexes {
    /// Checked constructor for the inclusive range `start..=end` of
    /// `words[word_index]`.
    pub fn new<S: AsRef<str>>(
        words: &[S],
        word_index: usize,
        start: usize,
        end: usize,
    ) -> Result<Self, TrieError> {
        let word_len = words::word_len(words, word_index).ok_or(TrieError::WordOutOfBounds {
            word_index,
            len: words.len(),
        })?;
        if start > end || end >= word_len {
            return Err(TrieError::InvalidRange {
                word_index,
                start,
                end,
                word_len,
            });
        }
        Ok(Self {
            word_index,
            start,
            stop: end + 1,
        })
    }

    /// Checked constructor for the terminal label of `words[word_index]`.
    pub fn terminal<S: AsRef<str>>(words: &[S], word_index: usize) -> Result<Self, TrieError> {
        let word_len = words::word_len(words, word_index).ok_or(TrieError::WordOutOfBounds {
            word_index,
            len: words.len(),
        })?;
        Ok(Self::terminal_unchecked(word_index, word_len))
    }

    /// `start..stop` is half-open. Callers inside the crate only build labels
    /// from positions they have just compared, so this is checked in debug
    /// builds only.
    pub(crate) fn unchecked<S: AsRef<str>>(
        words: &[S],
        word_index: usize,
        start: usize,
        stop: usize,
    ) -> Self {
        debug_assert!(
            words::word_len(words, word_index).is_some_and(|len| start <= stop && stop <= len),
            "malformed label {word_index}:{start}..{stop}"
        );
        debug_assert!(
            start < stop || words::word_len(words, word_index) == Some(start),
            "empty label {word_index}:{start}..{stop} is not terminal"
        );
        Self {
            word_index,
            start,
            stop,
        }
    }

    pub(crate) fn terminal_unchecked(word_index: usize, word_len: usize) -> Self {
        Self {
            word_index,
            start: word_len,
            stop: word_len,
        }
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn start_index(&self) -> usize {
        self.start
    }

    /// Inclusive end of the range, `None` for a terminal label.
    pub fn end_index(&self) -> Option<usize> {
        self.stop.checked_sub(1).filter(|_| !self.is_terminal())
    }

    /// Exclusive end of the range.
    pub(crate) fn stop(&self) -> usize {
        self.stop
    }

    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    pub fn is_terminal(&self) -> bool {
        self.is_empty()
    }

    /// First character of the label, the branching key among siblings.
    pub(crate) fn first_byte<S: AsRef<str>>(&self, words: &[S]) -> Option<u8> {
        if self.is_terminal() {
            None
        } else {
            words::byte_at(words, self.word_index, self.start)
        }
    }

    pub(crate) fn byte_at<S: AsRef<str>>(&self, words: &[S], position: usize) -> Option<u8> {
        words::byte_at(words, self.word_index, position)
    }

    /// The label's own characters.
    pub fn substring<'w, S: AsRef<str>>(&self, words: &'w [S]) -> &'w str {
        words
            .get(self.word_index)
            .and_then(|word| word.as_ref().get(self.start..self.stop))
            .unwrap_or_default()
    }

    /// The whole word the label points into.
    pub fn word<'w, S: AsRef<str>>(&self, words: &'w [S]) -> &'w str {
        words::word(words, self.word_index)
    }
}

impl std::fmt::Display for Indexes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end_index() {
            Some(end) => write!(f, "({}, {}, {})", self.word_index, self.start, end),
            None => write!(f, "({}, {}, $)", self.word_index, self.start),
        }
    }
}
