use crate::indexes::Indexes;
use crate::node::NodeId;
use crate::trie::Trie;

/// A leaf returned by a completion query. It stands for exactly one stored
/// word, recovered in full from the word array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leaf<'w> {
    node: NodeId,
    indexes: Indexes,
    word: &'w str,
}

impl<'w> Leaf<'w> {
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn indexes(&self) -> Indexes {
        self.indexes
    }

    pub fn word_index(&self) -> usize {
        self.indexes.word_index()
    }

    /// The full word, not just the leaf's own label.
    pub fn word(&self) -> &'w str {
        self.word
    }

    /// The leaf's own edge characters, empty for a terminal leaf.
    pub fn label(&self) -> &'w str {
        self.word
            .get(self.indexes.start_index()..self.indexes.stop())
            .unwrap_or_default()
    }
}

/// Depth-first leaf collection over sibling chains.
pub(crate) struct Collector<'t, 'w, S> {
    trie: &'t Trie<'w, S>,
    result: Vec<Leaf<'w>>,
}

impl<'t, 'w, S: AsRef<str>> Collector<'t, 'w, S> {
    pub(crate) fn new(trie: &'t Trie<'w, S>) -> Self {
        Self {
            trie,
            result: Vec::new(),
        }
    }

    /// Every leaf in the subtree of `from`, `from` included when it is a leaf.
    pub(crate) fn collect(mut self, from: NodeId) -> Vec<Leaf<'w>> {
        let first_child = self.trie.node(from).first_child;
        match first_child {
            Some(child) => self.dfs_collect(child),
            None => self.push_leaf(from),
        }
        self.result
    }

    fn dfs_collect(&mut self, first: NodeId) {
        let trie = self.trie;
        let mut current = Some(first);
        while let Some(id) = current {
            let node = trie.node(id);
            match node.first_child {
                Some(child) => self.dfs_collect(child),
                None => self.push_leaf(id),
            }
            current = node.sibling;
        }
    }

    fn push_leaf(&mut self, id: NodeId) {
        if let Some(leaf) = self.trie.leaf(id) {
            self.result.push(leaf);
        }
    }
}

impl<'w, S: AsRef<str>> Trie<'w, S> {
    /// Completion list for `prefix`: every leaf whose word starts with it, in
    /// no particular order. `None` when no stored word has this prefix.
    ///
    /// The empty prefix completes to every leaf in the trie.
    pub fn complete(&self, prefix: &str) -> Option<Vec<Leaf<'w>>> {
        let words = self.words;
        let first = self.node(NodeId::ROOT).first_child;
        if words.is_empty() || first.is_none() {
            return None;
        }

        let prefix = prefix.as_bytes();
        if prefix.is_empty() {
            return non_empty(Collector::new(self).collect(NodeId::ROOT));
        }

        let mut current = first;
        while let Some(id) = current {
            let node = self.node(id);
            let label = node.label?;
            let start = label.start_index();

            let first_matches = match (label.first_byte(words), prefix.get(start)) {
                (Some(key), Some(wanted)) => key == *wanted,
                _ => false,
            };
            if !first_matches {
                current = node.sibling;
                continue;
            }

            // Siblings never share a first character, so a later mismatch
            // rules out the whole query.
            let overlap = label.stop().min(prefix.len());
            for position in start + 1..overlap {
                if label.byte_at(words, position) != prefix.get(position).copied() {
                    return None;
                }
            }

            if label.stop() >= prefix.len() {
                return non_empty(Collector::new(self).collect(id));
            }
            current = node.first_child;
        }

        None
    }

    /// Same as [`Trie::complete`], resolved to the stored words.
    pub fn complete_words(&self, prefix: &str) -> Option<Vec<&'w str>> {
        self.complete(prefix)
            .map(|leaves| leaves.iter().map(|leaf| leaf.word()).collect())
    }

    /// Whether `word` can be completed as a word of its own.
    pub fn contains(&self, word: &str) -> bool {
        self.complete(word)
            .is_some_and(|leaves| leaves.iter().any(|leaf| leaf.word() == word))
    }

    pub(crate) fn leaf(&self, id: NodeId) -> Option<Leaf<'w>> {
        let indexes = self.node(id).label?;
        Some(Leaf {
            node: id,
            indexes,
            word: indexes.word(self.words),
        })
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}
