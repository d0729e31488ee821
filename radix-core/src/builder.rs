use tracing::{debug, trace, warn};

use crate::error::TrieError;
use crate::indexes::Indexes;
use crate::node::{Node, NodeId};
use crate::options::{BuildOptions, PrefixPolicy};
use crate::trie::Trie;
use crate::words;

/// The pointer that currently reaches a node: its parent's first-child slot,
/// or its previous sibling's next-sibling slot.
#[derive(Debug, Clone, Copy)]
enum Link {
    FirstChild(NodeId),
    Sibling(NodeId),
}

impl<'w, S: AsRef<str>> Trie<'w, S> {
    pub fn build(words: &'w [S]) -> Result<Self, TrieError> {
        Self::build_with(words, BuildOptions::default())
    }

    /// Inserts `words` one at a time, first to last. The order matters: edges
    /// are split as later words diverge, nothing is rebalanced.
    pub fn build_with(words: &'w [S], options: BuildOptions) -> Result<Self, TrieError> {
        words::validate(words)?;

        let mut trie = Self {
            words,
            nodes: vec![Node::root()],
            options,
        };

        if let Some(first) = words.first() {
            let label = Indexes::unchecked(words, 0, 0, first.as_ref().len());
            let child = trie.push(Node::leaf(label));
            trie.set_link(Link::FirstChild(NodeId::ROOT), child);
        }

        // Index 0 goes through insert too, which leaves the tree unchanged.
        for word_index in 0..words.len() {
            trie.insert(word_index);
        }

        debug!(
            words = words.len(),
            nodes = trie.nodes.len(),
            policy = ?options.prefix_policy,
            "trie built"
        );
        Ok(trie)
    }

    fn insert(&mut self, word_index: usize) {
        let words = self.words;
        let Some(word_len) = words::word_len(words, word_index) else {
            return;
        };

        let mut parent = NodeId::ROOT;
        let mut start = 0;
        loop {
            let Some(key) = words::byte_at(words, word_index, start) else {
                self.end_word_at(parent, word_index, word_len);
                return;
            };

            if parent != NodeId::ROOT && self.node(parent).is_leaf() {
                self.extend_leaf(parent, word_index, start, word_len);
                return;
            }

            let mut link = Link::FirstChild(parent);
            let mut current = self.node(parent).first_child;
            let mut matched = None;
            while let Some(id) = current {
                let node = self.node(id);
                if node.label.and_then(|label| label.first_byte(words)) == Some(key) {
                    matched = node.label.map(|label| (id, label));
                    break;
                }
                link = Link::Sibling(id);
                current = node.sibling;
            }

            let Some((id, label)) = matched else {
                let leaf = self.push(Node::leaf(Indexes::unchecked(
                    words, word_index, start, word_len,
                )));
                self.set_link(link, leaf);
                trace!(word_index, start, "appended leaf");
                return;
            };

            // Exclusive end of the run shared by the new word and this edge.
            let mut end = start + 1;
            while end < label.stop()
                && words::byte_at(words, word_index, end).is_some()
                && words::byte_at(words, word_index, end) == label.byte_at(words, end)
            {
                end += 1;
            }

            if end == label.stop() {
                parent = id;
                start = end;
                continue;
            }

            self.split(link, id, label, word_index, end, word_len);
            return;
        }
    }

    /// Replaces `id` (reached through `link`) with a node labelled by the
    /// shared run `label.start..end`. Its children are `id` itself, relabelled
    /// to the rest of the old edge and keeping its subtree, then a leaf for
    /// the rest of the new word.
    fn split(
        &mut self,
        link: Link,
        id: NodeId,
        label: Indexes,
        word_index: usize,
        end: usize,
        word_len: usize,
    ) {
        let words = self.words;
        let common = Indexes::unchecked(words, label.word_index(), label.start_index(), end);
        let existing = Indexes::unchecked(words, label.word_index(), end, label.stop());
        let inserted = if end == word_len {
            Indexes::terminal_unchecked(word_index, word_len)
        } else {
            Indexes::unchecked(words, word_index, end, word_len)
        };

        let inserted = self.push(Node::leaf(inserted));
        let sibling = self.node(id).sibling;
        let parent = self.push(Node {
            label: Some(common),
            first_child: Some(id),
            sibling,
        });

        let node = self.node_mut(id);
        node.label = Some(existing);
        node.sibling = Some(inserted);
        self.set_link(link, parent);

        trace!(word_index, existing = label.word_index(), at = end, "split edge");
    }

    /// The new word is exhausted right at the end of `parent`'s edge.
    fn end_word_at(&mut self, parent: NodeId, word_index: usize, word_len: usize) {
        // The same word already ends at this leaf.
        if self.node(parent).is_leaf() {
            return;
        }

        let mut link = Link::FirstChild(parent);
        let mut current = self.node(parent).first_child;
        while let Some(id) = current {
            let node = self.node(id);
            if node.label.is_some_and(|label| label.is_terminal()) {
                return;
            }
            link = Link::Sibling(id);
            current = node.sibling;
        }

        let terminal = Indexes::terminal_unchecked(word_index, word_len);
        let leaf = self.push(Node::leaf(terminal));
        self.set_link(link, leaf);
        trace!(word_index, "appended terminal leaf");
    }

    /// The new word runs past `leaf`, whose word is a strict prefix of it.
    fn extend_leaf(&mut self, leaf: NodeId, word_index: usize, start: usize, word_len: usize) {
        let words = self.words;
        match self.options.prefix_policy {
            PrefixPolicy::Drop => {
                warn!(
                    word_index,
                    word = words::word(words, word_index),
                    "word extends an existing leaf, dropping it"
                );
            }
            PrefixPolicy::Preserve => {
                let Some(label) = self.node(leaf).label else {
                    return;
                };
                let Some(existing_len) = words::word_len(words, label.word_index()) else {
                    return;
                };

                let ends_here = self.push(Node::leaf(Indexes::terminal_unchecked(
                    label.word_index(),
                    existing_len,
                )));
                let rest = self.push(Node::leaf(Indexes::unchecked(
                    words, word_index, start, word_len,
                )));
                self.node_mut(ends_here).sibling = Some(rest);
                self.set_link(Link::FirstChild(leaf), ends_here);

                trace!(word_index, existing = label.word_index(), "extended leaf");
            }
        }
    }

    fn set_link(&mut self, link: Link, target: NodeId) {
        match link {
            Link::FirstChild(parent) => self.node_mut(parent).first_child = Some(target),
            Link::Sibling(previous) => self.node_mut(previous).sibling = Some(target),
        }
    }
}
