use crate::completion::Collector;
use crate::dump::Dump;
use crate::node::{Node, NodeId, NodeRef};
use crate::options::BuildOptions;

/// Compressed trie over a borrowed, ordered word array.
///
/// Nodes only hold offsets into `words`, so the trie borrows the array for its
/// whole life. It is built once by [`Trie::build`] and read-only afterwards.
pub struct Trie<'w, S> {
    pub(crate) words: &'w [S],
    pub(crate) nodes: Vec<Node>,
    pub(crate) options: BuildOptions,
}

impl<'w, S: AsRef<str>> Trie<'w, S> {
    pub fn words(&self) -> &'w [S] {
        self.words
    }

    pub fn options(&self) -> BuildOptions {
        self.options
    }

    pub fn root(&self) -> NodeRef<'_, 'w, S> {
        NodeRef::new(self, NodeId::ROOT)
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaves, i.e. of distinct completable words.
    pub fn len(&self) -> usize {
        Collector::new(self).collect(NodeId::ROOT).len()
    }

    pub fn is_empty(&self) -> bool {
        self.node(NodeId::ROOT).first_child.is_none()
    }

    /// Indented outline of the tree, for debugging.
    pub fn dump(&self) -> Dump<'_, 'w, S> {
        Dump::new(self)
    }

    // Ids are only minted by `push`, and nodes are never removed.
    #[allow(clippy::indexing_slicing)]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[allow(clippy::indexing_slicing)]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }
}

impl<S> std::fmt::Debug for Trie<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("words", &self.words.len())
            .field("nodes", &self.nodes)
            .field("options", &self.options)
            .finish()
    }
}
