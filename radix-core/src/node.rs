use crate::indexes::Indexes;
use crate::trie::Trie;

/// Handle to a node in a trie's arena. Only the trie that minted it can
/// resolve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) label: Option<Indexes>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) sibling: Option<NodeId>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            label: None,
            first_child: None,
            sibling: None,
        }
    }

    pub(crate) fn leaf(label: Indexes) -> Self {
        Self {
            label: Some(label),
            first_child: None,
            sibling: None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }
}

/// Read-only view of one node, for walking the tree structure.
pub struct NodeRef<'t, 'w, S> {
    trie: &'t Trie<'w, S>,
    id: NodeId,
}

impl<S> Clone for NodeRef<'_, '_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for NodeRef<'_, '_, S> {}

impl<'t, 'w, S: AsRef<str>> NodeRef<'t, 'w, S> {
    pub(crate) fn new(trie: &'t Trie<'w, S>, id: NodeId) -> Self {
        Self { trie, id }
    }

    fn node(&self) -> &'t Node {
        self.trie.node(self.id)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn is_root(&self) -> bool {
        self.id == NodeId::ROOT
    }

    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// `None` only for the root.
    pub fn label(&self) -> Option<Indexes> {
        self.node().label
    }

    pub fn first_child(&self) -> Option<Self> {
        self.node().first_child.map(|id| Self::new(self.trie, id))
    }

    pub fn sibling(&self) -> Option<Self> {
        self.node().sibling.map(|id| Self::new(self.trie, id))
    }

    pub fn children(&self) -> Children<'t, 'w, S> {
        Children {
            next: self.first_child(),
        }
    }

    /// The word this node's label points into.
    pub fn word(&self) -> Option<&'w str> {
        self.label().map(|label| label.word(self.trie.words()))
    }

    /// Characters spelled from the root down to the end of this node's label.
    pub fn path(&self) -> &'w str {
        match self.label() {
            Some(label) => self
                .trie
                .words()
                .get(label.word_index())
                .and_then(|word| word.as_ref().get(..label.stop()))
                .unwrap_or_default(),
            None => "",
        }
    }
}

pub struct Children<'t, 'w, S> {
    next: Option<NodeRef<'t, 'w, S>>,
}

impl<'t, 'w, S: AsRef<str>> Iterator for Children<'t, 'w, S> {
    type Item = NodeRef<'t, 'w, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.sibling();
        Some(current)
    }
}
