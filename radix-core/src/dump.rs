use std::fmt;

use crate::node::NodeRef;
use crate::trie::Trie;

/// Indented outline of a trie. Each node shows the characters spelled from the
/// root down to it, then its label triple; terminal leaves end with `$`.
pub struct Dump<'t, 'w, S> {
    trie: &'t Trie<'w, S>,
}

impl<'t, 'w, S: AsRef<str>> Dump<'t, 'w, S> {
    pub(crate) fn new(trie: &'t Trie<'w, S>) -> Self {
        Self { trie }
    }

    fn write_node(
        f: &mut fmt::Formatter<'_>,
        node: NodeRef<'t, 'w, S>,
        depth: usize,
    ) -> fmt::Result {
        let indent = "    ".repeat(depth);
        match node.label() {
            Some(label) if label.is_terminal() => {
                writeln!(f, "{indent}|-- {}$ {label}", node.path())?
            }
            Some(label) => writeln!(f, "{indent}|-- {} {label}", node.path())?,
            None => writeln!(f, "{indent}root")?,
        }
        for child in node.children() {
            Self::write_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl<S: AsRef<str>> fmt::Display for Dump<'_, '_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_node(f, self.trie.root(), 0)
    }
}
