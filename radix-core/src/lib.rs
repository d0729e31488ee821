//! Compressed trie over a fixed, ordered word list, answering prefix
//! completion queries.
//!
//! ```
//! use radix_core::Trie;
//!
//! let words = ["bear", "bull", "stock", "bell"];
//! let trie = Trie::build(&words)?;
//!
//! let mut found = trie.complete_words("be").unwrap_or_default();
//! found.sort_unstable();
//! assert_eq!(found, ["bear", "bell"]);
//! assert_eq!(trie.complete_words("z"), None);
//! # Ok::<(), radix_core::TrieError>(())
//! ```

mod builder;
pub mod completion;
pub mod dump;
pub mod error;
pub mod indexes;
pub mod node;
pub mod options;
pub mod trie;
mod words;

pub use completion::Leaf;
pub use error::TrieError;
pub use indexes::Indexes;
pub use node::{NodeId, NodeRef};
pub use options::{BuildOptions, PrefixPolicy};
pub use trie::Trie;
