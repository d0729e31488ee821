use std::collections::BTreeSet;

use radix_core::{BuildOptions, PrefixPolicy, Trie};

const MARKET: [&str; 4] = ["bear", "bull", "stock", "bell"];

const ROMAN: [&str; 7] = [
    "romane",
    "romanus",
    "romulus",
    "rubens",
    "ruber",
    "rubicon",
    "rubicundus",
];

const MIXED: [&str; 14] = [
    "cart", "car", "care", "cat", "cattle", "dog", "do", "door", "doors", "a", "ab", "abc", "cart",
    "z",
];

fn oracle<'w>(words: &[&'w str], prefix: &str) -> BTreeSet<&'w str> {
    words
        .iter()
        .copied()
        .filter(|word| word.starts_with(prefix))
        .collect()
}

fn completions<'w>(trie: &Trie<'w, &'w str>, prefix: &str) -> BTreeSet<&'w str> {
    trie.complete_words(prefix)
        .unwrap_or_default()
        .into_iter()
        .collect()
}

/// Every prefix of every word, plus a few that match nothing.
fn prefixes(words: &[&str]) -> BTreeSet<String> {
    let mut all: BTreeSet<String> = words
        .iter()
        .flat_map(|word| (0..=word.len()).map(move |end| word[..end].to_string()))
        .collect();
    for miss in ["x", "qq", "bz", "romanes", "doorsx", "cattles"] {
        all.insert(miss.to_string());
    }
    all
}

#[test]
fn test_market_example() {
    let trie = Trie::build(&MARKET).unwrap();

    assert_eq!(
        completions(&trie, "b"),
        BTreeSet::from(["bear", "bull", "bell"])
    );
    assert_eq!(completions(&trie, "be"), BTreeSet::from(["bear", "bell"]));
    assert_eq!(completions(&trie, "bell"), BTreeSet::from(["bell"]));
    assert_eq!(trie.complete("z"), None);
    assert_eq!(
        completions(&trie, ""),
        BTreeSet::from(["bear", "bull", "stock", "bell"])
    );
}

#[test]
fn test_matches_starts_with_oracle() {
    for words in [&MARKET[..], &ROMAN[..], &MIXED[..]] {
        let trie = Trie::build(words).unwrap();
        for prefix in prefixes(words) {
            let expected = oracle(words, &prefix);
            let found = trie.complete_words(&prefix);
            if expected.is_empty() {
                assert_eq!(found, None, "prefix {prefix:?}");
            } else {
                assert_eq!(completions(&trie, &prefix), expected, "prefix {prefix:?}");
            }
        }
    }
}

#[test]
fn test_every_word_completes_to_itself() {
    for words in [&MARKET[..], &ROMAN[..], &MIXED[..]] {
        let trie = Trie::build(words).unwrap();
        for word in words {
            let leaves = trie.complete(word).unwrap();
            assert!(leaves.iter().any(|leaf| leaf.word() == *word), "{word}");
            assert!(trie.contains(word));
        }
    }
}

#[test]
fn test_leaves_start_with_prefix() {
    let trie = Trie::build(&MIXED).unwrap();
    for prefix in prefixes(&MIXED) {
        for leaf in trie.complete(&prefix).unwrap_or_default() {
            assert!(leaf.word().starts_with(&prefix));
            assert_eq!(leaf.indexes().word_index(), leaf.word_index());
            assert_eq!(MIXED[leaf.word_index()], leaf.word());
        }
    }
}

#[test]
fn test_leaf_paths_spell_their_word() {
    let trie = Trie::build(&MIXED).unwrap();

    let mut stack = vec![trie.root()];
    while let Some(node) = stack.pop() {
        if !node.is_root() && node.is_leaf() {
            assert_eq!(Some(node.path()), node.word());
        }
        stack.extend(node.children());
    }
}

#[test]
fn test_siblings_branch_on_distinct_characters() {
    let trie = Trie::build(&MIXED).unwrap();

    let mut stack = vec![trie.root()];
    while let Some(node) = stack.pop() {
        let mut seen = BTreeSet::new();
        let mut terminals = 0;
        for child in node.children() {
            let label = child.label().unwrap();
            if label.is_terminal() {
                terminals += 1;
                assert!(child.is_leaf());
            } else {
                let key = label.substring(trie.words()).as_bytes()[0];
                assert!(seen.insert(key), "duplicate branch {}", key as char);
            }
        }
        assert!(terminals <= 1);
        stack.extend(node.children());
    }
}

#[test]
fn test_empty_word_list() {
    let words: Vec<&str> = Vec::new();
    let trie = Trie::build(&words).unwrap();

    for prefix in ["", "a", "bear"] {
        assert_eq!(trie.complete(prefix), None);
    }
}

#[test]
fn test_build_is_deterministic() {
    let a = Trie::build(&ROMAN).unwrap();
    let b = Trie::build(&ROMAN).unwrap();

    assert_eq!(a.node_count(), b.node_count());
    assert_eq!(a.dump().to_string(), b.dump().to_string());
}

#[test]
fn test_insertion_order_shapes_the_tree() {
    let forward = ["bear", "bell", "bull"];
    let backward = ["bull", "bell", "bear"];
    let a = Trie::build(&forward).unwrap();
    let b = Trie::build(&backward).unwrap();

    assert_ne!(a.dump().to_string(), b.dump().to_string());
    assert_eq!(completions(&a, "b").len(), completions(&b, "b").len());
}

#[test]
fn test_drop_policy_loses_extensions_only() {
    let options = BuildOptions::default().with_prefix_policy(PrefixPolicy::Drop);
    let trie = Trie::build_with(&MIXED, options).unwrap();

    // Only words extending a word that is still a leaf are lost: "car" and
    // "do" stopped being leaves when they split "cart" and "dog".
    let lost = ["cattle", "doors", "ab", "abc"];
    for word in MIXED {
        assert_eq!(trie.contains(word), !lost.contains(&word), "{word}");
    }
    for leaf in trie.complete("").unwrap() {
        assert!(!lost.contains(&leaf.word()));
    }
}
