//! End-to-end behaviour over a fixed word list, through the public API only.

use radixtree::{RadixTree, TreeStatsTrait, VectorKey};

const WORDS: &[&str] = &[
    "aardvark",
    "aardwolf",
    "abacus",
    "babble",
    "backtrack",
    "beehive",
    "create",
    "macro",
    "macroanalysis",
    "macroanalyst",
    "macrochelys",
    "mactroid",
    "obsequious",
    "sequence",
    "to",
    "toa",
    "toad",
    "toady",
    "toadyism",
    "what",
    "will",
    "wilting",
    "win",
    "wink",
    "winkle",
    "winkleman",
    "wit",
];

fn build() -> RadixTree<&'static str> {
    let mut tree = RadixTree::new();
    for w in WORDS {
        tree.insert(w, *w);
    }
    tree.validate().unwrap();
    tree
}

fn has_prefix(prefix: &str) -> Vec<&'static str> {
    WORDS
        .iter()
        .copied()
        .filter(|w| w.starts_with(prefix))
        .collect()
}

fn deref<'a>(values: Vec<&&'a str>) -> Vec<&'a str> {
    values.into_iter().copied().collect()
}

#[test]
fn words_are_sorted() {
    let mut sorted = WORDS.to_vec();
    sorted.sort();
    assert_eq!(sorted, WORDS);
}

#[test]
fn contains() {
    let tree = build();
    for w in WORDS {
        assert!(tree.contains_key(w), "{w}");
    }
    assert!(!tree.contains_key([0u8]));
    assert!(!tree.contains_key(""));
}

#[test]
fn find() {
    let tree = build();
    assert_eq!(deref(tree.find("t")), has_prefix("t"));
    assert_eq!(deref(tree.find("to")), has_prefix("to"));
    assert_eq!(deref(tree.find("macroanaly")), has_prefix("macroanaly"));
    assert_eq!(deref(tree.find("wi")), has_prefix("wi"));
    assert!(tree.find([0u8]).is_empty());
    assert!(tree.find("wilted").is_empty());
}

#[test]
fn get() {
    let mut tree = build();
    for w in WORDS {
        assert_eq!(tree.get(w), Some(w));
    }
    assert_eq!(tree.get([0u8]), None);

    assert_eq!(tree.insert("aardvark", "aardvark!"), Some("aardvark"));
    assert_eq!(tree.get("aardvark"), Some(&"aardvark!"));

    // Removing a node that shares its path with others leaves them intact.
    assert_eq!(tree.remove("to"), Some("to"));
    assert_eq!(tree.get("toa"), Some(&"toa"));
    assert_eq!(tree.get("toad"), Some(&"toad"));

    // Filling in a branch point that had no value of its own.
    assert_eq!(tree.get("aard"), None);
    assert_eq!(tree.insert("aard", "aard"), None);
    assert_eq!(tree.get("aard"), Some(&"aard"));
    tree.validate().unwrap();
}

#[test]
fn insert() {
    let mut tree = build();
    assert_eq!(tree.insert("wink", "wink"), Some("wink"));
    assert_eq!(tree.insert("wilt", "wilt"), None);
    assert!(tree.contains_key("wilt"));
    assert!(tree.contains_key("wilting"));
    assert!(tree.contains_key("will"));
    tree.validate().unwrap();
}

#[test]
fn len() {
    let mut tree = RadixTree::new();
    assert_eq!(tree.len(), 0);
    for (i, w) in WORDS.iter().enumerate() {
        tree.insert(w, i);
        assert_eq!(tree.len(), i + 1);
    }
    tree.remove("aardvark");
    assert_eq!(tree.len(), WORDS.len() - 1);
    tree.insert("toad", 0);
    assert_eq!(tree.len(), WORDS.len() - 1);
}

#[test]
fn longest_prefix() {
    assert_eq!(RadixTree::<()>::new().longest_prefix("a"), None);
    let tree = build();
    assert_eq!(tree.longest_prefix("winkley"), Some(&"winkle"));
    assert_eq!(tree.longest_prefix("wink"), Some(&"wink"));
    assert_eq!(tree.longest_prefix("toadyisms"), Some(&"toadyism"));
    assert_eq!(tree.longest_prefix("tz"), None);
}

#[test]
fn min_max() {
    assert_eq!(RadixTree::<()>::new().max(), None);
    assert_eq!(RadixTree::<()>::new().min(), None);

    let mut tree = build();
    assert_eq!(tree.max(), Some(&"wit"));
    assert_eq!(tree.min(), Some(&"aardvark"));
    tree.insert("zzz", "zzz");
    tree.insert("a", "a");
    assert_eq!(tree.max(), Some(&"zzz"));
    assert_eq!(tree.min(), Some(&"a"));
}

#[test]
fn predecessor() {
    assert_eq!(RadixTree::<()>::new().predecessor("key"), None);
    let tree = build();
    assert_eq!(tree.predecessor(WORDS[0]), None);
    assert_eq!(tree.predecessor("non-existent key"), None);
    for pair in WORDS.windows(2) {
        assert_eq!(tree.predecessor(pair[1]), Some(&pair[0]), "{}", pair[1]);
    }
}

#[test]
fn successor() {
    assert_eq!(RadixTree::<()>::new().successor("key"), None);
    let tree = build();
    assert_eq!(tree.successor(WORDS[WORDS.len() - 1]), None);
    assert_eq!(tree.successor("non-existent key"), None);
    for pair in WORDS.windows(2) {
        assert_eq!(tree.successor(pair[0]), Some(&pair[1]), "{}", pair[0]);
    }
}

#[test]
fn remove() {
    let mut tree = build();
    assert_eq!(tree.remove("aardvs"), None);
    for w in WORDS {
        assert_eq!(tree.remove(w), Some(*w));
        tree.validate().unwrap();
    }
    assert_eq!(tree.remove([0u8]), None);
    assert!(tree.is_empty());

    let mut tree = build();
    // "aard" and "ba" exist only as branch points.
    assert_eq!(tree.remove("aard"), None);
    assert_eq!(tree.remove("ba"), None);
    assert_eq!(tree.remove("wit"), Some("wit"));
    assert_eq!(tree.len(), WORDS.len() - 1);
    tree.validate().unwrap();
}

#[test]
fn remove_merges_parent_with_remaining_child() {
    let mut tree = RadixTree::new();
    tree.insert("will", 1);
    tree.insert("wit", 2);
    assert_eq!(tree.remove("wit"), Some(2));

    let stats = tree.get_tree_stats();
    assert_eq!(stats.num_nodes, 2);
    assert_eq!(tree.keys(), vec![b"will".to_vec()]);
    tree.validate().unwrap();
}

#[test]
fn values() {
    assert!(RadixTree::<()>::new().values().is_empty());
    let tree = build();
    assert_eq!(deref(tree.values()), WORDS);

    let mut tree = RadixTree::new();
    tree.insert("Zaire", 0);
    tree.insert("Aaron", 1);
    tree.insert("Erica", 2);
    assert_eq!(tree.values(), vec![&1, &2, &0]);
}

#[test]
fn walk() {
    let tree = build();
    let limit = 3;
    let mut got = vec![];
    tree.walk("to", |v| {
        got.push(*v);
        got.len() < limit
    });
    assert_eq!(got, has_prefix("to")[..limit]);

    let mut all = vec![];
    tree.walk("", |v| {
        all.push(*v);
        true
    });
    assert_eq!(all, WORDS);
}

#[test]
fn iter_yields_full_keys() {
    let tree = build();
    for ((k, v), w) in tree.iter().zip(WORDS) {
        assert_eq!(k, w.as_bytes());
        assert_eq!(v, w);
    }
    assert_eq!(tree.iter().count(), WORDS.len());

    let keys: Vec<Vec<u8>> = tree.prefix_iter("wink").map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec![b"wink".to_vec(), b"winkle".to_vec(), b"winkleman".to_vec()]
    );
}

#[test]
fn integer_keys() {
    let mut tree = RadixTree::new();
    for i in (-500i64..500).rev() {
        tree.insert(VectorKey::from(i), i);
    }
    assert_eq!(tree.min(), Some(&-500));
    assert_eq!(tree.max(), Some(&499));
    assert_eq!(tree.predecessor(VectorKey::from(0i64)), Some(&-1));
    assert_eq!(tree.successor(VectorKey::from(-1i64)), Some(&0));
    let values: Vec<i64> = tree.values().into_iter().copied().collect();
    assert_eq!(values, (-500..500).collect::<Vec<_>>());
    tree.validate().unwrap();
}
