use std::collections::BTreeMap;
use std::ops::Bound;

use proptest::prelude::*;

use crate::tree::RadixTree;

#[derive(Clone, Debug)]
enum Op {
    Insert(Vec<u8>, u64),
    Remove(Vec<u8>),
    Get(Vec<u8>),
    Find(Vec<u8>),
    LongestPrefix(Vec<u8>),
    Neighbours(Vec<u8>),
}

fn key_strategy() -> impl Strategy<Value = Vec<u8>> + Clone {
    // A narrow alphabet and short keys so that shared prefixes, splits and merges are common.
    prop::collection::vec(0u8..4, 0..=6)
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        40 => (key.clone(), any::<u64>()).prop_map(|(k, v)| Op::Insert(k, v)),
        25 => key.clone().prop_map(Op::Remove),
        10 => key.clone().prop_map(Op::Get),
        10 => key.clone().prop_map(Op::Find),
        5 => key.clone().prop_map(Op::LongestPrefix),
        10 => key.clone().prop_map(Op::Neighbours),
    ];
    prop::collection::vec(op, 0..=500)
}

fn model_longest_prefix(m: &BTreeMap<Vec<u8>, u64>, key: &[u8]) -> Option<u64> {
    (0..=key.len())
        .rev()
        .find_map(|len| m.get(&key[..len]).copied())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_with_btree(ops in ops_strategy()) {
        let mut t: RadixTree<u64> = RadixTree::new();
        let mut m: BTreeMap<Vec<u8>, u64> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let old_t = t.insert(&key, value);
                    let old_m = m.insert(key, value);
                    prop_assert_eq!(old_t, old_m);
                }
                Op::Remove(key) => {
                    let old_t = t.remove(&key);
                    let old_m = m.remove(key.as_slice());
                    prop_assert_eq!(old_t, old_m);
                    prop_assert!(!t.contains_key(&key));
                }
                Op::Get(key) => {
                    let got_t = t.get(&key).copied();
                    let got_m = m.get(key.as_slice()).copied();
                    prop_assert_eq!(got_t, got_m);
                }
                Op::Find(prefix) => {
                    let got_t: Vec<u64> = t.find(&prefix).into_iter().copied().collect();
                    let got_m: Vec<u64> = m
                        .iter()
                        .filter(|(k, _)| k.starts_with(&prefix))
                        .map(|(_, v)| *v)
                        .collect();
                    prop_assert_eq!(got_t, got_m);
                }
                Op::LongestPrefix(key) => {
                    prop_assert_eq!(t.longest_prefix(&key).copied(), model_longest_prefix(&m, &key));
                }
                Op::Neighbours(key) => {
                    // Only stored keys are guaranteed to be paths in the tree.
                    if m.contains_key(&key) {
                        let pred_m = m.range::<Vec<u8>, _>(..&key).next_back().map(|(_, v)| *v);
                        let succ_m = m
                            .range::<Vec<u8>, _>((Bound::Excluded(&key), Bound::Unbounded))
                            .next()
                            .map(|(_, v)| *v);
                        prop_assert_eq!(t.predecessor(&key).copied(), pred_m);
                        prop_assert_eq!(t.successor(&key).copied(), succ_m);
                    }
                }
            }

            prop_assert_eq!(t.len(), m.len());
        }

        if let Err(e) = t.validate() {
            t.print_tree();
            prop_assert!(false, "invalid tree: {:#}", e);
        }
        prop_assert_eq!(t.min().copied(), m.values().next().copied());
        prop_assert_eq!(t.max().copied(), m.values().next_back().copied());

        let got: Vec<(Vec<u8>, u64)> = t.iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(Vec<u8>, u64)> = m.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_remove_all_restores_empty_tree(keys in prop::collection::vec(key_strategy(), 0..100)) {
        let mut t: RadixTree<usize> = keys.iter().enumerate().map(|(i, k)| (k, i)).collect();
        for key in &keys {
            t.remove(key);
            prop_assert!(t.validate().is_ok());
        }
        prop_assert!(t.is_empty());
        prop_assert_eq!(t.iter().count(), 0);
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

#[test]
fn exhaustive_insert_remove_order_small_set() {
    let keys: Vec<&[u8]> = vec![&b""[..], &b"a"[..], &b"ab"[..], &b"abc"[..], &b"abd"[..], &b"b"[..]];

    for_each_permutation(&keys, |perm| {
        let mut t: RadixTree<usize> = RadixTree::new();
        for (i, k) in perm.iter().enumerate() {
            assert_eq!(t.insert(k, i), None);
        }
        t.validate().unwrap();
        let got: Vec<Vec<u8>> = t.keys();
        let mut expected: Vec<Vec<u8>> = keys.iter().map(|k| k.to_vec()).collect();
        expected.sort();
        assert_eq!(got, expected);

        // Remove in the same shuffled order, checking structure at every step.
        for k in &perm {
            assert!(t.remove(k).is_some());
            t.validate().unwrap();
        }
        assert!(t.is_empty());
    });
}
