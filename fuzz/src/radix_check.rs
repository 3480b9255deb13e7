#![no_main]

use std::collections::BTreeMap;
use std::ops::Bound;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use radixtree::RadixTree;

#[derive(Arbitrary, Debug)]
enum MapMethod {
    Get { key: Vec<u8> },
    Insert { key: Vec<u8>, val: usize },
    Update { key: Vec<u8>, val: usize },
    Delete { key: Vec<u8> },
    Find { prefix: Vec<u8> },
    Neighbours { key: Vec<u8> },
}

fuzz_target!(|methods: Vec<MapMethod>| {
    let mut tree = RadixTree::<usize>::new();
    let mut bt_map = BTreeMap::<Vec<u8>, usize>::new();

    for m in &methods {
        match m {
            MapMethod::Get { key } => {
                assert_eq!(tree.get(key), bt_map.get(key));
            }
            MapMethod::Insert { key, val } => {
                let btree_insert = bt_map.insert(key.clone(), *val);
                let r_insert = tree.insert(key, *val);
                assert_eq!(r_insert, btree_insert);
            }
            MapMethod::Update { key, val } => {
                let old_bt = bt_map.get_mut(key);
                let old_r = tree.get_mut(key);
                assert_eq!(old_r, old_bt);

                if let (Some(old_bt), Some(old_r)) = (old_bt, old_r) {
                    *old_bt = *val;
                    *old_r = *val;
                }
                assert_eq!(tree.get(key), bt_map.get(key));
            }
            MapMethod::Delete { key } => {
                assert_eq!(tree.remove(key), bt_map.remove(key));
            }
            MapMethod::Find { prefix } => {
                let found = tree.find(prefix);
                let expected: Vec<&usize> = bt_map
                    .iter()
                    .filter(|(k, _)| k.starts_with(prefix))
                    .map(|(_, v)| v)
                    .collect();
                assert_eq!(found, expected);
            }
            MapMethod::Neighbours { key } => {
                if bt_map.contains_key(key) {
                    let pred = bt_map.range::<Vec<u8>, _>(..key).next_back().map(|(_, v)| v);
                    let succ = bt_map
                        .range::<Vec<u8>, _>((Bound::Excluded(key), Bound::Unbounded))
                        .next()
                        .map(|(_, v)| v);
                    assert_eq!(tree.predecessor(key), pred);
                    assert_eq!(tree.successor(key), succ);
                }
            }
        }
        assert_eq!(tree.len(), bt_map.len());
    }

    if let Err(e) = tree.validate() {
        tree.print_tree();
        panic!("invalid tree: {:#}", e);
    }
    for ((k, v), (ek, ev)) in tree.iter().zip(bt_map.iter()) {
        assert_eq!(&k, ek);
        assert_eq!(v, ev);
    }
});
