use std::collections::HashSet;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use canopy::{MapTree, SetTree};

#[test]
fn set_iterates_in_sorted_order() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut set = SetTree::new(16);
    let mut keys = HashSet::new();
    while keys.len() < 1000 {
        let key: u64 = rng.gen();
        if keys.insert(key) {
            assert!(set.insert(key));
        }
    }
    let sorted: Vec<u64> = keys.into_iter().sorted().collect();
    let collected: Vec<u64> = set.iter().copied().collect();
    assert_eq!(collected, sorted);
    set.check_invariants();
}

#[test]
fn map_iterates_in_sorted_key_order() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut map = MapTree::new(16);
    let mut keys = HashSet::new();
    for _ in 0..1000 {
        let key: u32 = rng.gen_range(0..10_000);
        keys.insert(key);
        map.insert(key, key as u64 * 3);
    }
    let sorted: Vec<u32> = keys.into_iter().sorted().collect();
    let collected: Vec<u32> = map.iter().map(|(k, _)| *k).collect();
    assert_eq!(collected, sorted);
    for key in &sorted {
        assert_eq!(map.get(key), Some(&(*key as u64 * 3)));
    }
    map.check_invariants();
}
