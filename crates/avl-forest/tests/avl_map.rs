use avl_forest::traverse::levelorder_with_empty;
use avl_forest::{AvlMap, RemoveError};

/// Level-order keys with `None` holes for absent children of non-leaf
/// nodes, flattened across levels.
fn level_keys(map: &AvlMap<i32, i32>) -> Vec<Option<i32>> {
    levelorder_with_empty(map.root())
        .flatten()
        .map(|slot| slot.map(|n| n.key))
        .collect()
}

fn from_keys(keys: &[i32]) -> AvlMap<i32, i32> {
    keys.iter().copied().collect()
}

#[test]
fn empty_map() {
    let map = AvlMap::<i32, i32>::new();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert!(map.root().is_none());
    assert_eq!(map.first(), None);
    assert_eq!(map.last(), None);
    map.assert_valid().unwrap();
}

#[test]
fn three_key_rotation_shapes() {
    // All four insertion orders of {1, 2, 3} exercise one rotation case
    // each and settle on the same balanced shape.
    for keys in [[3, 2, 1], [3, 1, 2], [1, 2, 3], [1, 3, 2]] {
        let map = from_keys(&keys);
        assert_eq!(map.len(), 3);
        assert_eq!(level_keys(&map), [Some(2), Some(1), Some(3)]);
        map.assert_valid().unwrap();
    }
}

#[test]
fn deep_left_left_rotation() {
    let map = from_keys(&[4, 1, 5, 0, 2, -1]);
    assert_eq!(
        level_keys(&map),
        [Some(1), Some(0), Some(4), Some(-1), None, Some(2), Some(5)]
    );
    map.assert_valid().unwrap();
}

#[test]
fn remove_leaf_triggers_rotation() {
    let mut map = from_keys(&[3, 2, 4, 1]);
    assert_eq!(map.remove(&4), Ok(0));
    assert_eq!(map.len(), 3);
    assert_eq!(level_keys(&map), [Some(2), Some(1), Some(3)]);
    map.assert_valid().unwrap();
}

#[test]
fn remove_rebalances_like_insert() {
    let mut map = from_keys(&[4, 1, 5, 0, 2, 6, -1]);
    assert_eq!(map.remove(&6), Ok(0));
    assert_eq!(
        level_keys(&map),
        [Some(1), Some(0), Some(4), Some(-1), None, Some(2), Some(5)]
    );
    map.assert_valid().unwrap();
}

#[test]
fn remove_failures_are_distinct_and_harmless() {
    let mut map = AvlMap::<i32, i32>::new();
    assert_eq!(map.remove(&7), Err(RemoveError::Empty));
    assert!(map.is_empty());

    map.insert(1, 10);
    map.insert(2, 20);
    let before = level_keys(&map);
    assert_eq!(map.remove(&7), Err(RemoveError::NotFound));
    assert_eq!(map.len(), 2);
    assert_eq!(level_keys(&map), before);
    map.assert_valid().unwrap();
}

#[test]
fn overwrite_keeps_size_and_structure() {
    let mut map = AvlMap::new();
    assert_eq!(map.insert(5, 50), None);
    assert_eq!(map.insert(3, 30), None);
    let before = level_keys(&map);

    assert_eq!(map.insert(5, 55), Some(50));
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&5), Some(&55));
    assert_eq!(level_keys(&map), before);
    map.assert_valid().unwrap();
}

#[test]
fn get_roundtrip_until_removed() {
    let mut map = AvlMap::new();
    for i in 0..50 {
        map.insert(i, i * 10);
    }
    for i in 0..50 {
        assert_eq!(map.get(&i), Some(&(i * 10)));
        assert!(map.contains_key(&i));
    }
    assert_eq!(map.remove(&25), Ok(250));
    assert!(!map.contains_key(&25));
    assert_eq!(map.get(&25), None);
    assert_eq!(map.get(&25).copied().unwrap_or(-1), -1);
}

#[test]
fn get_mut_updates_in_place() {
    let mut map = AvlMap::new();
    map.insert("k", 1);
    *map.get_mut(&"k").unwrap() += 41;
    assert_eq!(map.get(&"k"), Some(&42));
    assert_eq!(map.get_mut(&"missing"), None);
}

#[test]
fn iteration_is_sorted_and_restartable() {
    let map: AvlMap<i32, i32> = [40, 10, 30, 20, 50].into_iter().collect();
    let keys: Vec<i32> = map.keys().copied().collect();
    assert_eq!(keys, [10, 20, 30, 40, 50]);
    // Fresh traversal each call.
    let again: Vec<i32> = map.keys().copied().collect();
    assert_eq!(again, keys);

    let pairs: Vec<(i32, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(pairs.len(), 5);
    // Values come out in the same key order.
    let values: Vec<i32> = map.values().copied().collect();
    assert_eq!(values, [0, 0, 0, 0, 0]);
}

#[test]
fn into_iter_yields_owned_sorted_entries() {
    let mut map = AvlMap::new();
    map.insert("b".to_string(), 2);
    map.insert("a".to_string(), 1);
    map.insert("c".to_string(), 3);
    let entries: Vec<(String, i32)> = map.into_iter().collect();
    assert_eq!(
        entries,
        [
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("c".to_string(), 3)
        ]
    );
}

#[test]
fn first_and_last_follow_mutations() {
    let mut map = from_keys(&[5, 3, 7]);
    assert_eq!(map.first().map(|(k, _)| *k), Some(3));
    assert_eq!(map.last().map(|(k, _)| *k), Some(7));
    map.remove(&3).unwrap();
    assert_eq!(map.first().map(|(k, _)| *k), Some(5));
    map.remove(&7).unwrap();
    assert_eq!(map.last().map(|(k, _)| *k), Some(5));
}

#[test]
fn clear_resets() {
    let mut map = from_keys(&[1, 2, 3]);
    map.clear();
    assert!(map.is_empty());
    assert!(map.root().is_none());
    map.assert_valid().unwrap();
}

#[test]
fn ladder_insert_delete_matrix() {
    let mut map = AvlMap::<i32, i32>::new();

    for i in 0..300 {
        map.insert(i, i);
        map.assert_valid().unwrap();
    }
    assert_eq!(map.len(), 300);

    for i in (0..300).step_by(3) {
        assert_eq!(map.remove(&i), Ok(i));
        map.assert_valid().unwrap();
    }
    assert_eq!(map.len(), 200);

    for i in 0..300 {
        assert_eq!(map.contains_key(&i), i % 3 != 0);
    }
}

#[test]
fn descending_ladder_stays_shallow() {
    let mut map = AvlMap::<i32, i32>::new();
    for i in (0..1024).rev() {
        map.insert(i, i);
    }
    map.assert_valid().unwrap();
    // An AVL tree of n nodes is at most ~1.44 * log2(n) deep.
    let h = avl_forest::height(map.root());
    assert!(h <= 15, "height {h} too large for 1024 entries");
}

#[test]
fn drain_to_empty_and_refill() {
    let mut map = from_keys(&[8, 4, 12, 2, 6, 10, 14]);
    for key in [4, 12, 8, 2, 14, 6, 10] {
        map.remove(&key).unwrap();
        map.assert_valid().unwrap();
    }
    assert!(map.is_empty());
    assert_eq!(map.remove(&8), Err(RemoveError::Empty));

    map.insert(1, 1);
    assert_eq!(map.len(), 1);
    map.assert_valid().unwrap();
}

#[test]
fn works_with_string_keys() {
    let mut map = AvlMap::new();
    map.insert("banana".to_string(), 1);
    map.insert("apple".to_string(), 2);
    map.insert("cherry".to_string(), 3);
    assert_eq!(map.first().map(|(k, _)| k.as_str()), Some("apple"));
    assert_eq!(map.last().map(|(k, _)| k.as_str()), Some("cherry"));
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["apple", "banana", "cherry"]);
}

#[test]
fn debug_output_shows_shape() {
    let map = from_keys(&[2, 1, 3]);
    let rendered = format!("{map:?}");
    assert!(rendered.contains("h=2"));
    assert!(rendered.contains("∅"));
}
