use balanced_collections::avl_tree::AvlSet;
use rand::Rng;
use std::collections::BTreeSet;

#[test]
fn test_random_operations_preserve_invariants() {
    let mut rng = rand::thread_rng();
    let mut set = AvlSet::new(u32::cmp);
    let mut expected = BTreeSet::new();

    for _ in 0..1000 {
        let key = rng.gen::<u32>() % 500;
        if rng.gen::<bool>() {
            assert_eq!(set.insert(key).is_ok(), expected.insert(key));
        } else {
            assert_eq!(set.remove(&key).is_ok(), expected.remove(&key));
        }
        assert!(set.is_valid());
        assert_eq!(set.len(), expected.len());
    }

    for key in &expected {
        assert_eq!(set.get(key), Some(key));
    }
}

#[test]
fn test_height_stays_logarithmic() {
    let mut rng = rand::thread_rng();
    let mut set = AvlSet::new(u32::cmp);

    for _ in 0..10_000 {
        let _ = set.insert(rng.gen::<u32>());
    }

    assert!(set.is_valid());
    let bound = 1.44 * ((set.len() + 2) as f64).log2();
    assert!((set.height() as f64) <= bound);
}

#[test]
fn test_sequential_inserts_and_removes() {
    let mut set = AvlSet::new(u32::cmp);

    for key in 0..1000 {
        set.insert(key).unwrap();
        assert!(set.is_valid());
    }
    assert_eq!(set.len(), 1000);

    for key in 0..1000 {
        set.remove(&key).unwrap();
        assert!(set.is_valid());
    }
    assert!(set.is_empty());
}
