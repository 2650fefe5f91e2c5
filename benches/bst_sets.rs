use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_btreeset_get(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = BTreeSet::new();
    let mut keys = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        set.insert(key);
        keys.push(key);
    }

    c.bench_function("bench btreeset get", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.get(key));
            }
        })
    });
}

fn bench_btreeset_remove(c: &mut Criterion) {
    c.bench_function("bench btreeset remove", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            let mut keys = Vec::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                set.insert(key);
                keys.push(key);
            }
            for key in &keys {
                set.remove(key);
            }
        })
    });
}

macro_rules! bst_set_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use balanced_collections::$module_name::$type_name;
                use criterion::{black_box, Criterion};
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;

                pub fn bench_insert(c: &mut Criterion) {
                    let name = format!("bench {} insert", stringify!($module_name));
                    c.bench_function(&name, |b| {
                        b.iter(|| {
                            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                            let mut set = $type_name::new(u32::cmp);
                            for _ in 0..NUM_OF_OPERATIONS {
                                let _ = set.insert(rng.next_u32());
                            }
                        })
                    });
                }

                pub fn bench_get(c: &mut Criterion) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new(u32::cmp);
                    let mut keys = Vec::new();
                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        let _ = set.insert(key);
                        keys.push(key);
                    }

                    let name = format!("bench {} get", stringify!($module_name));
                    c.bench_function(&name, move |b| {
                        b.iter(|| {
                            for key in &keys {
                                black_box(set.get(key));
                            }
                        })
                    });
                }

                pub fn bench_remove(c: &mut Criterion) {
                    let name = format!("bench {} remove", stringify!($module_name));
                    c.bench_function(&name, |b| {
                        b.iter(|| {
                            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                            let mut set = $type_name::new(u32::cmp);
                            let mut keys = Vec::new();
                            for _ in 0..NUM_OF_OPERATIONS {
                                let key = rng.next_u32();
                                let _ = set.insert(key);
                                keys.push(key);
                            }
                            for key in &keys {
                                let _ = set.remove(key);
                            }
                        })
                    });
                }
            }
        )*
    };
}

bst_set_benches! {
    avl_tree: AvlSet,
    red_black_tree: RedBlackSet,
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_btreeset_get,
    bench_btreeset_remove,
    avl_tree::bench_insert,
    avl_tree::bench_get,
    avl_tree::bench_remove,
    red_black_tree::bench_insert,
    red_black_tree::bench_get,
    red_black_tree::bench_remove,
);
criterion_main!(benches);
