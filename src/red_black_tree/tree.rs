use crate::red_black_tree::node::{Color, Node};
use std::cmp;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn is_red<T>(tree: &Tree<T>) -> bool {
    match *tree {
        None => false,
        Some(ref node) => node.color == Color::Red,
    }
}

pub fn height<T>(tree: &Tree<T>) -> usize {
    match *tree {
        None => 0,
        Some(ref node) => cmp::max(height(&node.left), height(&node.right)) + 1,
    }
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(ref mut node) = *tree {
        if node.left.is_some() {
            let should_shift = match node.left {
                Some(ref child) => child.color != Color::Red && !is_red(&child.left),
                None => false,
            };
            if should_shift {
                node.shift_left();
            }

            let ret = remove_min(&mut node.left);
            node.balance();
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

fn combine_subtrees<T>(left_tree: Tree<T>, mut right_tree: Tree<T>, color: Color) -> Tree<T> {
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    new_root.color = color;
    Some(new_root)
}

pub fn fix_root<T>(tree: &mut Tree<T>) {
    if let Some(ref mut node) = *tree {
        if !is_red(&node.left) && !is_red(&node.right) {
            node.color = Color::Red;
        }
    }
}

pub fn insert<T>(
    tree: &mut Tree<T>,
    record: T,
    compare: &dyn Fn(&T, &T) -> Ordering,
) -> Result<(), T> {
    match *tree {
        Some(ref mut node) => match compare(&record, &node.record) {
            Ordering::Less => insert(&mut node.left, record, compare)?,
            Ordering::Greater => insert(&mut node.right, record, compare)?,
            Ordering::Equal => return Err(record),
        },
        None => {
            *tree = Some(Box::new(Node::new(record)));
            return Ok(());
        },
    }

    let node = tree.as_mut().expect("Expected non-empty tree.");

    if is_red(&node.right) && !is_red(&node.left) {
        node.rotate_left();
    }

    let should_rotate = match node.left {
        Some(ref child) => child.color == Color::Red && is_red(&child.left),
        None => false,
    };
    if should_rotate {
        node.rotate_right();
    }

    if is_red(&node.left) && is_red(&node.right) {
        node.flip_colors();
    }

    Ok(())
}

pub fn remove<T>(tree: &mut Tree<T>, probe: &T, compare: &dyn Fn(&T, &T) -> Ordering) -> Option<T> {
    let ret = match tree.take() {
        Some(mut node) => {
            if compare(probe, &node.record) == Ordering::Less {
                let should_shift = match node.left {
                    Some(ref child) => child.color != Color::Red && !is_red(&child.left),
                    None => false,
                };
                if should_shift {
                    node.shift_left();
                }

                let ret = remove(&mut node.left, probe, compare);
                *tree = Some(node);
                ret
            } else {
                if is_red(&node.left) {
                    node.rotate_right();
                }

                if compare(probe, &node.record) == Ordering::Equal && node.right.is_none() {
                    assert!(node.left.is_none());
                    return Some(node.record);
                }

                let should_shift = match node.right {
                    Some(ref child) => child.color != Color::Red && !is_red(&child.left),
                    None => false,
                };
                if should_shift {
                    node.shift_right();
                }

                if compare(probe, &node.record) == Ordering::Equal {
                    let Node {
                        record,
                        left,
                        right,
                        color,
                    } = *node;
                    *tree = combine_subtrees(left, right, color);
                    Some(record)
                } else {
                    let ret = remove(&mut node.right, probe, compare);
                    *tree = Some(node);
                    ret
                }
            }
        },
        None => return None,
    };

    let node = tree.as_mut().expect("Expected non-empty tree.");
    node.balance();

    ret
}

pub fn get<'a, T>(
    tree: &'a Tree<T>,
    probe: &T,
    compare: &dyn Fn(&T, &T) -> Ordering,
) -> Option<&'a T> {
    tree.as_ref().and_then(|node| match compare(probe, &node.record) {
        Ordering::Less => get(&node.left, probe, compare),
        Ordering::Greater => get(&node.right, probe, compare),
        Ordering::Equal => Some(&node.record),
    })
}

pub fn dispose_all<T>(tree: Tree<T>, dispose: &mut dyn FnMut(T)) {
    if let Some(node) = tree {
        let Node { record, left, right, .. } = *node;
        dispose_all(left, dispose);
        dispose_all(right, dispose);
        dispose(record);
    }
}

pub fn is_valid<T>(tree: &Tree<T>, compare: &dyn Fn(&T, &T) -> Ordering) -> bool {
    !is_red(tree) && check(tree, compare, None, None).is_some()
}

// returns the black-height when the subtree satisfies the order and coloring invariants
fn check<'a, T>(
    tree: &'a Tree<T>,
    compare: &dyn Fn(&T, &T) -> Ordering,
    min: Option<&'a T>,
    max: Option<&'a T>,
) -> Option<usize> {
    let node = match *tree {
        Some(ref node) => node,
        None => return Some(0),
    };

    if let Some(min) = min {
        if compare(&node.record, min) != Ordering::Greater {
            return None;
        }
    }
    if let Some(max) = max {
        if compare(&node.record, max) != Ordering::Less {
            return None;
        }
    }

    if is_red(&node.right) {
        return None;
    }
    if node.color == Color::Red && is_red(&node.left) {
        return None;
    }

    let left_blacks = check(&node.left, compare, min, Some(&node.record))?;
    let right_blacks = check(&node.right, compare, Some(&node.record), max)?;
    if left_blacks != right_blacks {
        return None;
    }

    match node.color {
        Color::Black => Some(left_blacks + 1),
        Color::Red => Some(left_blacks),
    }
}
