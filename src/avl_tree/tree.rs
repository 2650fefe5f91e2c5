use crate::avl_tree::node::Node;
use std::cmp;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match *tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    let has_left = match *tree {
        Some(ref node) => node.left.is_some(),
        None => false,
    };

    if has_left {
        let min = match *tree {
            Some(ref mut node) => remove_min(&mut node.left),
            None => unreachable!(),
        };
        balance(tree);
        return min;
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.right.take();
            node
        },
        None => unreachable!(),
    }
}

fn combine_subtrees<T>(left_tree: Tree<T>, mut right_tree: Tree<T>) -> Tree<T> {
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    Some(new_root)
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

    balance(tree);
    Ok(())
}

pub fn remove<T>(tree: &mut Tree<T>, probe: &T, compare: &dyn Fn(&T, &T) -> Ordering) -> Option<T> {
    let ret = match tree.take() {
        Some(mut node) => match compare(probe, &node.record) {
            Ordering::Less => {
                let ret = remove(&mut node.left, probe, compare);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, probe, compare);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let Node { record, left, right, .. } = *node;
                match (left, right) {
                    (None, right) => *tree = right,
                    (left, None) => *tree = left,
                    (left, right) => *tree = combine_subtrees(left, right),
                }
                Some(record)
            },
        },
        None => return None,
    };

    balance(tree);
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
    check(tree, compare, None, None).is_some()
}

// returns the subtree height when the subtree satisfies the order and balance invariants
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

    let left_height = check(&node.left, compare, min, Some(&node.record))?;
    let right_height = check(&node.right, compare, Some(&node.record), max)?;
    let height = cmp::max(left_height, right_height) + 1;
    let balance = left_height as i32 - right_height as i32;

    if node.height == height && balance >= -1 && balance <= 1 {
        Some(height)
    } else {
        None
    }
}
