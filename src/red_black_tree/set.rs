use crate::callback::{Compare, Dispose};
use crate::error::TreeError;
use crate::red_black_tree::node::Color;
use crate::red_black_tree::tree;
use std::cmp::Ordering;

/// An ordered set of unique records implemented using a left-leaning red black tree.
///
/// A red black tree is a self-balancing binary search tree that uses a color bit per node to
/// ensure that the tree remains approximately balanced during insertions and deletions. The
/// left-leaning restriction keeps every red link on a left child, which collapses the rebalancing
/// into three local repair rules. Records are ordered and deduplicated solely through the
/// comparator supplied at construction; a record comparing equal to one already stored is rejected
/// and handed back.
///
/// # Examples
/// ```
/// use balanced_collections::red_black_tree::RedBlackSet;
/// use balanced_collections::TreeError;
///
/// let mut set = RedBlackSet::new(u32::cmp);
/// set.insert(0).unwrap();
/// set.insert(3).unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.insert(3), Err(TreeError::Duplicate(3)));
///
/// assert_eq!(set.get(&0), Some(&0));
/// assert!(set.is_valid());
///
/// set.remove(&0).unwrap();
/// assert_eq!(set.remove(&1), Err(TreeError::NotFound));
/// ```
pub struct RedBlackSet<T> {
    tree: tree::Tree<T>,
    len: usize,
    compare: Compare<T>,
    dispose: Option<Dispose<T>>,
}

impl<T> RedBlackSet<T> {
    /// Constructs a new, empty `RedBlackSet<T>` ordered by `compare`.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new(u32::cmp);
    /// ```
    pub fn new<F>(compare: F) -> Self
    where
        F: 'static + Fn(&T, &T) -> Ordering,
    {
        RedBlackSet {
            tree: None,
            len: 0,
            compare: Box::new(compare),
            dispose: None,
        }
    }

    /// Constructs a new, empty `RedBlackSet<T>` ordered by `compare`, with a disposer that runs
    /// on every record the set permanently destroys: on [`remove`](RedBlackSet::remove), on
    /// [`clear`](RedBlackSet::clear), and on drop.
    ///
    /// Records handed back to the caller (a rejected duplicate, or a record extracted with
    /// [`take`](RedBlackSet::take)) are not disposed; their ownership leaves the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let disposed = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&disposed);
    /// let mut set = RedBlackSet::with_disposer(u32::cmp, move |_| counter.set(counter.get() + 1));
    ///
    /// set.insert(1).unwrap();
    /// set.remove(&1).unwrap();
    /// assert_eq!(disposed.get(), 1);
    /// ```
    pub fn with_disposer<F, D>(compare: F, dispose: D) -> Self
    where
        F: 'static + Fn(&T, &T) -> Ordering,
        D: 'static + FnMut(T),
    {
        RedBlackSet {
            tree: None,
            len: 0,
            compare: Box::new(compare),
            dispose: Some(Box::new(dispose)),
        }
    }

    /// Inserts a record into the set. If a record comparing equal already exists, the set is left
    /// untouched and the new record is handed back inside
    /// [`TreeError::Duplicate`](crate::TreeError::Duplicate).
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    /// use balanced_collections::TreeError;
    ///
    /// let mut set = RedBlackSet::new(u32::cmp);
    /// assert_eq!(set.insert(1), Ok(()));
    /// assert!(set.contains(&1));
    /// assert_eq!(set.insert(1), Err(TreeError::Duplicate(1)));
    /// ```
    pub fn insert(&mut self, record: T) -> Result<(), TreeError<T>> {
        match tree::insert(&mut self.tree, record, &*self.compare) {
            Ok(()) => {
                if let Some(ref mut node) = self.tree {
                    node.color = Color::Black;
                }
                self.len += 1;
                Ok(())
            },
            Err(record) => Err(TreeError::Duplicate(record)),
        }
    }

    /// Removes the record comparing equal to `probe` and passes it to the disposer, if one was
    /// supplied. Reports [`TreeError::NotFound`](crate::TreeError::NotFound) and leaves the set
    /// untouched if no record matches.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    /// use balanced_collections::TreeError;
    ///
    /// let mut set = RedBlackSet::new(u32::cmp);
    /// set.insert(1).unwrap();
    /// assert_eq!(set.remove(&1), Ok(()));
    /// assert_eq!(set.remove(&1), Err(TreeError::NotFound));
    /// ```
    pub fn remove(&mut self, probe: &T) -> Result<(), TreeError<T>> {
        match self.take(probe) {
            Some(record) => {
                if let Some(ref mut dispose) = self.dispose {
                    dispose(record);
                }
                Ok(())
            },
            None => Err(TreeError::NotFound),
        }
    }

    /// Removes and returns the record comparing equal to `probe`, bypassing the disposer;
    /// ownership of the record transfers to the caller. Returns `None` if no record matches.
    ///
    /// The membership check runs first, so an absent probe leaves the structure untouched; the
    /// red-borrowing descent would otherwise restructure the tree even for a miss.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new(u32::cmp);
    /// set.insert(1).unwrap();
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, probe: &T) -> Option<T> {
        if tree::get(&self.tree, probe, &*self.compare).is_none() {
            return None;
        }

        tree::fix_root(&mut self.tree);
        let ret = tree::remove(&mut self.tree, probe, &*self.compare);
        if let Some(ref mut node) = self.tree {
            node.color = Color::Black;
        }
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Returns a reference to the stored record comparing equal to `probe`, or `None` if no
    /// record matches.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new(u32::cmp);
    /// set.insert(1).unwrap();
    /// assert_eq!(set.get(&0), None);
    /// assert_eq!(set.get(&1), Some(&1));
    /// ```
    pub fn get(&self, probe: &T) -> Option<&T> {
        tree::get(&self.tree, probe, &*self.compare)
    }

    /// Checks if a record comparing equal to `probe` exists in the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new(u32::cmp);
    /// set.insert(1).unwrap();
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, probe: &T) -> bool {
        self.get(probe).is_some()
    }

    /// Returns the number of records in the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new(u32::cmp);
    /// set.insert(1).unwrap();
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new(u32::cmp);
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the height of the tree: the number of nodes on the longest root-to-leaf path, or
    /// zero for an empty set. Heights are not cached, so this walks the whole tree.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new(u32::cmp);
    /// assert_eq!(set.height(), 0);
    /// set.insert(1).unwrap();
    /// set.insert(2).unwrap();
    /// assert_eq!(set.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Checks that every node satisfies the binary-search-tree order under the comparator and the
    /// red black coloring invariants: the root is black, no red link leans right, no red node has
    /// a red left child, and every downward path from a node carries the same number of black
    /// links. Read-only and O(n); intended for tests and harnesses that re-verify the structure
    /// after mutations.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new(u32::cmp);
    /// for key in 0..100 {
    ///     set.insert(key).unwrap();
    /// }
    /// assert!(set.is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        tree::is_valid(&self.tree, &*self.compare)
    }

    /// Clears the set, disposing of every record if a disposer was supplied.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new(u32::cmp);
    /// set.insert(1).unwrap();
    /// set.insert(2).unwrap();
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        let tree = self.tree.take();
        self.len = 0;
        if let Some(ref mut dispose) = self.dispose {
            tree::dispose_all(tree, &mut **dispose);
        }
    }
}

impl<T> Drop for RedBlackSet<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackSet;
    use crate::error::TreeError;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_len_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new(u32::cmp);
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new(u32::cmp);
        assert!(set.is_empty());
    }

    #[test]
    fn test_height_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new(u32::cmp);
        assert_eq!(set.height(), 0);
    }

    #[test]
    fn test_insert() {
        let mut set = RedBlackSet::new(u32::cmp);
        assert_eq!(set.insert(1), Ok(()));
        assert!(set.contains(&1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = RedBlackSet::new(u32::cmp);
        assert_eq!(set.insert(1), Ok(()));
        assert_eq!(set.insert(1), Err(TreeError::Duplicate(1)));
        assert_eq!(set.len(), 1);
        assert!(set.is_valid());
    }

    #[test]
    fn test_remove() {
        let mut set = RedBlackSet::new(u32::cmp);
        set.insert(1).unwrap();
        assert_eq!(set.remove(&1), Ok(()));
        assert!(!set.contains(&1));
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_remove_absent() {
        let mut set = RedBlackSet::new(u32::cmp);
        set.insert(1).unwrap();
        assert_eq!(set.remove(&2), Err(TreeError::NotFound));
        assert_eq!(set.len(), 1);
        assert!(set.is_valid());
    }

    #[test]
    fn test_take() {
        let mut set = RedBlackSet::new(u32::cmp);
        set.insert(1).unwrap();
        assert_eq!(set.take(&1), Some(1));
        assert_eq!(set.take(&1), None);
        assert!(set.is_empty());
    }

    #[test]
    fn test_get() {
        let mut set = RedBlackSet::new(u32::cmp);
        set.insert(1).unwrap();
        assert_eq!(set.get(&0), None);
        assert_eq!(set.get(&1), Some(&1));
    }

    #[test]
    fn test_clear() {
        let mut set = RedBlackSet::new(u32::cmp);
        set.insert(1).unwrap();
        set.insert(2).unwrap();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.get(&1), None);
    }

    #[test]
    fn test_insert_remove_sequence_stays_balanced() {
        let keys = [
            10, 85, 15, 70, 20, 60, 30, 50, 65, 80, 90, 91, 92, 93, 9, 8, 7, 4,
        ];

        let mut set = RedBlackSet::new(i32::cmp);
        for &key in &keys {
            set.insert(key).unwrap();
            assert!(set.is_valid());
        }

        assert_eq!(set.len(), 18);
        assert!(set.height() <= 5);

        for &key in &keys {
            set.remove(&key).unwrap();
            assert!(set.is_valid());
        }
        assert!(set.is_empty());
    }

    #[test]
    fn test_two_child_removal() {
        let mut set = RedBlackSet::new(u32::cmp);
        for &key in &[4, 2, 6, 1, 3, 5, 7] {
            set.insert(key).unwrap();
        }

        set.remove(&4).unwrap();
        assert!(set.is_valid());
        assert_eq!(set.len(), 6);
        for &key in &[1, 2, 3, 5, 6, 7] {
            assert!(set.contains(&key));
        }
    }

    #[test]
    fn test_remove_ascending_and_descending() {
        let mut set = RedBlackSet::new(u32::cmp);
        for key in 0..64 {
            set.insert(key).unwrap();
        }
        for key in 0..32 {
            set.remove(&key).unwrap();
            assert!(set.is_valid());
        }
        for key in (32..64).rev() {
            set.remove(&key).unwrap();
            assert!(set.is_valid());
        }
        assert!(set.is_empty());
    }

    #[test]
    fn test_reverse_comparator() {
        let mut set = RedBlackSet::new(|a: &u32, b: &u32| b.cmp(a));
        for key in 0..100 {
            set.insert(key).unwrap();
            assert!(set.is_valid());
        }
        assert_eq!(set.len(), 100);
        assert_eq!(set.get(&42), Some(&42));
    }

    #[test]
    fn test_disposer_runs_on_remove_and_drop() {
        let disposed = Rc::new(Cell::new(0));
        let counter = Rc::clone(&disposed);
        let mut set =
            RedBlackSet::with_disposer(u32::cmp, move |_| counter.set(counter.get() + 1));

        set.insert(1).unwrap();
        set.insert(2).unwrap();
        set.insert(3).unwrap();

        set.remove(&2).unwrap();
        assert_eq!(disposed.get(), 1);

        drop(set);
        assert_eq!(disposed.get(), 3);
    }

    #[test]
    fn test_disposer_skipped_on_take_and_rejection() {
        let disposed = Rc::new(Cell::new(0));
        let counter = Rc::clone(&disposed);
        let mut set =
            RedBlackSet::with_disposer(u32::cmp, move |_| counter.set(counter.get() + 1));

        set.insert(1).unwrap();
        assert_eq!(set.insert(1), Err(TreeError::Duplicate(1)));
        assert_eq!(set.take(&1), Some(1));
        drop(set);

        assert_eq!(disposed.get(), 0);
    }
}
