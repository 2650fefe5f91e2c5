use crate::avl_tree::tree;
use crate::callback::{Compare, Dispose};
use crate::error::TreeError;
use std::cmp::Ordering;

/// An ordered set of unique records implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of the two child subtrees of any node differ by at most one. Records are ordered and
/// deduplicated solely through the comparator supplied at construction; a record comparing equal
/// to one already stored is rejected and handed back.
///
/// # Examples
/// ```
/// use balanced_collections::avl_tree::AvlSet;
/// use balanced_collections::TreeError;
///
/// let mut set = AvlSet::new(u32::cmp);
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
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
    compare: Compare<T>,
    dispose: Option<Dispose<T>>,
}

impl<T> AvlSet<T> {
    /// Constructs a new, empty `AvlSet<T>` ordered by `compare`.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new(u32::cmp);
    /// ```
    pub fn new<F>(compare: F) -> Self
    where
        F: 'static + Fn(&T, &T) -> Ordering,
    {
        AvlSet {
            tree: None,
            len: 0,
            compare: Box::new(compare),
            dispose: None,
        }
    }

    /// Constructs a new, empty `AvlSet<T>` ordered by `compare`, with a disposer that runs on
    /// every record the set permanently destroys: on [`remove`](AvlSet::remove), on
    /// [`clear`](AvlSet::clear), and on drop.
    ///
    /// Records handed back to the caller (a rejected duplicate, or a record extracted with
    /// [`take`](AvlSet::take)) are not disposed; their ownership leaves the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let disposed = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&disposed);
    /// let mut set = AvlSet::with_disposer(u32::cmp, move |_| counter.set(counter.get() + 1));
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
        AvlSet {
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
    /// use balanced_collections::avl_tree::AvlSet;
    /// use balanced_collections::TreeError;
    ///
    /// let mut set = AvlSet::new(u32::cmp);
    /// assert_eq!(set.insert(1), Ok(()));
    /// assert!(set.contains(&1));
    /// assert_eq!(set.insert(1), Err(TreeError::Duplicate(1)));
    /// ```
    pub fn insert(&mut self, record: T) -> Result<(), TreeError<T>> {
        match tree::insert(&mut self.tree, record, &*self.compare) {
            Ok(()) => {
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
    /// use balanced_collections::avl_tree::AvlSet;
    /// use balanced_collections::TreeError;
    ///
    /// let mut set = AvlSet::new(u32::cmp);
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
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new(u32::cmp);
    /// set.insert(1).unwrap();
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, probe: &T) -> Option<T> {
        let ret = tree::remove(&mut self.tree, probe, &*self.compare);
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new(u32::cmp);
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new(u32::cmp);
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new(u32::cmp);
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new(u32::cmp);
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the height of the tree: the number of nodes on the longest root-to-leaf path, or
    /// zero for an empty set. The height is cached per node, so this is a constant-time read.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new(u32::cmp);
    /// assert_eq!(set.height(), 0);
    /// set.insert(1).unwrap();
    /// set.insert(2).unwrap();
    /// assert_eq!(set.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Checks that every node satisfies the binary-search-tree order under the comparator and the
    /// avl balance invariant, and that every cached height is consistent. Read-only and O(n);
    /// intended for tests and harnesses that re-verify the structure after mutations.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new(u32::cmp);
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
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new(u32::cmp);
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

impl<T> Drop for AvlSet<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
