use std::cmp::Ordering;

/// Three-way comparison deciding the relative order of two records.
///
/// Must be a total order; the trees do not detect violations.
pub type Compare<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// Cleanup invoked on a record when the owning tree permanently destroys it.
pub type Dispose<T> = Box<dyn FnMut(T)>;
