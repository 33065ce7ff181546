//! A counted set: a [multiset](https://en.wikipedia.org/wiki/Multiset) with the operations of an ordinary set.
//!
//! ---
//!
//! [`CountedSet`] stores every distinct element once, next to the number of times it was counted:
//!  - `a -> 2`
//!  - `b -> 1`
//!
//! Queries such as [`contains`](CountedSet::contains) or [`is_subset`](CountedSet::is_subset)
//! behave as they would on a set of the distinct elements, and [`len`](CountedSet::len)
//! is the number of distinct elements. The set algebra works on the counts:
//! [`union`](CountedSet::union) and [`intersection`](CountedSet::intersection) add them,
//! [`subtracting`](CountedSet::subtracting) takes them away.
//!
//! ---
//!
//! [`insert`](CountedSet::insert) only adds elements that are not present yet,
//! [`update`](CountedSet::update) counts an element once more whether it is present or not.
//! Building a set from an iterator counts every occurrence:
//!
//! ```
//! use counted_set::CountedSet;
//!
//! let mut set = CountedSet::from(["a", "b", "a"]);
//!
//! assert_eq!(set.count(&"a"), 2);
//! assert_eq!(set.insert("a"), (false, &"a"));
//! assert_eq!(set.update("a"), Some("a"));
//! assert_eq!(set.count(&"a"), 3);
//! ```

/// Counted set implementation where every distinct element is stored next to its count.
pub mod set;

mod algebra;
mod transform;

pub use hashbrown::TryReserveError;
pub use set::CountedSet;
