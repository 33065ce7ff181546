//! Set algebra over (element, count) pairs.
//!
//! Every operation looks at the multiplicities of both operands, the table below
//! shows what happens to an element with count `a` in `self` and `b` in `other`:
//!
//! | operation | in both | only in `self` | only in `other` |
//! |---|---|---|---|
//! | union | `a + b` | `a` | `b` |
//! | intersection | `a + b` | removed | dropped |
//! | symmetric difference | removed | `a` | `b` |
//! | subtraction | removed if `b >= a`, else `a - b` | `a` | dropped |
//!
//! Sums saturate at `usize::MAX`, so a count never wraps around to 0.
//!
//! Comparisons only look at which elements are present, never at their counts.

use crate::CountedSet;
use hashbrown::hash_map::RawEntryMut;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign,
};

impl<T, S> CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Adds the counts of `other` to this set.
    ///
    /// # Examples
    ///
    /// ```
    /// use counted_set::CountedSet;
    ///
    /// let mut a = CountedSet::from([0, 1, 2]);
    /// a.form_union(&CountedSet::from([2, 3, 4]));
    ///
    /// assert_eq!(a.len(), 5);
    /// assert_eq!(a.count(&2), 2);
    /// ```
    pub fn form_union(&mut self, other: &Self)
    where
        T: Clone,
    {
        for (value, &count) in &other.map {
            match self.map.raw_entry_mut().from_key(value) {
                RawEntryMut::Occupied(mut entry) => {
                    let ours = entry.get_mut();
                    *ours = ours.saturating_add(count);
                }
                RawEntryMut::Vacant(entry) => {
                    entry.insert(value.clone(), count);
                }
            }
        }
    }

    /// Keeps only the elements that are also in `other`, adding the counts of `other` to them.
    ///
    /// Counts of common elements are summed, not reduced to the smaller one.
    ///
    /// # Examples
    ///
    /// ```
    /// use counted_set::CountedSet;
    ///
    /// let mut a = CountedSet::from([1, 1, 2]);
    /// a.form_intersection(&CountedSet::from([1, 3]));
    ///
    /// assert_eq!(a.len(), 1);
    /// assert_eq!(a.count(&1), 3);
    /// ```
    pub fn form_intersection(&mut self, other: &Self) {
        self.map.retain(|value, count| match other.map.get(value) {
            Some(theirs) => {
                *count = count.saturating_add(*theirs);
                true
            }
            None => false,
        });
    }

    /// Removes the elements present in both sets and adds the elements only present in `other`.
    pub fn form_symmetric_difference(&mut self, other: &Self)
    where
        T: Clone,
    {
        for (value, &count) in &other.map {
            match self.map.raw_entry_mut().from_key(value) {
                RawEntryMut::Occupied(entry) => {
                    entry.remove();
                }
                RawEntryMut::Vacant(entry) => {
                    entry.insert(value.clone(), count);
                }
            }
        }
    }

    /// Subtracts the counts of `other` from this set.
    ///
    /// Elements whose count in `other` is at least their count here are removed.
    pub fn subtract(&mut self, other: &Self) {
        for (value, &theirs) in &other.map {
            if let RawEntryMut::Occupied(mut entry) = self.map.raw_entry_mut().from_key(value) {
                if theirs >= *entry.get() {
                    entry.remove();
                } else {
                    *entry.get_mut() -= theirs;
                }
            }
        }
    }

    /// Returns `true` if any element of `other` is in this set.
    pub fn intersects(&self, other: &Self) -> bool {
        other.elements().any(|value| self.contains(value))
    }

    /// Returns `true` if every element of this set is in `other`, whatever the counts.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.elements().all(|value| other.contains(value))
    }

    /// Returns `true` if every element of `other` is in this set, whatever the counts.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if this set is a subset of `other` with fewer distinct elements.
    pub fn is_strict_subset(&self, other: &Self) -> bool {
        self.is_subset(other) && self.len() < other.len()
    }

    /// Returns `true` if this set is a superset of `other` with more distinct elements.
    pub fn is_strict_superset(&self, other: &Self) -> bool {
        self.is_superset(other) && self.len() > other.len()
    }

    /// Returns `true` if the intersection with `other` is empty.
    ///
    /// Summed counts never reach 0, so this holds exactly when no element is in both sets.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.intersects(other)
    }
}

impl<T, S> CountedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Returns a new set with the counts of both sets added together.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.form_union(other);
        result
    }

    /// Returns a new set with the elements present in both sets, their counts summed.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.form_intersection(other);
        result
    }

    /// Returns a new set with the elements present in exactly one of the sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.form_symmetric_difference(other);
        result
    }

    /// Returns a new set with the counts of `other` subtracted from this set.
    ///
    /// # Examples
    ///
    /// ```
    /// use counted_set::CountedSet;
    ///
    /// let a = CountedSet::from([1, 2, 3, 1, 2]);
    /// let b = CountedSet::from([1, 2]);
    /// let c = a.subtracting(&b);
    ///
    /// assert_eq!(c.len(), 3);
    /// assert_eq!(c.count(&1), 1);
    /// ```
    #[must_use]
    pub fn subtracting(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.subtract(other);
        result
    }
}

impl<T> CountedSet<T, RandomState>
where
    T: Eq + Hash,
{
    /// Returns `true` if a set holding only `a` is a superset of a set holding only `b`,
    /// which is the case exactly when `a == b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use counted_set::CountedSet;
    ///
    /// assert!(CountedSet::element_subsumes(&42, &42));
    /// assert!(!CountedSet::element_subsumes(&42, &17));
    /// ```
    pub fn element_subsumes(a: &T, b: &T) -> bool {
        CountedSet::from_element(a).is_superset(&CountedSet::from_element(b))
    }

    /// Returns `true` if neither element subsumes the other, which is the case exactly when `a != b`.
    pub fn element_is_disjoint(a: &T, b: &T) -> bool {
        !Self::element_subsumes(a, b) && !Self::element_subsumes(b, a)
    }
}

impl<T, S> BitOr<&CountedSet<T, S>> for &CountedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = CountedSet<T, S>;

    /// Returns the union of `self` and `rhs` as a new `CountedSet<T, S>`.
    fn bitor(self, rhs: &CountedSet<T, S>) -> CountedSet<T, S> {
        self.union(rhs)
    }
}

impl<T, S> BitAnd<&CountedSet<T, S>> for &CountedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = CountedSet<T, S>;

    /// Returns the intersection of `self` and `rhs` as a new `CountedSet<T, S>`.
    ///
    /// Unlike `HashSet`, counts of common elements are summed.
    fn bitand(self, rhs: &CountedSet<T, S>) -> CountedSet<T, S> {
        self.intersection(rhs)
    }
}

impl<T, S> BitXor<&CountedSet<T, S>> for &CountedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = CountedSet<T, S>;

    /// Returns the symmetric difference of `self` and `rhs` as a new `CountedSet<T, S>`.
    fn bitxor(self, rhs: &CountedSet<T, S>) -> CountedSet<T, S> {
        self.symmetric_difference(rhs)
    }
}

impl<T, S> Sub<&CountedSet<T, S>> for &CountedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = CountedSet<T, S>;

    /// Returns `self` with the counts of `rhs` subtracted, as a new `CountedSet<T, S>`.
    fn sub(self, rhs: &CountedSet<T, S>) -> CountedSet<T, S> {
        self.subtracting(rhs)
    }
}

impl<T, S> BitOrAssign<&CountedSet<T, S>> for CountedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn bitor_assign(&mut self, rhs: &CountedSet<T, S>) {
        self.form_union(rhs);
    }
}

impl<T, S> BitAndAssign<&CountedSet<T, S>> for CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn bitand_assign(&mut self, rhs: &CountedSet<T, S>) {
        self.form_intersection(rhs);
    }
}

impl<T, S> BitXorAssign<&CountedSet<T, S>> for CountedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn bitxor_assign(&mut self, rhs: &CountedSet<T, S>) {
        self.form_symmetric_difference(rhs);
    }
}

impl<T, S> SubAssign<&CountedSet<T, S>> for CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn sub_assign(&mut self, rhs: &CountedSet<T, S>) {
        self.subtract(rhs);
    }
}
