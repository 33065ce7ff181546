use hashbrown::hash_map::{self, HashMap, RawEntryMut};
use hashbrown::TryReserveError;
use std::borrow::Borrow;
use std::collections::hash_map::{DefaultHasher, RandomState};
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, Hash, Hasher};
use std::iter::FusedIterator;

/// Multiset implementation where every distinct element is stored once, next to the number of times it was counted.
///
/// Stored counts are always at least 1. Taking a count down to 0 removes the element.
///
/// # Examples
///
/// ```
/// use counted_set::CountedSet;
///
/// let mut set = CountedSet::new();
/// set.insert(1);
/// set.update(1);
/// set.insert(2);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.count(&1), 2);
/// assert_eq!(set.total(), 3);
/// ```
#[derive(Clone)]
pub struct CountedSet<T, S = RandomState> {
    pub(crate) map: HashMap<T, usize, S>,
}

impl<T> CountedSet<T, RandomState> {
    /// Creates an empty `CountedSet` with a capacity of 0,
    /// so it will not allocate until it is first inserted into.
    ///
    /// # Examples
    ///
    /// ```
    /// use counted_set::CountedSet;
    ///
    /// let set: CountedSet<i32> = CountedSet::new();
    ///
    /// assert_eq!(set.capacity(), 0);
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::default())
    }

    /// Creates an empty `CountedSet` with at least the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }
}

impl<T> CountedSet<T, RandomState>
where
    T: Eq + Hash,
{
    /// Creates a `CountedSet` holding `value` once.
    ///
    /// # Examples
    ///
    /// ```
    /// use counted_set::CountedSet;
    ///
    /// let set = CountedSet::from_element("a");
    ///
    /// assert_eq!(set.count(&"a"), 1);
    /// ```
    #[must_use]
    pub fn from_element(value: T) -> Self {
        let mut set = Self::with_capacity(1);
        set.insert(value);
        set
    }
}

impl<T, S> CountedSet<T, S> {
    /// Creates an empty `CountedSet` with default capacity which will use the given hash builder to hash elements.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            map: HashMap::with_hasher(hash_builder),
        }
    }

    /// Creates an empty `CountedSet` with at least the specified capacity, using the given hash builder to hash elements.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns the number of distinct elements the set can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Returns a reference to the set's [`BuildHasher`].
    pub fn hasher(&self) -> &S {
        self.map.hasher()
    }

    /// Returns the number of distinct elements in the set.
    ///
    /// Multiplicities do not matter here, see [`total`](Self::total) for the sum of all counts.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the sum of the counts of all elements, saturating at `usize::MAX`.
    pub fn total(&self) -> usize {
        self.map
            .values()
            .fold(0usize, |total, &count| total.saturating_add(count))
    }

    /// Clears the set, returning all elements with their counts as an iterator.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain {
            iter: self.map.drain(),
        }
    }

    /// Retains only the elements specified by the predicate, which is given each element and its count.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.map.retain(|value, count| f(value, *count));
    }

    /// Clears the set, removing all elements.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// An iterator visiting all distinct elements with their counts in arbitrary order.
    /// The iterator element type is `(&'a T, usize)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use counted_set::CountedSet;
    ///
    /// let set = CountedSet::from([1, 1, 2]);
    ///
    /// let mut entries: Vec<_> = set.iter().collect();
    /// entries.sort_unstable(); // Sort since the entries are visited in arbitrary order.
    ///
    /// assert_eq!(entries, [(&1, 2), (&2, 1)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.map.iter(),
        }
    }

    /// An iterator visiting every distinct element once, in arbitrary order.
    pub fn elements(&self) -> Elements<'_, T> {
        Elements {
            iter: self.map.keys(),
        }
    }
}

impl<T, S> CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Reserves capacity for at least `additional` more distinct elements.
    pub fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
    }

    /// Tries to reserve capacity for at least `additional` more distinct elements.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.map.try_reserve(additional)
    }

    /// Shrinks the capacity of the set as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.map.shrink_to_fit();
    }

    /// Shrinks the capacity of the set with a lower limit.
    pub fn shrink_to(&mut self, min_capacity: usize) {
        self.map.shrink_to(min_capacity);
    }

    /// Returns `true` if the set contains the value at least once.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(value)
    }

    /// Returns how many times the value is in the set, 0 if it is absent.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(value).copied().unwrap_or(0)
    }

    /// Adds a value to the set if it is not present yet.
    ///
    /// Returns whether the value was newly inserted, together with the element stored in the set.
    /// An element that is already present keeps its count, use [`update`](Self::update) to count it again.
    ///
    /// # Examples
    ///
    /// ```
    /// use counted_set::CountedSet;
    ///
    /// let mut set = CountedSet::new();
    ///
    /// assert_eq!(set.insert(7), (true, &7));
    /// assert_eq!(set.insert(7), (false, &7));
    /// assert_eq!(set.count(&7), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> (bool, &T) {
        match self.map.raw_entry_mut().from_key(&value) {
            RawEntryMut::Occupied(entry) => {
                let (stored, _) = entry.into_key_value();
                (false, &*stored)
            }
            RawEntryMut::Vacant(entry) => {
                let (stored, _) = entry.insert(value, 1);
                (true, &*stored)
            }
        }
    }

    /// Counts the value once more. Same as [`update_by`](Self::update_by) with an increment of 1.
    pub fn update(&mut self, value: T) -> Option<T> {
        self.update_by(value, 1)
    }

    /// Adds `increment` to the count of the value.
    ///
    /// If the value was already present it is handed back as `Some(value)`.
    /// Otherwise it is stored with a count of `increment` and `None` is returned.
    /// An increment of 0 never stores a new element. Counts saturate at `usize::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use counted_set::CountedSet;
    ///
    /// let mut set = CountedSet::new();
    ///
    /// assert_eq!(set.update_by(3, 2), None);
    /// assert_eq!(set.update_by(3, 5), Some(3));
    /// assert_eq!(set.count(&3), 7);
    /// ```
    pub fn update_by(&mut self, value: T, increment: usize) -> Option<T> {
        match self.map.get_mut(&value) {
            Some(count) => {
                *count = count.saturating_add(increment);
                Some(value)
            }
            None => {
                if increment > 0 {
                    self.map.insert(value, increment);
                }
                None
            }
        }
    }

    /// Removes one occurrence of the value. Returns whether the value was present in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use counted_set::CountedSet;
    ///
    /// let mut set = CountedSet::from([1, 1]);
    ///
    /// assert!(set.remove(&1));
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove_by(value, 1)
    }

    /// Removes `decrement` occurrences of the value. Returns whether the value was present in the set.
    ///
    /// The element is removed entirely once its count would drop to 0 or below.
    pub fn remove_by<Q>(&mut self, value: &Q, decrement: usize) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get_mut(value) {
            Some(count) if *count > decrement => {
                *count -= decrement;
                return true;
            }
            Some(_) => {}
            None => return false,
        }

        self.map.remove(value);
        true
    }

    /// Removes the value with all its occurrences, returning the stored element and its count.
    pub fn take<Q>(&mut self, value: &Q) -> Option<(T, usize)>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.remove_entry(value)
    }
}

impl<T, S> PartialEq for CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(value, count)| other.count(value) == count)
    }
}

impl<T, S> Eq for CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
}

impl<T, S> Hash for CountedSet<T, S>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Elements are hashed with fixed keys and summed, so that neither the
        // iteration order nor the set's own hash builder affect the result.
        let mut sum = 0u64;

        for (value, &count) in &self.map {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            sum = sum.wrapping_add(hasher.finish().wrapping_mul(count as u64));
        }

        self.len().hash(state);
        sum.hash(state);
    }
}

impl<T, S> FromIterator<T> for CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::with_hasher(Default::default());
        set.extend(iter);
        set
    }
}

impl<T, S> Extend<T> for CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.update(value);
        }
    }
}

impl<'a, T, S> Extend<&'a T> for CountedSet<T, S>
where
    T: 'a + Eq + Hash + Copy,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, T, S> IntoIterator for &'a CountedSet<T, S> {
    type Item = (&'a T, usize);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, S> IntoIterator for CountedSet<T, S> {
    type Item = (T, usize);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            iter: self.map.into_iter(),
        }
    }
}

impl<T, S> Default for CountedSet<T, S>
where
    S: Default,
{
    fn default() -> Self {
        CountedSet {
            map: HashMap::default(),
        }
    }
}

impl<T, S> Debug for CountedSet<T, S>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> From<[T; N]> for CountedSet<T, RandomState>
where
    T: Eq + Hash,
{
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

/// A draining iterator over the elements of a `CountedSet` and their counts.
pub struct Drain<'a, T> {
    iter: hash_map::Drain<'a, T, usize>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = (T, usize);

    fn next(&mut self) -> Option<(T, usize)> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T: Debug> Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.iter, f)
    }
}

/// An iterator over the elements of a `CountedSet` and their counts.
pub struct Iter<'a, T> {
    iter: hash_map::Iter<'a, T, usize>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<(&'a T, usize)> {
        self.iter.next().map(|(value, count)| (value, *count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the distinct elements of a `CountedSet`.
pub struct Elements<'a, T> {
    iter: hash_map::Keys<'a, T, usize>,
}

impl<T> Clone for Elements<'_, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T> Iterator for Elements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for Elements<'_, T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for Elements<'_, T> {}

impl<T: Debug> Debug for Elements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An owning iterator over the elements of a `CountedSet` and their counts.
pub struct IntoIter<T> {
    iter: hash_map::IntoIter<T, usize>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = (T, usize);

    fn next(&mut self) -> Option<(T, usize)> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.iter, f)
    }
}
