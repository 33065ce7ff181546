use crate::CountedSet;
use std::hash::{BuildHasher, Hash};

impl<T, S> CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Clone,
{
    /// Builds a new set by applying `f` to every element and its count.
    ///
    /// Results are merged with [`update_by`](Self::update_by), so elements mapped onto the same
    /// target have their counts added together.
    ///
    /// # Examples
    ///
    /// ```
    /// use counted_set::CountedSet;
    ///
    /// let set = CountedSet::from([1, 2, 3, 3]);
    /// let parity = set.map_to_counted_set(|value, count| (value % 2, count));
    ///
    /// assert_eq!(parity, CountedSet::from([0, 1, 1, 1]));
    /// ```
    pub fn map_to_counted_set<U, F>(&self, mut f: F) -> CountedSet<U, S>
    where
        U: Eq + Hash,
        F: FnMut(&T, usize) -> (U, usize),
    {
        let mut result = CountedSet::with_capacity_and_hasher(self.len(), self.hasher().clone());

        for (value, count) in self {
            let (value, count) = f(value, count);
            result.update_by(value, count);
        }

        result
    }

    /// Like [`map_to_counted_set`](Self::map_to_counted_set), but elements for which `f`
    /// returns `None` are left out.
    pub fn flat_map_to_counted_set<U, F>(&self, mut f: F) -> CountedSet<U, S>
    where
        U: Eq + Hash,
        F: FnMut(&T, usize) -> Option<(U, usize)>,
    {
        let mut result = CountedSet::with_hasher(self.hasher().clone());

        for (value, count) in self {
            if let Some((value, count)) = f(value, count) {
                result.update_by(value, count);
            }
        }

        result
    }

    /// Like [`map_to_counted_set`](Self::map_to_counted_set), but stops at the first error `f` returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use counted_set::CountedSet;
    ///
    /// let set = CountedSet::from(["1", "2", "2"]);
    /// let parsed = set.try_map_to_counted_set(|value, count| value.parse::<u8>().map(|n| (n, count)));
    /// assert_eq!(parsed, Ok(CountedSet::from([1, 2, 2])));
    ///
    /// let set = CountedSet::from(["1", "x"]);
    /// assert!(set.try_map_to_counted_set(|value, count| value.parse::<u8>().map(|n| (n, count))).is_err());
    /// ```
    pub fn try_map_to_counted_set<U, E, F>(&self, mut f: F) -> Result<CountedSet<U, S>, E>
    where
        U: Eq + Hash,
        F: FnMut(&T, usize) -> Result<(U, usize), E>,
    {
        let mut result = CountedSet::with_capacity_and_hasher(self.len(), self.hasher().clone());

        for (value, count) in self {
            let (value, count) = f(value, count)?;
            result.update_by(value, count);
        }

        Ok(result)
    }

    /// Like [`flat_map_to_counted_set`](Self::flat_map_to_counted_set), but stops at the first error `f` returns.
    pub fn try_flat_map_to_counted_set<U, E, F>(&self, mut f: F) -> Result<CountedSet<U, S>, E>
    where
        U: Eq + Hash,
        F: FnMut(&T, usize) -> Result<Option<(U, usize)>, E>,
    {
        let mut result = CountedSet::with_hasher(self.hasher().clone());

        for (value, count) in self {
            if let Some((value, count)) = f(value, count)? {
                result.update_by(value, count);
            }
        }

        Ok(result)
    }

    /// Builds a new set with the count of every element replaced by what `f` returns for it.
    /// Elements whose new count is 0 are left out.
    ///
    /// # Examples
    ///
    /// ```
    /// use counted_set::CountedSet;
    ///
    /// let set = CountedSet::from([1, 1, 2, 3]);
    /// let filtered = set.filter_to_counted_set(|value, count| if *value == 3 { 0 } else { count * 2 });
    ///
    /// assert_eq!(filtered, CountedSet::from([1, 1, 1, 1, 2, 2]));
    /// ```
    pub fn filter_to_counted_set<F>(&self, mut f: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, usize) -> usize,
    {
        let mut result = Self::with_hasher(self.hasher().clone());

        for (value, count) in self {
            let count = f(value, count);
            if count > 0 {
                result.update_by(value.clone(), count);
            }
        }

        result
    }

    /// Like [`filter_to_counted_set`](Self::filter_to_counted_set), but stops at the first error `f` returns.
    pub fn try_filter_to_counted_set<E, F>(&self, mut f: F) -> Result<Self, E>
    where
        T: Clone,
        F: FnMut(&T, usize) -> Result<usize, E>,
    {
        let mut result = Self::with_hasher(self.hasher().clone());

        for (value, count) in self {
            let count = f(value, count)?;
            if count > 0 {
                result.update_by(value.clone(), count);
            }
        }

        Ok(result)
    }
}
