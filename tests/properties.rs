use counted_set::CountedSet;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn counted_set_strategy() -> impl Strategy<Value = CountedSet<u8>> {
    prop::collection::vec(0u8..16, 0..40).prop_map(|values| values.into_iter().collect())
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn counts_are_never_zero(values in prop::collection::vec(0u8..16, 0..40), removals in prop::collection::vec((0u8..16, 0usize..4), 0..40)) {
        let mut set: CountedSet<u8> = values.iter().copied().collect();
        for (value, decrement) in removals {
            set.remove_by(&value, decrement);
        }

        prop_assert!(set.iter().all(|(_, count)| count >= 1));
    }

    #[test]
    fn bulk_construction_counts_occurrences(values in prop::collection::vec(0u8..16, 0..40)) {
        let set: CountedSet<u8> = values.iter().copied().collect();

        prop_assert_eq!(set.total(), values.len());
        for value in 0u8..16 {
            prop_assert_eq!(set.count(&value), values.iter().filter(|v| **v == value).count());
        }
    }

    #[test]
    fn union_is_additive(a in counted_set_strategy(), b in counted_set_strategy()) {
        let union = a.union(&b);

        for value in 0u8..16 {
            prop_assert_eq!(union.count(&value), a.count(&value) + b.count(&value));
        }
    }

    #[test]
    fn intersection_sums_common_counts(a in counted_set_strategy(), b in counted_set_strategy()) {
        let intersection = a.intersection(&b);

        for value in 0u8..16 {
            if a.contains(&value) && b.contains(&value) {
                prop_assert_eq!(intersection.count(&value), a.count(&value) + b.count(&value));
            } else {
                prop_assert!(!intersection.contains(&value));
            }
        }
    }

    #[test]
    fn subtracting_self_is_empty(a in counted_set_strategy()) {
        prop_assert!(a.subtracting(&a).is_empty());
    }

    #[test]
    fn subtracting_clamps_at_zero(a in counted_set_strategy(), b in counted_set_strategy()) {
        let difference = a.subtracting(&b);

        for value in 0u8..16 {
            prop_assert_eq!(difference.count(&value), a.count(&value).saturating_sub(b.count(&value)));
        }
    }

    #[test]
    fn symmetric_difference_keeps_exclusive_counts(a in counted_set_strategy(), b in counted_set_strategy()) {
        let xored = a.symmetric_difference(&b);

        for value in 0u8..16 {
            let expected = match (a.count(&value), b.count(&value)) {
                (0, theirs) => theirs,
                (ours, 0) => ours,
                _ => 0,
            };
            prop_assert_eq!(xored.count(&value), expected);
        }
    }

    #[test]
    fn disjoint_iff_no_shared_element(a in counted_set_strategy(), b in counted_set_strategy()) {
        let shared = a.elements().any(|value| b.contains(value));

        prop_assert_eq!(a.is_disjoint(&b), !shared);
        prop_assert_eq!(a.intersects(&b), shared);
    }

    #[test]
    fn subset_ignores_counts(a in counted_set_strategy(), b in counted_set_strategy()) {
        let expected = a.elements().all(|value| b.contains(value));

        prop_assert_eq!(a.is_subset(&b), expected);
        prop_assert_eq!(b.is_superset(&a), expected);
        prop_assert!(a.is_subset(&a.union(&b)));
    }

    #[test]
    fn removing_every_occurrence_empties_the_element(a in counted_set_strategy(), value in 0u8..16) {
        let mut set = a;

        for _ in 0..set.count(&value) {
            prop_assert!(set.remove(&value));
        }

        prop_assert!(!set.contains(&value));
        prop_assert!(!set.remove(&value));
    }

    #[test]
    fn equal_sets_hash_equally(values in prop::collection::vec(0u8..16, 0..40)) {
        let forward: CountedSet<u8> = values.iter().copied().collect();
        let backward: CountedSet<u8> = values.iter().rev().copied().collect();

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(&backward, &forward);
        prop_assert_eq!(hash_of(&forward), hash_of(&backward));
    }

    #[test]
    fn clone_does_not_alias(a in counted_set_strategy(), value in 0u8..16) {
        let mut copy = a.clone();
        copy.update_by(value, 3);

        prop_assert_eq!(copy.count(&value), a.count(&value) + 3);
        prop_assert_ne!(&copy, &a);
    }
}
