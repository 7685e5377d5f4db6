//! Set algebra over vertex-id sets
//!
//! Pure functions used by ordering, chordality and bag construction.

use std::collections::BTreeSet;

/// Relation returned by [`is_subset`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsetRelation {
    /// Some element of the left set is missing from the right set
    NotSubset,
    /// Left set is a strict subset of the right set
    Proper,
    /// Both sets are equal
    Equal,
}

/// Intersection `a ∩ b`
///
/// Iterates the smaller set and probes the larger one.
///
/// # Example
///
/// ```
/// use chordal_td::algorithms::intersect;
/// use std::collections::BTreeSet;
///
/// let a: BTreeSet<u32> = [1, 2, 3].into_iter().collect();
/// let b: BTreeSet<u32> = [2, 3, 4].into_iter().collect();
/// assert_eq!(intersect(&a, &b), [2, 3].into_iter().collect());
/// ```
#[must_use]
pub fn intersect(a: &BTreeSet<u32>, b: &BTreeSet<u32>) -> BTreeSet<u32> {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    small
        .iter()
        .filter(|v| large.contains(v))
        .copied()
        .collect()
}

/// Difference `a \ b`
#[must_use]
pub fn set_minus(a: &BTreeSet<u32>, b: &BTreeSet<u32>) -> BTreeSet<u32> {
    a.iter().filter(|v| !b.contains(v)).copied().collect()
}

/// Classify `a` against `b`: not a subset, proper subset, or equal
///
/// Short-circuits when `a` is larger than `b`.
#[must_use]
pub fn is_subset(a: &BTreeSet<u32>, b: &BTreeSet<u32>) -> SubsetRelation {
    if a.len() > b.len() {
        return SubsetRelation::NotSubset;
    }

    if a.iter().any(|v| !b.contains(v)) {
        return SubsetRelation::NotSubset;
    }

    if a.len() == b.len() {
        SubsetRelation::Equal
    } else {
        SubsetRelation::Proper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[u32]) -> BTreeSet<u32> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_intersect_disjoint() {
        assert!(intersect(&set(&[1, 2]), &set(&[3, 4])).is_empty());
    }

    #[test]
    fn test_intersect_uneven_sizes() {
        let small = set(&[5]);
        let large = set(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(intersect(&small, &large), set(&[5]));
        assert_eq!(intersect(&large, &small), set(&[5]));
    }

    #[test]
    fn test_set_minus() {
        assert_eq!(set_minus(&set(&[1, 2, 3]), &set(&[2])), set(&[1, 3]));
        assert_eq!(set_minus(&set(&[1]), &set(&[])), set(&[1]));
        assert!(set_minus(&set(&[]), &set(&[1])).is_empty());
    }

    #[test]
    fn test_is_subset_cases() {
        assert_eq!(is_subset(&set(&[1, 2]), &set(&[1, 2])), SubsetRelation::Equal);
        assert_eq!(is_subset(&set(&[1]), &set(&[1, 2])), SubsetRelation::Proper);
        assert_eq!(is_subset(&set(&[1, 3]), &set(&[1, 2])), SubsetRelation::NotSubset);
        assert_eq!(is_subset(&set(&[1, 2, 3]), &set(&[1, 2])), SubsetRelation::NotSubset);
        assert_eq!(is_subset(&set(&[]), &set(&[])), SubsetRelation::Equal);
        assert_eq!(is_subset(&set(&[]), &set(&[7])), SubsetRelation::Proper);
    }
}
