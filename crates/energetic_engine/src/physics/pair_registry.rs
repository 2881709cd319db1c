//! Per-tick set of unordered collision pairs
//!
//! A pair found from `a`'s query and again from `b`'s query is one pair.
//! [`CollisionPair`] equality and hashing are symmetric, so `(a, b)` and
//! `(b, a)` collapse to a single registry entry. The registry walks its
//! pairs in first-discovery order.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use super::body::BodyId;

/// Two bodies found to be overlapping in the current tick
///
/// `first` is the body whose query discovered the pair.
#[derive(Debug, Clone, Copy)]
pub struct CollisionPair {
    /// Querying body
    pub first: BodyId,
    /// Candidate body
    pub second: BodyId,
}

impl CollisionPair {
    /// Create a pair in discovery order
    pub const fn new(first: BodyId, second: BodyId) -> Self {
        Self { first, second }
    }

    /// Same pair with members swapped
    pub const fn reversed(&self) -> Self {
        Self { first: self.second, second: self.first }
    }
}

impl PartialEq for CollisionPair {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl Eq for CollisionPair {}

impl Hash for CollisionPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Sum is commutative: hash(a, b) == hash(b, a)
        self.first.index().wrapping_add(self.second.index()).hash(state);
    }
}

/// Deduplicating registry of collision pairs for one tick
#[derive(Debug, Default, Clone)]
pub struct PairRegistry {
    seen: HashSet<CollisionPair>,
    ordered: Vec<CollisionPair>,
}

impl PairRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair, returning `false` if it (in either order) is already present
    pub fn insert(&mut self, pair: CollisionPair) -> bool {
        if self.seen.insert(pair) {
            self.ordered.push(pair);
            true
        } else {
            false
        }
    }

    /// Whether the pair (in either order) is present
    pub fn contains(&self, pair: &CollisionPair) -> bool {
        self.seen.contains(pair)
    }

    /// Number of unique pairs
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether no pairs were registered
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Remove every pair
    pub fn clear(&mut self) {
        self.seen.clear();
        self.ordered.clear();
    }

    /// Pairs in the order they were first discovered
    pub fn iter(&self) -> std::slice::Iter<'_, CollisionPair> {
        self.ordered.iter()
    }
}

impl<'a> IntoIterator for &'a PairRegistry {
    type Item = &'a CollisionPair;
    type IntoIter = std::slice::Iter<'a, CollisionPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(pair: &CollisionPair) -> u64 {
        let mut hasher = DefaultHasher::new();
        pair.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_pair_equality_is_symmetric() {
        let ab = CollisionPair::new(BodyId(1), BodyId(2));
        let ba = CollisionPair::new(BodyId(2), BodyId(1));
        assert_eq!(ab, ba);
        assert_eq!(hash_of(&ab), hash_of(&ba));
        assert_eq!(ab.reversed(), ab);
        assert_ne!(ab, CollisionPair::new(BodyId(1), BodyId(3)));
    }

    #[test]
    fn test_reversed_insert_is_deduplicated() {
        let mut registry = PairRegistry::new();
        assert!(registry.insert(CollisionPair::new(BodyId(4), BodyId(7))));
        assert!(!registry.insert(CollisionPair::new(BodyId(7), BodyId(4))));
        assert!(!registry.insert(CollisionPair::new(BodyId(4), BodyId(7))));
        assert_eq!(registry.len(), 1);

        // First discovery orientation is kept
        let pair = registry.iter().next().unwrap();
        assert_eq!((pair.first, pair.second), (BodyId(4), BodyId(7)));
    }

    #[test]
    fn test_equal_sums_are_distinct_pairs() {
        // (1, 4) and (2, 3) share a hash bucket but are different pairs
        let mut registry = PairRegistry::new();
        assert!(registry.insert(CollisionPair::new(BodyId(1), BodyId(4))));
        assert!(registry.insert(CollisionPair::new(BodyId(2), BodyId(3))));
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(&CollisionPair::new(BodyId(3), BodyId(2))));
    }

    #[test]
    fn test_iteration_follows_discovery_order() {
        let mut registry = PairRegistry::new();
        registry.insert(CollisionPair::new(BodyId(5), BodyId(0)));
        registry.insert(CollisionPair::new(BodyId(1), BodyId(2)));
        registry.insert(CollisionPair::new(BodyId(0), BodyId(5)));
        registry.insert(CollisionPair::new(BodyId(3), BodyId(9)));

        let order: Vec<_> = registry.iter().map(|p| (p.first.0, p.second.0)).collect();
        assert_eq!(order, vec![(5, 0), (1, 2), (3, 9)]);

        registry.clear();
        assert!(registry.is_empty());
    }
}
