//! Pairwise narrow-phase dispatch
//!
//! Each ordered pair of [`ShapeKind`]s maps to at most one test function.
//! Adding a shape kind means registering new pairwise functions here; the
//! existing ones stay untouched. A lookup that finds no entry for `(A, B)`
//! retries the mirrored `(B, A)` entry with swapped arguments, and a pair
//! with no entry in either order never collides.

use super::shape::{CollisionShape, ShapeKind};

/// Narrow-phase test between two concrete shapes
pub type IntersectFn = fn(&CollisionShape, &CollisionShape) -> bool;

/// Dispatch table of pairwise intersection tests
#[derive(Debug, Clone, Copy)]
pub struct IntersectionTable {
    entries: [[Option<IntersectFn>; ShapeKind::COUNT]; ShapeKind::COUNT],
}

impl IntersectionTable {
    /// Table with every built-in pairwise test registered
    pub const STANDARD: Self = Self {
        entries: [[Some(circle_circle as IntersectFn)]],
    };

    /// Table with no tests registered
    pub const fn empty() -> Self {
        Self {
            entries: [[None; ShapeKind::COUNT]; ShapeKind::COUNT],
        }
    }

    /// Table with every built-in pairwise test registered
    pub const fn standard() -> Self {
        Self::STANDARD
    }

    /// Register the test used when a shape of kind `a` is queried against kind `b`
    pub fn register(&mut self, a: ShapeKind, b: ShapeKind, test: IntersectFn) {
        self.entries[a.index()][b.index()] = Some(test);
    }

    /// Find the test for `(a, b)`
    ///
    /// The flag is `true` when only the mirrored `(b, a)` entry exists and the
    /// arguments must be swapped.
    pub fn lookup(&self, a: ShapeKind, b: ShapeKind) -> Option<(IntersectFn, bool)> {
        self.entries[a.index()][b.index()]
            .map(|test| (test, false))
            .or_else(|| self.entries[b.index()][a.index()].map(|test| (test, true)))
    }

    /// Run the registered test for the two shapes
    pub fn test(&self, a: &CollisionShape, b: &CollisionShape) -> bool {
        match self.lookup(a.kind(), b.kind()) {
            Some((test, false)) => test(a, b),
            Some((test, true)) => test(b, a),
            None => {
                log::trace!("No intersection test for {:?} vs {:?}", a.kind(), b.kind());
                false
            }
        }
    }
}

impl Default for IntersectionTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Circle against circle
pub fn circle_circle(a: &CollisionShape, b: &CollisionShape) -> bool {
    match (a, b) {
        (CollisionShape::Circle(a), CollisionShape::Circle(b)) => a.intersects(b),
        #[allow(unreachable_patterns)]
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;

    fn never(_: &CollisionShape, _: &CollisionShape) -> bool {
        false
    }

    #[test]
    fn test_standard_table_has_circle_circle() {
        let table = IntersectionTable::standard();
        let (_, swapped) = table.lookup(ShapeKind::Circle, ShapeKind::Circle).unwrap();
        assert!(!swapped);

        let a = CollisionShape::circle(Vec2::new(0.0, 0.0), 5);
        let b = CollisionShape::circle(Vec2::new(8.0, 0.0), 5);
        assert!(table.test(&a, &b));
    }

    #[test]
    fn test_missing_entry_reports_no_collision() {
        let table = IntersectionTable::empty();
        let a = CollisionShape::circle(Vec2::new(0.0, 0.0), 5);
        assert!(table.lookup(ShapeKind::Circle, ShapeKind::Circle).is_none());
        // Same position, would overlap under any real test
        assert!(!table.test(&a, &a));
    }

    #[test]
    fn test_registered_entry_replaces_builtin() {
        let mut table = IntersectionTable::standard();
        table.register(ShapeKind::Circle, ShapeKind::Circle, never);

        let a = CollisionShape::circle(Vec2::new(0.0, 0.0), 5);
        assert!(!table.test(&a, &a));
        assert!(IntersectionTable::default().test(&a, &a));
    }
}
