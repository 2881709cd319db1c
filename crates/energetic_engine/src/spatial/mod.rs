//! Spatial partitioning data structures
//!
//! Provides the broad-phase index used for collision detection in 2D.

mod quadtree;

pub use quadtree::{
    Quadtree, QuadtreeConfig, QuadtreeEntity, QuadtreeNode,
    BOTTOM_LEFT, BOTTOM_RIGHT, MAX_LEVELS, MAX_OBJECTS, TOP_LEFT, TOP_RIGHT,
};
