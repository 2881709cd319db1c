//! Quadtree spatial partitioning structure
//!
//! Divides a fixed 2D world rectangle into hierarchical quadrants for
//! broad-phase candidate retrieval. The tree is rebuilt from scratch every
//! tick: [`Quadtree::clear`] followed by one [`Quadtree::insert`] per live
//! body. It is never updated incrementally.
//!
//! A body is stored at the deepest node whose single child quadrant cannot
//! fully contain its mask. Bodies straddling a node's midlines stay at that
//! node.
//!
//! [`Quadtree::retrieve`] descends only along the query's own quadrant path
//! and collects the bodies stored on that path. Bodies stored in a sibling
//! quadrant are never returned, even if they reach across the boundary
//! toward the query. The broad phase is approximate by construction.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::foundation::math::IntRect;
use crate::physics::body::BodyId;
use crate::physics::collision::CollisionShape;

/// Default number of bodies a node holds before it splits
pub const MAX_OBJECTS: usize = 10;

/// Default deepest node level; nodes at this level never split
pub const MAX_LEVELS: u32 = 5;

/// Child slot of the top-right quadrant
pub const TOP_RIGHT: usize = 0;
/// Child slot of the top-left quadrant
pub const TOP_LEFT: usize = 1;
/// Child slot of the bottom-left quadrant
pub const BOTTOM_LEFT: usize = 2;
/// Child slot of the bottom-right quadrant
pub const BOTTOM_RIGHT: usize = 3;

/// Configuration for quadtree behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadtreeConfig {
    /// Maximum bodies stored at a node before it splits
    pub max_objects: usize,

    /// Maximum subdivision level (root is level 0)
    pub max_levels: u32,
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            max_objects: MAX_OBJECTS,
            max_levels: MAX_LEVELS,
        }
    }
}

impl Config for QuadtreeConfig {}

/// Body stored in the quadtree together with its mask for this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadtreeEntity {
    /// Body identity
    pub id: BodyId,
    /// Mask at insertion time
    pub shape: CollisionShape,
}

/// Single node in the quadtree hierarchy
#[derive(Debug, Clone)]
pub struct QuadtreeNode {
    level: u32,
    bounds: IntRect,
    entities: Vec<QuadtreeEntity>,
    children: Option<Box<[QuadtreeNode; 4]>>,
}

impl QuadtreeNode {
    /// Create a new leaf node
    pub fn new(level: u32, bounds: IntRect) -> Self {
        Self {
            level,
            bounds,
            entities: Vec::new(),
            children: None,
        }
    }

    /// Level in the tree (0 = root)
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Region covered by this node
    pub const fn bounds(&self) -> IntRect {
        self.bounds
    }

    /// Bodies stored directly at this node, not in children
    pub fn entities(&self) -> &[QuadtreeEntity] {
        &self.entities
    }

    /// Child nodes in quadrant order, `None` for a leaf
    pub fn children(&self) -> Option<&[QuadtreeNode; 4]> {
        self.children.as_deref()
    }

    /// Check if this node is a leaf (has no children)
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Discard all stored bodies and child nodes
    pub fn clear(&mut self) {
        self.entities.clear();
        self.children = None;
    }

    /// Split into four children covering equal quadrants
    ///
    /// Children are created in the fixed order top-right, top-left,
    /// bottom-left, bottom-right. Existing bodies are not moved.
    pub fn split(&mut self) {
        if self.children.is_some() {
            return;
        }

        let sub_width = self.bounds.width / 2;
        let sub_height = self.bounds.height / 2;
        let x = self.bounds.left;
        let y = self.bounds.top;
        let level = self.level + 1;

        self.children = Some(Box::new([
            QuadtreeNode::new(level, IntRect::new(x + sub_width, y, sub_width, sub_height)),
            QuadtreeNode::new(level, IntRect::new(x, y, sub_width, sub_height)),
            QuadtreeNode::new(level, IntRect::new(x, y + sub_height, sub_width, sub_height)),
            QuadtreeNode::new(level, IntRect::new(x + sub_width, y + sub_height, sub_width, sub_height)),
        ]));
    }

    /// Quadrant (0-3) that fully contains the shape, `None` if it straddles a midline
    ///
    /// Edges touching a midline count as straddling.
    pub fn get_index(&self, shape: &CollisionShape) -> Option<usize> {
        let extent = shape.bounding_rect();
        if extent.width < 0 || extent.height < 0 {
            return None;
        }

        let vertical_midpoint = self.bounds.vertical_midpoint();
        let horizontal_midpoint = self.bounds.horizontal_midpoint();

        let top = extent.bottom() < horizontal_midpoint;
        let bottom = extent.top > horizontal_midpoint;
        let left = extent.right() < vertical_midpoint;
        let right = extent.left > vertical_midpoint;

        match (left, right, top, bottom) {
            (true, _, true, _) => Some(TOP_LEFT),
            (true, _, _, true) => Some(BOTTOM_LEFT),
            (_, true, true, _) => Some(TOP_RIGHT),
            (_, true, _, true) => Some(BOTTOM_RIGHT),
            _ => None,
        }
    }

    /// Insert a body into this node or the child quadrant that contains it
    pub fn insert(&mut self, entity: QuadtreeEntity, config: &QuadtreeConfig) {
        if let Some(index) = self.get_index(&entity.shape) {
            if let Some(children) = self.children.as_mut() {
                children[index].insert(entity, config);
                return;
            }
        }

        self.entities.push(entity);

        if self.entities.len() > config.max_objects && self.level < config.max_levels {
            self.split();
            self.redistribute(config);
        }
    }

    /// Push every stored body that fits a single quadrant down into it
    fn redistribute(&mut self, config: &QuadtreeConfig) {
        let stored = std::mem::take(&mut self.entities);
        for entity in stored {
            let index = self.get_index(&entity.shape);
            match (index, self.children.as_mut()) {
                (Some(index), Some(children)) => children[index].insert(entity, config),
                _ => self.entities.push(entity),
            }
        }
    }

    /// Collect candidate bodies for `shape` into `results`
    ///
    /// Descends into exactly one child when the shape fits a quadrant, then
    /// appends the bodies stored at this node.
    pub fn retrieve_into(&self, shape: &CollisionShape, results: &mut Vec<BodyId>) {
        if let (Some(index), Some(children)) = (self.get_index(shape), self.children.as_ref()) {
            children[index].retrieve_into(shape, results);
        }

        results.extend(self.entities.iter().map(|entity| entity.id));
    }

    /// Count total bodies in this node and all children
    pub fn count_entities(&self) -> usize {
        let mut count = self.entities.len();

        if let Some(ref children) = self.children {
            for child in children.iter() {
                count += child.count_entities();
            }
        }

        count
    }

    /// Count this node and all descendants
    pub fn count_nodes(&self) -> usize {
        1 + self
            .children
            .as_ref()
            .map_or(0, |children| children.iter().map(QuadtreeNode::count_nodes).sum())
    }

    /// Deepest level present below (and including) this node
    pub fn max_level(&self) -> u32 {
        self.children
            .as_ref()
            .and_then(|children| children.iter().map(QuadtreeNode::max_level).max())
            .unwrap_or(self.level)
    }

    /// Get all leaf nodes (for visualization)
    pub fn get_all_leaves<'a>(&'a self, leaves: &mut Vec<&'a QuadtreeNode>) {
        if let Some(ref children) = self.children {
            for child in children.iter() {
                child.get_all_leaves(leaves);
            }
        } else {
            leaves.push(self);
        }
    }

    /// Get all nodes at a specific level (for visualization)
    pub fn get_nodes_at_level<'a>(&'a self, target_level: u32, nodes: &mut Vec<&'a QuadtreeNode>) {
        if self.level == target_level {
            nodes.push(self);
        } else if let Some(ref children) = self.children {
            for child in children.iter() {
                child.get_nodes_at_level(target_level, nodes);
            }
        }
    }

    /// Visit this node and every descendant, parents first
    pub fn visit<'a>(&'a self, visitor: &mut impl FnMut(&'a QuadtreeNode)) {
        visitor(self);
        if let Some(ref children) = self.children {
            for child in children.iter() {
                child.visit(visitor);
            }
        }
    }
}

/// Quadtree over a fixed world rectangle
#[derive(Debug, Clone)]
pub struct Quadtree {
    /// Root node covering the whole world
    root: QuadtreeNode,

    /// Configuration
    config: QuadtreeConfig,
}

impl Quadtree {
    /// Create an empty quadtree over `world_bounds`
    pub fn new(world_bounds: IntRect, config: QuadtreeConfig) -> Self {
        Self {
            root: QuadtreeNode::new(0, world_bounds),
            config,
        }
    }

    /// Root node
    pub const fn root(&self) -> &QuadtreeNode {
        &self.root
    }

    /// World rectangle covered by the root
    pub const fn bounds(&self) -> IntRect {
        self.root.bounds
    }

    /// Configuration
    pub const fn config(&self) -> &QuadtreeConfig {
        &self.config
    }

    /// Discard all bodies and subdivisions
    pub fn clear(&mut self) {
        self.root.clear();
    }

    /// Insert a body with its current mask
    pub fn insert(&mut self, id: BodyId, shape: CollisionShape) {
        self.root.insert(QuadtreeEntity { id, shape }, &self.config);
    }

    /// Candidate bodies that might overlap `shape`
    pub fn retrieve(&self, shape: &CollisionShape) -> Vec<BodyId> {
        let mut results = Vec::new();
        self.root.retrieve_into(shape, &mut results);
        results
    }

    /// Candidate bodies that might overlap `shape`, appended to `results`
    pub fn retrieve_into(&self, shape: &CollisionShape, results: &mut Vec<BodyId>) {
        self.root.retrieve_into(shape, results);
    }

    /// Get total body count
    pub fn entity_count(&self) -> usize {
        self.root.count_entities()
    }

    /// Get total node count
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    /// Deepest node level currently present
    pub fn depth(&self) -> u32 {
        self.root.max_level()
    }

    /// Get all leaf nodes (for visualization)
    pub fn leaves(&self) -> Vec<&QuadtreeNode> {
        let mut leaves = Vec::new();
        self.root.get_all_leaves(&mut leaves);
        leaves
    }

    /// Get all nodes at a specific level (for visualization)
    pub fn nodes_at_level(&self, level: u32) -> Vec<&QuadtreeNode> {
        let mut nodes = Vec::new();
        self.root.get_nodes_at_level(level, &mut nodes);
        nodes
    }
}
