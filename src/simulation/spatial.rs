//! Spatial indexing for the collision broadphase.
//!
//! Wraps a KD-tree over the corners of one group of entities. Since every box
//! has the same edge length, two boxes can only overlap when their corners are
//! closer than the box diagonal.

use kdtree::distance::squared_euclidean;
use kdtree::{ErrorKind as KdTreeError, KdTree};
use ndarray::Array1;

use super::entity::Entity;
use super::geometric_utils::boxes_intersect;

/// Type alias for 2D spatial KD-tree used for efficient neighbor queries.
pub type Tree2D = KdTree<f32, usize, Vec<f32>>;

/// Result of a spatial radius query: (`distance_squared`, index) pairs.
pub type SpatialQueryResult = Vec<(f32, usize)>;

/// Points per tree leaf before it splits.
const LEAF_CAPACITY: usize = 16;

/// KD-tree over the positions of a slice of entities.
pub struct SpatialIndex {
    tree: Tree2D,
}

impl SpatialIndex {
    /// Builds an index over `entities`; query results index into the same slice.
    pub fn build(entities: &[Entity]) -> Result<Self, KdTreeError> {
        let mut tree = KdTree::with_capacity(2, LEAF_CAPACITY);
        for (i, entity) in entities.iter().enumerate() {
            tree.add(entity.pos.to_vec(), i)?;
        }
        Ok(Self { tree })
    }

    /// Number of indexed entities.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Returns `true` if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entities whose corner lies within `radius` of `pos`.
    pub fn query(&self, pos: &Array1<f32>, radius: f32) -> SpatialQueryResult {
        self.tree
            .within(&pos.to_vec(), radius.powi(2), &squared_euclidean)
            .unwrap_or_default()
            .into_iter()
            .map(|(dist, &idx)| (dist, idx))
            .collect()
    }

    /// Returns `true` if a box of edge `size` at `pos` overlaps any indexed box.
    ///
    /// `entities` must be the slice the index was built from.
    pub fn overlaps_any(&self, entities: &[Entity], pos: &Array1<f32>, size: f32) -> bool {
        self.query(pos, size * std::f32::consts::SQRT_2)
            .into_iter()
            .any(|(_, idx)| boxes_intersect(&entities[idx].pos, pos, size))
    }
}
