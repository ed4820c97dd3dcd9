//! Spatial Index Module
//!
//! R-tree over node boxes (canvas coordinates) for pointer hit testing.

use crate::types::{NodeId, Rect};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing a node's bounding box.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub node_id: NodeId,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    pub fn new(node_id: NodeId, rect: Rect) -> Self {
        Self {
            node_id,
            min_x: rect.min_x(),
            min_y: rect.min_y(),
            max_x: rect.max_x(),
            max_y: rect.max_y(),
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}

/// Spatial index for canvas nodes using an R-tree.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<NodeId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the box for `node_id`.
    pub fn insert(&mut self, node_id: NodeId, rect: Rect) {
        if let Some(old_entry) = self.entries.remove(&node_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(node_id.clone(), rect);
        self.tree.insert(entry.clone());
        self.entries.insert(node_id, entry);
    }

    pub fn remove(&mut self, node_id: &NodeId) -> bool {
        if let Some(entry) = self.entries.remove(node_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn update(&mut self, node_id: &NodeId, rect: Rect) {
        self.insert(node_id.clone(), rect);
    }

    /// All nodes whose box contains the point (canvas coordinates).
    pub fn query_point(&self, x: f64, y: f64) -> Vec<NodeId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.node_id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
