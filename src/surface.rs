//! Rendering surfaces.
//!
//! The engine never reads state back from a surface. It pushes projections of
//! its node records into a [`ContentSurface`] and reads viewport geometry from
//! a [`ContainerSurface`]. [`Scene`] and [`FixedContainer`] are in-memory
//! implementations used by headless hosts and tests.

use crate::connections::ConnectionPath;
use crate::types::{ConnectionKey, Node, NodeId, Point, Size};
use std::collections::{BTreeSet, HashMap};

/// Visual-only state toggled on a rendered node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeMarker {
    Selected,
    Dragging,
    Growing,
}

/// Surface that nodes and connections are drawn into.
pub trait ContentSurface {
    fn mount_node(&mut self, node: &Node);
    fn unmount_node(&mut self, id: &NodeId);
    /// Re-project geometry and text after the record changed.
    fn update_node(&mut self, node: &Node);
    fn set_node_marker(&mut self, id: &NodeId, marker: NodeMarker, on: bool);

    fn draw_connection(&mut self, path: &ConnectionPath);
    /// Remove the curve with this key. Returns false if it was not drawn.
    fn erase_connection(&mut self, key: &ConnectionKey) -> bool;
    fn erase_all_connections(&mut self);
    fn set_connection_drawing(&mut self, key: &ConnectionKey, on: bool);

    /// Apply the viewport transform (CSS transform syntax).
    fn set_transform(&mut self, transform: &str);
}

/// Surface that receives pointer input and defines the visible viewport.
pub trait ContainerSurface {
    /// Top-left of the container in client coordinates.
    fn origin(&self) -> Point;
    fn client_size(&self) -> Size;
    fn set_panning(&mut self, _on: bool) {}
}

// ============================================================================
// In-memory implementations
// ============================================================================

/// What a [`Scene`] knows about one mounted node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeView {
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub has_sources: bool,
    pub markers: BTreeSet<NodeMarker>,
}

/// A rendered connection curve.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionView {
    pub path: ConnectionPath,
    pub drawing: bool,
}

/// Recording content surface.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: HashMap<NodeId, NodeView>,
    connections: Vec<ConnectionView>,
    transform: String,
    /// Total number of `draw_connection` calls since creation.
    pub connection_draws: usize,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            transform: "translate(0px, 0px) scale(1)".to_string(),
            ..Default::default()
        }
    }

    pub fn node(&self, id: &NodeId) -> Option<&NodeView> {
        self.nodes.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn has_marker(&self, id: &NodeId, marker: NodeMarker) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|view| view.markers.contains(&marker))
    }

    pub fn connection(&self, key: &ConnectionKey) -> Option<&ConnectionView> {
        self.connections.iter().find(|c| &c.path.key == key)
    }

    pub fn connections(&self) -> &[ConnectionView] {
        &self.connections
    }

    pub fn transform(&self) -> &str {
        &self.transform
    }
}

impl ContentSurface for Scene {
    fn mount_node(&mut self, node: &Node) {
        self.nodes.insert(
            node.id.clone(),
            NodeView {
                title: node.title.clone(),
                position: node.position,
                size: node.size,
                has_sources: node.has_sources(),
                markers: BTreeSet::new(),
            },
        );
    }

    fn unmount_node(&mut self, id: &NodeId) {
        self.nodes.remove(id);
    }

    fn update_node(&mut self, node: &Node) {
        if let Some(view) = self.nodes.get_mut(&node.id) {
            view.title = node.title.clone();
            view.position = node.position;
            view.size = node.size;
            view.has_sources = node.has_sources();
        }
    }

    fn set_node_marker(&mut self, id: &NodeId, marker: NodeMarker, on: bool) {
        if let Some(view) = self.nodes.get_mut(id) {
            if on {
                view.markers.insert(marker);
            } else {
                view.markers.remove(&marker);
            }
        }
    }

    fn draw_connection(&mut self, path: &ConnectionPath) {
        self.connection_draws += 1;
        self.connections.push(ConnectionView {
            path: path.clone(),
            drawing: false,
        });
    }

    fn erase_connection(&mut self, key: &ConnectionKey) -> bool {
        let before = self.connections.len();
        self.connections.retain(|c| &c.path.key != key);
        self.connections.len() != before
    }

    fn erase_all_connections(&mut self) {
        self.connections.clear();
    }

    fn set_connection_drawing(&mut self, key: &ConnectionKey, on: bool) {
        if let Some(view) = self.connections.iter_mut().find(|c| &c.path.key == key) {
            view.drawing = on;
        }
    }

    fn set_transform(&mut self, transform: &str) {
        self.transform = transform.to_string();
    }
}

/// Container with a fixed client rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedContainer {
    pub origin: Point,
    pub size: Size,
    pub panning: bool,
}

impl FixedContainer {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            origin: Point::default(),
            size: Size::new(width, height),
            panning: false,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.origin = Point::new(x, y);
        self
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }
}

impl ContainerSurface for FixedContainer {
    fn origin(&self) -> Point {
        self.origin
    }

    fn client_size(&self) -> Size {
        self.size
    }

    fn set_panning(&mut self, on: bool) {
        self.panning = on;
    }
}
