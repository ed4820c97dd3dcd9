//! Node lifecycle - create, add, delete, duplicate, clear.

use super::CanvasEngine;
use crate::error::{CanvasError, CanvasResult};
use crate::surface::{ContainerSurface, ContentSurface, NodeMarker};
use crate::types::{Connection, Node, NodeId, NodeOptions, NodeType, Point, Size};
use tracing::{debug, info};

impl<C: ContentSurface, V: ContainerSurface> CanvasEngine<C, V> {
    /// Build a node record. Does not add it to the canvas.
    pub fn create_node(
        &self,
        node_type: NodeType,
        title: impl Into<String>,
        x: f64,
        y: f64,
        options: NodeOptions,
    ) -> Node {
        Node {
            id: options.id.unwrap_or_else(NodeId::generate),
            node_type,
            title: title.into(),
            content: None,
            position: Point::new(x, y),
            size: Size::new(
                options.width.unwrap_or(self.config.default_node_width),
                options.height.unwrap_or(self.config.default_node_height),
            ),
            sources: options.sources,
        }
    }

    /// Register `node`, render it, and connect it under `parent` if given.
    ///
    /// Rejected without any mutation when the parent is not on the canvas,
    /// the id is taken, or a second root would be introduced.
    pub fn add_node(&mut self, node: Node, parent: Option<&NodeId>) -> CanvasResult<NodeId> {
        if self.contains(&node.id) {
            return Err(CanvasError::DuplicateNode(node.id));
        }
        if node.is_root() && self.root().is_some() {
            return Err(CanvasError::DuplicateRoot);
        }
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(CanvasError::InvalidParent(parent.clone()));
            }
        }

        debug!(
            title = %node.title,
            node_type = %node.node_type,
            total = self.nodes.len(),
            "Adding node"
        );

        let id = node.id.clone();
        self.spatial.insert(id.clone(), node.rect());
        self.content.mount_node(&node);
        self.nodes.push(node);
        self.content.set_node_marker(&id, NodeMarker::Growing, true);
        self.start_grow_animation(&id);

        if let Some(parent) = parent {
            let connection = Connection::new(parent.clone(), id.clone());
            self.connections.push(connection.clone());
            self.render_connection(&connection);
        }

        Ok(id)
    }

    /// Remove every node and connection. The viewport is left as is.
    pub fn clear(&mut self) {
        info!(nodes = self.nodes.len(), "Clearing canvas");

        for node in &self.nodes {
            self.content.unmount_node(&node.id);
        }
        self.content.erase_all_connections();

        self.nodes.clear();
        self.connections.clear();
        self.spatial.clear();
        self.animations.clear();
        self.selected = None;
        if !self.input_state.is_idle() {
            self.container.set_panning(false);
            self.input_state.reset();
        }
        self.generation += 1;
    }

    /// Delete a node and every connection touching it.
    pub fn delete_node(&mut self, id: &NodeId) -> CanvasResult<Node> {
        let index = self
            .nodes
            .iter()
            .position(|n| &n.id == id)
            .ok_or_else(|| CanvasError::NodeNotFound(id.clone()))?;
        if self.nodes[index].is_root() {
            return Err(CanvasError::RootDeletion);
        }

        let node = self.nodes.remove(index);
        self.connections.retain(|c| !c.touches(id));
        self.spatial.remove(id);
        self.animations.retain(|a| !a.targets_node(id));
        self.content.unmount_node(id);
        self.update_connections();

        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        if self.input_state.node_id() == Some(id) {
            self.input_state.reset();
        }

        debug!(title = %node.title, remaining = self.nodes.len(), "Deleted node");
        Ok(node)
    }

    /// Copy a node's type and size at an offset, without any connection.
    pub fn duplicate_node(&mut self, id: &NodeId) -> CanvasResult<NodeId> {
        let original = self
            .node(id)
            .ok_or_else(|| CanvasError::NodeNotFound(id.clone()))?;
        if original.is_root() {
            return Err(CanvasError::DuplicateRoot);
        }

        let offset = self.config.duplicate_offset;
        let copy = self.create_node(
            original.node_type,
            format!("{}{}", original.title, self.config.copy_suffix),
            original.position.x + offset,
            original.position.y + offset,
            NodeOptions::new().with_size(original.size.width, original.size.height),
        );
        self.add_node(copy, None)
    }
}
