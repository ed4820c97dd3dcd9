//! Selection and in-place edits of existing nodes.

use super::CanvasEngine;
use crate::error::{CanvasError, CanvasResult};
use crate::surface::{ContainerSurface, ContentSurface, NodeMarker};
use crate::types::{NodeId, Point, Size};
use tracing::debug;

impl<C: ContentSurface, V: ContainerSurface> CanvasEngine<C, V> {
    /// Select `id`, or clear the selection with `None`.
    ///
    /// At most one node is selected at a time.
    pub fn select_node(&mut self, id: Option<&NodeId>) -> CanvasResult<()> {
        if let Some(id) = id {
            if !self.contains(id) {
                return Err(CanvasError::NodeNotFound(id.clone()));
            }
        }

        if let Some(previous) = self.selected.take() {
            self.content
                .set_node_marker(&previous, NodeMarker::Selected, false);
        }
        if let Some(id) = id {
            self.content.set_node_marker(id, NodeMarker::Selected, true);
            self.selected = Some(id.clone());
        }
        Ok(())
    }

    pub fn set_node_title(&mut self, id: &NodeId, title: impl Into<String>) -> CanvasResult<()> {
        let node = self
            .node_mut(id)
            .ok_or_else(|| CanvasError::NodeNotFound(id.clone()))?;
        node.title = title.into();
        let node = node.clone();
        self.content.update_node(&node);
        Ok(())
    }

    /// Replace the free-text body. `None` removes it.
    pub fn set_node_content(&mut self, id: &NodeId, content: Option<String>) -> CanvasResult<()> {
        let node = self
            .node_mut(id)
            .ok_or_else(|| CanvasError::NodeNotFound(id.clone()))?;
        node.content = content;
        Ok(())
    }

    /// Move a node to a canvas position and redraw its connections.
    pub fn move_node(&mut self, id: &NodeId, position: Point) -> CanvasResult<()> {
        self.set_geometry(id, Some(position), None)
    }

    pub fn resize_node(&mut self, id: &NodeId, size: Size) -> CanvasResult<()> {
        self.set_geometry(id, None, Some(size))
    }

    fn set_geometry(
        &mut self,
        id: &NodeId,
        position: Option<Point>,
        size: Option<Size>,
    ) -> CanvasResult<()> {
        let node = self
            .node_mut(id)
            .ok_or_else(|| CanvasError::NodeNotFound(id.clone()))?;
        if let Some(position) = position {
            node.position = position;
        }
        if let Some(size) = size {
            node.size = size;
        }
        let node = node.clone();

        debug!(node = %id, x = node.position.x, y = node.position.y, "Node geometry changed");
        self.spatial.update(id, node.rect());
        self.content.update_node(&node);
        self.update_node_connections(id);
        Ok(())
    }
}
