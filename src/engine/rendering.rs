//! Connection rendering and cosmetic marker timers.
//!
//! Connection curves are derived from node records on every redraw; nothing
//! is ever read back from the surface. Markers (`growing`, `drawing`) are
//! purely visual and cleared by [`CanvasEngine::tick`].

use super::CanvasEngine;
use super::state::{Animation, AnimationTarget};
use crate::connections::ConnectionPath;
use crate::profile_scope;
use crate::surface::{ContainerSurface, ContentSurface, NodeMarker};
use crate::types::{Connection, NodeId};
use std::time::Duration;
use tracing::{trace, warn};

impl<C: ContentSurface, V: ContainerSurface> CanvasEngine<C, V> {
    /// Draw one connection curve. Skipped if either endpoint is missing.
    pub(crate) fn render_connection(&mut self, connection: &Connection) {
        let (Some(from), Some(to)) = (self.node(&connection.from), self.node(&connection.to))
        else {
            warn!(
                from = %connection.from,
                to = %connection.to,
                "Skipping connection with missing endpoint"
            );
            return;
        };

        let key = connection.key();
        let path = ConnectionPath::between(key.clone(), &from.rect(), &to.rect());
        self.content.draw_connection(&path);
        self.content.set_connection_drawing(&key, true);
        self.start_animation(
            AnimationTarget::ConnectionDrawing(key),
            self.config.connection_animation(),
        );
    }

    /// Erase and redraw every connection.
    pub fn update_connections(&mut self) {
        profile_scope!("update_connections");

        self.content.erase_all_connections();
        let connections = self.connections.clone();
        for connection in &connections {
            self.render_connection(connection);
        }
    }

    /// Redraw only the connections touching `id`.
    pub fn update_node_connections(&mut self, id: &NodeId) {
        let touching: Vec<Connection> = self
            .connections
            .iter()
            .filter(|c| c.touches(id))
            .cloned()
            .collect();

        for connection in &touching {
            self.content.erase_connection(&connection.key());
            self.render_connection(connection);
        }
    }

    /// Advance marker timers by `elapsed`, clearing the ones that ran out.
    pub fn tick(&mut self, elapsed: Duration) {
        let mut expired = Vec::new();
        self.animations.retain_mut(|animation| {
            animation.remaining = animation.remaining.saturating_sub(elapsed);
            if animation.remaining.is_zero() {
                expired.push(animation.target.clone());
                false
            } else {
                true
            }
        });

        for target in expired {
            trace!(?target, "Animation finished");
            // Targets may have been removed meanwhile; surfaces ignore unknown ids
            match target {
                AnimationTarget::NodeGrowing(id) => {
                    self.content.set_node_marker(&id, NodeMarker::Growing, false);
                }
                AnimationTarget::ConnectionDrawing(key) => {
                    self.content.set_connection_drawing(&key, false);
                }
            }
        }
    }

    /// Number of marker timers still running.
    pub fn pending_animations(&self) -> usize {
        self.animations.len()
    }

    pub(crate) fn start_grow_animation(&mut self, id: &NodeId) {
        self.start_animation(
            AnimationTarget::NodeGrowing(id.clone()),
            self.config.grow_animation(),
        );
    }

    /// Start a timer, restarting it if the target already has one.
    fn start_animation(&mut self, target: AnimationTarget, duration: Duration) {
        if let Some(existing) = self.animations.iter_mut().find(|a| a.target == target) {
            existing.remaining = duration;
            return;
        }
        self.animations.push(Animation {
            target,
            remaining: duration,
        });
    }

    /// Push the viewport transform to the content surface.
    pub(crate) fn sync_transform(&mut self) {
        self.content.set_transform(&self.viewport.css_transform());
    }
}
