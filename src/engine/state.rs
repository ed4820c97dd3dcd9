//! Engine state - the `CanvasEngine` struct definition and queries.

use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::input::{InputState, PointerEvent};
use crate::spatial_index::SpatialIndex;
use crate::surface::{ContainerSurface, ContentSurface, FixedContainer, Scene};
use crate::types::{Connection, ConnectionKey, Node, NodeId, NodeType, Point, Rect};
use crate::viewport::Viewport;
use std::time::Duration;

type NodeCallback = Box<dyn FnMut(&Node)>;
type NodeEventCallback = Box<dyn FnMut(&Node, &PointerEvent)>;

/// Host-supplied notification hooks.
///
/// The engine only notifies; menus, editors and tooltips belong to the host.
#[derive(Default)]
pub struct NodeHooks {
    pub(crate) on_click: Option<NodeCallback>,
    pub(crate) on_double_click: Option<NodeCallback>,
    pub(crate) on_right_click: Option<NodeEventCallback>,
}

/// A cosmetic marker waiting to be cleared.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum AnimationTarget {
    NodeGrowing(NodeId),
    ConnectionDrawing(ConnectionKey),
}

#[derive(Clone, Debug)]
pub(crate) struct Animation {
    pub target: AnimationTarget,
    pub remaining: Duration,
}

impl Animation {
    pub fn targets_node(&self, id: &NodeId) -> bool {
        match &self.target {
            AnimationTarget::NodeGrowing(node) => node == id,
            AnimationTarget::ConnectionDrawing(_) => false,
        }
    }
}

/// Read-only view of the node and connection collections.
#[derive(Clone, Copy, Debug)]
pub struct CanvasSnapshot<'a> {
    pub nodes: &'a [Node],
    pub connections: &'a [Connection],
}

impl<'a> CanvasSnapshot<'a> {
    pub fn node(&self, id: &NodeId) -> Option<&'a Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn root(&self) -> Option<&'a Node> {
        self.nodes.iter().find(|n| n.node_type == NodeType::Root)
    }

    /// Children of `id` in connection order.
    pub fn children_of(&self, id: &NodeId) -> Vec<&'a Node> {
        self.connections
            .iter()
            .filter(|c| &c.from == id)
            .filter_map(|c| self.node(&c.to))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// The canvas engine.
///
/// `C` is the surface nodes and connections are drawn into, `V` the container
/// that receives pointer input and defines the visible viewport.
pub struct CanvasEngine<C: ContentSurface = Scene, V: ContainerSurface = FixedContainer> {
    pub(crate) content: C,
    pub(crate) container: V,
    pub(crate) config: EngineConfig,
    pub(crate) nodes: Vec<Node>,
    pub(crate) connections: Vec<Connection>,
    pub(crate) viewport: Viewport,
    pub(crate) selected: Option<NodeId>,
    /// Input state machine for pointer gestures
    pub(crate) input_state: InputState,
    pub(crate) spatial: SpatialIndex,
    pub(crate) hooks: NodeHooks,
    pub(crate) animations: Vec<Animation>,
    /// Bumped by `clear`, lets deferred work detect a replaced canvas
    pub(crate) generation: u64,
}

impl CanvasEngine<Scene, FixedContainer> {
    /// Engine drawing into an in-memory scene with a fixed-size container.
    pub fn headless(width: f64, height: f64) -> Self {
        Self::new(Scene::new(), FixedContainer::new(width, height))
    }
}

impl<C: ContentSurface, V: ContainerSurface> CanvasEngine<C, V> {
    pub fn new(content: C, container: V) -> Self {
        Self::build(content, container, EngineConfig::default())
    }

    /// Engine with a custom config, rejected unless `config.validate()` passes.
    pub fn with_config(
        content: C,
        container: V,
        config: EngineConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(content, container, config))
    }

    fn build(mut content: C, container: V, config: EngineConfig) -> Self {
        let viewport = Viewport::new(config.min_scale, config.max_scale);
        content.set_transform(&viewport.css_transform());

        Self {
            content,
            container,
            config,
            nodes: Vec::new(),
            connections: Vec::new(),
            viewport,
            selected: None,
            input_state: InputState::default(),
            spatial: SpatialIndex::new(),
            hooks: NodeHooks::default(),
            animations: Vec::new(),
            generation: 0,
        }
    }

    // ------------------------------------------------------------------------
    // Hooks
    // ------------------------------------------------------------------------

    pub fn set_on_node_click(&mut self, hook: impl FnMut(&Node) + 'static) {
        self.hooks.on_click = Some(Box::new(hook));
    }

    /// Without this hook, double-clicks are reported through the click hook.
    pub fn set_on_node_double_click(&mut self, hook: impl FnMut(&Node) + 'static) {
        self.hooks.on_double_click = Some(Box::new(hook));
    }

    pub fn set_on_node_right_click(&mut self, hook: impl FnMut(&Node, &PointerEvent) + 'static) {
        self.hooks.on_right_click = Some(Box::new(hook));
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn snapshot(&self) -> CanvasSnapshot<'_> {
        CanvasSnapshot {
            nodes: &self.nodes,
            connections: &self.connections,
        }
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub(crate) fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| &n.id == id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.is_root())
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selected.as_ref().and_then(|id| self.node(id))
    }

    pub fn children_of(&self, id: &NodeId) -> Vec<&Node> {
        self.snapshot().children_of(id)
    }

    pub fn parent_of(&self, id: &NodeId) -> Option<&Node> {
        self.connections
            .iter()
            .find(|c| &c.to == id)
            .and_then(|c| self.node(&c.from))
    }

    /// Bounding box over every node, `None` on an empty canvas.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(self.nodes.iter().map(Node::rect))
    }

    /// Topmost node under a canvas-space point.
    pub fn node_at(&self, canvas: Point) -> Option<&NodeId> {
        let candidates = self.spatial.query_point(canvas.x, canvas.y);
        if candidates.is_empty() {
            return None;
        }
        // Later nodes are drawn above earlier ones
        self.nodes
            .iter()
            .rev()
            .find(|n| candidates.contains(&n.id))
            .map(|n| &n.id)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn container(&self) -> &V {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut V {
        &mut self.container
    }
}
