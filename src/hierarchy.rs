//! Course structure derived from the connection graph.
//!
//! Chapter and topic membership come strictly from parent -> child edges.
//! Node positions play no part, so irregular layouts and nodes dragged far
//! from their parent still land under the right heading.

use crate::constants::DENSE_TOPIC_COUNT;
use crate::engine::CanvasSnapshot;
use crate::error::{CanvasError, CanvasResult};
use crate::types::{Node, NodeId, NodeType};
use std::collections::HashSet;

/// A node with its children, in connection order.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode<'a> {
    pub node: &'a Node,
    pub children: Vec<TreeNode<'a>>,
}

impl<'a> TreeNode<'a> {
    /// Number of nodes in this subtree, including itself.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }

    /// Depth-first walk of the subtree, parents before children.
    pub fn walk(&self) -> Vec<&'a Node> {
        let mut out = vec![self.node];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }
}

/// The course as a tree rooted at the canvas root.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseTree<'a> {
    pub root: TreeNode<'a>,
}

impl<'a> CourseTree<'a> {
    pub fn build(snapshot: &CanvasSnapshot<'a>) -> CanvasResult<Self> {
        if snapshot.is_empty() {
            return Err(CanvasError::EmptyCanvas);
        }
        let root = snapshot.root().ok_or(CanvasError::MissingRoot)?;

        let mut visited = HashSet::new();
        Ok(Self {
            root: subtree(snapshot, root, &mut visited),
        })
    }

    pub fn title(&self) -> &'a str {
        &self.root.node.title
    }

    /// Direct children of the root.
    pub fn chapters(&self) -> &[TreeNode<'a>] {
        &self.root.children
    }

    /// Every node reachable from the root, parents first.
    pub fn nodes(&self) -> Vec<&'a Node> {
        self.root.walk()
    }
}

fn subtree<'a>(
    snapshot: &CanvasSnapshot<'a>,
    node: &'a Node,
    visited: &mut HashSet<&'a NodeId>,
) -> TreeNode<'a> {
    visited.insert(&node.id);
    let mut children = Vec::new();
    for child in snapshot.children_of(&node.id) {
        // Edges never form cycles in practice; skip revisits regardless
        if visited.contains(&child.id) {
            continue;
        }
        children.push(subtree(snapshot, child, visited));
    }
    TreeNode { node, children }
}

/// Structure statistics shown on the review panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseReview {
    pub node_count: usize,
    pub chapter_count: usize,
    pub topic_count: usize,
    /// Nodes not reachable from the root through connections
    pub detached_count: usize,
    /// Too many topics to digest comfortably
    pub dense: bool,
}

impl CourseReview {
    pub fn analyze(snapshot: &CanvasSnapshot<'_>) -> Self {
        let count = |ty: NodeType| snapshot.nodes.iter().filter(|n| n.node_type == ty).count();
        let topic_count = count(NodeType::Topic);
        let reachable = CourseTree::build(snapshot)
            .map(|tree| tree.root.count())
            .unwrap_or(0);

        Self {
            node_count: snapshot.nodes.len(),
            chapter_count: count(NodeType::Chapter),
            topic_count,
            detached_count: snapshot.nodes.len() - reachable,
            dense: topic_count > DENSE_TOPIC_COUNT,
        }
    }

    pub fn summary(&self) -> String {
        let density = if self.dense {
            "Topics are dense; consider trimming or splitting chapters"
        } else {
            "Topic density is comfortable"
        };
        format!(
            "{} chapters, {} topics. {}.",
            self.chapter_count, self.topic_count, density
        )
    }
}
