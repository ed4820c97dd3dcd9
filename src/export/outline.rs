//! Markdown outline export.
//!
//! Walks root -> chapters -> topics through the connection graph, numbering
//! headings by position in the tree, and closes with a reference list built
//! from every node's sources.

use crate::engine::CanvasSnapshot;
use crate::error::CanvasResult;
use crate::hierarchy::{CourseTree, TreeNode};
use crate::types::Node;
use std::collections::HashSet;
use std::fmt::Write;

const UNTITLED: &str = "Untitled node";

pub fn render_markdown(snapshot: &CanvasSnapshot<'_>) -> CanvasResult<String> {
    let tree = CourseTree::build(snapshot)?;
    let root = tree.root.node;

    let mut md = String::new();
    let _ = write!(md, "# {}\n\n", title(root));
    if let Some(content) = non_empty(&root.content) {
        let _ = write!(md, "## Course overview\n\n{}\n\n", content);
    }

    for (index, chapter) in tree.chapters().iter().enumerate() {
        write_section(&mut md, chapter, &format!("{}", index + 1), 2);
    }

    let references = references(snapshot.nodes);
    if !references.is_empty() {
        md.push_str("## References\n\n");
        for (index, source) in references.iter().enumerate() {
            let _ = writeln!(md, "[{}]: Source excerpt {}", source, index + 1);
        }
    }

    Ok(md)
}

fn write_section(md: &mut String, section: &TreeNode<'_>, number: &str, level: usize) {
    let node = section.node;
    let hashes = "#".repeat(level.min(6));
    // Chapters read "1. Title", deeper levels "1.2 Title"
    let label = if level == 2 {
        format!("{}.", number)
    } else {
        number.to_string()
    };
    let _ = write!(md, "{} {} {}\n\n", hashes, label, title(node));

    if let Some(content) = non_empty(&node.content) {
        let _ = write!(md, "{}\n\n", content);
    }
    if node.has_sources() {
        let cited: Vec<String> = node.sources.iter().map(|s| format!("[{}]", s)).collect();
        let _ = write!(md, "**Sources:** {}\n\n", cited.join(", "));
    }

    for (index, child) in section.children.iter().enumerate() {
        write_section(md, child, &format!("{}.{}", number, index + 1), level + 1);
    }
}

fn title(node: &Node) -> &str {
    if node.title.trim().is_empty() {
        UNTITLED
    } else {
        &node.title
    }
}

fn non_empty(content: &Option<String>) -> Option<&str> {
    content.as_deref().filter(|c| !c.trim().is_empty())
}

/// Union of all sources, first occurrence order.
fn references(nodes: &[Node]) -> Vec<&str> {
    let mut seen = HashSet::new();
    nodes
        .iter()
        .flat_map(|n| n.sources.iter().map(String::as_str))
        .filter(|s| seen.insert(*s))
        .collect()
}
