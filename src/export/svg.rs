//! SVG mind-map export.
//!
//! Every node becomes a rounded box styled by its type; every connection a
//! quadratic curve between box centers, ending in an arrowhead. Coordinates
//! are shifted so the bounding box starts at the padding offset.

use super::escape_xml;
use crate::constants::SVG_PADDING;
use crate::engine::CanvasSnapshot;
use crate::error::{CanvasError, CanvasResult};
use crate::types::{Node, Point, Rect};
use std::fmt::Write;

/// Drawn over the indicator of nodes that cite sources
const SOURCE_GLYPH: &str = "\u{1F517}";

const STYLE: &str = r##"    <style>
      .root-node { fill: #0f766e; stroke: #134e4a; stroke-width: 3; }
      .chapter-node { fill: #48bb78; stroke: #38a169; stroke-width: 2; }
      .topic-node { fill: #ed8936; stroke: #dd6b20; stroke-width: 2; }
      .node-text { fill: white; font-family: 'Arial', sans-serif; font-size: 14px; text-anchor: middle; dominant-baseline: middle; }
      .connection { stroke: #a0aec0; stroke-width: 2; fill: none; }
      .source-indicator { fill: #0f766e; stroke: white; stroke-width: 1; }
    </style>
    <marker id="arrowhead" markerWidth="10" markerHeight="7" refX="9" refY="3.5" orient="auto">
      <polygon points="0 0, 10 3.5, 0 7" fill="#a0aec0"/>
    </marker>
"##;

pub fn render_svg(snapshot: &CanvasSnapshot<'_>) -> CanvasResult<String> {
    let bounds = Rect::bounding(snapshot.nodes.iter().map(Node::rect))
        .ok_or(CanvasError::EmptyCanvas)?;
    let width = bounds.size.width + SVG_PADDING * 2.0;
    let height = bounds.size.height + SVG_PADDING * 2.0;
    let local = |node: &Node| {
        let rect = node.rect();
        Rect {
            origin: rect.origin - bounds.origin,
            size: rect.size,
        }
    };

    let mut svg = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    svg.push_str("  <defs>\n");
    svg.push_str(STYLE);
    svg.push_str("  </defs>\n");
    let _ = writeln!(
        svg,
        r#"  <g transform="translate({SVG_PADDING}, {SVG_PADDING})">"#
    );

    for connection in snapshot.connections {
        let (Some(from), Some(to)) = (snapshot.node(&connection.from), snapshot.node(&connection.to))
        else {
            continue;
        };
        let start = local(from).center();
        let end = local(to).center();
        let control = Point::new((start.x + end.x) / 2.0, start.y);
        let _ = writeln!(
            svg,
            r#"    <path class="connection" d="M {} {} Q {} {} {} {}" marker-end="url(#arrowhead)"/>"#,
            start.x, start.y, control.x, control.y, end.x, end.y
        );
    }

    for node in snapshot.nodes {
        let rect = local(node);
        let center = rect.center();
        let _ = writeln!(
            svg,
            r#"    <rect class="{}-node" x="{}" y="{}" width="{}" height="{}" rx="8"/>"#,
            node.node_type,
            rect.min_x(),
            rect.min_y(),
            rect.size.width,
            rect.size.height
        );
        let _ = writeln!(
            svg,
            r#"    <text class="node-text" x="{}" y="{}">{}</text>"#,
            center.x,
            center.y,
            escape_xml(&node.title)
        );

        if node.has_sources() {
            let cx = rect.max_x() - 10.0;
            let cy = rect.min_y() + 10.0;
            let _ = writeln!(
                svg,
                r#"    <circle class="source-indicator" cx="{cx}" cy="{cy}" r="6"/>"#
            );
            let _ = writeln!(
                svg,
                r#"    <text x="{cx}" y="{cy}" text-anchor="middle" dominant-baseline="middle" font-size="8" fill="white">{SOURCE_GLYPH}</text>"#
            );
        }
    }

    svg.push_str("  </g>\n</svg>\n");
    Ok(svg)
}
