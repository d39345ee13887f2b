//! Textual readout of the materialized scene

use roll_scene::SceneNode;

use crate::state::DemoState;

/// Render the scene tree and tap status as text lines
pub fn render_demo(state: &DemoState) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("roll-demo: Space/Enter taps, q quits".to_string());
    lines.push(String::new());

    render_node(state.scene.root_node(), 0, &mut lines);
    lines.push(String::new());

    match state.tap_count {
        0 => lines.push("no taps yet; the scene is static".to_string()),
        n => lines.push(format!("taps: {}", n)),
    }
    if let Some(message) = &state.status_message {
        lines.push(message.clone());
    }

    lines
}

fn render_node(node: &SceneNode, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let geometry = match &node.geometry {
        Some(g) => format!("{:?}", g.shape.kind()),
        None => "(group)".to_string(),
    };
    let body = match &node.physics_body {
        Some(b) => format!(" [{:?} body]", b.kind),
        None => String::new(),
    };
    let p = node.transform.position;
    lines.push(format!(
        "{}{}: {} at ({:.2}, {:.2}, {:.2}){}",
        indent, node.name, geometry, p.x, p.y, p.z, body
    ));

    for child in node.children() {
        render_node(child, depth + 1, lines);
    }
}
