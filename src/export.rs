use crate::model::IconStyle;
use crate::page::AWARD_ICON;
use crate::tree::{NodeKind, VisualTree};
use indextree::NodeId;

/// Plain-text rendering of a visual tree. Colours are dropped; structure and
/// text are kept in tree order.
pub fn to_text(tree: &VisualTree, icons: IconStyle) -> String {
    let mut output = String::new();
    export_node(tree, tree.root(), icons, &mut output);
    output
}

fn with_glyph(glyph: Option<&str>, text: &str) -> String {
    match glyph {
        Some(glyph) => format!("{} {}", glyph, text),
        None => text.to_string(),
    }
}

fn export_node(tree: &VisualTree, id: NodeId, icons: IconStyle, output: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };

    match &node.kind {
        NodeKind::Page | NodeKind::Backdrop | NodeKind::Hero => {}
        NodeKind::Toggle { icon } => {
            let mode = format!("mode: {}", tree.mode().name());
            match icon.glyph(icons) {
                Some(glyph) => output.push_str(&format!("{} [{}]\n", mode, glyph)),
                None => output.push_str(&format!("{}\n", mode)),
            }
            output.push('\n');
        }
        NodeKind::Heading { text } => output.push_str(&format!("# {}\n", text)),
        NodeKind::Text { text, .. } => output.push_str(&format!("{}\n", text)),
        NodeKind::IconRow => {
            let names: Vec<&str> = tree
                .child_nodes(id)
                .filter_map(|(_, child)| match child.kind {
                    NodeKind::Icon { icon } => Some(icon.name()),
                    _ => None,
                })
                .collect();
            if !names.is_empty() {
                output.push_str(&format!("links: {}\n", names.join(", ")));
            }
            output.push('\n');
            return;
        }
        // Icons are listed by their row.
        NodeKind::Icon { .. } => {}
        NodeKind::Section { heading, .. } => output.push_str(&format!("## {}\n\n", heading)),
        NodeKind::Card { title, description } => {
            let award = tree
                .child_nodes(id)
                .find_map(|(_, child)| match &child.kind {
                    NodeKind::AwardBadge { label } => Some(label.as_str()),
                    _ => None,
                });
            match award {
                Some(label) => output.push_str(&format!(
                    "### {} [{}]\n",
                    title,
                    with_glyph(AWARD_ICON.glyph(icons), label)
                )),
                None => output.push_str(&format!("### {}\n", title)),
            }
            output.push_str(&format!("{}\n", description));
            for (_, child) in tree.child_nodes(id) {
                if let NodeKind::Bullet { text } = &child.kind {
                    output.push_str(&format!("  - {}\n", text));
                }
            }
            output.push('\n');
            return;
        }
        NodeKind::AwardBadge { .. } | NodeKind::Bullet { .. } => {}
        NodeKind::SkillTile { icon, label } => {
            output.push_str(&format!("- {}\n", with_glyph(icon.glyph(icons), label)));
        }
    }

    for child in tree.children(id) {
        export_node(tree, child, icons, output);
    }
}
