// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use folio_rs::model::{IconRef, Profile};
use folio_rs::tree::{NodeKind, VisualTree};
use folio_rs::{Content, ProjectEntry, SkillEntry};
use ratatui::buffer::Buffer;

/// Content with the given lists and a minimal hero.
pub fn content_with(projects: Vec<ProjectEntry>, skills: Vec<SkillEntry>) -> Content {
    let profile = Profile {
        name: "Test Person".to_string(),
        title: "Tester".to_string(),
        bio: "Writes tests.".to_string(),
        socials: vec![IconRef::GitHub, IconRef::LinkedIn],
    };
    Content::new(profile, projects, skills)
}

/// Titles of all rendered cards, in tree order.
pub fn card_titles(tree: &VisualTree) -> Vec<String> {
    tree.cards()
        .into_iter()
        .filter_map(|id| match &tree.get(id)?.kind {
            NodeKind::Card { title, .. } => Some(title.clone()),
            _ => None,
        })
        .collect()
}

/// Labels of all rendered skill tiles, in tree order.
pub fn tile_labels(tree: &VisualTree) -> Vec<String> {
    tree.skill_tiles()
        .into_iter()
        .filter_map(|id| match &tree.get(id)?.kind {
            NodeKind::SkillTile { label, .. } => Some(label.clone()),
            _ => None,
        })
        .collect()
}

/// Number of award badges on the card at `index`.
pub fn award_badges(tree: &VisualTree, index: usize) -> usize {
    let card = tree.cards()[index];
    tree.child_nodes(card)
        .filter(|(_, n)| matches!(n.kind, NodeKind::AwardBadge { .. }))
        .count()
}

/// Bullet texts on the card at `index`.
pub fn bullets(tree: &VisualTree, index: usize) -> Vec<String> {
    let card = tree.cards()[index];
    tree.child_nodes(card)
        .filter_map(|(_, n)| match &n.kind {
            NodeKind::Bullet { text } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

/// Every row of a buffer as a string of cell symbols.
pub fn buffer_text(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
