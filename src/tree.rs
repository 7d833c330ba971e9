use crate::model::{DisplayMode, IconRef};
use crate::theme::{Fill, Gradient, Rgb};
use indextree::{Arena, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Lead,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Projects,
    Skills,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Page,
    Backdrop,
    Toggle { icon: IconRef },
    Hero,
    Heading { text: String },
    Text { text: String, role: TextRole },
    IconRow,
    Icon { icon: IconRef },
    Section { kind: SectionKind, heading: String },
    Card { title: String, description: String },
    AwardBadge { label: String },
    Bullet { text: String },
    SkillTile { icon: IconRef, label: String },
}

/// Mode-dependent visual attributes of a node. Unset fields inherit from
/// whatever the node is painted over.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeStyle {
    pub fill: Option<Fill>,
    pub text: Option<Rgb>,
    pub gradient: Option<Gradient>,
}

impl NodeStyle {
    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn text(mut self, text: Rgb) -> Self {
        self.text = Some(text);
        self
    }

    pub fn gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = Some(gradient);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualNode {
    pub kind: NodeKind,
    pub style: NodeStyle,
}

impl VisualNode {
    pub fn new(kind: NodeKind, style: NodeStyle) -> Self {
        Self { kind, style }
    }

    pub fn plain(kind: NodeKind) -> Self {
        Self::new(kind, NodeStyle::default())
    }
}

/// The output of rendering: an arena tree of visual nodes rooted at a
/// `Page` node.
#[derive(Debug, Clone)]
pub struct VisualTree {
    mode: DisplayMode,
    arena: Arena<VisualNode>,
    root: NodeId,
}

impl VisualTree {
    pub fn new(mode: DisplayMode, page: VisualNode) -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(page);
        Self { mode, arena, root }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn append(&mut self, parent: NodeId, node: VisualNode) -> NodeId {
        let id = self.arena.new_node(node);
        parent.append(id, &mut self.arena);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&VisualNode> {
        self.arena.get(id).map(|n| n.get())
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.children(&self.arena)
    }

    /// Direct children of `id` paired with their nodes.
    pub fn child_nodes(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &VisualNode)> + '_ {
        self.children(id)
            .filter_map(move |child| self.get(child).map(|node| (child, node)))
    }

    /// Every node in pre-order, paired with its depth below the root.
    pub fn outline(&self) -> Vec<(usize, &VisualNode)> {
        self.root
            .descendants(&self.arena)
            .filter_map(|id| {
                let depth = id.ancestors(&self.arena).count() - 1;
                self.get(id).map(|node| (depth, node))
            })
            .collect()
    }

    pub fn page(&self) -> Option<&VisualNode> {
        self.get(self.root)
    }

    /// First direct child of the page matching `pred`.
    pub fn find_top(&self, pred: impl Fn(&NodeKind) -> bool) -> Option<(NodeId, &VisualNode)> {
        self.child_nodes(self.root).find(|(_, node)| pred(&node.kind))
    }

    pub fn section(&self, kind: SectionKind) -> Option<(NodeId, &VisualNode)> {
        self.find_top(|k| matches!(k, NodeKind::Section { kind: found, .. } if *found == kind))
    }

    pub fn cards(&self) -> Vec<NodeId> {
        self.section_children(SectionKind::Projects, |k| matches!(k, NodeKind::Card { .. }))
    }

    pub fn skill_tiles(&self) -> Vec<NodeId> {
        self.section_children(SectionKind::Skills, |k| matches!(k, NodeKind::SkillTile { .. }))
    }

    fn section_children(&self, kind: SectionKind, pred: impl Fn(&NodeKind) -> bool) -> Vec<NodeId> {
        match self.section(kind) {
            Some((section, _)) => self
                .child_nodes(section)
                .filter(|(_, node)| pred(&node.kind))
                .map(|(id, _)| id)
                .collect(),
            None => Vec::new(),
        }
    }
}

impl PartialEq for VisualTree {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode && self.outline() == other.outline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(text: &str) -> VisualNode {
        VisualNode::plain(NodeKind::Heading {
            text: text.to_string(),
        })
    }

    #[test]
    fn test_outline_is_preorder_with_depth() {
        let mut tree = VisualTree::new(DisplayMode::Light, VisualNode::plain(NodeKind::Page));
        let hero = tree.append(tree.root(), VisualNode::plain(NodeKind::Hero));
        tree.append(hero, heading("a"));
        tree.append(tree.root(), VisualNode::plain(NodeKind::Backdrop));

        let outline: Vec<(usize, &NodeKind)> =
            tree.outline().into_iter().map(|(d, n)| (d, &n.kind)).collect();
        assert_eq!(outline.len(), 4);
        assert_eq!(outline[0], (0, &NodeKind::Page));
        assert_eq!(outline[1], (1, &NodeKind::Hero));
        assert_eq!(outline[2].0, 2);
        assert_eq!(outline[3], (1, &NodeKind::Backdrop));
    }

    #[test]
    fn test_structural_equality_ignores_arena_identity() {
        let build = || {
            let mut tree = VisualTree::new(DisplayMode::Dark, VisualNode::plain(NodeKind::Page));
            tree.append(tree.root(), heading("x"));
            tree
        };
        assert_eq!(build(), build());

        let mut other = build();
        other.append(other.root(), heading("y"));
        assert_ne!(build(), other);
    }

    #[test]
    fn test_missing_section_yields_no_cards() {
        let tree = VisualTree::new(DisplayMode::Light, VisualNode::plain(NodeKind::Page));
        assert!(tree.cards().is_empty());
        assert!(tree.skill_tiles().is_empty());
    }
}
