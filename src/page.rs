use crate::content::Content;
use crate::model::{DisplayMode, IconRef, ProjectEntry, SkillEntry};
use crate::theme::{Fill, Palette};
use crate::tree::{NodeKind, NodeStyle, SectionKind, TextRole, VisualNode, VisualTree};
use indextree::NodeId;

pub const PROJECTS_HEADING: &str = "Featured Projects";
pub const SKILLS_HEADING: &str = "Technical Expertise";
pub const AWARD_LABEL: &str = "Hackathon 2nd Place";
/// Icon shown in the award badge.
pub const AWARD_ICON: IconRef = IconRef::Trophy;

/// Derives the page's visual tree from the static content and the current
/// display mode. The mode is the only mutable state.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    content: Content,
    mode: DisplayMode,
}

impl PageRenderer {
    pub fn new(content: Content) -> Self {
        for title in content.projects_without_features() {
            tracing::warn!(project = title, "project has no features, rendering without bullets");
        }
        Self {
            content,
            mode: DisplayMode::default(),
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Flips the display mode and returns the new value.
    pub fn toggle_mode(&mut self) -> DisplayMode {
        self.mode = self.mode.toggle();
        tracing::info!(mode = self.mode.name(), "display mode toggled");
        self.mode
    }

    pub fn render_current(&self) -> VisualTree {
        self.render(self.mode)
    }

    /// Pure function of `mode` and the content.
    pub fn render(&self, mode: DisplayMode) -> VisualTree {
        let palette = Palette::for_mode(mode);
        let mut tree = VisualTree::new(
            mode,
            VisualNode::new(NodeKind::Page, NodeStyle::default().gradient(palette.background)),
        );
        let root = tree.root();

        tree.append(
            root,
            VisualNode::new(NodeKind::Backdrop, NodeStyle::default().fill(palette.orb)),
        );
        tree.append(
            root,
            VisualNode::new(
                NodeKind::Toggle {
                    icon: palette.toggle_icon,
                },
                NodeStyle::default()
                    .fill(palette.toggle)
                    .text(palette.text),
            ),
        );

        self.hero(&mut tree, root, palette);

        let projects = section(&mut tree, root, SectionKind::Projects, PROJECTS_HEADING, palette);
        for entry in &self.content.projects {
            project_card(&mut tree, projects, entry, palette);
        }

        let skills = section(&mut tree, root, SectionKind::Skills, SKILLS_HEADING, palette);
        for entry in &self.content.skills {
            skill_tile(&mut tree, skills, entry, palette);
        }

        tree
    }

    fn hero(&self, tree: &mut VisualTree, root: NodeId, palette: &Palette) {
        let profile = &self.content.profile;
        let hero = tree.append(root, VisualNode::plain(NodeKind::Hero));
        tree.append(
            hero,
            VisualNode::new(
                NodeKind::Heading {
                    text: profile.name.clone(),
                },
                NodeStyle::default().gradient(palette.name),
            ),
        );
        for (text, role) in [(&profile.title, TextRole::Lead), (&profile.bio, TextRole::Body)] {
            tree.append(
                hero,
                VisualNode::new(
                    NodeKind::Text {
                        text: text.clone(),
                        role,
                    },
                    NodeStyle::default().text(palette.hero_text),
                ),
            );
        }
        let row = tree.append(hero, VisualNode::plain(NodeKind::IconRow));
        for &icon in &profile.socials {
            tree.append(
                row,
                VisualNode::new(NodeKind::Icon { icon }, NodeStyle::default().text(palette.hero_text)),
            );
        }
    }
}

fn section(
    tree: &mut VisualTree,
    root: NodeId,
    kind: SectionKind,
    heading: &str,
    palette: &Palette,
) -> NodeId {
    tree.append(
        root,
        VisualNode::new(
            NodeKind::Section {
                kind,
                heading: heading.to_string(),
            },
            NodeStyle::default().text(palette.hero_text),
        ),
    )
}

fn project_card(tree: &mut VisualTree, parent: NodeId, entry: &ProjectEntry, palette: &Palette) {
    let card = tree.append(
        parent,
        VisualNode::new(
            NodeKind::Card {
                title: entry.title.clone(),
                description: entry.description.clone(),
            },
            surface_style(palette),
        ),
    );
    if entry.is_award {
        tree.append(
            card,
            VisualNode::new(
                NodeKind::AwardBadge {
                    label: AWARD_LABEL.to_string(),
                },
                NodeStyle::default()
                    .fill(palette.award)
                    .text(palette.award_text),
            ),
        );
    }
    for feature in &entry.features {
        tree.append(
            card,
            VisualNode::new(
                NodeKind::Bullet {
                    text: feature.clone(),
                },
                NodeStyle::default().text(palette.muted),
            ),
        );
    }
}

fn skill_tile(tree: &mut VisualTree, parent: NodeId, entry: &SkillEntry, palette: &Palette) {
    tree.append(
        parent,
        VisualNode::new(
            NodeKind::SkillTile {
                icon: entry.icon,
                label: entry.label.clone(),
            },
            surface_style(palette),
        ),
    );
}

fn surface_style(palette: &Palette) -> NodeStyle {
    NodeStyle::default()
        .fill(palette.surface)
        .text(palette.text)
}

/// Fill of the first card, if any. Handy for checking the mode-dependent
/// surface.
pub fn card_fill(tree: &VisualTree) -> Option<Fill> {
    tree.cards()
        .first()
        .and_then(|&id| tree.get(id))
        .and_then(|node| node.style.fill)
}
