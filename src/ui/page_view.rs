//! Lays the visual tree out as a scrollable page.
//!
//! The page is painted into its own buffer, as tall as the content needs.
//! Cells left with a `Reset` background are transparent and let the
//! backdrop show through when the page is composited onto the frame.

use crate::model::IconStyle;
use crate::page::AWARD_ICON;
use crate::theme::{Fill, Gradient, Rgb};
use crate::tree::{NodeKind, SectionKind, TextRole, VisualNode, VisualTree};
use crate::ui::text::{center_offset, display_width, TextWrapper};
use indextree::NodeId;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Widget},
};

pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 96;
const CONTENT_MAX_WIDTH: u16 = 120;
const SIDE_MARGIN: u16 = 2;
const CARD_GAP: u16 = 2;
const BIO_MAX_WIDTH: u16 = 60;
pub const TILE_WIDTH: u16 = 12;
/// Tiles grow taller only when a label needs more than one line.
pub const TILE_HEIGHT: u16 = 4;
const TILE_GAP: u16 = 2;

pub struct PageView {
    buffer: Buffer,
    toggle: Option<Rect>,
}

// A card or tile with everything needed to paint it.
struct CardModel {
    title: Vec<String>,
    award: Vec<String>,
    description: Vec<String>,
    bullets: Vec<String>,
    fill: Color,
    text: Style,
    muted: Style,
    award_style: Style,
}

struct TileModel {
    glyph: Option<&'static str>,
    label: Vec<String>,
    fill: Color,
    text: Style,
}

impl PageView {
    pub fn build(tree: &VisualTree, width: u16, icons: IconStyle) -> Self {
        let painter = Painter::new(tree, width, icons);
        let height = painter.paint(None);
        let mut buffer = Buffer::empty(Rect::new(0, 0, width, height));
        let mut toggle = None;
        painter.paint(Some((&mut buffer, &mut toggle)));
        Self { buffer, toggle }
    }

    pub fn height(&self) -> u16 {
        self.buffer.area.height
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Toggle button position in page coordinates.
    pub fn toggle(&self) -> Option<Rect> {
        self.toggle
    }

    /// Where the toggle button lands on screen for the given scroll offset,
    /// if it is visible.
    pub fn toggle_on_screen(&self, area: Rect, scroll: u16) -> Option<Rect> {
        let toggle = self.toggle?;
        if toggle.y < scroll || toggle.y >= scroll.saturating_add(area.height) {
            return None;
        }
        Some(Rect::new(
            area.x + toggle.x,
            area.y + (toggle.y - scroll),
            toggle.width.min(area.width.saturating_sub(toggle.x)),
            1,
        ))
    }

    /// Copies the visible slice of the page onto `buf`.
    pub fn blit(&self, buf: &mut Buffer, area: Rect, scroll: u16) {
        for row in 0..area.height {
            let page_y = scroll.saturating_add(row);
            if page_y >= self.height() {
                break;
            }
            for col in 0..area.width.min(self.buffer.area.width) {
                let Some(src) = self.buffer.cell((col, page_y)) else {
                    continue;
                };
                let Some(dst) = buf.cell_mut((area.x + col, area.y + row)) else {
                    continue;
                };
                if src.bg != Color::Reset {
                    *dst = src.clone();
                } else if src.symbol() != " " {
                    dst.set_symbol(src.symbol());
                    dst.fg = src.fg;
                    dst.modifier = src.modifier;
                }
            }
        }
    }
}

// One pass of the painter measures, a second one paints into the buffer.
type Target<'a, 'b> = Option<(&'a mut Buffer, &'b mut Option<Rect>)>;

struct Painter<'t> {
    tree: &'t VisualTree,
    width: u16,
    icons: IconStyle,
    content: Rect,
    backdrop_mid: Rgb,
}

impl<'t> Painter<'t> {
    fn new(tree: &'t VisualTree, width: u16, icons: IconStyle) -> Self {
        let content_width = width
            .min(CONTENT_MAX_WIDTH)
            .saturating_sub(SIDE_MARGIN * 2)
            .max(1);
        let content = Rect::new(center_offset(content_width, width), 0, content_width, 0);
        let backdrop_mid = tree
            .page()
            .and_then(|page| page.style.gradient)
            .map(Gradient::midpoint)
            .unwrap_or(Rgb(0, 0, 0));
        Self {
            tree,
            width,
            icons,
            content,
            backdrop_mid,
        }
    }

    fn fill(&self, fill: Option<Fill>) -> Color {
        fill.map(|f| Color::from(f.over(self.backdrop_mid)))
            .unwrap_or(Color::Reset)
    }

    fn fg(node: &VisualNode) -> Style {
        node.style
            .text
            .map(|rgb| Style::default().fg(rgb.into()))
            .unwrap_or_default()
    }

    /// Walks the page's top-level nodes. Returns the total height.
    fn paint(&self, mut target: Target<'_, '_>) -> u16 {
        let mut y = 0;
        for (id, node) in self.tree.child_nodes(self.tree.root()) {
            y = match &node.kind {
                NodeKind::Toggle { icon } => {
                    let label = icon
                        .glyph(self.icons)
                        .map(str::to_string)
                        .unwrap_or_else(|| self.tree.mode().toggle().name().to_string());
                    self.toggle(&mut target, y, node, &label)
                }
                NodeKind::Hero => self.hero(&mut target, y, id),
                NodeKind::Section { kind, heading } => {
                    let y = self.heading(&mut target, y, node, heading);
                    match kind {
                        SectionKind::Projects => self.cards(&mut target, y, id),
                        SectionKind::Skills => self.tiles(&mut target, y, id),
                    }
                }
                _ => y,
            };
        }
        // Bottom padding.
        y + 1
    }

    fn toggle(&self, target: &mut Target<'_, '_>, y: u16, node: &VisualNode, label: &str) -> u16 {
        let text = format!(" {} ", label);
        let width = display_width(&text);
        let x = self.width.saturating_sub(width + SIDE_MARGIN);
        if let Some((buf, toggle)) = target.as_mut() {
            let style = Self::fg(node)
                .bg(self.fill(node.style.fill))
                .add_modifier(Modifier::BOLD);
            put(buf, x, y, &text, width as usize, style);
            **toggle = Some(Rect::new(x, y, width, 1));
        }
        y + 2
    }

    fn hero(&self, target: &mut Target<'_, '_>, mut y: u16, hero: NodeId) -> u16 {
        let area = self.content;
        for (id, node) in self.tree.child_nodes(hero) {
            match &node.kind {
                NodeKind::Heading { text } => {
                    if let Some((buf, _)) = target.as_mut() {
                        let gradient = node.style.gradient;
                        paint_gradient_text(buf, area, y, text, gradient);
                    }
                    y += 2;
                }
                NodeKind::Text { text, role } => {
                    let max = match role {
                        TextRole::Lead => area.width,
                        TextRole::Body => area.width.min(BIO_MAX_WIDTH),
                    };
                    let mut style = Self::fg(node);
                    if *role == TextRole::Lead {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    for line in TextWrapper::wrap(text, max as usize) {
                        if let Some((buf, _)) = target.as_mut() {
                            paint_centered(buf, area, y, &line, style);
                        }
                        y += 1;
                    }
                    y += 1;
                }
                NodeKind::IconRow => {
                    let icons: Vec<(String, Style)> = self
                        .tree
                        .child_nodes(id)
                        .filter_map(|(_, child)| match child.kind {
                            NodeKind::Icon { icon } => Some((
                                icon.glyph(self.icons).unwrap_or(icon.name()).to_string(),
                                Self::fg(child),
                            )),
                            _ => None,
                        })
                        .collect();
                    if !icons.is_empty() {
                        if let Some((buf, _)) = target.as_mut() {
                            let row: Vec<&str> = icons.iter().map(|(s, _)| s.as_str()).collect();
                            let line = row.join("   ");
                            let style = icons[0].1.add_modifier(Modifier::BOLD);
                            paint_centered(buf, area, y, &line, style);
                        }
                        y += 1;
                    }
                    y += 1;
                }
                _ => {}
            }
        }
        y
    }

    fn heading(&self, target: &mut Target<'_, '_>, y: u16, node: &VisualNode, text: &str) -> u16 {
        let y = y + 1;
        if let Some((buf, _)) = target.as_mut() {
            let style = Self::fg(node).add_modifier(Modifier::BOLD);
            paint_centered(buf, self.content, y, text, style);
        }
        y + 2
    }

    fn card_columns(&self, count: usize) -> u16 {
        if self.width >= WIDE_LAYOUT_MIN_WIDTH {
            count.clamp(1, 3) as u16
        } else {
            1
        }
    }

    fn card_model(&self, id: NodeId, node: &VisualNode, inner_width: usize) -> Option<CardModel> {
        let NodeKind::Card { title, description } = &node.kind else {
            return None;
        };
        let mut award = Vec::new();
        let mut award_style = Style::default();
        let mut bullets = Vec::new();
        let mut muted = Self::fg(node);
        for (_, child) in self.tree.child_nodes(id) {
            match &child.kind {
                NodeKind::AwardBadge { label } => {
                    let text = match AWARD_ICON.glyph(self.icons) {
                        Some(glyph) => format!("{} {}", glyph, label),
                        None => label.clone(),
                    };
                    award = TextWrapper::fit(&text, inner_width.saturating_sub(2))
                        .into_iter()
                        .map(|line| format!(" {} ", line))
                        .collect();
                    award_style = Self::fg(child).bg(self.fill(child.style.fill));
                }
                NodeKind::Bullet { text } => {
                    muted = Self::fg(child);
                    bullets.extend(TextWrapper::wrap_hanging("• ", text, inner_width));
                }
                _ => {}
            }
        }
        Some(CardModel {
            title: TextWrapper::fit(title, inner_width),
            award,
            description: TextWrapper::fit(description, inner_width),
            bullets,
            fill: self.fill(node.style.fill),
            text: Self::fg(node),
            muted,
            award_style,
        })
    }

    fn cards(&self, target: &mut Target<'_, '_>, mut y: u16, section: NodeId) -> u16 {
        let nodes: Vec<(NodeId, &VisualNode)> = self
            .tree
            .child_nodes(section)
            .filter(|(_, n)| matches!(n.kind, NodeKind::Card { .. }))
            .collect();
        if nodes.is_empty() {
            return y;
        }

        let columns = self.card_columns(nodes.len());
        let card_width =
            (self.content.width.saturating_sub(CARD_GAP * (columns - 1)) / columns).max(6);
        // Border plus one column of padding on each side.
        let inner_width = card_width.saturating_sub(4).max(1) as usize;
        let cards: Vec<CardModel> = nodes
            .iter()
            .filter_map(|(id, node)| self.card_model(*id, node, inner_width))
            .collect();

        for (row_index, row) in cards.chunks(columns as usize).enumerate() {
            if row_index > 0 {
                y += 1;
            }
            let height = row.iter().map(card_height).max().unwrap_or(0);
            if let Some((buf, _)) = target.as_mut() {
                let row_width = card_width * row.len() as u16 + CARD_GAP * (row.len() as u16 - 1);
                let mut x = self.content.x + center_offset(row_width, self.content.width);
                for card in row {
                    paint_card(buf, Rect::new(x, y, card_width, height), card);
                    x += card_width + CARD_GAP;
                }
            }
            y += height;
        }
        y
    }

    fn tiles(&self, target: &mut Target<'_, '_>, mut y: u16, section: NodeId) -> u16 {
        let tiles: Vec<TileModel> = self
            .tree
            .child_nodes(section)
            .filter_map(|(_, node)| match &node.kind {
                NodeKind::SkillTile { icon, label } => Some(TileModel {
                    glyph: icon.glyph(self.icons),
                    label: TextWrapper::fit(label, TILE_WIDTH as usize - 2),
                    fill: self.fill(node.style.fill),
                    text: Self::fg(node),
                }),
                _ => None,
            })
            .collect();
        if tiles.is_empty() {
            return y;
        }

        let tile_height = tile_height(&tiles);
        let per_row = ((self.content.width + TILE_GAP) / (TILE_WIDTH + TILE_GAP)).max(1) as usize;
        for (row_index, row) in tiles.chunks(per_row).enumerate() {
            if row_index > 0 {
                y += 1;
            }
            if let Some((buf, _)) = target.as_mut() {
                let count = row.len() as u16;
                let row_width = TILE_WIDTH * count + TILE_GAP * (count - 1);
                let mut x = self.content.x + center_offset(row_width, self.content.width);
                for tile in row {
                    paint_tile(buf, Rect::new(x, y, TILE_WIDTH, tile_height), tile);
                    x += TILE_WIDTH + TILE_GAP;
                }
            }
            y += tile_height;
        }
        y
    }
}

fn card_height(card: &CardModel) -> u16 {
    let mut lines = card.title.len() + card.award.len() + 1 + card.description.len();
    if !card.bullets.is_empty() {
        lines += 1 + card.bullets.len();
    }
    // Borders.
    (lines + 2) as u16
}

// Every tile shares one size: borders, the glyph row and the longest label.
fn tile_height(tiles: &[TileModel]) -> u16 {
    let label_lines = tiles.iter().map(|t| t.label.len()).max().unwrap_or(1).max(1);
    TILE_HEIGHT.max(3 + label_lines as u16)
}

fn surface(fill: Color, text: Style) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .style(text.bg(fill))
}

fn paint_card(buf: &mut Buffer, area: Rect, card: &CardModel) {
    let block = surface(card.fill, card.text);
    let inner = block.inner(area);
    block.render(area, buf);

    let inner = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );
    let width = inner.width as usize;
    let mut y = inner.y;
    let text = card.text.bg(card.fill);
    let muted = card.muted.bg(card.fill);
    let title_style = text.add_modifier(Modifier::BOLD);
    for line in &card.title {
        put(buf, inner.x, y, line, width, title_style);
        y += 1;
    }
    for line in &card.award {
        put(buf, inner.x, y, line, width, card.award_style);
        y += 1;
    }
    y += 1;
    for line in &card.description {
        put(buf, inner.x, y, line, width, text);
        y += 1;
    }
    if !card.bullets.is_empty() {
        y += 1;
        for line in &card.bullets {
            put(buf, inner.x, y, line, width, muted);
            y += 1;
        }
    }
}

fn paint_tile(buf: &mut Buffer, area: Rect, tile: &TileModel) {
    let block = surface(tile.fill, tile.text);
    let inner = block.inner(area);
    block.render(area, buf);

    let text = tile.text.bg(tile.fill);
    // A missing glyph leaves its row empty; the label is always shown.
    if let Some(glyph) = tile.glyph {
        paint_centered(buf, inner, inner.y, glyph, text.add_modifier(Modifier::BOLD));
    }
    for (i, line) in tile.label.iter().enumerate() {
        paint_centered(buf, inner, inner.y + 1 + i as u16, line, text);
    }
}

// Writes `text` and re-applies the background over the whole span. ratatui
// resets the cells behind a wide glyph, which would otherwise read as
// transparent when blitted.
fn put(buf: &mut Buffer, x: u16, y: u16, text: &str, width: usize, style: Style) {
    let (end, _) = buf.set_stringn(x, y, text, width, style);
    if let Some(bg) = style.bg {
        buf.set_style(Rect::new(x, y, end.saturating_sub(x), 1), Style::default().bg(bg));
    }
}

fn paint_centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    let x = area.x + center_offset(display_width(text), area.width);
    put(buf, x, y, text, area.width as usize, style);
}

fn paint_gradient_text(buf: &mut Buffer, area: Rect, y: u16, text: &str, gradient: Option<Gradient>) {
    let count = text.chars().count();
    let mut x = area.x + center_offset(display_width(text), area.width);
    for (i, ch) in text.chars().enumerate() {
        let t = if count > 1 {
            i as f32 / (count - 1) as f32
        } else {
            0.0
        };
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if let Some(gradient) = gradient {
            style = style.fg(gradient.at(t).into());
        }
        let mut tmp = [0u8; 4];
        let (next_x, _) = buf.set_stringn(x, y, ch.encode_utf8(&mut tmp), 2, style);
        x = next_x;
    }
}
