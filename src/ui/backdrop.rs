use crate::ambient::OrbSample;
use crate::theme::{Fill, Gradient};
use crate::tree::{NodeKind, VisualTree};
use ratatui::{buffer::Buffer, layout::Rect};

// Orb radius in columns at scale 1. Rows are roughly twice as tall as
// columns are wide, so the vertical radius is halved.
const ORB_RADIUS: f32 = 9.0;

/// Paints the page gradient (135°, top-left to bottom-right) and the orb
/// glow over `area`.
pub fn paint(buf: &mut Buffer, area: Rect, tree: &VisualTree, orbs: &[OrbSample]) {
    let Some(gradient) = tree.page().and_then(|page| page.style.gradient) else {
        return;
    };
    let orb_fill = tree
        .find_top(|k| matches!(k, NodeKind::Backdrop))
        .and_then(|(_, node)| node.style.fill);

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let color = backdrop_color(area, x, y, gradient, orb_fill, orbs);
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.reset();
                cell.set_bg(color.into());
            }
        }
    }
}

fn backdrop_color(
    area: Rect,
    x: u16,
    y: u16,
    gradient: Gradient,
    orb_fill: Option<Fill>,
    orbs: &[OrbSample],
) -> crate::theme::Rgb {
    let fx = fraction(x - area.x, area.width);
    let fy = fraction(y - area.y, area.height);
    let mut color = gradient.at((fx + fy) / 2.0);

    if let Some(fill) = orb_fill {
        for orb in orbs {
            let cx = orb.x * area.width as f32;
            let cy = orb.y * area.height as f32;
            let rx = ORB_RADIUS * orb.scale;
            let ry = rx / 2.0;
            let dx = ((x - area.x) as f32 - cx) / rx;
            let dy = ((y - area.y) as f32 - cy) / ry;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance < 1.0 {
                let glow = Fill::translucent(fill.rgb, fill.alpha * (1.0 - distance));
                color = glow.over(color);
            }
        }
    }

    color
}

fn fraction(offset: u16, extent: u16) -> f32 {
    if extent <= 1 {
        0.0
    } else {
        offset as f32 / (extent - 1) as f32
    }
}
