use eframe::egui::{Color32, Painter, Pos2, Rect, Shape, Stroke};

use crate::scene::ViewportTransform;
use crate::scene::theme::Palette;

const ARROW_LENGTH: f32 = 9.0;
const ARROW_HALF_WIDTH: f32 = 4.0;

pub(super) fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

pub(super) fn draw_background(
    painter: &Painter,
    rect: Rect,
    viewport: &ViewportTransform,
    palette: &Palette,
) {
    painter.rect_filled(rect, 0.0, palette.background);

    let step = (56.0 * viewport.scale).max(20.0);
    let origin = rect.min + viewport.translate;
    let stroke = Stroke::new(1.0, palette.grid);

    let mut x = rect.left() + (origin.x - rect.left()).rem_euclid(step);
    while x < rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        x += step;
    }

    let mut y = rect.top() + (origin.y - rect.top()).rem_euclid(step);
    while y < rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        y += step;
    }
}

pub(super) fn draw_arrow(painter: &Painter, from: Pos2, to: Pos2, stroke: Stroke) {
    let delta = to - from;
    let length = delta.length();
    if length <= f32::EPSILON {
        return;
    }

    let direction = delta / length;
    let head = ARROW_LENGTH.min(length * 0.5) * (0.6 + stroke.width * 0.25);
    let base = to - direction * head;
    let normal = direction.rot90() * ARROW_HALF_WIDTH * (0.6 + stroke.width * 0.25);

    painter.line_segment([from, base], stroke);
    painter.add(Shape::convex_polygon(
        vec![to, base + normal, base - normal],
        stroke.color,
        Stroke::NONE,
    ));
}

pub(super) fn circle_visible(rect: Rect, position: Pos2, radius: f32) -> bool {
    !(position.x + radius < rect.left()
        || position.x - radius > rect.right()
        || position.y + radius < rect.top()
        || position.y - radius > rect.bottom())
}
