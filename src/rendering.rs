// Painting of the session's scene and axes onto a GPUI window.

use crate::axis_renderer::{AxisCaption, AxisLayer, TICK_LABEL_GAP};
use crate::data_types::{TextAnchor, Viewport};
use crate::scene::Scene;
use crate::theme::ChartTheme;
use gpui::*;

/// Paints every bar with the theme's horizontal gradient. `origin` is the plot origin.
pub fn paint_bars(window: &mut Window, origin: Point<Pixels>, scene: &Scene, theme: &ChartTheme) {
    for bar in scene.bars() {
        let g = bar.geometry;
        if g.width <= 0.0 || g.height <= 0.0 {
            continue;
        }
        let rect = Bounds::new(
            origin + point(px(g.x), px(g.y)),
            size(px(g.width), px(g.height)),
        );
        window.paint_quad(fill(
            rect,
            linear_gradient(
                90.0,
                linear_color_stop(theme.bar_gradient_start, 0.0),
                linear_color_stop(theme.bar_gradient_end, 1.0),
            ),
        ));
    }
}

fn paint_line(window: &mut Window, from: Point<Pixels>, to: Point<Pixels>, color: Hsla) {
    let mut builder = PathBuilder::stroke(px(1.0));
    builder.move_to(from);
    builder.line_to(to);
    if let Ok(path) = builder.build() {
        window.paint_path(path, color);
    }
}

/// Paints one line of text with `anchor` deciding which edge sits on `at.x`; `at.y` is the
/// vertical centre of the line.
fn paint_label(
    text: &str,
    at: Point<Pixels>,
    anchor: TextAnchor,
    font_size: Pixels,
    color: Hsla,
    window: &mut Window,
    cx: &mut App,
) {
    let run = TextRun {
        len: text.len(),
        font: TextStyle::default().font(),
        color,
        background_color: None,
        underline: None,
        strikethrough: None,
    };

    let Ok(lines) = window.text_system().shape_text(
        SharedString::from(text.to_string()),
        font_size,
        &[run],
        None,
        None,
    ) else {
        return;
    };

    for line in lines {
        let width = line.width();
        let x = match anchor {
            TextAnchor::Start => at.x,
            TextAnchor::Middle => at.x - width / 2.0,
            TextAnchor::End => at.x - width,
        };
        let origin = point(x, at.y - font_size / 2.0);
        let _ = line.paint(origin, font_size, TextAlign::Left, None, window, cx);
    }
}

/// Paints axis lines, gridlines, tick labels and the caption.
///
/// Glyph runs cannot be rotated here, so rotated tick labels keep their translation and
/// anchoring but are drawn level, and the caption moves above the category axis.
pub fn paint_axes(
    window: &mut Window,
    cx: &mut App,
    origin: Point<Pixels>,
    axes: &AxisLayer,
    viewport: &Viewport,
    theme: &ChartTheme,
) {
    let value_axis = &axes.value_axis;
    let floor = origin.y + px(value_axis.y);

    paint_line(
        window,
        point(origin.x, floor),
        point(origin.x + px(value_axis.length), floor),
        theme.axis_line,
    );

    let transform = value_axis.label_transform;
    for tick in &value_axis.ticks {
        let x = origin.x + px(tick.position);
        paint_line(
            window,
            point(x, floor),
            point(x, floor + px(value_axis.gridline)),
            theme.grid_line,
        );
        let label_at = point(
            x + px(transform.dx),
            floor + px(TICK_LABEL_GAP + transform.dy),
        );
        paint_label(
            &tick.label,
            label_at,
            transform.anchor,
            theme.axis_label_size,
            theme.axis_label,
            window,
            cx,
        );
    }

    let category_axis = &axes.category_axis;
    paint_line(
        window,
        origin,
        point(origin.x, origin.y + px(category_axis.length)),
        theme.axis_line,
    );
    for tick in &category_axis.ticks {
        let y = origin.y + px(tick.position);
        paint_line(window, point(origin.x - px(6.0), y), point(origin.x, y), theme.axis_line);
        paint_label(
            &tick.category,
            point(origin.x - px(TICK_LABEL_GAP), y),
            category_axis.label_transform.anchor,
            theme.axis_label_size,
            theme.axis_label,
            window,
            cx,
        );
    }

    if let Some(caption) = &axes.caption {
        let (x, y) = AxisCaption::level_position(viewport);
        paint_label(
            &caption.text,
            origin + point(px(x), px(y)),
            TextAnchor::End,
            theme.caption_size,
            theme.caption,
            window,
            cx,
        );
    }
}
