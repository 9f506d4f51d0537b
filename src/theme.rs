use gpui::*;

#[derive(Clone, Debug)]
pub struct ChartTheme {
    pub background: Hsla,
    pub bar_gradient_start: Hsla,
    pub bar_gradient_end: Hsla,
    pub grid_line: Hsla,
    pub axis_line: Hsla,
    pub axis_label: Hsla,
    pub axis_label_size: Pixels,
    pub caption: Hsla,
    pub caption_size: Pixels,
    pub tooltip_background: Hsla,
    pub tooltip_title: Hsla,
    pub tooltip_text: Hsla,
    pub tooltip_size: Size<Pixels>,
    pub footnote: Hsla,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: gpui::black(),
            bar_gradient_start: rgb(0x00ffcc).into(),
            bar_gradient_end: rgb(0x12a085).into(),
            grid_line: gpui::white().alpha(0.1),
            axis_line: gpui::white().alpha(0.2),
            axis_label: gpui::white().alpha(0.8),
            axis_label_size: px(11.0),
            caption: gpui::white().alpha(0.6),
            caption_size: px(12.0),
            tooltip_background: gpui::black().alpha(0.8),
            tooltip_title: rgb(0x00ffcc).into(),
            tooltip_text: gpui::white(),
            tooltip_size: size(px(160.0), px(44.0)),
            footnote: gpui::white().alpha(0.5),
        }
    }
}
