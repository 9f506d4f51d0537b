//! Axis layout derived from the current scales.
//!
//! Axes are rebuilt from scratch on every pass; nothing is carried over from the previous
//! layout, so ticks, gridlines and the caption always match the scale ranges.

use crate::data_types::{ChartConfig, LabelTransform, TextAnchor, Viewport};
use crate::scales::ScaleModel;
use crate::utils::format_number;

/// Outer tick length plus label padding, in pixels.
pub const TICK_LABEL_GAP: f32 = 9.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ValueTick {
    pub value: f64,
    /// Plot-local x.
    pub position: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTick {
    pub category: String,
    /// Plot-local y of the band centre.
    pub position: f32,
}

/// Bottom axis: sits on the plot floor, gridlines run up the full plot height.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueAxis {
    pub y: f32,
    pub length: f32,
    /// Signed gridline length; negative points up.
    pub gridline: f32,
    pub ticks: Vec<ValueTick>,
    pub label_transform: LabelTransform,
}

/// Left axis: one tick per category, labels unrotated.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryAxis {
    pub length: f32,
    pub ticks: Vec<CategoryTick>,
    pub label_transform: LabelTransform,
}

/// Axis caption in its own frame (`x`, `y` before `rotate`), like an SVG text node.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisCaption {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub rotate: f32,
}

impl AxisCaption {
    /// Plot-local point the caption is centred on once rotated.
    pub fn screen_position(&self) -> (f32, f32) {
        let (sin, cos) = self.rotate.to_radians().sin_cos();
        (self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
    /// Plot-local point for a caption drawn without rotation: inside the top margin,
    /// right-aligned with the category labels so the two never overlap.
    pub fn level_position(viewport: &Viewport) -> (f32, f32) {
        (-TICK_LABEL_GAP, -viewport.margins.top / 2.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayer {
    pub value_axis: ValueAxis,
    pub category_axis: CategoryAxis,
    pub caption: Option<AxisCaption>,
}

pub struct AxisRenderer;

impl AxisRenderer {
    pub fn render_axes(
        scales: &ScaleModel,
        viewport: &Viewport,
        config: &ChartConfig,
        caption: Option<&str>,
    ) -> AxisLayer {
        let ticks = scales
            .value
            .ticks(config.value_ticks)
            .into_iter()
            .map(|value| ValueTick {
                value,
                position: scales.value.map(value),
                label: format_number(value),
            })
            .collect();

        let value_axis = ValueAxis {
            y: viewport.height,
            length: viewport.width,
            gridline: -viewport.height,
            ticks,
            label_transform: config.value_label,
        };

        let category_axis = CategoryAxis {
            length: viewport.height,
            ticks: scales
                .category
                .domain()
                .iter()
                .filter_map(|category| {
                    scales.category.center(category).map(|position| CategoryTick {
                        category: category.clone(),
                        position,
                    })
                })
                .collect(),
            label_transform: LabelTransform {
                anchor: TextAnchor::End,
                ..LabelTransform::NONE
            },
        };

        let caption = caption.map(|text| AxisCaption {
            text: text.to_string(),
            x: -viewport.height / 2.0,
            y: config.caption_offset,
            rotate: -90.0,
        });

        AxisLayer {
            value_axis,
            category_axis,
            caption,
        }
    }
}
