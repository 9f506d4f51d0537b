use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::viewport::Margins;

/// What a data source does with a value cell that is not a finite, non-negative number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoercionPolicy {
    /// Drop the record.
    #[default]
    Reject,
    /// Keep the record with a value of zero.
    Zero,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    #[default]
    End,
}

/// Placement of a tick label relative to its tick, SVG-style: translate then rotate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelTransform {
    pub dx: f32,
    pub dy: f32,
    /// Degrees, negative is counter-clockwise.
    pub rotate: f32,
    pub anchor: TextAnchor,
}

impl LabelTransform {
    pub const NONE: Self = Self {
        dx: 0.0,
        dy: 0.0,
        rotate: 0.0,
        anchor: TextAnchor::End,
    };
}

impl Default for LabelTransform {
    fn default() -> Self {
        Self {
            dx: -10.0,
            dy: 10.0,
            rotate: -45.0,
            anchor: TextAnchor::End,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub margins: Margins,
    /// Fraction of the band step left empty between and around bars.
    pub band_padding: f32,
    /// Horizontal offset of every bar from the value axis origin.
    pub bar_inset: f32,
    pub value_ticks: usize,
    pub value_label: LabelTransform,
    /// Caption y offset from the plot origin, before rotation.
    pub caption_offset: f32,
    /// `[dy, dx]` applied to the tooltip anchor.
    pub tooltip_offset: [f32; 2],
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            band_padding: 0.5,
            bar_inset: 1.0,
            value_ticks: 10,
            value_label: LabelTransform::default(),
            caption_offset: -175.0,
            tooltip_offset: [-10.0, 0.0],
        }
    }
}

impl ChartConfig {
    pub fn from_json(text: &str) -> Result<Self, crate::ChartError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading chart config {}", path.display()))?;
        Self::from_json(&text).wrap_err_with(|| format!("parsing chart config {}", path.display()))
    }
}
