use serde::{Deserialize, Serialize};

/// Fixed space around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 60.0,
            left: 190.0,
        }
    }
}

/// Bounding box of the hosting container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
}

impl ContainerSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Plotting rectangle left after the margins are taken off the container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl Viewport {
    /// A container smaller than its margins yields an empty (zero-sized) plot area.
    pub fn from_container(container: ContainerSize, margins: Margins) -> Self {
        Self {
            width: (container.width - margins.left - margins.right).max(0.0),
            height: (container.height - margins.top - margins.bottom).max(0.0),
            margins,
        }
    }

    /// Converts a container-local point into plot-local coordinates.
    pub fn to_plot(&self, x: f32, y: f32) -> (f32, f32) {
        (x - self.margins.left, y - self.margins.top)
    }

    /// Converts a plot-local point into container-local coordinates.
    pub fn to_container(&self, x: f32, y: f32) -> (f32, f32) {
        (x + self.margins.left, y + self.margins.top)
    }
}
