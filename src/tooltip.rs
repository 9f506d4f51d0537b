//! Hover annotation for bars. At most one tooltip is visible at a time.

use std::rc::Rc;

use crate::data_types::Viewport;
use crate::scene::{BarElement, ElementId, PointerEvent, Scene};
use crate::utils::format_grouped;

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub title: String,
    pub body: String,
}

impl TooltipContent {
    pub fn for_bar(bar: &BarElement) -> Self {
        Self {
            title: bar.datum().category.clone(),
            body: format_grouped(bar.datum().value),
        }
    }
}

/// A visible tooltip, anchored at the point its box hangs above (container coordinates).
#[derive(Clone, Debug, PartialEq)]
pub struct ShownTooltip {
    pub target: ElementId,
    pub content: TooltipContent,
    pub anchor: (f32, f32),
}

#[derive(Debug)]
pub struct TooltipController {
    shown: Option<ShownTooltip>,
    viewport: Viewport,
    /// `[dy, dx]`
    offset: [f32; 2],
}

impl TooltipController {
    pub fn new(offset: [f32; 2]) -> Self {
        Self {
            shown: None,
            viewport: Viewport::default(),
            offset,
        }
    }

    /// Binds show/hide to the bar. Called once per bar, when it is created.
    pub fn attach(&self, bar: &mut BarElement) {
        bar.on(
            PointerEvent::Enter,
            Rc::new(|bar: &BarElement, tip: &mut TooltipController| tip.show(bar)),
        );
        bar.on(
            PointerEvent::Leave,
            Rc::new(|_: &BarElement, tip: &mut TooltipController| tip.hide()),
        );
    }

    /// Shows the tooltip for `bar`, replacing any tooltip already shown.
    pub fn show(&mut self, bar: &BarElement) {
        self.shown = Some(ShownTooltip {
            target: bar.id(),
            content: TooltipContent::for_bar(bar),
            anchor: self.anchor_for(bar),
        });
    }

    /// Hides the tooltip. No-op when nothing is shown.
    pub fn hide(&mut self) {
        self.shown = None;
    }

    pub fn shown(&self) -> Option<&ShownTooltip> {
        self.shown.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    /// Follows the target after a render pass: re-anchors it, or hides if it was removed.
    pub fn sync(&mut self, scene: &Scene, viewport: Viewport) {
        self.viewport = viewport;
        let Some(shown) = self.shown.as_ref() else {
            return;
        };
        match scene.get(shown.target) {
            Some(bar) => self.show(bar),
            None => self.hide(),
        }
    }

    fn anchor_for(&self, bar: &BarElement) -> (f32, f32) {
        let (x, y) = bar.geometry.top_center();
        let (x, y) = self.viewport.to_container(x, y);
        (x + self.offset[1], y + self.offset[0])
    }
}
