//! Chart Session
//!
//! One `ChartSession` per chart instance. It owns everything a render pass needs: the loaded
//! rows, the current viewport and scales, the bar scene, the axis layout and the tooltip.
//! Hosts pass it explicitly to their resize and pointer handlers.

use crate::axis_renderer::{AxisLayer, AxisRenderer};
use crate::captions::{CaptionKey, CaptionProvider};
use crate::data_types::{ChartConfig, ContainerSize, RowSet, Viewport};
use crate::error::ChartError;
use crate::scales::ScaleModel;
use crate::scene::{ElementId, PointerEvent, RenderReport, Scene, SceneBinder};
use crate::tooltip::TooltipController;

#[derive(Debug)]
pub enum SessionPhase {
    Loading,
    Ready,
    Failed(ChartError),
}

pub struct ChartSession {
    config: ChartConfig,
    captions: Box<dyn CaptionProvider>,
    phase: SessionPhase,
    rows: RowSet,
    container: Option<ContainerSize>,
    viewport: Viewport,
    scales: Option<ScaleModel>,
    scene: Scene,
    axes: Option<AxisLayer>,
    tooltip: TooltipController,
    hovered: Option<ElementId>,
}

impl ChartSession {
    pub fn new(config: ChartConfig, captions: impl CaptionProvider + 'static) -> Self {
        let tooltip = TooltipController::new(config.tooltip_offset);
        Self {
            config,
            captions: Box::new(captions),
            phase: SessionPhase::Loading,
            rows: RowSet::default(),
            container: None,
            viewport: Viewport::default(),
            scales: None,
            scene: Scene::new(),
            axes: None,
            tooltip,
            hovered: None,
        }
    }

    /// Completes the one-shot load. Renders right away if the container size is known.
    pub fn finish_load(&mut self, result: Result<RowSet, ChartError>) -> Option<RenderReport> {
        if !matches!(self.phase, SessionPhase::Loading) {
            tracing::warn!("ignoring second load result for an already loaded session");
            return None;
        }

        match result {
            Ok(rows) => {
                tracing::info!(
                    rows = rows.len(),
                    issues = rows.issues().len(),
                    "chart data loaded"
                );
                self.rows = rows;
                self.phase = SessionPhase::Ready;
                self.render()
            }
            Err(err) => {
                tracing::error!("chart data failed to load: {err}");
                self.phase = SessionPhase::Failed(err);
                None
            }
        }
    }

    /// Records a new container box and redraws from freshly fitted scales.
    pub fn resize(&mut self, container: ContainerSize) -> Option<RenderReport> {
        self.container = Some(container);
        self.viewport = Viewport::from_container(container, self.config.margins);
        tracing::debug!(
            width = self.viewport.width,
            height = self.viewport.height,
            "viewport resized"
        );
        self.render()
    }

    /// Full pass: fit scales, bind bars, lay out axes. Does nothing before a successful
    /// load or before the container has been measured.
    pub fn render(&mut self) -> Option<RenderReport> {
        if !self.is_ready() || self.container.is_none() {
            return None;
        }

        let scales = ScaleModel::fit(&self.rows, &self.viewport, self.config.band_padding);
        let report = SceneBinder::render(
            &mut self.scene,
            &self.rows,
            &scales,
            self.config.bar_inset,
            &self.tooltip,
        );

        let caption = self.captions.caption(CaptionKey::AxisLabel);
        self.axes = Some(AxisRenderer::render_axes(
            &scales,
            &self.viewport,
            &self.config,
            caption.as_deref(),
        ));
        self.scales = Some(scales);

        self.tooltip.sync(&self.scene, self.viewport);
        if self.hovered.is_some_and(|id| self.scene.get(id).is_none()) {
            self.hovered = None;
        }
        Some(report)
    }

    /// Pointer moved to a container-local point. Returns true if the hovered bar changed.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> bool {
        let (px, py) = self.viewport.to_plot(x, y);
        let hit = self.scene.hit_test(px, py);
        if hit == self.hovered {
            return false;
        }
        if let Some(old) = self.hovered.take() {
            self.dispatch(old, PointerEvent::Leave);
        }
        if let Some(new) = hit {
            self.dispatch(new, PointerEvent::Enter);
        }
        self.hovered = hit;
        true
    }

    /// Pointer left the container.
    pub fn pointer_left(&mut self) -> bool {
        match self.hovered.take() {
            Some(old) => {
                self.dispatch(old, PointerEvent::Leave);
                true
            }
            None => false,
        }
    }

    /// Delivers a pointer event straight to a bar's listeners.
    pub fn dispatch(&mut self, id: ElementId, event: PointerEvent) -> bool {
        self.scene.dispatch(id, event, &mut self.tooltip)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, SessionPhase::Ready)
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn rows(&self) -> &RowSet {
        &self.rows
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn container(&self) -> Option<ContainerSize> {
        self.container
    }

    pub fn scales(&self) -> Option<&ScaleModel> {
        self.scales.as_ref()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn axes(&self) -> Option<&AxisLayer> {
        self.axes.as_ref()
    }

    pub fn tooltip(&self) -> &TooltipController {
        &self.tooltip
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn footnote(&self) -> Option<String> {
        self.captions.caption(CaptionKey::Footnote)
    }
}
