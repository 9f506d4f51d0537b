//! Retained scene of bar elements and the keyed binder that reconciles it with a row set.
//!
//! A render pass diffs the scene against the rows by category into three disjoint sets
//! (`enter`, `update`, `exit`) and then applies them. Entered bars are created and get their
//! hover listeners; updated bars are patched in place and keep identity and listeners;
//! exited bars are removed.

use std::collections::HashMap;
use std::rc::Rc;

use crate::data_types::{Row, RowSet};
use crate::scales::ScaleModel;
use crate::tooltip::TooltipController;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Bar rectangle in plot-local pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BarGeometry {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    /// Top edge midpoint.
    pub fn top_center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

pub type PointerHandler = Rc<dyn Fn(&BarElement, &mut TooltipController)>;

#[derive(Clone)]
pub struct Listener {
    pub event: PointerEvent,
    pub handler: PointerHandler,
}

/// One on-screen bar, bound to the row with the same category.
#[derive(Clone)]
pub struct BarElement {
    id: ElementId,
    datum: Row,
    pub geometry: BarGeometry,
    listeners: Vec<Listener>,
}

impl BarElement {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.datum.category
    }

    pub fn datum(&self) -> &Row {
        &self.datum
    }

    pub fn on(&mut self, event: PointerEvent, handler: PointerHandler) {
        self.listeners.push(Listener { event, handler });
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    fn place(&mut self, row: &Row, scales: &ScaleModel, inset: f32) {
        self.datum = row.clone();
        self.geometry = bar_geometry(row, scales, inset);
    }
}

impl std::fmt::Debug for BarElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BarElement")
            .field("id", &self.id)
            .field("datum", &self.datum)
            .field("geometry", &self.geometry)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Geometry of the bar for `row` under `scales`.
pub fn bar_geometry(row: &Row, scales: &ScaleModel, inset: f32) -> BarGeometry {
    BarGeometry {
        x: inset,
        y: scales.category.position(&row.category).unwrap_or(0.0),
        width: scales.value.map(row.value),
        height: scales.category.bandwidth(),
    }
}

/// Bars in paint order. Entered bars are appended, so later bars paint on top.
#[derive(Debug, Default)]
pub struct Scene {
    bars: Vec<BarElement>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bars(&self) -> &[BarElement] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&BarElement> {
        self.bars.iter().find(|b| b.id == id)
    }

    pub fn by_key(&self, key: &str) -> Option<&BarElement> {
        self.bars.iter().find(|b| b.key() == key)
    }

    /// Topmost bar containing the plot-local point.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<ElementId> {
        self.bars
            .iter()
            .rev()
            .find(|b| b.geometry.contains(x, y))
            .map(|b| b.id)
    }

    /// Runs the listeners bound to `id` for `event`. Returns false if the element is gone.
    pub fn dispatch(
        &self,
        id: ElementId,
        event: PointerEvent,
        tooltip: &mut TooltipController,
    ) -> bool {
        let Some(bar) = self.get(id) else {
            return false;
        };
        for listener in bar.listeners.iter().filter(|l| l.event == event) {
            (listener.handler)(bar, tooltip);
        }
        true
    }

    fn allocate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Keyed diff between a scene and a row set. The three sets are disjoint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Join {
    /// Row indices with no bar yet.
    pub enter: Vec<usize>,
    /// `(row index, bar index)` pairs that already match.
    pub update: Vec<(usize, usize)>,
    /// Bars whose category is no longer in the rows.
    pub exit: Vec<ElementId>,
}

impl Join {
    /// With duplicate categories the last row for a key wins.
    pub fn compute(scene: &Scene, rows: &RowSet) -> Self {
        let mut last_row_for_key: HashMap<&str, usize> = HashMap::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            last_row_for_key.insert(row.category.as_str(), idx);
        }

        let bar_for_key: HashMap<&str, usize> = scene
            .bars
            .iter()
            .enumerate()
            .map(|(idx, bar)| (bar.key(), idx))
            .collect();

        let mut join = Join::default();
        for (row_idx, row) in rows.iter().enumerate() {
            if last_row_for_key.get(row.category.as_str()) != Some(&row_idx) {
                continue;
            }
            match bar_for_key.get(row.category.as_str()) {
                Some(&bar_idx) => join.update.push((row_idx, bar_idx)),
                None => join.enter.push(row_idx),
            }
        }

        join.exit = scene
            .bars
            .iter()
            .filter(|bar| !last_row_for_key.contains_key(bar.key()))
            .map(|bar| bar.id)
            .collect();

        join
    }
}

/// Counts from one render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
}

pub struct SceneBinder;

impl SceneBinder {
    /// Reconciles `scene` with `rows` under `scales`. Idempotent for unchanged inputs.
    pub fn render(
        scene: &mut Scene,
        rows: &RowSet,
        scales: &ScaleModel,
        inset: f32,
        tooltip: &TooltipController,
    ) -> RenderReport {
        let join = Join::compute(scene, rows);
        let report = RenderReport {
            created: join.enter.len(),
            updated: join.update.len(),
            removed: join.exit.len(),
        };

        for &(row_idx, bar_idx) in &join.update {
            scene.bars[bar_idx].place(&rows.rows()[row_idx], scales, inset);
        }

        if !join.exit.is_empty() {
            scene.bars.retain(|bar| !join.exit.contains(&bar.id));
        }

        for &row_idx in &join.enter {
            let row = &rows.rows()[row_idx];
            let id = scene.allocate_id();
            let mut bar = BarElement {
                id,
                datum: row.clone(),
                geometry: bar_geometry(row, scales, inset),
                listeners: Vec::new(),
            };
            tooltip.attach(&mut bar);
            scene.bars.push(bar);
        }

        tracing::debug!(
            created = report.created,
            updated = report.updated,
            removed = report.removed,
            "bars bound"
        );
        report
    }
}
