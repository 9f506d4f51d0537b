use d3rs::scale::{LinearScale, Scale as D3Scale};

use crate::data_types::{RowSet, Viewport};

/// Linear value-to-pixel mapping, rounded to whole pixels.
#[derive(Clone)]
pub struct ValueScale {
    inner: LinearScale,
    domain: (f64, f64),
    range: (f64, f64),
}

impl ValueScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        let range = (range.0 as f64, range.1 as f64);
        let inner = LinearScale::new()
            .domain(domain.0, domain.1)
            .range(range.0, range.1);
        Self {
            inner,
            domain,
            range,
        }
    }

    fn is_degenerate(&self) -> bool {
        self.domain.1 == self.domain.0
    }

    /// Maps a value to pixels. A zero-width domain maps everything to the range start.
    pub fn map(&self, value: f64) -> f32 {
        if self.is_degenerate() {
            return self.range.0 as f32;
        }
        let res = self.inner.scale(value).round();
        if res.is_nan() || res.is_infinite() {
            self.range.0 as f32
        } else {
            res as f32
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        (self.range.0 as f32, self.range.1 as f32)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if self.is_degenerate() {
            return vec![self.domain.0];
        }
        self.inner.ticks(count)
    }
}

impl PartialEq for ValueScale {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain && self.range == other.range
    }
}

impl std::fmt::Debug for ValueScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueScale")
            .field("domain", &self.domain)
            .field("range", &self.range)
            .finish()
    }
}

/// Ordinal category-to-band mapping with whole-pixel rounding.
///
/// Mirrors a d3 band scale configured with `rangeRound` and a single `padding`: the same
/// fraction is used between bands and at both ends, leftover space is split evenly.
/// A range given high-to-low places the first category at the high end.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f32, f32),
    padding: f32,
    step: f32,
    bandwidth: f32,
    positions: Vec<f32>,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f32, f32), padding: f32) -> Self {
        let padding = padding.clamp(0.0, 1.0);
        let n = domain.len() as f32;
        let reverse = range.1 < range.0;
        let (start, stop) = if reverse {
            (range.1, range.0)
        } else {
            (range.0, range.1)
        };

        let step = ((stop - start) / (n - padding + padding * 2.0).max(1.0)).floor();
        let start = (start + (stop - start - step * (n - padding)) * 0.5).round();
        let bandwidth = (step * (1.0 - padding)).round();

        let mut positions: Vec<f32> = (0..domain.len())
            .map(|i| start + step * i as f32)
            .collect();
        if reverse {
            positions.reverse();
        }

        Self {
            domain,
            range,
            padding,
            step,
            bandwidth,
            positions,
        }
    }

    fn index_of(&self, category: &str) -> Option<usize> {
        self.domain.iter().position(|c| c == category)
    }

    /// Start of the band for `category`, or `None` if it is not in the domain.
    pub fn position(&self, category: &str) -> Option<f32> {
        self.index_of(category).map(|i| self.positions[i])
    }

    pub fn center(&self, category: &str) -> Option<f32> {
        self.position(category).map(|p| p + self.bandwidth / 2.0)
    }

    pub fn bandwidth(&self) -> f32 {
        self.bandwidth
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }
}

/// The pair of scales every render pass draws from.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleModel {
    pub value: ValueScale,
    pub category: BandScale,
}

impl ScaleModel {
    /// Domains come from `rows` only, ranges from `viewport` only.
    pub fn fit(rows: &RowSet, viewport: &Viewport, band_padding: f32) -> Self {
        let value = ValueScale::new((0.0, rows.max_value()), (0.0, viewport.width));
        let category = BandScale::new(
            rows.categories().map(str::to_string).collect(),
            (viewport.height, 0.0),
            band_padding,
        );
        Self { value, category }
    }
}
