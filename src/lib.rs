//! gpui_bar_chart: a ranked horizontal bar chart for GPUI

pub mod axis_renderer;
pub mod bar_chart_view;
pub mod captions;
pub mod data_source;
pub mod data_types;
pub mod error;
#[cfg(feature = "polars")]
pub mod polars_source;
pub mod rendering;
pub mod responsive;
pub mod scales;
pub mod scene;
pub mod session;
pub mod theme;
pub mod tooltip;
pub mod utils;

pub use bar_chart_view::BarChartView;
pub use captions::{CaptionKey, CaptionProvider, StaticCaptions};
pub use data_source::{DataSource, VecDataSource};
pub use data_types::{ChartConfig, ContainerSize, Row, RowSet, Viewport};
pub use error::ChartError;
#[cfg(feature = "polars")]
pub use polars_source::CsvDataSource;
pub use scales::ScaleModel;
pub use session::ChartSession;
