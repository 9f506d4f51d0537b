use std::path::PathBuf;
use std::sync::Arc;

use eyre::{Result, WrapErr};
use gpui::prelude::*;
use gpui::*;
use gpui_bar_chart::data_types::CoercionPolicy;
use gpui_bar_chart::{BarChartView, ChartConfig, CsvDataSource, DataSource, StaticCaptions};

struct LeaderboardApp {
    chart: Entity<BarChartView>,
}

impl LeaderboardApp {
    fn new(
        source: Arc<dyn DataSource>,
        config: ChartConfig,
        captions: StaticCaptions,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let chart = cx.new(|cx| BarChartView::new(source, config, captions, window, cx));
        Self { chart }
    }
}

impl Render for LeaderboardApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div().size_full().bg(gpui::black()).child(self.chart.clone())
    }
}

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/data")
}

fn main() -> Result<()> {
    let dir = data_dir();
    let config = ChartConfig::default();
    let captions_path = dir.join("captions.en.json");
    let captions = std::fs::read_to_string(&captions_path)
        .wrap_err_with(|| format!("reading {}", captions_path.display()))?;
    let captions = StaticCaptions::from_json(&captions).wrap_err("parsing captions")?;

    let source: Arc<dyn DataSource> = Arc::new(
        CsvDataSource::from_path(dir.join("leaderboards_top-games-by-tournaments.csv"))
            .with_policy(CoercionPolicy::Reject),
    );

    Application::new().run(move |cx: &mut App| {
        let opened = cx.open_window(WindowOptions::default(), |window, cx| {
            cx.new(|cx| LeaderboardApp::new(source, config, captions, window, cx))
        });
        if let Err(err) = opened {
            eprintln!("failed to open window: {err}");
            cx.quit();
        }
    });
    Ok(())
}
