use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Static texts the chart shows; data never flows through here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaptionKey {
    AxisLabel,
    Footnote,
}

/// Localized text lookup supplied by the host.
pub trait CaptionProvider {
    fn caption(&self, key: CaptionKey) -> Option<String>;
}

/// Fixed caption table, usually deserialized from one locale's translation file.
/// Keys other than `axis_label` and `footnote` are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticCaptions {
    pub axis_label: Option<String>,
    pub footnote: Option<String>,
}

impl StaticCaptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: CaptionKey, text: impl Into<String>) -> Self {
        let text = Some(text.into());
        match key {
            CaptionKey::AxisLabel => self.axis_label = text,
            CaptionKey::Footnote => self.footnote = text,
        }
        self
    }

    pub fn from_json(text: &str) -> Result<Self, ChartError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl CaptionProvider for StaticCaptions {
    fn caption(&self, key: CaptionKey) -> Option<String> {
        match key {
            CaptionKey::AxisLabel => self.axis_label.clone(),
            CaptionKey::Footnote => self.footnote.clone(),
        }
    }
}
