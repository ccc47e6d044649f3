use serde::{Deserialize, Serialize};

use crate::core::{Dimension, SurfaceSize};
use crate::error::WidgetResult;
use crate::table::{ColumnDescriptor, RowRecord, deserialize_rows};

/// Line chart inputs as supplied by the host.
///
/// Serializable so hosts can keep widget setup in JSON. `width`/`height`
/// accept numbers or numeric strings and are validated on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    #[serde(default = "default_width")]
    pub width: Dimension,
    #[serde(default = "default_height")]
    pub height: Dimension,
    #[serde(default = "default_fill")]
    pub fill: String,
    #[serde(default = "default_stroke")]
    pub stroke: String,
    #[serde(default)]
    pub data: Vec<f64>,
}

impl LineChartConfig {
    pub fn from_json_str(json: &str) -> WidgetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_data(mut self, data: Vec<f64>) -> Self {
        self.data = data;
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> WidgetResult<Self> {
        let size = SurfaceSize::new(width, height)?;
        self.width = size.width;
        self.height = size.height;
        Ok(self)
    }

    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        SurfaceSize {
            width: self.width,
            height: self.height,
        }
    }
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            fill: default_fill(),
            stroke: default_stroke(),
            data: Vec::new(),
        }
    }
}

fn default_width() -> Dimension {
    SurfaceSize::default().width
}

fn default_height() -> Dimension {
    SurfaceSize::default().height
}

fn default_fill() -> String {
    "none".to_owned()
}

fn default_stroke() -> String {
    "#000000".to_owned()
}

/// Sortable table inputs as supplied by the host.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,
    #[serde(default, deserialize_with = "deserialize_rows")]
    pub rows: Vec<RowRecord>,
}

impl TableConfig {
    pub fn from_json_str(json: &str) -> WidgetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
