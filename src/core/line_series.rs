use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, SurfaceSize};
use crate::error::{WidgetError, WidgetResult};

/// Series length above which the `parallel-projection` feature maps
/// samples on the rayon pool.
#[cfg(feature = "parallel-projection")]
pub const PARALLEL_PROJECTION_THRESHOLD: usize = 16_384;

/// Projected path vertex in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
}

/// Index and value scales derived from one sample series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ChartScales {
    /// Builds both scales from scratch for the current data extent.
    ///
    /// x: `[0, len - 1] -> [0, width]`, y: `[min(0, data_min), data_max] -> [0, height]`.
    /// Empty data degrades to `[0, 0]` on both axes.
    pub fn from_samples(samples: &[f64], size: SurfaceSize) -> WidgetResult<Self> {
        let (min, max) = sample_extent(samples)?.unwrap_or((0.0, 0.0));
        let last_index = samples.len().saturating_sub(1) as f64;

        Ok(Self {
            x: LinearScale::new((0.0, last_index), (0.0, size.width()))?,
            y: LinearScale::new((min.min(0.0), max), (0.0, size.height()))?,
        })
    }

    #[must_use]
    pub fn project(self, index: usize, value: f64) -> LinePoint {
        LinePoint {
            x: self.x.map(index as f64),
            y: self.y.map(value),
        }
    }
}

/// Straight-segment polyline connecting projected samples in index order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinePath {
    pub vertices: Vec<LinePoint>,
}

impl LinePath {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Serializes the path as SVG path data in d3 `line()` layout.
    ///
    /// Returns `None` for an empty path. A lone vertex is closed (`M..Z`)
    /// so renderers still emit a visible dot-sized path.
    #[must_use]
    pub fn to_svg_d(&self) -> Option<String> {
        let (first, rest) = self.vertices.split_first()?;
        let mut d = String::with_capacity(self.vertices.len() * 16);
        let _ = write!(d, "M{},{}", svg_number(first.x), svg_number(first.y));
        for vertex in rest {
            let _ = write!(d, "L{},{}", svg_number(vertex.x), svg_number(vertex.y));
        }
        if rest.is_empty() {
            d.push('Z');
        }
        Some(d)
    }
}

/// Projects a sample series onto `size`.
///
/// The function is deterministic and side-effect free, so rendering and
/// tests consume identical geometry.
pub fn project_line_path(samples: &[f64], size: SurfaceSize) -> WidgetResult<LinePath> {
    let scales = ChartScales::from_samples(samples, size)?;
    Ok(LinePath {
        vertices: project_with(samples, scales),
    })
}

#[cfg(not(feature = "parallel-projection"))]
fn project_with(samples: &[f64], scales: ChartScales) -> Vec<LinePoint> {
    samples
        .iter()
        .enumerate()
        .map(|(index, value)| scales.project(index, *value))
        .collect()
}

#[cfg(feature = "parallel-projection")]
fn project_with(samples: &[f64], scales: ChartScales) -> Vec<LinePoint> {
    use rayon::prelude::*;

    if samples.len() < PARALLEL_PROJECTION_THRESHOLD {
        return samples
            .iter()
            .enumerate()
            .map(|(index, value)| scales.project(index, *value))
            .collect();
    }

    samples
        .par_iter()
        .enumerate()
        .map(|(index, value)| scales.project(index, *value))
        .collect()
}

/// Returns `(min, max)` of the series, `None` when empty.
fn sample_extent(samples: &[f64]) -> WidgetResult<Option<(f64, f64)>> {
    let mut extent: Option<(f64, f64)> = None;
    for (index, value) in samples.iter().copied().enumerate() {
        if !value.is_finite() {
            return Err(WidgetError::InvalidData(format!(
                "sample {index} must be finite, got {value}"
            )));
        }
        extent = Some(match extent {
            Some((min, max)) => (min.min(value), max.max(value)),
            None => (value, value),
        });
    }
    Ok(extent)
}

/// Formats a coordinate the way JavaScript stringifies numbers, folding `-0` into `0`.
fn svg_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    value.to_string()
}
