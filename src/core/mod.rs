pub mod line_series;
pub mod scale;
pub mod types;

pub use line_series::{ChartScales, LinePath, LinePoint, project_line_path};
pub use scale::LinearScale;
pub use types::{BoxSize, Dimension, MIN_SURFACE_EXTENT, SurfaceSize};
