//! chartable: headless UI building blocks for single-page applications.
//!
//! The crate covers line-chart path projection, a sortable table model,
//! draggable positioning with scoped pointer hooks, and a static route
//! table. Components emit backend-agnostic element trees; the host owns
//! the DOM, event dispatch and navigation.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod router;
pub mod table;
pub mod telemetry;

pub use api::{LineChart, LineChartConfig, SortableTable, TableConfig};
pub use error::{WidgetError, WidgetResult};
