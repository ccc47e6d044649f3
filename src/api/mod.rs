//! Host-facing components.
//!
//! Each component takes explicit input calls, recomputes its derived
//! state synchronously and reports an [`Invalidation`] level; observers
//! see the same sequence as [`WidgetEvent`]s.

mod config;
mod invalidation;
mod line_chart;
mod observer;
mod sortable_table;

pub use config::{LineChartConfig, TableConfig};
pub use invalidation::Invalidation;
pub use line_chart::LineChart;
pub use observer::{WidgetEvent, WidgetObserver};
pub use sortable_table::SortableTable;
