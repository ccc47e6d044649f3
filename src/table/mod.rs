//! Row/column projection with single-column sort state.
//!
//! The projection owns materialized copies of host data; the host keeps
//! its own column and row sources untouched.

mod cell;
mod column;
mod row;

pub use cell::{CellValue, compare_cells};
pub use column::{Column, ColumnDescriptor, SortDirection, SortState, materialize_columns};
pub use row::{Row, RowRecord, deserialize_rows, materialize_rows, parse_rows_json};

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{WidgetError, WidgetResult};

/// Live columns and rows as rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableProjection {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl TableProjection {
    #[must_use]
    pub fn new(columns: &[ColumnDescriptor], rows: &[RowRecord]) -> Self {
        Self {
            columns: materialize_columns(columns),
            rows: materialize_rows(rows),
        }
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Replaces the column set. All sort tags start at `Normal`.
    pub fn replace_columns(&mut self, columns: &[ColumnDescriptor]) {
        self.columns = materialize_columns(columns);
    }

    /// Replaces the rows and re-applies the active sort, if any.
    ///
    /// Returns the sort that was re-applied.
    pub fn replace_rows(&mut self, rows: &[RowRecord]) -> Option<(usize, SortDirection)> {
        self.rows = materialize_rows(rows);
        let active = self.active_sort()?;
        self.sort_rows(active.0, active.1);
        debug!(
            column = active.0,
            direction = ?active.1,
            rows = self.rows.len(),
            "re-applied active sort to replaced rows"
        );
        Some(active)
    }

    /// Column index and direction of the active sort.
    ///
    /// If more than one column carries a non-normal tag, the lowest index wins.
    #[must_use]
    pub fn active_sort(&self) -> Option<(usize, SortDirection)> {
        self.columns
            .iter()
            .find_map(|column| column.sort_state.direction().map(|dir| (column.index, dir)))
    }

    /// Marks `column_index` as the sole sorted column and reorders rows.
    pub fn sort(&mut self, column_index: usize, direction: SortDirection) -> WidgetResult<()> {
        if column_index >= self.columns.len() {
            return Err(WidgetError::ColumnOutOfRange {
                index: column_index,
                len: self.columns.len(),
            });
        }

        for column in &mut self.columns {
            column.sort_state = SortState::Normal;
        }
        self.columns[column_index].sort_state = SortState::from(direction);
        self.sort_rows(column_index, direction);

        debug!(
            column = column_index,
            key = %self.columns[column_index].key,
            direction = ?direction,
            rows = self.rows.len(),
            "sorted table rows"
        );
        Ok(())
    }

    /// Overrides one column's tag without reordering rows.
    ///
    /// Hosts restoring persisted UI state use this; it does not enforce the
    /// single-active-column invariant, which `active_sort` tolerates.
    pub fn set_sort_state(&mut self, column_index: usize, state: SortState) -> WidgetResult<()> {
        let len = self.columns.len();
        let column = self
            .columns
            .get_mut(column_index)
            .ok_or(WidgetError::ColumnOutOfRange {
                index: column_index,
                len,
            })?;
        column.sort_state = state;
        Ok(())
    }

    fn sort_rows(&mut self, column_index: usize, direction: SortDirection) {
        let key = self.columns[column_index].key.as_str();
        // `sort_by` is stable: equal keys keep their previous relative order.
        self.rows.sort_by(|a, b| {
            let ordering = compare_cells(a.get(key), b.get(key));
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }
}

/// Checks that rows read in order under `key` respect `direction`.
#[must_use]
pub fn is_sorted_by(rows: &[Row], key: &str, direction: SortDirection) -> bool {
    rows.windows(2).all(|pair| {
        let ordering = compare_cells(pair[0].get(key), pair[1].get(key));
        match direction {
            SortDirection::Asc => ordering != Ordering::Greater,
            SortDirection::Desc => ordering != Ordering::Less,
        }
    })
}
