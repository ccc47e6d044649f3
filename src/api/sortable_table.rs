use tracing::{debug, warn};

use crate::error::WidgetResult;
use crate::render::{Element, ElementAction, Renderer};
use crate::table::{
    Column, ColumnDescriptor, Row, RowRecord, SortDirection, SortState, TableProjection,
    parse_rows_json,
};

use super::observer::ObserverSet;
use super::{Invalidation, TableConfig, WidgetEvent, WidgetObserver};

const ASC_GLYPH: &str = "\u{2191}";
const DESC_GLYPH: &str = "\u{2193}";
const ACTIVE_CLASS: &str = "on";

/// Sortable table component.
///
/// Holds a materialized projection of host columns/rows and keeps one
/// active sort across row replacements.
#[derive(Debug, Default)]
pub struct SortableTable {
    projection: TableProjection,
    observers: ObserverSet,
}

impl SortableTable {
    #[must_use]
    pub fn new(columns: &[ColumnDescriptor], rows: &[RowRecord]) -> Self {
        let projection = TableProjection::new(columns, rows);
        debug!(
            columns = projection.columns().len(),
            rows = projection.rows().len(),
            "sortable table mounted"
        );
        Self {
            projection,
            observers: ObserverSet::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &TableConfig) -> Self {
        Self::new(&config.columns, &config.rows)
    }

    pub fn add_observer(&mut self, observer: impl WidgetObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub fn projection(&self) -> &TableProjection {
        &self.projection
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        self.projection.columns()
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        self.projection.rows()
    }

    #[must_use]
    pub fn active_sort(&self) -> Option<(usize, SortDirection)> {
        self.projection.active_sort()
    }

    /// Replaces the column set; sort tags reset, row order is kept.
    pub fn set_columns(&mut self, columns: &[ColumnDescriptor]) -> Invalidation {
        self.projection.replace_columns(columns);
        self.observers
            .emit(WidgetEvent::ColumnsReplaced { len: columns.len() });
        self.observers.request_redraw(Invalidation::Full)
    }

    /// Replaces the source rows and re-applies the active sort before returning.
    pub fn set_rows(&mut self, rows: &[RowRecord]) -> Invalidation {
        let resorted = self.projection.replace_rows(rows);
        self.observers
            .emit(WidgetEvent::DataUpdated { len: rows.len() });
        if let Some((column, direction)) = resorted {
            self.observers.emit(WidgetEvent::Sorted { column, direction });
        }
        self.observers.request_redraw(Invalidation::Full)
    }

    /// Parses a JSON array of records and applies it like [`Self::set_rows`].
    pub fn set_rows_json(&mut self, json: &str) -> WidgetResult<Invalidation> {
        let rows = parse_rows_json(json).inspect_err(|err| {
            warn!(error = %err, "rejected table rows; keeping previous rows");
        })?;
        Ok(self.set_rows(&rows))
    }

    pub fn sort(&mut self, column: usize, direction: SortDirection) -> WidgetResult<Invalidation> {
        self.projection.sort(column, direction).inspect_err(|err| {
            warn!(error = %err, "ignored sort request");
        })?;
        self.observers.emit(WidgetEvent::Sorted { column, direction });
        Ok(self.observers.request_redraw(Invalidation::Full))
    }

    /// Dispatches a click binding produced by [`Self::render`].
    pub fn handle_click(&mut self, action: ElementAction) -> WidgetResult<Invalidation> {
        match action {
            ElementAction::Sort { column, direction } => self.sort(column, direction),
        }
    }

    /// Builds `table > (thead > tr > th*) + (tbody > tr* > td*)`.
    #[must_use]
    pub fn render(&self) -> Element {
        let header_cells = self.columns().iter().map(header_cell);
        let head = Element::new("thead").with_child(Element::new("tr").with_children(header_cells));

        let body_rows = self.rows().iter().map(|row| {
            Element::new("tr").with_children(self.columns().iter().map(|column| {
                let text = row.get(&column.key).map(ToString::to_string).unwrap_or_default();
                Element::new("td").with_text(text)
            }))
        });
        let body = Element::new("tbody").with_children(body_rows);

        Element::new("table").with_child(head).with_child(body)
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R) -> WidgetResult<()> {
        renderer.render(&self.render())
    }
}

fn header_cell(column: &Column) -> Element {
    if !column.sortable {
        return Element::new("th").with_text(column.title.clone());
    }

    Element::new("th")
        .with_child(Element::new("span").with_text(column.title.clone()))
        .with_child(sort_toggle(column, SortDirection::Asc))
        .with_child(sort_toggle(column, SortDirection::Desc))
}

fn sort_toggle(column: &Column, direction: SortDirection) -> Element {
    let glyph = match direction {
        SortDirection::Asc => ASC_GLYPH,
        SortDirection::Desc => DESC_GLYPH,
    };
    let mut toggle = Element::new("a").with_text(glyph).on_click(ElementAction::Sort {
        column: column.index,
        direction,
    });
    if column.sort_state == SortState::from(direction) {
        toggle = toggle.with_class(ACTIVE_CLASS);
    }
    toggle
}
