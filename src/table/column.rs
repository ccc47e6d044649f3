use serde::{Deserialize, Serialize};

/// Requested ordering for a sort action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Per-column sort tag. At most one column of a projection is non-`Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortState {
    #[default]
    Normal,
    Asc,
    Desc,
}

impl SortState {
    #[must_use]
    pub fn direction(self) -> Option<SortDirection> {
        match self {
            Self::Normal => None,
            Self::Asc => Some(SortDirection::Asc),
            Self::Desc => Some(SortDirection::Desc),
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self != Self::Normal
    }
}

impl From<SortDirection> for SortState {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Self::Asc,
            SortDirection::Desc => Self::Desc,
        }
    }
}

/// Host-supplied column definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub sortable: bool,
}

impl ColumnDescriptor {
    #[must_use]
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: false,
        }
    }

    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Materialized column: descriptor plus positional index and sort tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub key: String,
    pub title: String,
    pub sortable: bool,
    pub index: usize,
    pub sort_state: SortState,
}

/// Attaches `{index, sort_state: Normal}` to each descriptor, preserving order.
#[must_use]
pub fn materialize_columns(columns: &[ColumnDescriptor]) -> Vec<Column> {
    columns
        .iter()
        .enumerate()
        .map(|(index, descriptor)| Column {
            key: descriptor.key.clone(),
            title: descriptor.title.clone(),
            sortable: descriptor.sortable,
            index,
            sort_state: SortState::Normal,
        })
        .collect()
}
