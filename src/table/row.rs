use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::WidgetResult;
use crate::table::CellValue;

/// Host-supplied record keyed by column key, in insertion order.
pub type RowRecord = IndexMap<String, CellValue>;

/// Materialized row. Identity is `index`, assigned in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub index: usize,
    pub values: RowRecord,
}

impl Row {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.values.get(key)
    }
}

/// Attaches `{index}` to each record in input order.
#[must_use]
pub fn materialize_rows(rows: &[RowRecord]) -> Vec<Row> {
    rows.iter()
        .enumerate()
        .map(|(index, values)| Row {
            index,
            values: values.clone(),
        })
        .collect()
}

/// Parses a JSON array of flat records.
///
/// `null` fields are dropped so they render as empty cells; nested
/// objects and arrays are rejected.
pub fn parse_rows_json(json: &str) -> WidgetResult<Vec<RowRecord>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let rows = deserialize_rows(&mut deserializer)?;
    deserializer.end()?;
    Ok(rows)
}

/// Serde adapter for `Vec<RowRecord>` fields that drops `null` cells.
pub fn deserialize_rows<'de, D>(deserializer: D) -> Result<Vec<RowRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<IndexMap<String, Option<CellValue>>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|record| {
            record
                .into_iter()
                .filter_map(|(key, value)| value.map(|value| (key, value)))
                .collect()
        })
        .collect())
}
