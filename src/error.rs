use thiserror::Error;

pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("invalid dimension `{field}`: {value} (minimum is {min})")]
    InvalidDimension {
        field: &'static str,
        value: String,
        min: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("column index {index} out of range for {len} columns")]
    ColumnOutOfRange { index: usize, len: usize },

    #[error("redirect loop while resolving `{path}`")]
    RedirectLoop { path: String },

    #[error("no view registered for `{0}`")]
    UnknownView(String),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}
