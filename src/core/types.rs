use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};

/// Smallest width/height a drawing surface accepts.
///
/// Scale ranges below this collapse the rendered path into noise.
pub const MIN_SURFACE_EXTENT: f64 = 12.0;

/// Surface extent in CSS pixels, validated on construction.
///
/// Hosts may supply extents as numbers or numeric strings (`"120"`,
/// `"120px"`); both are parsed once here so the rest of the crate only
/// sees a finite `f64 >= MIN_SURFACE_EXTENT`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "DimensionInput", into = "f64")]
pub struct Dimension(f64);

impl Dimension {
    pub fn new(value: f64, field: &'static str) -> WidgetResult<Self> {
        if !value.is_finite() || value < MIN_SURFACE_EXTENT {
            return Err(WidgetError::InvalidDimension {
                field,
                value: value.to_string(),
                min: MIN_SURFACE_EXTENT,
            });
        }
        Ok(Self(value))
    }

    pub fn parse(raw: &str, field: &'static str) -> WidgetResult<Self> {
        let trimmed = raw.trim();
        let numeric = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
        let value = numeric
            .parse::<f64>()
            .map_err(|_| WidgetError::InvalidDimension {
                field,
                value: raw.to_owned(),
                min: MIN_SURFACE_EXTENT,
            })?;
        Self::new(value, field)
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<Dimension> for f64 {
    fn from(value: Dimension) -> Self {
        value.0
    }
}

/// Wire shape accepted for a [`Dimension`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum DimensionInput {
    Number(f64),
    Text(String),
}

impl TryFrom<DimensionInput> for Dimension {
    type Error = WidgetError;

    fn try_from(input: DimensionInput) -> Result<Self, Self::Error> {
        match input {
            DimensionInput::Number(value) => Self::new(value, "dimension"),
            DimensionInput::Text(raw) => Self::parse(&raw, "dimension"),
        }
    }
}

/// Width and height of a chart drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: Dimension,
    pub height: Dimension,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> WidgetResult<Self> {
        Ok(Self {
            width: Dimension::new(width, "width")?,
            height: Dimension::new(height, "height")?,
        })
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.width.get()
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.height.get()
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: Dimension(100.0),
            height: Dimension(50.0),
        }
    }
}

/// Axis-aligned extent of an element or its container, in CSS pixels.
///
/// Unlike [`Dimension`] this accepts any finite non-negative size: a
/// collapsed element is a legitimate drag target.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

impl BoxSize {
    pub fn new(width: f64, height: f64) -> WidgetResult<Self> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(WidgetError::InvalidData(format!(
                "box size must be finite and >= 0, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }
}
