use crate::error::{WidgetError, WidgetResult};

/// Linear mapping from a data domain onto a pixel range.
///
/// A degenerate domain (`start == end`) is legal: every input maps to the
/// range midpoint, matching d3's `scaleLinear`. Empty or flat series hit
/// this path on every render, so it must not fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> WidgetResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(WidgetError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(WidgetError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }
        // Finite endpoints can still overflow when subtracted.
        if !(domain.1 - domain.0).is_finite() {
            return Err(WidgetError::InvalidData(
                "scale domain span overflows f64".to_owned(),
            ));
        }
        if !(range.1 - range.0).is_finite() {
            return Err(WidgetError::InvalidData(
                "scale range span overflows f64".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    /// Maps a domain value to the range. Values outside the domain extrapolate.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (value - self.domain_start) / span
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a range value back to the domain.
    ///
    /// A degenerate domain inverts every pixel to its single domain value.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 || self.is_degenerate() {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}
