use tracing::{debug, warn};

use crate::core::{Dimension, LinePath, SurfaceSize, project_line_path};
use crate::error::WidgetResult;
use crate::render::{Element, Renderer};

use super::observer::ObserverSet;
use super::{Invalidation, LineChartConfig, WidgetEvent, WidgetObserver};

/// Line chart component: one sample series drawn as a straight-segment path.
///
/// `width`/`height` land on the `svg` surface and `fill`/`stroke` on the
/// `path`. Replacing the data or resizing the surface recomputes the path
/// immediately; `fill`/`stroke` only mark the surface dirty.
#[derive(Debug)]
pub struct LineChart {
    config: LineChartConfig,
    path: LinePath,
    observers: ObserverSet,
}

impl LineChart {
    pub fn new(config: LineChartConfig) -> WidgetResult<Self> {
        let path = project_line_path(&config.data, config.size())?;
        debug!(vertices = path.len(), "line chart mounted");
        Ok(Self {
            config,
            path,
            observers: ObserverSet::default(),
        })
    }

    pub fn add_observer(&mut self, observer: impl WidgetObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub fn config(&self) -> &LineChartConfig {
        &self.config
    }

    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.config.data
    }

    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.config.size()
    }

    /// Replaces the series and recomputes scales and path from scratch.
    ///
    /// Rejected data (non-finite samples) leaves the previous series in place.
    pub fn set_data(&mut self, data: Vec<f64>) -> WidgetResult<Invalidation> {
        let path = project_line_path(&data, self.config.size()).inspect_err(|err| {
            warn!(error = %err, "rejected line chart data; keeping previous series");
        })?;

        debug!(samples = data.len(), vertices = path.len(), "line path recomputed");
        self.config.data = data;
        self.path = path;

        self.observers.emit(WidgetEvent::DataUpdated {
            len: self.config.data.len(),
        });
        Ok(self.observers.request_redraw(Invalidation::Full))
    }

    /// Applies a new surface width and projects the path onto the new x range.
    pub fn set_width(&mut self, width: Dimension) -> WidgetResult<Invalidation> {
        if self.config.width == width {
            return Ok(Invalidation::None);
        }
        let size = SurfaceSize {
            width,
            height: self.config.height,
        };
        self.resize(size)
    }

    /// Applies a new surface height and projects the path onto the new y range.
    pub fn set_height(&mut self, height: Dimension) -> WidgetResult<Invalidation> {
        if self.config.height == height {
            return Ok(Invalidation::None);
        }
        let size = SurfaceSize {
            width: self.config.width,
            height,
        };
        self.resize(size)
    }

    fn resize(&mut self, size: SurfaceSize) -> WidgetResult<Invalidation> {
        let path = project_line_path(&self.config.data, size).inspect_err(|err| {
            warn!(error = %err, "line path projection failed; keeping previous size");
        })?;

        debug!(
            width = size.width(),
            height = size.height(),
            vertices = path.len(),
            "line path reprojected for new surface size"
        );
        self.config.width = size.width;
        self.config.height = size.height;
        self.path = path;
        Ok(self.attributes_changed())
    }

    /// Parses and applies a raw width; invalid input keeps the prior value.
    pub fn set_width_raw(&mut self, raw: &str) -> WidgetResult<Invalidation> {
        let width = Dimension::parse(raw, "width").inspect_err(|err| {
            warn!(error = %err, "rejected line chart width");
        })?;
        self.set_width(width)
    }

    /// Parses and applies a raw height; invalid input keeps the prior value.
    pub fn set_height_raw(&mut self, raw: &str) -> WidgetResult<Invalidation> {
        let height = Dimension::parse(raw, "height").inspect_err(|err| {
            warn!(error = %err, "rejected line chart height");
        })?;
        self.set_height(height)
    }

    pub fn set_fill(&mut self, fill: impl Into<String>) -> Invalidation {
        let fill = fill.into();
        if self.config.fill == fill {
            return Invalidation::None;
        }
        self.config.fill = fill;
        self.attributes_changed()
    }

    pub fn set_stroke(&mut self, stroke: impl Into<String>) -> Invalidation {
        let stroke = stroke.into();
        if self.config.stroke == stroke {
            return Invalidation::None;
        }
        self.config.stroke = stroke;
        self.attributes_changed()
    }

    fn attributes_changed(&mut self) -> Invalidation {
        self.observers.emit(WidgetEvent::AttributesChanged);
        self.observers.request_redraw(Invalidation::Attributes)
    }

    /// Path for the current data and surface size.
    #[must_use]
    pub fn path(&self) -> &LinePath {
        &self.path
    }

    /// SVG path data, `None` for an empty series.
    #[must_use]
    pub fn path_data(&self) -> Option<String> {
        self.path.to_svg_d()
    }

    /// Builds `div.line > svg > g > path`.
    #[must_use]
    pub fn render(&self) -> Element {
        let size = self.config.size();
        let svg = Element::new("svg")
            .with_attr("width", size.width().to_string())
            .with_attr("height", size.height().to_string());

        let mut path = Element::new("path");
        for (name, value) in [("fill", &self.config.fill), ("stroke", &self.config.stroke)] {
            if !value.is_empty() {
                path = path.with_attr(name, value.as_str());
            }
        }
        if let Some(d) = self.path_data() {
            path = path.with_attr("d", d);
        }

        Element::new("div")
            .with_class("line")
            .with_child(svg.with_child(Element::new("g").with_child(path)))
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R) -> WidgetResult<()> {
        renderer.render(&self.render())
    }
}
