mod element;
mod markup;
mod null_renderer;

pub use element::{Element, ElementAction};
pub use markup::{MarkupRenderer, to_markup};
pub use null_renderer::NullRenderer;

use crate::error::WidgetResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized element tree, so drawing code
/// stays isolated from chart/table state and input handling.
pub trait Renderer {
    fn render(&mut self, tree: &Element) -> WidgetResult<()>;
}
