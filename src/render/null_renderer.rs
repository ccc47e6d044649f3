use crate::error::WidgetResult;
use crate::render::{Element, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates the tree so tests catch malformed output before a
/// real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_node_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, tree: &Element) -> WidgetResult<()> {
        tree.validate()?;
        self.last_node_count = tree.node_count();
        self.render_count += 1;
        Ok(())
    }
}
