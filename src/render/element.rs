use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{WidgetError, WidgetResult};
use crate::table::SortDirection;

/// Host event a rendered element dispatches on click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementAction {
    Sort {
        column: usize,
        direction: SortDirection,
    },
}

/// Backend-agnostic node of a rendered widget tree.
///
/// Attribute order is preserved so serialized markup stays deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub classes: SmallVec<[String; 2]>,
    pub text: Option<String>,
    pub children: Vec<Element>,
    pub on_click: Option<ElementAction>,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn on_click(mut self, action: ElementAction) -> Self {
        self.on_click = Some(action);
        self
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|candidate| candidate == class)
    }

    /// Text of this node followed by its descendants', depth first.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Total node count, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Element::node_count).sum::<usize>()
    }

    /// All descendants (and `self`) with the given tag, in document order.
    #[must_use]
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.find_into(tag, &mut found);
        found
    }

    fn find_into<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        if self.tag == tag {
            found.push(self);
        }
        for child in &self.children {
            child.find_into(tag, found);
        }
    }

    #[must_use]
    pub fn find_first<'a>(&'a self, tag: &str) -> Option<&'a Element> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_first(tag))
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if !is_valid_name(&self.tag) {
            return Err(WidgetError::InvalidData(format!(
                "element tag `{}` is not a valid name",
                self.tag
            )));
        }
        if let Some(name) = self.attributes.keys().find(|name| !is_valid_name(name)) {
            return Err(WidgetError::InvalidData(format!(
                "attribute `{name}` on <{}> is not a valid name",
                self.tag
            )));
        }
        for child in &self.children {
            child.validate()?;
        }
        Ok(())
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':')
}
