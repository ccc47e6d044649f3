use crate::error::WidgetResult;
use crate::render::{Element, Renderer};

/// Serializes a widget tree as HTML/SVG markup.
///
/// Click bindings have no markup form; they are dropped.
#[must_use]
pub fn to_markup(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    if !element.classes.is_empty() {
        out.push_str(" class=\"");
        escape_into(&element.classes.join(" "), out);
        out.push('"');
    }
    for (name, value) in &element.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(value, out);
        out.push('"');
    }
    out.push('>');
    if let Some(text) = &element.text {
        escape_into(text, out);
    }
    for child in &element.children {
        write_element(child, out);
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn escape_into(raw: &str, out: &mut String) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// Renderer that keeps the markup of the last tree it received.
#[derive(Debug, Default)]
pub struct MarkupRenderer {
    pub last_markup: String,
}

impl Renderer for MarkupRenderer {
    fn render(&mut self, tree: &Element) -> WidgetResult<()> {
        tree.validate()?;
        self.last_markup = to_markup(tree);
        Ok(())
    }
}
