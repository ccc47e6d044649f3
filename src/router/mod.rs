//! Static client-side route table.
//!
//! Paths map either to a named view or to another path. Matching is
//! exact (history mode, no parameters); the host owns navigation and
//! history, this module only answers "which view for this path".

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{WidgetError, WidgetResult};

const MAX_REDIRECT_HOPS: usize = 8;

/// Views shipped with the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewName {
    Index,
    About,
    Tab,
    Lines,
}

impl ViewName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::About => "about",
            Self::Tab => "tab",
            Self::Lines => "lines",
        }
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteTarget {
    Redirect(String),
    View(ViewName),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteTable {
    routes: IndexMap<String, RouteTarget>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `/` redirects to `/index`; `/index`, `/about`, `/tab`, `/lines` are views.
    #[must_use]
    pub fn default_routes() -> Self {
        Self::new()
            .with_redirect("/", "/index")
            .with_view("/index", ViewName::Index)
            .with_view("/about", ViewName::About)
            .with_view("/tab", ViewName::Tab)
            .with_view("/lines", ViewName::Lines)
    }

    #[must_use]
    pub fn with_view(mut self, path: impl Into<String>, view: ViewName) -> Self {
        self.routes.insert(path.into(), RouteTarget::View(view));
        self
    }

    #[must_use]
    pub fn with_redirect(mut self, path: impl Into<String>, to: impl Into<String>) -> Self {
        self.routes.insert(path.into(), RouteTarget::Redirect(to.into()));
        self
    }

    #[must_use]
    pub fn target(&self, path: &str) -> Option<&RouteTarget> {
        self.routes.get(normalize_path(path))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Resolves `path` to a view, following redirects.
    ///
    /// Query strings and fragments are ignored. Unknown paths yield `Ok(None)`.
    pub fn resolve(&self, path: &str) -> WidgetResult<Option<ViewName>> {
        let mut current = normalize_path(path);
        for _ in 0..=MAX_REDIRECT_HOPS {
            match self.routes.get(current) {
                None => return Ok(None),
                Some(RouteTarget::View(view)) => return Ok(Some(*view)),
                Some(RouteTarget::Redirect(to)) => {
                    debug!(from = current, to = %to, "following route redirect");
                    current = normalize_path(to);
                }
            }
        }
        Err(WidgetError::RedirectLoop {
            path: path.to_owned(),
        })
    }
}

/// Strips query, fragment and a non-root trailing slash.
fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}

type ViewFactory<V> = Box<dyn FnMut(ViewName) -> V>;

/// Lazily built views keyed by [`ViewName`].
///
/// A view's factory runs on first navigation; later visits reuse the
/// instance.
pub struct ViewRegistry<V> {
    table: RouteTable,
    factories: IndexMap<ViewName, ViewFactory<V>>,
    loaded: IndexMap<ViewName, V>,
}

impl<V> ViewRegistry<V> {
    #[must_use]
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            factories: IndexMap::new(),
            loaded: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn register(&mut self, view: ViewName, factory: impl FnMut(ViewName) -> V + 'static) {
        self.factories.insert(view, Box::new(factory));
    }

    #[must_use]
    pub fn is_loaded(&self, view: ViewName) -> bool {
        self.loaded.contains_key(&view)
    }

    /// Resolves `path` and returns its view, building it on first use.
    pub fn navigate(&mut self, path: &str) -> WidgetResult<Option<&mut V>> {
        let Some(view) = self.table.resolve(path)? else {
            return Ok(None);
        };

        if !self.loaded.contains_key(&view) {
            let factory = self
                .factories
                .get_mut(&view)
                .ok_or_else(|| WidgetError::UnknownView(view.to_string()))?;
            debug!(%view, "loading view");
            let instance = factory(view);
            self.loaded.insert(view, instance);
        }

        Ok(self.loaded.get_mut(&view))
    }
}

impl<V> fmt::Debug for ViewRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("table", &self.table)
            .field("registered", &self.factories.keys().collect::<Vec<_>>())
            .field("loaded", &self.loaded.keys().collect::<Vec<_>>())
            .finish()
    }
}
