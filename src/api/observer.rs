use std::fmt;

use serde::{Deserialize, Serialize};

use crate::table::SortDirection;

use super::Invalidation;

/// Events a component emits while applying host input.
///
/// Emission is synchronous: every event of one input call is delivered
/// before that call returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WidgetEvent {
    DataUpdated { len: usize },
    ColumnsReplaced { len: usize },
    AttributesChanged,
    Sorted { column: usize, direction: SortDirection },
    RedrawRequested(Invalidation),
}

/// Host callback contract replacing framework watchers.
pub trait WidgetObserver {
    fn on_event(&mut self, event: WidgetEvent);
}

impl<F> WidgetObserver for F
where
    F: FnMut(WidgetEvent),
{
    fn on_event(&mut self, event: WidgetEvent) {
        self(event);
    }
}

#[derive(Default)]
pub(crate) struct ObserverSet {
    observers: Vec<Box<dyn WidgetObserver>>,
}

impl ObserverSet {
    pub(crate) fn push(&mut self, observer: Box<dyn WidgetObserver>) {
        self.observers.push(observer);
    }

    pub(crate) fn emit(&mut self, event: WidgetEvent) {
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }

    /// Emits `RedrawRequested` unless nothing changed, then hands the level back.
    pub(crate) fn request_redraw(&mut self, level: Invalidation) -> Invalidation {
        if level.needs_redraw() {
            self.emit(WidgetEvent::RedrawRequested(level));
        }
        level
    }
}

impl fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverSet")
            .field("len", &self.observers.len())
            .finish()
    }
}
