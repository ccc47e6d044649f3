use serde::{Deserialize, Serialize};

/// Ordered redraw levels a component reports after an input change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Invalidation {
    #[default]
    None,
    /// Only surface attributes changed; derived geometry/rows are intact.
    Attributes,
    /// Derived state was recomputed; the whole tree must be redrawn.
    Full,
}

impl Invalidation {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }

    #[must_use]
    pub const fn needs_redraw(self) -> bool {
        !matches!(self, Self::None)
    }
}
