//! Pointer-driven positioning behaviors.

mod drag;
mod hooks;

pub use drag::{
    DragBounds, DragConfig, DragStep, DragStyle, Draggable, Placement, PointerSample,
    Position, PositionMode,
};
pub use hooks::{HookHandle, HookId, OwnerId, PointerHookKind, PointerHookRegistry};
