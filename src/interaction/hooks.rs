use std::cell::RefCell;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Document-level pointer event a drag gesture listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerHookKind {
    Move,
    Up,
}

/// Identity of one element that registers hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookId(u64);

#[derive(Debug, Clone, Copy)]
struct HookEntry {
    kind: PointerHookKind,
    owner: OwnerId,
}

#[derive(Debug, Default)]
struct RegistryState {
    next_hook: u64,
    next_owner: u64,
    hooks: IndexMap<HookId, HookEntry>,
}

/// Scoped listener table standing in for the host document's global
/// pointer hooks.
///
/// Each registration is owned by a [`HookHandle`]; dropping the handle
/// removes it. Several draggable elements can share one registry
/// without clobbering each other's hooks.
#[derive(Debug, Clone, Default)]
pub struct PointerHookRegistry {
    state: Rc<RefCell<RegistryState>>,
}

impl PointerHookRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn allocate_owner(&self) -> OwnerId {
        let mut state = self.state.borrow_mut();
        let owner = OwnerId(state.next_owner);
        state.next_owner += 1;
        owner
    }

    #[must_use]
    pub fn register(&self, kind: PointerHookKind, owner: OwnerId) -> HookHandle {
        let mut state = self.state.borrow_mut();
        let id = HookId(state.next_hook);
        state.next_hook += 1;
        state.hooks.insert(id, HookEntry { kind, owner });
        trace!(hook = id.0, owner = owner.0, ?kind, "pointer hook registered");

        HookHandle {
            id,
            kind,
            registry: Rc::downgrade(&self.state),
        }
    }

    /// Number of live hooks across all owners.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.state.borrow().hooks.len()
    }

    #[must_use]
    pub fn active_for(&self, owner: OwnerId) -> usize {
        self.state
            .borrow()
            .hooks
            .values()
            .filter(|entry| entry.owner == owner)
            .count()
    }

    #[must_use]
    pub fn is_listening(&self, owner: OwnerId, kind: PointerHookKind) -> bool {
        self.state
            .borrow()
            .hooks
            .values()
            .any(|entry| entry.owner == owner && entry.kind == kind)
    }
}

/// Live registration in a [`PointerHookRegistry`]; unregisters on drop.
#[derive(Debug)]
pub struct HookHandle {
    id: HookId,
    kind: PointerHookKind,
    registry: Weak<RefCell<RegistryState>>,
}

impl HookHandle {
    #[must_use]
    pub fn id(&self) -> HookId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> PointerHookKind {
        self.kind
    }
}

impl Drop for HookHandle {
    fn drop(&mut self) {
        let Some(state) = self.registry.upgrade() else {
            return;
        };
        // A panic while the registry is borrowed must not turn into a double panic here.
        if let Ok(mut state) = state.try_borrow_mut() {
            state.hooks.shift_remove(&self.id);
            trace!(hook = self.id.0, "pointer hook removed");
        }
    }
}
