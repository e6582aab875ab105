//! Scoped registration of the global listeners used to dismiss the panel.
//!
//! The registry plays the role of the document: it records which global
//! listeners are attached. [`DismissListeners`] attaches a key-down and a
//! pointer-down listener on construction and detaches both on drop, so a
//! registration cannot outlive the open state that owns it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::{debug, trace};

/// Kind of global input listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    KeyDown,
    PointerDown,
}

/// Opaque handle for one attached listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct ListenerTable {
    next_id: u64,
    attached: BTreeMap<ListenerId, ListenerKind>,
}

/// Shared, single-threaded table of attached global listeners.
///
/// Cloning yields another handle to the same table.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<RefCell<ListenerTable>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn attach(&self, kind: ListenerKind) -> ListenerId {
        let mut table = self.inner.borrow_mut();
        let id = ListenerId(table.next_id);
        table.next_id = table.next_id.wrapping_add(1);
        table.attached.insert(id, kind);
        trace!(?id, ?kind, "listener attached");
        id
    }

    /// Detach `id`. Detaching an id that is no longer attached is a no-op.
    ///
    /// # Returns
    /// `true` when a listener was actually removed.
    fn detach(&self, id: ListenerId) -> bool {
        let removed = self.inner.borrow_mut().attached.remove(&id);
        if let Some(kind) = removed {
            trace!(?id, ?kind, "listener detached");
        }
        removed.is_some()
    }

    /// Number of attached listeners of `kind`.
    pub fn attached(&self, kind: ListenerKind) -> usize {
        self.inner
            .borrow()
            .attached
            .values()
            .filter(|attached| **attached == kind)
            .count()
    }

    /// Whether at least one listener of `kind` is attached.
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.attached(kind) > 0
    }

    /// Total attached listeners across all kinds.
    pub fn total(&self) -> usize {
        self.inner.borrow().attached.len()
    }
}

/// RAII registration of the Escape and outside-click listeners.
#[derive(Debug)]
pub struct DismissListeners {
    registry: ListenerRegistry,
    key_down: ListenerId,
    pointer_down: ListenerId,
}

impl DismissListeners {
    /// Attach one key-down and one pointer-down listener to `registry`.
    pub fn attach(registry: &ListenerRegistry) -> Self {
        let key_down = registry.attach(ListenerKind::KeyDown);
        let pointer_down = registry.attach(ListenerKind::PointerDown);
        debug!(total = registry.total(), "dismiss listeners attached");
        Self {
            registry: registry.clone(),
            key_down,
            pointer_down,
        }
    }
}

impl Drop for DismissListeners {
    fn drop(&mut self) {
        self.registry.detach(self.key_down);
        self.registry.detach(self.pointer_down);
        debug!(total = self.registry.total(), "dismiss listeners detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_attaches_both_kinds_and_releases_on_drop() {
        let registry = ListenerRegistry::new();
        {
            let _guard = DismissListeners::attach(&registry);
            assert_eq!(registry.attached(ListenerKind::KeyDown), 1);
            assert_eq!(registry.attached(ListenerKind::PointerDown), 1);
            assert!(registry.is_listening(ListenerKind::KeyDown));
        }
        assert_eq!(registry.total(), 0);
        assert!(!registry.is_listening(ListenerKind::PointerDown));
    }

    #[test]
    fn detach_is_idempotent() {
        let registry = ListenerRegistry::new();
        let id = registry.attach(ListenerKind::KeyDown);
        assert!(registry.detach(id));
        assert!(!registry.detach(id));
        assert_eq!(registry.total(), 0);
    }

    #[test]
    fn guards_on_shared_registry_are_independent() {
        let registry = ListenerRegistry::new();
        let first = DismissListeners::attach(&registry);
        let second = DismissListeners::attach(&registry.clone());
        assert_eq!(registry.total(), 4);
        drop(first);
        assert_eq!(registry.attached(ListenerKind::KeyDown), 1);
        drop(second);
        assert_eq!(registry.total(), 0);
    }
}
