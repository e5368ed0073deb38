// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state store and callback dispatch.
//!
//! ## Transition rules
//!
//! - [`HoverFlags::HOVERED`] is only ever set while neither [`HoverFlags::DISABLED`]
//!   nor [`HoverFlags::HIDDEN`] is set. Closing either gate clears it.
//! - Setting hover to its current value is a no-op and dispatches nothing.
//! - Every real transition dispatches exactly one callback: `on_hover_in` for
//!   `false → true`, `on_hover_out` for `true → false`. Nothing is dispatched while
//!   disabled.
//!
//! Callbacks run after the flags are updated and with no borrow held, so a callback
//! observes the settled state and may drive the coordinator again.

use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use log::trace;

use crate::visibility::Visibility;

/// Zero-argument notification fired on a hover transition.
pub type HoverCallback = Rc<dyn Fn()>;

bitflags::bitflags! {
    /// Snapshot of the coordinator's gates and hover value.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HoverFlags: u8 {
        /// The pointer is considered over the element.
        const HOVERED  = 0b0000_0001;
        /// The coordinator is disabled; hover cannot turn on and callbacks are muted.
        const DISABLED = 0b0000_0010;
        /// The host surface is hidden; hover cannot turn on.
        const HIDDEN   = 0b0000_0100;
    }
}

impl HoverFlags {
    /// Gates that refuse a `false → true` transition.
    const CLOSED: Self = Self::DISABLED.union(Self::HIDDEN);
}

/// Shared hover state owned by one coordinator.
///
/// Composed handlers and the visibility listener reach it through weak references.
pub(crate) struct HoverStore<K> {
    flags: Cell<HoverFlags>,
    node: Cell<Option<K>>,
    on_hover_in: RefCell<Option<HoverCallback>>,
    on_hover_out: RefCell<Option<HoverCallback>>,
}

impl<K: Copy> HoverStore<K> {
    pub(crate) fn new(disabled: bool) -> Self {
        let mut flags = HoverFlags::empty();
        flags.set(HoverFlags::DISABLED, disabled);
        Self {
            flags: Cell::new(flags),
            node: Cell::new(None),
            on_hover_in: RefCell::new(None),
            on_hover_out: RefCell::new(None),
        }
    }

    pub(crate) fn flags(&self) -> HoverFlags {
        self.flags.get()
    }

    pub(crate) fn is_hovered(&self) -> bool {
        self.flags.get().contains(HoverFlags::HOVERED)
    }

    pub(crate) fn node(&self) -> Option<K> {
        self.node.get()
    }

    pub(crate) fn set_node(&self, node: Option<K>) {
        self.node.set(node);
    }

    pub(crate) fn set_callbacks(
        &self,
        on_hover_in: Option<HoverCallback>,
        on_hover_out: Option<HoverCallback>,
    ) {
        *self.on_hover_in.borrow_mut() = on_hover_in;
        *self.on_hover_out.borrow_mut() = on_hover_out;
    }

    /// Record a new hover value. Returns `true` if the value changed.
    pub(crate) fn set_hovered(&self, hovered: bool) -> bool {
        let mut flags = self.flags.get();
        if flags.contains(HoverFlags::HOVERED) == hovered {
            return false;
        }
        if hovered && flags.intersects(HoverFlags::CLOSED) {
            trace!("hover refused while gated: {flags:?}");
            return false;
        }
        flags.set(HoverFlags::HOVERED, hovered);
        self.flags.set(flags);
        trace!("hover -> {hovered}");
        self.dispatch(hovered);
        true
    }

    /// Disablement watcher: closing the gate forces hover off without notifying.
    pub(crate) fn set_disabled(&self, disabled: bool) {
        let mut flags = self.flags.get();
        if flags.contains(HoverFlags::DISABLED) == disabled {
            return;
        }
        flags.set(HoverFlags::DISABLED, disabled);
        self.flags.set(flags);
        if disabled {
            self.set_hovered(false);
        }
    }

    /// Visibility watcher: hiding always forces hover off; showing only reopens the gate.
    pub(crate) fn set_visibility(&self, visibility: Visibility) {
        let hidden = visibility == Visibility::Hidden;
        let mut flags = self.flags.get();
        flags.set(HoverFlags::HIDDEN, hidden);
        self.flags.set(flags);
        if hidden {
            self.set_hovered(false);
        }
    }

    fn dispatch(&self, hovered: bool) {
        if self.flags.get().contains(HoverFlags::DISABLED) {
            trace!("hover callback muted while disabled");
            return;
        }
        let slot = if hovered {
            &self.on_hover_in
        } else {
            &self.on_hover_out
        };
        // Clone out so the callback runs without the slot borrowed.
        let callback = slot.borrow().clone();
        if let Some(callback) = callback {
            callback();
        }
    }
}
