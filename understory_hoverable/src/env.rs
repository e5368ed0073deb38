// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities injected into a coordinator.

use alloc::rc::Rc;
use core::cell::Cell;

use crate::types::{Containment, NoParent, ParentChain};
use crate::visibility::{NoVisibility, VisibilitySource};

/// Whether the platform has pointer-hover semantics at all.
///
/// Consulted once per [`Hoverable::render`](crate::hoverable::Hoverable::render).
/// Touch-only platforms answer `false`, which turns the coordinator into a passthrough.
pub trait HoverCapability {
    /// Returns `true` if hover is meaningful on this platform.
    fn supports_hover(&self) -> bool;
}

impl HoverCapability for bool {
    #[inline]
    fn supports_hover(&self) -> bool {
        *self
    }
}

/// A switchable answer, for hosts whose input devices come and go.
impl HoverCapability for Cell<bool> {
    #[inline]
    fn supports_hover(&self) -> bool {
        self.get()
    }
}

/// Capabilities a host provides to every coordinator it mounts.
pub struct Environment<K> {
    /// Capability gate.
    pub capability: Rc<dyn HoverCapability>,
    /// Visibility notifications.
    pub visibility: Rc<dyn VisibilitySource>,
    /// Subtree queries used by blur handling.
    pub containment: Rc<dyn Containment<K>>,
}

impl<K: Copy + Eq + 'static> Environment<K> {
    /// Bundle the given capabilities.
    pub fn new(
        capability: impl HoverCapability + 'static,
        visibility: impl VisibilitySource + 'static,
        containment: impl Containment<K> + 'static,
    ) -> Self {
        Self {
            capability: Rc::new(capability),
            visibility: Rc::new(visibility),
            containment: Rc::new(containment),
        }
    }

    /// A hover-capable host with no visibility notifications and a flat tree.
    pub fn headless() -> Self {
        Self::new(true, NoVisibility, ParentChain(NoParent))
    }
}

impl<K> Clone for Environment<K> {
    fn clone(&self) -> Self {
        Self {
            capability: self.capability.clone(),
            visibility: self.visibility.clone(),
            containment: self.containment.clone(),
        }
    }
}

impl<K> core::fmt::Debug for Environment<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Environment")
            .field("supports_hover", &self.capability.supports_hover())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switchable_capability_is_read_live() {
        let cap = Rc::new(Cell::new(true));
        let env: Environment<u32> = Environment {
            capability: cap.clone(),
            ..Environment::headless()
        };
        assert!(env.capability.supports_hover());
        cap.set(false);
        assert!(!env.capability.supports_hover());
    }
}
