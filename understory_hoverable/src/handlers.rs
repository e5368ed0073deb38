// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Child event handlers and their composition with hover tracking.
//!
//! ## Composition
//!
//! Binding a child replaces its `on_pointer_enter`, `on_pointer_leave`, and `on_blur`
//! with wrappers that:
//!
//! 1. update the coordinator's hover state, then
//! 2. call the handler the child already had, with the same event.
//!
//! The child's own handlers therefore always observe the settled hover state.
//!
//! Blur only forces hover off when focus left the bound element's subtree entirely:
//! neither the blur `target` nor the `related_target` lies inside it. Before the
//! element is attached the subtree is unknown and blur leaves hover alone.

use alloc::rc::{Rc, Weak};

use log::trace;

use crate::state::HoverStore;
use crate::types::{BlurEvent, Containment, PointerEvent};

/// A shared event handler.
pub type Handler<E> = Rc<dyn Fn(&E)>;

/// The handlers a hoverable child exposes.
pub struct Handlers<K> {
    /// Called when the pointer enters the element.
    pub on_pointer_enter: Option<Handler<PointerEvent<K>>>,
    /// Called when the pointer leaves the element.
    pub on_pointer_leave: Option<Handler<PointerEvent<K>>>,
    /// Called when the element loses focus.
    pub on_blur: Option<Handler<BlurEvent<K>>>,
}

impl<K> Handlers<K> {
    /// Deliver a pointer enter event, if a handler is set.
    pub fn pointer_enter(&self, event: &PointerEvent<K>) {
        if let Some(h) = &self.on_pointer_enter {
            h(event);
        }
    }

    /// Deliver a pointer leave event, if a handler is set.
    pub fn pointer_leave(&self, event: &PointerEvent<K>) {
        if let Some(h) = &self.on_pointer_leave {
            h(event);
        }
    }

    /// Deliver a blur event, if a handler is set.
    pub fn blur(&self, event: &BlurEvent<K>) {
        if let Some(h) = &self.on_blur {
            h(event);
        }
    }

    /// Returns `true` if no handler is set.
    pub fn is_empty(&self) -> bool {
        self.on_pointer_enter.is_none() && self.on_pointer_leave.is_none() && self.on_blur.is_none()
    }
}

impl<K> Default for Handlers<K> {
    fn default() -> Self {
        Self {
            on_pointer_enter: None,
            on_pointer_leave: None,
            on_blur: None,
        }
    }
}

impl<K> Clone for Handlers<K> {
    fn clone(&self) -> Self {
        Self {
            on_pointer_enter: self.on_pointer_enter.clone(),
            on_pointer_leave: self.on_pointer_leave.clone(),
            on_blur: self.on_blur.clone(),
        }
    }
}

impl<K> core::fmt::Debug for Handlers<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Handlers")
            .field("on_pointer_enter", &self.on_pointer_enter.is_some())
            .field("on_pointer_leave", &self.on_pointer_leave.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .finish()
    }
}

/// A host element that a coordinator can bind.
pub trait HoverElement<K> {
    /// The element's current handlers.
    fn handlers(&self) -> &Handlers<K>;
    /// Mutable access used to install composed handlers.
    fn handlers_mut(&mut self) -> &mut Handlers<K>;
}

/// Wrap `existing` with hover tracking against `store`.
///
/// The wrappers hold the store weakly; once the coordinator is gone they only delegate.
pub(crate) fn compose<K: Copy + Eq + 'static>(
    existing: &Handlers<K>,
    store: Weak<HoverStore<K>>,
    containment: Rc<dyn Containment<K>>,
) -> Handlers<K> {
    let enter: Handler<PointerEvent<K>> = {
        let store = store.clone();
        let inner = existing.on_pointer_enter.clone();
        Rc::new(move |event: &PointerEvent<K>| {
            if let Some(store) = store.upgrade() {
                store.set_hovered(true);
            }
            if let Some(inner) = &inner {
                inner(event);
            }
        })
    };

    let leave: Handler<PointerEvent<K>> = {
        let store = store.clone();
        let inner = existing.on_pointer_leave.clone();
        Rc::new(move |event: &PointerEvent<K>| {
            if let Some(store) = store.upgrade() {
                store.set_hovered(false);
            }
            if let Some(inner) = &inner {
                inner(event);
            }
        })
    };

    let blur: Handler<BlurEvent<K>> = {
        let inner = existing.on_blur.clone();
        Rc::new(move |event: &BlurEvent<K>| {
            if let Some(store) = store.upgrade() {
                match store.node() {
                    Some(node) => {
                        let inside =
                            |k: Option<K>| k.is_some_and(|k| containment.contains(&node, &k));
                        if !inside(event.target) && !inside(event.related_target) {
                            store.set_hovered(false);
                        }
                    }
                    None => trace!("blur before attach; hover left as is"),
                }
            }
            if let Some(inner) = &inner {
                inner(event);
            }
        })
    };

    Handlers {
        on_pointer_enter: Some(enter),
        on_pointer_leave: Some(leave),
        on_blur: Some(blur),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NoParent, ParentChain, ParentLookup};
    use alloc::vec::Vec;
    use core::cell::RefCell;

    // 1 ── 2 ── 3, and a separate root 10 ── 11.
    struct Parents;
    impl ParentLookup<u32> for Parents {
        fn parent_of(&self, node: &u32) -> Option<u32> {
            match node {
                2 => Some(1),
                3 => Some(2),
                11 => Some(10),
                _ => None,
            }
        }
    }

    fn bound_store() -> Rc<HoverStore<u32>> {
        let store = Rc::new(HoverStore::new(false));
        store.set_node(Some(1));
        store
    }

    fn blur(target: Option<u32>, related_target: Option<u32>) -> BlurEvent<u32> {
        BlurEvent {
            target,
            related_target,
        }
    }

    #[test]
    fn composed_handlers_delegate_after_state_update() {
        let store = bound_store();
        let seen: Rc<RefCell<Vec<(&str, bool)>>> = Rc::new(RefCell::new(Vec::new()));

        let mut existing = Handlers::default();
        let (s, st) = (seen.clone(), Rc::downgrade(&store));
        existing.on_pointer_enter = Some(Rc::new(move |e: &PointerEvent<u32>| {
            assert_eq!(e.target, 3, "original event is forwarded");
            s.borrow_mut()
                .push(("enter", st.upgrade().unwrap().is_hovered()));
        }));
        let (s, st) = (seen.clone(), Rc::downgrade(&store));
        existing.on_pointer_leave = Some(Rc::new(move |_: &PointerEvent<u32>| {
            s.borrow_mut()
                .push(("leave", st.upgrade().unwrap().is_hovered()));
        }));
        let (s, st) = (seen.clone(), Rc::downgrade(&store));
        existing.on_blur = Some(Rc::new(move |_: &BlurEvent<u32>| {
            s.borrow_mut()
                .push(("blur", st.upgrade().unwrap().is_hovered()));
        }));

        let composed = compose(&existing, Rc::downgrade(&store), Rc::new(ParentChain(Parents)));
        composed.pointer_enter(&PointerEvent { target: 3 });
        composed.blur(&blur(Some(11), None));
        composed.pointer_enter(&PointerEvent { target: 3 });
        composed.pointer_leave(&PointerEvent { target: 3 });

        assert_eq!(
            *seen.borrow(),
            [
                ("enter", true),
                ("blur", false),
                ("enter", true),
                ("leave", false)
            ]
        );
    }

    #[test]
    fn blur_inside_subtree_keeps_hover() {
        let store = bound_store();
        let composed = compose(
            &Handlers::default(),
            Rc::downgrade(&store),
            Rc::new(ParentChain(Parents)),
        );
        store.set_hovered(true);

        composed.blur(&blur(Some(3), Some(11)));
        assert!(store.is_hovered(), "target inside");
        composed.blur(&blur(Some(11), Some(2)));
        assert!(store.is_hovered(), "related target inside");
        composed.blur(&blur(Some(10), Some(11)));
        assert!(!store.is_hovered(), "both outside");
    }

    #[test]
    fn blur_with_unknown_targets_counts_as_outside() {
        let store = bound_store();
        let composed = compose(
            &Handlers::default(),
            Rc::downgrade(&store),
            Rc::new(ParentChain(Parents)),
        );
        store.set_hovered(true);
        composed.blur(&blur(None, None));
        assert!(!store.is_hovered());
    }

    #[test]
    fn blur_before_attach_is_ignored() {
        let store: Rc<HoverStore<u32>> = Rc::new(HoverStore::new(false));
        let composed = compose(
            &Handlers::default(),
            Rc::downgrade(&store),
            Rc::new(ParentChain(NoParent)),
        );
        store.set_hovered(true);
        composed.blur(&blur(Some(99), None));
        assert!(store.is_hovered());
    }

    #[test]
    fn dead_store_still_delegates() {
        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        let mut existing = Handlers::default();
        existing.on_pointer_enter = Some(Rc::new(move |_: &PointerEvent<u32>| {
            *h.borrow_mut() += 1;
        }));

        let store = bound_store();
        let composed = compose(&existing, Rc::downgrade(&store), Rc::new(ParentChain(NoParent)));
        drop(store);
        composed.pointer_enter(&PointerEvent { target: 1 });
        composed.pointer_leave(&PointerEvent { target: 1 });
        composed.blur(&blur(None, None));
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn empty_handlers_report_empty() {
        let h: Handlers<u32> = Handlers::default();
        assert!(h.is_empty());
        h.pointer_enter(&PointerEvent { target: 0 });
        let store = bound_store();
        let composed = compose(&h, Rc::downgrade(&store), Rc::new(ParentChain(NoParent)));
        assert!(!composed.is_empty());
    }
}
