// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! External element refs.
//!
//! A caller above the coordinator can ask for the rendered element through an
//! [`ElementRef`]. Two shapes are provided: [`RefHolder`] stores the node for later
//! reads, [`RefCallback`] is invoked with it. The coordinator only ever calls
//! [`ElementRef::assign`], so it never branches on the shape.

use alloc::rc::Rc;
use core::cell::Cell;

/// Receives the rendered element's node when it mounts (`Some`) and unmounts (`None`).
pub trait ElementRef<K> {
    /// Point the ref at `node`.
    fn assign(&self, node: Option<K>);
}

/// Holder-style ref: remembers the most recently assigned node.
pub struct RefHolder<K> {
    current: Cell<Option<K>>,
}

impl<K: Copy> RefHolder<K> {
    /// Create an empty holder.
    pub fn new() -> Self {
        Self {
            current: Cell::new(None),
        }
    }

    /// The node currently held, if any.
    pub fn current(&self) -> Option<K> {
        self.current.get()
    }
}

impl<K: Copy> Default for RefHolder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy> ElementRef<K> for RefHolder<K> {
    fn assign(&self, node: Option<K>) {
        self.current.set(node);
    }
}

impl<K: Copy + core::fmt::Debug> core::fmt::Debug for RefHolder<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RefHolder")
            .field("current", &self.current.get())
            .finish()
    }
}

/// Callback-style ref.
pub struct RefCallback<K>(Rc<dyn Fn(Option<K>)>);

impl<K> RefCallback<K> {
    /// Wrap `f` as a ref.
    pub fn new(f: impl Fn(Option<K>) + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl<K> Clone for RefCallback<K> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<K> ElementRef<K> for RefCallback<K> {
    fn assign(&self, node: Option<K>) {
        (self.0)(node);
    }
}

impl<K> core::fmt::Debug for RefCallback<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RefCallback").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn holder_tracks_latest_assignment() {
        let r: RefHolder<u32> = RefHolder::new();
        assert_eq!(r.current(), None);
        r.assign(Some(4));
        assert_eq!(r.current(), Some(4));
        r.assign(None);
        assert_eq!(r.current(), None);
    }

    #[test]
    fn holder_debug_shows_current_node() {
        let r: RefHolder<u32> = RefHolder::new();
        r.assign(Some(9));
        assert_eq!(
            alloc::format!("{r:?}"),
            "RefHolder { current: Some(9) }"
        );
    }

    #[test]
    fn callback_sees_every_assignment() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let r = RefCallback::new(move |n: Option<u32>| s.borrow_mut().push(n));
        let as_dyn: Rc<dyn ElementRef<u32>> = Rc::new(r.clone());
        as_dyn.assign(Some(1));
        r.assign(None);
        assert_eq!(*seen.borrow(), [Some(1), None]);
    }
}
