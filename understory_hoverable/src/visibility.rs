// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host visibility as an injected capability.
//!
//! ## Overview
//!
//! The coordinator never reaches for a global document. Instead the host hands it a
//! [`VisibilitySource`], and the coordinator registers exactly one listener per live
//! mount. The returned [`Subscription`] releases the listener when dropped.
//!
//! [`VisibilityHub`] is a ready-made single-threaded source a host can publish into;
//! [`NoVisibility`] models a host without visibility notifications.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_hoverable::visibility::{Visibility, VisibilityHub, VisibilitySource};
//!
//! let hub = VisibilityHub::new();
//! let seen = Rc::new(Cell::new(Visibility::Visible));
//! let s = seen.clone();
//! let sub = hub.subscribe(Rc::new(move |v: Visibility| s.set(v))).unwrap();
//!
//! hub.set_visibility(Visibility::Hidden);
//! assert_eq!(seen.get(), Visibility::Hidden);
//!
//! drop(sub);
//! assert_eq!(hub.listener_count(), 0);
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use log::debug;

use crate::error::SubscribeError;

/// Visibility of the host surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// The surface is shown.
    #[default]
    Visible,
    /// The surface is hidden (backgrounded tab, minimized window, locked screen).
    Hidden,
}

/// Listener invoked with the new visibility on every change.
pub type VisibilityListener = Rc<dyn Fn(Visibility)>;

/// A source of visibility change notifications.
pub trait VisibilitySource {
    /// Visibility right now, used to seed a new watcher.
    fn current(&self) -> Visibility;

    /// Register `listener` until the returned [`Subscription`] is dropped.
    fn subscribe(&self, listener: VisibilityListener) -> Result<Subscription, SubscribeError>;
}

/// Handle for a registered listener. Dropping it unsubscribes.
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Create a subscription that runs `cancel` exactly once when released.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to release.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Release the listener now.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl core::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Single-threaded broadcaster of visibility changes.
///
/// Cloning yields another handle to the same hub. Listeners are only notified when
/// the visibility actually changes.
#[derive(Clone, Default)]
pub struct VisibilityHub {
    inner: Rc<HubInner>,
}

#[derive(Default)]
struct HubInner {
    current: Cell<Visibility>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, VisibilityListener)>>,
}

impl VisibilityHub {
    /// Create a hub that starts out [`Visible`](Visibility::Visible).
    pub fn new() -> Self {
        Self::default()
    }

    /// Current visibility.
    pub fn visibility(&self) -> Visibility {
        self.inner.current.get()
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Publish a new visibility, notifying listeners in registration order.
    pub fn set_visibility(&self, visibility: Visibility) {
        if self.inner.current.replace(visibility) == visibility {
            return;
        }
        // Snapshot so listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<VisibilityListener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(visibility);
        }
    }
}

impl VisibilitySource for VisibilityHub {
    fn current(&self) -> Visibility {
        self.visibility()
    }

    fn subscribe(&self, listener: VisibilityListener) -> Result<Subscription, SubscribeError> {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, listener));
        debug!("visibility listener {id} registered");

        let hub = Rc::downgrade(&self.inner);
        Ok(Subscription::new(move || {
            if let Some(hub) = hub.upgrade() {
                hub.listeners.borrow_mut().retain(|(i, _)| *i != id);
                debug!("visibility listener {id} released");
            }
        }))
    }
}

impl core::fmt::Debug for VisibilityHub {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VisibilityHub")
            .field("visibility", &self.visibility())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Source for hosts without visibility notifications; every subscribe fails.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoVisibility;

impl VisibilitySource for NoVisibility {
    fn current(&self) -> Visibility {
        Visibility::Visible
    }

    fn subscribe(&self, _listener: VisibilityListener) -> Result<Subscription, SubscribeError> {
        Err(SubscribeError::Unsupported)
    }
}
