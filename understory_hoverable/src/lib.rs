// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Hoverable: one hover flag for one child, owned in one place.
//!
//! ## Overview
//!
//! Nesting hover-aware widgets tends to hide a child's hover state from its parent.
//! This crate centralizes hover tracking in a coordinator, [`Hoverable`], which owns the
//! canonical boolean and installs the pointer and focus handlers it needs on the single
//! child it wraps. Handlers the child already had are kept and called after the hover
//! state settles.
//!
//! ## Rules
//!
//! - Pointer enter turns hover on; pointer leave turns it off.
//! - Blur turns hover off only when focus moved fully outside the element's subtree.
//! - Hiding the host surface turns hover off. Showing it again does not turn it back on.
//! - Disabling turns hover off and mutes `on_hover_in` / `on_hover_out`.
//! - Each real transition fires exactly one callback; setting the same value fires none.
//! - On platforms without hover ([`HoverCapability`]), the child passes through untouched.
//!
//! ## Host integration
//!
//! The host supplies an [`Environment`]: a [`HoverCapability`], a
//! [`VisibilitySource`](visibility::VisibilitySource) and a [`Containment`] query
//! (usually a [`ParentChain`] over its [`ParentLookup`]). Elements expose their
//! [`Handlers`] through [`HoverElement`].
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_hoverable::visibility::{Visibility, VisibilityHub};
//! use understory_hoverable::{
//!     Children, Environment, Handlers, HoverElement, HoverProps, Hoverable, NoParent,
//!     ParentChain, PointerEvent,
//! };
//!
//! #[derive(Clone)]
//! struct Text {
//!     content: &'static str,
//!     handlers: Handlers<u32>,
//! }
//! impl HoverElement<u32> for Text {
//!     fn handlers(&self) -> &Handlers<u32> { &self.handlers }
//!     fn handlers_mut(&mut self) -> &mut Handlers<u32> { &mut self.handlers }
//! }
//!
//! let hub = VisibilityHub::new();
//! let env = Environment::new(true, hub.clone(), ParentChain(NoParent));
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let (i, o) = (log.clone(), log.clone());
//!
//! let props = HoverProps::new(Children::render(|hovered| Text {
//!     content: if hovered { "on" } else { "off" },
//!     handlers: Handlers::default(),
//! }))
//! .on_hover_in(move || i.borrow_mut().push("in"))
//! .on_hover_out(move || o.borrow_mut().push("out"));
//!
//! let mut hoverable: Hoverable<u32, Text> = Hoverable::mount(props, env);
//! let text = hoverable.render().unwrap().into_element();
//! hoverable.attach(Some(7));
//! assert_eq!(text.content, "off");
//!
//! text.handlers.pointer_enter(&PointerEvent { target: 7 });
//! assert_eq!(hoverable.render().unwrap().element().content, "on");
//!
//! hub.set_visibility(Visibility::Hidden);
//! assert!(!hoverable.is_hovered());
//! assert_eq!(*log.borrow(), ["in", "out"]);
//! ```
//!
//! ## Threading
//!
//! Everything here is single-threaded: state lives in `Rc`/`Cell`, and every transition
//! completes inside the host event callback that caused it.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod children;
pub mod env;
pub mod error;
pub mod handlers;
pub mod hoverable;
pub mod refs;
pub mod state;
pub mod types;
pub mod visibility;

pub use children::Children;
pub use env::{Environment, HoverCapability};
pub use error::{InvalidChildError, SubscribeError};
pub use handlers::{Handler, Handlers, HoverElement};
pub use hoverable::{HoverProps, Hoverable, Rendered};
pub use refs::{ElementRef, RefCallback, RefHolder};
pub use state::{HoverCallback, HoverFlags};
pub use types::{BlurEvent, Containment, NoParent, ParentChain, ParentLookup, PointerEvent};
