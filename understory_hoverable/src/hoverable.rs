// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hover coordinator.
//!
//! ## Lifecycle
//!
//! 1) [`Hoverable::mount`] with [`HoverProps`] and the host [`Environment`].
//! 2) [`Hoverable::render`] whenever the host re-renders. It resolves the child with the
//!    current hover value and, when the platform supports hover, installs composed
//!    handlers. The first such render subscribes to visibility changes.
//! 3) [`Hoverable::attach`] when the rendered element mounts (`Some(node)`) or goes
//!    away (`None`). This is the ref hook: it forwards to the external ref and gives
//!    blur handling the subtree root.
//! 4) Feed props changes through [`Hoverable::set_props`] or [`Hoverable::set_disabled`].
//! 5) [`Hoverable::unmount`] (or drop) releases the visibility subscription. Handlers
//!    still held by the host keep delegating to the child's own handlers but no longer
//!    touch hover state.
//!
//! ## See Also
//!
//! [`state`](crate::state) for the transition and dispatch rules.

use alloc::rc::Rc;

use log::{debug, warn};

use crate::children::Children;
use crate::env::Environment;
use crate::error::InvalidChildError;
use crate::handlers::{HoverElement, compose};
use crate::refs::ElementRef;
use crate::state::{HoverCallback, HoverFlags, HoverStore};
use crate::visibility::{Subscription, Visibility, VisibilityListener};

/// Per-mount configuration.
pub struct HoverProps<K, El> {
    /// The single child, or a render prop producing it.
    pub children: Children<El>,
    /// Suppresses hover and its callbacks. Defaults to `false`.
    pub disabled: bool,
    /// Fired on `false → true`.
    pub on_hover_in: Option<HoverCallback>,
    /// Fired on `true → false`, including forced resets while enabled.
    pub on_hover_out: Option<HoverCallback>,
    /// Ref that receives the rendered element.
    pub element_ref: Option<Rc<dyn ElementRef<K>>>,
}

impl<K, El> HoverProps<K, El> {
    /// Props for `children` with everything else defaulted.
    pub fn new(children: impl Into<Children<El>>) -> Self {
        Self {
            children: children.into(),
            disabled: false,
            on_hover_in: None,
            on_hover_out: None,
            element_ref: None,
        }
    }

    /// Set `disabled`.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the hover-in callback.
    pub fn on_hover_in(mut self, f: impl Fn() + 'static) -> Self {
        self.on_hover_in = Some(Rc::new(f));
        self
    }

    /// Set the hover-out callback.
    pub fn on_hover_out(mut self, f: impl Fn() + 'static) -> Self {
        self.on_hover_out = Some(Rc::new(f));
        self
    }

    /// Set the external ref.
    pub fn with_ref(mut self, element_ref: Rc<dyn ElementRef<K>>) -> Self {
        self.element_ref = Some(element_ref);
        self
    }
}

impl<K, El: core::fmt::Debug> core::fmt::Debug for HoverProps<K, El> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HoverProps")
            .field("children", &self.children)
            .field("disabled", &self.disabled)
            .field("on_hover_in", &self.on_hover_in.is_some())
            .field("on_hover_out", &self.on_hover_out.is_some())
            .field("element_ref", &self.element_ref.is_some())
            .finish()
    }
}

/// Output of [`Hoverable::render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered<El> {
    /// Hover is unsupported; the resolved child, untouched.
    Passthrough(El),
    /// The resolved child with composed handlers installed.
    Bound(El),
}

impl<El> Rendered<El> {
    /// Borrow the element to hand to the host.
    pub fn element(&self) -> &El {
        match self {
            Self::Passthrough(el) | Self::Bound(el) => el,
        }
    }

    /// Take the element to hand to the host.
    pub fn into_element(self) -> El {
        match self {
            Self::Passthrough(el) | Self::Bound(el) => el,
        }
    }

    /// Returns `true` if hover handlers were installed.
    pub fn is_bound(&self) -> bool {
        matches!(self, Self::Bound(_))
    }
}

#[derive(Debug)]
enum Watcher {
    /// No hover-tracking render yet.
    Pending,
    Active(Subscription),
    /// The host has no visibility API; stay without a watcher.
    Unavailable,
}

/// Hover coordinator for a single child.
///
/// ## Usage
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use understory_hoverable::{
///     Environment, Handlers, HoverElement, HoverProps, Hoverable, PointerEvent,
/// };
///
/// #[derive(Clone, Default)]
/// struct Button {
///     handlers: Handlers<u32>,
/// }
/// impl HoverElement<u32> for Button {
///     fn handlers(&self) -> &Handlers<u32> { &self.handlers }
///     fn handlers_mut(&mut self) -> &mut Handlers<u32> { &mut self.handlers }
/// }
///
/// let entered = Rc::new(Cell::new(false));
/// let e = entered.clone();
/// let props = HoverProps::new(Button::default()).on_hover_in(move || e.set(true));
/// let mut hoverable: Hoverable<u32, Button> = Hoverable::mount(props, Environment::headless());
///
/// let button = hoverable.render().unwrap().into_element();
/// hoverable.attach(Some(1));
/// button.handlers.pointer_enter(&PointerEvent { target: 1 });
///
/// assert!(hoverable.is_hovered());
/// assert!(entered.get());
/// ```
pub struct Hoverable<K: Copy + Eq + 'static, El> {
    store: Rc<HoverStore<K>>,
    props: HoverProps<K, El>,
    env: Environment<K>,
    watcher: Watcher,
}

impl<K: Copy + Eq + 'static, El> Hoverable<K, El> {
    /// Create a coordinator. Hover starts out `false`.
    pub fn mount(props: HoverProps<K, El>, env: Environment<K>) -> Self {
        let store = Rc::new(HoverStore::new(props.disabled));
        store.set_callbacks(props.on_hover_in.clone(), props.on_hover_out.clone());
        Self {
            store,
            props,
            env,
            watcher: Watcher::Pending,
        }
    }

    /// Current hover value.
    pub fn is_hovered(&self) -> bool {
        self.store.is_hovered()
    }

    /// Whether the coordinator is disabled.
    pub fn is_disabled(&self) -> bool {
        self.props.disabled
    }

    /// Whether the host surface is considered visible.
    pub fn is_visible(&self) -> bool {
        !self.store.flags().contains(HoverFlags::HIDDEN)
    }

    /// Snapshot of hover and gate flags.
    pub fn flags(&self) -> HoverFlags {
        self.store.flags()
    }

    /// The attached element node, if any.
    pub fn node(&self) -> Option<K> {
        self.store.node()
    }

    /// Current props.
    pub fn props(&self) -> &HoverProps<K, El> {
        &self.props
    }

    /// Resolve and bind the child for this render.
    ///
    /// Fails with [`InvalidChildError`] if the children do not resolve to exactly one
    /// element. When the platform cannot hover, any hover left over from an earlier
    /// bound render is cleared and the child passes through unbound.
    pub fn render(&mut self) -> Result<Rendered<El>, InvalidChildError>
    where
        El: HoverElement<K> + Clone,
    {
        let supported = self.env.capability.supports_hover();
        if !supported {
            // No handlers will be installed, so nothing else could turn hover off.
            self.store.set_hovered(false);
        }

        let mut child = self
            .props
            .children
            .resolve(self.store.is_hovered())
            .inspect_err(|err| warn!("hoverable render failed: {err}"))?;

        if !supported {
            return Ok(Rendered::Passthrough(child));
        }

        self.watch_visibility();
        let composed = compose(
            child.handlers(),
            Rc::downgrade(&self.store),
            self.env.containment.clone(),
        );
        *child.handlers_mut() = composed;
        Ok(Rendered::Bound(child))
    }

    /// Ref hook for the rendered element.
    ///
    /// Forwards to the external ref whether or not hover is supported.
    pub fn attach(&self, node: Option<K>) {
        self.store.set_node(node);
        if let Some(r) = &self.props.element_ref {
            r.assign(node);
        }
    }

    /// Disablement watcher input.
    ///
    /// Turning on forces hover off without firing `on_hover_out`. Turning off never
    /// restores hover; the next pointer enter does.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.props.disabled != disabled {
            debug!("hoverable disabled: {disabled}");
        }
        self.props.disabled = disabled;
        self.store.set_disabled(disabled);
    }

    /// Replace all props, as on a host re-render with new props.
    ///
    /// A changed ref is detached from the old ref and attached to the new one.
    pub fn set_props(&mut self, props: HoverProps<K, El>) {
        let node = self.store.node();
        match (&self.props.element_ref, &props.element_ref) {
            (Some(old), Some(new)) if Rc::ptr_eq(old, new) => {}
            (old, new) => {
                if let Some(old) = old {
                    old.assign(None);
                }
                if let Some(new) = new {
                    new.assign(node);
                }
            }
        }
        self.store
            .set_callbacks(props.on_hover_in.clone(), props.on_hover_out.clone());
        self.set_disabled(props.disabled);
        self.props = props;
    }

    /// Tear down. Equivalent to dropping the coordinator.
    pub fn unmount(self) {}

    fn watch_visibility(&mut self) {
        if !matches!(self.watcher, Watcher::Pending) {
            return;
        }
        self.store.set_visibility(self.env.visibility.current());
        let store = Rc::downgrade(&self.store);
        let listener: VisibilityListener = Rc::new(move |visibility: Visibility| {
            if let Some(store) = store.upgrade() {
                store.set_visibility(visibility);
            }
        });
        self.watcher = match self.env.visibility.subscribe(listener) {
            Ok(sub) => Watcher::Active(sub),
            Err(err) => {
                warn!("hoverable running without visibility watcher: {err}");
                Watcher::Unavailable
            }
        };
    }
}

impl<K: Copy + Eq + 'static, El> Drop for Hoverable<K, El> {
    fn drop(&mut self) {
        if let Some(r) = &self.props.element_ref {
            r.assign(None);
        }
        if let Watcher::Active(sub) = &self.watcher {
            debug!("hoverable unmounted; releasing {sub:?}");
        }
    }
}

impl<K: Copy + Eq + core::fmt::Debug + 'static, El: core::fmt::Debug> core::fmt::Debug
    for Hoverable<K, El>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hoverable")
            .field("flags", &self.store.flags())
            .field("node", &self.store.node())
            .field("props", &self.props)
            .field("env", &self.env)
            .field("watcher", &self.watcher)
            .finish()
    }
}
