// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Child description and resolution.
//!
//! A coordinator wraps exactly one child. The child is given either directly, as a
//! fragment that must hold exactly one element, or as a render prop invoked with the
//! current hover value on every render.
//!
//! ```
//! use understory_hoverable::children::Children;
//! use understory_hoverable::InvalidChildError;
//!
//! let label = Children::render(|hovered| if hovered { "on" } else { "off" });
//! assert_eq!(label.resolve(true), Ok("on"));
//! assert_eq!(label.resolve(false), Ok("off"));
//!
//! let pair = Children::Fragment(vec!["a", "b"]);
//! assert_eq!(pair.resolve(false), Err(InvalidChildError::Multiple(2)));
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::error::InvalidChildError;

/// The child handed to a coordinator.
pub enum Children<El> {
    /// A single element.
    Element(El),
    /// A sequence; valid only when it holds exactly one element.
    Fragment(Vec<El>),
    /// A render prop producing the element from the current hover value.
    Render(Rc<dyn Fn(bool) -> El>),
}

impl<El> Children<El> {
    /// Build a render-prop child.
    pub fn render(f: impl Fn(bool) -> El + 'static) -> Self {
        Self::Render(Rc::new(f))
    }

    /// Resolve to the one element to bind, given the current hover value.
    ///
    /// Render props are invoked fresh; elements and single-element fragments are cloned
    /// so the stored child stays unmodified across renders.
    pub fn resolve(&self, hovered: bool) -> Result<El, InvalidChildError>
    where
        El: Clone,
    {
        match self {
            Self::Element(el) => Ok(el.clone()),
            Self::Fragment(els) => match els.as_slice() {
                [el] => Ok(el.clone()),
                [] => Err(InvalidChildError::Empty),
                many => Err(InvalidChildError::Multiple(many.len())),
            },
            Self::Render(f) => Ok(f(hovered)),
        }
    }
}

impl<El> From<El> for Children<El> {
    fn from(el: El) -> Self {
        Self::Element(el)
    }
}

impl<El: Clone> Clone for Children<El> {
    fn clone(&self) -> Self {
        match self {
            Self::Element(el) => Self::Element(el.clone()),
            Self::Fragment(els) => Self::Fragment(els.clone()),
            Self::Render(f) => Self::Render(f.clone()),
        }
    }
}

impl<El: core::fmt::Debug> core::fmt::Debug for Children<El> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Element(el) => f.debug_tuple("Element").field(el).finish(),
            Self::Fragment(els) => f.debug_tuple("Fragment").field(els).finish(),
            Self::Render(_) => f.write_str("Render(..)"),
        }
    }
}
