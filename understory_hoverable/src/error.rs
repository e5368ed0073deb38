// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

/// Child resolution did not produce exactly one element.
///
/// Returned by [`Children::resolve`](crate::children::Children::resolve) and
/// [`Hoverable::render`](crate::hoverable::Hoverable::render).
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidChildError {
    /// A fragment with no elements was supplied.
    #[error("hoverable expects exactly one child, found none")]
    Empty,
    /// A fragment with more than one element was supplied.
    #[error("hoverable expects exactly one child, found {0}")]
    Multiple(usize),
}

/// A [`VisibilitySource`](crate::visibility::VisibilitySource) could not register a listener.
///
/// The coordinator treats this as non-fatal and runs without a visibility watcher.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubscribeError {
    /// The host has no visibility notifications at all.
    #[error("host does not report visibility changes")]
    Unsupported,
}
