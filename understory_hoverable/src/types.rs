// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event payloads and tree queries consumed by the coordinator.
//!
//! ## Overview
//!
//! The host delivers [`PointerEvent`] and [`BlurEvent`] values to the bound child's
//! [`Handlers`](crate::handlers::Handlers). Blur handling needs to know whether a node
//! lies inside the bound element's subtree; that question is answered by a
//! [`Containment`] implementation, usually a [`ParentChain`] over the host's
//! [`ParentLookup`].

/// Payload of a pointer enter or pointer leave event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PointerEvent<K> {
    /// Node the host reported as the event target.
    pub target: K,
}

/// Payload of a blur event.
///
/// Mirrors the DOM pair `target` / `relatedTarget`: the node that lost focus and
/// the node that is about to receive it. Either may be unknown.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlurEvent<K> {
    /// Node losing focus, if known.
    pub target: Option<K>,
    /// Node gaining focus, or `None` when focus leaves the surface entirely.
    pub related_target: Option<K>,
}

/// Look up the parent of a node in the host tree.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// A parent provider for flat hosts: every node is a root.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParent;

impl<K> ParentLookup<K> for NoParent {
    #[inline]
    fn parent_of(&self, _node: &K) -> Option<K> {
        None
    }
}

/// Answer subtree membership questions for blur handling.
pub trait Containment<K> {
    /// Returns `true` if `node` is `ancestor` itself or one of its descendants.
    fn contains(&self, ancestor: &K, node: &K) -> bool;
}

/// [`Containment`] derived from a [`ParentLookup`] by walking from the node up to its root.
///
/// The parent relation must be acyclic.
#[derive(Copy, Clone, Debug, Default)]
pub struct ParentChain<P>(pub P);

impl<K: Copy + Eq, P: ParentLookup<K>> Containment<K> for ParentChain<P> {
    fn contains(&self, ancestor: &K, node: &K) -> bool {
        let mut cur = Some(*node);
        while let Some(n) = cur {
            if n == *ancestor {
                return true;
            }
            cur = self.0.parent_of(&n);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1 ─┬─ 2 ── 3
    //    └─ 4
    // 10 ── 11
    struct Parents;
    impl ParentLookup<u32> for Parents {
        fn parent_of(&self, node: &u32) -> Option<u32> {
            match node {
                2 | 4 => Some(1),
                3 => Some(2),
                11 => Some(10),
                _ => None,
            }
        }
    }

    #[test]
    fn chain_contains_self_and_descendants() {
        let tree = ParentChain(Parents);
        assert!(tree.contains(&1, &1));
        assert!(tree.contains(&1, &3));
        assert!(tree.contains(&2, &3));
        assert!(tree.contains(&1, &4));
    }

    #[test]
    fn chain_rejects_siblings_ancestors_and_other_roots() {
        let tree = ParentChain(Parents);
        assert!(!tree.contains(&2, &4), "sibling is not contained");
        assert!(!tree.contains(&3, &1), "ancestor is not contained");
        assert!(!tree.contains(&1, &11), "other root is not contained");
    }

    #[test]
    fn flat_tree_only_contains_self() {
        let tree = ParentChain(NoParent);
        assert!(tree.contains(&7_u32, &7));
        assert!(!tree.contains(&7_u32, &8));
    }
}
