// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

/// The path of a node inside the DOM tree: the index of the child to follow
/// at every level, starting from the document node. An empty path is the
/// document itself.
///
/// Handles sort in document pre-order: a parent sorts before its descendants,
/// and earlier siblings (with their subtrees) sort before later ones. The
/// position code relies on this.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DomHandle {
    path: Option<Vec<usize>>,
}

impl DomHandle {
    /// A handle for the root/document node.
    pub fn root() -> Self {
        Self {
            path: Some(Vec::new()),
        }
    }

    /// Create a handle out of an explicit path.
    pub fn from_raw(path: Vec<usize>) -> Self {
        Self { path: Some(path) }
    }

    /// A handle that has not been attached to a tree yet. Most operations
    /// panic on an unset handle.
    pub fn new_unset() -> Self {
        Self { path: None }
    }

    pub fn is_set(&self) -> bool {
        self.path.is_some()
    }

    pub fn is_root(&self) -> bool {
        self.raw().is_empty()
    }

    /// The raw path. Panics if the handle is unset.
    pub fn raw(&self) -> &Vec<usize> {
        self.path.as_ref().expect("Handle is unset!")
    }

    pub fn into_raw(self) -> Vec<usize> {
        self.path.expect("Handle is unset!")
    }

    /// How deep in the tree this node lives; the root has depth 0.
    pub fn depth(&self) -> usize {
        self.raw().len()
    }

    /// The index of this node among its parent's children.
    /// Panics on the root handle.
    pub fn index_in_parent(&self) -> usize {
        *self
            .raw()
            .last()
            .expect("Root handle has no parent, so no index in parent!")
    }

    /// The handle of this node's parent.
    /// Panics on the root handle.
    pub fn parent_handle(&self) -> Self {
        let raw = self.raw();
        assert!(!raw.is_empty(), "Root handle has no parent!");
        Self::from_raw(raw[..raw.len() - 1].to_vec())
    }

    /// The handle of this node's `index`-th child.
    pub fn child_handle(&self, index: usize) -> Self {
        let mut raw = self.raw().clone();
        raw.push(index);
        Self::from_raw(raw)
    }

    /// The handle of the sibling immediately after this node. The returned
    /// handle may point past the end of the parent's children.
    pub fn next_sibling(&self) -> Self {
        self.parent_handle().child_handle(self.index_in_parent() + 1)
    }

    /// The handle of the sibling immediately before this node.
    /// Panics if this node is the first child.
    pub fn prev_sibling(&self) -> Self {
        let index = self.index_in_parent();
        assert!(index > 0, "First child has no previous sibling!");
        self.parent_handle().child_handle(index - 1)
    }

    /// The prefix of this handle with the given length, i.e. the ancestor at
    /// that depth (depth 0 being the root).
    pub fn sub_handle_up_to(&self, depth: usize) -> Self {
        Self::from_raw(self.raw()[..depth].to_vec())
    }

    /// All handles from the root down to (and including) this one.
    pub fn with_ancestors(&self) -> Vec<Self> {
        (0..=self.depth())
            .map(|depth| self.sub_handle_up_to(depth))
            .collect()
    }

    /// Whether `other` lives inside the subtree rooted at this handle.
    /// A handle is not its own ancestor.
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        let own = self.raw();
        let theirs = other.raw();
        own.len() < theirs.len() && own[..] == theirs[..own.len()]
    }
}
