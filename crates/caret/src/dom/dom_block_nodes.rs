// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::dom::{Dom, DomHandle, UnicodeString};

impl<S> Dom<S>
where
    S: UnicodeString,
{
    /// The handle of the nearest ancestor container that establishes a
    /// block box, falling back to the document root.
    pub(crate) fn block_ancestor_of(&self, handle: &DomHandle) -> DomHandle {
        for ancestor in handle.with_ancestors().iter().rev() {
            let node = self.lookup_node(ancestor);
            if node.is_container_node() && node.is_block_node() {
                return ancestor.clone();
            }
        }
        DomHandle::root()
    }

    /// Whether two nodes flow inside the same block box. Character movement
    /// uses this to tell an inline run boundary from a paragraph change.
    pub(crate) fn in_same_block(
        &self,
        first: &DomHandle,
        second: &DomHandle,
    ) -> bool {
        self.block_ancestor_of(first) == self.block_ancestor_of(second)
    }

    /// Whether the node's immediate parent is an inline wrapper (formatting
    /// element, link, inline generic container).
    pub(crate) fn is_inline_wrapped(&self, handle: &DomHandle) -> bool {
        if handle.is_root() {
            return false;
        }
        let parent = handle.parent_handle();
        if parent.is_root() {
            return false;
        }
        let node = self.lookup_node(&parent);
        node.is_container_node() && !node.is_block_node()
    }
}
