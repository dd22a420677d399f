// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::dom::nodes::DomNode;
use crate::dom::{Dom, DomHandle, UnicodeString};
use crate::movement::Direction;

impl<S> Dom<S>
where
    S: UnicodeString,
{
    /// The pre-order successor of `handle`. Containers descend into their
    /// first child; atomic leaves do not descend, whatever the host nested
    /// inside them. Returns None once the walk leaves the document.
    pub(crate) fn next_node_in_document(
        &self,
        handle: &DomHandle,
    ) -> Option<DomHandle> {
        if let DomNode::Container(container) = self.lookup_node(handle) {
            if !container.children().is_empty() {
                return Some(handle.child_handle(0));
            }
        }
        let mut cur = handle.clone();
        loop {
            if cur.is_root() {
                return None;
            }
            let next = cur.next_sibling();
            if self.contains(&next) {
                return Some(next);
            }
            cur = cur.parent_handle();
        }
    }

    /// The reverse pre-order successor of `handle`: the deepest last
    /// descendant of the previous sibling, or the parent. The root is never
    /// yielded.
    pub(crate) fn prev_node_in_document(
        &self,
        handle: &DomHandle,
    ) -> Option<DomHandle> {
        if handle.is_root() {
            return None;
        }
        if handle.index_in_parent() == 0 {
            let parent = handle.parent_handle();
            if parent.is_root() {
                return None;
            }
            return Some(parent);
        }
        let mut cur = handle.prev_sibling();
        while let DomNode::Container(container) = self.lookup_node(&cur) {
            if container.children().is_empty() {
                break;
            }
            cur = cur.child_handle(container.children().len() - 1);
        }
        Some(cur)
    }

    /// The next addressable leaf after `handle` in document order: a
    /// non-empty text node or an atomic leaf. Containers are skipped, atomic
    /// leaves are never entered.
    pub fn next_addressable_leaf(
        &self,
        handle: &DomHandle,
    ) -> Option<DomHandle> {
        let mut cur = handle.clone();
        loop {
            cur = self.next_node_in_document(&cur)?;
            if self.lookup_node(&cur).is_addressable_leaf() {
                return Some(cur);
            }
        }
    }

    /// The previous addressable leaf before `handle` in document order.
    pub fn prev_addressable_leaf(
        &self,
        handle: &DomHandle,
    ) -> Option<DomHandle> {
        let mut cur = handle.clone();
        loop {
            cur = self.prev_node_in_document(&cur)?;
            if self.lookup_node(&cur).is_addressable_leaf() {
                return Some(cur);
            }
        }
    }

    pub fn first_addressable_leaf(&self) -> Option<DomHandle> {
        self.next_addressable_leaf(&DomHandle::root())
    }

    pub fn last_addressable_leaf(&self) -> Option<DomHandle> {
        let last = self.last_node_handle();
        if !last.is_root() && self.lookup_node(&last).is_addressable_leaf() {
            Some(last)
        } else {
            self.prev_addressable_leaf(&last)
        }
    }

    /// A single-use iterator over the addressable leaves strictly after (or
    /// before) `start`, in the given direction.
    pub fn addressable_leaves_from(
        &self,
        start: &DomHandle,
        direction: Direction,
    ) -> AddressableLeaves<'_, S> {
        AddressableLeaves {
            dom: self,
            cursor: start.clone(),
            direction,
            finished: false,
        }
    }
}

pub struct AddressableLeaves<'a, S>
where
    S: UnicodeString,
{
    dom: &'a Dom<S>,
    cursor: DomHandle,
    direction: Direction,
    finished: bool,
}

impl<S> Iterator for AddressableLeaves<'_, S>
where
    S: UnicodeString,
{
    type Item = DomHandle;

    fn next(&mut self) -> Option<DomHandle> {
        if self.finished {
            return None;
        }
        let next = match self.direction {
            Direction::Forward => {
                self.dom.next_addressable_leaf(&self.cursor)
            }
            Direction::Backward => {
                self.dom.prev_addressable_leaf(&self.cursor)
            }
        };
        match next {
            Some(handle) => {
                self.cursor = handle.clone();
                Some(handle)
            }
            None => {
                self.finished = true;
                None
            }
        }
    }
}
