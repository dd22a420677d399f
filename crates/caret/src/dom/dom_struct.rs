// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::fmt::Display;

use crate::dom::nodes::{ContainerNode, DomNode};
use crate::dom::to_html::ToHtml;
use crate::dom::{DomHandle, UnicodeString};

/// The editor root: a tree of containers with text and atomic leaves.
///
/// The caret core reads this tree; the only writes happen while a document
/// is parsed and once at attach time (whitespace normalization). Handles are
/// stable from then on, so a `DomHandle` is a durable leaf identity for as
/// long as the host refrains from mutating the document.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Dom<S>
where
    S: UnicodeString,
{
    document: DomNode<S>,
}

impl<S> Dom<S>
where
    S: UnicodeString,
{
    pub fn new(top_level_items: Vec<DomNode<S>>) -> Self {
        let mut document = ContainerNode::default();
        document.set_handle(DomHandle::root());
        document.append_children(top_level_items);

        Self {
            document: DomNode::Container(document),
        }
    }

    pub fn document(&self) -> &ContainerNode<S> {
        // Would be nice if we could avoid this, but it is really convenient
        // in several places to be able to treat document as a DomNode.
        if let DomNode::Container(ret) = &self.document {
            ret
        } else {
            panic!("Document should always be a Container!")
        }
    }

    pub fn document_mut(&mut self) -> &mut ContainerNode<S> {
        if let DomNode::Container(ret) = &mut self.document {
            ret
        } else {
            panic!("Document should always be a Container!")
        }
    }

    pub fn document_node(&self) -> &DomNode<S> {
        &self.document
    }

    pub fn into_document_node(self) -> DomNode<S> {
        self.document
    }

    pub fn children(&self) -> &Vec<DomNode<S>> {
        self.document().children()
    }

    pub(crate) fn document_handle(&self) -> DomHandle {
        self.document.handle()
    }

    /// Returns the last node handle of the Dom. It's useful for reverse
    /// traversals that should start at the end of the document.
    pub fn last_node_handle(&self) -> DomHandle {
        self.last_node_handle_in_sub_tree(&DomHandle::root())
    }

    /// Returns the handle of the last node of the given sub-tree, searching
    /// recursively. Atomic leaves count as last nodes themselves: their
    /// content is opaque.
    pub fn last_node_handle_in_sub_tree(
        &self,
        handle: &DomHandle,
    ) -> DomHandle {
        if let DomNode::Container(container) = self.lookup_node(handle) {
            if !container.children().is_empty() {
                let cur_handle =
                    handle.child_handle(container.children().len() - 1);
                self.last_node_handle_in_sub_tree(&cur_handle)
            } else {
                // Empty container node.
                handle.clone()
            }
        } else {
            // Leaf node
            handle.clone()
        }
    }

    /// Find the node based on its handle.
    /// Panics if the handle is unset or invalid.
    pub fn lookup_node(&self, node_handle: &DomHandle) -> &DomNode<S> {
        let mut node = &self.document;
        if !node_handle.is_set() {
            panic!("Attempting to lookup a node using an unset DomHandle");
        }
        for idx in node_handle.raw() {
            node = match node {
                DomNode::Container(n) => n.get_child(*idx).expect(
                    "Handle is invalid: it refers to a child index which is \
                    too large for the number of children in this node.",
                ),
                DomNode::Text(_) => panic!(
                    "Handle is invalid: refers to the child of a text node, \
                    but text nodes cannot have children."
                ),
                DomNode::LineBreak(_) => panic!(
                    "Handle is invalid: refers to the child of a line break, \
                    but line breaks cannot have children."
                ),
                DomNode::Atomic(_) => panic!(
                    "Handle is invalid: refers to the child of an atomic \
                    component, whose content is opaque to the model."
                ),
            }
        }

        node
    }

    /// Find the node based on its handle and return a mutable reference.
    /// Panics if the handle is unset or invalid.
    pub fn lookup_node_mut(
        &mut self,
        node_handle: &DomHandle,
    ) -> &mut DomNode<S> {
        let mut node = &mut self.document;
        if !node_handle.is_set() {
            panic!("Attempting to lookup a node using an unset DomHandle");
        }
        for idx in node_handle.raw() {
            node = match node {
                DomNode::Container(n) => n.get_child_mut(*idx).expect(
                    "Handle is invalid: it refers to a child index which is \
                    too large for the number of children in this node.",
                ),
                _ => panic!(
                    "Handle is invalid: refers to the child of a leaf node."
                ),
            }
        }

        node
    }

    /// Look up the parent node of the node pointed to by this handle.
    /// Panics if this handle is the root or invalid.
    pub fn parent(&self, handle: &DomHandle) -> &ContainerNode<S> {
        let parent = self.lookup_node(&handle.parent_handle());
        if let DomNode::Container(parent) = parent {
            parent
        } else {
            panic!("Parent node was not a container!");
        }
    }

    /// Checks if the passed [handle] exists in the DOM.
    pub fn contains(&self, handle: &DomHandle) -> bool {
        if !handle.is_set() {
            return false;
        }
        let mut node = &self.document;
        for idx in handle.raw() {
            match node {
                DomNode::Container(n) => match n.get_child(*idx) {
                    Some(child) => node = child,
                    None => return false,
                },
                _ => return false,
            }
        }
        true
    }

    /// Checks if the passed handle is the last one in its parent.
    pub fn is_last_in_parent(&self, handle: &DomHandle) -> bool {
        self.parent(handle).children().len() == handle.index_in_parent() + 1
    }

    /// Gets the previous sibling of the node if it exists.
    pub fn prev_sibling(&self, handle: &DomHandle) -> Option<&DomNode<S>> {
        if handle.index_in_parent() == 0 {
            return None;
        }
        let prev_handle = handle.prev_sibling();
        if self.contains(&prev_handle) {
            Some(self.lookup_node(&prev_handle))
        } else {
            None
        }
    }

    /// Gets the next sibling of the node if it exists.
    pub fn next_sibling(&self, handle: &DomHandle) -> Option<&DomNode<S>> {
        let next_handle = handle.next_sibling();
        if self.contains(&next_handle) {
            Some(self.lookup_node(&next_handle))
        } else {
            None
        }
    }

    /// Return the number of code units in the string representation of this
    /// Dom. Atomic leaves and line breaks count as one unit each.
    pub fn text_len(&self) -> usize {
        self.document.text_len()
    }
}

impl<S> Display for Dom<S>
where
    S: UnicodeString,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_html().to_string())
    }
}
