// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Assertions about the healthy state of an attached Dom. We can use these
//! in tests, and via the `assert-invariants` feature a host can run them
//! after handing over a document it built itself.

#![cfg(any(test, feature = "assert-invariants"))]

use crate::dom::nodes::DomNode;
use crate::dom::{Dom, DomHandle, UnicodeString};

impl<S> Dom<S>
where
    S: UnicodeString,
{
    /// Panics if the Dom is not in a state the caret core can safely walk.
    pub fn assert_invariants(&self) {
        self.assert_handles_cascade(self.document_node(), &DomHandle::root());
        self.assert_no_empty_or_adjacent_text(self.document_node());
    }

    fn assert_handles_cascade(&self, node: &DomNode<S>, expected: &DomHandle) {
        assert!(
            node.handle().is_set(),
            "Node has no handle set: every attached node must know its path"
        );
        assert_eq!(
            node.handle(),
            *expected,
            "Node's handle disagrees with its position in the tree"
        );
        if let DomNode::Container(container) = node {
            for (index, child) in container.children().iter().enumerate() {
                self.assert_handles_cascade(
                    child,
                    &expected.child_handle(index),
                );
            }
        }
    }

    fn assert_no_empty_or_adjacent_text(&self, node: &DomNode<S>) {
        let DomNode::Container(container) = node else {
            return;
        };
        let mut prev_was_text = false;
        for child in container.children() {
            if let DomNode::Text(text) = child {
                assert!(
                    !text.data().is_empty(),
                    "Empty text node found: normalization should have \
                    removed it"
                );
                assert!(
                    !prev_was_text,
                    "Adjacent text siblings found: normalization should \
                    have merged them"
                );
                prev_was_text = true;
            } else {
                prev_was_text = false;
            }
            self.assert_no_empty_or_adjacent_text(child);
        }
    }
}
