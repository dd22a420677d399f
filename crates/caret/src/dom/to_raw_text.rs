// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::dom::nodes::DomNode;
use crate::dom::{Dom, UnicodeString};

/// The plain text of a subtree: text content with `\n` for line breaks and
/// U+FFFC (the object replacement character) standing in for each atomic
/// leaf. Container boundaries contribute nothing.
pub trait ToRawText<S>
where
    S: UnicodeString,
{
    fn to_raw_text(&self) -> S;
}

impl<S> ToRawText<S> for DomNode<S>
where
    S: UnicodeString,
{
    fn to_raw_text(&self) -> S {
        match self {
            DomNode::Text(n) => n.data().clone(),
            DomNode::LineBreak(_) => S::from_str("\n"),
            DomNode::Atomic(_) => S::from_str("\u{FFFC}"),
            DomNode::Container(n) => {
                let mut text = S::default();
                for child in n.children() {
                    text.append(&child.to_raw_text());
                }
                text
            }
        }
    }
}

impl<S> ToRawText<S> for Dom<S>
where
    S: UnicodeString,
{
    fn to_raw_text(&self) -> S {
        self.document_node().to_raw_text()
    }
}
