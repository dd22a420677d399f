// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::dom::nodes::DomNode;
use crate::dom::{Dom, DomHandle, UnicodeString};
use crate::movement::Direction;
use crate::position::Position;

/// One end of a materialized range, in the shape platform Range objects
/// want: a text leaf with a code-unit offset, or a container with a
/// child-index offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeBoundary {
    pub node: DomHandle,
    pub offset: usize,
}

/// A concrete `[start, end]` range in document order, ready for the
/// renderer. Atomic endpoints have been translated to parent-indexed
/// offsets: `(atomic, 0)` becomes `(parent, index_of(atomic))` and
/// `(atomic, 1)` becomes `(parent, index_of(atomic) + 1)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomRange {
    pub start: RangeBoundary,
    pub end: RangeBoundary,
}

impl DomRange {
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

impl<S> Dom<S>
where
    S: UnicodeString,
{
    /// Build the platform-facing range for two positions, in document
    /// order whichever way round they come in.
    pub fn materialize_range(
        &self,
        first: &Position,
        second: &Position,
    ) -> DomRange {
        let (start, end) = if first.compare(second).is_le() {
            (first, second)
        } else {
            (second, first)
        };
        DomRange {
            start: self.range_boundary(start),
            end: self.range_boundary(end),
        }
    }

    fn range_boundary(&self, position: &Position) -> RangeBoundary {
        match self.lookup_node(&position.handle) {
            DomNode::Text(_) => RangeBoundary {
                node: position.handle.clone(),
                offset: position.offset,
            },
            DomNode::LineBreak(_) | DomNode::Atomic(_) => RangeBoundary {
                node: position.handle.parent_handle(),
                offset: position.handle.index_in_parent() + position.offset,
            },
            DomNode::Container(_) => RangeBoundary {
                node: position.handle.clone(),
                offset: position.offset,
            },
        }
    }

    /// The text between two positions: text leaf content (partial at the
    /// endpoints), `\n` for line breaks, U+FFFC for atomic leaves.
    pub fn text_between(&self, first: &Position, second: &Position) -> S {
        let (start, end) = if first.compare(second).is_le() {
            (first, second)
        } else {
            (second, first)
        };
        let mut out = S::default();

        if start.handle == end.handle {
            match self.lookup_node(&start.handle) {
                DomNode::Text(text) => {
                    out.append(
                        &text.data().substring(start.offset..end.offset),
                    );
                }
                node @ (DomNode::LineBreak(_) | DomNode::Atomic(_)) => {
                    if start.offset == 0 && end.offset == 1 {
                        push_leaf_placeholder(node, &mut out);
                    }
                }
                DomNode::Container(_) => {}
            }
            return out;
        }

        match self.lookup_node(&start.handle) {
            DomNode::Text(text) => {
                let len = text.data().len();
                out.append(&text.data().substring(start.offset..len));
            }
            node @ (DomNode::LineBreak(_) | DomNode::Atomic(_)) => {
                if start.offset == 0 {
                    push_leaf_placeholder(node, &mut out);
                }
            }
            DomNode::Container(_) => {}
        }

        for leaf in
            self.addressable_leaves_from(&start.handle, Direction::Forward)
        {
            if leaf == end.handle {
                break;
            }
            let node = self.lookup_node(&leaf);
            match node {
                DomNode::Text(text) => out.append(text.data()),
                _ => push_leaf_placeholder(node, &mut out),
            }
        }

        match self.lookup_node(&end.handle) {
            DomNode::Text(text) => {
                out.append(&text.data().substring(0..end.offset));
            }
            node @ (DomNode::LineBreak(_) | DomNode::Atomic(_)) => {
                if end.offset == 1 {
                    push_leaf_placeholder(node, &mut out);
                }
            }
            DomNode::Container(_) => {}
        }

        out
    }
}

fn push_leaf_placeholder<S>(node: &DomNode<S>, out: &mut S)
where
    S: UnicodeString,
{
    match node {
        DomNode::LineBreak(_) => out.append(&S::from_str("\n")),
        DomNode::Atomic(_) => out.append(&S::from_str("\u{FFFC}")),
        _ => {}
    }
}
