// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::cmp::Ordering;

use crate::dom::nodes::DomNode;
use crate::dom::{Dom, DomHandle, UnicodeString};

/// A caret position: an addressable leaf plus an offset into it.
///
/// For text leaves the offset is a gap between characters, in code units,
/// so `0..=len` are all valid. For atomic leaves (and line breaks) the only
/// offsets are 0 ("immediately before") and 1 ("immediately after") - the
/// inside of an atomic component is never addressed.
///
/// Positions are plain values. They stay meaningful for as long as the
/// document is not mutated; operations handed a position whose node has
/// gone simply return None.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub handle: DomHandle,
    pub offset: usize,
}

impl Position {
    pub fn new(handle: DomHandle, offset: usize) -> Self {
        Self { handle, offset }
    }

    /// Total document-order comparison: leaf order first, offset breaks
    /// ties. Derived from the handle's pre-order sorting.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl<S> Dom<S>
where
    S: UnicodeString,
{
    /// Whether this position may be stored as-is: the leaf is addressable
    /// and the offset is in range for its kind.
    pub fn is_valid_position(&self, position: &Position) -> bool {
        if !self.contains(&position.handle) {
            return false;
        }
        match self.lookup_node(&position.handle) {
            DomNode::Text(text) => {
                !text.data().is_empty()
                    && position.offset <= text.data().len()
            }
            DomNode::LineBreak(_) | DomNode::Atomic(_) => position.offset <= 1,
            DomNode::Container(_) => false,
        }
    }

    /// Turn any position whose node still exists into a valid one:
    ///
    /// - container positions descend to the addressed child;
    /// - text offsets past the leaf walk forward, spending the surplus on
    ///   the following leaves;
    /// - atomic offsets clamp to {0, 1};
    /// - in-range text positions at the very end of their leaf get the
    ///   boundary-adjacency canonicalization applied.
    ///
    /// Returns None when the handle is not part of this document, or when
    /// the document has no addressable leaf to land on.
    pub fn normalize_position(&self, position: &Position) -> Option<Position> {
        if !self.contains(&position.handle) {
            return None;
        }
        let mut handle = position.handle.clone();
        let mut offset = position.offset;
        loop {
            match self.lookup_node(&handle) {
                DomNode::Container(container) => {
                    if container.children().is_empty() {
                        return self.nearest_leaf_position(&handle);
                    }
                    if offset < container.children().len() {
                        handle = handle.child_handle(offset);
                        offset = 0;
                    } else {
                        handle = self.last_node_handle_in_sub_tree(&handle);
                        offset = self.lookup_node(&handle).text_len();
                    }
                }
                DomNode::Text(text) => {
                    if text.data().is_empty() {
                        return self.nearest_leaf_position(&handle);
                    }
                    let len = text.data().len();
                    if offset > len {
                        match self.next_addressable_leaf(&handle) {
                            Some(next) => {
                                if self.lookup_node(&next).is_text_node() {
                                    offset -= len;
                                    handle = next;
                                } else {
                                    return Some(Position::new(next, 0));
                                }
                            }
                            None => {
                                return Some(self.canonicalize_boundary(
                                    Position::new(handle, len),
                                ));
                            }
                        }
                    } else {
                        return Some(self.canonicalize_boundary(
                            Position::new(handle, offset),
                        ));
                    }
                }
                DomNode::LineBreak(_) | DomNode::Atomic(_) => {
                    return Some(Position::new(handle, offset.min(1)));
                }
            }
        }
    }

    /// The canonical representative of a boundary-adjacent pair, applied to
    /// text positions sitting exactly at the end of their leaf:
    ///
    /// 1. before an inline atomic in the same block, hop onto its leading
    ///    side (`<br>` is exempt - resting positions never silently move
    ///    onto a line break);
    /// 2. between two texts that are both inside inline wrappers, stay on
    ///    the left side of the mark-to-mark boundary;
    /// 3. from plain text into a following inline wrapper, enter it;
    /// 4. anything else (plain-to-plain, block-separated) stays put.
    pub(crate) fn canonicalize_boundary(&self, position: Position) -> Position {
        let DomNode::Text(text) = self.lookup_node(&position.handle) else {
            return position;
        };
        if position.offset != text.data().len() {
            return position;
        }
        let Some(next) = self.next_addressable_leaf(&position.handle) else {
            return position;
        };
        if !self.in_same_block(&position.handle, &next) {
            return position;
        }
        match self.lookup_node(&next) {
            DomNode::Atomic(atomic) if !atomic.is_block_node() => {
                Position::new(next, 0)
            }
            DomNode::Text(_) => {
                let current_wrapped =
                    self.is_inline_wrapped(&position.handle);
                let next_wrapped = self.is_inline_wrapped(&next);
                if !current_wrapped && next_wrapped {
                    Position::new(next, 0)
                } else {
                    position
                }
            }
            _ => position,
        }
    }

    /// The addressable position closest to an unaddressable node: the start
    /// of the next leaf, failing that the end of the previous one.
    fn nearest_leaf_position(&self, handle: &DomHandle) -> Option<Position> {
        if let Some(next) = self.next_addressable_leaf(handle) {
            return Some(Position::new(next, 0));
        }
        if let Some(prev) = self.prev_addressable_leaf(handle) {
            let end = self.lookup_node(&prev).text_len();
            return Some(Position::new(prev, end));
        }
        None
    }
}
