// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use kurbo::Rect;

use crate::dom::nodes::DomNode;
use crate::dom::{Dom, DomHandle, UnicodeString};
use crate::position::Position;

/// Tunables the host hands over at attach time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaretOptions {
    /// Rectangles produced for atomic leaves are expanded vertically to at
    /// least this height, so the rendered caret stays visible next to
    /// zero-height elements like an unstyled `<hr>`.
    pub min_caret_height: f64,
}

impl Default for CaretOptions {
    fn default() -> Self {
        Self {
            min_caret_height: 18.0,
        }
    }
}

/// A raw hit-test candidate as reported by the host layout engine. The node
/// may be any node of the document - the point resolver refines it into a
/// valid caret position.
#[derive(Clone, Debug, PartialEq)]
pub struct PointCandidate {
    pub node: DomHandle,
    pub offset: usize,
}

/// What the core needs from the host layout engine. All rectangles are in
/// viewport coordinates; every call may trigger synchronous layout on the
/// host side, so results are read once per operation and never cached here.
pub trait LayoutSource {
    /// The client rectangles of the code-unit range `[start, end]` of a
    /// text leaf. A collapsed range yields the caret rectangle at that
    /// offset. More than one rectangle appears when the range crosses a
    /// soft wrap. An empty vector means layout is unavailable for the node.
    fn range_rects(
        &self,
        leaf: &DomHandle,
        start: usize,
        end: usize,
    ) -> Vec<Rect>;

    /// The bounding rectangle of an element, or None when the node has no
    /// layout.
    fn node_rect(&self, node: &DomHandle) -> Option<Rect>;

    /// The layout engine's caret-from-point service: the candidate node and
    /// offset nearest the given viewport coordinates.
    fn caret_from_point(&self, x: f64, y: f64) -> Option<PointCandidate>;

    /// A precise text offset for a point known to lie on the given leaf.
    /// Hosts whose caret-from-point already answers per-node queries can
    /// leave the default.
    fn caret_in_node(
        &self,
        _leaf: &DomHandle,
        _x: f64,
        _y: f64,
    ) -> Option<usize> {
        None
    }
}

/// Expand `rect` vertically (symmetrically around its centre) until it is at
/// least `min_height` tall.
pub(crate) fn ensure_min_height(rect: Rect, min_height: f64) -> Rect {
    if rect.height() >= min_height {
        return rect;
    }
    let mid = (rect.y0 + rect.y1) / 2.0;
    Rect::new(
        rect.x0,
        mid - min_height / 2.0,
        rect.x1,
        mid + min_height / 2.0,
    )
}

impl<S> Dom<S>
where
    S: UnicodeString,
{
    /// The rectangles a caret at `position` occupies: usually one, two or
    /// more when the position sits on a soft-wrap boundary. Atomic
    /// positions map to a zero-width rectangle on the addressed side of the
    /// element, never shorter than the configured minimum caret height.
    ///
    /// Pure given current layout. Returns an empty vector for positions the
    /// layout cannot see.
    pub fn position_rects(
        &self,
        layout: &impl LayoutSource,
        position: &Position,
        options: &CaretOptions,
    ) -> Vec<Rect> {
        if !self.contains(&position.handle) {
            return Vec::new();
        }
        match self.lookup_node(&position.handle) {
            DomNode::Text(_) => layout.range_rects(
                &position.handle,
                position.offset,
                position.offset,
            ),
            DomNode::LineBreak(_) | DomNode::Atomic(_) => {
                let Some(rect) = layout.node_rect(&position.handle) else {
                    return Vec::new();
                };
                let rect = ensure_min_height(rect, options.min_caret_height);
                let x = if position.offset == 0 { rect.x0 } else { rect.x1 };
                vec![Rect::new(x, rect.y0, x, rect.y1)]
            }
            DomNode::Container(_) => Vec::new(),
        }
    }

    /// The full bounding rectangle of an atomic leaf, min-height applied.
    /// Used by the rect walker, which needs the element's span rather than
    /// a caret sliver.
    pub(crate) fn atomic_rect(
        &self,
        layout: &impl LayoutSource,
        handle: &DomHandle,
        options: &CaretOptions,
    ) -> Option<Rect> {
        let rect = layout.node_rect(handle)?;
        Some(ensure_min_height(rect, options.min_caret_height))
    }
}
