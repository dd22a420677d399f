// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use kurbo::Rect;

use crate::dom::nodes::DomNode;
use crate::dom::UnicodeString;
use crate::layout::LayoutSource;
use crate::point;
use crate::position::Position;
use crate::rect_walk::{vertical_overlap_ratio, SAME_LINE_RATIO};
use crate::CaretModel;

impl<S> CaretModel<S>
where
    S: UnicodeString,
{
    /// Hit-test a viewport point into a caret position.
    pub fn position_from_point(
        &self,
        layout: &impl LayoutSource,
        x: f64,
        y: f64,
    ) -> Option<Position> {
        point::position_from_point(&self.dom, layout, x, y)
    }

    /// The caret rectangle(s) for a position. Atomic
    /// positions yield a zero-width rectangle on the addressed side, at
    /// least `min_caret_height` tall.
    pub fn rects_for_position(
        &self,
        layout: &impl LayoutSource,
        position: &Position,
    ) -> Vec<Rect> {
        let Some(position) = self.dom.normalize_position(position) else {
            return Vec::new();
        };
        self.dom.position_rects(layout, &position, &self.options)
    }

    /// The highlight boxes for the current selection: one rectangle per
    /// visual line fragment, in document order. Empty when collapsed.
    pub fn rects_for_selection(
        &self,
        layout: &impl LayoutSource,
    ) -> Vec<Rect> {
        let Some(selection) = &self.selection else {
            return Vec::new();
        };
        if selection.is_collapsed() {
            return Vec::new();
        }
        let (start, end) = selection.bounds();
        let mut raw: Vec<Rect> = Vec::new();

        if start.handle == end.handle {
            self.leaf_fragment_rects(
                layout,
                start,
                Some(start.offset),
                Some(end.offset),
                &mut raw,
            );
        } else {
            self.leaf_fragment_rects(
                layout,
                start,
                Some(start.offset),
                None,
                &mut raw,
            );
            for leaf in self
                .dom
                .addressable_leaves_from(&start.handle, crate::Direction::Forward)
            {
                if leaf == end.handle {
                    break;
                }
                let position = Position::new(leaf, 0);
                self.leaf_fragment_rects(layout, &position, None, None, &mut raw);
            }
            self.leaf_fragment_rects(
                layout,
                end,
                None,
                Some(end.offset),
                &mut raw,
            );
        }

        // One box per visual line: fragments sharing a line merge.
        let mut boxes: Vec<Rect> = Vec::new();
        for rect in raw {
            if rect.height() <= 0.0 {
                continue;
            }
            match boxes.last_mut() {
                Some(last)
                    if vertical_overlap_ratio(last, &rect)
                        >= SAME_LINE_RATIO =>
                {
                    *last = last.union(rect);
                }
                _ => boxes.push(rect),
            }
        }
        boxes
    }

    /// The rectangles one leaf contributes to the selection highlight,
    /// restricted to `[from, to]` where given.
    fn leaf_fragment_rects(
        &self,
        layout: &impl LayoutSource,
        position: &Position,
        from: Option<usize>,
        to: Option<usize>,
        out: &mut Vec<Rect>,
    ) {
        match self.dom.lookup_node(&position.handle) {
            DomNode::Text(text) => {
                let start = from.unwrap_or(0);
                let end = to.unwrap_or(text.data().len());
                out.extend(layout.range_rects(&position.handle, start, end));
            }
            DomNode::LineBreak(_) | DomNode::Atomic(_) => {
                // Covered only if the selection spans the whole leaf on
                // the constrained side(s).
                let covered =
                    from.unwrap_or(0) == 0 && to.unwrap_or(1) == 1;
                if covered {
                    if let Some(rect) = layout.node_rect(&position.handle) {
                        out.push(rect);
                    }
                }
            }
            DomNode::Container(_) => {}
        }
    }
}
