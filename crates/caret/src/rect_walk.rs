// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::collections::VecDeque;

use kurbo::Rect;

use crate::dom::nodes::DomNode;
use crate::dom::{Dom, DomHandle, UnicodeString};
use crate::layout::{CaretOptions, LayoutSource};
use crate::movement::Direction;
use crate::position::Position;

/// Two rectangles share a visual line when they overlap vertically by at
/// least this fraction of the shorter of the two.
pub(crate) const SAME_LINE_RATIO: f64 = 0.5;

/// `max(0, min(b1, b2) − max(t1, t2)) / min(h1, h2)`.
pub(crate) fn vertical_overlap_ratio(a: &Rect, b: &Rect) -> f64 {
    let overlap = (a.y1.min(b.y1) - a.y0.max(b.y0)).max(0.0);
    let min_height = a.height().min(b.height());
    if min_height <= 0.0 {
        0.0
    } else {
        overlap / min_height
    }
}

/// One rectangle of the stream the rect walker emits.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RectStep {
    pub(crate) handle: DomHandle,
    pub(crate) rect: Rect,
    /// Visual line index relative to the starting line: 0, 1, 2, … walking
    /// forward; 0, −1, −2, … walking backward.
    pub(crate) line_offset: i32,
    /// Whether this rectangle opened its line (it is the line's anchor).
    pub(crate) at_line_start: bool,
}

/// A single-use stream of leaf rectangles in one direction from a starting
/// position, grouped into visual lines by vertical overlap. Consumers apply
/// `skip_while`/`take_while` over it.
///
/// The starting leaf contributes exactly two sub-ranges: the zero-width
/// caret rectangle at the start offset (anchoring the starting line), then
/// the partial remainder of the leaf in the walk direction. Every following
/// addressable leaf contributes its complete rectangle set, reversed when
/// walking backward. Zero-height rectangles are dropped.
pub(crate) struct RectWalker<'a, S, L>
where
    S: UnicodeString,
    L: LayoutSource,
{
    dom: &'a Dom<S>,
    layout: &'a L,
    direction: Direction,
    options: CaretOptions,
    pending: VecDeque<(DomHandle, Rect)>,
    cursor: DomHandle,
    anchor: Option<Rect>,
    line_offset: i32,
}

impl<'a, S, L> RectWalker<'a, S, L>
where
    S: UnicodeString,
    L: LayoutSource,
{
    pub(crate) fn from_position(
        dom: &'a Dom<S>,
        layout: &'a L,
        position: &Position,
        direction: Direction,
        options: CaretOptions,
    ) -> Self {
        let mut pending = VecDeque::new();
        for rect in dom.position_rects(layout, position, &options) {
            pending.push_back((position.handle.clone(), rect));
        }
        match dom.lookup_node(&position.handle) {
            DomNode::Text(text) => {
                let mut rects = match direction {
                    Direction::Forward => layout.range_rects(
                        &position.handle,
                        position.offset,
                        text.data().len(),
                    ),
                    Direction::Backward => {
                        layout.range_rects(&position.handle, 0, position.offset)
                    }
                };
                if direction == Direction::Backward {
                    rects.reverse();
                }
                for rect in rects {
                    pending.push_back((position.handle.clone(), rect));
                }
            }
            DomNode::LineBreak(_) | DomNode::Atomic(_) => {
                let remainder_included = match direction {
                    Direction::Forward => position.offset == 0,
                    Direction::Backward => position.offset == 1,
                };
                if remainder_included {
                    if let Some(rect) =
                        dom.atomic_rect(layout, &position.handle, &options)
                    {
                        pending.push_back((position.handle.clone(), rect));
                    }
                }
            }
            DomNode::Container(_) => {}
        }

        Self {
            dom,
            layout,
            direction,
            options,
            pending,
            cursor: position.handle.clone(),
            anchor: None,
            line_offset: 0,
        }
    }

    fn refill_from_next_leaf(&mut self) -> bool {
        let next = match self.direction {
            Direction::Forward => {
                self.dom.next_addressable_leaf(&self.cursor)
            }
            Direction::Backward => {
                self.dom.prev_addressable_leaf(&self.cursor)
            }
        };
        let Some(next) = next else {
            return false;
        };
        self.cursor = next.clone();
        match self.dom.lookup_node(&next) {
            DomNode::Text(text) => {
                let mut rects =
                    self.layout.range_rects(&next, 0, text.data().len());
                if self.direction == Direction::Backward {
                    rects.reverse();
                }
                for rect in rects {
                    self.pending.push_back((next.clone(), rect));
                }
            }
            DomNode::LineBreak(_) | DomNode::Atomic(_) => {
                if let Some(rect) =
                    self.dom.atomic_rect(self.layout, &next, &self.options)
                {
                    self.pending.push_back((next, rect));
                }
            }
            DomNode::Container(_) => {}
        }
        true
    }

    fn classify(&mut self, handle: DomHandle, rect: Rect) -> Option<RectStep> {
        let Some(anchor) = self.anchor else {
            self.anchor = Some(rect);
            return Some(RectStep {
                handle,
                rect,
                line_offset: 0,
                at_line_start: true,
            });
        };
        if vertical_overlap_ratio(&anchor, &rect) >= SAME_LINE_RATIO {
            return Some(RectStep {
                handle,
                rect,
                line_offset: self.line_offset,
                at_line_start: false,
            });
        }
        // A candidate line change. Filter out regressions first: leftover
        // fragments of an already-passed soft-wrap line.
        let regression = match self.direction {
            Direction::Forward => rect.y1 <= anchor.y1,
            Direction::Backward => rect.y0 >= anchor.y0,
        };
        if regression {
            return None;
        }
        self.anchor = Some(rect);
        self.line_offset += match self.direction {
            Direction::Forward => 1,
            Direction::Backward => -1,
        };
        Some(RectStep {
            handle,
            rect,
            line_offset: self.line_offset,
            at_line_start: true,
        })
    }
}

impl<S, L> Iterator for RectWalker<'_, S, L>
where
    S: UnicodeString,
    L: LayoutSource,
{
    type Item = RectStep;

    fn next(&mut self) -> Option<RectStep> {
        loop {
            while let Some((handle, rect)) = self.pending.pop_front() {
                if rect.height() <= 0.0 {
                    continue;
                }
                if let Some(step) = self.classify(handle, rect) {
                    return Some(step);
                }
            }
            if !self.refill_from_next_leaf() {
                return None;
            }
        }
    }
}
