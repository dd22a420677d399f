// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use kurbo::Rect;
use strum_macros::{Display, EnumString};

use crate::char::{next_grapheme_offset, prev_grapheme_offset};
use crate::dom::nodes::DomNode;
use crate::dom::{Dom, DomHandle, UnicodeString};
use crate::layout::{CaretOptions, LayoutSource};
use crate::point::position_from_point;
use crate::position::Position;
use crate::rect_walk::{RectStep, RectWalker};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TextUnit {
    Character,
    Line,
    LineBoundary,
    DocumentBoundary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ModifyType {
    Move,
    Extend,
}

/// The outcome of one movement: where the focus goes, and the goal-x that
/// survives it (line movement only).
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Motion {
    pub(crate) position: Position,
    pub(crate) goal_x: Option<f64>,
}

/// The single movement entry point. Returns None when no movement is
/// possible: the document edge was reached, the position no longer exists,
/// or layout could not see the target. Callers leave the selection
/// unchanged in that case.
pub(crate) fn next_position<S, L>(
    dom: &Dom<S>,
    layout: &L,
    from: &Position,
    unit: TextUnit,
    direction: Direction,
    goal_x: Option<f64>,
    options: &CaretOptions,
) -> Option<Motion>
where
    S: UnicodeString,
    L: LayoutSource,
{
    if !dom.is_valid_position(from) {
        return None;
    }
    let motion = match unit {
        TextUnit::Character => {
            character_motion(dom, from, direction).map(|position| Motion {
                position,
                goal_x: None,
            })
        }
        TextUnit::Line => {
            line_motion(dom, layout, from, direction, goal_x, options)
        }
        TextUnit::LineBoundary => {
            line_boundary_motion(dom, layout, from, direction, options)
                .map(|position| Motion {
                    position,
                    goal_x: None,
                })
        }
        TextUnit::DocumentBoundary => document_boundary_motion(dom, direction)
            .map(|position| Motion {
                position,
                goal_x: None,
            }),
    }?;
    if motion.position == *from {
        None
    } else {
        Some(motion)
    }
}

fn character_motion<S>(
    dom: &Dom<S>,
    from: &Position,
    direction: Direction,
) -> Option<Position>
where
    S: UnicodeString,
{
    let mut landed = step_once(dom, from, direction)?;
    // A <br> is a visual line break with no addressable content of its own:
    // keep crossing until the caret rests somewhere else.
    while dom.lookup_node(&landed.handle).is_line_break() {
        landed = cross_leaf(dom, &landed.handle, false, direction)?;
    }
    Some(landed)
}

fn step_once<S>(
    dom: &Dom<S>,
    from: &Position,
    direction: Direction,
) -> Option<Position>
where
    S: UnicodeString,
{
    match dom.lookup_node(&from.handle) {
        DomNode::Text(text) => match direction {
            Direction::Forward => {
                match next_grapheme_offset(text.data(), from.offset) {
                    Some(offset) => Some(dom.canonicalize_boundary(
                        Position::new(from.handle.clone(), offset),
                    )),
                    None => cross_leaf(dom, &from.handle, true, direction),
                }
            }
            Direction::Backward => {
                match prev_grapheme_offset(text.data(), from.offset) {
                    Some(offset) => {
                        Some(Position::new(from.handle.clone(), offset))
                    }
                    None => cross_leaf(dom, &from.handle, true, direction),
                }
            }
        },
        DomNode::LineBreak(_) => {
            cross_leaf(dom, &from.handle, false, direction)
        }
        DomNode::Atomic(_) => match direction {
            Direction::Forward => {
                if from.offset == 0 {
                    Some(Position::new(from.handle.clone(), 1))
                } else {
                    cross_leaf(dom, &from.handle, false, direction)
                }
            }
            Direction::Backward => {
                if from.offset == 1 {
                    Some(Position::new(from.handle.clone(), 0))
                } else {
                    cross_leaf(dom, &from.handle, false, direction)
                }
            }
        },
        DomNode::Container(_) => None,
    }
}

/// Step over the edge of `from` onto the neighbouring addressable leaf.
///
/// Entering a text leaf from an atomic (or across a block boundary) lands
/// on its outermost offset: the caret changes sides/lines without eating a
/// character. Crossing an inline run boundary between two texts instead
/// advances one character in, because the new leaf's first position is
/// visually the spot we already occupy.
fn cross_leaf<S>(
    dom: &Dom<S>,
    from: &DomHandle,
    from_text: bool,
    direction: Direction,
) -> Option<Position>
where
    S: UnicodeString,
{
    match direction {
        Direction::Forward => {
            let next = dom.next_addressable_leaf(from)?;
            match dom.lookup_node(&next) {
                DomNode::Text(text)
                    if from_text && dom.in_same_block(from, &next) =>
                {
                    let offset = next_grapheme_offset(text.data(), 0)
                        .unwrap_or(text.data().len());
                    Some(
                        dom.canonicalize_boundary(Position::new(next, offset)),
                    )
                }
                _ => Some(Position::new(next, 0)),
            }
        }
        Direction::Backward => {
            let prev = dom.prev_addressable_leaf(from)?;
            match dom.lookup_node(&prev) {
                DomNode::Text(text) => {
                    let len = text.data().len();
                    if from_text && dom.in_same_block(from, &prev) {
                        let offset =
                            prev_grapheme_offset(text.data(), len).unwrap_or(0);
                        Some(Position::new(prev, offset))
                    } else {
                        Some(Position::new(prev, len))
                    }
                }
                _ => Some(Position::new(prev, 1)),
            }
        }
    }
}

fn line_motion<S, L>(
    dom: &Dom<S>,
    layout: &L,
    from: &Position,
    direction: Direction,
    goal_x: Option<f64>,
    options: &CaretOptions,
) -> Option<Motion>
where
    S: UnicodeString,
    L: LayoutSource,
{
    let goal = match goal_x {
        Some(x) => x,
        None => dom.position_rects(layout, from, options).first()?.x0,
    };
    let target = match direction {
        Direction::Forward => 1,
        Direction::Backward => -1,
    };
    let best = RectWalker::from_position(dom, layout, from, direction, *options)
        .skip_while(|step| step.line_offset == 0)
        .take_while(|step: &RectStep| step.line_offset == target)
        .min_by(|a, b| {
            horizontal_distance(goal, &a.rect)
                .total_cmp(&horizontal_distance(goal, &b.rect))
        })?;
    let mid_y = (best.rect.y0 + best.rect.y1) / 2.0;
    let position = position_from_point(dom, layout, goal, mid_y)?;
    Some(Motion {
        position,
        goal_x: Some(goal),
    })
}

/// Horizontal affinity of a rectangle to the goal-x: containment wins
/// outright, otherwise the distance to the rectangle's centre.
fn horizontal_distance(goal: f64, rect: &Rect) -> f64 {
    if goal >= rect.x0 && goal <= rect.x1 {
        0.0
    } else {
        let center = (rect.x0 + rect.x1) / 2.0;
        (goal - center).abs()
    }
}

fn line_boundary_motion<S, L>(
    dom: &Dom<S>,
    layout: &L,
    from: &Position,
    direction: Direction,
    options: &CaretOptions,
) -> Option<Position>
where
    S: UnicodeString,
    L: LayoutSource,
{
    // A forward line-end move on an atomic focus flips to its trailing
    // side in place (and the mirror backward); the line does not change.
    if dom.lookup_node(&from.handle).is_atomic_leaf() {
        match direction {
            Direction::Forward if from.offset == 0 => {
                return Some(Position::new(from.handle.clone(), 1));
            }
            Direction::Backward if from.offset == 1 => {
                return Some(Position::new(from.handle.clone(), 0));
            }
            _ => {}
        }
    }
    let last = RectWalker::from_position(dom, layout, from, direction, *options)
        .take_while(|step| step.line_offset == 0)
        .last()?;
    let x = match direction {
        Direction::Forward => last.rect.x1,
        Direction::Backward => last.rect.x0,
    };
    let mid_y = (last.rect.y0 + last.rect.y1) / 2.0;
    position_from_point(dom, layout, x, mid_y)
}

fn document_boundary_motion<S>(
    dom: &Dom<S>,
    direction: Direction,
) -> Option<Position>
where
    S: UnicodeString,
{
    match direction {
        Direction::Backward => dom
            .first_addressable_leaf()
            .map(|leaf| Position::new(leaf, 0)),
        Direction::Forward => dom.last_addressable_leaf().map(|leaf| {
            let end = dom.lookup_node(&leaf).text_len();
            Position::new(leaf, end)
        }),
    }
}
