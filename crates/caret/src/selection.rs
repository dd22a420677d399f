// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use strum_macros::{Display, EnumString};

use crate::position::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SelectionDirection {
    Forward,
    Backward,
    None,
}

/// The selection: where it began (`anchor`), its active end (`focus`), and
/// the horizontal goal coordinate that consecutive line movements share.
///
/// Selections are immutable values. Every operation returns a new one and
/// the model swaps its reference wholesale, so reentrant event handlers can
/// never observe a half-updated selection.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    anchor: Position,
    focus: Position,
    goal_x: Option<f64>,
}

impl Selection {
    pub fn new(anchor: Position, focus: Position) -> Self {
        Self {
            anchor,
            focus,
            goal_x: None,
        }
    }

    /// A collapsed selection: caret only.
    pub fn caret(position: Position) -> Self {
        Self::new(position.clone(), position)
    }

    pub fn anchor(&self) -> &Position {
        &self.anchor
    }

    pub fn focus(&self) -> &Position {
        &self.focus
    }

    pub fn goal_x(&self) -> Option<f64> {
        self.goal_x
    }

    /// Anchor and focus address the same spot (same leaf, same offset).
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    /// Collapse onto the focus, discarding the anchor (never the other way
    /// round).
    #[must_use]
    pub fn collapse(&self) -> Self {
        Self::caret(self.focus.clone())
    }

    /// Keep the anchor, move the focus.
    #[must_use]
    pub fn extend_to(&self, focus: Position) -> Self {
        Self::new(self.anchor.clone(), focus)
    }

    #[must_use]
    pub(crate) fn maybe_extend(&self, focus: Position, extend: bool) -> Self {
        if extend {
            self.extend_to(focus)
        } else {
            Self::caret(focus)
        }
    }

    #[must_use]
    pub(crate) fn with_goal(mut self, goal_x: Option<f64>) -> Self {
        self.goal_x = goal_x;
        self
    }

    #[must_use]
    pub fn collapse_to_start(&self) -> Self {
        let (start, _) = self.bounds();
        Self::caret(start.clone())
    }

    #[must_use]
    pub fn collapse_to_end(&self) -> Self {
        let (_, end) = self.bounds();
        Self::caret(end.clone())
    }

    pub fn direction(&self) -> SelectionDirection {
        match self.anchor.compare(&self.focus) {
            std::cmp::Ordering::Less => SelectionDirection::Forward,
            std::cmp::Ordering::Greater => SelectionDirection::Backward,
            std::cmp::Ordering::Equal => SelectionDirection::None,
        }
    }

    /// The endpoints in document order.
    pub fn bounds(&self) -> (&Position, &Position) {
        if self.anchor.compare(&self.focus).is_le() {
            (&self.anchor, &self.focus)
        } else {
            (&self.focus, &self.anchor)
        }
    }

    /// Whether the position lies inside the selected range (endpoints
    /// included). A collapsed selection contains only its own position.
    pub fn contains(&self, position: &Position) -> bool {
        let (start, end) = self.bounds();
        start.compare(position).is_le() && position.compare(end).is_le()
    }
}
