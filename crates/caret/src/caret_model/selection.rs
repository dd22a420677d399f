// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::dom::{DomRange, UnicodeString};
use crate::layout::LayoutSource;
use crate::movement::{next_position, Direction, ModifyType, TextUnit};
use crate::position::Position;
use crate::selection::{Selection, SelectionDirection};
use crate::CaretModel;

impl<S> CaretModel<S>
where
    S: UnicodeString,
{
    /// The current selection, None only when the document has no
    /// addressable leaf at all.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Replace the selection. Both positions are normalized; a missing
    /// focus collapses onto the anchor. Returns false (selection
    /// unchanged) if either position does not resolve in this document.
    pub fn set_selection(
        &mut self,
        anchor: &Position,
        focus: Option<&Position>,
    ) -> bool {
        let Some(anchor) = self.dom.normalize_position(anchor) else {
            return false;
        };
        let focus = match focus {
            Some(focus) => match self.dom.normalize_position(focus) {
                Some(focus) => focus,
                None => return false,
            },
            None => anchor.clone(),
        };
        self.selection = Some(Selection::new(anchor, focus));
        true
    }

    /// Collapse onto the given position (normalized first).
    pub fn collapse(&mut self, position: &Position) -> bool {
        let Some(position) = self.dom.normalize_position(position) else {
            return false;
        };
        self.selection = Some(Selection::caret(position));
        true
    }

    pub fn collapse_to_start(&mut self) -> bool {
        match &self.selection {
            Some(selection) => {
                self.selection = Some(selection.collapse_to_start());
                true
            }
            None => false,
        }
    }

    pub fn collapse_to_end(&mut self) -> bool {
        match &self.selection {
            Some(selection) => {
                self.selection = Some(selection.collapse_to_end());
                true
            }
            None => false,
        }
    }

    /// Move the focus, keeping the anchor.
    pub fn extend(&mut self, position: &Position) -> bool {
        let Some(selection) = &self.selection else {
            return false;
        };
        let Some(position) = self.dom.normalize_position(position) else {
            return false;
        };
        self.selection = Some(selection.extend_to(position));
        true
    }

    /// Select from the first addressable position to the last.
    pub fn select_all(&mut self) -> bool {
        let (Some(first), Some(last)) = (
            self.dom.first_addressable_leaf(),
            self.dom.last_addressable_leaf(),
        ) else {
            return false;
        };
        let end = self.dom.lookup_node(&last).text_len();
        self.selection = Some(Selection::new(
            Position::new(first, 0),
            Position::new(last, end),
        ));
        true
    }

    /// The directional movement operation behind all arrow-key bindings.
    ///
    /// Computes the next focus for the given unit and direction; a `move`
    /// collapses onto it, an `extend` keeps the anchor. The goal-x
    /// coordinate survives exactly as long as consecutive `line` movements
    /// follow each other. Returns false (selection untouched) when no
    /// movement is possible.
    pub fn modify(
        &mut self,
        layout: &impl LayoutSource,
        modify_type: ModifyType,
        direction: Direction,
        unit: TextUnit,
    ) -> bool {
        let Some(selection) = self.selection.clone() else {
            return false;
        };
        let goal_x = if unit == TextUnit::Line {
            selection.goal_x()
        } else {
            None
        };
        let Some(motion) = next_position(
            &self.dom,
            layout,
            selection.focus(),
            unit,
            direction,
            goal_x,
            &self.options,
        ) else {
            return false;
        };
        let extend = modify_type == ModifyType::Extend;
        let goal_x = if unit == TextUnit::Line {
            motion.goal_x
        } else {
            None
        };
        self.selection =
            Some(selection.maybe_extend(motion.position, extend).with_goal(goal_x));
        true
    }

    pub fn is_collapsed(&self) -> bool {
        self.selection
            .as_ref()
            .map(|selection| selection.is_collapsed())
            .unwrap_or(true)
    }

    pub fn direction(&self) -> SelectionDirection {
        self.selection
            .as_ref()
            .map(|selection| selection.direction())
            .unwrap_or(SelectionDirection::None)
    }

    /// Whether the position lies inside the current selection.
    pub fn contains(&self, position: &Position) -> bool {
        let Some(selection) = &self.selection else {
            return false;
        };
        let Some(position) = self.dom.normalize_position(position) else {
            return false;
        };
        selection.contains(&position)
    }

    /// The platform-facing range for the current selection:
    /// document-ordered, with atomic endpoints translated to parent-indexed
    /// offsets.
    pub fn range(&self) -> Option<DomRange> {
        let selection = self.selection.as_ref()?;
        Some(
            self.dom
                .materialize_range(selection.anchor(), selection.focus()),
        )
    }

    /// The text the selection covers, materialized through the range
    /// machinery: `\n` for line breaks, U+FFFC for atomic components.
    pub fn selected_text(&self) -> S {
        match &self.selection {
            Some(selection) => self
                .dom
                .text_between(selection.anchor(), selection.focus()),
            None => S::default(),
        }
    }
}
