// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use widestring::Utf16String;

use crate::tests::testutils_caret_model::{cm, tx};
use crate::tests::testutils_layout::GridLayout;
use crate::{CaretModel, Direction, ModifyType, TextUnit};

fn move_to(
    model: &mut CaretModel<Utf16String>,
    layout: &GridLayout,
    direction: Direction,
    unit: TextUnit,
) -> bool {
    model.modify(layout, ModifyType::Move, direction, unit)
}

fn focus_of(model: &CaretModel<Utf16String>) -> (Vec<usize>, usize) {
    let focus = model.selection().unwrap().focus().clone();
    (focus.handle.raw().clone(), focus.offset)
}

#[test]
fn line_boundaries_of_a_single_line() {
    let mut model = cm("<div>Hello| World</div>");
    let layout = GridLayout::new(model.dom());

    assert!(move_to(
        &mut model,
        &layout,
        Direction::Forward,
        TextUnit::LineBoundary
    ));
    assert_eq!(tx(&model), "<div>Hello World|</div>");

    let mut model = cm("<div>Hello| World</div>");
    assert!(move_to(
        &mut model,
        &layout,
        Direction::Backward,
        TextUnit::LineBoundary
    ));
    assert_eq!(tx(&model), "<div>|Hello World</div>");
}

#[test]
fn line_boundaries_respect_soft_wraps() {
    let mut model = cm("<div>ab|cdefgh</div>");
    let layout = GridLayout::wrapped(model.dom(), 4);
    assert!(move_to(
        &mut model,
        &layout,
        Direction::Forward,
        TextUnit::LineBoundary
    ));
    assert_eq!(focus_of(&model), (vec![0, 0], 4));

    let mut model = cm("<div>abcdef|gh</div>");
    assert!(move_to(
        &mut model,
        &layout,
        Direction::Backward,
        TextUnit::LineBoundary
    ));
    assert_eq!(focus_of(&model), (vec![0, 0], 4));
}

#[test]
fn line_end_over_inline_formatting_reaches_the_last_run() {
    let mut model = cm("<p>|plain<strong>bold</strong></p>");
    let layout = GridLayout::new(model.dom());
    assert!(move_to(
        &mut model,
        &layout,
        Direction::Forward,
        TextUnit::LineBoundary
    ));
    assert_eq!(focus_of(&model), (vec![0, 1, 0], 4));
}

#[test]
fn line_end_onto_a_trailing_inline_atomic_takes_its_far_side() {
    let mut model = cm(
        "<div>|ab<span class=\"atomic-component\"></span></div>",
    );
    let layout = GridLayout::new(model.dom());
    assert!(move_to(
        &mut model,
        &layout,
        Direction::Forward,
        TextUnit::LineBoundary
    ));
    assert_eq!(focus_of(&model), (vec![0, 1], 1));
}

#[test]
fn an_atomic_focus_flips_sides_in_place() {
    let mut model = cm(
        "<div>ab</div><hr class=\"atomic-component\" />|<div>cd</div>",
    );
    // The marker resolves to the rule's trailing side.
    assert_eq!(focus_of(&model), (vec![1], 1));
    let layout = GridLayout::new(model.dom());

    assert!(move_to(
        &mut model,
        &layout,
        Direction::Backward,
        TextUnit::LineBoundary
    ));
    assert_eq!(focus_of(&model), (vec![1], 0));

    assert!(move_to(
        &mut model,
        &layout,
        Direction::Forward,
        TextUnit::LineBoundary
    ));
    assert_eq!(focus_of(&model), (vec![1], 1));
}

#[test]
fn line_boundary_at_the_boundary_is_a_no_op() {
    let mut model = cm("<div>Hello World|</div>");
    let layout = GridLayout::new(model.dom());
    assert!(!move_to(
        &mut model,
        &layout,
        Direction::Forward,
        TextUnit::LineBoundary
    ));
    assert_eq!(tx(&model), "<div>Hello World|</div>");
}

#[test]
fn document_boundaries_reach_the_outermost_leaves() {
    let mut model = cm("<p>First</p><p>Sec|ond</p><p>Third</p>");
    let layout = GridLayout::new(model.dom());

    assert!(move_to(
        &mut model,
        &layout,
        Direction::Backward,
        TextUnit::DocumentBoundary
    ));
    assert_eq!(focus_of(&model), (vec![0, 0], 0));

    assert!(move_to(
        &mut model,
        &layout,
        Direction::Forward,
        TextUnit::DocumentBoundary
    ));
    assert_eq!(focus_of(&model), (vec![2, 0], 5));
}

#[test]
fn document_end_on_a_trailing_atomic_is_its_far_side() {
    let mut model = cm("<div>a|b</div><hr class=\"atomic-component\" />");
    let layout = GridLayout::new(model.dom());
    assert!(move_to(
        &mut model,
        &layout,
        Direction::Forward,
        TextUnit::DocumentBoundary
    ));
    assert_eq!(focus_of(&model), (vec![1], 1));
}

#[test]
fn document_boundary_from_the_boundary_is_a_no_op() {
    let mut model = cm("<p>|abc</p>");
    let layout = GridLayout::new(model.dom());
    assert!(!move_to(
        &mut model,
        &layout,
        Direction::Backward,
        TextUnit::DocumentBoundary
    ));
}
