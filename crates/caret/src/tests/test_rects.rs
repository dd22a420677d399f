// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use kurbo::Rect;

use crate::tests::testutils_caret_model::cm;
use crate::tests::testutils_layout::GridLayout;
use crate::{DomHandle, Position};

fn pos(path: Vec<usize>, offset: usize) -> Position {
    Position::new(DomHandle::from_raw(path), offset)
}

#[test]
fn a_text_caret_rect_is_zero_width_at_its_gap() {
    let model = cm("<div>|abc</div>");
    let layout = GridLayout::new(model.dom());
    let rects = model.rects_for_position(&layout, &pos(vec![0, 0], 2));
    assert_eq!(rects, vec![Rect::new(16.0, 0.0, 16.0, 16.0)]);
}

#[test]
fn an_atomic_caret_rect_is_expanded_to_the_minimum_height() {
    let model = cm(
        "<div>ab|</div><hr class=\"atomic-component\" /><div>cd</div>",
    );
    let layout = GridLayout::new(model.dom());
    // The rule renders 2px tall around y=24; the caret grows to 18px.
    let before = model.rects_for_position(&layout, &pos(vec![1], 0));
    assert_eq!(before, vec![Rect::new(0.0, 15.0, 0.0, 33.0)]);
    let after = model.rects_for_position(&layout, &pos(vec![1], 1));
    assert_eq!(after, vec![Rect::new(320.0, 15.0, 320.0, 33.0)]);
}

#[test]
fn an_inline_image_caret_grows_to_the_minimum_height() {
    use crate::tests::testutils_dom::{dom, img, tn};
    let model =
        crate::CaretModel::attach(dom(&[tn("ab"), img("x.png"), tn("cd")]));
    let layout = GridLayout::new(model.dom());
    // The image cell is 16px tall; the caret next to it grows to 18px.
    let rects = model.rects_for_position(&layout, &pos(vec![1], 1));
    assert_eq!(rects, vec![Rect::new(32.0, -1.0, 32.0, 17.0)]);
}

#[test]
fn rects_for_positions_outside_the_document_are_empty() {
    let model = cm("<div>ab|</div>");
    let layout = GridLayout::new(model.dom());
    assert!(model
        .rects_for_position(&layout, &pos(vec![4, 2], 0))
        .is_empty());
}

#[test]
fn a_collapsed_selection_has_no_highlight_boxes() {
    let model = cm("<div>ab|cd</div>");
    let layout = GridLayout::new(model.dom());
    assert!(model.rects_for_selection(&layout).is_empty());
}

#[test]
fn a_single_line_selection_is_one_box() {
    let model = cm("<div>a{bc}|d</div>");
    let layout = GridLayout::new(model.dom());
    assert_eq!(
        model.rects_for_selection(&layout),
        vec![Rect::new(8.0, 0.0, 24.0, 16.0)]
    );
}

#[test]
fn a_selection_spanning_formatting_merges_fragments_on_one_line() {
    let model = cm("<p>a{b<strong>cd</strong>e}|f</p>");
    let layout = GridLayout::new(model.dom());
    assert_eq!(
        model.rects_for_selection(&layout),
        vec![Rect::new(8.0, 0.0, 40.0, 16.0)]
    );
}

#[test]
fn a_multi_block_selection_yields_one_box_per_line() {
    let model = cm("<div>a{b</div><div>cd</div><div>e}|f</div>");
    let layout = GridLayout::new(model.dom());
    assert_eq!(
        model.rects_for_selection(&layout),
        vec![
            Rect::new(8.0, 0.0, 16.0, 16.0),
            Rect::new(0.0, 16.0, 16.0, 32.0),
            Rect::new(0.0, 32.0, 8.0, 48.0),
        ]
    );
}

#[test]
fn a_soft_wrapped_selection_yields_one_box_per_visual_line() {
    let model = cm("<div>a{bcdef}|gh</div>");
    let layout = GridLayout::wrapped(model.dom(), 4);
    assert_eq!(
        model.rects_for_selection(&layout),
        vec![
            Rect::new(8.0, 0.0, 32.0, 16.0),
            Rect::new(0.0, 16.0, 16.0, 32.0),
        ]
    );
}

#[test]
fn a_selection_across_an_inline_atomic_covers_its_box() {
    let model = cm(
        "<div>a{b<span class=\"atomic-component\"></span>c}|d</div>",
    );
    let layout = GridLayout::new(model.dom());
    assert_eq!(
        model.rects_for_selection(&layout),
        vec![Rect::new(8.0, 0.0, 40.0, 16.0)]
    );
}

#[test]
fn selected_text_uses_placeholders_for_non_text_leaves() {
    let model = cm("<div>a{b<br />c}|d</div>");
    assert_eq!(model.selected_text().to_string(), "b\nc");

    let model = cm(
        "<div>{ab<span class=\"atomic-component\"></span>cd}|</div>",
    );
    assert_eq!(model.selected_text().to_string(), "ab\u{FFFC}cd");
}

#[test]
fn the_materialized_range_indexes_atomic_endpoints_by_parent() {
    let model = cm(
        "<div>ab{<span class=\"atomic-component\"></span>}|cd</div>",
    );
    let range = model.range().unwrap();
    assert_eq!(range.start.node.raw(), &vec![0]);
    assert_eq!(range.start.offset, 1);
    assert_eq!(range.end.node.raw(), &vec![0]);
    assert_eq!(range.end.offset, 2);
}
