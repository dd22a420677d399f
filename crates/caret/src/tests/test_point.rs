// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use kurbo::Rect;

use crate::tests::testutils_caret_model::cm;
use crate::tests::testutils_layout::GridLayout;
use crate::{DomHandle, LayoutSource, PointCandidate, Position};

#[test]
fn a_point_on_text_resolves_to_the_nearest_gap() {
    let model = cm("<div>|Hello World</div>");
    let layout = GridLayout::new(model.dom());
    // Left half of 'e' (cell 1, 8..16px) rounds down, right half rounds up.
    let position = model.position_from_point(&layout, 10.0, 8.0).unwrap();
    assert_eq!(position, Position::new(DomHandle::from_raw(vec![0, 0]), 1));
    let position = model.position_from_point(&layout, 14.0, 8.0).unwrap();
    assert_eq!(position, Position::new(DomHandle::from_raw(vec![0, 0]), 2));
}

#[test]
fn a_point_on_an_atomic_splits_at_its_midpoint() {
    let model = cm("<div>|ab<span class=\"atomic-component\"></span>cd</div>");
    let layout = GridLayout::new(model.dom());
    // The chip covers 16..32px; midpoint 24.
    let before = model.position_from_point(&layout, 18.0, 8.0).unwrap();
    assert_eq!(before, Position::new(DomHandle::from_raw(vec![0, 1]), 0));
    let after = model.position_from_point(&layout, 30.0, 8.0).unwrap();
    assert_eq!(after, Position::new(DomHandle::from_raw(vec![0, 1]), 1));
}

#[test]
fn a_point_past_the_line_end_snaps_to_its_last_gap() {
    let model = cm("<div>|ab</div><div>wider line</div>");
    let layout = GridLayout::new(model.dom());
    let position = model.position_from_point(&layout, 300.0, 8.0).unwrap();
    assert_eq!(position, Position::new(DomHandle::from_raw(vec![0, 0]), 2));
}

#[test]
fn a_point_below_the_document_clamps_to_the_last_row() {
    let model = cm("<div>|ab</div><div>cd</div>");
    let layout = GridLayout::new(model.dom());
    let position = model.position_from_point(&layout, 3.0, 500.0).unwrap();
    assert_eq!(position, Position::new(DomHandle::from_raw(vec![1, 0]), 0));
}

#[test]
fn caret_rects_and_points_round_trip() {
    let model = cm("<div>|Hello</div><div>World</div>");
    let layout = GridLayout::new(model.dom());
    for (path, len) in [(vec![0, 0], 5), (vec![1, 0], 5)] {
        for offset in 0..=len {
            let position =
                Position::new(DomHandle::from_raw(path.clone()), offset);
            let rects = model.rects_for_position(&layout, &position);
            assert_eq!(rects.len(), 1);
            let rect = rects[0];
            let resolved = model
                .position_from_point(
                    &layout,
                    (rect.x0 + rect.x1) / 2.0,
                    (rect.y0 + rect.y1) / 2.0,
                )
                .unwrap();
            assert_eq!(resolved, position, "offset {offset} in {path:?}");
        }
    }
}

/// A layout whose caret-from-point reports a container candidate, the way
/// browser hit-testing does over padding and gaps.
struct ContainerCandidates {
    inner: GridLayout,
    candidate: PointCandidate,
}

impl LayoutSource for ContainerCandidates {
    fn range_rects(
        &self,
        leaf: &DomHandle,
        start: usize,
        end: usize,
    ) -> Vec<Rect> {
        self.inner.range_rects(leaf, start, end)
    }

    fn node_rect(&self, node: &DomHandle) -> Option<Rect> {
        self.inner.node_rect(node)
    }

    fn caret_from_point(&self, _x: f64, _y: f64) -> Option<PointCandidate> {
        Some(self.candidate.clone())
    }

    fn caret_in_node(
        &self,
        leaf: &DomHandle,
        x: f64,
        y: f64,
    ) -> Option<usize> {
        self.inner.caret_in_node(leaf, x, y)
    }
}

#[test]
fn a_container_candidate_descends_to_a_text_leaf() {
    let model = cm("<p>|ab<strong>cd</strong></p>");
    let layout = ContainerCandidates {
        inner: GridLayout::new(model.dom()),
        candidate: PointCandidate {
            node: DomHandle::from_raw(vec![0]),
            offset: 1,
        },
    };
    // The point sits over 'd'; the leaf under child 1 is the bold text.
    let position = model.position_from_point(&layout, 26.0, 8.0).unwrap();
    assert_eq!(
        position,
        Position::new(DomHandle::from_raw(vec![0, 1, 0]), 1)
    );
}

#[test]
fn a_container_candidate_over_an_atomic_child_half_splits() {
    let model = cm("<div>|ab<span class=\"atomic-component\"></span></div>");
    let layout = ContainerCandidates {
        inner: GridLayout::new(model.dom()),
        candidate: PointCandidate {
            node: DomHandle::from_raw(vec![0]),
            offset: 1,
        },
    };
    let position = model.position_from_point(&layout, 31.0, 8.0).unwrap();
    assert_eq!(position, Position::new(DomHandle::from_raw(vec![0, 1]), 1));
}

#[test]
fn candidates_outside_the_document_resolve_to_none() {
    let model = cm("<div>|ab</div>");
    let detached = ContainerCandidates {
        inner: GridLayout::new(model.dom()),
        candidate: PointCandidate {
            node: DomHandle::from_raw(vec![9, 9]),
            offset: 0,
        },
    };
    assert!(model.position_from_point(&detached, 4.0, 8.0).is_none());

    // A container candidate with an out-of-range child index clamps and
    // still resolves.
    let clamped = ContainerCandidates {
        inner: GridLayout::new(model.dom()),
        candidate: PointCandidate {
            node: DomHandle::root(),
            offset: 5,
        },
    };
    assert!(model.position_from_point(&clamped, 4.0, 8.0).is_some());
}
