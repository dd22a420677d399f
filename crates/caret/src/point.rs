// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::dom::nodes::DomNode;
use crate::dom::{Dom, DomHandle, UnicodeString};
use crate::layout::LayoutSource;
use crate::position::Position;

/// Resolve a viewport point into a caret position.
///
/// The host layout's caret-from-point service supplies a raw candidate;
/// this refines it:
///
/// - a candidate on (or inside) an atomic component resolves to the side of
///   the component's horizontal midpoint the point falls on;
/// - a container candidate descends to the first addressable leaf under the
///   addressed child, re-querying the layout for a text offset;
/// - a text candidate is taken as-is (offset clamped).
///
/// Never returns an invalid position; returns None when the service finds
/// nothing, when the candidate is not part of this document, or when no
/// addressable leaf exists where the candidate points. Hosts may layer
/// their own fallback (e.g. the nearest block's last position) on top.
pub(crate) fn position_from_point<S, L>(
    dom: &Dom<S>,
    layout: &L,
    x: f64,
    y: f64,
) -> Option<Position>
where
    S: UnicodeString,
    L: LayoutSource,
{
    let candidate = layout.caret_from_point(x, y)?;
    if !dom.contains(&candidate.node) {
        return None;
    }

    if let Some(atomic) = nearest_atomic_leaf(dom, &candidate.node) {
        return Some(side_of_center(layout, atomic, x));
    }

    match dom.lookup_node(&candidate.node) {
        DomNode::Text(text) => Some(Position::new(
            candidate.node.clone(),
            candidate.offset.min(text.data().len()),
        )),
        DomNode::Container(container) => {
            if container.children().is_empty() {
                return None;
            }
            let index = candidate.offset.min(container.children().len() - 1);
            let child = candidate.node.child_handle(index);
            let leaf = first_addressable_in_subtree(dom, &child)?;
            match dom.lookup_node(&leaf) {
                DomNode::Text(text) => {
                    let offset = layout
                        .caret_in_node(&leaf, x, y)
                        .unwrap_or(0)
                        .min(text.data().len());
                    Some(Position::new(leaf, offset))
                }
                _ => Some(side_of_center(layout, leaf, x)),
            }
        }
        // Atomic leaves were already routed through the half-split rule.
        DomNode::LineBreak(_) | DomNode::Atomic(_) => unreachable!(),
    }
}

/// The candidate itself or its nearest ancestor that is an atomic leaf.
/// Hosts may hand us nodes rendered inside an atomic component; those all
/// collapse onto the component.
fn nearest_atomic_leaf<S>(
    dom: &Dom<S>,
    handle: &DomHandle,
) -> Option<DomHandle>
where
    S: UnicodeString,
{
    handle
        .with_ancestors()
        .into_iter()
        .rev()
        .find(|ancestor| {
            !ancestor.is_root()
                && dom.lookup_node(ancestor).is_atomic_leaf()
        })
}

/// The atomic half-split rule: before the element if the point is left of
/// its horizontal midpoint, after it otherwise.
fn side_of_center<L>(layout: &L, handle: DomHandle, x: f64) -> Position
where
    L: LayoutSource,
{
    let offset = match layout.node_rect(&handle) {
        Some(rect) => {
            if x < (rect.x0 + rect.x1) / 2.0 {
                0
            } else {
                1
            }
        }
        None => 0,
    };
    Position::new(handle, offset)
}

/// The first addressable leaf inside the subtree rooted at `handle`
/// (including `handle` itself).
fn first_addressable_in_subtree<S>(
    dom: &Dom<S>,
    handle: &DomHandle,
) -> Option<DomHandle>
where
    S: UnicodeString,
{
    if dom.lookup_node(handle).is_addressable_leaf() {
        return Some(handle.clone());
    }
    let next = dom.next_addressable_leaf(handle)?;
    if handle.is_ancestor_of(&next) {
        Some(next)
    } else {
        None
    }
}
