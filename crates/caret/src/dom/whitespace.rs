// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::char::CharExt;
use crate::dom::nodes::{ContainerNode, DomNode};
use crate::dom::{Dom, DomHandle, UnicodeString};

/// One-shot whitespace normalization, run once when a document is attached:
///
/// - every run of collapsible whitespace inside a text node becomes a single
///   space (NBSP survives);
/// - text nodes touching a block boundary (edge of a block container, or
///   adjacent to a block/line-break sibling) lose the spaces on that side;
/// - text nodes emptied by the above are removed;
/// - adjacent text siblings are merged.
///
/// Idempotent. After this pass the text node boundaries are stable for the
/// rest of the session.
pub(crate) fn normalize_document<S>(dom: &mut Dom<S>)
where
    S: UnicodeString,
{
    normalize_container(dom.document_mut());
    dom.document_mut().set_handle(DomHandle::root());
}

fn normalize_container<S>(node: &mut ContainerNode<S>)
where
    S: UnicodeString,
{
    for child in node.children_mut().iter_mut() {
        match child {
            DomNode::Container(container) => normalize_container(container),
            DomNode::Text(text) => {
                text.set_data(collapse_whitespace(text.data()));
            }
            DomNode::LineBreak(_) | DomNode::Atomic(_) => {}
        }
    }

    trim_at_block_boundaries(node);

    node.children_mut().retain(|child| {
        !matches!(child, DomNode::Text(text) if text.data().is_empty())
    });

    merge_adjacent_text_nodes(node);
}

fn trim_at_block_boundaries<S>(node: &mut ContainerNode<S>)
where
    S: UnicodeString,
{
    let node_is_block = node.is_block_node();
    let boundary: Vec<bool> = node
        .children()
        .iter()
        .map(|child| child.is_block_node() || child.is_line_break())
        .collect();
    let count = boundary.len();

    for (index, child) in node.children_mut().iter_mut().enumerate() {
        if let DomNode::Text(text) = child {
            let trim_start = if index == 0 {
                node_is_block
            } else {
                boundary[index - 1]
            };
            let trim_end = if index + 1 == count {
                node_is_block
            } else {
                boundary[index + 1]
            };
            if trim_start || trim_end {
                text.set_data(trim(text.data(), trim_start, trim_end));
            }
        }
    }
}

fn merge_adjacent_text_nodes<S>(node: &mut ContainerNode<S>)
where
    S: UnicodeString,
{
    let children = node.children_mut();
    let mut index = 0;
    while index + 1 < children.len() {
        if children[index].is_text_node() && children[index + 1].is_text_node()
        {
            let DomNode::Text(next) = children.remove(index + 1) else {
                unreachable!()
            };
            let DomNode::Text(current) = &mut children[index] else {
                unreachable!()
            };
            let mut data = current.data().clone();
            data.append(next.data());
            current.set_data(data);
        } else {
            index += 1;
        }
    }
}

fn collapse_whitespace<S>(data: &S) -> S
where
    S: UnicodeString,
{
    let mut out = S::default();
    let mut in_run = false;
    for ch in data.chars() {
        if ch.is_collapsible_whitespace() {
            if !in_run {
                out.push_char(' ');
                in_run = true;
            }
        } else {
            out.push_char(ch);
            in_run = false;
        }
    }
    out
}

fn trim<S>(data: &S, start: bool, end: bool) -> S
where
    S: UnicodeString,
{
    let chars: Vec<char> = data.chars().collect();
    let mut from = 0;
    let mut to = chars.len();
    if start {
        while from < to && chars[from] == ' ' {
            from += 1;
        }
    }
    if end {
        while to > from && chars[to - 1] == ' ' {
            to -= 1;
        }
    }
    let mut out = S::default();
    for ch in &chars[from..to] {
        out.push_char(*ch);
    }
    out
}
