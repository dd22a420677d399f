// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::dom::nodes::DomNode;
use crate::dom::{Dom, UnicodeString};

/// A tree rendering for debugging and test failure output, e.g.
///
/// ```text
/// ├>strong
/// │ └>"Bold"
/// └>em
///   └>"Italic"
/// ```
pub trait ToTree<S>
where
    S: UnicodeString,
{
    fn to_tree(&self) -> S;
}

fn node_label<S: UnicodeString>(node: &DomNode<S>) -> String {
    match node {
        DomNode::Container(n) => n.name().to_utf8(),
        DomNode::Text(n) => format!("\"{}\"", n.data()),
        DomNode::LineBreak(_) => "br".to_owned(),
        DomNode::Atomic(n) => n.name().to_utf8(),
    }
}

fn fmt_tree<S: UnicodeString>(
    node: &DomNode<S>,
    out: &mut String,
    prefix: &str,
    is_last: bool,
) {
    let connector = if is_last { "└>" } else { "├>" };
    out.push_str(prefix);
    out.push_str(connector);
    out.push_str(&node_label(node));
    out.push('\n');

    if let DomNode::Container(container) = node {
        let child_prefix =
            format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        let count = container.children().len();
        for (index, child) in container.children().iter().enumerate() {
            fmt_tree(child, out, &child_prefix, index + 1 == count);
        }
    }
}

impl<S> ToTree<S> for Dom<S>
where
    S: UnicodeString,
{
    fn to_tree(&self) -> S {
        let mut out = String::new();
        let children = self.children();
        let count = children.len();
        for (index, child) in children.iter().enumerate() {
            fmt_tree(child, &mut out, "", index + 1 == count);
        }
        S::from_str(&out)
    }
}
