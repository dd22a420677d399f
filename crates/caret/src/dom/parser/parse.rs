// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::dom::nodes::container_node::is_block_tag;
use crate::dom::nodes::dom_node::DisplayKind;
use crate::dom::nodes::{
    AtomicKind, AtomicNode, ContainerNode, ContainerNodeKind, DomNode,
};
use crate::dom::parser::{PaDom, PaDomCreator, PaDomNode, PaNodeContainer};
use crate::dom::{Dom, HtmlParseError, UnicodeString};
use crate::{InlineFormatType, ListType};

/// The class token that marks an element as an opaque atomic component.
pub(crate) const ATOMIC_CLASS: &str = "atomic-component";

/// Parse a markup fragment into a [Dom]. Unknown elements become generic
/// containers rather than failing the parse: the caret model does not care
/// what it is walking over, only how it flows.
pub fn parse<S>(html: &str) -> Result<Dom<S>, HtmlParseError>
where
    S: UnicodeString,
{
    let padom = PaDomCreator::parse(html)
        .map_err(|err| HtmlParseError::new(err.parse_errors))?;
    Ok(padom_to_dom(padom))
}

/// Convert a [PaDom] into a [Dom].
///
/// [PaDom] is purely used within the parsing process (using html5ever) - in
/// it, parents refer to their children by handles, and all the nodes are
/// owned in a big list held by the PaDom itself. The conversion process here
/// ignores garbage nodes, so they do not appear in the final Dom.
fn padom_to_dom<S>(padom: PaDom) -> Dom<S>
where
    S: UnicodeString,
{
    let mut ret = Dom::new(Vec::new());
    if let PaDomNode::Document(padoc) = padom.get_document() {
        convert(&padom, padoc, ret.document_mut());
    } else {
        panic!("PaDom's document was not a document node!");
    }
    ret
}

/// Copy all panode's children into node.
fn convert<S>(
    padom: &PaDom,
    panode: &PaNodeContainer,
    node: &mut ContainerNode<S>,
) where
    S: UnicodeString,
{
    for child_handle in &panode.children {
        match padom.get_node(child_handle) {
            PaDomNode::Container(child) => {
                convert_container(padom, child, node);
            }
            PaDomNode::Document(_) => {
                panic!("Found a document inside a document!")
            }
            PaDomNode::Text(text) => {
                node.append_child(DomNode::new_text(S::from_str(
                    &text.content,
                )));
            }
        }
    }
}

fn convert_container<S>(
    padom: &PaDom,
    child: &PaNodeContainer,
    node: &mut ContainerNode<S>,
) where
    S: UnicodeString,
{
    let tag = child.name.local.as_ref();

    // Atomic components short-circuit everything else: their subtree is
    // opaque to the model and is not converted.
    if tag != "br"
        && (child.has_class_token(ATOMIC_CLASS)
            || matches!(tag, "hr" | "img" | "table"))
    {
        node.append_child(DomNode::Atomic(new_atomic(child)));
        return;
    }

    match tag {
        "html" => {
            // Skip the html tag the fragment parser wraps everything in -
            // add its children to the current node directly.
            convert(padom, child, node);
        }
        "br" => {
            node.append_child(DomNode::new_line_break());
        }
        "b" | "strong" => append_converted(
            padom,
            child,
            node,
            ContainerNode::new_formatting(InlineFormatType::Bold, vec![]),
        ),
        "i" | "em" => append_converted(
            padom,
            child,
            node,
            ContainerNode::new_formatting(InlineFormatType::Italic, vec![]),
        ),
        "del" => append_converted(
            padom,
            child,
            node,
            ContainerNode::new_formatting(
                InlineFormatType::StrikeThrough,
                vec![],
            ),
        ),
        "u" => append_converted(
            padom,
            child,
            node,
            ContainerNode::new_formatting(InlineFormatType::Underline, vec![]),
        ),
        "code" => append_converted(
            padom,
            child,
            node,
            ContainerNode::new_formatting(
                InlineFormatType::InlineCode,
                vec![],
            ),
        ),
        "a" => {
            let url = S::from_str(child.get_attr("href").unwrap_or(""));
            append_converted(
                padom,
                child,
                node,
                ContainerNode::new_link(url, vec![]),
            );
        }
        "ol" | "ul" => append_converted(
            padom,
            child,
            node,
            ContainerNode::new_list(ListType::from(tag), vec![]),
        ),
        "li" => append_converted(
            padom,
            child,
            node,
            ContainerNode::new_list_item(vec![]),
        ),
        "p" => append_converted(
            padom,
            child,
            node,
            ContainerNode::new_paragraph(vec![]),
        ),
        "blockquote" => {
            append_converted(padom, child, node, ContainerNode::new_quote(vec![]))
        }
        "pre" => append_converted(
            padom,
            child,
            node,
            ContainerNode::new_code_block(vec![]),
        ),
        _ => {
            let container = ContainerNode::new(
                S::from_str(tag),
                ContainerNodeKind::Generic,
                convert_attrs(child),
                vec![],
                style_display(child),
            );
            append_converted(padom, child, node, container);
        }
    }
}

/// Recurse into panode's children, then attach the converted container.
fn append_converted<S>(
    padom: &PaDom,
    panode: &PaNodeContainer,
    node: &mut ContainerNode<S>,
    mut container: ContainerNode<S>,
) where
    S: UnicodeString,
{
    convert(padom, panode, &mut container);
    node.append_child(DomNode::Container(container));
}

fn new_atomic<S>(child: &PaNodeContainer) -> AtomicNode<S>
where
    S: UnicodeString,
{
    let tag = child.name.local.as_ref();
    let kind = match tag {
        "hr" => AtomicKind::Rule,
        "img" => AtomicKind::Image,
        "table" => AtomicKind::Table,
        _ => AtomicKind::Widget,
    };
    let display = style_display(child).or({
        if kind == AtomicKind::Widget && is_block_tag(tag) {
            Some(DisplayKind::Block)
        } else {
            None
        }
    });
    AtomicNode::new(S::from_str(tag), kind, convert_attrs(child), display)
}

fn convert_attrs<S>(child: &PaNodeContainer) -> Vec<(S, S)>
where
    S: UnicodeString,
{
    child
        .attrs
        .iter()
        .map(|(name, value)| (S::from_str(name), S::from_str(value)))
        .collect()
}

/// The display classification an explicit `style="display: …"` imposes. A
/// value whose token set contains `inline` renders inline; any other
/// explicit value is a block. No style attribute means no override.
fn style_display(child: &PaNodeContainer) -> Option<DisplayKind> {
    child.style_value("display").map(|value| {
        if value.split_whitespace().any(|token| token == "inline") {
            DisplayKind::Inline
        } else {
            DisplayKind::Block
        }
    })
}
