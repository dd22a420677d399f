// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::dom::nodes::dom_node::DisplayKind;
use crate::dom::nodes::DomNode;
use crate::dom::{DomHandle, UnicodeString};
use crate::{InlineFormatType, ListType};

/// Tags that establish a block box when no explicit display override is
/// present. Everything else renders inline.
static BLOCK_TAGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "div", "section", "article", "aside", "header", "footer", "main",
        "nav", "figure", "figcaption", "address", "h1", "h2", "h3", "h4",
        "h5", "h6",
    ])
});

pub(crate) fn is_block_tag(name: &str) -> bool {
    BLOCK_TAGS.contains(name)
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContainerNodeKind<S>
where
    S: UnicodeString,
{
    /// `div`, `span`, the document root, and any tag the parser has no
    /// specific model for.
    Generic,
    Paragraph,
    Formatting(InlineFormatType),
    Link(S),
    List(ListType),
    ListItem,
    Quote,
    CodeBlock,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContainerNode<S>
where
    S: UnicodeString,
{
    name: S,
    kind: ContainerNodeKind<S>,
    attrs: Vec<(S, S)>,
    children: Vec<DomNode<S>>,
    handle: DomHandle,
    display: Option<DisplayKind>,
}

impl<S> Default for ContainerNode<S>
where
    S: UnicodeString,
{
    /// The document root container.
    fn default() -> Self {
        Self {
            name: S::default(),
            kind: ContainerNodeKind::Generic,
            attrs: Vec::new(),
            children: Vec::new(),
            handle: DomHandle::new_unset(),
            display: None,
        }
    }
}

impl<S> ContainerNode<S>
where
    S: UnicodeString,
{
    pub fn new(
        name: S,
        kind: ContainerNodeKind<S>,
        attrs: Vec<(S, S)>,
        children: Vec<DomNode<S>>,
        display: Option<DisplayKind>,
    ) -> Self {
        Self {
            name,
            kind,
            attrs,
            children,
            handle: DomHandle::new_unset(),
            display,
        }
    }

    pub fn new_generic(name: S, children: Vec<DomNode<S>>) -> Self {
        Self::new(name, ContainerNodeKind::Generic, Vec::new(), children, None)
    }

    pub fn new_formatting(
        format: InlineFormatType,
        children: Vec<DomNode<S>>,
    ) -> Self {
        Self::new(
            S::from_str(format.tag()),
            ContainerNodeKind::Formatting(format),
            Vec::new(),
            children,
            None,
        )
    }

    pub fn new_paragraph(children: Vec<DomNode<S>>) -> Self {
        Self::new(
            S::from_str("p"),
            ContainerNodeKind::Paragraph,
            Vec::new(),
            children,
            None,
        )
    }

    pub fn new_link(url: S, children: Vec<DomNode<S>>) -> Self {
        let attrs = vec![(S::from_str("href"), url.clone())];
        Self::new(
            S::from_str("a"),
            ContainerNodeKind::Link(url),
            attrs,
            children,
            None,
        )
    }

    pub fn new_list(list_type: ListType, children: Vec<DomNode<S>>) -> Self {
        Self::new(
            S::from_str(list_type.tag()),
            ContainerNodeKind::List(list_type),
            Vec::new(),
            children,
            None,
        )
    }

    pub fn new_list_item(children: Vec<DomNode<S>>) -> Self {
        Self::new(
            S::from_str("li"),
            ContainerNodeKind::ListItem,
            Vec::new(),
            children,
            None,
        )
    }

    pub fn new_quote(children: Vec<DomNode<S>>) -> Self {
        Self::new(
            S::from_str("blockquote"),
            ContainerNodeKind::Quote,
            Vec::new(),
            children,
            None,
        )
    }

    pub fn new_code_block(children: Vec<DomNode<S>>) -> Self {
        Self::new(
            S::from_str("pre"),
            ContainerNodeKind::CodeBlock,
            Vec::new(),
            children,
            None,
        )
    }

    pub fn name(&self) -> &S {
        &self.name
    }

    pub fn kind(&self) -> &ContainerNodeKind<S> {
        &self.kind
    }

    pub fn attrs(&self) -> &Vec<(S, S)> {
        &self.attrs
    }

    pub fn set_attrs(&mut self, attrs: Vec<(S, S)>) {
        self.attrs = attrs;
    }

    pub fn set_display(&mut self, display: Option<DisplayKind>) {
        self.display = display;
    }

    pub fn handle(&self) -> DomHandle {
        self.handle.clone()
    }

    /// Give this node its handle and cascade child handles below it. Called
    /// when the node is added to the tree and after sibling mutations.
    pub fn set_handle(&mut self, handle: DomHandle) {
        self.handle = handle;
        let parent = self.handle.clone();
        for (index, child) in self.children.iter_mut().enumerate() {
            child.set_handle(parent.child_handle(index));
        }
    }

    pub fn children(&self) -> &Vec<DomNode<S>> {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<DomNode<S>> {
        &mut self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get_child(&self, index: usize) -> Option<&DomNode<S>> {
        self.children.get(index)
    }

    pub fn get_child_mut(&mut self, index: usize) -> Option<&mut DomNode<S>> {
        self.children.get_mut(index)
    }

    pub fn last_child_mut(&mut self) -> Option<&mut DomNode<S>> {
        self.children.last_mut()
    }

    /// Append `child` and return its handle.
    pub fn append_child(&mut self, mut child: DomNode<S>) -> DomHandle {
        let index = self.children.len();
        if self.handle.is_set() {
            child.set_handle(self.handle.child_handle(index));
        }
        let handle = child.handle();
        self.children.push(child);
        handle
    }

    pub fn append_children(&mut self, children: Vec<DomNode<S>>) {
        for child in children {
            self.append_child(child);
        }
    }

    /// Insert `child` at `index`, shifting later siblings along. Sibling
    /// handles are re-cascaded.
    pub fn insert_child(
        &mut self,
        index: usize,
        child: DomNode<S>,
    ) -> &DomNode<S> {
        self.children.insert(index, child);
        if self.handle.is_set() {
            self.recascade_from(index);
        }
        &self.children[index]
    }

    /// Remove and return the child at `index`, re-cascading the handles of
    /// the siblings that shifted down.
    pub fn remove_child(&mut self, index: usize) -> DomNode<S> {
        let removed = self.children.remove(index);
        if self.handle.is_set() {
            self.recascade_from(index);
        }
        removed
    }

    fn recascade_from(&mut self, index: usize) {
        let parent = self.handle.clone();
        for (offset, child) in self.children[index..].iter_mut().enumerate() {
            child.set_handle(parent.child_handle(index + offset));
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self.kind, ContainerNodeKind::List(_))
    }

    pub fn is_list_item(&self) -> bool {
        matches!(self.kind, ContainerNodeKind::ListItem)
    }

    pub fn is_formatting_node(&self) -> bool {
        matches!(self.kind, ContainerNodeKind::Formatting(_))
    }

    /// Whether this container establishes a block box. An explicit
    /// `display` override wins; otherwise the kind (and for generic
    /// containers, the tag) decides. The root is a block.
    pub fn is_block_node(&self) -> bool {
        if let Some(display) = self.display {
            return display == DisplayKind::Block;
        }
        match &self.kind {
            ContainerNodeKind::Generic => {
                self.name.is_empty()
                    || BLOCK_TAGS.contains(self.name.to_utf8().as_str())
            }
            ContainerNodeKind::Paragraph
            | ContainerNodeKind::List(_)
            | ContainerNodeKind::ListItem
            | ContainerNodeKind::Quote
            | ContainerNodeKind::CodeBlock => true,
            ContainerNodeKind::Formatting(_) | ContainerNodeKind::Link(_) => {
                false
            }
        }
    }
}

#[cfg(test)]
mod test {
    use widestring::Utf16String;

    use super::*;

    fn tn(data: &str) -> DomNode<Utf16String> {
        DomNode::new_text(Utf16String::from_str(data))
    }

    #[test]
    fn appending_children_assigns_consecutive_handles() {
        let mut node = ContainerNode::default();
        node.set_handle(DomHandle::root());
        node.append_child(tn("a"));
        node.append_child(tn("b"));
        assert_eq!(node.children()[0].handle().raw(), &vec![0]);
        assert_eq!(node.children()[1].handle().raw(), &vec![1]);
    }

    #[test]
    fn removing_a_child_recascades_later_siblings() {
        let mut node = ContainerNode::default();
        node.set_handle(DomHandle::root());
        node.append_child(tn("a"));
        node.append_child(tn("b"));
        node.append_child(tn("c"));
        node.remove_child(0);
        assert_eq!(node.children()[0].handle().raw(), &vec![0]);
        assert_eq!(node.children()[1].handle().raw(), &vec![1]);
    }

    #[test]
    fn classification_follows_kind_and_display_override() {
        let mut span: ContainerNode<Utf16String> =
            ContainerNode::new_generic(Utf16String::from_str("span"), vec![]);
        assert!(!span.is_block_node());
        span.set_display(Some(DisplayKind::Block));
        assert!(span.is_block_node());

        let p: ContainerNode<Utf16String> = ContainerNode::new_paragraph(vec![]);
        assert!(p.is_block_node());

        let b: ContainerNode<Utf16String> =
            ContainerNode::new_formatting(InlineFormatType::Bold, vec![]);
        assert!(!b.is_block_node());
    }
}
