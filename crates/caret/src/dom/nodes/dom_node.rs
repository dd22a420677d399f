// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::dom::nodes::{
    AtomicKind, AtomicNode, ContainerNode, ContainerNodeKind, LineBreakNode,
    TextNode,
};
use crate::dom::{DomHandle, UnicodeString};
use crate::{InlineFormatType, ListType};

/// How an element participates in layout flow. Resolved from an explicit
/// `style="display: …"` attribute where present, from the tag otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayKind {
    Block,
    Inline,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DomNodeKind {
    Generic,
    Text,
    LineBreak,
    Atomic(AtomicKind),
    Formatting(InlineFormatType),
    Link,
    List,
    ListItem,
    Paragraph,
    Quote,
    CodeBlock,
}

impl DomNodeKind {
    pub fn from_container_kind<S: UnicodeString>(
        kind: &ContainerNodeKind<S>,
    ) -> Self {
        match kind {
            ContainerNodeKind::Generic => DomNodeKind::Generic,
            ContainerNodeKind::Paragraph => DomNodeKind::Paragraph,
            ContainerNodeKind::Formatting(f) => DomNodeKind::Formatting(*f),
            ContainerNodeKind::Link(_) => DomNodeKind::Link,
            ContainerNodeKind::List(_) => DomNodeKind::List,
            ContainerNodeKind::ListItem => DomNodeKind::ListItem,
            ContainerNodeKind::Quote => DomNodeKind::Quote,
            ContainerNodeKind::CodeBlock => DomNodeKind::CodeBlock,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DomNode<S>
where
    S: UnicodeString,
{
    Container(ContainerNode<S>),
    Text(TextNode<S>),
    LineBreak(LineBreakNode<S>),
    Atomic(AtomicNode<S>),
}

impl<S> Default for DomNode<S>
where
    S: UnicodeString,
{
    /// An empty document container with the root handle set.
    fn default() -> Self {
        let mut document = ContainerNode::default();
        document.set_handle(DomHandle::root());
        DomNode::Container(document)
    }
}

impl<S> DomNode<S>
where
    S: UnicodeString,
{
    pub fn new_text(data: S) -> Self {
        Self::Text(TextNode::from(data))
    }

    pub fn new_line_break() -> Self {
        Self::LineBreak(LineBreakNode::default())
    }

    pub fn new_formatting(
        format: InlineFormatType,
        children: Vec<DomNode<S>>,
    ) -> Self {
        Self::Container(ContainerNode::new_formatting(format, children))
    }

    pub fn new_paragraph(children: Vec<DomNode<S>>) -> Self {
        Self::Container(ContainerNode::new_paragraph(children))
    }

    pub fn new_link(url: S, children: Vec<DomNode<S>>) -> Self {
        Self::Container(ContainerNode::new_link(url, children))
    }

    pub fn new_list(list_type: ListType, children: Vec<DomNode<S>>) -> Self {
        Self::Container(ContainerNode::new_list(list_type, children))
    }

    pub fn new_list_item(children: Vec<DomNode<S>>) -> Self {
        Self::Container(ContainerNode::new_list_item(children))
    }

    pub fn new_quote(children: Vec<DomNode<S>>) -> Self {
        Self::Container(ContainerNode::new_quote(children))
    }

    pub fn new_code_block(children: Vec<DomNode<S>>) -> Self {
        Self::Container(ContainerNode::new_code_block(children))
    }

    pub fn new_generic(name: S, children: Vec<DomNode<S>>) -> Self {
        Self::Container(ContainerNode::new_generic(name, children))
    }

    pub fn handle(&self) -> DomHandle {
        match self {
            DomNode::Container(n) => n.handle(),
            DomNode::Text(n) => n.handle(),
            DomNode::LineBreak(n) => n.handle(),
            DomNode::Atomic(n) => n.handle(),
        }
    }

    pub fn set_handle(&mut self, handle: DomHandle) {
        match self {
            DomNode::Container(n) => n.set_handle(handle),
            DomNode::Text(n) => n.set_handle(handle),
            DomNode::LineBreak(n) => n.set_handle(handle),
            DomNode::Atomic(n) => n.set_handle(handle),
        }
    }

    pub fn kind(&self) -> DomNodeKind {
        match self {
            DomNode::Container(n) => {
                DomNodeKind::from_container_kind(n.kind())
            }
            DomNode::Text(_) => DomNodeKind::Text,
            DomNode::LineBreak(_) => DomNodeKind::LineBreak,
            DomNode::Atomic(n) => DomNodeKind::Atomic(n.kind()),
        }
    }

    pub fn is_container_node(&self) -> bool {
        matches!(self, DomNode::Container(_))
    }

    pub fn is_text_node(&self) -> bool {
        matches!(self, DomNode::Text(_))
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, DomNode::LineBreak(_))
    }

    /// Atomic for caret purposes: an opaque element addressed only at its
    /// two sides. `<br>` belongs here too, even though character movement
    /// later refuses to rest on it.
    pub fn is_atomic_leaf(&self) -> bool {
        matches!(self, DomNode::Atomic(_) | DomNode::LineBreak(_))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            DomNode::Text(_) | DomNode::LineBreak(_) | DomNode::Atomic(_)
        )
    }

    /// Whether a caret position may address this node: a non-empty text
    /// node, or any atomic leaf.
    pub fn is_addressable_leaf(&self) -> bool {
        match self {
            DomNode::Text(n) => !n.data().is_empty(),
            DomNode::LineBreak(_) | DomNode::Atomic(_) => true,
            DomNode::Container(_) => false,
        }
    }

    pub fn is_block_node(&self) -> bool {
        match self {
            DomNode::Container(n) => n.is_block_node(),
            DomNode::Atomic(n) => n.is_block_node(),
            DomNode::Text(_) | DomNode::LineBreak(_) => false,
        }
    }

    pub fn is_inline(&self) -> bool {
        !self.is_block_node()
    }

    /// The maximum valid caret offset inside this node: the code-unit length
    /// for text, 1 for atomic leaves.
    pub fn text_len(&self) -> usize {
        match self {
            DomNode::Text(n) => n.data().len(),
            DomNode::LineBreak(_) | DomNode::Atomic(_) => 1,
            DomNode::Container(n) => {
                n.children().iter().map(|child| child.text_len()).sum()
            }
        }
    }

    pub fn as_container(&self) -> Option<&ContainerNode<S>> {
        if let DomNode::Container(n) = self {
            Some(n)
        } else {
            None
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut ContainerNode<S>> {
        if let DomNode::Container(n) = self {
            Some(n)
        } else {
            None
        }
    }

    pub fn as_text(&self) -> Option<&TextNode<S>> {
        if let DomNode::Text(n) = self {
            Some(n)
        } else {
            None
        }
    }

    pub fn as_atomic(&self) -> Option<&AtomicNode<S>> {
        if let DomNode::Atomic(n) = self {
            Some(n)
        } else {
            None
        }
    }
}
