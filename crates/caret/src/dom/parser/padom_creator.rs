// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::{
    paqual_name, PaDom, PaDomCreationError, PaDomHandle, PaDomNode,
    PaNodeContainer, PaNodeText,
};
use html5ever::interface::NextParserState;
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{parse_fragment, Attribute, QualName};
use std::cell::{Ref, RefCell};

pub(crate) type DomCreationResult = Result<PaDom, PaDomCreationError>;

/// The [TreeSink] html5ever drives while parsing a markup fragment.
pub(crate) struct PaDomCreator {
    state: RefCell<PaDomCreationError>,
}

impl PaDomCreator {
    pub(crate) fn parse(html: &str) -> DomCreationResult {
        parse_fragment(
            PaDomCreator::default(),
            Default::default(),
            paqual_name(""),
            vec![],
        )
        .from_utf8()
        .one(html.as_bytes())
    }
}

impl Default for PaDomCreator {
    fn default() -> Self {
        Self {
            state: RefCell::new(PaDomCreationError::new()),
        }
    }
}

impl TreeSink for PaDomCreator {
    type Handle = PaDomHandle;
    type Output = DomCreationResult;
    type ElemName<'a> = Ref<'a, QualName>;

    fn finish(self) -> Self::Output {
        if self.state.borrow().parse_errors.is_empty() {
            Ok(self.state.borrow().dom.clone())
        } else {
            Err(self.state.into_inner())
        }
    }

    fn parse_error(&self, msg: std::borrow::Cow<'static, str>) {
        self.state.borrow_mut().parse_errors.push(String::from(msg));
    }

    fn get_document(&self) -> Self::Handle {
        self.state.borrow().dom.document_handle().clone()
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        Ref::map(self.state.borrow(), |map| map.dom.get_node(target).name())
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Attribute>,
        flags: ElementFlags,
    ) -> Self::Handle {
        self.state
            .borrow_mut()
            .dom
            .create_element(name, attrs, flags)
    }

    fn create_comment(&self, _text: StrTendril) -> Self::Handle {
        // Comments do not participate in the caret model. Park them in an
        // orphan text node that nothing references.
        self.state.borrow_mut().dom.add_node(PaDomNode::Text(
            PaNodeText {
                content: String::new(),
            },
        ))
    }

    fn create_pi(
        &self,
        _target: StrTendril,
        _data: StrTendril,
    ) -> Self::Handle {
        todo!("create_pi not yet supported")
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        let dom = &mut self.state.borrow_mut().dom;
        match child {
            NodeOrText::AppendNode(child) => match dom.get_mut_node(parent) {
                PaDomNode::Container(p) => p.children.push(child),
                PaDomNode::Document(p) => p.children.push(child),
                PaDomNode::Text(_) => {
                    panic!("Appending node to text! {:?}", parent)
                }
            },
            NodeOrText::AppendText(tendril) => {
                let text_handle = match dom.get_node(parent) {
                    PaDomNode::Document(_) => None,
                    PaDomNode::Text(_) => Some(parent.clone()),
                    PaDomNode::Container(PaNodeContainer {
                        children, ..
                    }) => match children
                        .last()
                        .map(|handle| (handle, dom.get_node(handle)))
                    {
                        Some((last_child_handle, PaDomNode::Text(_))) => {
                            Some(last_child_handle.clone())
                        }
                        _ => None,
                    },
                };

                if let Some(text_handle) = text_handle {
                    if let PaDomNode::Text(p) = dom.get_mut_node(&text_handle) {
                        p.content += tendril.as_ref();
                    } else {
                        unreachable!(
                            "`text_handle` must map to a `PaDomNode::Text`"
                        )
                    }
                } else {
                    let new_handle =
                        dom.add_node(PaDomNode::Text(PaNodeText {
                            content: tendril.as_ref().to_owned(),
                        }));

                    match dom.get_mut_node(parent) {
                        PaDomNode::Container(p) => p.children.push(new_handle),
                        PaDomNode::Document(p) => p.children.push(new_handle),
                        PaDomNode::Text(_) => {
                            panic!("parent changed from container to text!")
                        }
                    }
                }
            }
        };
    }

    fn append_based_on_parent_node(
        &self,
        _element: &Self::Handle,
        _prev_element: &Self::Handle,
        _child: NodeOrText<Self::Handle>,
    ) {
        todo!("append_based_on_parent_node not yet supported")
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
        // Doctypes carry nothing we need.
    }

    fn mark_script_already_started(&self, _node: &Self::Handle) {
        todo!()
    }

    fn pop(&self, _node: &Self::Handle) {
        // Nothing to do here for now, but this is called in several tests
    }

    fn get_template_contents(&self, _target: &Self::Handle) -> Self::Handle {
        todo!("get_template_contents not yet supported")
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x == y
    }

    fn set_quirks_mode(&self, _mode: QuirksMode) {
        // Nothing to do here for now
    }

    fn append_before_sibling(
        &self,
        _sibling: &Self::Handle,
        _new_node: NodeOrText<Self::Handle>,
    ) {
        todo!("append_before_sibling not yet supported")
    }

    fn add_attrs_if_missing(
        &self,
        target: &Self::Handle,
        attrs: Vec<Attribute>,
    ) {
        let dom = &mut self.state.borrow_mut().dom;
        let node = dom.get_mut_node(target);
        if let PaDomNode::Container(node) = node {
            let to_add: Vec<(String, String)> = attrs
                .iter()
                .filter_map(|attr| {
                    let attr_name = attr.name.local.as_ref();
                    if node.attrs.iter().any(|(name, _)| name == attr_name) {
                        None
                    } else {
                        Some((
                            attr_name.to_owned(),
                            attr.value.as_ref().to_owned(),
                        ))
                    }
                })
                .collect();
            node.attrs.extend(to_add);
        } else {
            panic!("Non-element passed to add_attrs_if_missing!");
        }
    }

    fn associate_with_form(
        &self,
        _target: &Self::Handle,
        _form: &Self::Handle,
        _nodes: (&Self::Handle, Option<&Self::Handle>),
    ) {
        todo!()
    }

    fn remove_from_parent(&self, _target: &Self::Handle) {
        todo!("remove_from_parent not yet supported")
    }

    fn reparent_children(
        &self,
        _node: &Self::Handle,
        _new_parent: &Self::Handle,
    ) {
        todo!("reparent_children not yet supported")
    }

    fn is_mathml_annotation_xml_integration_point(
        &self,
        _handle: &Self::Handle,
    ) -> bool {
        false
    }

    fn set_current_line(&self, _line_number: u64) {
        // Nothing to do here for now, but this is called on tests with new lines
    }

    fn complete_script(&self, _node: &Self::Handle) -> NextParserState {
        todo!("complete_script not yet supported")
    }

    fn allow_declarative_shadow_roots(
        &self,
        _intended_parent: &Self::Handle,
    ) -> bool {
        false
    }

    fn attach_declarative_shadow(
        &self,
        _location: &Self::Handle,
        _template: &Self::Handle,
        _attrs: Vec<Attribute>,
    ) -> Result<(), String> {
        Err(String::from("Declarative shadow roots are not supported"))
    }
}
