// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::dom::nodes::dom_node::DisplayKind;
use crate::dom::{DomHandle, UnicodeString};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AtomicKind {
    /// `<hr>`
    Rule,
    /// `<img>`
    Image,
    /// `<table>`
    Table,
    /// Any element carrying the `atomic-component` class token: mention
    /// chips, embeds, custom widgets.
    Widget,
}

/// An opaque embedded element. The caret addresses only its two sides
/// (offset 0 = before, 1 = after); whatever the element renders inside is
/// never walked, so its subtree is not stored.
#[derive(Clone, Debug, PartialEq)]
pub struct AtomicNode<S>
where
    S: UnicodeString,
{
    name: S,
    kind: AtomicKind,
    attrs: Vec<(S, S)>,
    display: Option<DisplayKind>,
    handle: DomHandle,
}

impl<S> AtomicNode<S>
where
    S: UnicodeString,
{
    pub fn new(
        name: S,
        kind: AtomicKind,
        attrs: Vec<(S, S)>,
        display: Option<DisplayKind>,
    ) -> Self {
        Self {
            name,
            kind,
            attrs,
            display,
            handle: DomHandle::new_unset(),
        }
    }

    pub fn name(&self) -> &S {
        &self.name
    }

    pub fn kind(&self) -> AtomicKind {
        self.kind
    }

    pub fn attrs(&self) -> &Vec<(S, S)> {
        &self.attrs
    }

    pub fn get_attr(&self, name: &str) -> Option<&S> {
        let name = S::from_str(name);
        self.attrs
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value)
    }

    pub fn is_block_node(&self) -> bool {
        if let Some(display) = self.display {
            return display == DisplayKind::Block;
        }
        match self.kind {
            AtomicKind::Rule | AtomicKind::Table => true,
            AtomicKind::Image | AtomicKind::Widget => false,
        }
    }

    pub fn handle(&self) -> DomHandle {
        self.handle.clone()
    }

    pub fn set_handle(&mut self, handle: DomHandle) {
        self.handle = handle;
    }
}
