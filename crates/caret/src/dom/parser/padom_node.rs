// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use html5ever::QualName;

use super::PaNodeContainer;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PaNodeText {
    pub(crate) content: String,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum PaDomNode {
    Container(PaNodeContainer),
    Document(PaNodeContainer),
    Text(PaNodeText),
}

impl PaDomNode {
    pub(crate) fn name(&self) -> &QualName {
        match self {
            PaDomNode::Container(n) => &n.name,
            PaDomNode::Document(n) => &n.name,
            PaDomNode::Text(_) => {
                panic!("Text nodes do not have an element name")
            }
        }
    }
}
