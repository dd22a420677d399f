// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

mod padom;
mod padom_creator;
mod padom_node;
mod panode_container;
mod parse;

pub use parse::parse;

pub(crate) use padom::PaDom;
pub(crate) use padom_creator::PaDomCreator;
pub(crate) use padom_node::{PaDomNode, PaNodeText};
pub(crate) use panode_container::PaNodeContainer;

use html5ever::{namespace_url, ns, LocalName, QualName};

/// A handle into the [PaDom]'s flat node arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PaDomHandle(pub(crate) usize);

/// The errors collected while html5ever walked the input, along with
/// whatever partial document it managed to build.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PaDomCreationError {
    pub(crate) dom: PaDom,
    pub(crate) parse_errors: Vec<String>,
}

impl PaDomCreationError {
    pub(crate) fn new() -> Self {
        Self {
            dom: PaDom::new(),
            parse_errors: Vec::new(),
        }
    }
}

pub(crate) fn paqual_name(local: &str) -> QualName {
    QualName::new(None, ns!(html), LocalName::from(local))
}
