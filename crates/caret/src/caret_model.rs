// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

mod queries;
mod selection;

use crate::dom::parser::parse;
use crate::dom::{normalize_document, Dom, DomCreationError, UnicodeString};
use crate::layout::CaretOptions;
use crate::position::Position;
use crate::selection::Selection;

/// The caret core attached to one editor root.
///
/// Attaching normalizes the document's whitespace once; from then on the
/// model only reads the tree. The model owns the selection state
/// exclusively and replaces it wholesale on every operation. If the host
/// mutates the document behind the model's back, retained positions are
/// void: re-attach or re-resolve them.
#[derive(Clone, Debug, PartialEq)]
pub struct CaretModel<S>
where
    S: UnicodeString,
{
    pub(crate) dom: Dom<S>,
    pub(crate) selection: Option<Selection>,
    pub(crate) options: CaretOptions,
}

impl<S> CaretModel<S>
where
    S: UnicodeString,
{
    /// Attach to a document the host already built. Runs whitespace
    /// normalization and drops the caret on the first addressable leaf
    /// (no selection at all if the document has none).
    pub fn attach(dom: Dom<S>) -> Self {
        Self::attach_with_options(dom, CaretOptions::default())
    }

    pub fn attach_with_options(mut dom: Dom<S>, options: CaretOptions) -> Self {
        normalize_document(&mut dom);
        #[cfg(any(test, feature = "assert-invariants"))]
        dom.assert_invariants();
        let selection = dom
            .first_addressable_leaf()
            .map(|leaf| Selection::caret(Position::new(leaf, 0)));
        Self {
            dom,
            selection,
            options,
        }
    }

    /// Parse a markup fragment and attach to it.
    pub fn from_html(html: &str) -> Result<Self, DomCreationError> {
        Ok(Self::attach(parse(html)?))
    }

    pub fn from_html_with_options(
        html: &str,
        options: CaretOptions,
    ) -> Result<Self, DomCreationError> {
        Ok(Self::attach_with_options(parse(html)?, options))
    }

    pub fn dom(&self) -> &Dom<S> {
        &self.dom
    }

    /// Detach, handing the document back. No DOM changes are undone: the
    /// attach-time whitespace normalization stays.
    pub fn into_dom(self) -> Dom<S> {
        self.dom
    }

    pub fn options(&self) -> &CaretOptions {
        &self.options
    }
}
