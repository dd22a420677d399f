// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

mod dom_block_nodes;
mod dom_creation_error;
mod dom_handle;
mod dom_invariants;
mod dom_struct;
mod iter;
mod range;
mod to_html;
mod to_raw_text;
mod to_tree;
mod unicode_string;
mod whitespace;

pub mod nodes;
pub mod parser;

pub use dom_creation_error::DomCreationError;
pub use dom_creation_error::HtmlParseError;
pub use dom_handle::DomHandle;
pub use dom_struct::Dom;
pub use iter::AddressableLeaves;
pub use range::DomRange;
pub use range::RangeBoundary;
pub use to_html::ToHtml;
pub use to_raw_text::ToRawText;
pub use to_tree::ToTree;
pub use unicode_string::UnicodeString;

pub(crate) use whitespace::normalize_document;
