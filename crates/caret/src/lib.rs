// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

mod caret_model;
mod char;
mod dom;
mod format_type;
mod layout;
mod list_type;
mod movement;
mod point;
mod position;
mod rect_walk;
mod selection;
#[cfg(test)]
mod tests;

pub use crate::caret_model::CaretModel;
pub use crate::char::CharExt;
pub use crate::dom::nodes::AtomicKind;
pub use crate::dom::nodes::AtomicNode;
pub use crate::dom::nodes::ContainerNode;
pub use crate::dom::nodes::ContainerNodeKind;
pub use crate::dom::nodes::DisplayKind;
pub use crate::dom::nodes::DomNode;
pub use crate::dom::nodes::DomNodeKind;
pub use crate::dom::nodes::LineBreakNode;
pub use crate::dom::nodes::TextNode;
pub use crate::dom::parser::parse;
pub use crate::dom::AddressableLeaves;
pub use crate::dom::Dom;
pub use crate::dom::DomCreationError;
pub use crate::dom::DomHandle;
pub use crate::dom::DomRange;
pub use crate::dom::HtmlParseError;
pub use crate::dom::RangeBoundary;
pub use crate::dom::ToHtml;
pub use crate::dom::ToRawText;
pub use crate::dom::ToTree;
pub use crate::dom::UnicodeString;
pub use crate::format_type::InlineFormatType;
pub use crate::layout::CaretOptions;
pub use crate::layout::LayoutSource;
pub use crate::layout::PointCandidate;
pub use crate::list_type::ListType;
pub use crate::movement::Direction;
pub use crate::movement::ModifyType;
pub use crate::movement::TextUnit;
pub use crate::position::Position;
pub use crate::selection::Selection;
pub use crate::selection::SelectionDirection;

pub use kurbo::Point;
pub use kurbo::Rect;
