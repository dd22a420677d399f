// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

pub mod atomic_node;
pub mod container_node;
pub mod dom_node;
pub mod line_break_node;
pub mod text_node;

pub use atomic_node::{AtomicKind, AtomicNode};
pub use container_node::{ContainerNode, ContainerNodeKind};
pub use dom_node::{DisplayKind, DomNode, DomNodeKind};
pub use line_break_node::LineBreakNode;
pub use text_node::TextNode;
