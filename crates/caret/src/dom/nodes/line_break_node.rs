// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::dom::{DomHandle, UnicodeString};

/// A `<br>`. Positionally an atomic leaf of length 1, but character movement
/// passes through it rather than resting on either side.
#[derive(Clone, Debug, PartialEq)]
pub struct LineBreakNode<S>
where
    S: UnicodeString,
{
    name: S,
    handle: DomHandle,
}

impl<S> Default for LineBreakNode<S>
where
    S: UnicodeString,
{
    fn default() -> Self {
        Self {
            name: S::from_str("br"),
            handle: DomHandle::new_unset(),
        }
    }
}

impl<S> LineBreakNode<S>
where
    S: UnicodeString,
{
    pub fn name(&self) -> &S {
        &self.name
    }

    pub fn handle(&self) -> DomHandle {
        self.handle.clone()
    }

    pub fn set_handle(&mut self, handle: DomHandle) {
        self.handle = handle;
    }
}
