// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListType {
    Ordered,
    Unordered,
}

impl ListType {
    pub fn tag(&self) -> &'static str {
        match self {
            ListType::Ordered => "ol",
            ListType::Unordered => "ul",
        }
    }
}

impl From<&str> for ListType {
    fn from(value: &str) -> Self {
        match value {
            "ol" => ListType::Ordered,
            "ul" => ListType::Unordered,
            _ => {
                panic!("Unknown list type {value}");
            }
        }
    }
}
