// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomCreationError {
    HtmlParseError(HtmlParseError),
}

impl fmt::Display for DomCreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomCreationError::HtmlParseError(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for DomCreationError {}

impl From<HtmlParseError> for DomCreationError {
    fn from(error: HtmlParseError) -> Self {
        DomCreationError::HtmlParseError(error)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlParseError {
    pub parse_errors: Vec<String>,
}

impl HtmlParseError {
    pub fn new(parse_errors: Vec<String>) -> Self {
        Self { parse_errors }
    }
}

impl fmt::Display for HtmlParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not parse the document: {}",
            self.parse_errors.join("; ")
        )
    }
}

impl std::error::Error for HtmlParseError {}
