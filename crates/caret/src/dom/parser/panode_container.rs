// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use html5ever::QualName;
use once_cell::sync::Lazy;
use regex::Regex;

use super::PaDomHandle;

static STYLE_PROPERTY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([a-z-]+)\s*:\s*([^;]+)").expect("Invalid style regex")
});

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PaNodeContainer {
    pub(crate) name: QualName,
    pub(crate) attrs: Vec<(String, String)>,
    pub(crate) children: Vec<PaDomHandle>,
}

impl PaNodeContainer {
    pub(crate) fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _v)| n == name)
            .map(|(_n, v)| v.as_str())
    }

    /// Whether the `class` attribute carries the given token.
    pub(crate) fn has_class_token(&self, token: &str) -> bool {
        self.get_attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == token))
            .unwrap_or(false)
    }

    /// The value of an inline `style` property, e.g. `display`.
    pub(crate) fn style_value(&self, property: &str) -> Option<String> {
        let style = self.get_attr("style")?;
        STYLE_PROPERTY
            .captures_iter(style)
            .find(|captures| {
                captures[1].eq_ignore_ascii_case(property)
            })
            .map(|captures| captures[2].trim().to_owned())
    }
}
