// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::fmt;
use std::ops::Range;

use widestring::{Utf16Str, Utf16String, Utf32Str, Utf32String};

/// The abstraction of the string type the DOM stores text in.
///
/// All offsets held by positions are *code units* of the chosen encoding,
/// which is what DOM-mirroring hosts exchange (UTF-16 for web hosts). The
/// core never splices text, so the surface here is read-and-rebuild only.
pub trait UnicodeString:
    Clone + fmt::Debug + fmt::Display + Default + PartialEq + Eq
{
    fn from_str(s: &str) -> Self;

    /// How many code units `ch` occupies in this encoding.
    fn char_len(ch: char) -> usize;

    /// Length in code units.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn chars(&self) -> impl Iterator<Item = char> + '_;

    fn push_char(&mut self, ch: char);

    fn append(&mut self, other: &Self);

    /// The sub-string covering `range`, in code units. The bounds must lie
    /// on character boundaries, which holds for every offset the core
    /// produces.
    fn substring(&self, range: Range<usize>) -> Self {
        let mut out = Self::default();
        let mut pos = 0;
        for ch in self.chars() {
            if pos >= range.end {
                break;
            }
            if pos >= range.start {
                out.push_char(ch);
            }
            pos += Self::char_len(ch);
        }
        out
    }

    fn to_utf8(&self) -> String {
        self.to_string()
    }
}

impl UnicodeString for String {
    fn from_str(s: &str) -> Self {
        s.to_owned()
    }

    fn char_len(ch: char) -> usize {
        ch.len_utf8()
    }

    fn len(&self) -> usize {
        str::len(self)
    }

    fn chars(&self) -> impl Iterator<Item = char> + '_ {
        str::chars(self)
    }

    fn push_char(&mut self, ch: char) {
        self.push(ch);
    }

    fn append(&mut self, other: &Self) {
        self.push_str(other);
    }
}

impl UnicodeString for Utf16String {
    fn from_str(s: &str) -> Self {
        Utf16String::from_str(s)
    }

    fn char_len(ch: char) -> usize {
        ch.len_utf16()
    }

    fn len(&self) -> usize {
        Utf16Str::len(self)
    }

    fn chars(&self) -> impl Iterator<Item = char> + '_ {
        Utf16Str::chars(self)
    }

    fn push_char(&mut self, ch: char) {
        Utf16String::push(self, ch);
    }

    fn append(&mut self, other: &Self) {
        Utf16String::push_utfstr(self, other);
    }
}

impl UnicodeString for Utf32String {
    fn from_str(s: &str) -> Self {
        Utf32String::from_str(s)
    }

    fn char_len(_ch: char) -> usize {
        1
    }

    fn len(&self) -> usize {
        Utf32Str::len(self)
    }

    fn chars(&self) -> impl Iterator<Item = char> + '_ {
        Utf32Str::chars(self)
    }

    fn push_char(&mut self, ch: char) {
        Utf32String::push(self, ch);
    }

    fn append(&mut self, other: &Self) {
        Utf32String::push_utfstr(self, other);
    }
}
