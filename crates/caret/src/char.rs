// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use unicode_segmentation::UnicodeSegmentation;

use crate::dom::UnicodeString;

pub trait CharExt: Sized {
    fn nbsp() -> Self;

    /// Whitespace that document normalization collapses. NBSP is excluded:
    /// it exists to resist collapsing.
    fn is_collapsible_whitespace(&self) -> bool;
}

impl CharExt for char {
    fn nbsp() -> Self {
        '\u{A0}'
    }

    fn is_collapsible_whitespace(&self) -> bool {
        matches!(self, ' ' | '\t' | '\n' | '\r' | '\u{0C}')
    }
}

/// Every extended grapheme cluster boundary of `data`, in code units of `S`,
/// including 0 and the total length.
fn grapheme_boundaries<S: UnicodeString>(data: &S) -> Vec<usize> {
    let utf8 = data.to_utf8();
    let mut boundaries = vec![0];
    let mut pos = 0;
    for grapheme in utf8.graphemes(true) {
        pos += grapheme.chars().map(S::char_len).sum::<usize>();
        boundaries.push(pos);
    }
    boundaries
}

/// The first grapheme boundary strictly after `offset`, or None at the end.
pub(crate) fn next_grapheme_offset<S: UnicodeString>(
    data: &S,
    offset: usize,
) -> Option<usize> {
    grapheme_boundaries(data)
        .into_iter()
        .find(|&boundary| boundary > offset)
}

/// The last grapheme boundary strictly before `offset`, or None at the start.
pub(crate) fn prev_grapheme_offset<S: UnicodeString>(
    data: &S,
    offset: usize,
) -> Option<usize> {
    grapheme_boundaries(data)
        .into_iter()
        .rev()
        .find(|&boundary| boundary < offset)
}

#[cfg(test)]
mod test {
    use widestring::Utf16String;

    use super::*;

    fn utf16(s: &str) -> Utf16String {
        Utf16String::from_str(s)
    }

    #[test]
    fn stepping_through_ascii_advances_one_unit_at_a_time() {
        let data = utf16("abc");
        assert_eq!(next_grapheme_offset(&data, 0), Some(1));
        assert_eq!(next_grapheme_offset(&data, 2), Some(3));
        assert_eq!(next_grapheme_offset(&data, 3), None);
        assert_eq!(prev_grapheme_offset(&data, 3), Some(2));
        assert_eq!(prev_grapheme_offset(&data, 0), None);
    }

    #[test]
    fn stepping_never_splits_a_surrogate_pair() {
        let data = utf16("a🤗b");
        assert_eq!(next_grapheme_offset(&data, 1), Some(3));
        assert_eq!(prev_grapheme_offset(&data, 3), Some(1));
    }

    #[test]
    fn stepping_treats_a_multi_codepoint_emoji_as_one_character() {
        // Woman Astronaut: Woman + Dark Skin Tone + ZWJ + Rocket
        let data = utf16("\u{1F469}\u{1F3FF}\u{200D}\u{1F680}");
        assert_eq!(next_grapheme_offset(&data, 0), Some(7));
        assert_eq!(prev_grapheme_offset(&data, 7), Some(0));
    }

    #[test]
    fn nbsp_is_not_collapsible() {
        assert!(' '.is_collapsible_whitespace());
        assert!('\n'.is_collapsible_whitespace());
        assert!(!char::nbsp().is_collapsible_whitespace());
    }
}
