// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Build models from markup with selection markers, and render them back.
//!
//! `|` is a caret. `{…}|` is a forward selection (focus at the `}`), `|{…}`
//! a backward one. Markers live in an offset stream where every text code
//! unit counts 1 and every atomic leaf or `<br>` counts 1, so they can sit
//! against atomic boundaries: `cm("ab|<hr />cd")`.
//!
//! Marker positions are applied through `set_selection`, which normalizes -
//! what you read back from the model is the canonical representative of the
//! marked spot.

use widestring::Utf16String;

use crate::dom::{Dom, ToHtml};
use crate::position::Position;
use crate::{CaretModel, UnicodeString};

pub(crate) fn cm(html_with_markers: &str) -> CaretModel<Utf16String> {
    let scan = scan_markup(html_with_markers, &[]);
    let model = CaretModel::from_html(&scan.clean).unwrap();
    restore_selection(model, &scan)
}

/// Like [cm] but with the document attached as UTF-8 (`String`) storage, to
/// exercise the other `UnicodeString` implementations. Marker offsets are
/// counted in UTF-16 units, so fixtures passed here stay ASCII.
pub(crate) fn cm_utf8(html_with_markers: &str) -> CaretModel<String> {
    let scan = scan_markup(html_with_markers, &[]);
    let model = CaretModel::from_html(&scan.clean).unwrap();
    restore_selection(model, &scan)
}

fn restore_selection<S: UnicodeString>(
    mut model: CaretModel<S>,
    scan: &MarkupScan,
) -> CaretModel<S> {
    let (anchor, focus) = match (scan.caret, scan.open, scan.close) {
        (Some(caret), None, None) => (caret, caret),
        (Some(caret), Some(open), Some(close)) => {
            if caret.offset == close.offset {
                (open, close)
            } else {
                (close, open)
            }
        }
        (None, None, None) => return model,
        other => panic!("Inconsistent selection markers: {other:?}"),
    };
    let anchor = position_at(model.dom(), anchor);
    let focus = position_at(model.dom(), focus);
    assert!(
        model.set_selection(&anchor, Some(&focus)),
        "Selection markers did not resolve to valid positions"
    );
    model
}

/// Render the model's document with its selection markers back in.
pub(crate) fn tx(model: &CaretModel<Utf16String>) -> String {
    let html = model.dom().to_html().to_string();
    let Some(selection) = model.selection() else {
        return html;
    };
    let anchor = global_offset_of(model.dom(), selection.anchor());
    let focus = global_offset_of(model.dom(), selection.focus());
    let markers: Vec<(usize, &str)> = if anchor == focus {
        vec![(focus, "|")]
    } else if anchor < focus {
        vec![(anchor, "{"), (focus, "}|")]
    } else {
        vec![(focus, "|{"), (anchor, "}")]
    };
    let scan = scan_markup(&html, &markers);
    scan.clean
}

/// Which leaf a marker sitting exactly on a leaf boundary belongs to. A
/// marker written just inside an opening tag (`<p>|Second`) means the new
/// container's first leaf; anywhere else the earlier leaf wins and position
/// normalization picks the canonical representative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MarkerBias {
    Upstream,
    Downstream,
}

#[derive(Clone, Copy, Debug)]
struct Marker {
    offset: usize,
    bias: MarkerBias,
}

struct MarkupScan {
    clean: String,
    caret: Option<Marker>,
    open: Option<Marker>,
    close: Option<Marker>,
}

/// One pass over markup: strips `|`/`{`/`}` markers (recording their offset
/// in the leaf stream) and inserts the given markers at their offsets. Tags
/// contribute to the stream according to the atomic rules; the contents of
/// atomic containers are assumed empty.
fn scan_markup(markup: &str, insert: &[(usize, &str)]) -> MarkupScan {
    let mut clean = String::new();
    let mut caret = None;
    let mut open = None;
    let mut close = None;
    let mut count = 0usize;
    let mut pending = insert.to_vec();
    pending.sort_by_key(|(offset, _)| *offset);
    pending.reverse();

    let mut open_atomic: Option<String> = None;
    let mut bias = MarkerBias::Downstream;
    let mut chars = markup.chars();
    loop {
        while pending
            .last()
            .is_some_and(|(offset, _)| *offset <= count)
        {
            let (_, marker) = pending.pop().unwrap();
            clean.push_str(marker);
        }
        let Some(ch) = chars.next() else {
            break;
        };
        match ch {
            '<' => {
                let mut tag = String::from("<");
                for c in chars.by_ref() {
                    tag.push(c);
                    if c == '>' {
                        break;
                    }
                }
                bias = consume_tag(&tag, &mut open_atomic, &mut count);
                clean.push_str(&tag);
            }
            '|' => caret = Some(Marker { offset: count, bias }),
            '{' => open = Some(Marker { offset: count, bias }),
            '}' => close = Some(Marker { offset: count, bias }),
            _ => {
                count += ch.len_utf16();
                bias = MarkerBias::Upstream;
                clean.push(ch);
            }
        }
    }
    while let Some((_, marker)) = pending.pop() {
        clean.push_str(marker);
    }

    MarkupScan {
        clean,
        caret,
        open,
        close,
    }
}

/// Advance the marker offset stream over a tag (1 per atomic leaf: void
/// atomics count on their opening tag; atomic containers and tables are
/// remembered when opened and count on their close) and report the bias a
/// marker directly after this tag carries.
fn consume_tag(
    tag: &str,
    open_atomic: &mut Option<String>,
    count: &mut usize,
) -> MarkerBias {
    let inner = tag.trim_start_matches('<').trim_end_matches('>');
    let self_closing = inner.ends_with('/');
    let inner = inner.trim_end_matches('/');
    let is_close = inner.starts_with('/');
    let name = inner
        .trim_start_matches('/')
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase();

    if matches!(name.as_str(), "br" | "hr" | "img") {
        *count += usize::from(!is_close);
        return MarkerBias::Upstream;
    }
    if is_close {
        if open_atomic.as_deref() == Some(name.as_str()) {
            *open_atomic = None;
            *count += 1;
        }
        return MarkerBias::Upstream;
    }
    if name == "table" || tag.contains("atomic-component") {
        if self_closing {
            *count += 1;
            return MarkerBias::Upstream;
        }
        *open_atomic = Some(name);
        return MarkerBias::Upstream;
    }
    // An ordinary opening tag: a marker right after it belongs to the
    // container being entered.
    MarkerBias::Downstream
}

/// Map a marker onto a position. Upstream: the first leaf whose span covers
/// the offset, inclusive of its end. Downstream: the first leaf that still
/// has content at the offset.
fn position_at<S: UnicodeString>(dom: &Dom<S>, marker: Marker) -> Position {
    let global = marker.offset;
    let mut cursor = 0usize;
    let mut leaf_opt = dom.first_addressable_leaf();
    let mut last = None;
    while let Some(leaf) = leaf_opt {
        let len = dom.lookup_node(&leaf).text_len();
        let covered = match marker.bias {
            MarkerBias::Upstream => global <= cursor + len,
            MarkerBias::Downstream => global < cursor + len,
        };
        if covered {
            return Position::new(leaf, global - cursor);
        }
        cursor += len;
        leaf_opt = dom.next_addressable_leaf(&leaf);
        last = Some((leaf, len));
    }
    match last {
        Some((leaf, len)) => Position::new(leaf, len),
        None => panic!("No addressable leaf to place a marker on"),
    }
}

/// The inverse of [position_at].
pub(crate) fn global_offset_of<S: UnicodeString>(
    dom: &Dom<S>,
    position: &Position,
) -> usize {
    let mut cursor = 0usize;
    let mut leaf_opt = dom.first_addressable_leaf();
    while let Some(leaf) = leaf_opt {
        if leaf == position.handle {
            return cursor + position.offset;
        }
        cursor += dom.lookup_node(&leaf).text_len();
        leaf_opt = dom.next_addressable_leaf(&leaf);
    }
    panic!("Position's leaf is not in this document");
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cm_places_a_caret_in_plain_text() {
        let model = cm("ab|c");
        let selection = model.selection().unwrap();
        assert!(selection.is_collapsed());
        assert_eq!(selection.focus().handle.raw(), &vec![0]);
        assert_eq!(selection.focus().offset, 2);
    }

    #[test]
    fn cm_tx_round_trips_a_caret() {
        assert_eq!(tx(&cm("ab|c")), "ab|c");
        assert_eq!(tx(&cm("<p>a|</p>")), "<p>a|</p>");
    }

    #[test]
    fn cm_tx_round_trips_selections() {
        assert_eq!(tx(&cm("a{bc}|d")), "a{bc}|d");
        assert_eq!(tx(&cm("a|{bc}d")), "a|{bc}d");
    }

    #[test]
    fn cm_counts_atomic_leaves_as_one() {
        let model = cm("ab<hr class=\"atomic-component\" />|cd");
        let focus = model.selection().unwrap().focus().clone();
        assert_eq!(focus.handle.raw(), &vec![1]);
        assert_eq!(focus.offset, 1);
    }

    #[test]
    fn cm_selection_direction_follows_the_caret_marker() {
        assert!(!cm("a{bc}|d").selection().unwrap().is_collapsed());
        assert_eq!(
            cm("a|{bc}d").selection().unwrap().direction(),
            crate::SelectionDirection::Backward
        );
    }

    #[test]
    fn tx_renders_markers_against_tags() {
        assert_eq!(
            tx(&cm("<p>Hello <strong>W|orld</strong></p>")),
            "<p>Hello <strong>W|orld</strong></p>"
        );
    }
}
