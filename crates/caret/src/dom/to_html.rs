// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::dom::nodes::{
    AtomicNode, ContainerNode, DomNode, LineBreakNode, TextNode,
};
use crate::dom::{Dom, UnicodeString};

/// Debug/test serialization back to markup. Not a faithful round-trip of the
/// parsed input: formatting tags are canonicalized and atomic subtrees were
/// never stored.
pub trait ToHtml<S>
where
    S: UnicodeString,
{
    fn fmt_html(&self, buf: &mut S);

    fn to_html(&self) -> S {
        let mut buf = S::default();
        self.fmt_html(&mut buf);
        buf
    }
}

fn push_str<S: UnicodeString>(buf: &mut S, s: &str) {
    buf.append(&S::from_str(s));
}

fn fmt_attrs<S: UnicodeString>(buf: &mut S, attrs: &Vec<(S, S)>) {
    for (name, value) in attrs {
        push_str(buf, " ");
        buf.append(name);
        push_str(buf, "=\"");
        push_str(
            buf,
            &html_escape::encode_double_quoted_attribute(&value.to_utf8()),
        );
        push_str(buf, "\"");
    }
}

fn is_void_tag(name: &str) -> bool {
    matches!(name, "br" | "hr" | "img")
}

impl<S> ToHtml<S> for ContainerNode<S>
where
    S: UnicodeString,
{
    fn fmt_html(&self, buf: &mut S) {
        let is_document = self.name().is_empty();
        if !is_document {
            push_str(buf, "<");
            buf.append(self.name());
            fmt_attrs(buf, self.attrs());
            push_str(buf, ">");
        }
        for child in self.children() {
            child.fmt_html(buf);
        }
        if !is_document {
            push_str(buf, "</");
            buf.append(self.name());
            push_str(buf, ">");
        }
    }
}

impl<S> ToHtml<S> for TextNode<S>
where
    S: UnicodeString,
{
    fn fmt_html(&self, buf: &mut S) {
        push_str(buf, &html_escape::encode_text(&self.data().to_utf8()));
    }
}

impl<S> ToHtml<S> for LineBreakNode<S>
where
    S: UnicodeString,
{
    fn fmt_html(&self, buf: &mut S) {
        push_str(buf, "<br />");
    }
}

impl<S> ToHtml<S> for AtomicNode<S>
where
    S: UnicodeString,
{
    fn fmt_html(&self, buf: &mut S) {
        let name = self.name().to_utf8();
        push_str(buf, "<");
        buf.append(self.name());
        fmt_attrs(buf, self.attrs());
        if is_void_tag(&name) {
            push_str(buf, " />");
        } else {
            push_str(buf, "></");
            buf.append(self.name());
            push_str(buf, ">");
        }
    }
}

impl<S> ToHtml<S> for DomNode<S>
where
    S: UnicodeString,
{
    fn fmt_html(&self, buf: &mut S) {
        match self {
            DomNode::Container(n) => n.fmt_html(buf),
            DomNode::Text(n) => n.fmt_html(buf),
            DomNode::LineBreak(n) => n.fmt_html(buf),
            DomNode::Atomic(n) => n.fmt_html(buf),
        }
    }
}

impl<S> ToHtml<S> for Dom<S>
where
    S: UnicodeString,
{
    fn fmt_html(&self, buf: &mut S) {
        self.document_node().fmt_html(buf)
    }
}

#[cfg(test)]
mod test {
    use crate::tests::testutils_dom::{b, dom, hr, i, mention, tn};
    use crate::ToHtml;

    #[test]
    fn nested_tags_serialize() {
        assert_eq!(
            dom(&[
                tn("foo"),
                b(&[tn("BO"), i(&[tn("LD")])]),
                i(&[tn("it")]),
                tn("bar")
            ])
            .to_html()
            .to_string(),
            "foo<strong>BO<em>LD</em></strong><em>it</em>bar"
        );
    }

    #[test]
    fn html_symbols_inside_text_get_escaped() {
        assert_eq!(
            dom(&[tn("<p>Foo & bar</p>")]).to_html().to_string(),
            "&lt;p&gt;Foo &amp; bar&lt;/p&gt;"
        );
    }

    #[test]
    fn atomic_leaves_serialize_as_empty_elements() {
        assert_eq!(
            dom(&[tn("a"), hr(), mention("@alice")]).to_html().to_string(),
            "a<hr class=\"atomic-component\" />\
             <span class=\"atomic-component\" data-mention-id=\"@alice\"></span>"
        );
    }
}
