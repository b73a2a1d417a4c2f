//! Html document tree with escaping at serialization time.
//!
//! Pages are built as owned `Node` trees and turned into a string in
//! one pass at the end. Every text node and attribute value goes
//! through `push_escaped`; there is no way to splice a raw string
//! into the output.

use kstring::KString;

const DOCTYPE: &str = "<!DOCTYPE html>\n";

/// Elements that must not get a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: &'static str,
    /// `None` serializes as a bare attribute (`readonly`).
    pub value: Option<KString>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(KString),
    /// Renders as nothing; for the "else" arm of conditional markup.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<Attr>,
    pub body: Vec<Node>,
}

/// Attribute with a value, always present.
pub fn att(name: &'static str, value: impl AsRef<str>) -> Option<Attr> {
    Some(Attr {
        name,
        value: Some(KString::from_ref(value.as_ref())),
    })
}

/// Attribute that is present iff a value is given.
pub fn opt_att(name: &'static str, value: Option<impl AsRef<str>>) -> Option<Attr> {
    value.map(|value| Attr {
        name,
        value: Some(KString::from_ref(value.as_ref())),
    })
}

/// Bare (valueless) attribute that is present iff `on` holds.
pub fn flag_att(name: &'static str, on: bool) -> Option<Attr> {
    if on {
        Some(Attr { name, value: None })
    } else {
        None
    }
}

pub fn text(s: impl AsRef<str>) -> Node {
    Node::Text(KString::from_ref(s.as_ref()))
}

pub fn empty() -> Node {
    Node::None
}

pub fn element(
    tag: &'static str,
    attrs: impl IntoIterator<Item = Option<Attr>>,
    body: impl IntoIterator<Item = Node>,
) -> Node {
    Node::Element(Element {
        tag,
        attrs: attrs.into_iter().flatten().collect(),
        body: body.into_iter().collect(),
    })
}

macro_rules! elements {
    ($($name:ident)*) => {$(
        pub fn $name(
            attrs: impl IntoIterator<Item = Option<Attr>>,
            body: impl IntoIterator<Item = Node>,
        ) -> Node {
            element(stringify!($name), attrs, body)
        }
    )*}
}

elements! {
    html head meta title link script
    body header footer nav main section article div
    h1 h2 h3 p strong i a img ul li
    form fieldset label input button span
}

/// The one escaping step every interpolated value passes through.
pub fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

impl Node {
    fn write(&self, out: &mut String) {
        match self {
            Node::Text(s) => push_escaped(out, s),
            Node::None => (),
            Node::Element(e) => {
                out.push('<');
                out.push_str(e.tag);
                for Attr { name, value } in &e.attrs {
                    out.push(' ');
                    out.push_str(name);
                    if let Some(value) = value {
                        out.push_str("=\"");
                        push_escaped(out, value);
                        out.push('"');
                    }
                }
                out.push('>');
                if !is_void(e.tag) {
                    for node in &e.body {
                        node.write(out);
                    }
                    out.push_str("</");
                    out.push_str(e.tag);
                    out.push('>');
                }
            }
        }
    }

    pub fn to_fragment_string(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    pub fn to_document_string(&self) -> String {
        let mut out = String::from(DOCTYPE);
        self.write(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(s: &str) -> String {
        let mut out = String::new();
        push_escaped(&mut out, s);
        out
    }

    #[test]
    fn t_push_escaped() {
        assert_eq!(escaped("plain text"), "plain text");
        assert_eq!(escaped("a & b"), "a &amp; b");
        assert_eq!(escaped("<script>"), "&lt;script&gt;");
        assert_eq!(escaped("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escaped("it's"), "it&#39;s");
        assert_eq!(escaped(""), "");
    }

    #[test]
    fn t_element_serialization() {
        let node = div(
            [att("class", "pair")],
            [p([], [text("a")]), p([], [text("b")])],
        );
        assert_eq!(
            node.to_fragment_string(),
            "<div class=\"pair\"><p>a</p><p>b</p></div>"
        );
    }

    #[test]
    fn t_void_elements_have_no_closing_tag() {
        let node = img([att("src", "leon.jpg"), att("alt", "Leon")], []);
        assert_eq!(
            node.to_fragment_string(),
            "<img src=\"leon.jpg\" alt=\"Leon\">"
        );
        let node = input([att("type", "text")], []);
        assert_eq!(node.to_fragment_string(), "<input type=\"text\">");
    }

    #[test]
    fn t_bare_and_conditional_attributes() {
        let node = input(
            [
                att("name", "name"),
                opt_att("value", Some("Leon")),
                flag_att("readonly", true),
            ],
            [],
        );
        assert_eq!(
            node.to_fragment_string(),
            "<input name=\"name\" value=\"Leon\" readonly>"
        );
        let node = input(
            [
                att("name", "name"),
                opt_att("value", None::<&str>),
                flag_att("readonly", false),
            ],
            [],
        );
        assert_eq!(node.to_fragment_string(), "<input name=\"name\">");
    }

    #[test]
    fn t_attribute_values_are_escaped() {
        let node = input([att("value", "a\"b & c")], []);
        assert_eq!(
            node.to_fragment_string(),
            "<input value=\"a&quot;b &amp; c\">"
        );
    }

    #[test]
    fn t_text_is_escaped() {
        let node = p([], [text("1 < 2 && 3 > 2")]);
        assert_eq!(
            node.to_fragment_string(),
            "<p>1 &lt; 2 &amp;&amp; 3 &gt; 2</p>"
        );
    }

    #[test]
    fn t_none_renders_as_nothing() {
        let node = div([], [empty(), text("x"), empty()]);
        assert_eq!(node.to_fragment_string(), "<div>x</div>");
    }

    #[test]
    fn t_document_string() {
        let node = html([att("lang", "en")], [body([], [])]);
        assert_eq!(
            node.to_document_string(),
            "<!DOCTYPE html>\n<html lang=\"en\"><body></body></html>"
        );
    }
}
