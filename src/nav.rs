use crate::html::{self, att, Node};

pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavEntry {
    fn to_html(&self) -> Node {
        html::li(
            [att("class", "menu-tablet")],
            [html::a([att("href", self.path)], [html::text(self.label)])],
        )
    }
}

/// The menu, in declaration order. Held by the layout, not a global;
/// the production sequence lives in the server binary.
pub struct Nav(pub &'static [NavEntry]);

impl Nav {
    pub fn to_html(&self) -> Node {
        html::ul([], self.0.iter().map(NavEntry::to_html).collect::<Vec<_>>())
    }
}
