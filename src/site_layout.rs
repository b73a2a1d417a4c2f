//! The shared document shell, parameterized over page variants via a
//! trait.
//!
//! The shell never looks inside the payload: it calls the active
//! variant's content step first, then wraps whatever came back in
//! doctype, head, header and footer. New page kinds are added by
//! implementing `PageVariant`, not by touching the shell.

use chrono::{Datelike, Utc};
use kstring::KString;

use crate::content::PageContent;
use crate::html::{self, att, Node};
use crate::nav::Nav;
use crate::webparts::{self, SiteAssets};

/// What a variant's content step hands back to the shell. Both the
/// title and the body are final by the time the shell assembles.
pub struct RenderedContent {
    pub main: Node,
    /// Extra script the head should load deferred (the upsert page
    /// injects one in update mode).
    pub deferred_script: Option<KString>,
}

pub trait PageVariant: Send + Sync {
    /// Document title for the head. Fixed per variant.
    fn document_title(&self) -> &str;

    /// Turn the payload into the body fragment. An absent payload must
    /// yield a usable default (empty or placeholder body), never fail.
    fn render_content(&self, payload: Option<PageContent>) -> RenderedContent;
}

pub struct SiteLayout {
    /// Shown in the header, next to the logo.
    pub site_name: &'static str,
    pub copyright_owner: &'static str,
    pub copyright_from: i32,
    pub nav: Nav,
    pub assets: SiteAssets,
}

impl SiteLayout {
    /// Produce the complete document for one request. Pure except for
    /// reading the clock for the footer year.
    pub fn render(&self, variant: &dyn PageVariant, payload: Option<PageContent>) -> String {
        let RenderedContent {
            main,
            deferred_script,
        } = variant.render_content(payload);
        html::html(
            [att("lang", "en")],
            [
                webparts::head(
                    variant.document_title(),
                    &self.assets,
                    deferred_script.as_deref(),
                ),
                html::body(
                    [],
                    [
                        webparts::header(self.site_name, &self.nav, &self.assets),
                        main,
                        webparts::footer(
                            self.copyright_owner,
                            self.copyright_from,
                            Utc::now().year(),
                        ),
                    ],
                ),
            ],
        )
        .to_document_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MainContent;
    use crate::nav::NavEntry;
    use crate::webparts::tests::{TEST_ASSETS, TEST_NAV};

    pub(crate) fn test_layout() -> SiteLayout {
        SiteLayout {
            site_name: "Demo Products",
            copyright_owner: "JuananDesign",
            copyright_from: 2025,
            nav: Nav(TEST_NAV),
            assets: TEST_ASSETS,
        }
    }

    struct BlankPage;
    impl PageVariant for BlankPage {
        fn document_title(&self) -> &str {
            "Blank | Demo Products"
        }
        fn render_content(&self, _payload: Option<PageContent>) -> RenderedContent {
            RenderedContent {
                main: html::empty(),
                deferred_script: None,
            }
        }
    }

    #[test]
    fn t_missing_payload_still_yields_a_complete_document() {
        let out = test_layout().render(&BlankPage, None);
        assert!(out.starts_with("<!DOCTYPE html>\n<html lang=\"en\"><head>"));
        assert!(out.contains("<title>Blank | Demo Products</title>"));
        assert!(out.contains("<h1 id=\"header1\" data-id=\"1\" class=\"h2\">Demo Products</h1>"));
        assert!(out.contains("<footer class=\"main-footer\">"));
        assert!(out.ends_with("</body></html>"));
    }

    #[test]
    fn t_repeated_renders_are_byte_identical() {
        let layout = test_layout();
        assert_eq!(layout.render(&BlankPage, None), layout.render(&BlankPage, None));
    }

    #[test]
    fn t_nav_varies_with_layout_configuration() {
        static OTHER_NAV: &[NavEntry] = &[NavEntry { label: "Solo", path: "./" }];
        let mut layout = test_layout();
        layout.nav = Nav(OTHER_NAV);
        let out = layout.render(&BlankPage, None);
        assert_eq!(out.matches("<li class=\"menu-tablet\">").count(), 1);
        assert!(out.contains("Solo"));
    }

    #[test]
    fn t_shell_inserts_variant_content_verbatim() {
        struct Marked;
        impl PageVariant for Marked {
            fn document_title(&self) -> &str {
                "Marked"
            }
            fn render_content(&self, payload: Option<PageContent>) -> RenderedContent {
                // a variant interpreting the payload on its own terms
                let title = payload
                    .map(|p| p.main_title)
                    .unwrap_or_else(|| KString::from_static("none"));
                RenderedContent {
                    main: html::main([], [html::text(title)]),
                    deferred_script: None,
                }
            }
        }
        let layout = test_layout();
        let payload = PageContent::new("hello shell", MainContent::Empty);
        let out = layout.render(&Marked, Some(payload));
        assert!(out.contains("<main>hello shell</main>"));
    }
}
