//! The document parts every page shares: head, header, footer.
//!
//! Pure functions over scalar inputs; the layout owns the fixed asset
//! paths and passes them in.

use crate::html::{self, att, flag_att, Node};
use crate::nav::Nav;

/// Fixed references the head and header emit. Resolving them to real
/// files is the static-file handler's (or the deployment's) business.
pub struct SiteAssets {
    pub description: &'static str,
    pub favicon: &'static str,
    /// (url, wants crossorigin)
    pub font_preconnects: &'static [(&'static str, bool)],
    pub font_stylesheet: &'static str,
    pub stylesheets: &'static [&'static str],
    pub client_script: &'static str,
    pub logo: &'static str,
}

pub fn head(title: &str, assets: &SiteAssets, deferred_script: Option<&str>) -> Node {
    let mut body = vec![
        html::meta([att("charset", "UTF-8")], []),
        html::meta(
            [
                att("name", "viewport"),
                att("content", "width=device-width, initial-scale=1.0"),
            ],
            [],
        ),
        html::meta(
            [att("name", "description"), att("content", assets.description)],
            [],
        ),
        html::title([], [html::text(title)]),
        html::link(
            [
                att("rel", "shortcut icon"),
                att("href", assets.favicon),
                att("type", "image/svg+xml"),
            ],
            [],
        ),
    ];
    for (url, crossorigin) in assets.font_preconnects {
        body.push(html::link(
            [
                att("rel", "preconnect"),
                att("href", *url),
                flag_att("crossorigin", *crossorigin),
            ],
            [],
        ));
    }
    body.push(html::link(
        [att("href", assets.font_stylesheet), att("rel", "stylesheet")],
        [],
    ));
    for stylesheet in assets.stylesheets {
        body.push(html::link(
            [att("rel", "stylesheet"), att("href", *stylesheet)],
            [],
        ));
    }
    body.push(html::script(
        [att("src", assets.client_script), flag_att("defer", true)],
        [],
    ));
    if let Some(src) = deferred_script {
        body.push(html::script([att("src", src), flag_att("defer", true)], []));
    }
    html::head([], body)
}

pub fn header(display_name: &str, nav: &Nav, assets: &SiteAssets) -> Node {
    html::header(
        [att("class", "main-header")],
        [
            html::img(
                [att("src", assets.logo), att("width", "120"), att("alt", "Logo")],
                [],
            ),
            html::h1(
                [att("id", "header1"), att("data-id", "1"), att("class", "h2")],
                [html::text(display_name)],
            ),
            html::nav([], [nav.to_html()]),
        ],
    )
}

pub fn year_range(from: i32, to: i32) -> String {
    if from == to {
        from.to_string()
    } else {
        format!("{}–{}", from, to)
    }
}

pub fn footer(copyright_owner: &str, copyright_from: i32, year: i32) -> Node {
    html::footer(
        [att("class", "main-footer")],
        [html::p(
            [],
            [html::text(format!(
                "Copyright © {} {}",
                year_range(copyright_from, year),
                copyright_owner
            ))],
        )],
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::nav::NavEntry;

    pub(crate) const TEST_ASSETS: SiteAssets = SiteAssets {
        description: "Sitio de demostración de productos",
        favicon: "favicon.svg",
        font_preconnects: &[
            ("https://fonts.googleapis.com", false),
            ("https://fonts.gstatic.com", true),
        ],
        font_stylesheet: "https://fonts.googleapis.com/css2?family=Overpass&display=swap",
        stylesheets: &["guide.css", "main.css"],
        client_script: "index.js",
        logo: "./assets/logo.png",
    };

    pub(crate) static TEST_NAV: &[NavEntry] = &[
        NavEntry { label: "Index", path: "./" },
        NavEntry { label: "Productos", path: "./products" },
        NavEntry { label: "About", path: "./about" },
    ];

    #[test]
    fn t_head() {
        let out = head("Inicio | Demo Products", &TEST_ASSETS, None).to_fragment_string();
        assert!(out.starts_with("<head><meta charset=\"UTF-8\">"));
        assert!(out.contains("<title>Inicio | Demo Products</title>"));
        assert!(out.contains("<link rel=\"preconnect\" href=\"https://fonts.gstatic.com\" crossorigin>"));
        assert!(out.contains("<link rel=\"stylesheet\" href=\"main.css\">"));
        assert!(out.contains("<script src=\"index.js\" defer></script>"));
    }

    #[test]
    fn t_head_with_deferred_script() {
        let out =
            head("Animals | Demo Products", &TEST_ASSETS, Some("/form.js")).to_fragment_string();
        assert!(out.contains("<script src=\"/form.js\" defer></script>"));
    }

    #[test]
    fn t_header() {
        let out = header("Demo Products", &Nav(TEST_NAV), &TEST_ASSETS).to_fragment_string();
        assert!(out.contains("<img src=\"./assets/logo.png\" width=\"120\" alt=\"Logo\">"));
        assert!(out.contains(
            "<h1 id=\"header1\" data-id=\"1\" class=\"h2\">Demo Products</h1>"
        ));
        assert_eq!(out.matches("<li class=\"menu-tablet\">").count(), 3);
    }

    #[test]
    fn t_year_range() {
        assert_eq!(year_range(2025, 2025), "2025");
        assert_eq!(year_range(2025, 2026), "2025–2026");
    }

    #[test]
    fn t_footer() {
        let out = footer("JuananDesign", 2025, 2026).to_fragment_string();
        assert_eq!(
            out,
            "<footer class=\"main-footer\"><p>Copyright © 2025–2026 JuananDesign</p></footer>"
        );
    }
}
