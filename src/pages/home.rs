use tracing::debug;

use crate::content::PageContent;
use crate::html;
use crate::site_layout::{PageVariant, RenderedContent};

/// The landing page. Ignores whatever payload it is given; the body is
/// the same static content on every render.
pub struct HomePage;

impl PageVariant for HomePage {
    fn document_title(&self) -> &str {
        "Inicio | Demo Products"
    }

    fn render_content(&self, _payload: Option<PageContent>) -> RenderedContent {
        debug!(target: "views", "rendering home page");
        RenderedContent {
            main: html::main(
                [],
                [html::section(
                    [],
                    [
                        html::h2([], [html::text("Página de inicio")]),
                        html::p([], [html::text("Bienvenido a la página de inicio")]),
                    ],
                )],
            ),
            deferred_script: None,
        }
    }
}
