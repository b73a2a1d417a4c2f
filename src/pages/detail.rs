use kstring::KString;
use tracing::debug;

use crate::content::{Animal, MainContent, PageContent};
use crate::html::{self, att, Node};
use crate::site_layout::{PageVariant, RenderedContent};

/// Detail view for one animal (or, defensively, a whole list of them).
pub struct DetailPage;

fn field_row(label: &'static str, value: &str) -> Node {
    html::p(
        [],
        [
            html::strong([], [html::text(label)]),
            html::text(format!(" {value}")),
        ],
    )
}

fn animal_article(item: &Animal) -> Node {
    html::article(
        [],
        [
            html::h3(
                [att("class", "h4")],
                [html::i([], [html::text(format!("({})", item.sci_name))])],
            ),
            html::p(
                [],
                [html::img([att("src", &item.image), att("alt", &item.name)], [])],
            ),
            field_row("Inglés:", &item.english_name),
            field_row("Dieta:", &item.diet),
            field_row("Estilo de vida:", &item.lifestyle),
            field_row("Localización:", &item.location),
            field_row("Lema:", &item.slogan),
        ],
    )
}

impl PageVariant for DetailPage {
    fn document_title(&self) -> &str {
        "Animals | Demo Products"
    }

    fn render_content(&self, payload: Option<PageContent>) -> RenderedContent {
        debug!(target: "views", "rendering detail page");
        let Some(payload) = payload else {
            return RenderedContent {
                main: html::empty(),
                deferred_script: None,
            };
        };
        // The title is the entity's name; empty when no entity came in
        // (defensive guard, not a checked precondition).
        let (main_title, articles): (KString, Vec<Node>) = match &payload.main {
            MainContent::One(item) => (
                KString::from_ref(&item.name),
                vec![animal_article(item)],
            ),
            MainContent::Many(items) => (
                items
                    .first()
                    .map(|item| KString::from_ref(&item.name))
                    .unwrap_or_else(|| KString::from_static("")),
                items.iter().map(animal_article).collect(),
            ),
            MainContent::Empty | MainContent::Text(_) => (KString::from_static(""), vec![]),
        };
        RenderedContent {
            main: html::main(
                [],
                [html::section(
                    [],
                    [
                        html::a(
                            [att("href", "/products")],
                            [html::h2([att("class", "h3")], [html::text(main_title)])],
                        ),
                        html::div([], articles),
                    ],
                )],
            ),
            deferred_script: payload.script,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leon() -> Animal {
        Animal {
            id: "7".into(),
            name: "Leon".into(),
            sci_name: "Panthera leo".into(),
            english_name: "Lion".into(),
            group: "Mamíferos".into(),
            image: "leon.jpg".into(),
            diet: "Carnívoro".into(),
            lifestyle: "Diurno".into(),
            location: "África".into(),
            slogan: "El rey de la sabana".into(),
        }
    }

    #[test]
    fn t_single_entity() {
        let out = DetailPage
            .render_content(Some(PageContent::with_animal(leon())))
            .main
            .to_fragment_string();
        assert!(out.contains("<h2 class=\"h3\">Leon</h2>"));
        assert_eq!(out.matches("<img src=\"leon.jpg\" alt=\"Leon\">").count(), 1);
        assert!(out.contains("<i>(Panthera leo)</i>"));
        assert!(out.contains("<strong>Inglés:</strong> Lion"));
        assert!(out.contains("<strong>Lema:</strong> El rey de la sabana"));
    }

    #[test]
    fn t_one_article_per_entity() {
        let other = Animal {
            name: "Tigre".into(),
            ..leon()
        };
        let out = DetailPage
            .render_content(Some(PageContent::new(
                "",
                MainContent::Many(vec![leon(), other]),
            )))
            .main
            .to_fragment_string();
        assert_eq!(out.matches("<article>").count(), 2);
        // title comes from the first entity
        assert!(out.contains("<h2 class=\"h3\">Leon</h2>"));
    }

    #[test]
    fn t_absent_entity_degrades_to_empty_title() {
        let out = DetailPage
            .render_content(Some(PageContent::new("ignored", MainContent::Empty)))
            .main
            .to_fragment_string();
        assert!(out.contains("<h2 class=\"h3\"></h2>"));
        assert_eq!(out.matches("<article>").count(), 0);
    }

    #[test]
    fn t_absent_payload_yields_empty_body() {
        assert_eq!(DetailPage.render_content(None).main.to_fragment_string(), "");
    }

    #[test]
    fn t_field_values_are_escaped() {
        let hostile = Animal {
            name: "Leon".into(),
            slogan: "<script>alert(1)</script>".into(),
            ..Animal::default()
        };
        let out = DetailPage
            .render_content(Some(PageContent::with_animal(hostile)))
            .main
            .to_fragment_string();
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }
}
