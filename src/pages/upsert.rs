//! The create/update form page.
//!
//! There is no mode flag in the payload: the mode is inferred from
//! whether the entity's `name` field is populated, once, and carried
//! as an explicit value from there on so that the title, the form
//! action, the button label and the `name` field's lock all branch on
//! the same thing.

use kstring::KString;
use tracing::debug;

use crate::content::{Animal, MainContent, PageContent};
use crate::html::{self, att, flag_att, opt_att, Node};
use crate::site_layout::{PageVariant, RenderedContent};

/// HTML forms can only submit GET or POST; update (and any delete)
/// semantics ride on the action path, never on the HTTP verb.
const FORM_METHOD: &str = "POST";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update { id: KString },
}

impl FormMode {
    /// Create iff the identity field is empty. No other field takes
    /// part in the decision.
    pub fn infer(item: &Animal) -> FormMode {
        if item.name.is_empty() {
            FormMode::Create
        } else {
            FormMode::Update {
                id: KString::from_ref(&item.id),
            }
        }
    }

    fn is_update(&self) -> bool {
        matches!(self, FormMode::Update { .. })
    }

    fn action(&self) -> String {
        match self {
            FormMode::Create => "/products/create".into(),
            FormMode::Update { id } => format!("/products/update/{id}"),
        }
    }

    fn button_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Crear",
            FormMode::Update { .. } => "Actualizar",
        }
    }
}

/// One labeled text input. `value` appears iff the field is populated;
/// `readonly` additionally appears, only when `lock_when_filled`
/// (i.e. for the identity field), under the same condition.
fn text_input(id: &'static str, caption: &'static str, value: &str, lock_when_filled: bool) -> Node {
    let filled = !value.is_empty();
    html::label(
        [att("class", "input")],
        [
            html::input(
                [
                    att("type", "text"),
                    att("id", id),
                    att("name", id),
                    att("placeholder", " "),
                    opt_att("value", filled.then_some(value)),
                    flag_att("readonly", lock_when_filled && filled),
                ],
                [],
            ),
            html::span([], [html::text(caption)]),
        ],
    )
}

pub fn form_fields(item: &Animal) -> Node {
    html::div(
        [],
        [
            html::fieldset(
                [],
                [
                    text_input("name", "Nombre:", &item.name, true),
                    text_input("sciName", "Nombre científico:", &item.sci_name, false),
                    text_input("englishName", "Nombre en inglés:", &item.english_name, false),
                    text_input("group", "Grupo (e.g. Mamíferos, Aves...):", &item.group, false),
                ],
            ),
            html::fieldset(
                [],
                [text_input("image", "Url de la imagen:", &item.image, false)],
            ),
            html::fieldset(
                [],
                [
                    text_input("diet", "Dieta (Carnívoro, Hervívoro...):", &item.diet, false),
                    text_input(
                        "lifestyle",
                        "Estilo de vida (Diurno, Nocturno):",
                        &item.lifestyle,
                        false,
                    ),
                    text_input("location", "Localización:", &item.location, false),
                    text_input("slogan", "Lema:", &item.slogan, false),
                ],
            ),
        ],
    )
}

pub struct UpsertPage;

impl PageVariant for UpsertPage {
    fn document_title(&self) -> &str {
        "Animals | Demo Products"
    }

    fn render_content(&self, payload: Option<PageContent>) -> RenderedContent {
        debug!(target: "views", "rendering upsert page");
        // An absent or shapeless payload becomes the fully-empty
        // entity, i.e. a blank creation form.
        let item = match payload.map(|p| p.main) {
            Some(MainContent::One(item)) => item,
            _ => Animal::default(),
        };
        let mode = FormMode::infer(&item);
        let main_title = match &mode {
            FormMode::Create => KString::from_static("Crear un nuevo animal"),
            FormMode::Update { .. } => {
                KString::from_string(format!("Modificar datos del {}", item.name))
            }
        };
        let deferred_script = mode
            .is_update()
            .then(|| KString::from_static("/form.js"));
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
                        html::div(
                            [],
                            [html::form(
                                [att("action", mode.action()), att("method", FORM_METHOD)],
                                [
                                    form_fields(&item),
                                    html::fieldset(
                                        [],
                                        [html::button(
                                            [att("type", "submit")],
                                            [html::text(mode.button_label())],
                                        )],
                                    ),
                                ],
                            )],
                        ),
                    ],
                )],
            ),
            deferred_script,
        }
    }
}
