//! Route handlers: the glue between the router, the seed data and
//! the page variants. Handlers build the payload, pick the variant,
//! and ship whatever the layout returns.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use rouille::input::post::raw_urlencoded_post_input;
use rouille::{input::json_input, Request, Response};
use tracing::debug;

use crate::content::{Animal, PageContent};
use crate::handler::{ExactFnHandler, FnHandler, Handler};
use crate::http_error::HttpError;
use crate::http_method::RequestMethod;
use crate::http_status::HttpStatus;
use crate::pages::detail::DetailPage;
use crate::pages::home::HomePage;
use crate::pages::upsert::UpsertPage;
use crate::random_util::random_id;
use crate::site_layout::SiteLayout;
use crate::store::AnimalStore;
use crate::webutils::html_response;

fn require_get(method: RequestMethod, what: &str) -> Result<()> {
    if method.is_get() {
        Ok(())
    } else {
        Err(HttpError::method_not_allowed(format!("{what} only answers GET")).into())
    }
}

/// `/` and `/about`: the static landing page.
pub fn home_handler(layout: Arc<SiteLayout>) -> Arc<dyn Handler> {
    Arc::new(ExactFnHandler::new(move |_request: &Request,
                                       method: RequestMethod|
          -> Result<Response> {
        require_get(method, "the home page")?;
        debug!(target: "controllers", "home page requested");
        Ok(html_response(layout.render(&HomePage, None)))
    }))
}

/// Echo stub for the form submission endpoints. Reads the posted
/// fields back into an entity and returns it; nothing is persisted.
fn form_submission_stub(request: &Request, id: Option<&str>) -> Result<Response> {
    let mut animal = Animal {
        id: match id {
            Some(id) => id.to_string(),
            None => random_id().map_err(|e| anyhow!("no randomness source: {e}"))?,
        },
        ..Animal::default()
    };
    for (key, value) in raw_urlencoded_post_input(request)? {
        match key.as_str() {
            "name" => animal.name = value,
            "sciName" => animal.sci_name = value,
            "englishName" => animal.english_name = value,
            "group" => animal.group = value,
            "image" => animal.image = value,
            "diet" => animal.diet = value,
            "lifestyle" => animal.lifestyle = value,
            "location" => animal.location = value,
            "slogan" => animal.slogan = value,
            _ => (),
        }
    }
    debug!(target: "products", "received form data for {:?}", animal.name);
    let result = serde_json::json!({ "message": "Datos recibidos", "data": animal });
    Ok(Response::json(&result).with_status_code(HttpStatus::Created201.code()))
}

/// Everything below `/products`: the landing page at the root (as the
/// original site wires it), the upsert form under `create` and
/// `update/{id}`, and the detail page under `{id}`.
pub fn products_handler(layout: Arc<SiteLayout>, store: Arc<AnimalStore>) -> Arc<dyn Handler> {
    Arc::new(FnHandler::new(move |request: &Request,
                                  method: RequestMethod,
                                  path_rest: &[&str]|
          -> Result<Option<Response>> {
        match path_rest {
            [] => {
                require_get(method, "the products page")?;
                Ok(Some(html_response(layout.render(&HomePage, None))))
            }
            ["create"] => match method {
                RequestMethod::Get => {
                    Ok(Some(html_response(layout.render(&UpsertPage, None))))
                }
                RequestMethod::Post => Ok(Some(form_submission_stub(request, None)?)),
                _ => Err(HttpError::method_not_allowed("create answers GET and POST").into()),
            },
            ["update", id] => {
                let animal = store
                    .by_id(id)
                    .ok_or_else(|| HttpError::not_found(format!("no animal with id {id:?}")))?;
                match method {
                    RequestMethod::Get => {
                        let payload = PageContent::with_animal(animal.clone());
                        Ok(Some(html_response(layout.render(&UpsertPage, Some(payload)))))
                    }
                    RequestMethod::Post => Ok(Some(form_submission_stub(request, Some(*id))?)),
                    _ => {
                        Err(HttpError::method_not_allowed("update answers GET and POST").into())
                    }
                }
            }
            [id] => {
                require_get(method, "the detail page")?;
                let animal = store
                    .by_id(id)
                    .ok_or_else(|| HttpError::not_found(format!("no animal with id {id:?}")))?;
                let payload = PageContent::with_animal(animal.clone());
                Ok(Some(html_response(layout.render(&DetailPage, Some(payload)))))
            }
            _ => Ok(None),
        }
    }))
}

/// `POST /contacts`: accepts a JSON body, tags it with a fresh id and
/// echoes it back. The original's only write-shaped endpoint, kept as
/// a stub.
pub fn contacts_handler() -> Arc<dyn Handler> {
    Arc::new(ExactFnHandler::new(|request: &Request, method: RequestMethod| -> Result<Response> {
        if !method.is_post() {
            return Err(HttpError::method_not_allowed("contacts only accepts POST").into());
        }
        let mut data: serde_json::Value = json_input(request)?;
        if let Some(object) = data.as_object_mut() {
            let id = random_id().map_err(|e| anyhow!("no randomness source: {e}"))?;
            object.insert("id".into(), serde_json::Value::String(id));
        }
        debug!(target: "contacts", "received contact data");
        let result = serde_json::json!({ "message": "Datos recibidos", "data": data });
        Ok(Response::json(&result).with_status_code(HttpStatus::Created201.code()))
    }))
}
