use std::borrow::Cow;

use rouille::{Response, ResponseBody};
use tracing::error;

use crate::http_error::HttpError;
use crate::http_status::HttpStatus;

pub fn empty_response(status: HttpStatus) -> Response {
    Response {
        status_code: status.code(),
        headers: vec![],
        data: ResponseBody::empty(),
        upgrade: None,
    }
}

/// A complete page from the layout, as an HTTP response.
pub fn html_response(body: String) -> Response {
    Response {
        status_code: HttpStatus::OK200.code(),
        headers: vec![(
            Cow::from("Content-Type"),
            Cow::from("text/html; charset=utf-8"),
        )],
        data: ResponseBody::from_string(body),
        upgrade: None,
    }
}

/// Minimal self-contained error page, for requests no route accepts.
pub fn errorpage_from_status(status: HttpStatus) -> Response {
    let title = status.title();
    let explanation = status.desc();
    let body = format!(
        "<html><head><title>{title}</title></head><body><h1>{title}</h1>\
         <p>{explanation}</p></body></html>\n"
    );
    Response {
        status_code: status.code(),
        headers: vec![(
            Cow::from("Content-Type"),
            Cow::from("text/html; charset=utf-8"),
        )],
        data: ResponseBody::from_string(body),
        upgrade: None,
    }
}

/// Translate a handler failure into the public response: an
/// `HttpError` keeps its status, everything else becomes a 500. The
/// body only ever carries the status line; details go to the log.
pub fn error_response(err: &anyhow::Error) -> Response {
    let status = match err.downcast_ref::<HttpError>() {
        Some(http_error) => http_error.status,
        None => HttpStatus::InternalServerError500,
    };
    let public_message = format!("Error: {} {}", status.code(), status.title());
    error!(target: "server", "{public_message}: {err:#}");
    Response::text(public_message).with_status_code(status.code())
}
