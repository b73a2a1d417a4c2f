//! The `/api/users` CRUD endpoints. Stubs: they answer with the
//! operation they would perform; nothing is stored.

use std::sync::Arc;

use anyhow::Result;
use rouille::Response;
use tracing::debug;

use crate::handler::{FnHandler, Handler};
use crate::http_method::RequestMethod;
use crate::http_status::HttpStatus;

pub fn users_api_handler() -> Arc<dyn Handler> {
    Arc::new(FnHandler::new(|_request: &rouille::Request,
                             method: RequestMethod,
                             path_rest: &[&str]|
          -> Result<Option<Response>> {
        let response = match (method, path_rest) {
            (RequestMethod::Get, []) => {
                debug!(target: "users", "GET /users");
                Response::text("GET /users")
            }
            (RequestMethod::Post, []) => {
                debug!(target: "users", "POST /users");
                Response::text("POST /users").with_status_code(HttpStatus::Created201.code())
            }
            (RequestMethod::Get, [id]) => {
                debug!(target: "users", "GET /users/{id}");
                Response::text(format!("GET /users/{id}"))
            }
            (RequestMethod::Patch, [id]) => {
                debug!(target: "users", "PATCH /users/{id}");
                Response::text(format!("PATCH /users/{id}"))
            }
            (RequestMethod::Delete, [id]) => {
                debug!(target: "users", "DELETE /users/{id}");
                Response::text(format!("DELETE /users/{id}"))
            }
            _ => return Ok(None),
        };
        Ok(Some(response))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rouille::Request;

    fn call(method: RequestMethod, path_rest: &[&str]) -> Option<Response> {
        let request = Request::fake_http("GET", "/api/users", vec![], vec![]);
        users_api_handler()
            .call(&request, method, path_rest)
            .unwrap()
    }

    #[test]
    fn t_stub_statuses() {
        assert_eq!(call(RequestMethod::Get, &[]).unwrap().status_code, 200);
        assert_eq!(call(RequestMethod::Post, &[]).unwrap().status_code, 201);
        assert_eq!(call(RequestMethod::Patch, &["7"]).unwrap().status_code, 200);
        assert_eq!(call(RequestMethod::Delete, &["7"]).unwrap().status_code, 200);
    }

    #[test]
    fn t_deeper_paths_are_declined() {
        assert!(call(RequestMethod::Get, &["7", "extra"]).is_none());
        assert!(call(RequestMethod::Put, &["7"]).is_none());
    }
}
