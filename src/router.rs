//! Ordered prefix routing. Several handlers may share a prefix (the
//! site root carries both the home page and the static file
//! fallback); matching entries are tried longest prefix first, then
//! in insertion order.

use std::cmp::Reverse;
use std::sync::Arc;

use anyhow::Result;
use rouille::{Request, Response};

use crate::handler::Handler;
use crate::http_method::RequestMethod;

struct Route {
    segments: Vec<&'static str>,
    handler: Arc<dyn Handler>,
}

pub struct Router {
    routes: Vec<Route>,
}

fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

impl Router {
    pub fn new() -> Router {
        Router { routes: Vec::new() }
    }

    /// Using path *strings*, and chaining.
    pub fn add(&mut self, path: &'static str, handler: Arc<dyn Handler>) -> &mut Self {
        self.routes.push(Route {
            segments: path_segments(path),
            handler,
        });
        self
    }

    pub fn handle(&self, request: &Request, method: RequestMethod) -> Result<Option<Response>> {
        let url = request.url();
        let segments = path_segments(&url);
        let mut candidates: Vec<&Route> = self
            .routes
            .iter()
            .filter(|route| {
                segments.len() >= route.segments.len()
                    && route.segments.iter().zip(&segments).all(|(a, b)| a == b)
            })
            .collect();
        // stable sort keeps insertion order within a prefix length
        candidates.sort_by_key(|route| Reverse(route.segments.len()));
        for route in candidates {
            let path_rest = &segments[route.segments.len()..];
            if let Some(response) = route.handler.call(request, method, path_rest)? {
                return Ok(Some(response));
            }
        }
        Ok(None)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
