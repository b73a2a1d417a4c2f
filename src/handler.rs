use std::any::type_name;
use std::fmt::Debug;
use std::fs::File;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use anyhow::{anyhow, bail, Context, Result};
use httpdate::{fmt_http_date, parse_http_date};
use rouille::{extension_to_mime, Request, Response};
use tracing::debug;

use crate::http_method::RequestMethod;
use crate::http_status::HttpStatus;
use crate::webutils::empty_response;

pub trait Handler: Send + Sync {
    /// `Ok(None)` means the handler declines the request; the caller
    /// treats that as 404 unless another route picks it up. `Err`
    /// means the handler accepted the request but failed, which the
    /// caller translates into an error response.
    fn call(
        &self,
        request: &Request,
        method: RequestMethod,
        path_rest: &[&str],
    ) -> Result<Option<Response>>;
}

// ------------------------------------------------------------------
/// A handler that allows a path surplus, passing it on. The closure
/// may still decline the request.
pub struct FnHandler<F>
where
    F: Fn(&Request, RequestMethod, &[&str]) -> Result<Option<Response>> + Send + Sync,
{
    handler: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&Request, RequestMethod, &[&str]) -> Result<Option<Response>> + Send + Sync,
{
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F> Handler for FnHandler<F>
where
    F: Fn(&Request, RequestMethod, &[&str]) -> Result<Option<Response>> + Send + Sync,
{
    fn call(
        &self,
        request: &Request,
        method: RequestMethod,
        path_rest: &[&str],
    ) -> Result<Option<Response>> {
        (self.handler)(request, method, path_rest)
    }
}

impl<F> Debug for FnHandler<F>
where
    F: Fn(&Request, RequestMethod, &[&str]) -> Result<Option<Response>> + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("FnHandler({})", type_name::<F>()))
    }
}

// ------------------------------------------------------------------
/// A handler that does not allow a path surplus.
pub struct ExactFnHandler<F>
where
    F: Fn(&Request, RequestMethod) -> Result<Response> + Send + Sync,
{
    handler: F,
}

impl<F> ExactFnHandler<F>
where
    F: Fn(&Request, RequestMethod) -> Result<Response> + Send + Sync,
{
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F> Debug for ExactFnHandler<F>
where
    F: Fn(&Request, RequestMethod) -> Result<Response> + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("ExactFnHandler({})", type_name::<F>()))
    }
}

impl<F> Handler for ExactFnHandler<F>
where
    F: Fn(&Request, RequestMethod) -> Result<Response> + Send + Sync,
{
    fn call(
        &self,
        request: &Request,
        method: RequestMethod,
        path_rest: &[&str],
    ) -> Result<Option<Response>> {
        if path_rest.is_empty() {
            Ok(Some((self.handler)(request, method)?))
        } else {
            // refuse to handle if there is a rest (-> 404)
            Ok(None)
        }
    }
}

// ------------------------------------------------------------------
// Static files

/// Resolve `.` / `..` / empty segments; `None` means the path tries
/// to escape the base directory.
fn canonical_segments<'s>(segments: &[&'s str]) -> Option<Vec<&'s str>> {
    let mut out = Vec::new();
    for segment in segments {
        match *segment {
            "." | "" => (),
            ".." => {
                if out.pop().is_none() {
                    return None;
                }
            }
            other => out.push(other),
        }
    }
    Some(out)
}

/// True if the file is newer than the snapshot time the client sent.
/// HTTP dates have second resolution while mtimes do not, so require
/// at least a full second of difference.
fn file_is_newer_than(mtime: SystemTime, modsince: SystemTime) -> bool {
    match mtime.duration_since(modsince) {
        Err(_) => false,
        Ok(newer_by) => newer_by >= Duration::from_secs(1),
    }
}

/// Serve files from the local file system.
pub struct FileHandler {
    /// Base directory; the surplus of the request path is resolved
    /// below it and may not step outside.
    basepath: PathBuf,
}

impl FileHandler {
    pub fn new(basepath: impl Into<PathBuf>) -> FileHandler {
        FileHandler {
            basepath: basepath.into(),
        }
    }
}

impl Handler for FileHandler {
    /// Declines when the file does not exist.
    fn call(
        &self,
        request: &Request,
        method: RequestMethod,
        path_rest: &[&str],
    ) -> Result<Option<Response>> {
        if method.is_post() {
            bail!("can't POST to a file")
        }
        let Some(canonical) = canonical_segments(path_rest) else {
            debug!(target: "static", "path escapes base dir: {path_rest:?}");
            return Ok(None);
        };
        if canonical.is_empty() {
            return Ok(None); // a directory, not a file
        }
        let full_path = self.basepath.join(canonical.join("/"));
        let metadata = match full_path.metadata() {
            Ok(m) => m,
            Err(e) => match e.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => {
                    return Err(e)
                        .with_context(|| anyhow!("can't stat file: {:?}", full_path))
                }
            },
        };
        if !metadata.is_file() {
            return Ok(None);
        }
        let mimetype = match full_path.extension() {
            Some(extension) => {
                extension_to_mime(extension.to_str().expect("came from str segments"))
            }
            None => "text/plain",
        };
        let mtime = metadata.modified()?;
        if let Some(modsince_str) = request.header("If-Modified-Since") {
            let modsince = parse_http_date(modsince_str)
                .with_context(|| anyhow!("parsing If-Modified-Since {:?}", modsince_str))?;
            if !file_is_newer_than(mtime, modsince) {
                return Ok(Some(empty_response(HttpStatus::NotModified304)));
            }
        }
        let fh = match File::open(&full_path) {
            Ok(fh) => fh,
            Err(e) => match e.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => {
                    return Err(e).with_context(|| {
                        anyhow!("can't open file for reading: {:?}", full_path)
                    })
                }
            },
        };
        Ok(Some(
            Response::from_file(mimetype, fh)
                .with_additional_header("Last-Modified", fmt_http_date(mtime)),
        ))
    }
}
