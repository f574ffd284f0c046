//! Static file serving for the `/app` and `/assets` scopes.
//!
//! Each scope owns a [`StaticFiles`] rooted at a capability-scoped directory.
//! Lookups cannot leave that directory: `cap-std` refuses `..` escapes and
//! absolute paths, and those requests are answered like missing files.
//! Directory requests serve the directory's `index.html`.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, web};
use cap_std::{ambient_authority, fs::Dir};
use tracing::{debug, error};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::method_not_allowed;

const INDEX_FILE: &str = "index.html";

/// Failure to open a static root at startup.
#[derive(Debug, thiserror::Error)]
#[error("failed to open static root {path}: {source}")]
pub struct StaticRootError {
    /// Directory that could not be opened.
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// A directory served read-only over HTTP.
#[derive(Clone)]
pub struct StaticFiles {
    root: Arc<Dir>,
}

impl StaticFiles {
    /// Open `path` as a served root.
    ///
    /// # Errors
    /// Returns [`StaticRootError`] when the directory cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StaticRootError> {
        let path = path.as_ref();
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(|source| {
            StaticRootError {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self::from_dir(dir))
    }

    /// Serve an already-opened directory.
    pub fn from_dir(dir: Dir) -> Self {
        Self {
            root: Arc::new(dir),
        }
    }

    /// Read the file addressed by `tail`, relative to the root.
    ///
    /// Returns `Ok(None)` when nothing servable exists at that location.
    fn read(&self, tail: &str) -> io::Result<Option<(Vec<u8>, PathBuf)>> {
        let mut relative = PathBuf::from(tail.trim_start_matches('/'));
        if relative.as_os_str().is_empty() {
            relative.push(INDEX_FILE);
        }

        let metadata = match self.root.metadata(&relative) {
            Ok(metadata) => metadata,
            Err(err) if is_not_servable(&err) => return Ok(None),
            Err(err) => return Err(err),
        };
        if metadata.is_dir() {
            relative.push(INDEX_FILE);
        }

        match self.root.read(&relative) {
            Ok(bytes) => Ok(Some((bytes, relative))),
            Err(err) if is_not_servable(&err) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

fn is_not_servable(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound
            | io::ErrorKind::PermissionDenied
            | io::ErrorKind::NotADirectory
            | io::ErrorKind::InvalidInput
    )
}

/// Content type derived from the file extension.
fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("txt") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}

/// Serve the file under the scope's unmatched path tail.
///
/// Registered as the default service of a scope holding its own
/// `web::Data<StaticFiles>`.
pub async fn serve_file(req: HttpRequest, files: web::Data<StaticFiles>) -> ApiResult<HttpResponse> {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return Ok(method_not_allowed("GET, HEAD"));
    }

    let tail = req.match_info().unprocessed().to_owned();
    let files = files.into_inner();
    let lookup = tail.clone();
    let found = web::block(move || files.read(&lookup))
        .await
        .map_err(|err| {
            error!(error = %err, "static file task failed");
            Error::internal("Something went wrong")
        })?
        .map_err(|err| {
            error!(error = %err, path = %tail, "failed to read static file");
            Error::internal("Something went wrong")
        })?;

    let Some((bytes, path)) = found else {
        debug!(path = %tail, "static file not found");
        return Err(Error::not_found("Not found"));
    };

    let mut response = HttpResponse::Ok();
    response.content_type(content_type_for(&path));
    if req.method() == Method::HEAD {
        return Ok(response.finish());
    }
    Ok(response.body(bytes))
}
