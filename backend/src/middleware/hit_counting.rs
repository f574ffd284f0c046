//! Middleware counting requests that reach the static file server.
//!
//! The counter is shared with the admin handlers, which read and reset it.
//! Every request passing through the wrapped scope is counted once, before
//! the inner service runs, regardless of the eventual response status.

use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use futures_util::future::{Ready, ready};
use tracing::trace;

use crate::domain::HitCounter;

/// Middleware incrementing a shared [`HitCounter`] once per request.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use actix_web::{App, web};
/// use chirpy::domain::HitCounter;
/// use chirpy::middleware::HitCounting;
///
/// let hits = Arc::new(HitCounter::new());
/// let _app = App::new().service(web::scope("/app").wrap(HitCounting::new(hits)));
/// ```
#[derive(Clone)]
pub struct HitCounting {
    hits: Arc<HitCounter>,
}

impl HitCounting {
    /// Count requests into `hits`.
    pub fn new(hits: Arc<HitCounter>) -> Self {
        Self { hits }
    }
}

impl<S, B> Transform<S, ServiceRequest> for HitCounting
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = HitCountingMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(HitCountingMiddleware {
            service,
            hits: Arc::clone(&self.hits),
        }))
    }
}

/// Service wrapper produced by [`HitCounting`].
pub struct HitCountingMiddleware<S> {
    service: S,
    hits: Arc<HitCounter>,
}

impl<S, B> Service<ServiceRequest> for HitCountingMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let hits = self.hits.increment();
        trace!(hits, path = req.path(), "file server hit");
        self.service.call(req)
    }
}
