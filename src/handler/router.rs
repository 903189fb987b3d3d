//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: counts the request, matches the
//! path against the fixed route table and hands off to an endpoint.

use crate::config::AppState;
use crate::counters::RequestCounters;
use crate::handler::endpoints;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Uri};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

/// Routes served by the dispatcher (exact path match, GET only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Ping,
    Anagram,
    Secret,
    Status,
    NotFound,
}

impl Route {
    /// Resolve a method and path; anything but GET on a known path is `NotFound`
    pub fn resolve(method: &Method, path: &str) -> Self {
        if *method != Method::GET {
            return Self::NotFound;
        }
        match path {
            "/ping" => Self::Ping,
            "/anagram" => Self::Anagram,
            "/secret" => Self::Secret,
            "/status" => Self::Status,
            _ => Self::NotFound,
        }
    }
}

/// Routes requests and owns the handle to the shared counters
pub struct RequestDispatcher {
    counters: Arc<RequestCounters>,
    secret_path: PathBuf,
}

impl RequestDispatcher {
    pub fn new(counters: Arc<RequestCounters>, secret_path: impl Into<PathBuf>) -> Self {
        Self {
            counters,
            secret_path: secret_path.into(),
        }
    }

    pub const fn counters(&self) -> &Arc<RequestCounters> {
        &self.counters
    }

    /// Handle one request
    ///
    /// The request total is incremented before routing, so `/status` reports
    /// itself.
    pub async fn dispatch(&self, method: &Method, uri: &Uri) -> Response<Full<Bytes>> {
        self.counters.record_request();

        match Route::resolve(method, uri.path()) {
            Route::Ping => endpoints::ping(),
            Route::Anagram => endpoints::anagram(uri.query()),
            Route::Secret => endpoints::secret(&self.secret_path, &self.counters).await,
            Route::Status => endpoints::status(&self.counters),
            Route::NotFound => {
                self.counters.record_error();
                http::build_404_response()
            }
        }
    }
}

/// hyper service entry point
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let response = state.dispatcher.dispatch(req.method(), req.uri()).await;

    if state.cached_access_log.load(Ordering::Relaxed) {
        let entry = access_entry(&req, &response, peer_addr, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

fn access_entry<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    peer_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = match req.version() {
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        _ => "1.1",
    }
    .to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = usize::try_from(response.body().size_hint().exact().unwrap_or(0))
        .unwrap_or(usize::MAX);
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}
