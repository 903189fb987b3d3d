//! Endpoint handlers
//!
//! One function per route. Counter bookkeeping that depends on the outcome
//! (the `/secret` miss) happens here; the per-request total is recorded by
//! the dispatcher before any handler runs.

use crate::anagram::{count_anagrams, validate_word};
use crate::counters::RequestCounters;
use crate::http;
use crate::logger;
use chrono::{DateTime, Utc};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;

/// Body of a successful `/anagram` response
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AnagramBody {
    /// The query parameter exactly as received (after URL decoding)
    pub p: String,
    /// Anagram count in decimal
    pub total: String,
}

/// Body of a `/status` response
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatusBody {
    pub time: String,
    pub req: String,
    pub err: String,
}

/// `GET /ping`
pub fn ping() -> Response<Full<Bytes>> {
    http::build_empty_response(StatusCode::NO_CONTENT)
}

/// `GET /anagram?p=<word>`
///
/// 400 without touching the error counter when `p` is missing, empty or not
/// alphabetic.
pub fn anagram(query: Option<&str>) -> Response<Full<Bytes>> {
    let Some(p) = http::first_query_value(query, "p") else {
        return http::build_400_response();
    };

    match validate_word(&p) {
        Ok(word) => {
            let total = count_anagrams(word).to_string();
            http::build_json_response(StatusCode::OK, &AnagramBody { p, total })
        }
        Err(e) => {
            logger::log_debug(&format!("Rejected anagram parameter ({e}): {p:?}"));
            http::build_400_response()
        }
    }
}

/// `GET /secret`
///
/// The file is read in one step; a missing file is the 404 case and counts
/// as an error.
pub async fn secret(path: &Path, counters: &RequestCounters) -> Response<Full<Bytes>> {
    match tokio::fs::read(path).await {
        Ok(contents) => http::build_file_response(Bytes::from(contents)),
        Err(e) => {
            if e.kind() != ErrorKind::NotFound {
                logger::log_warning(&format!(
                    "Secret file '{}' unreadable, reporting as missing: {e}",
                    path.display()
                ));
            }
            counters.record_error();
            http::build_404_response()
        }
    }
}

/// `GET /status`
pub fn status(counters: &RequestCounters) -> Response<Full<Bytes>> {
    let snapshot = counters.snapshot();
    let body = StatusBody {
        time: format_status_time(Utc::now()),
        req: snapshot.total_requests.to_string(),
        err: snapshot.error_count.to_string(),
    };
    http::build_json_response(StatusCode::OK, &body)
}

/// `YYYY-MM-DDTHH:MM:SSZ`
pub fn format_status_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
