//! HTTP response building module
//!
//! Provides builders for the responses the dispatcher emits, decoupled from
//! routing. Builders never panic: a failed build is logged and replaced with
//! a bare response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Build a response with no body (204, 400, 404)
pub fn build_empty_response(status: StatusCode) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            bare_response(status, Bytes::new())
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_empty_response(StatusCode::NOT_FOUND)
}

/// Build 400 Bad Request response
pub fn build_400_response() -> Response<Full<Bytes>> {
    build_empty_response(StatusCode::BAD_REQUEST)
}

/// Build compact JSON response
///
/// Serialization failures become a 500 with an empty body.
pub fn build_json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_vec(body) {
        Ok(j) => Bytes::from(j),
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            return build_empty_response(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };
    let content_length = json.len();

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length)
        .body(Full::new(json.clone()))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            bare_response(status, json)
        })
}

/// Build 200 response carrying raw file contents
pub fn build_file_response(data: Bytes) -> Response<Full<Bytes>> {
    let content_length = data.len();

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(data.clone()))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            bare_response(StatusCode::OK, data)
        })
}

fn bare_response(status: StatusCode, body: Bytes) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(body));
    *response.status_mut() = status;
    response
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response<Full<Bytes>>) -> Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_empty_response() {
        let response = build_empty_response(StatusCode::NO_CONTENT);
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_json_response_is_compact() {
        let response = build_json_response(StatusCode::OK, &serde_json::json!({"a": "1"}));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(body_of(response).await, Bytes::from(r#"{"a":"1"}"#));
    }

    #[tokio::test]
    async fn test_json_content_length_matches_body() {
        let body = serde_json::json!({"p": "crépe", "total": "120"});
        let response = build_json_response(StatusCode::OK, &body);
        let declared: usize = response.headers()["content-length"]
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(body_of(response).await.len(), declared);
    }

    #[tokio::test]
    async fn test_file_response_is_verbatim() {
        let response = build_file_response(Bytes::from("line one\nline two\n"));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-length"], "18");
        assert_eq!(body_of(response).await, Bytes::from("line one\nline two\n"));
    }
}
