//! Middleware for logging requests and responses.

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// Bodies longer than this many bytes are truncated in `info` logs.
const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Headers whose values must never be written to the logs.
const REDACTED_HEADERS: [header::HeaderName; 2] = [header::AUTHORIZATION, header::COOKIE];

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is truncated
/// and logged in full at the `debug` level.
/// HTML bodies hold the user's balances and transactions, so only their
/// length is logged.
/// Credentials in the request headers are redacted.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_text = read_body_text(body).await;

    tracing::info!(
        "Received request: {} {}\nheaders: {:#?}",
        parts.method,
        parts.uri,
        redact_headers(&parts.headers)
    );
    log_body("request", &parts.headers, &body_text);

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_text = read_body_text(body).await;

    tracing::info!(
        "Sending response: {}\nheaders: {:#?}",
        parts.status,
        parts.headers
    );
    log_body("response", &parts.headers, &body_text);

    Response::from_parts(parts, body_text.into())
}

fn redact_headers(headers: &HeaderMap) -> HeaderMap {
    let mut headers = headers.clone();

    for name in REDACTED_HEADERS {
        if headers.contains_key(&name) {
            headers.insert(name, HeaderValue::from_static("********"));
        }
    }

    headers
}

async fn read_body_text(body: Body) -> String {
    match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).to_string(),
        Err(error) => {
            tracing::error!("could not read body for logging: {error}");
            String::new()
        }
    }
}

fn is_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.starts_with("text/html"))
}

fn log_body(direction: &str, headers: &HeaderMap, body: &str) {
    if is_html(headers) {
        tracing::info!("{direction} body: {} bytes of HTML", body.len());
    } else if body.len() > LOG_BODY_LENGTH_LIMIT {
        let end = (0..=LOG_BODY_LENGTH_LIMIT)
            .rev()
            .find(|&index| body.is_char_boundary(index))
            .unwrap_or(0);

        tracing::info!("{direction} body: {}...", &body[..end]);
        tracing::debug!("Full {direction} body: {body:?}");
    } else {
        tracing::info!("{direction} body: {body:?}");
    }
}
