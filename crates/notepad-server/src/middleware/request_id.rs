//! Request ids and the per-request tracing span.
//!
//! Each request carries an `x-request-id` (the client's, or a fresh UUID),
//! which is echoed on the response and recorded on the span wrapping the
//! handler. Store and summarizer errors logged inside a handler therefore
//! name the request that hit them.

use axum::extract::Request;
use http::{HeaderName, HeaderValue};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tracing::Span;
use uuid::Uuid;

/// Header name for request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generates a UUID v4 id for requests that arrive without one.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoteRequestId;

impl MakeRequestId for NoteRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::try_from(Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Assigns an id to requests that lack one. Must wrap the trace layer.
pub fn set_request_id() -> SetRequestIdLayer<NoteRequestId> {
    SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), NoteRequestId)
}

/// Copies the request id onto the response.
pub fn propagate_request_id() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER))
}

/// Span for one request, used as the `TraceLayer` span maker.
pub fn request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    )
}
