use axum::{
  body::Body,
  extract::{MatchedPath, Request},
  middleware::Next,
  response::Response,
};
use metrics::counter;
use opentelemetry::global;
use opentelemetry_http::HeaderExtractor;
use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use uuid::Uuid;

pub(crate) mod json_rejection;
pub(crate) mod logging;

/// Identifier attached to every request and its response.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RequestId(pub Uuid);

pub(crate) async fn request_id(mut request: Request<Body>, next: Next) -> Response {
  let id = RequestId(Uuid::new_v4());

  request.extensions_mut().insert(id);

  let mut response = next.run(request).await;

  response.extensions_mut().insert(id);
  response
}

/// Count handled requests per route template and status code.
///
/// Requests that did not match any route are reported under `unmatched`.
pub(super) async fn metrics(request: Request<Body>, next: Next) -> Response {
  let route = match request.extensions().get::<MatchedPath>() {
    Some(path) => path.as_str().to_string(),
    None => "unmatched".to_string(),
  };

  let response = next.run(request).await;

  counter!("foodmatch_http_requests_total", "route" => route, "status" => response.status().as_u16().to_string()).increment(1);

  response
}

/// Open the span covering a request, continuing the caller's trace when a `traceparent` header is present.
pub(crate) fn create_request_span(request: &Request) -> Span {
  let parent = global::get_text_map_propagator(|propagator| propagator.extract(&HeaderExtractor(request.headers())));

  let span = match request.extensions().get::<RequestId>() {
    Some(RequestId(id)) => tracing::info_span!("request", request_id = %id, method = %request.method(), path = request.uri().path()),
    None => tracing::info_span!("request", method = %request.method(), path = request.uri().path()),
  };

  let _ = span.set_parent(parent);
  span
}
