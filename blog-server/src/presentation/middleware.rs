use std::time::Instant;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::middleware::Next;
use actix_web::{Error, HttpMessage};
use tracing::info;
use uuid::Uuid;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");
const SERVER_TIMING_HEADER: HeaderName = HeaderName::from_static("server-timing");

/// Correlation id of the current request, stored in request extensions.
#[derive(Clone)]
pub struct RequestId(pub String);

/// Tags the request with an id (echoed from `x-request-id` or freshly
/// generated), logs its outcome and reports the handling time in
/// `server-timing`. Mounted with `actix_web::middleware::from_fn`.
pub async fn trace_request(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let start = Instant::now();
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let method = req.method().clone();
    let path = req.path().to_owned();

    req.extensions_mut().insert(RequestId(request_id.clone()));

    let mut res = next.call(req).await?;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status = res.status().as_u16(),
        duration_ms = elapsed_ms,
        "request completed"
    );

    let headers = res.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }
    if let Ok(value) = HeaderValue::from_str(&format!("app;dur={elapsed_ms}")) {
        headers.insert(SERVER_TIMING_HEADER, value);
    }

    Ok(res)
}
