//! `tiny_http` server adapter
//!
//! Handles routing, body reading, and response conversion for the relay.

use std::io::{Cursor, Read as _};

use serde::Serialize;
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::api::{self, ApiResponse, LIVENESS_BODY, RelayError};
use crate::logging::Diagnostics;

/// Path the relay listens on, with or without a trailing slash
pub const RELAY_PATH: &str = "/chatter";

const EVENT_HEADER: &str = "X-GitHub-Event";

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Bind `addr` and relay inbound events until the process is stopped
pub fn serve(addr: &str, diagnostics: &Diagnostics) -> anyhow::Result<()> {
    let server = Server::http(addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;
    diagnostics.info(format_args!("Relay listening on http://{addr}{RELAY_PATH}/"));

    for mut request in server.incoming_requests() {
        let reply = handle_request(&mut request, diagnostics);
        if let Err(e) = request.respond(reply.into_response()) {
            diagnostics.warn(format_args!("Couldn't send response: {e}"));
        }
    }

    Ok(())
}

fn handle_request(request: &mut Request, diagnostics: &Diagnostics) -> Reply {
    let method = request.method().clone();
    let path = request.url().to_string();
    let event_type = request
        .headers()
        .iter()
        .find(|h| h.field.equiv(EVENT_HEADER))
        .map(|h| h.value.as_str().to_string());

    let body = if method == Method::Post {
        match read_body(request) {
            Ok(body) => body,
            Err(e) => return Reply::error(&e),
        }
    } else {
        String::new()
    };

    dispatch(&method, &path, event_type.as_deref(), &body, diagnostics)
}

fn read_body(request: &mut Request) -> Result<String, RelayError> {
    let mut body = String::new();
    request.as_reader().read_to_string(&mut body)?;
    Ok(body)
}

// =============================================================================
// ROUTING
// =============================================================================

/// Route one request to its handler
///
/// Query strings are ignored when matching the path.
#[must_use]
pub fn dispatch(
    method: &Method,
    path: &str,
    event_type: Option<&str>,
    body: &str,
    diagnostics: &Diagnostics,
) -> Reply {
    let route = path.split('?').next().unwrap_or(path);
    let on_relay = route.strip_suffix('/').unwrap_or(route) == RELAY_PATH;

    match method {
        Method::Get if on_relay => Reply::text(LIVENESS_BODY),
        Method::Post if on_relay => match api::relay_event(body, event_type, diagnostics) {
            Ok(ack) => Reply::json(&ApiResponse::success(ack), 200),
            Err(e) => {
                diagnostics.warn(format_args!("Rejected event: {e}"));
                Reply::error(&e)
            },
        },
        _ => Reply::error(&RelayError::UnknownRoute {
            method: method.to_string(),
            path: route.to_string(),
        }),
    }
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Framework-independent response produced by [`dispatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status code
    pub status: u16,
    /// `Content-Type` header value
    pub content_type: &'static str,
    /// Response body
    pub body: String,
}

impl Reply {
    fn text(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "text/plain; charset=utf-8",
            body: body.to_string(),
        }
    }

    fn json<T: Serialize>(data: &T, status: u16) -> Self {
        let body =
            serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
        Self {
            status,
            content_type: "application/json",
            body,
        }
    }

    fn error(error: &RelayError) -> Self {
        Self::json(&ApiResponse::<()>::error(error), error.status_code())
    }

    fn into_response(self) -> Response<Cursor<Vec<u8>>> {
        let response =
            Response::from_data(self.body.into_bytes()).with_status_code(StatusCode(self.status));
        match Header::from_bytes("Content-Type", self.content_type) {
            Ok(header) => response.with_header(header),
            Err(()) => response,
        }
    }
}
