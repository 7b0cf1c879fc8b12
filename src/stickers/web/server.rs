use super::{Method, WebApp, WebRequest, WebResponse};
use crate::error::{Result, StickerError};
use crate::store::SheetStore;
use log::{info, warn};
use std::io::{self, Cursor, Read};
use tiny_http::{Header, Request, Response, Server, StatusCode};

/// Form posts are a few dozen bytes; anything larger is refused with 413.
const MAX_BODY_BYTES: u64 = 64 * 1024;

#[derive(Debug)]
enum BodyError {
    TooLarge,
    Io(io::Error),
}

/// Serves `app` on `address` until the process is stopped.
///
/// Requests are handled one at a time, in arrival order.
pub fn serve<S: SheetStore>(app: &mut WebApp<S>, address: &str) -> Result<()> {
    let server = Server::http(address).map_err(|e| StickerError::Server(e.to_string()))?;
    info!("listening on http://{}", address);

    for mut request in server.incoming_requests() {
        let web_request = match read_request(&mut request) {
            Ok(r) => r,
            Err(BodyError::TooLarge) => {
                warn!("request body over {} bytes refused", MAX_BODY_BYTES);
                let _ = request.respond(into_response(WebResponse::text(
                    413,
                    "Payload Too Large",
                )));
                continue;
            }
            Err(BodyError::Io(e)) => {
                warn!("could not read request body: {}", e);
                let _ = request.respond(into_response(WebResponse::text(400, "Bad Request")));
                continue;
            }
        };

        let response = app.handle(&web_request);
        info!(
            "{} {} -> {}",
            request.method(),
            request.url(),
            response.status
        );
        if let Err(e) = request.respond(into_response(response)) {
            warn!("could not send response: {}", e);
        }
    }
    Ok(())
}

fn read_request(request: &mut Request) -> std::result::Result<WebRequest, BodyError> {
    let method = match request.method() {
        tiny_http::Method::Get => Method::Get,
        tiny_http::Method::Post => Method::Post,
        _ => Method::Other,
    };
    let body = read_body(request.as_reader())?;
    Ok(WebRequest {
        method,
        path: request.url().to_string(),
        body,
    })
}

/// Reads at most one byte past the limit, enough to tell an oversized body apart.
fn read_body<R: Read>(reader: R) -> std::result::Result<Vec<u8>, BodyError> {
    let mut body = Vec::new();
    reader
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(BodyError::Io)?;
    if body.len() as u64 > MAX_BODY_BYTES {
        return Err(BodyError::TooLarge);
    }
    Ok(body)
}

fn into_response(response: WebResponse) -> Response<Cursor<Vec<u8>>> {
    let mut out = Response::from_data(response.body).with_status_code(StatusCode(response.status));
    for (name, value) in &response.headers {
        match Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            Ok(header) => out.add_header(header),
            Err(()) => warn!("dropping invalid header {}: {}", name, value),
        }
    }
    out
}
