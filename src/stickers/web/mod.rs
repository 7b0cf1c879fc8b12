//! # Web Front End
//!
//! A second UI client next to the CLI: one page with a form, one endpoint that turns
//! the submitted form into a sticker sheet.
//!
//! | Method | Path        | Result                                              |
//! |--------|-------------|-----------------------------------------------------|
//! | GET    | `/`         | HTML form with `invoice` and `boxes` fields         |
//! | POST   | `/generate` | the PDF as an attachment, also kept in `static_dir` |
//!
//! Routing and response building live in [`WebApp::handle`], which works on plain
//! [`WebRequest`]/[`WebResponse`] values. [`server`] is the only part that knows about
//! sockets.
//!
//! Bodies over 64 KiB are refused with `413 Payload Too Large` before parsing.
//! An invalid box count answers `400 Bad Request` with a plain-text message.
//! `legacy_status` sends the same message with `200 OK` for older clients that only
//! read the body.

use crate::api::StickerApi;
use crate::error::{Result, StickerError};
use crate::profile::SheetProfile;
use crate::store::fs::FileStore;
use crate::store::{sheet_filename, SheetStore};
use log::{error, warn};
use minijinja::{context, Environment};
use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use std::path::PathBuf;

pub mod server;

pub const INVALID_BOXES_MESSAGE: &str = "Invalid number of boxes. Please enter a valid integer.";
const FORM_TEMPLATE: &str = "index.html";
const PAGE_TITLE: &str = "Box Sticker Generator";

/// RFC 5987 `attr-char`s that pass through unescaped in `filename*`.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_');

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    if let Err(e) = env.add_template(FORM_TEMPLATE, include_str!("templates/index.html")) {
        error!("form template failed to load: {}", e);
    }
    env
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Other,
}

#[derive(Debug, Clone)]
pub struct WebRequest {
    pub method: Method,
    pub path: String,
    pub body: Vec<u8>,
}

impl WebRequest {
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_string(),
            body: Vec::new(),
        }
    }

    pub fn post(path: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            method: Method::Post,
            path: path.to_string(),
            body: body.into(),
        }
    }

    /// Path without the query string.
    fn route(&self) -> &str {
        self.path.split('?').next().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl WebResponse {
    fn new(status: u16, content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".to_string(), content_type.to_string())],
            body: body.into(),
        }
    }

    fn text(status: u16, body: impl Into<String>) -> Self {
        Self::new(status, "text/plain; charset=utf-8", body.into())
    }

    fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct GenerateForm {
    invoice: Option<String>,
    boxes: Option<String>,
}

pub struct WebApp<S: SheetStore> {
    api: StickerApi<S>,
    legacy_status: bool,
}

impl WebApp<FileStore> {
    /// Production app writing sheets into `static_dir`, which is created if missing.
    pub fn with_static_dir(
        static_dir: impl Into<PathBuf>,
        config_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        let store = FileStore::new(static_dir);
        store.ensure_dir()?;
        Ok(Self::new(StickerApi::new(
            store,
            SheetProfile::web(),
            config_dir,
        )))
    }
}

impl<S: SheetStore> WebApp<S> {
    pub fn new(api: StickerApi<S>) -> Self {
        Self {
            api,
            legacy_status: false,
        }
    }

    /// Answer invalid box counts with `200 OK` instead of `400 Bad Request`.
    pub fn with_legacy_status(mut self, legacy_status: bool) -> Self {
        self.legacy_status = legacy_status;
        self
    }

    pub fn api(&self) -> &StickerApi<S> {
        &self.api
    }

    pub fn handle(&mut self, request: &WebRequest) -> WebResponse {
        match (request.method, request.route()) {
            (Method::Get, "/") => self.form(),
            (Method::Post, "/generate") => self.generate(&request.body),
            (_, "/") | (_, "/generate") => {
                WebResponse::text(405, "Method Not Allowed")
            }
            _ => WebResponse::text(404, "Not Found"),
        }
    }

    fn form(&self) -> WebResponse {
        let per_page = self.api.profile().geometry.grid().per_page();
        match render_form(per_page) {
            Ok(html) => WebResponse::new(200, "text/html; charset=utf-8", html),
            Err(e) => {
                error!("{}", e);
                WebResponse::text(500, "Internal Server Error")
            }
        }
    }

    fn generate(&mut self, body: &[u8]) -> WebResponse {
        let form: GenerateForm = match serde_urlencoded::from_bytes(body) {
            Ok(form) => form,
            Err(e) => {
                warn!("malformed form body: {}", e);
                return WebResponse::text(400, "Malformed form data.");
            }
        };
        let invoice = form.invoice.unwrap_or_default();
        let boxes = form.boxes.unwrap_or_default();

        match self.api.generate(&invoice, &boxes) {
            Ok(result) => {
                let label = result
                    .summary
                    .as_ref()
                    .map_or(invoice.as_str(), |summary| summary.invoice.as_str());
                let disposition = content_disposition(label);
                let document = result.document.unwrap_or_default();
                WebResponse::new(200, "application/pdf", document)
                    .with_header("Content-Disposition", disposition)
            }
            Err(StickerError::InvalidBoxCount(raw)) => {
                warn!("rejected box count {:?} for invoice {:?}", raw, invoice);
                let status = if self.legacy_status { 200 } else { 400 };
                WebResponse::text(status, INVALID_BOXES_MESSAGE)
            }
            Err(e) => {
                error!("generating stickers for {:?} failed: {}", invoice, e);
                WebResponse::text(500, "Could not generate stickers.")
            }
        }
    }
}

/// Header values must be ASCII, so labels with other characters get an ASCII
/// `filename` plus the exact name in a percent-encoded `filename*`.
fn content_disposition(invoice: &str) -> String {
    let filename = sheet_filename(invoice);
    let fallback: String = filename
        .chars()
        .map(|c| if c.is_ascii() { c } else { '_' })
        .collect();
    if fallback == filename {
        return format!("attachment; filename=\"{}\"", filename);
    }
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        utf8_percent_encode(&filename, ATTR_CHAR)
    )
}

fn render_form(per_page: u32) -> Result<String> {
    TEMPLATES
        .get_template(FORM_TEMPLATE)
        .and_then(|template| template.render(context! { title => PAGE_TITLE, per_page => per_page }))
        .map_err(|e| StickerError::Server(format!("rendering form: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::TestEnv;

    fn app() -> WebApp<InMemoryStore> {
        WebApp::new(StickerApi::new(
            InMemoryStore::new(),
            SheetProfile::web(),
            ".stickers",
        ))
    }

    #[test]
    fn test_form_page() {
        let response = app().handle(&WebRequest::get("/"));
        assert_eq!(response.status, 200);
        assert_eq!(response.header("content-type"), Some("text/html; charset=utf-8"));
        let html = String::from_utf8(response.body).unwrap();
        assert!(html.contains("name=\"invoice\""));
        assert!(html.contains("name=\"boxes\""));
        assert!(html.contains("action=\"/generate\""));
        assert!(html.contains("24 stickers fit"));
    }

    #[test]
    fn test_generate_returns_attachment() {
        let mut app = app();
        let response = app.handle(&WebRequest::post("/generate", "invoice=INV-9&boxes=30"));
        assert_eq!(response.status, 200);
        assert_eq!(response.header("Content-Type"), Some("application/pdf"));
        assert_eq!(
            response.header("Content-Disposition"),
            Some("attachment; filename=\"stickers_INV-9.pdf\"")
        );
        assert!(response.body.starts_with(b"%PDF-"));
        assert_eq!(app.api().store().get("INV-9"), Some(response.body.as_slice()));
    }

    #[test]
    fn test_form_encoding_is_decoded() {
        let mut app = app();
        let response = app.handle(&WebRequest::post("/generate", "invoice=A+B%2F1&boxes=%202"));
        assert_eq!(response.status, 200);
        assert!(app.api().store().get("A B/1").is_some());
    }

    #[test]
    fn test_invoice_is_trimmed() {
        let mut app = app();
        let response = app.handle(&WebRequest::post("/generate", "invoice=++INV-3+&boxes=2"));
        assert_eq!(response.status, 200);
        assert_eq!(
            response.header("Content-Disposition"),
            Some("attachment; filename=\"stickers_INV-3.pdf\"")
        );
        assert!(app.api().store().get("INV-3").is_some());
    }

    #[test]
    fn test_non_ascii_invoice_disposition() {
        let mut app = app();
        let response = app.handle(&WebRequest::post("/generate", "invoice=Caf%C3%A9&boxes=2"));
        assert_eq!(response.status, 200);
        let disposition = response.header("Content-Disposition").unwrap();
        assert!(disposition.is_ascii());
        assert_eq!(
            disposition,
            "attachment; filename=\"stickers_Caf_.pdf\"; filename*=UTF-8''stickers_Caf%C3%A9.pdf"
        );
    }

    #[test]
    fn test_invalid_boxes_is_bad_request() {
        let mut app = app();
        for body in ["invoice=X&boxes=abc", "invoice=X&boxes=0", "invoice=X"] {
            let response = app.handle(&WebRequest::post("/generate", body));
            assert_eq!(response.status, 400);
            assert_eq!(response.body, INVALID_BOXES_MESSAGE.as_bytes());
        }
        assert!(app.api().store().is_empty());
    }

    #[test]
    fn test_legacy_status() {
        let mut app = app().with_legacy_status(true);
        let response = app.handle(&WebRequest::post("/generate", "invoice=X&boxes=-3"));
        assert_eq!(response.status, 200);
        assert_eq!(response.header("Content-Type"), Some("text/plain; charset=utf-8"));
        assert_eq!(response.body, INVALID_BOXES_MESSAGE.as_bytes());
    }

    #[test]
    fn test_routing() {
        let mut app = app();
        assert_eq!(app.handle(&WebRequest::get("/missing")).status, 404);
        assert_eq!(app.handle(&WebRequest::get("/generate")).status, 405);
        assert_eq!(app.handle(&WebRequest::post("/", "")).status, 405);
        assert_eq!(app.handle(&WebRequest::get("/?ref=mail")).status, 200);
    }

    #[test]
    fn test_static_dir_created_on_startup() {
        let env = TestEnv::new();
        let static_dir = env.root.join("static");
        let mut app = WebApp::with_static_dir(&static_dir, env.root.join(".stickers")).unwrap();
        assert!(static_dir.is_dir());

        let response = app.handle(&WebRequest::post("/generate", "invoice=77&boxes=1"));
        assert_eq!(response.status, 200);
        assert!(static_dir.join("stickers_77.pdf").is_file());
    }
}
