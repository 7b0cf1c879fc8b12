//! # Storage Layer
//!
//! Finished sticker sheets are handed to a [`SheetStore`], which decides where the bytes
//! end up. Commands never open files themselves.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: writes `stickers_{invoice}.pdf` into a directory
//!   - the directory is created on first write
//!   - bytes go to a temporary sibling first and are renamed into place, so an
//!     interrupted write never leaves a truncated sheet under the final name
//!
//! - [`memory::InMemoryStore`]: keeps sheets in a map, for tests
//!
//! ## File Names
//!
//! The invoice label is free text. Before it becomes part of a file name it goes
//! through [`sanitize_invoice`], so labels like `../etc` or `A/B` cannot escape the
//! output directory.

use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for where generated sheets are kept.
pub trait SheetStore {
    /// Path the sheet for `invoice` is (or would be) stored at
    fn sheet_path(&self, invoice: &str) -> PathBuf;

    /// Store a finished sheet, replacing any previous one for the same invoice
    fn save_sheet(&mut self, invoice: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// File name for the sheet of `invoice`.
pub fn sheet_filename(invoice: &str) -> String {
    format!("stickers_{}.pdf", sanitize_invoice(invoice))
}

pub fn sanitize_invoice(invoice: &str) -> String {
    invoice
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}
