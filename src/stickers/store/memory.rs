use super::{sheet_filename, SheetStore};
use crate::error::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// Sheets kept in memory, keyed by file name.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    sheets: HashMap<String, Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, invoice: &str) -> Option<&[u8]> {
        self.sheets.get(&sheet_filename(invoice)).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl SheetStore for InMemoryStore {
    fn sheet_path(&self, invoice: &str) -> PathBuf {
        PathBuf::from(sheet_filename(invoice))
    }

    fn save_sheet(&mut self, invoice: &str, bytes: &[u8]) -> Result<PathBuf> {
        self.sheets.insert(sheet_filename(invoice), bytes.to_vec());
        Ok(self.sheet_path(invoice))
    }
}
