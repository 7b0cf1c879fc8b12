use super::{sheet_filename, SheetStore};
use crate::error::{Result, StickerError};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the output directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StickerError::Io)?;
        }
        Ok(())
    }
}

impl SheetStore for FileStore {
    fn sheet_path(&self, invoice: &str) -> PathBuf {
        self.root.join(sheet_filename(invoice))
    }

    fn save_sheet(&mut self, invoice: &str, bytes: &[u8]) -> Result<PathBuf> {
        self.ensure_dir()?;
        let path = self.sheet_path(invoice);
        let partial = path.with_extension("pdf.part");

        if let Err(e) = fs::write(&partial, bytes) {
            let _ = fs::remove_file(&partial);
            return Err(StickerError::Io(e));
        }
        fs::rename(&partial, &path).map_err(|e| {
            let _ = fs::remove_file(&partial);
            StickerError::Io(e)
        })?;

        debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;

    #[test]
    fn test_save_creates_directory() {
        let mut env = TestEnv::new();
        assert!(!env.store.root().exists());

        let path = env.store.save_sheet("INV-7", b"%PDF-1.7").unwrap();
        assert_eq!(path, env.root.join("out").join("stickers_INV-7.pdf"));
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.7");
    }

    #[test]
    fn test_save_replaces_previous_sheet() {
        let mut env = TestEnv::new();
        env.store.save_sheet("A", b"first").unwrap();
        let path = env.store.save_sheet("A", b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn test_no_partial_file_left_behind() {
        let mut env = TestEnv::new();
        env.store.save_sheet("A", b"data").unwrap();
        let names: Vec<String> = fs::read_dir(env.store.root())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["stickers_A.pdf".to_string()]);
    }

    #[test]
    fn test_hostile_invoice_stays_in_root() {
        let env = TestEnv::new();
        let path = env.store.sheet_path("../../escape");
        assert_eq!(path.parent().unwrap(), env.store.root());
    }
}
