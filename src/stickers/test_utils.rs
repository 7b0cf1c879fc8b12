use crate::geometry::PageGeometry;
use crate::profile::{SheetProfile, TextStyle};
use crate::store::fs::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// 2 columns by 3 rows on a 100pt square page.
pub fn two_by_three() -> PageGeometry {
    PageGeometry {
        page_width: 100.0,
        page_height: 100.0,
        margin_left: 5.0,
        margin_right: 5.0,
        margin_top: 5.0,
        margin_bottom: 5.0,
        sticker_width: 40.0,
        sticker_height: 28.0,
        separation: 5.0,
        corner_radius: 2.0,
    }
}

pub fn small_profile() -> SheetProfile {
    SheetProfile::new(two_by_three(), TextStyle::console())
}

pub struct TestEnv {
    // Keeps the directory alive for the duration of the test
    pub _temp_dir: TempDir,
    pub store: FileStore,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let store = FileStore::new(root.join("out"));
        Self {
            _temp_dir: temp_dir,
            store,
            root,
        }
    }
}
