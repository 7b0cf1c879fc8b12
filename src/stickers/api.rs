//! # API Facade
//!
//! The single entry point for sticker operations, whichever front end is asking.
//!
//! The facade:
//! - **Dispatches** to the command functions in `commands/*.rs`
//! - **Normalizes inputs** (raw box-count text becomes a validated [`StickerJob`])
//! - **Returns structured types** (`Result<CmdResult>`), never formatted output
//!
//! ## One Engine per Front End
//!
//! A `StickerApi` owns the [`SheetProfile`] it renders with. The console and the web
//! form each build their own instance with their own text style; the page geometry
//! is the same value in both, so the two can no longer drift apart.
//!
//! ## Generic Over SheetStore
//!
//! - Production: `StickerApi<FileStore>`
//! - Testing: `StickerApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::StickerJob;
use crate::profile::SheetProfile;
use crate::store::SheetStore;
use std::path::{Path, PathBuf};

pub struct StickerApi<S: SheetStore> {
    store: S,
    profile: SheetProfile,
    config_dir: PathBuf,
}

impl<S: SheetStore> StickerApi<S> {
    pub fn new(store: S, profile: SheetProfile, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            profile,
            config_dir: config_dir.into(),
        }
    }

    /// Generate the sheet for an invoice from the raw box-count text a user typed.
    pub fn generate(&mut self, invoice: &str, boxes: &str) -> Result<commands::CmdResult> {
        let job = StickerJob::parse(invoice, boxes)?;
        self.generate_job(&job)
    }

    pub fn generate_job(&mut self, job: &StickerJob) -> Result<commands::CmdResult> {
        commands::generate::run(&mut self.store, &self.profile, job)
    }

    pub fn plan(&self, boxes: &str) -> Result<commands::CmdResult> {
        let total = crate::model::parse_box_count(boxes)?;
        commands::plan::run(&self.profile, total)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn profile(&self) -> &SheetProfile {
        &self.profile
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, SheetPlan};
