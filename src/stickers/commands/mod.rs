use crate::config::StickerConfig;
use crate::geometry::LayoutGrid;
use crate::model::SheetSummary;
use std::path::PathBuf;

pub mod config;
pub mod generate;
pub mod plan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Layout figures for a box count, without rendering anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPlan {
    pub total_boxes: u32,
    pub grid: LayoutGrid,
    pub pages: u32,
    /// Stickers on the final page
    pub last_page_fill: u32,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub summary: Option<SheetSummary>,
    pub plan: Option<SheetPlan>,
    pub output_path: Option<PathBuf>,
    pub document: Option<Vec<u8>>,
    pub config: Option<StickerConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_summary(mut self, summary: SheetSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_plan(mut self, plan: SheetPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn with_output(mut self, path: PathBuf, document: Vec<u8>) -> Self {
        self.output_path = Some(path);
        self.document = Some(document);
        self
    }

    pub fn with_config(mut self, config: StickerConfig) -> Self {
        self.config = Some(config);
        self
    }
}
