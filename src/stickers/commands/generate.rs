use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::layout::render_job;
use crate::model::{SheetSummary, StickerJob};
use crate::profile::SheetProfile;
use crate::render::pdf::PdfCanvas;
use crate::store::SheetStore;
use chrono::Utc;
use log::info;

/// Renders the sheet for `job` and hands it to `store`.
///
/// The whole document is built in memory first; the store only sees finished bytes,
/// so a failure while rendering never leaves a file behind.
pub fn run<S: SheetStore>(
    store: &mut S,
    profile: &SheetProfile,
    job: &StickerJob,
) -> Result<CmdResult> {
    let (summary, bytes) = render_document(profile, job)?;

    let path = store.save_sheet(&job.invoice, &bytes)?;
    info!(
        "saved {} stickers on {} page(s) to {}",
        summary.stickers,
        summary.pages,
        path.display()
    );

    let mut result = CmdResult::default()
        .with_summary(summary)
        .with_output(path.clone(), bytes);
    result.add_message(CmdMessage::success(format!(
        "Stickers have been saved to {}",
        path.display()
    )));
    Ok(result)
}

fn render_document(profile: &SheetProfile, job: &StickerJob) -> Result<(SheetSummary, Vec<u8>)> {
    let geometry = &profile.geometry;
    let mut canvas = PdfCanvas::new(geometry.page_width, geometry.page_height)
        .with_title(format!("Box stickers for invoice {}", job.invoice))
        .with_creation_date(Utc::now());
    let summary = render_job(&mut canvas, profile, job)?;
    let bytes = canvas.finish()?;
    Ok((summary, bytes))
}
