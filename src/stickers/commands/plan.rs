use crate::commands::{CmdMessage, CmdResult, SheetPlan};
use crate::error::{Result, StickerError};
use crate::profile::SheetProfile;

/// Works out how `total_boxes` stickers spread over pages, without rendering.
pub fn run(profile: &SheetProfile, total_boxes: u32) -> Result<CmdResult> {
    if total_boxes == 0 {
        return Err(StickerError::InvalidBoxCount(total_boxes.to_string()));
    }
    profile.geometry.validate()?;
    let grid = profile.geometry.grid();
    let pages = grid.pages_for(total_boxes).ok_or_else(|| {
        StickerError::DegenerateGeometry("no sticker fits on the page".to_string())
    })?;

    let per_page = grid.per_page();
    let last_page_fill = total_boxes - (pages - 1) * per_page;

    let mut result = CmdResult::default().with_plan(SheetPlan {
        total_boxes,
        grid,
        pages,
        last_page_fill,
    });
    if last_page_fill < per_page {
        result.add_message(CmdMessage::info(format!(
            "{} blank cell(s) on the last page",
            per_page - last_page_fill
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::small_profile;

    #[test]
    fn test_plan_default_sheet() {
        let result = run(&SheetProfile::console(), 30).unwrap();
        let plan = result.plan.unwrap();
        assert_eq!(plan.grid.per_page(), 24);
        assert_eq!(plan.pages, 2);
        assert_eq!(plan.last_page_fill, 6);
        assert_eq!(result.messages[0].content, "18 blank cell(s) on the last page");
    }

    #[test]
    fn test_plan_exact_fill_has_no_message() {
        let result = run(&small_profile(), 12).unwrap();
        let plan = result.plan.unwrap();
        assert_eq!(plan.pages, 2);
        assert_eq!(plan.last_page_fill, 6);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_plan_rejects_zero() {
        assert!(run(&small_profile(), 0).unwrap_err().is_user_input());
    }

    #[test]
    fn test_plan_rejects_zero_capacity() {
        let mut profile = small_profile();
        profile.geometry.margin_left = 200.0;
        assert!(matches!(
            run(&profile, 3),
            Err(StickerError::DegenerateGeometry(_))
        ));
    }
}
