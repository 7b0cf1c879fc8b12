use colored::Colorize;
use stickers::api::{CmdMessage, MessageLevel, SheetPlan};
use stickers::config::{StickerConfig, KEYS};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_plan(plan: &SheetPlan) {
    for (label, value) in plan_rows(plan) {
        println!("{:<22}{}", label, value.to_string().bold());
    }
}

fn plan_rows(plan: &SheetPlan) -> [(String, u32); 5] {
    [
        ("Stickers per row:".to_string(), plan.grid.per_row),
        ("Stickers per column:".to_string(), plan.grid.per_col),
        ("Stickers per page:".to_string(), plan.grid.per_page()),
        (format!("Pages for {} boxes:", plan.total_boxes), plan.pages),
        ("On the last page:".to_string(), plan.last_page_fill),
    ]
}

pub(super) fn print_config(config: &StickerConfig) {
    for key in KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}
