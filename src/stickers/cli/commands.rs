//! Dispatch from parsed arguments to the API, and from `CmdResult` to the terminal.
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the loaded configuration
//! - `handle_*()`: Per-command handlers that call the API and print the outcome

use super::print::{print_config, print_messages, print_plan};
use super::prompt::{or_ask, BOXES_PROMPT, INVOICE_PROMPT};
use super::setup::{Cli, Commands};
use clap::Parser;
use log::LevelFilter;
use stickers::api::{ConfigAction, StickerApi};
use stickers::config::{StickerConfig, CONFIG_DIRNAME};
use stickers::error::{Result, StickerError};
use stickers::profile::SheetProfile;
use stickers::store::fs::FileStore;
use stickers::web::{server, WebApp};
use std::path::PathBuf;

/// Printed instead of an error when the box count is not a positive whole number.
/// The run still counts as a success and nothing is written.
pub(super) const INVALID_INPUT_MESSAGE: &str =
    "Invalid input. Please enter a valid number of boxes.";

struct AppContext {
    config_dir: PathBuf,
    config: StickerConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.is_serving());

    let ctx = init_context()?;

    match cli.command {
        None => handle_generate(&ctx, None, None, None),
        Some(Commands::Generate {
            invoice,
            boxes,
            output_dir,
        }) => handle_generate(&ctx, invoice, boxes, output_dir),
        Some(Commands::Plan { boxes }) => handle_plan(&ctx, &boxes),
        Some(Commands::Serve {
            address,
            static_dir,
            legacy_status,
        }) => handle_serve(&ctx, address, static_dir, legacy_status),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

/// `RUST_LOG` wins when set. Otherwise warnings only, debug with `--verbose`, and
/// request logging while serving.
fn init_logging(verbose: bool, serving: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            builder.filter_level(default_level(verbose, serving));
        }
    }
    let _ = builder.try_init();
}

fn default_level(verbose: bool, serving: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if serving {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

fn init_context() -> Result<AppContext> {
    let cwd = std::env::current_dir().map_err(StickerError::Io)?;
    let config_dir = cwd.join(CONFIG_DIRNAME);
    let config = StickerConfig::load(&config_dir)?;
    Ok(AppContext { config_dir, config })
}

fn console_api(ctx: &AppContext, output_dir: Option<PathBuf>) -> StickerApi<FileStore> {
    let root = output_dir.unwrap_or_else(|| ctx.config.output_dir.clone());
    StickerApi::new(
        FileStore::new(root),
        SheetProfile::console(),
        ctx.config_dir.clone(),
    )
}

fn handle_generate(
    ctx: &AppContext,
    invoice: Option<String>,
    boxes: Option<String>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let invoice = or_ask(invoice, INVOICE_PROMPT)?;
    let boxes = or_ask(boxes, BOXES_PROMPT)?;

    let mut api = console_api(ctx, output_dir);
    match api.generate(&invoice, &boxes) {
        Ok(result) => {
            print_messages(&result.messages);
            Ok(())
        }
        Err(e) if e.is_user_input() => {
            println!("{}", INVALID_INPUT_MESSAGE);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn handle_plan(ctx: &AppContext, boxes: &str) -> Result<()> {
    let api = console_api(ctx, None);
    match api.plan(boxes) {
        Ok(result) => {
            if let Some(plan) = &result.plan {
                print_plan(plan);
            }
            print_messages(&result.messages);
            Ok(())
        }
        Err(e) if e.is_user_input() => {
            println!("{}", INVALID_INPUT_MESSAGE);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn handle_serve(
    ctx: &AppContext,
    address: Option<String>,
    static_dir: Option<PathBuf>,
    legacy_status: bool,
) -> Result<()> {
    let address = address.unwrap_or_else(|| ctx.config.address.clone());
    let static_dir = static_dir.unwrap_or_else(|| ctx.config.static_dir.clone());

    let mut app = WebApp::with_static_dir(static_dir, ctx.config_dir.clone())?
        .with_legacy_status(legacy_status);
    server::serve(&mut app, &address)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = config_action(key, value);
    let show_all = matches!(action, ConfigAction::ShowAll);

    let api = console_api(ctx, None);
    let result = api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn config_action(key: Option<String>, value: Option<String>) -> ConfigAction {
    match (key, value) {
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
        (Some(k), None) => ConfigAction::ShowKey(k),
        (None, _) => ConfigAction::ShowAll,
    }
}
