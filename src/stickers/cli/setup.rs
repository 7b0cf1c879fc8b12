use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stickers", version)]
#[command(about = "Printable box sticker sheets for an invoice", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a sticker sheet (prompts for anything not given)
    #[command(alias = "g")]
    Generate {
        /// Invoice number printed on every sticker
        #[arg(short, long)]
        invoice: Option<String>,

        /// Total number of boxes
        #[arg(short, long)]
        boxes: Option<String>,

        /// Directory to write the PDF to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Show how many pages a box count needs
    Plan {
        /// Total number of boxes
        boxes: String,
    },

    /// Serve the web form
    Serve {
        /// Address to listen on (e.g. 127.0.0.1:5000)
        #[arg(short, long)]
        address: Option<String>,

        /// Directory generated sheets are written to
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Answer invalid box counts with 200 instead of 400
        #[arg(long)]
        legacy_status: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (output-dir, static-dir, address)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

impl Cli {
    pub fn is_serving(&self) -> bool {
        matches!(self.command, Some(Commands::Serve { .. }))
    }
}
