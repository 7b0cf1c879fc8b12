//! # CLI Layer
//!
//! One of the two UI clients for stickers. This is the only place that knows about
//! stdin/stdout, exit codes, and process-wide logging setup.
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: `run()`, context wiring, one `handle_*` per subcommand
//! - `prompt.rs`: interactive questions on stdin
//! - `print.rs`: terminal output for `CmdResult` values
//!
//! ## Naked Execution
//!
//! `stickers` with no subcommand behaves like `stickers generate`: it asks for the
//! invoice number and the box count, then writes `stickers_{invoice}.pdf`.

mod commands;
mod print;
mod prompt;
mod setup;

pub use commands::run;
