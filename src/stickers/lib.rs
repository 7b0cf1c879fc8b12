//! # Stickers Architecture
//!
//! Stickers prints box labels for an invoice: one sticker per box, reading
//! `Invoice: {label}` and `Box {n} of {total}`, tiled across as many A4 pages as needed.
//! The library does the work; the console and the web form are two thin clients of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front Ends (cli/ in the binary, web/)                      │
//! │  - Prompts, flags, HTTP forms, exit codes, status codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Validates raw input into a StickerJob                    │
//! │  - Dispatches to commands, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - generate, plan, config                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┴───────────────┐
//!              ▼                               ▼
//! ┌────────────────────────────┐  ┌────────────────────────────┐
//! │  Layout Engine (layout.rs) │  │  Storage (store/)          │
//! │  - grid, pagination        │  │  - SheetStore trait        │
//! │  - draws onto a Canvas     │  │  - FileStore, InMemory     │
//! └────────────────────────────┘  └────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never prints, never exits, and never opens a file on its
//! own. Documents are rendered to memory by [`render::pdf::PdfCanvas`] and handed to a
//! [`store::SheetStore`] only once complete, so an invalid request or a render failure
//! leaves nothing on disk.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`layout`]: The sticker layout engine
//! - [`geometry`]: Page and sticker measurements, grid capacity
//! - [`profile`]: Geometry plus text style, one per front end
//! - [`model`]: Jobs, placed stickers, the render cursor
//! - [`render`]: Canvas trait, PDF and recording backends, font metrics
//! - [`store`]: Where finished sheets go
//! - [`config`]: Configuration management
//! - [`web`]: HTTP form front end
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod profile;
pub mod render;
pub mod store;
pub mod web;

#[cfg(test)]
pub(crate) mod test_utils;
