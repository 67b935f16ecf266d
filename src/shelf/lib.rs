//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic library tracker**. The crate is a library that
//! happens to ship a CLI client, not the other way round, and that
//! distinction drives the layering:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs, binary only)                 │
//! │  - Parses arguments, renders output, owns prompts           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Library + DataStore pair                        │
//! │  - Loads on open, writes through after every mutation       │
//! │  - Resolves selectors (list position or record id)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, pure business logic            │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (library.rs, validate.rs, query.rs, stats.rs)         │
//! │  + Storage (store/: DataStore trait, FileStore, InMemory)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` values, and never touches stdout or `std::process::exit`. The
//! same core could back a TUI or a web UI unchanged.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`library`]: the in-memory record store (single source of truth)
//! - [`validate`]: pure form validation (title/pages/tag rules)
//! - [`query`]: search, filtering and tag aggregation
//! - [`stats`]: totals, top tag, 7-day trend, page-cap status
//! - [`store`]: the durable substrate behind a `DataStore` trait
//! - [`model`]: core data types (`Record`, `RecordDraft`, `Theme`)
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod error;
pub mod library;
pub mod model;
pub mod query;
pub mod stats;
pub mod store;
pub mod validate;
