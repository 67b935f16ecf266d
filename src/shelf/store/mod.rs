//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts the durable key-value substrate the
//! tracker persists into. Three logical keys exist:
//!
//! - the records blob (JSON array of records),
//! - the theme scalar,
//! - the page-cap scalar.
//!
//! A missing key yields its documented default: empty collection, light
//! theme, cap 0 (disabled). The substrate is fail-fast, no retries; the
//! caller decides what a failed read or write means (the API facade falls
//! back to defaults on read and logs-and-continues on write).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage under a data root
//!   - `records.json`: the records blob, pretty-printed
//!   - `theme` / `cap`: one scalar each, plain text
//! - [`memory::InMemoryStore`]: in-memory storage for tests

use crate::error::Result;
use crate::model::{Record, Theme};

pub mod fs;
pub mod memory;

/// Abstract interface to the durable substrate.
pub trait DataStore {
    /// Load the full record collection. Missing blob means empty.
    fn load_records(&self) -> Result<Vec<Record>>;

    /// Persist the full record collection.
    fn save_records(&mut self, records: &[Record]) -> Result<()>;

    /// Load the theme setting. Missing or unrecognized values fall back
    /// to the default theme.
    fn load_theme(&self) -> Result<Theme>;

    fn save_theme(&mut self, theme: Theme) -> Result<()>;

    /// Load the page cap. Missing or non-numeric values fall back to 0
    /// (cap disabled).
    fn load_cap(&self) -> Result<u32>;

    fn save_cap(&mut self, cap: u32) -> Result<()>;
}
