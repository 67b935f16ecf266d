use super::DataStore;
use crate::error::Result;
use crate::model::{Record, Theme};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
    theme: Theme,
    cap: u32,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_records(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn save_records(&mut self, records: &[Record]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }

    fn load_theme(&self) -> Result<Theme> {
        Ok(self.theme)
    }

    fn save_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        Ok(())
    }

    fn load_cap(&self) -> Result<u32> {
        Ok(self.cap)
    }

    fn save_cap(&mut self, cap: u32) -> Result<()> {
        self.cap = cap;
        Ok(())
    }
}
