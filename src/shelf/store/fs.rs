use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::{Record, Theme};
use std::fs;
use std::path::{Path, PathBuf};

const RECORDS_FILE: &str = "records.json";
const THEME_FILE: &str = "theme";
const CAP_FILE: &str = "cap";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }

    fn read_scalar(&self, file: &str) -> Result<Option<String>> {
        let path = self.root.join(file);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ShelfError::Io)?;
        Ok(Some(content.trim().to_string()))
    }

    fn write_scalar(&self, file: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.root.join(file), value).map_err(ShelfError::Io)
    }
}

impl DataStore for FileStore {
    fn load_records(&self) -> Result<Vec<Record>> {
        let path = self.root.join(RECORDS_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(ShelfError::Io)?;
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(records)
    }

    fn save_records(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(records).map_err(ShelfError::Serialization)?;
        fs::write(self.root.join(RECORDS_FILE), content).map_err(ShelfError::Io)
    }

    fn load_theme(&self) -> Result<Theme> {
        // Anything unrecognized counts as the default, like a missing key
        Ok(self
            .read_scalar(THEME_FILE)?
            .and_then(|s| s.parse().ok())
            .unwrap_or_default())
    }

    fn save_theme(&mut self, theme: Theme) -> Result<()> {
        self.write_scalar(THEME_FILE, theme.as_str())
    }

    fn load_cap(&self) -> Result<u32> {
        Ok(self
            .read_scalar(CAP_FILE)?
            .and_then(|s| s.parse().ok())
            .unwrap_or(0))
    }

    fn save_cap(&mut self, cap: u32) -> Result<()> {
        self.write_scalar(CAP_FILE, &cap.to_string())
    }
}
