//! # API Facade
//!
//! [`ShelfApi`] is the single entry point for every operation, regardless
//! of the UI driving it. It owns the in-memory [`Library`] and the durable
//! [`DataStore`]: records load once at open, and every mutating operation
//! writes the collection back through the store.
//!
//! Persistence is best-effort: a failed load starts an empty session, a
//! failed write is logged and the in-memory state stands. The worst case
//! is a lost mutation, never a crashed session.
//!
//! Generic over `DataStore` so tests run against `InMemoryStore` without
//! touching the filesystem.

use crate::commands;
use crate::error::{Result, ShelfError};
use crate::library::Library;
use crate::model::RecordDraft;
use crate::query::Filters;
use crate::store::DataStore;
use crate::validate::{self, FieldErrors};
use chrono::Local;
use std::path::{Path, PathBuf};

pub struct ShelfApi<S: DataStore> {
    store: S,
    library: Library,
}

impl<S: DataStore> ShelfApi<S> {
    /// Opens the tracker: loads the record collection from the store,
    /// falling back to an empty one when the substrate cannot be read.
    pub fn open(store: S) -> Self {
        let records = store.load_records().unwrap_or_else(|e| {
            tracing::warn!("could not load records, starting empty: {}", e);
            Vec::new()
        });
        Self {
            store,
            library: Library::from_records(records),
        }
    }

    /// Validation entry point for form data. The presentation layer calls
    /// this before add/update and renders the per-field messages.
    pub fn validate(&self, draft: &RecordDraft) -> FieldErrors {
        validate::validate_form(draft)
    }

    pub fn add_record(&mut self, draft: &RecordDraft) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.library, draft)?;
        self.flush();
        Ok(result)
    }

    pub fn update_record(
        &mut self,
        selector: &str,
        draft: &RecordDraft,
    ) -> Result<commands::CmdResult> {
        let id = self.resolve_selector(selector)?;
        let result = commands::update::run(&mut self.library, &id, draft)?;
        self.flush();
        Ok(result)
    }

    /// Deletes the records matching the given selectors. Selectors that
    /// resolve to nothing are reported, not errored; delete stays
    /// idempotent all the way up.
    pub fn delete_records<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let mut combined = commands::CmdResult::default();
        for selector in selectors {
            match self.resolve_selector(selector.as_ref()) {
                Ok(id) => {
                    let result = commands::delete::run(&mut self.library, &id)?;
                    combined.affected.extend(result.affected);
                    combined.messages.extend(result.messages);
                }
                Err(_) => combined.add_message(commands::CmdMessage::info(format!(
                    "No record matching '{}'.",
                    selector.as_ref()
                ))),
            }
        }
        self.flush();
        Ok(combined)
    }

    pub fn clear_records(&mut self, skip_confirm: bool) -> Result<commands::CmdResult> {
        let result = commands::clear::run(&mut self.library, skip_confirm)?;
        self.flush();
        Ok(result)
    }

    pub fn list_records(&self, filters: &Filters) -> Result<commands::CmdResult> {
        commands::list::run(&self.library, filters)
    }

    pub fn search_records(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.library, query)
    }

    pub fn tags(&self) -> Result<commands::CmdResult> {
        commands::tags::run(&self.library)
    }

    pub fn dashboard(&self) -> Result<commands::CmdResult> {
        let cap = self.store.load_cap().unwrap_or_else(|e| {
            tracing::warn!("could not load page cap, treating as disabled: {}", e);
            0
        });
        commands::stats::run(&self.library, cap, Local::now().date_naive())
    }

    pub fn export_records(&self, path: Option<PathBuf>) -> Result<commands::CmdResult> {
        commands::export::run(&self.library, path)
    }

    pub fn import_records(&mut self, path: &Path) -> Result<commands::CmdResult> {
        let result = commands::import::run(&mut self.library, path)?;
        self.flush();
        Ok(result)
    }

    pub fn config(&mut self, action: commands::config::ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&mut self.store, action)
    }

    // Write-through after a mutation. Failures are logged and otherwise
    // ignored; the in-memory state remains authoritative.
    fn flush(&mut self) {
        if let Err(e) = self.store.save_records(self.library.records()) {
            tracing::warn!("could not persist records: {}", e);
        }
    }

    // A selector is either a 1-based list position or a record id.
    fn resolve_selector(&self, input: &str) -> Result<String> {
        if let Ok(position) = input.parse::<usize>() {
            if position >= 1 {
                if let Some(record) = self.library.records().get(position - 1) {
                    return Ok(record.id.clone());
                }
            }
        }
        if self.library.get(input).is_some() {
            return Ok(input.to_string());
        }
        Err(ShelfError::RecordNotFound(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordKind;
    use crate::store::memory::InMemoryStore;

    fn draft(title: &str) -> RecordDraft {
        RecordDraft {
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn api_with(titles: &[&str]) -> ShelfApi<InMemoryStore> {
        let mut api = ShelfApi::open(InMemoryStore::new());
        for title in titles {
            api.add_record(&draft(title)).unwrap();
        }
        api
    }

    #[test]
    fn mutations_write_through_to_the_store() {
        let mut api = api_with(&["Dune"]);
        let reloaded = api.store.load_records().unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].title, "Dune");

        api.delete_records(&["1"]).unwrap();
        assert!(api.store.load_records().unwrap().is_empty());
    }

    #[test]
    fn selectors_resolve_by_position_or_id() {
        let mut api = api_with(&["First", "Second"]);
        let second_id = api.library.records()[1].id.clone();

        let by_position = api.update_record("2", &draft("Second v2")).unwrap();
        assert_eq!(by_position.affected[0].id, second_id);

        let by_id = api.update_record(&second_id, &draft("Second v3")).unwrap();
        assert_eq!(by_id.affected[0].id, second_id);
    }

    #[test]
    fn update_with_unknown_selector_errors() {
        let mut api = api_with(&["Only"]);
        assert!(matches!(
            api.update_record("9", &draft("Nope")),
            Err(ShelfError::RecordNotFound(_))
        ));
    }

    #[test]
    fn delete_with_unknown_selector_reports_and_continues() {
        let mut api = api_with(&["Keep"]);
        let result = api.delete_records(&["no-such-id"]).unwrap();
        assert!(result.affected.is_empty());
        assert_eq!(api.library.len(), 1);
        assert!(result.messages[0].content.contains("No record matching"));
    }

    #[test]
    fn list_and_search_read_the_live_collection() {
        let mut api = api_with(&[]);
        api.add_record(&RecordDraft {
            kind: RecordKind::Book,
            title: "Dune".into(),
            author: "Herbert".into(),
            tag: "scifi".into(),
            pages: "412".into(),
            ..Default::default()
        })
        .unwrap();

        let listed = api.list_records(&Filters::default()).unwrap();
        assert_eq!(listed.listed.len(), 1);

        let found = api.search_records("dune").unwrap();
        assert_eq!(found.listed.len(), 1);
    }

    #[test]
    fn validate_surfaces_field_errors() {
        let api = api_with(&[]);
        let errors = api.validate(&draft("The The Hobbit"));
        assert_eq!(errors.get("title"), Some(&crate::validate::TITLE_DUPLICATE_MSG));
    }
}
