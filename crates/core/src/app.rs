//! Prompt library application state
//!
//! [`App`] owns the collection, the store, the form and the active filter,
//! plus the host [`Ui`]. Every operation runs to completion: mutate, persist,
//! re-render through the active filter, notify.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::config::Config;
use crate::errors::{ImportError, PromptError, Result};
use crate::filter::Query;
use crate::form::{self, FormController, FormFields, FormMode};
use crate::library::Library;
use crate::notify::Toast;
use crate::prompt::Prompt;
use crate::render::{render, View};
use crate::store::{FileStore, PromptStore};
use crate::transfer::{self, ImportBatch};
use crate::ui::Ui;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this prompt?";

/// What a submit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(String),
    Updated(String),
    /// Validation failed; the form stays open
    Rejected,
    /// Nothing was saved and the form is closed
    Aborted,
}

pub struct App {
    library:    Library,
    store:      PromptStore,
    form:       FormController,
    query:      Query,
    export_dir: PathBuf,
    ui:         Box<dyn Ui>,
}

impl App {
    /// Load the collection (seeding samples if needed) and start with the
    /// form closed and no filter
    pub fn bootstrap(mut store: PromptStore, mut ui: Box<dyn Ui>) -> Self {
        let prompts = store.load(ui.as_mut());
        info!(count = prompts.len(), key = store.key(), "Prompt library loaded");

        Self {
            library: Library::new(prompts),
            store,
            form: FormController::new(),
            query: Query::default(),
            export_dir: Config::default().export_dir(),
            ui,
        }
    }

    /// File-backed app in the configured data directory
    pub fn from_config(config: &Config, ui: Box<dyn Ui>) -> Result<Self> {
        let store = PromptStore::new(
            Box::new(FileStore::new(config.data_dir()?)),
            config.storage_key(),
        );
        Ok(Self::bootstrap(store, ui).with_export_dir(config.export_dir()))
    }

    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    pub fn prompts(&self) -> &[Prompt] {
        self.library.prompts()
    }

    pub fn find(&self, id: &str) -> Option<&Prompt> {
        self.library.find(id)
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The list as currently filtered
    pub fn view(&self) -> View {
        let visible = self.query.apply(self.library.prompts());
        render(Some(visible.as_slice()))
    }

    fn persist(&mut self) -> bool {
        self.store.save(self.library.prompts(), self.ui.as_mut())
    }

    fn notify(&mut self, toast: Toast) {
        self.ui.notify(toast);
    }

    // ========================================
    // Filter
    // ========================================

    pub fn set_query(&mut self, query: Query) -> View {
        debug!(search = %query.search, category = %query.category, "Filter changed");
        self.query = query;
        self.view()
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> View {
        let query = Query {
            search: search.into(),
            ..self.query.clone()
        };
        self.set_query(query)
    }

    pub fn set_category(&mut self, category: impl Into<String>) -> View {
        let query = Query {
            category: category.into(),
            ..self.query.clone()
        };
        self.set_query(query)
    }

    // ========================================
    // Form
    // ========================================

    pub fn open_create(&mut self) {
        self.form.open_create();
    }

    /// Open the form on an existing prompt; false if there is none
    pub fn open_edit(&mut self, id: &str) -> bool {
        match self.library.find(id) {
            Some(prompt) => {
                self.form.open_edit(prompt);
                true
            },
            None => false,
        }
    }

    pub fn close_form(&mut self) {
        self.form.close();
    }

    /// Validate and commit the form
    pub fn submit(&mut self, fields: FormFields) -> SubmitOutcome {
        if !self.form.is_open() {
            self.notify(Toast::error("No prompt form is open"));
            return SubmitOutcome::Aborted;
        }
        let editing = match self.form.mode() {
            FormMode::Edit { id } => Some(id.clone()),
            _ => None,
        };

        let draft = match form::validate(&fields) {
            Ok(draft) => draft,
            Err(e) => {
                self.form.set_fields(fields);
                self.notify(Toast::error(e.to_string()));
                return SubmitOutcome::Rejected;
            },
        };

        let outcome = match editing {
            Some(id) => {
                if !self.library.update(&id, draft) {
                    self.form.close();
                    self.notify(Toast::error("Prompt not found"));
                    return SubmitOutcome::Aborted;
                }
                self.persist();
                self.notify(Toast::success("Prompt updated successfully"));
                SubmitOutcome::Updated(id)
            },
            None => {
                let id = self.library.create(draft).id.clone();
                self.persist();
                self.notify(Toast::success("Prompt created successfully"));
                SubmitOutcome::Created(id)
            },
        };

        self.form.close();
        outcome
    }

    // ========================================
    // Delete
    // ========================================

    /// Delete after confirmation. Returns whether a prompt was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        if self.library.find(id).is_none() {
            self.notify(Toast::error("Prompt not found"));
            return false;
        }

        if !self.ui.confirm(DELETE_CONFIRMATION) {
            return false;
        }

        self.library.remove(id);
        self.persist();
        self.notify(Toast::success("Prompt deleted"));
        true
    }

    // ========================================
    // Import / export
    // ========================================

    /// Write the collection to `dir`. Returns the file path on success.
    pub async fn export_to(&mut self, dir: &Path) -> Option<PathBuf> {
        match transfer::write_export(dir, self.library.prompts()).await {
            Ok(path) => {
                self.notify(Toast::success("Prompts exported successfully"));
                Some(path)
            },
            Err(e) => {
                error!("Error exporting prompts: {}", e);
                self.notify(Toast::error("Error exporting prompts"));
                None
            },
        }
    }

    /// Read an import file and merge it. Returns how many prompts were added.
    pub async fn import_file(&mut self, path: &Path) -> usize {
        match transfer::read_import_file(path).await {
            Ok(content) => self.import_content(&content),
            Err(e) => {
                error!(path = %path.display(), "Error reading import file: {}", e);
                self.notify(Toast::error("Error reading the file"));
                0
            },
        }
    }

    /// Validate import content, confirm, and prepend the valid records
    pub fn import_content(&mut self, content: &str) -> usize {
        let batch: ImportBatch = match transfer::parse_import(content) {
            Ok(batch) => batch,
            Err(e) => {
                self.report_import_failure(e);
                return 0;
            },
        };

        if !self.ui.confirm(&batch.confirmation_message()) {
            return 0;
        }

        let count = batch.len();
        self.library.prepend(batch.prompts);
        self.persist();
        self.notify(Toast::success(format!("Imported {} prompts successfully", count)));
        count
    }

    fn report_import_failure(&mut self, err: ImportError) {
        let err = PromptError::from(err);
        error!("Error importing prompts: {}", err);
        self.notify(Toast::error(err.user_message()));
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
