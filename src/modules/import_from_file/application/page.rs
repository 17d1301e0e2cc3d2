use crate::modules::data_import::{ImportConfig, ImportProgressEvent};
use crate::modules::import_from_file::domain::{
    DroppedEntry, ImportDataStorage, ImportForm, SelectedFile,
};
use crate::shared::config::AppEnvironment;
use crate::shared::errors::AppResult;
use crate::log_debug;

use std::sync::Arc;

pub const PAGE_TITLE: &str = "Import data";

/// State of the "import from file" page
///
/// Holds the target project form, the selected package file and the
/// loading/error flags. It performs no network calls itself.
pub struct ImportFromFilePage {
    storage: Arc<dyn ImportDataStorage>,
    form: ImportForm,
    file: Option<SelectedFile>,
    loading: bool,
    error: Option<String>,
}

impl ImportFromFilePage {
    pub fn new(environment: &AppEnvironment, storage: Arc<dyn ImportDataStorage>) -> Self {
        let form = ImportForm::initial(environment, storage.get_import_data());
        Self {
            storage,
            form,
            file: None,
            loading: false,
            error: None,
        }
    }

    pub fn title(&self) -> &'static str {
        PAGE_TITLE
    }

    pub fn form(&self) -> &ImportForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ImportForm {
        &mut self.form
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn handle_preview(&mut self) {
        self.error = None;
        self.loading = true;
    }

    pub fn handle_manual_input_on_change(&mut self, files: Vec<SelectedFile>) {
        self.file = files.into_iter().next();
    }

    pub fn dropped(&mut self, entry: DroppedEntry) {
        if entry.file.is_none() {
            log_debug!("Dropped entry '{}' is not a file", entry.relative_path);
        }
        self.file = entry.file;
    }

    /// Ends the loading state, recording a failure message if any
    pub fn finish_loading(&mut self, error: Option<String>) {
        self.loading = false;
        self.error = error;
    }

    /// Validates the form and remembers it for the next session
    pub fn remember_form(&self) -> AppResult<()> {
        self.form.validate()?;
        self.storage.set_import_data(&self.form.to_stored())
    }

    /// Import settings derived from the form
    pub fn import_config<F>(&self, process_item: F) -> ImportConfig
    where
        F: Fn(ImportProgressEvent) + Send + Sync + 'static,
    {
        ImportConfig::new(process_item).with_publishing(self.form.publish_all_items)
    }
}
