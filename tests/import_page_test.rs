/// Import page state backed by the JSON file storage
use std::sync::Arc;
use tempfile::TempDir;
use template_manager::modules::import_from_file::{
    DroppedEntry, ImportDataStorage, ImportFromFilePage, JsonFileImportDataStorage, SelectedFile,
};
use template_manager::shared::config::{AppEnvironment, DefaultProjects};

fn environment() -> AppEnvironment {
    AppEnvironment {
        default_projects: DefaultProjects {
            target_project_id: "env-project".to_string(),
            target_project_api_key: "env-key".to_string(),
            ..DefaultProjects::default()
        },
        ..AppEnvironment::default()
    }
}

#[test]
fn remembered_form_is_restored_on_next_page() {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(JsonFileImportDataStorage::new(dir.path().join("import.json")));

    let mut page = ImportFromFilePage::new(&environment(), storage.clone());
    assert_eq!(page.form().project_id, "env-project");

    page.form_mut().project_id = "target".to_string();
    page.form_mut().publish_all_items = false;
    page.remember_form().unwrap();

    let restored = ImportFromFilePage::new(&environment(), storage.clone());
    assert_eq!(restored.form().project_id, "target");
    assert_eq!(restored.form().cm_api_key, "env-key");
    assert!(!restored.form().publish_all_items);
    assert!(storage.get_import_data().is_some());
}

#[test]
fn file_selection_flow() {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(JsonFileImportDataStorage::new(dir.path().join("import.json")));
    let mut page = ImportFromFilePage::new(&environment(), storage);

    page.handle_manual_input_on_change(vec![SelectedFile::new("/data/export_a.zip")]);
    assert_eq!(page.file().map(|f| f.name.as_str()), Some("export_a.zip"));

    page.dropped(DroppedEntry::file(
        "export_b.zip",
        SelectedFile::new("/data/export_b.zip"),
    ));
    assert_eq!(page.file().map(|f| f.name.as_str()), Some("export_b.zip"));

    page.handle_preview();
    assert!(page.is_loading());
    page.finish_loading(None);
    assert!(!page.is_loading());
    assert!(page.error().is_none());
}
