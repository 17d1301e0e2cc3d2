pub mod content;
pub mod data_import;
pub mod import_from_file;
pub mod management;
