pub mod asset_importer;
pub mod element_mapper;
pub mod import_coordinator;
pub mod import_executor;
pub mod progress_tracker;
pub mod types;

// Re-export main types for public API
pub use asset_importer::AssetImporter;
pub use element_mapper::ElementMapper;
pub use import_coordinator::ImportCoordinator;
pub use import_executor::ImportExecutor;
pub use progress_tracker::ProgressTracker;
pub use types::*;
