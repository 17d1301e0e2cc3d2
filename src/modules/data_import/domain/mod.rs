pub mod services;

// Re-exports for easy access
pub use services::import_components::{
    AssetImporter, ElementMapper, ImportCoordinator, ImportExecutor, ProgressTracker,
};
