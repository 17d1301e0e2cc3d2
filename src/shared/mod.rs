// Shared kernel used by every module

pub mod config; // Environment and export package conventions
pub mod errors; // Shared error types
pub mod utils; // Logging and validation helpers

// Re-exports for convenience
pub use config::AppEnvironment;
pub use errors::{AppError, AppResult};
