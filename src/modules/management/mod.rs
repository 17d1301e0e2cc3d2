pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{BinarySource, ContentManagementClient};
pub use infrastructure::{HttpBinarySource, KontentManagementClient};
