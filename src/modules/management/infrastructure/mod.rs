pub mod binary_source;
pub mod http_handler;
pub mod kontent_client;

pub use binary_source::HttpBinarySource;
pub use http_handler::CommonHttpHandler;
pub use kontent_client::KontentManagementClient;
