pub mod environment;

pub use environment::{AppEnvironment, DefaultProjects, ExportFilenames};
