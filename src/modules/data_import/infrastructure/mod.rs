pub mod package_reader;

pub use package_reader::{ExportPackageReader, ImportPackage, PackageMetadata};
