pub mod client;
pub mod models;

pub use client::{BinarySource, ContentManagementClient};
#[cfg(test)]
pub use client::{MockBinarySource, MockContentManagementClient};
pub use models::{
    AddAssetData, AddContentItemData, AssetDescription, CreatedAsset, CreatedContentItem,
    ElementValue, FileReference, IdReference, LanguageVariant, LanguageVariantElement, Reference,
    UploadBinaryFileData,
};
