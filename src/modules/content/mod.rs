pub mod domain;

// Re-exports for easy external access
pub use domain::{
    AssetFromFile, AssetReference, ContentItem, ContentItemSystem, ElementField, EmbeddedAsset,
    MultipleChoiceOption, TaxonomyTerm,
};
