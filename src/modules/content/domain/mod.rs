pub mod asset;
pub mod content_item;

pub use asset::{AssetFromFile, AssetReference, EmbeddedAsset};
pub use content_item::{
    ContentItem, ContentItemSystem, ElementField, MultipleChoiceOption, TaxonomyTerm,
};
