/// Test data factories using builder pattern
///
/// Provides convenient methods to create content items with sensible defaults
use std::collections::BTreeMap;
use template_manager::modules::content::{
    AssetFromFile, AssetReference, ContentItem, ContentItemSystem, ElementField, EmbeddedAsset,
};

pub struct ContentItemFactory {
    name: String,
    codename: String,
    language: String,
    type_codename: String,
    elements: BTreeMap<String, ElementField>,
}

impl Default for ContentItemFactory {
    fn default() -> Self {
        Self {
            name: "Home".to_string(),
            codename: "home".to_string(),
            language: "en".to_string(),
            type_codename: "page".to_string(),
            elements: BTreeMap::new(),
        }
    }
}

impl ContentItemFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item named after `codename`, in English, of type `page`
    pub fn named(codename: &str) -> Self {
        Self {
            name: codename.to_string(),
            codename: codename.to_string(),
            ..Self::default()
        }
    }

    pub fn language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn text(mut self, codename: &str, value: &str) -> Self {
        self.elements.insert(
            codename.to_string(),
            ElementField::Text {
                value: value.to_string(),
            },
        );
        self
    }

    pub fn assets(mut self, codename: &str, assets: Vec<AssetReference>) -> Self {
        self.elements
            .insert(codename.to_string(), ElementField::Asset { value: assets });
        self
    }

    pub fn build(self) -> ContentItem {
        ContentItem {
            system: ContentItemSystem {
                id: None,
                name: self.name,
                codename: self.codename,
                language: self.language,
                type_codename: self.type_codename,
            },
            elements: self.elements,
        }
    }
}

pub fn asset(name: &str) -> AssetReference {
    AssetReference {
        name: name.to_string(),
        mime_type: "image/png".to_string(),
        size: 3,
        description: Some(format!("{} description", name)),
        url: format!("https://assets.example.com/{}", name),
    }
}

pub fn packaged(item_codename: &str, asset: &AssetReference, data: &[u8]) -> AssetFromFile {
    AssetFromFile::new(
        EmbeddedAsset {
            content_item_codename: item_codename.to_string(),
            asset: asset.clone(),
            filename: asset.name.clone(),
        },
        data.to_vec(),
    )
}
