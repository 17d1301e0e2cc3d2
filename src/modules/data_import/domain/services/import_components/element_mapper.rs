use crate::log_warn;
use crate::modules::content::{ContentItem, ElementField};
use crate::modules::management::domain::{
    CreatedAsset, ElementValue, LanguageVariantElement, Reference,
};

/// Translates exported element values into language variant elements of the target project
pub struct ElementMapper;

impl ElementMapper {
    /// Build the element list of `item`, resolving asset references against `assets`
    pub fn map_elements(item: &ContentItem, assets: &[CreatedAsset]) -> Vec<LanguageVariantElement> {
        item.elements
            .iter()
            .map(|(codename, field)| LanguageVariantElement {
                codename: codename.clone(),
                value: Self::map_element_value(item.codename(), field, assets),
            })
            .collect()
    }

    pub fn map_element_value(
        item_codename: &str,
        field: &ElementField,
        assets: &[CreatedAsset],
    ) -> ElementValue {
        match field {
            ElementField::Text { value }
            | ElementField::RichText { value }
            | ElementField::UrlSlug { value }
            | ElementField::Custom { value } => ElementValue::Text(value.clone()),
            ElementField::Number { value } => ElementValue::Number(*value),
            ElementField::DateTime { value } => ElementValue::DateTime(value.clone()),
            ElementField::Taxonomy { value } => ElementValue::Terms(value.clone()),
            ElementField::ModularContent { value } => ElementValue::References(
                value.iter().map(Reference::by_codename).collect(),
            ),
            ElementField::MultipleChoice { value } => ElementValue::References(
                value
                    .iter()
                    .map(|option| Reference::by_codename(option.codename.as_str()))
                    .collect(),
            ),
            ElementField::Asset { value } => ElementValue::References(
                value
                    .iter()
                    .filter_map(|asset| {
                        let created = assets
                            .iter()
                            .find(|created| created.external_id.as_deref() == Some(asset.url.as_str()));
                        if created.is_none() {
                            log_warn!(
                                "No created asset matches '{}' of item '{}', dropping reference",
                                asset.url,
                                item_codename
                            );
                        }
                        created.map(|created| Reference::by_id(created.id))
                    })
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::{
        AssetReference, ContentItemSystem, MultipleChoiceOption, TaxonomyTerm,
    };
    use crate::modules::management::domain::FileReference;
    use std::collections::BTreeMap;
    use uuid::Uuid;

    fn asset_ref(url: &str) -> AssetReference {
        AssetReference {
            name: "hero.png".to_string(),
            mime_type: "image/png".to_string(),
            size: 10,
            description: None,
            url: url.to_string(),
        }
    }

    fn created_asset(external_id: &str) -> CreatedAsset {
        CreatedAsset {
            id: Uuid::new_v4(),
            file_name: "hero.png".to_string(),
            title: Some("hero.png".to_string()),
            size: 10,
            mime_type: "image/png".to_string(),
            file_reference: FileReference {
                id: Uuid::new_v4(),
                reference_type: "internal".to_string(),
            },
            descriptions: Vec::new(),
            external_id: Some(external_id.to_string()),
            last_modified: None,
        }
    }

    #[test]
    fn test_plain_fields_pass_through() {
        let value = ElementMapper::map_element_value(
            "home",
            &ElementField::Text {
                value: "Hi".to_string(),
            },
            &[],
        );
        assert_eq!(value, ElementValue::Text("Hi".to_string()));

        let value =
            ElementMapper::map_element_value("home", &ElementField::Number { value: Some(4.5) }, &[]);
        assert_eq!(value, ElementValue::Number(Some(4.5)));

        let terms = vec![TaxonomyTerm {
            name: "Coffee".to_string(),
            codename: "coffee".to_string(),
        }];
        let value = ElementMapper::map_element_value(
            "home",
            &ElementField::Taxonomy {
                value: terms.clone(),
            },
            &[],
        );
        assert_eq!(value, ElementValue::Terms(terms));
    }

    #[test]
    fn test_linked_items_and_options_become_codename_references() {
        let value = ElementMapper::map_element_value(
            "home",
            &ElementField::ModularContent {
                value: vec!["about_us".to_string(), "contact".to_string()],
            },
            &[],
        );
        assert_eq!(
            value,
            ElementValue::References(vec![
                Reference::by_codename("about_us"),
                Reference::by_codename("contact"),
            ])
        );

        let value = ElementMapper::map_element_value(
            "home",
            &ElementField::MultipleChoice {
                value: vec![MultipleChoiceOption {
                    name: "News".to_string(),
                    codename: "news".to_string(),
                }],
            },
            &[],
        );
        assert_eq!(
            value,
            ElementValue::References(vec![Reference::by_codename("news")])
        );
    }

    #[test]
    fn test_assets_resolve_by_external_id_and_unmatched_are_dropped() {
        let hero = created_asset("https://assets.example.com/hero.png");
        let field = ElementField::Asset {
            value: vec![
                asset_ref("https://assets.example.com/hero.png"),
                asset_ref("https://assets.example.com/missing.png"),
            ],
        };

        let value = ElementMapper::map_element_value("home", &field, &[hero.clone()]);
        assert_eq!(value, ElementValue::References(vec![Reference::by_id(hero.id)]));
    }

    #[test]
    fn test_map_elements_keeps_every_codename() {
        let mut elements = BTreeMap::new();
        elements.insert(
            "title".to_string(),
            ElementField::Text {
                value: "Hi".to_string(),
            },
        );
        elements.insert("gallery".to_string(), ElementField::Asset { value: Vec::new() });
        let item = ContentItem {
            system: ContentItemSystem {
                id: None,
                name: "Home".to_string(),
                codename: "home".to_string(),
                language: "en".to_string(),
                type_codename: "page".to_string(),
            },
            elements,
        };

        let mapped = ElementMapper::map_elements(&item, &[]);
        assert_eq!(mapped.len(), 2);
        assert_eq!(mapped[0].codename, "gallery");
        assert_eq!(mapped[0].value, ElementValue::References(Vec::new()));
        assert_eq!(mapped[1].codename, "title");
    }
}
