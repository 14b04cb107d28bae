//! Authored catalog content: business families, alias tables, template trees.
//!
//! Each family file holds that family's literal configuration: the phrase
//! table the classifier searches, the bespoke template trees, and the generic
//! alias declarations. The engine consumes these as opaque payloads; nothing
//! in here is request-time logic. [`all`] returns the families in a fixed
//! order, which makes cross-family phrase collision resolution (last
//! registration wins) an explicit, testable input instead of an import-order
//! artifact.

mod automotive;
mod beauty_body;
mod education;
mod events_entertainment;
mod food_beverage;
mod health_wellness;
mod home_services;
mod pet_care;
mod professional_services;
mod retail;

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::templates::TemplateConfig;

/// One of the fixed top-level business domains. Closed set, fixed at build
/// time: the classifier and template store are both keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessFamily {
    BeautyBody,
    FoodBeverage,
    Retail,
    Automotive,
    HealthWellness,
    HomeServices,
    ProfessionalServices,
    EventsEntertainment,
    PetCare,
    Education,
}

impl BusinessFamily {
    pub fn all() -> &'static [BusinessFamily] {
        &[
            BusinessFamily::BeautyBody,
            BusinessFamily::FoodBeverage,
            BusinessFamily::Retail,
            BusinessFamily::Automotive,
            BusinessFamily::HealthWellness,
            BusinessFamily::HomeServices,
            BusinessFamily::ProfessionalServices,
            BusinessFamily::EventsEntertainment,
            BusinessFamily::PetCare,
            BusinessFamily::Education,
        ]
    }

    /// Stable snake_case identifier, matching the serde tag.
    pub fn name(&self) -> &'static str {
        match self {
            BusinessFamily::BeautyBody => "beauty_body",
            BusinessFamily::FoodBeverage => "food_beverage",
            BusinessFamily::Retail => "retail",
            BusinessFamily::Automotive => "automotive",
            BusinessFamily::HealthWellness => "health_wellness",
            BusinessFamily::HomeServices => "home_services",
            BusinessFamily::ProfessionalServices => "professional_services",
            BusinessFamily::EventsEntertainment => "events_entertainment",
            BusinessFamily::PetCare => "pet_care",
            BusinessFamily::Education => "education",
        }
    }

    /// Human-readable label for UI surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            BusinessFamily::BeautyBody => "Beauty & Body",
            BusinessFamily::FoodBeverage => "Food & Beverage",
            BusinessFamily::Retail => "Retail",
            BusinessFamily::Automotive => "Automotive",
            BusinessFamily::HealthWellness => "Health & Wellness",
            BusinessFamily::HomeServices => "Home Services",
            BusinessFamily::ProfessionalServices => "Professional Services",
            BusinessFamily::EventsEntertainment => "Events & Entertainment",
            BusinessFamily::PetCare => "Pet Care",
            BusinessFamily::Education => "Education",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        BusinessFamily::all()
            .iter()
            .copied()
            .find(|f| f.name() == s)
    }
}

impl fmt::Display for BusinessFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One family's authored tables, bundled for registration.
pub struct FamilyCatalog {
    pub family: BusinessFamily,
    /// phrase → business type. Phrases are lowercase, human-typed fragments.
    pub aliases: Vec<(&'static str, &'static str)>,
    /// Bespoke template trees, keyed by business type.
    pub templates: Vec<(&'static str, TemplateConfig)>,
    /// Generic aliases: alias type → canonical (bespoke) type. Resolved at
    /// lookup time; nothing is pre-cloned into the store.
    pub generic_aliases: Vec<(&'static str, &'static str)>,
}

impl FamilyCatalog {
    /// All business types this family declares, bespoke and alias alike.
    pub fn declared_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.templates
            .iter()
            .map(|(ty, _)| *ty)
            .chain(self.generic_aliases.iter().map(|(ty, _)| *ty))
    }
}

/// The full catalog, in registration order. Rebuilt on each call: callers
/// (engine build, tests) run this once, not per request.
pub fn all() -> Vec<FamilyCatalog> {
    vec![
        beauty_body::catalog(),
        food_beverage::catalog(),
        retail::catalog(),
        automotive::catalog(),
        health_wellness::catalog(),
        home_services::catalog(),
        professional_services::catalog(),
        events_entertainment::catalog(),
        pet_care::catalog(),
        education::catalog(),
    ]
}

/// Summary counts over the catalog, for dashboards and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub families: usize,
    pub business_types: usize,
    pub bespoke_templates: usize,
    pub generic_aliases: usize,
    pub phrases: usize,
}

pub fn stats(catalogs: &[FamilyCatalog]) -> CatalogStats {
    CatalogStats {
        families: catalogs.len(),
        business_types: catalogs.iter().map(|c| c.declared_types().count()).sum(),
        bespoke_templates: catalogs.iter().map(|c| c.templates.len()).sum(),
        generic_aliases: catalogs.iter().map(|c| c.generic_aliases.len()).sum(),
        phrases: catalogs.iter().map(|c| c.aliases.len()).sum(),
    }
}

/// Structural lint over the authored tables. Returns every defect found;
/// empty means well-formed. The engine never calls this per request: it is
/// authoring-time tooling, run by the content test suite.
pub fn validate(catalogs: &[FamilyCatalog]) -> Vec<CatalogError> {
    let mut errors = Vec::new();
    let mut global_phrases: HashMap<&str, BusinessFamily> = HashMap::new();

    for cat in catalogs {
        let bespoke: HashMap<&str, &TemplateConfig> =
            cat.templates.iter().map(|(ty, t)| (*ty, t)).collect();
        let alias_keys: HashMap<&str, &str> =
            cat.generic_aliases.iter().map(|(a, t)| (*a, *t)).collect();

        // Business type uniqueness across bespoke + alias declarations.
        let mut seen_types: HashSet<&str> = HashSet::new();
        for ty in cat.declared_types() {
            if !seen_types.insert(ty) {
                errors.push(CatalogError::DuplicateBusinessType {
                    family: cat.family,
                    business_type: ty.to_string(),
                });
            }
        }

        // Phrase table: unique within the family, targets declared types,
        // no collision with an earlier family's table.
        let mut seen_phrases: HashMap<&str, &str> = HashMap::new();
        for (phrase, ty) in &cat.aliases {
            if let Some(first_type) = seen_phrases.insert(*phrase, *ty) {
                errors.push(CatalogError::DuplicatePhrase {
                    family: cat.family,
                    phrase: phrase.to_string(),
                    first_type: first_type.to_string(),
                    second_type: ty.to_string(),
                });
                continue;
            }
            if !bespoke.contains_key(ty) && !alias_keys.contains_key(ty) {
                errors.push(CatalogError::PhraseTargetMissing {
                    family: cat.family,
                    phrase: phrase.to_string(),
                    business_type: ty.to_string(),
                });
            }
            match global_phrases.insert(*phrase, cat.family) {
                Some(first_family) if first_family != cat.family => {
                    errors.push(CatalogError::CrossFamilyCollision {
                        phrase: phrase.to_string(),
                        first_family,
                        second_family: cat.family,
                    });
                }
                _ => {}
            }
        }

        // Generic aliases must target a bespoke entry in the same family.
        for (alias, target) in &cat.generic_aliases {
            if bespoke.contains_key(alias) {
                errors.push(CatalogError::AliasShadowsTemplate {
                    family: cat.family,
                    alias: alias.to_string(),
                });
            }
            if !bespoke.contains_key(target) {
                if alias_keys.contains_key(target) {
                    errors.push(CatalogError::AliasTargetIsAlias {
                        family: cat.family,
                        alias: alias.to_string(),
                        target: target.to_string(),
                    });
                } else {
                    errors.push(CatalogError::UnknownAliasTarget {
                        family: cat.family,
                        alias: alias.to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }

        // Tree structure: non-empty, unique tab ids, unique component ids
        // within each tab.
        for (ty, config) in &cat.templates {
            if config.tabs.is_empty() {
                errors.push(CatalogError::EmptyTemplate {
                    family: cat.family,
                    business_type: ty.to_string(),
                });
            }
            let mut tab_ids: HashSet<&str> = HashSet::new();
            for tab in &config.tabs {
                if !tab_ids.insert(tab.id.as_str()) {
                    errors.push(CatalogError::DuplicateTabId {
                        family: cat.family,
                        business_type: ty.to_string(),
                        tab: tab.id.clone(),
                    });
                }
                let mut component_ids: HashSet<&str> = HashSet::new();
                for component in &tab.components {
                    if !component_ids.insert(component.id.as_str()) {
                        errors.push(CatalogError::DuplicateComponentId {
                            family: cat.family,
                            business_type: ty.to_string(),
                            tab: tab.id.clone(),
                            component: component.id.clone(),
                        });
                    }
                }
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{TemplateComponent, TemplateTab};

    fn tree(tab_id: &str, component_id: &str) -> TemplateConfig {
        TemplateConfig {
            tabs: vec![TemplateTab {
                id: tab_id.into(),
                label: "Tab".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: component_id.into(),
                    label: "Widget".into(),
                    view: "overview_cards".into(),
                    ..Default::default()
                }],
                ..Default::default()
            }],
        }
    }

    #[test]
    fn validate_accepts_well_formed_tables() {
        let catalogs = vec![FamilyCatalog {
            family: BusinessFamily::Retail,
            aliases: vec![("book shop", "bookstore"), ("books", "bookstore")],
            templates: vec![("bookstore", tree("home", "overview"))],
            generic_aliases: vec![("record_store", "bookstore")],
        }];
        assert!(validate(&catalogs).is_empty());
    }

    #[test]
    fn validate_flags_cross_family_collision() {
        let a = FamilyCatalog {
            family: BusinessFamily::Retail,
            aliases: vec![("market", "grocery_store")],
            templates: vec![("grocery_store", tree("home", "overview"))],
            generic_aliases: vec![],
        };
        let b = FamilyCatalog {
            family: BusinessFamily::FoodBeverage,
            aliases: vec![("market", "restaurant")],
            templates: vec![("restaurant", tree("home", "overview"))],
            generic_aliases: vec![],
        };
        let errors = validate(&[a, b]);
        assert_eq!(
            errors,
            vec![CatalogError::CrossFamilyCollision {
                phrase: "market".into(),
                first_family: BusinessFamily::Retail,
                second_family: BusinessFamily::FoodBeverage,
            }]
        );
    }

    #[test]
    fn validate_flags_alias_defects() {
        let catalogs = vec![FamilyCatalog {
            family: BusinessFamily::Automotive,
            aliases: vec![("mechanic", "mechanic")],
            templates: vec![("auto_repair", tree("home", "overview"))],
            generic_aliases: vec![
                ("mechanic", "auto_repair"),
                ("towing", "mechanic"),
                ("detailing", "car_wash"),
            ],
        }];
        let errors = validate(&catalogs);
        assert!(errors.contains(&CatalogError::AliasTargetIsAlias {
            family: BusinessFamily::Automotive,
            alias: "towing".into(),
            target: "mechanic".into(),
        }));
        assert!(errors.contains(&CatalogError::UnknownAliasTarget {
            family: BusinessFamily::Automotive,
            alias: "detailing".into(),
            target: "car_wash".into(),
        }));
    }

    #[test]
    fn validate_flags_duplicate_ids_in_tree() {
        let config = TemplateConfig {
            tabs: vec![
                TemplateTab {
                    id: "home".into(),
                    label: "Home".into(),
                    icon: "home".into(),
                    components: vec![
                        TemplateComponent {
                            id: "overview".into(),
                            label: "A".into(),
                            view: "overview_cards".into(),
                            ..Default::default()
                        },
                        TemplateComponent {
                            id: "overview".into(),
                            label: "B".into(),
                            view: "activity_feed".into(),
                            ..Default::default()
                        },
                    ],
                    ..Default::default()
                },
                TemplateTab {
                    id: "home".into(),
                    label: "Again".into(),
                    icon: "home".into(),
                    components: vec![],
                    ..Default::default()
                },
            ],
        };
        let catalogs = vec![FamilyCatalog {
            family: BusinessFamily::Education,
            aliases: vec![("tutoring", "tutoring")],
            templates: vec![("tutoring", config)],
            generic_aliases: vec![],
        }];
        let errors = validate(&catalogs);
        assert!(errors.iter().any(|e| matches!(e, CatalogError::DuplicateTabId { .. })));
        assert!(errors.iter().any(|e| matches!(e, CatalogError::DuplicateComponentId { .. })));
    }
}
