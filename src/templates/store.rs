//! Canonical template store with lookup-time generic aliasing.

use std::collections::HashMap;

use crate::catalog::{BusinessFamily, FamilyCatalog};
use crate::templates::{TemplateConfig, TemplateResult};

struct FamilyStore {
    /// Bespoke canonical trees, keyed by business type.
    templates: HashMap<String, TemplateConfig>,
    /// Generic aliases: alias type → canonical type. Followed one hop at
    /// lookup time, so the store never holds near-duplicate trees and an
    /// edit to a canonical entry is visible through every alias.
    aliases: HashMap<String, String>,
}

impl FamilyStore {
    /// Whether `business_type` is in this family's declared type set.
    fn declares(&self, business_type: &str) -> bool {
        self.templates.contains_key(business_type) || self.aliases.contains_key(business_type)
    }

    /// Canonical tree for a declared type, following a generic alias one
    /// hop. A declared-but-unbacked type yields `None`, never a partial or
    /// substituted tree.
    fn canonical(&self, business_type: &str) -> Option<&TemplateConfig> {
        match self.aliases.get(business_type) {
            Some(target) => self.templates.get(target),
            None => self.templates.get(business_type),
        }
    }
}

/// Per-family canonical trees, built once at load and immutable afterwards.
pub struct TemplateStore {
    families: HashMap<BusinessFamily, FamilyStore>,
}

impl TemplateStore {
    pub fn build(catalogs: &[FamilyCatalog]) -> Self {
        let mut families = HashMap::new();
        for cat in catalogs {
            families.insert(
                cat.family,
                FamilyStore {
                    templates: cat
                        .templates
                        .iter()
                        .map(|(ty, config)| ((*ty).to_string(), config.clone()))
                        .collect(),
                    aliases: cat
                        .generic_aliases
                        .iter()
                        .map(|(alias, target)| ((*alias).to_string(), (*target).to_string()))
                        .collect(),
                },
            );
        }
        Self { families }
    }

    /// Resolve a business type to a mutation-safe template instance.
    ///
    /// Returns `None` when the type is not declared under `family`, or is
    /// declared but has no backing tree: a family/type mismatch is
    /// indistinguishable from an unknown type. On success the caller gets a
    /// deep, independent copy (no shared references with the canonical tree
    /// or any previously issued copy) and the locked-component id set
    /// recomputed from that same copy.
    pub fn resolve(&self, business_type: &str, family: BusinessFamily) -> Option<TemplateResult> {
        let store = self.families.get(&family)?;
        if !store.declares(business_type) {
            return None;
        }
        let canonical = store.canonical(business_type)?;

        let template = canonical.clone();
        let locked_ids = template.locked_component_ids();

        tracing::debug!(
            business_type = %business_type,
            family = %family,
            tabs = template.tabs.len(),
            locked = locked_ids.len(),
            "resolved template"
        );

        Some(TemplateResult {
            template,
            locked_ids,
        })
    }

    /// Whether `business_type` is declared under `family` (bespoke or alias).
    pub fn contains(&self, business_type: &str, family: BusinessFamily) -> bool {
        self.families
            .get(&family)
            .map(|s| s.declares(business_type))
            .unwrap_or(false)
    }

    /// Declared business types for a family, sorted for stable output.
    pub fn business_types(&self, family: BusinessFamily) -> Vec<&str> {
        let Some(store) = self.families.get(&family) else {
            return Vec::new();
        };
        let mut types: Vec<&str> = store
            .templates
            .keys()
            .chain(store.aliases.keys())
            .map(|s| s.as_str())
            .collect();
        types.sort_unstable();
        types
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{TemplateComponent, TemplateTab};

    fn tree(locked_id: &str) -> TemplateConfig {
        TemplateConfig {
            tabs: vec![TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![
                    TemplateComponent {
                        id: locked_id.into(),
                        label: "Locked Widget".into(),
                        view: "overview_cards".into(),
                        locked: true,
                        ..Default::default()
                    },
                    TemplateComponent {
                        id: "spare".into(),
                        label: "Spare Widget".into(),
                        view: "note_cards".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }],
        }
    }

    fn store() -> TemplateStore {
        TemplateStore::build(&[FamilyCatalog {
            family: BusinessFamily::Automotive,
            aliases: vec![
                ("auto repair", "auto_repair"),
                ("mechanic", "mechanic"),
                ("towing", "towing"),
            ],
            templates: vec![("auto_repair", tree("job_board"))],
            generic_aliases: vec![("mechanic", "auto_repair"), ("towing", "missing_target")],
        }])
    }

    #[test]
    fn resolve_returns_independent_copies() {
        let store = store();
        let mut first = store.resolve("auto_repair", BusinessFamily::Automotive).unwrap();
        let second = store.resolve("auto_repair", BusinessFamily::Automotive).unwrap();

        first.template.tabs[0].components.clear();
        first.template.tabs[0].id = "mutated".into();

        assert_eq!(second.template.tabs[0].id, "home");
        assert_eq!(second.template.tabs[0].components.len(), 2);

        // The canonical entry is untouched too.
        let third = store.resolve("auto_repair", BusinessFamily::Automotive).unwrap();
        assert_eq!(third.template.tabs[0].components.len(), 2);
    }

    #[test]
    fn locked_ids_match_a_fresh_walk_of_the_returned_copy() {
        let store = store();
        let result = store.resolve("auto_repair", BusinessFamily::Automotive).unwrap();
        assert_eq!(result.locked_ids, result.template.locked_component_ids());
        assert_eq!(result.locked_ids.len(), 1);
        assert!(result.locked_ids.contains("job_board"));
    }

    #[test]
    fn generic_alias_resolves_to_equal_but_disjoint_tree() {
        let store = store();
        let alias = store.resolve("mechanic", BusinessFamily::Automotive).unwrap();
        let canonical = store.resolve("auto_repair", BusinessFamily::Automotive).unwrap();

        assert_eq!(alias.template, canonical.template);
        assert_eq!(alias.locked_ids, canonical.locked_ids);

        // Equal structure, separate object graphs.
        let mut mutated = alias;
        mutated.template.tabs[0].components[0].label = "Renamed".into();
        let canonical_again = store.resolve("auto_repair", BusinessFamily::Automotive).unwrap();
        assert_eq!(
            canonical_again.template.tabs[0].components[0].label,
            "Locked Widget"
        );
    }

    #[test]
    fn unknown_type_and_family_mismatch_both_resolve_to_none() {
        let store = store();
        assert!(store.resolve("not_a_real_type", BusinessFamily::Automotive).is_none());
        // Declared elsewhere, asked under the wrong family.
        assert!(store.resolve("auto_repair", BusinessFamily::FoodBeverage).is_none());
    }

    #[test]
    fn declared_but_unbacked_type_resolves_to_none() {
        let store = store();
        assert!(store.contains("towing", BusinessFamily::Automotive));
        assert!(store.resolve("towing", BusinessFamily::Automotive).is_none());
    }

    #[test]
    fn business_types_lists_bespoke_and_alias_keys() {
        let store = store();
        assert_eq!(
            store.business_types(BusinessFamily::Automotive),
            vec!["auto_repair", "mechanic", "towing"]
        );
        assert!(store.business_types(BusinessFamily::Retail).is_empty());
    }
}
