//! Unified alias registry and greedy longest-match detection.
//!
//! All per-family alias tables fold into one phrase → (type, family) map
//! plus a phrase list sorted by descending length. The length ordering is
//! the crux of the design: when a description contains several matching
//! phrases ("nail salon" also contains "salon"), the more specific, longer
//! phrase is evaluated first and wins. Ties keep registration order (stable
//! sort): equal-length phrases are rare and usually near-synonymous.
//!
//! Do not replace the scan with a trie or Aho-Corasick without preserving
//! longest-match-wins exactly: several business types are deliberately
//! named as substrings of more specific ones ("brow" inside "brow tech").

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{BusinessFamily, FamilyCatalog};

/// Classifier output: the detected business type and its family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub business_type: String,
    pub family: BusinessFamily,
}

#[derive(Debug, Clone)]
struct RegisteredPhrase {
    business_type: String,
    family: BusinessFamily,
}

/// Phrase space the classifier searches. Built once at process start from
/// the ordered family catalogs; immutable afterwards.
pub struct AliasRegistry {
    entries: HashMap<String, RegisteredPhrase>,
    /// Phrases sorted by descending byte length; ties keep the order the
    /// phrase first appeared across the catalog list.
    ordered_phrases: Vec<String>,
}

impl AliasRegistry {
    /// Fold the per-family alias tables into one registry.
    ///
    /// Registration order is the catalog list order. A phrase registered by
    /// two families keeps its original scan position but maps to the *last*
    /// registration: preserved for compatibility; the catalog lint flags
    /// any such collision as a content bug.
    pub fn build(catalogs: &[FamilyCatalog]) -> Self {
        let mut entries: HashMap<String, RegisteredPhrase> = HashMap::new();
        let mut ordered_phrases: Vec<String> = Vec::new();

        for cat in catalogs {
            for (phrase, business_type) in &cat.aliases {
                let phrase = normalize(phrase);
                if phrase.is_empty() {
                    continue;
                }
                let previous = entries.insert(
                    phrase.clone(),
                    RegisteredPhrase {
                        business_type: (*business_type).to_string(),
                        family: cat.family,
                    },
                );
                if previous.is_none() {
                    ordered_phrases.push(phrase);
                }
            }
        }

        // Stable: equal lengths keep first-registration order.
        ordered_phrases.sort_by_key(|p| std::cmp::Reverse(p.len()));

        Self {
            entries,
            ordered_phrases,
        }
    }

    /// Classify a freeform description.
    ///
    /// Lowercases the input and returns the mapping of the first phrase (in
    /// descending-length order) that occurs as a substring anywhere in it.
    /// Unmatched input returns `None`: routine, not an error. O(P × L),
    /// no side effects, deterministic for a fixed registry.
    pub fn detect(&self, description: &str) -> Option<DetectionResult> {
        let haystack = description.to_lowercase();

        for phrase in &self.ordered_phrases {
            if haystack.contains(phrase.as_str()) {
                let entry = &self.entries[phrase];
                tracing::debug!(
                    phrase = %phrase,
                    business_type = %entry.business_type,
                    family = %entry.family,
                    "description matched alias phrase"
                );
                return Some(DetectionResult {
                    business_type: entry.business_type.clone(),
                    family: entry.family,
                });
            }
        }

        None
    }

    /// All registered phrases with their mappings, in scan order.
    pub fn phrases(&self) -> impl Iterator<Item = (&str, &str, BusinessFamily)> + '_ {
        self.ordered_phrases.iter().map(|p| {
            let entry = &self.entries[p];
            (p.as_str(), entry.business_type.as_str(), entry.family)
        })
    }

    pub fn phrase_count(&self) -> usize {
        self.ordered_phrases.len()
    }
}

/// Lowercase and collapse whitespace, matching how phrases are authored.
fn normalize(s: &str) -> String {
    s.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FamilyCatalog;
    use crate::templates::{TemplateComponent, TemplateConfig, TemplateTab};

    fn stub_tree() -> TemplateConfig {
        TemplateConfig {
            tabs: vec![TemplateTab {
                id: "home".into(),
                label: "Home".into(),
                icon: "home".into(),
                components: vec![TemplateComponent {
                    id: "overview".into(),
                    label: "Overview".into(),
                    view: "overview_cards".into(),
                    ..Default::default()
                }],
                ..Default::default()
            }],
        }
    }

    fn registry() -> AliasRegistry {
        let beauty = FamilyCatalog {
            family: BusinessFamily::BeautyBody,
            aliases: vec![
                ("salon", "hair_salon"),
                ("nail salon", "nail_salon"),
                ("lash", "lash_studio"),
            ],
            templates: vec![
                ("hair_salon", stub_tree()),
                ("nail_salon", stub_tree()),
                ("lash_studio", stub_tree()),
            ],
            generic_aliases: vec![],
        };
        let health = FamilyCatalog {
            family: BusinessFamily::HealthWellness,
            aliases: vec![("yoga", "yoga_studio")],
            templates: vec![("yoga_studio", stub_tree())],
            generic_aliases: vec![],
        };
        AliasRegistry::build(&[beauty, health])
    }

    #[test]
    fn longer_phrase_wins_over_contained_phrase() {
        let result = registry().detect("I run a nail salon downtown").unwrap();
        assert_eq!(result.business_type, "nail_salon");
        assert_eq!(result.family, BusinessFamily::BeautyBody);
    }

    #[test]
    fn shorter_phrase_matches_when_longer_absent() {
        let result = registry().detect("we opened a SALON last year").unwrap();
        assert_eq!(result.business_type, "hair_salon");
    }

    #[test]
    fn no_phrase_returns_none() {
        assert!(registry().detect("I sell rockets to the moon").is_none());
    }

    #[test]
    fn equal_length_tie_keeps_registration_order() {
        // "lash" (beauty, registered first) and "yoga" (health) are both
        // four bytes; a description containing both resolves to the earlier
        // registration.
        let result = registry().detect("lash and yoga under one roof").unwrap();
        assert_eq!(result.business_type, "lash_studio");
    }

    #[test]
    fn duplicate_phrase_last_registration_wins() {
        let first = FamilyCatalog {
            family: BusinessFamily::Retail,
            aliases: vec![("market", "grocery_store")],
            templates: vec![("grocery_store", stub_tree())],
            generic_aliases: vec![],
        };
        let second = FamilyCatalog {
            family: BusinessFamily::FoodBeverage,
            aliases: vec![("market", "restaurant")],
            templates: vec![("restaurant", stub_tree())],
            generic_aliases: vec![],
        };
        let registry = AliasRegistry::build(&[first, second]);
        let result = registry.detect("street market stall").unwrap();
        assert_eq!(result.business_type, "restaurant");
        assert_eq!(result.family, BusinessFamily::FoodBeverage);
        // The phrase appears once in the scan list despite double registration.
        assert_eq!(registry.phrase_count(), 1);
    }

    #[test]
    fn detection_is_case_insensitive_and_deterministic() {
        let registry = registry();
        let a = registry.detect("NAIL SALON");
        let b = registry.detect("nail salon");
        assert_eq!(a, b);
        assert!(a.is_some());
    }
}
