//! Near-miss phrase suggestions for unmatched descriptions.
//!
//! When substring detection finds nothing, the onboarding chat can ask
//! "did you mean..." instead of giving up. Candidates are ranked by
//! Jaro-Winkler similarity between each registered phrase and the
//! description's tokens.

use std::cmp::Ordering;

use serde::Serialize;

use crate::catalog::BusinessFamily;
use crate::classifier::AliasRegistry;

/// Minimum Jaro-Winkler similarity for a suggestion to surface.
pub const SUGGESTION_THRESHOLD: f64 = 0.6;

/// Default cap on returned suggestions.
pub const MAX_SUGGESTIONS: usize = 4;

/// A ranked near-miss candidate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseSuggestion {
    pub phrase: String,
    pub business_type: String,
    pub family: BusinessFamily,
    pub score: f64,
}

/// Rank registered phrases against an unmatched description.
///
/// Each phrase is scored as the best Jaro-Winkler similarity over the
/// description's whitespace tokens and the whole trimmed description.
/// Results below [`SUGGESTION_THRESHOLD`] are dropped; survivors are sorted
/// by score descending, then phrase ascending so equal scores stay
/// deterministic, and truncated to `max`.
pub fn suggest(registry: &AliasRegistry, description: &str, max: usize) -> Vec<PhraseSuggestion> {
    let haystack = description.trim().to_lowercase();
    if haystack.is_empty() || max == 0 {
        return Vec::new();
    }
    let tokens: Vec<&str> = haystack.split_whitespace().collect();

    let mut candidates: Vec<PhraseSuggestion> = registry
        .phrases()
        .map(|(phrase, business_type, family)| {
            let score = tokens
                .iter()
                .map(|t| strsim::jaro_winkler(t, phrase))
                .chain(std::iter::once(strsim::jaro_winkler(&haystack, phrase)))
                .fold(0.0_f64, f64::max);
            PhraseSuggestion {
                phrase: phrase.to_string(),
                business_type: business_type.to_string(),
                family,
                score,
            }
        })
        .filter(|s| s.score >= SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.phrase.cmp(&b.phrase))
    });
    candidates.truncate(max);
    candidates
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
        AliasRegistry::build(&[FamilyCatalog {
            family: BusinessFamily::BeautyBody,
            aliases: vec![
                ("barber", "barbershop"),
                ("tattoo", "tattoo_studio"),
                ("nail salon", "nail_salon"),
            ],
            templates: vec![
                ("barbershop", stub_tree()),
                ("tattoo_studio", stub_tree()),
                ("nail_salon", stub_tree()),
            ],
            generic_aliases: vec![],
        }])
    }

    #[test]
    fn misspelling_surfaces_the_intended_phrase() {
        let suggestions = suggest(&registry(), "I cut hair at my barbr", MAX_SUGGESTIONS);
        assert!(!suggestions.is_empty());
        assert_eq!(suggestions[0].phrase, "barber");
        assert_eq!(suggestions[0].business_type, "barbershop");
        assert!(suggestions[0].score >= SUGGESTION_THRESHOLD);
    }

    #[test]
    fn unrelated_text_yields_nothing_above_threshold() {
        let suggestions = suggest(&registry(), "zzzz qqqq", MAX_SUGGESTIONS);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn results_are_bounded_and_deterministic() {
        let a = suggest(&registry(), "tatto parlour", 2);
        let b = suggest(&registry(), "tatto parlour", 2);
        assert!(a.len() <= 2);
        assert_eq!(
            a.iter().map(|s| s.phrase.clone()).collect::<Vec<_>>(),
            b.iter().map(|s| s.phrase.clone()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn empty_input_is_a_no_op() {
        assert!(suggest(&registry(), "   ", MAX_SUGGESTIONS).is_empty());
        assert!(suggest(&registry(), "barber", 0).is_empty());
    }
}
