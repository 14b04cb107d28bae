//! Process-wide onboarding engine facade.
//!
//! The alias registry and template store are built once from the authored
//! catalog and never mutated afterwards; every call hands back owned data,
//! so concurrent onboarding sessions never interact and no locking is
//! needed. The free functions at the bottom are the entry points the chat
//! flow consumes.

use once_cell::sync::Lazy;

use crate::catalog::{self, BusinessFamily, CatalogStats};
use crate::classifier::{suggest, AliasRegistry, DetectionResult, PhraseSuggestion};
use crate::templates::{prompt, TemplateResult, TemplateStore};

/// Classifier plus template store over one catalog build.
pub struct OnboardingEngine {
    registry: AliasRegistry,
    store: TemplateStore,
    stats: CatalogStats,
}

impl OnboardingEngine {
    /// Build the engine from the authored catalog. Runs once per process in
    /// normal use; tests may build private instances freely.
    pub fn new() -> Self {
        let catalogs = catalog::all();
        let stats = catalog::stats(&catalogs);
        tracing::debug!(
            families = stats.families,
            business_types = stats.business_types,
            phrases = stats.phrases,
            "built onboarding engine"
        );
        Self {
            registry: AliasRegistry::build(&catalogs),
            store: TemplateStore::build(&catalogs),
            stats,
        }
    }

    /// Classify a freeform business description.
    pub fn detect(&self, description: &str) -> Option<DetectionResult> {
        self.registry.detect(description)
    }

    /// Resolve a (type, family) pair to a mutation-safe template instance.
    /// Independently callable: the onboarding flow re-resolves after a user
    /// manually corrects their detected category.
    pub fn resolve(&self, business_type: &str, family: BusinessFamily) -> Option<TemplateResult> {
        self.store.resolve(business_type, family)
    }

    /// Resolved tree as JSON for prompt injection; `None` if resolution fails.
    pub fn resolve_as_prompt_text(
        &self,
        business_type: &str,
        family: BusinessFamily,
    ) -> Option<String> {
        prompt::resolve_as_prompt_text(&self.store, business_type, family)
    }

    /// Near-miss phrases for a description `detect` could not place.
    pub fn suggest_phrases(&self, description: &str, max: usize) -> Vec<PhraseSuggestion> {
        suggest::suggest(&self.registry, description, max)
    }

    pub fn stats(&self) -> &CatalogStats {
        &self.stats
    }

    pub fn registry(&self) -> &AliasRegistry {
        &self.registry
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }
}

impl Default for OnboardingEngine {
    fn default() -> Self {
        Self::new()
    }
}

static ENGINE: Lazy<OnboardingEngine> = Lazy::new(OnboardingEngine::new);

/// The shared process-wide engine.
pub fn engine() -> &'static OnboardingEngine {
    &ENGINE
}

/// See [`OnboardingEngine::detect`].
pub fn detect(description: &str) -> Option<DetectionResult> {
    engine().detect(description)
}

/// See [`OnboardingEngine::resolve`].
pub fn resolve(business_type: &str, family: BusinessFamily) -> Option<TemplateResult> {
    engine().resolve(business_type, family)
}

/// See [`OnboardingEngine::resolve_as_prompt_text`].
pub fn resolve_as_prompt_text(business_type: &str, family: BusinessFamily) -> Option<String> {
    engine().resolve_as_prompt_text(business_type, family)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_then_resolve_chains_end_to_end() {
        let engine = engine();
        let detection = engine.detect("I run a nail salon downtown").unwrap();
        assert_eq!(detection.business_type, "nail_salon");
        assert_eq!(detection.family, BusinessFamily::BeautyBody);

        let resolved = engine
            .resolve(&detection.business_type, detection.family)
            .unwrap();
        assert!(!resolved.template.tabs.is_empty());
        assert!(!resolved.locked_ids.is_empty());
    }

    #[test]
    fn stats_reflect_the_authored_catalog() {
        let stats = engine().stats();
        assert_eq!(stats.families, BusinessFamily::all().len());
        assert!(stats.business_types >= 90);
        assert_eq!(
            stats.business_types,
            stats.bespoke_templates + stats.generic_aliases
        );
        assert!(stats.phrases > stats.business_types);
    }
}
