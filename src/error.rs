//! Error types for the onboarding engine.
//!
//! Expected runtime conditions (unknown phrase, unknown business type,
//! family/type mismatch) are not errors: every public operation returns
//! `Option` for those. The types here describe *content* defects: problems
//! in the authored catalog tables that validation surfaces so they can be
//! fixed at authoring time, never per request.

use thiserror::Error;

use crate::catalog::BusinessFamily;

/// A structural defect in the authored catalog tables.
///
/// Produced by [`crate::catalog::validate`]. The engine itself tolerates all
/// of these at runtime (collisions resolve last-registration-wins, unbacked
/// types resolve to not-found): validation exists so the test suite can
/// flag them as content bugs rather than engine bugs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate phrase '{phrase}' in {family}: maps to both '{first_type}' and '{second_type}'")]
    DuplicatePhrase {
        family: BusinessFamily,
        phrase: String,
        first_type: String,
        second_type: String,
    },

    #[error("phrase '{phrase}' registered by both {first_family} and {second_family}: '{phrase}' in {first_family} becomes unreachable")]
    CrossFamilyCollision {
        phrase: String,
        first_family: BusinessFamily,
        second_family: BusinessFamily,
    },

    #[error("business type '{business_type}' declared twice in {family}")]
    DuplicateBusinessType {
        family: BusinessFamily,
        business_type: String,
    },

    #[error("phrase '{phrase}' in {family} maps to undeclared business type '{business_type}'")]
    PhraseTargetMissing {
        family: BusinessFamily,
        phrase: String,
        business_type: String,
    },

    #[error("generic alias '{alias}' in {family} targets unknown business type '{target}'")]
    UnknownAliasTarget {
        family: BusinessFamily,
        alias: String,
        target: String,
    },

    #[error("generic alias '{alias}' in {family} targets another alias '{target}': targets must be bespoke entries")]
    AliasTargetIsAlias {
        family: BusinessFamily,
        alias: String,
        target: String,
    },

    #[error("generic alias '{alias}' in {family} shadows a bespoke template of the same name")]
    AliasShadowsTemplate {
        family: BusinessFamily,
        alias: String,
    },

    #[error("template for '{business_type}' in {family} has no tabs")]
    EmptyTemplate {
        family: BusinessFamily,
        business_type: String,
    },

    #[error("duplicate tab id '{tab}' in template '{business_type}' ({family})")]
    DuplicateTabId {
        family: BusinessFamily,
        business_type: String,
        tab: String,
    },

    #[error("duplicate component id '{component}' in tab '{tab}' of template '{business_type}' ({family})")]
    DuplicateComponentId {
        family: BusinessFamily,
        business_type: String,
        tab: String,
        component: String,
    },
}
