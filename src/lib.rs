//! Business-type detection and template composition for AI-driven onboarding.
//!
//! Given a freeform description ("I run a nail salon"), this crate
//! deterministically selects a business category, then resolves a
//! mutation-safe configuration tree (tabs → components) plus the set of
//! locked component ids an AI customization step must preserve.
//!
//! Control flow: free text → [`detect`] → (business type, family) →
//! [`resolve`] → (tree copy, locked-id set) → handed to the customization
//! step. [`resolve_as_prompt_text`] layers JSON serialization on top for
//! prompt injection.
//!
//! Everything is synchronous and pure over load-time-immutable data: no
//! I/O, no shared mutable state, no locking. Unknown input is routine;
//! every entry point returns `Option`, never an error, for unmatched text
//! or unknown types.

pub mod catalog;
pub mod classifier;
pub mod engine;
pub mod error;
pub mod templates;

pub use catalog::{BusinessFamily, CatalogStats, FamilyCatalog};
pub use classifier::{AliasRegistry, DetectionResult, PhraseSuggestion};
pub use engine::{detect, engine, resolve, resolve_as_prompt_text, OnboardingEngine};
pub use error::CatalogError;
pub use templates::{
    TemplateComponent, TemplateConfig, TemplateResult, TemplateStore, TemplateTab,
};
