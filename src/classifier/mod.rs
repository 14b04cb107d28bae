//! Business-type classification from freeform descriptions.
//!
//! The classifier is a greedy longest-match substring scanner over the
//! unified alias registry: deterministic, pure, and deliberately simple.
//! Fuzzy suggestions for unmatched input live in [`suggest`].

mod registry;
pub mod suggest;

pub use registry::{AliasRegistry, DetectionResult};
pub use suggest::{PhraseSuggestion, MAX_SUGGESTIONS, SUGGESTION_THRESHOLD};

