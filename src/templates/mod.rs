//! Template store and resolution.
//!
//! Canonical configuration trees live in a per-family store built once at
//! load. Resolution hands every caller a deep, independent copy plus the
//! derived locked-component set: the guardrail surface the downstream AI
//! customization step is held to.

pub mod prompt;
mod store;
mod types;

pub use prompt::resolve_as_prompt_text;
pub use store::TemplateStore;
pub use types::{TemplateComponent, TemplateConfig, TemplateResult, TemplateTab};
