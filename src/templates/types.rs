//! Template tree types.
//!
//! A template is the configuration tree handed to the AI customization step
//! during onboarding: tabs containing components, with structural guardrails
//! encoded as flags. `locked` components must never be deleted or renamed
//! downstream; tabs without `removable` must never be deleted. The wire form
//! is camelCase JSON because the consumers (dashboard, prompt builder) speak
//! the portal's JSON dialect.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

fn is_false(b: &bool) -> bool {
    !*b
}

/// A leaf configuration node: one widget/panel on a dashboard tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateComponent {
    /// Unique within the owning tab.
    pub id: String,
    pub label: String,
    /// Rendering view identifier (e.g. "appointment_calendar"). Opaque here.
    pub view: String,
    /// One-way guarantee: once true, downstream customization may not delete
    /// or rename this node.
    #[serde(default, skip_serializing_if = "is_false")]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub removable: bool,
    /// Whether the component advances its pipeline stages automatically.
    #[serde(default, skip_serializing_if = "is_false")]
    pub auto_progress: bool,
    /// Ordered pipeline of named states this component visualizes.
    /// Not executed by this engine.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stages: Vec<String>,
}

impl Default for TemplateComponent {
    fn default() -> Self {
        Self {
            id: String::new(),
            label: String::new(),
            view: String::new(),
            locked: false,
            removable: false,
            auto_progress: false,
            stages: Vec::new(),
        }
    }
}

/// A dashboard tab grouping components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateTab {
    pub id: String,
    pub label: String,
    pub icon: String,
    /// Tabs default to non-removable; customization may delete a tab only
    /// when this is true.
    #[serde(default, skip_serializing_if = "is_false")]
    pub removable: bool,
    pub components: Vec<TemplateComponent>,
}

impl Default for TemplateTab {
    fn default() -> Self {
        Self {
            id: String::new(),
            label: String::new(),
            icon: String::new(),
            removable: false,
            components: Vec::new(),
        }
    }
}

/// The full configuration tree for one business type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub tabs: Vec<TemplateTab>,
}

impl TemplateConfig {
    /// Walk the tree and collect every component id whose `locked` flag is
    /// set. Recomputed from whichever copy the caller holds, so the set can
    /// never go stale relative to that copy.
    pub fn locked_component_ids(&self) -> HashSet<String> {
        self.tabs
            .iter()
            .flat_map(|tab| tab.components.iter())
            .filter(|c| c.locked)
            .map(|c| c.id.clone())
            .collect()
    }

    /// Total component count across all tabs.
    pub fn component_count(&self) -> usize {
        self.tabs.iter().map(|t| t.components.len()).sum()
    }
}

/// A resolved, mutation-safe template instance.
///
/// `template` is a deep, independent copy of the canonical tree; `locked_ids`
/// is derived from that same copy. Callers (the AI customization step) may
/// mutate `template` freely: the canonical store and every other caller's
/// copy are unaffected.
#[derive(Debug, Clone)]
pub struct TemplateResult {
    pub template: TemplateConfig,
    pub locked_ids: HashSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> TemplateConfig {
        TemplateConfig {
            tabs: vec![
                TemplateTab {
                    id: "home".into(),
                    label: "Home".into(),
                    icon: "home".into(),
                    components: vec![
                        TemplateComponent {
                            id: "overview".into(),
                            label: "Overview".into(),
                            view: "overview_cards".into(),
                            locked: true,
                            ..Default::default()
                        },
                        TemplateComponent {
                            id: "feed".into(),
                            label: "Activity".into(),
                            view: "activity_feed".into(),
                            ..Default::default()
                        },
                    ],
                    ..Default::default()
                },
                TemplateTab {
                    id: "jobs".into(),
                    label: "Jobs".into(),
                    icon: "wrench".into(),
                    removable: true,
                    components: vec![TemplateComponent {
                        id: "pipeline".into(),
                        label: "Job Pipeline".into(),
                        view: "pipeline_board".into(),
                        locked: true,
                        auto_progress: true,
                        stages: vec!["Quoted".into(), "Scheduled".into(), "Done".into()],
                        ..Default::default()
                    }],
                    ..Default::default()
                },
            ],
        }
    }

    #[test]
    fn locked_walk_collects_from_every_tab() {
        let config = sample_config();
        let locked = config.locked_component_ids();
        assert_eq!(locked.len(), 2);
        assert!(locked.contains("overview"));
        assert!(locked.contains("pipeline"));
        assert!(!locked.contains("feed"));
    }

    #[test]
    fn serde_skips_defaulted_flags() {
        let config = sample_config();
        let json = serde_json::to_string(&config).unwrap();

        // locked/autoProgress/stages survive; absent flags are omitted.
        assert!(json.contains("\"locked\":true"));
        assert!(json.contains("\"autoProgress\":true"));
        assert!(json.contains("\"stages\":[\"Quoted\",\"Scheduled\",\"Done\"]"));
        assert!(!json.contains("\"locked\":false"));
        assert!(!json.contains("\"autoProgress\":false"));

        let back: TemplateConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn component_count_spans_tabs() {
        assert_eq!(sample_config().component_count(), 3);
    }
}
