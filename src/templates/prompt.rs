//! Prompt serialization: a resolved tree as JSON for AI prompt injection.

use crate::catalog::BusinessFamily;
use crate::templates::TemplateStore;

/// Resolve a template and serialize it to a canonical JSON string for
/// injection into a downstream AI prompt. The `locked` and `removable`
/// flags survive serialization so the consuming model can be instructed not
/// to remove those nodes.
///
/// Returns `None` if resolution fails: a tree that resolution rejected is
/// never serialized. A serializer error on a resolved tree is unreachable
/// for these types; it is logged and mapped to `None` rather than handing
/// the caller a partial string.
pub fn resolve_as_prompt_text(
    store: &TemplateStore,
    business_type: &str,
    family: BusinessFamily,
) -> Option<String> {
    let result = store.resolve(business_type, family)?;
    match serde_json::to_string(&result.template) {
        Ok(json) => Some(json),
        Err(err) => {
            tracing::error!(
                business_type = %business_type,
                family = %family,
                error = %err,
                "failed to serialize resolved template"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FamilyCatalog;
    use crate::templates::{TemplateComponent, TemplateConfig, TemplateTab};

    fn store() -> TemplateStore {
        TemplateStore::build(&[FamilyCatalog {
            family: BusinessFamily::PetCare,
            aliases: vec![("groomer", "pet_grooming")],
            templates: vec![(
                "pet_grooming",
                TemplateConfig {
                    tabs: vec![TemplateTab {
                        id: "pets".into(),
                        label: "Pets".into(),
                        icon: "paw".into(),
                        components: vec![TemplateComponent {
                            id: "pet_profiles".into(),
                            label: "Pet Profiles".into(),
                            view: "pet_profiles".into(),
                            locked: true,
                            ..Default::default()
                        }],
                        ..Default::default()
                    }],
                },
            )],
            generic_aliases: vec![],
        }])
    }

    #[test]
    fn prompt_text_round_trips_to_the_resolved_tree() {
        let store = store();
        let json = resolve_as_prompt_text(&store, "pet_grooming", BusinessFamily::PetCare).unwrap();
        let parsed: TemplateConfig = serde_json::from_str(&json).unwrap();
        let resolved = store.resolve("pet_grooming", BusinessFamily::PetCare).unwrap();
        assert_eq!(parsed, resolved.template);
    }

    #[test]
    fn locked_flags_survive_serialization() {
        let store = store();
        let json = resolve_as_prompt_text(&store, "pet_grooming", BusinessFamily::PetCare).unwrap();
        assert!(json.contains("\"locked\":true"));
    }

    #[test]
    fn failed_resolution_yields_none() {
        let store = store();
        assert!(resolve_as_prompt_text(&store, "pet_grooming", BusinessFamily::Retail).is_none());
        assert!(resolve_as_prompt_text(&store, "unknown", BusinessFamily::PetCare).is_none());
    }
}
