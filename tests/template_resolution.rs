//! Resolution guarantees over the authored catalog: copy independence,
//! locked-set fidelity, alias equivalence, and round-trip serialization.

use onboard_core::{engine, resolve, resolve_as_prompt_text, BusinessFamily, TemplateConfig};

#[test]
fn copies_are_independent_between_calls() {
    let mut first = resolve("nail_salon", BusinessFamily::BeautyBody).expect("resolve");
    let second = resolve("nail_salon", BusinessFamily::BeautyBody).expect("resolve");

    // Mutate the first copy the way a customization step would.
    first.template.tabs[0].components.clear();
    let duplicated = first.template.tabs[0].clone();
    first.template.tabs.push(duplicated);

    assert!(
        !second.template.tabs[0].components.is_empty(),
        "mutating one copy leaked into another"
    );

    let third = resolve("nail_salon", BusinessFamily::BeautyBody).expect("resolve");
    assert_eq!(second.template, third.template, "canonical store was mutated");
}

#[test]
fn locked_ids_equal_an_independent_walk_for_every_type() {
    let engine = engine();
    for family in BusinessFamily::all() {
        for business_type in engine.store().business_types(*family) {
            let result = engine
                .resolve(business_type, *family)
                .unwrap_or_else(|| panic!("{business_type} under {family} did not resolve"));

            let walked = result.template.locked_component_ids();
            assert_eq!(
                result.locked_ids, walked,
                "locked set drifted for {business_type} under {family}"
            );

            // Every locked id points at a component in this very tree.
            for id in &result.locked_ids {
                assert!(
                    result
                        .template
                        .tabs
                        .iter()
                        .flat_map(|t| t.components.iter())
                        .any(|c| &c.id == id),
                    "locked id {id} missing from {business_type}'s tree"
                );
            }
        }
    }
}

#[test]
fn every_authored_tree_carries_a_guardrail() {
    let engine = engine();
    for family in BusinessFamily::all() {
        for business_type in engine.store().business_types(*family) {
            let result = engine.resolve(business_type, *family).expect("resolve");
            assert!(
                !result.locked_ids.is_empty(),
                "{business_type} has no locked components: nothing anchors customization"
            );
        }
    }
}

#[test]
fn generic_alias_is_structurally_equal_but_disjoint() {
    let alias = resolve("mechanic", BusinessFamily::Automotive).expect("alias resolves");
    let canonical = resolve("auto_repair", BusinessFamily::Automotive).expect("canonical resolves");

    assert_eq!(alias.template, canonical.template);
    assert_eq!(alias.locked_ids, canonical.locked_ids);

    // Disjoint graphs: renaming through the alias copy must not show up in
    // a fresh canonical resolution.
    let mut mutated = alias;
    for tab in &mut mutated.template.tabs {
        tab.label = "MUTATED".into();
    }
    let fresh = resolve("auto_repair", BusinessFamily::Automotive).expect("resolve");
    assert!(fresh.template.tabs.iter().all(|t| t.label != "MUTATED"));
}

#[test]
fn unknown_type_is_safe() {
    assert!(resolve("not_a_real_type", BusinessFamily::BeautyBody).is_none());
    assert!(resolve("", BusinessFamily::Retail).is_none());
}

#[test]
fn family_mismatch_is_plain_not_found() {
    // Declared under beauty_body; asking under food_beverage is identical
    // to an unknown type.
    assert!(resolve("tattoo_studio", BusinessFamily::FoodBeverage).is_none());
    assert!(resolve("restaurant", BusinessFamily::BeautyBody).is_none());
}

#[test]
fn prompt_text_round_trips_for_every_type() {
    let engine = engine();
    for family in BusinessFamily::all() {
        for business_type in engine.store().business_types(*family) {
            let json = resolve_as_prompt_text(business_type, *family)
                .unwrap_or_else(|| panic!("no prompt text for {business_type}"));
            let parsed: TemplateConfig =
                serde_json::from_str(&json).expect("prompt JSON parses back");
            let resolved = engine.resolve(business_type, *family).expect("resolve");
            assert_eq!(parsed, resolved.template);
        }
    }
}

#[test]
fn prompt_text_fails_exactly_when_resolution_fails() {
    assert!(resolve_as_prompt_text("not_a_real_type", BusinessFamily::BeautyBody).is_none());
    assert!(resolve_as_prompt_text("tattoo_studio", BusinessFamily::FoodBeverage).is_none());
}
