//! Content lint over the authored catalog tables.
//!
//! The engine tolerates content defects at runtime (collisions resolve
//! last-registration-wins, unbacked types resolve to not-found); this suite
//! exists so those defects surface here as content bugs instead.

use std::collections::HashSet;

use onboard_core::{catalog, engine, BusinessFamily};

#[test]
fn catalog_passes_structural_validation() {
    let catalogs = catalog::all();
    let errors = catalog::validate(&catalogs);
    assert!(
        errors.is_empty(),
        "catalog has {} content defect(s):\n{}",
        errors.len(),
        errors
            .iter()
            .map(|e| format!("  - {e}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

#[test]
fn no_phrase_is_registered_by_two_families() {
    // Redundant with validation, but asserted directly: a cross-family
    // collision silently makes one business type unreachable via text.
    let catalogs = catalog::all();
    let mut seen: HashSet<&str> = HashSet::new();
    for cat in &catalogs {
        for (phrase, _) in &cat.aliases {
            assert!(
                seen.insert(*phrase),
                "phrase '{phrase}' registered by more than one family"
            );
        }
    }
}

#[test]
fn phrases_are_lowercase_and_trimmed() {
    for cat in catalog::all() {
        for (phrase, business_type) in &cat.aliases {
            assert!(!phrase.is_empty(), "empty phrase for {business_type}");
            assert_eq!(
                *phrase,
                phrase.to_lowercase(),
                "phrase '{phrase}' is not lowercase"
            );
            assert_eq!(
                *phrase,
                phrase.trim(),
                "phrase '{phrase}' has stray whitespace"
            );
        }
    }
}

#[test]
fn every_declared_type_is_backed_by_a_tree() {
    let engine = engine();
    for family in BusinessFamily::all() {
        let types = engine.store().business_types(*family);
        assert!(!types.is_empty(), "{family} declares no business types");
        for business_type in types {
            assert!(
                engine.resolve(business_type, *family).is_some(),
                "{business_type} declared under {family} but has no backing tree"
            );
        }
    }
}

#[test]
fn every_declared_type_is_reachable_from_text() {
    // Each declared business type should have at least one phrase mapping
    // to it, otherwise classification can never produce it.
    let catalogs = catalog::all();
    for cat in &catalogs {
        let reachable: HashSet<&str> = cat.aliases.iter().map(|(_, ty)| *ty).collect();
        for ty in cat.declared_types() {
            assert!(
                reachable.contains(ty),
                "{ty} in {} has no alias phrase and is unreachable via detect",
                cat.family
            );
        }
    }
}

#[test]
fn catalog_covers_the_advertised_breadth() {
    let stats = engine().stats();
    assert_eq!(stats.families, 10);
    assert!(
        stats.business_types >= 90,
        "expected ~90 business types, found {}",
        stats.business_types
    );
    assert!(stats.phrases >= 200, "phrase table looks thin: {}", stats.phrases);
}
