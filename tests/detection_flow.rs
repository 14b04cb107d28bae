//! End-to-end detection over the authored catalog: determinism,
//! longest-match precedence, and detect → resolve chaining.

use onboard_core::{detect, resolve, BusinessFamily};

#[test]
fn nail_salon_description_detects_the_specific_type() {
    let result = detect("I run a nail salon downtown").expect("should match");
    assert_eq!(result.business_type, "nail_salon");
    assert_eq!(result.family, BusinessFamily::BeautyBody);
}

#[test]
fn bare_salon_falls_back_to_the_generic_phrase() {
    let result = detect("I own a salon").expect("should match");
    assert_eq!(result.business_type, "hair_salon");
    assert_eq!(result.family, BusinessFamily::BeautyBody);
}

#[test]
fn unmatched_description_returns_none() {
    assert!(detect("I sell rockets to the moon").is_none());
    assert!(detect("").is_none());
}

#[test]
fn longest_match_wins_across_targets() {
    // "juice bar" contains "bar"; the longer phrase must classify first.
    let result = detect("opening a juice bar next month").expect("should match");
    assert_eq!(result.business_type, "juice_bar");
    assert_eq!(result.family, BusinessFamily::FoodBeverage);

    // "marketing agency" contains "market" (retail) and "marketing".
    let result = detect("we are a marketing agency").expect("should match");
    assert_eq!(result.business_type, "marketing_agency");
    assert_eq!(result.family, BusinessFamily::ProfessionalServices);

    // "barbershop" contains "bar" (food_beverage).
    let result = detect("my barbershop has four chairs").expect("should match");
    assert_eq!(result.business_type, "barbershop");
    assert_eq!(result.family, BusinessFamily::BeautyBody);
}

#[test]
fn detection_is_case_insensitive() {
    let lower = detect("i walk dogs, dog walking mostly");
    let upper = detect("I WALK DOGS, DOG WALKING MOSTLY");
    assert_eq!(lower, upper);
    assert_eq!(lower.unwrap().business_type, "dog_walking");
}

#[test]
fn detection_is_deterministic_across_calls() {
    let inputs = [
        "I run a nail salon downtown",
        "collision repair and paint",
        "we do lawn care in the summer",
        "completely unrelated text",
    ];
    for input in inputs {
        let first = detect(input);
        for _ in 0..10 {
            assert_eq!(detect(input), first, "unstable detection for {input:?}");
        }
    }
}

#[test]
fn detected_pair_always_resolves() {
    let descriptions = [
        "I run a nail salon downtown",
        "I'm a mechanic",
        "family owned pizzeria",
        "mobile dog grooming van",
        "small cpa firm",
        "we teach piano lessons",
        "24/7 tow truck service",
    ];
    for description in descriptions {
        let detection = detect(description)
            .unwrap_or_else(|| panic!("no match for {description:?}"));
        let resolved = resolve(&detection.business_type, detection.family)
            .unwrap_or_else(|| panic!("no template for {:?}", detection.business_type));
        assert!(
            !resolved.template.tabs.is_empty(),
            "{} resolved to an empty tree",
            detection.business_type
        );
    }
}
