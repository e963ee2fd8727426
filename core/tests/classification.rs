//! Classifier strategy tests.

use intake_core::classifier::{Classifier, FixedChoiceClassifier, InferredClassifier};
use intake_core::error::IntakeError;
use intake_core::record::{Category, Priority};

/// "hostel" and "room" both sit in the first keyword group.
#[test]
fn hostel_keywords_infer_hostel_category() {
    let classifier = InferredClassifier::new();
    let result = classifier
        .classify("My hostel room has no water", None, None)
        .unwrap();
    assert_eq!(
        result.category,
        Category::Hostel,
        "hostel/room/water keywords should map to Hostel"
    );
}

/// Keyword groups are ordered and the first group with any hit wins:
/// "water" (hostel group) beats "washing" (laundry group).
#[test]
fn first_matching_keyword_group_wins() {
    let classifier = InferredClassifier::new();
    let result = classifier
        .classify("Water keeps spilling over the washing machines", None, None)
        .unwrap();
    assert_eq!(result.category, Category::Hostel);
}

/// The "unsafe" override fires regardless of what the polarity says.
#[test]
fn unsafe_override_forces_high_urgency() {
    let classifier = InferredClassifier::new();
    let result = classifier
        .classify("I feel unsafe in the laundry room", None, None)
        .unwrap();
    assert_eq!(
        result.priority,
        Priority::High,
        "'unsafe' must force High urgency"
    );
}

/// Same for "harass"; the category still comes from the keyword groups
/// independently ("class" lands in the academic group).
#[test]
fn harass_override_forces_high_urgency() {
    let classifier = InferredClassifier::new();
    let result = classifier
        .classify("A senior keeps trying to harass juniors after class", None, None)
        .unwrap();
    assert_eq!(result.priority, Priority::High);
    assert_eq!(result.category, Category::Academic);
}

/// Positive text with no keyword hits: Misc category, Low urgency.
#[test]
fn positive_text_is_misc_and_low() {
    let classifier = InferredClassifier::new();
    let result = classifier
        .classify("Everything is great, thanks!", None, None)
        .unwrap();
    assert_eq!(result.category, Category::Misc);
    assert_eq!(result.priority, Priority::Low);
}

/// An empty description scores neutral and matches nothing.
#[test]
fn empty_description_is_misc_and_low() {
    let classifier = InferredClassifier::new();
    let result = classifier.classify("", None, None).unwrap();
    assert_eq!(result.category, Category::Misc);
    assert_eq!(result.priority, Priority::Low);
}

/// Fixed choice performs no inference; valid picks come back unchanged.
#[test]
fn fixed_choice_passes_valid_choices_through() {
    let result = FixedChoiceClassifier
        .classify("anything at all", Some("Food"), Some("Minor"))
        .unwrap();
    assert_eq!(result.category, Category::Food);
    assert_eq!(result.priority, Priority::Minor);
}

#[test]
fn fixed_choice_rejects_unknown_category() {
    let err = FixedChoiceClassifier
        .classify("text", Some("InvalidCat"), Some("Minor"))
        .unwrap_err();
    assert!(
        matches!(err, IntakeError::InvalidEnumValue { kind: "category", .. }),
        "expected invalid category error, got {err:?}"
    );
}

/// "High" is a valid urgency label but not a valid severity pick.
#[test]
fn fixed_choice_rejects_urgency_label_as_severity() {
    let err = FixedChoiceClassifier
        .classify("text", Some("Food"), Some("High"))
        .unwrap_err();
    assert!(
        matches!(err, IntakeError::InvalidEnumValue { kind: "severity", .. }),
        "expected severity membership failure, got {err:?}"
    );
}

/// Missing picks fail the same recoverable way unknown ones do.
#[test]
fn fixed_choice_requires_both_choices() {
    let err = FixedChoiceClassifier
        .classify("text", None, None)
        .unwrap_err();
    assert!(matches!(err, IntakeError::InvalidEnumValue { .. }));
}
