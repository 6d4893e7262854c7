use formdom::{validity::evaluate, Element, ValidityState};

// ============================================================================
// Required
// ============================================================================

#[test]
fn test_required_empty_text_is_value_missing() {
    let el = Element::text_input().id("name").required(true);

    let validity = evaluate(&el);
    assert!(validity.value_missing);
    assert!(!validity.valid());
}

#[test]
fn test_optional_empty_text_is_clean() {
    let el = Element::text_input().id("name");

    assert_eq!(evaluate(&el), ValidityState::default());
}

#[test]
fn test_required_filled_text_is_clean() {
    let el = Element::text_input().id("name").required(true).value("ada");

    assert!(evaluate(&el).valid());
}

#[test]
fn test_required_unchecked_checkbox_is_value_missing() {
    let el = Element::checkbox().id("terms").required(true);

    assert!(evaluate(&el).value_missing);
}

#[test]
fn test_required_checked_checkbox_is_clean() {
    let el = Element::checkbox().id("terms").required(true).checked(true);

    assert!(evaluate(&el).valid());
}

#[test]
fn test_radio_uses_checked_not_value() {
    // A radio with a value string but no check is still missing.
    let el = Element::radio().id("plan").required(true).value("pro");

    assert!(evaluate(&el).value_missing);
}

// ============================================================================
// Pattern
// ============================================================================

#[test]
fn test_pattern_matches_whole_value() {
    // "[a-z]+" must cover the entire value, not a substring of it.
    let el = Element::text_input().id("slug").pattern("[a-z]+").value("abc123");
    assert!(evaluate(&el).pattern_mismatch);

    let el = Element::text_input().id("slug").pattern("[a-z]+").value("abc");
    assert!(evaluate(&el).valid());
}

#[test]
fn test_pattern_skipped_on_empty_value() {
    let el = Element::text_input().id("slug").pattern("[a-z]+");

    let validity = evaluate(&el);
    assert!(!validity.pattern_mismatch);
    assert!(validity.valid());
}

#[test]
fn test_unparseable_pattern_is_ignored() {
    let el = Element::text_input().id("slug").pattern("[unclosed").value("x");

    assert!(evaluate(&el).valid());
}

// ============================================================================
// Length bounds
// ============================================================================

#[test]
fn test_min_length() {
    let el = Element::text_input().id("name").min_length(5).value("ab");
    assert!(evaluate(&el).too_short);

    let el = Element::text_input().id("name").min_length(5).value("abcde");
    assert!(evaluate(&el).valid());
}

#[test]
fn test_max_length() {
    let el = Element::textarea().id("bio").max_length(3).value("abcd");
    assert!(evaluate(&el).too_long);

    let el = Element::textarea().id("bio").max_length(3).value("abc");
    assert!(evaluate(&el).valid());
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let el = Element::text_input().id("name").min_length(5).value("héllo");

    assert!(evaluate(&el).valid());
}

#[test]
fn test_length_skipped_on_empty_value() {
    let el = Element::text_input().id("name").min_length(5);

    assert!(!evaluate(&el).too_short);
}

// ============================================================================
// Scope
// ============================================================================

#[test]
fn test_non_control_elements_evaluate_clean() {
    let el = Element::block().id("wrapper").required(true);

    assert_eq!(evaluate(&el), ValidityState::default());
}

#[test]
fn test_toggle_ignores_pattern_and_length() {
    let el = Element::checkbox()
        .id("terms")
        .checked(true)
        .pattern("[0-9]+")
        .min_length(10);

    assert!(evaluate(&el).valid());
}

#[test]
fn test_multiple_violations_reported_together() {
    let el = Element::text_input()
        .id("code")
        .pattern("[a-z]+")
        .min_length(4)
        .value("A!");

    let validity = evaluate(&el);
    assert!(validity.pattern_mismatch);
    assert!(validity.too_short);
    assert!(!validity.value_missing);
}
