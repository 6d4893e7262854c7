//! Native constraint evaluation.
//!
//! The host owns this computation; consumers read the resulting flags and
//! never recompute them. Evaluation is stateless: every call starts from
//! the element's current attributes and value.

use regex::Regex;

use crate::element::{Element, ElementKind};

/// Native constraint-validity flags for one control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityState {
    pub value_missing: bool,
    pub pattern_mismatch: bool,
    pub too_short: bool,
    pub too_long: bool,
}

impl ValidityState {
    /// True when no constraint is violated.
    pub fn valid(&self) -> bool {
        !self.value_missing && !self.pattern_mismatch && !self.too_short && !self.too_long
    }
}

/// Evaluate the declared constraints of an element.
///
/// Non-control elements carry no constraints and always evaluate clean.
/// Toggle controls only ever report `value_missing`; pattern and length
/// constraints apply to text-like values, and only once a value exists.
pub fn evaluate(element: &Element) -> ValidityState {
    let ElementKind::Control(kind) = element.kind else {
        return ValidityState::default();
    };

    let mut validity = ValidityState::default();

    if kind.is_toggle() {
        validity.value_missing = element.required && !element.checked;
        return validity;
    }

    if element.value.is_empty() {
        validity.value_missing = element.required;
        return validity;
    }

    if let Some(pattern) = &element.pattern {
        // Pattern attributes match the whole value, not a substring.
        // Unparseable patterns are skipped, as native hosts do.
        match Regex::new(&format!("^(?:{pattern})$")) {
            Ok(re) => validity.pattern_mismatch = !re.is_match(&element.value),
            Err(err) => log::warn!(
                "[validity] ignoring unparseable pattern on {}: {err}",
                element.id
            ),
        }
    }

    let chars = element.value.chars().count();
    if let Some(min) = element.min_length {
        validity.too_short = chars < min;
    }
    if let Some(max) = element.max_length {
        validity.too_long = chars > max;
    }

    validity
}
