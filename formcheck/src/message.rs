use formdom::Element;

use crate::constraint::ConstraintKind;

/// Fallback when a pattern fails and the field declares no title.
const INVALID_FORMAT: &str = "Invalid format";

/// Resolve the error text for one violation on one field.
///
/// Total over the recognized kinds: every kind yields non-empty text.
pub fn message(kind: ConstraintKind, field: &Element) -> String {
    match kind {
        ConstraintKind::ValueMissing => "Fill in this field".to_string(),
        ConstraintKind::PatternMismatch => field
            .title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or(INVALID_FORMAT)
            .to_string(),
        ConstraintKind::TooShort => format!(
            "Value too short, minimum characters — {}",
            field.min_length.unwrap_or_default()
        ),
        ConstraintKind::TooLong => format!(
            "Value too long, maximum characters — {}",
            field.max_length.unwrap_or_default()
        ),
    }
}
