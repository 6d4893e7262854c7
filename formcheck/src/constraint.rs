//! Reading constraint violations off the host's validity evaluation.

use formdom::{Document, ValidityState};

/// The constraint violations this engine recognizes.
///
/// The variant order here is the display order when several violations
/// are active on one field at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    ValueMissing,
    PatternMismatch,
    TooShort,
    TooLong,
}

impl ConstraintKind {
    /// Every recognized kind, in display order.
    pub const ORDER: [ConstraintKind; 4] = [
        ConstraintKind::ValueMissing,
        ConstraintKind::PatternMismatch,
        ConstraintKind::TooShort,
        ConstraintKind::TooLong,
    ];

    /// Whether the host reports this kind as active.
    pub fn is_violated(self, validity: &ValidityState) -> bool {
        match self {
            ConstraintKind::ValueMissing => validity.value_missing,
            ConstraintKind::PatternMismatch => validity.pattern_mismatch,
            ConstraintKind::TooShort => validity.too_short,
            ConstraintKind::TooLong => validity.too_long,
        }
    }
}

/// The recognized kinds currently violated on a field, in display order.
///
/// Reads the host's evaluation; performs no constraint computation of its
/// own. Never fails: an unknown or non-control target yields an empty set.
pub fn violations(doc: &Document, id: &str) -> Vec<ConstraintKind> {
    let validity = doc.validity(id);
    ConstraintKind::ORDER
        .into_iter()
        .filter(|kind| kind.is_violated(&validity))
        .collect()
}
