use crate::atoms::SignedConstraint;
use crate::basic_types::PVar;

/// One entry of the boolean trail the specification's `Search` collaborator exposes: either a
/// decision on a polynomial variable, or a boolean literal (decided or propagated) together with
/// whether it has already been resolved away by conflict analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrailEntry {
    Decision { var: PVar },
    Boolean { literal: SignedConstraint, resolved: bool },
}

impl TrailEntry {
    pub fn is_boolean(&self) -> bool {
        matches!(self, TrailEntry::Boolean { .. })
    }

    /// `true` for a boolean entry conflict analysis has already consumed; always `false` for a
    /// decision entry.
    pub fn is_resolved(&self) -> bool {
        matches!(self, TrailEntry::Boolean { resolved: true, .. })
    }

    /// The literal this entry carries.
    ///
    /// # Panics
    /// Panics on a [`TrailEntry::Decision`]; callers are expected to check
    /// [`TrailEntry::is_boolean`] first.
    pub fn lit(&self) -> &SignedConstraint {
        match self {
            TrailEntry::Boolean { literal, .. } => literal,
            TrailEntry::Decision { .. } => panic!("lit() called on a decision trail entry"),
        }
    }
}

/// The trail-iteration collaborator (also named `Search` in the specification): a read-only,
/// chronologically ordered view of the boolean trail, used by the premise oracle to scan for
/// non-overflow witnesses and by rules that bind a trail literal directly (e.g. `ugt_y`'s `z' <=
/// y`).
pub trait Search {
    /// The trail entries in chronological (oldest-first) order.
    fn entries(&self) -> &[TrailEntry];
}
