use crate::pdd::Pdd;

/// A view of a `<=`-constraint (C2): `lhs <= rhs`, or `lhs < rhs` when [`Inequality::is_strict`].
///
/// Obtained from a [`super::SignedConstraint`] via
/// [`super::SignedConstraint::as_inequality`], which also accounts for negation: `¬(p <= q)`
/// becomes the strict inequality `q < p`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inequality {
    lhs: Pdd,
    rhs: Pdd,
    is_strict: bool,
}

impl Inequality {
    pub(super) fn new(lhs: Pdd, rhs: Pdd, is_strict: bool) -> Self {
        Inequality { lhs, rhs, is_strict }
    }

    pub fn lhs(&self) -> &Pdd {
        &self.lhs
    }

    pub fn rhs(&self) -> &Pdd {
        &self.rhs
    }

    pub fn is_strict(&self) -> bool {
        self.is_strict
    }

    /// Rebuilds the `<=`-constraint this inequality was extracted from (undoing the negation
    /// [`super::SignedConstraint::as_inequality`] may have applied), i.e. the literal `c` such
    /// that `c.as_inequality() == Some(self)`.
    pub fn as_signed_constraint(&self) -> super::SignedConstraint {
        if self.is_strict {
            super::SignedConstraint::ult(self.lhs.clone(), self.rhs.clone())
        } else {
            super::SignedConstraint::ule(self.lhs.clone(), self.rhs.clone())
        }
    }
}
