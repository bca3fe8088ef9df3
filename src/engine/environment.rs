use crate::atoms::SignedConstraint;
use crate::basic_types::Bvalue;
use crate::basic_types::PVar;
use crate::basic_types::Value;
use crate::pdd::Pdd;

/// The SAT core, as seen by the saturation rules: the collaborator this crate borrows for the
/// duration of a single [`crate::engine::SaturationEngine::perform`] call (see the data model's
/// lifecycle note).
///
/// A concrete implementation wraps the real solver's variable assignment and boolean trail; the
/// [`crate::engine::test_helper::TestEnvironment`] fixture used throughout this crate's tests is a
/// minimal in-memory stand-in.
pub trait Environment {
    /// The committed value of `v`, or `None` if `v` is not (yet) assigned.
    fn value_of(&self, v: PVar) -> Option<Value>;

    /// The boolean trail's assignment of `c`, independent of what `c` evaluates to semantically.
    fn bvalue(&self, c: &SignedConstraint) -> Bvalue;

    /// Evaluates `p` under the current variable assignment; `None` unless every variable `p`
    /// mentions is committed.
    fn try_eval(&self, p: &Pdd) -> Option<Value> {
        p.try_eval(&|v| self.value_of(v))
    }

    /// `true` iff `c` evaluates to true under the current assignment (semantic value, not
    /// `bvalue`).
    fn is_currently_true(&self, c: &SignedConstraint) -> bool {
        c.is_currently_true(&|v| self.value_of(v))
    }

    /// `true` iff `c` evaluates to false under the current assignment.
    fn is_currently_false(&self, c: &SignedConstraint) -> bool {
        c.is_currently_false(&|v| self.value_of(v))
    }

    /// `bvalue(c) = true` OR `c` currently evaluates true (C3's `is_forced_true`).
    fn is_forced_true(&self, c: &SignedConstraint) -> bool {
        self.bvalue(c).is_true() || self.is_currently_true(c)
    }

    /// `bvalue(c) = false` OR `c` currently evaluates false (C3's `is_forced_false`).
    fn is_forced_false(&self, c: &SignedConstraint) -> bool {
        self.bvalue(c).is_false() || self.is_currently_false(c)
    }

    /// The trivial polynomial view of a bare variable, `var2pdd` in the specification's external
    /// interface.
    fn var2pdd(&self, v: PVar) -> Pdd {
        Pdd::var(v)
    }
}
