//! The premise oracle (C3): the handful of "is this already known" queries the saturation rules
//! issue against the [`Environment`] and [`Search`] collaborators before committing to a lemma.
//!
//! Every query here is phrased as "forced", meaning true either because the boolean trail already
//! decided it (`bvalue`) or because it follows from the current variable assignment
//! (`is_currently_true`/`false`) — see [`Environment::is_forced_true`] and
//! [`Environment::is_forced_false`].

use crate::atoms::SignedConstraint;
use crate::basic_types::mul_overflows;
use crate::basic_types::Value;
use crate::engine::environment::Environment;
use crate::engine::trail::Search;
use crate::pdd::Pdd;

/// A non-overflow witness literal for `x * y`, together with how strongly it is known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness {
    pub literal: SignedConstraint,
    /// `true` when `literal` is a real trail entry (an `insert`-strength commitment); `false`
    /// when it was synthesised from the semantic check alone (an `insert_eval`-strength one).
    pub on_trail: bool,
}

/// `p` is forced equal to the constant `k`.
pub fn is_forced_eq(env: &dyn Environment, p: &Pdd, k: Value) -> bool {
    env.try_eval(p) == Some(k)
}

/// If `p` is forced different from `k`, the (asserted) literal witnessing it.
pub fn is_forced_diseq(env: &dyn Environment, p: &Pdd, k: Value) -> Option<SignedConstraint> {
    let c = SignedConstraint::eq_k(p.clone(), k);
    env.is_forced_false(&c).then_some(!c)
}

/// If `p` is forced odd, the literal witnessing it.
pub fn is_forced_odd(env: &dyn Environment, p: &Pdd) -> Option<SignedConstraint> {
    let c = SignedConstraint::odd(p.clone());
    env.is_forced_true(&c).then_some(c)
}

/// If `p` is forced even, the literal witnessing it.
pub fn is_forced_even(env: &dyn Environment, p: &Pdd) -> Option<SignedConstraint> {
    let c = SignedConstraint::even(p.clone());
    env.is_forced_true(&c).then_some(c)
}

/// The semantic half of the non-overflow check: `true` when both `x` and `y` are assigned and
/// their product does not overflow `x`'s width.
pub fn is_non_overflow(env: &dyn Environment, x: &Pdd, y: &Pdd) -> bool {
    match (env.try_eval(x), env.try_eval(y)) {
        (Some(a), Some(b)) => !mul_overflows(a, b, x.width()),
        _ => false,
    }
}

/// Finds a witness `Omega*(x, y)` that `x * y` does not overflow: first the semantic check
/// ([`is_non_overflow`]); failing that, a scan of the unresolved boolean trail entries for a
/// negated `umul_ovfl(p, q)` literal with `{p, q} = {x, y}`.
pub fn is_non_overflow_witness(
    env: &dyn Environment,
    search: &dyn Search,
    x: &Pdd,
    y: &Pdd,
) -> Option<Witness> {
    if is_non_overflow(env, x, y) {
        return Some(Witness {
            literal: !SignedConstraint::umul_ovfl(x.clone(), y.clone()),
            on_trail: false,
        });
    }
    search
        .entries()
        .iter()
        .filter(|entry| entry.is_boolean() && !entry.is_resolved())
        .map(|entry| entry.lit())
        .find(|lit| lit.is_non_overflow_witness() && lit.is_umul_ovfl_of(x, y))
        .cloned()
        .map(|literal| Witness { literal, on_trail: true })
}
