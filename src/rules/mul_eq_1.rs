//! `mul_eq_1`: solves `a*v = 1` for whichever of `a`, `v` is a forced odd constant, propagating the
//! other as its modular inverse (the units of `Z/2^width` are exactly the odd residues). Invoked
//! as a sub-case of [`crate::rules::mul_bounds`], not dispatched directly by the rule engine.

use crate::atoms::Inequality;
use crate::atoms::SignedConstraint;
use crate::basic_types::inv_mod_pow2;
use crate::basic_types::PVar;
use crate::engine::Environment;
use crate::engine::Search;
use crate::engine::Conflict;
use crate::engine::SaturationEngine;
use crate::pdd::Pdd;

/// Given `i` already known to have the shape `a*v - 1 <= 0`, with `y = 0` factored out by the
/// caller, tries `a` forced to an odd constant first (propagating `v`'s exact value), then the
/// symmetric case of `v` forced to an odd constant (propagating `a`'s exact value).
pub fn try_mul_eq_1(
    engine: &mut SaturationEngine,
    env: &dyn Environment,
    _search: &dyn Search,
    conflict: &mut dyn Conflict,
    v: PVar,
    i: &Inequality,
    a: &Pdd,
) -> bool {
    if let Some(k_a) = env.try_eval(a) {
        if k_a & 1 == 1 {
            let a_eq_k = SignedConstraint::eq_k(a.clone(), k_a);
            let v_value = inv_mod_pow2(k_a, v.width());
            let consequent = SignedConstraint::eq_k(Pdd::var(v), v_value);
            return engine.propagate(env, conflict, i, &[a_eq_k], consequent);
        }
    }

    let v_pdd = Pdd::var(v);
    let Some(k_v) = env.try_eval(&v_pdd) else {
        return false;
    };
    if k_v & 1 == 0 {
        return false;
    }
    let v_eq_k = SignedConstraint::eq_k(v_pdd, k_v);
    let a_value = inv_mod_pow2(k_v, v.width());
    let consequent = SignedConstraint::eq_k(a.clone(), a_value);
    engine.propagate(env, conflict, i, &[v_eq_k], consequent)
}
