//! `ugt_z`: the mirror of [`crate::rules::ugt_y`] — the matched inequality's right-hand side is
//! the product of `v`, and the bridge is found on the left.

use crate::atoms::Inequality;
use crate::atoms::SignedConstraint;
use crate::basic_types::PVar;
use crate::engine::Environment;
use crate::engine::premises;
use crate::engine::Search;
use crate::engine::Conflict;
use crate::engine::SaturationEngine;
use crate::pdd::Pdd;

/// Matches `y <=⁺ z * v` (strict or non-strict) where another constraint in the conflict already
/// forces `w * v <=⁺' y` for some `w`. Chains the two into `w * v <=⁺'' z * v` (strict iff either
/// link was strict) and, given a non-overflow witness for `v * z`, derives `v = 0 \/ w <=⁺'' z`.
pub fn try_ugt_z(
    engine: &mut SaturationEngine,
    env: &dyn Environment,
    search: &dyn Search,
    conflict: &mut dyn Conflict,
    v: PVar,
    i: &Inequality,
) -> bool {
    if i.rhs().degree(v) != 1 {
        return false;
    }
    let (z, b) = i.rhs().factor_linear(v);
    if b.val() != Some(0) {
        return false;
    }

    let bridge = conflict.constraints().iter().find_map(|c2| {
        let i2 = c2.as_inequality()?;
        if i2.lhs().degree(v) != 1 || !env.is_forced_true(c2) {
            return None;
        }
        let (w, b2) = i2.lhs().factor_linear(v);
        if b2.val() != Some(0) || i2.rhs() != i.lhs() {
            return None;
        }
        Some((c2.clone(), w, i2.is_strict()))
    });
    let Some((bridge_literal, w, bridge_strict)) = bridge else {
        return false;
    };

    let v_pdd = Pdd::var(v);
    let Some(witness) = premises::is_non_overflow_witness(env, search, &v_pdd, &z) else {
        return false;
    };

    let strict = i.is_strict() || bridge_strict;
    let consequent = if strict {
        SignedConstraint::ult(w, z)
    } else {
        SignedConstraint::ule(w, z)
    };

    engine.emit(
        conflict,
        vec![
            !i.as_signed_constraint(),
            !bridge_literal,
            witness.literal,
            SignedConstraint::eq(v_pdd),
            consequent,
        ],
    )
}
