//! `mul_bounds`: the umbrella rule for equations of the shape `a*v + b <= y` used as the equality
//! `a*v = 0` (`b` and `y` both forced to `0`). Two independent consequents, tried in turn, plus
//! delegation to [`crate::rules::mul_eq_1`] (a different match shape, `b` forced `-1`) and
//! [`crate::rules::mul_odd`] (the weaker fallback when `a` isn't provably nonzero).

use crate::atoms::Inequality;
use crate::atoms::SignedConstraint;
use crate::basic_types::ceil_div;
use crate::basic_types::mask;
use crate::basic_types::two_to_n;
use crate::basic_types::PVar;
use crate::engine::premises;
use crate::engine::Conflict;
use crate::engine::Environment;
use crate::engine::SaturationEngine;
use crate::engine::Search;
use crate::pdd::Pdd;
use crate::rules::mul_eq_1::try_mul_eq_1;
use crate::rules::mul_odd::try_mul_odd;

pub fn try_mul_bounds(
    engine: &mut SaturationEngine,
    env: &dyn Environment,
    search: &dyn Search,
    conflict: &mut dyn Conflict,
    v: PVar,
    i: &Inequality,
) -> bool {
    if i.is_strict() || i.lhs().degree(v) != 1 {
        return false;
    }
    let (a, b) = i.lhs().factor_linear(v);
    let width = v.width();

    if b.val() == Some(mask(width)) && premises::is_forced_eq(env, i.rhs(), 0) {
        engine.set_rule("mul_eq_1");
        if try_mul_eq_1(engine, env, search, conflict, v, i, &a) {
            return true;
        }
        engine.set_rule("mul_bounds");
    }

    if !premises::is_forced_eq(env, &b, 0) || !premises::is_forced_eq(env, i.rhs(), 0) {
        return false;
    }

    let v_pdd = Pdd::var(v);
    if let (Some(a_ne_0), Some(x_ne_0)) = (
        premises::is_forced_diseq(env, &a, 0),
        premises::is_forced_diseq(env, &v_pdd, 0),
    ) {
        if try_overflow_consequent(engine, env, conflict, i, &a, &v_pdd, &a_ne_0, &x_ne_0) {
            return true;
        }
        if try_trail_bound(engine, env, search, conflict, i, &a, &v_pdd, &a_ne_0, &x_ne_0, width) {
            return true;
        }
    }

    engine.set_rule("mul_odd");
    if try_mul_odd(engine, env, search, conflict, v, i, &a) {
        return true;
    }
    engine.set_rule("mul_bounds");
    false
}

/// Primary consequent: since `a*x` wraps to exactly `0` while neither factor is `0`, at least one
/// of the four sign interpretations of the product must have overflowed — tries each combination
/// in turn, firing on the first whose `umul_ovfl` consequent isn't already forced true.
fn try_overflow_consequent(
    engine: &mut SaturationEngine,
    env: &dyn Environment,
    conflict: &mut dyn Conflict,
    i: &Inequality,
    a: &Pdd,
    x: &Pdd,
    a_ne_0: &SignedConstraint,
    x_ne_0: &SignedConstraint,
) -> bool {
    let neg_a = -a;
    let neg_x = -x;
    let combinations = [(a, x), (a, &neg_x), (&neg_a, x), (&neg_a, &neg_x)];
    for (sa, sx) in combinations {
        let consequent = SignedConstraint::umul_ovfl(sa.clone(), sx.clone());
        if env.is_forced_true(&consequent) {
            continue;
        }
        return engine.propagate(env, conflict, i, &[a_ne_0.clone(), x_ne_0.clone()], consequent);
    }
    false
}

/// Secondary consequent: if the trail bounds one of `{a, -a, x, -x}` above by a constant `k >= 2`
/// (taking `k - 1` for a strict bound), the *other* operand `Y` must be pushed away from zero in
/// both directions — `Y >= ceil(2^K / k)` and `-Y >= ceil(2^K / k)` — since a smaller `k` leaves
/// less room for `Y` to land back on a multiple of `2^K`.
fn try_trail_bound(
    engine: &mut SaturationEngine,
    env: &dyn Environment,
    search: &dyn Search,
    conflict: &mut dyn Conflict,
    i: &Inequality,
    a: &Pdd,
    x: &Pdd,
    a_ne_0: &SignedConstraint,
    x_ne_0: &SignedConstraint,
    width: u32,
) -> bool {
    let neg_a = -a;
    let neg_x = -x;
    let candidates: [(&Pdd, Pdd); 4] = [
        (a, x.clone()),
        (&neg_a, x.clone()),
        (x, a.clone()),
        (&neg_x, a.clone()),
    ];

    for (u, y) in candidates {
        let found = search
            .entries()
            .iter()
            .filter(|entry| entry.is_boolean() && !entry.is_resolved())
            .map(|entry| entry.lit())
            .find_map(|lit| {
                let i2 = lit.as_inequality()?;
                if i2.lhs() != u {
                    return None;
                }
                let k = i2.rhs().val()?;
                Some((lit.clone(), k, i2.is_strict()))
            });
        let Some((bound_lit, k_raw, strict)) = found else {
            continue;
        };
        let k_eff = if strict { k_raw.checked_sub(1) } else { Some(k_raw) };
        let Some(k_eff) = k_eff.filter(|&k| k >= 2) else {
            continue;
        };

        let bound = ceil_div(two_to_n(width), k_eff);
        if bound >= two_to_n(width) {
            continue;
        }
        let neg_y = -&y;
        let criticals = [a_ne_0.clone(), x_ne_0.clone(), bound_lit];

        let lower = SignedConstraint::uge(y, bound);
        if !env.is_forced_true(&lower) {
            return engine.propagate(env, conflict, i, &criticals, lower);
        }
        let neg_lower = SignedConstraint::uge(neg_y, bound);
        if !env.is_forced_true(&neg_lower) {
            return engine.propagate(env, conflict, i, &criticals, neg_lower);
        }
    }
    false
}
