//! `parity`: matches the same `a*v + b <= y` shape as [`crate::rules::mul_bounds`], with `y` forced
//! `0` (the matched equation is `a*v = -b`). Derives parity facts between the three operands in
//! either direction, trying each of the four sub-cases below in turn and firing on the first whose
//! consequent is not already forced true.

use crate::atoms::Inequality;
use crate::atoms::SignedConstraint;
use crate::basic_types::PVar;
use crate::engine::premises;
use crate::engine::Environment;
use crate::engine::Search;
use crate::engine::Conflict;
use crate::engine::SaturationEngine;
use crate::pdd::Pdd;

/// The largest `k` such that `parity(p, k)` is currently true: `p`'s trailing zero count (capped
/// at its width) when `p` is fully assigned, `width` when it evaluates to exactly `0`, or `0` when
/// `p` isn't fully assigned — there's no partial-assignment bit analysis available below the
/// polynomial adapter's `try_eval`.
fn max_confirmed_parity(env: &dyn Environment, p: &Pdd) -> u32 {
    match env.try_eval(p) {
        Some(0) => p.width(),
        Some(k) => k.trailing_zeros().min(p.width()),
        None => 0,
    }
}

pub fn try_parity(
    engine: &mut SaturationEngine,
    env: &dyn Environment,
    _search: &dyn Search,
    conflict: &mut dyn Conflict,
    v: PVar,
    i: &Inequality,
) -> bool {
    if i.is_strict() || i.lhs().degree(v) != 1 {
        return false;
    }
    let (a, b) = i.lhs().factor_linear(v);
    if env.try_eval(i.rhs()) != Some(0) {
        return false;
    }
    let x = Pdd::var(v);

    // Case 1: a and x both currently odd => odd(b).
    if let (Some(k_a), Some(k_x)) = (env.try_eval(&a), env.try_eval(&x)) {
        if k_a & 1 == 1 && k_x & 1 == 1 {
            let consequent = SignedConstraint::odd(b.clone());
            if !env.is_forced_true(&consequent) {
                let a_odd = SignedConstraint::odd(a.clone());
                let x_odd = SignedConstraint::odd(x.clone());
                return engine.propagate(env, conflict, i, &[a_odd, x_odd], consequent);
            }
        }
    }

    // Case 2: b currently odd => odd(a), then (if that's already known) odd(x).
    if let Some(k_b) = env.try_eval(&b) {
        if k_b & 1 == 1 {
            let b_odd = SignedConstraint::odd(b.clone());
            let a_consequent = SignedConstraint::odd(a.clone());
            if !env.is_forced_true(&a_consequent) {
                return engine.propagate(env, conflict, i, &[b_odd], a_consequent);
            }
            let x_consequent = SignedConstraint::odd(x.clone());
            if !env.is_forced_true(&x_consequent) {
                return engine.propagate(env, conflict, i, &[b_odd], x_consequent);
            }
        }
    }

    // Case 3: both operands forced nonzero and at least one carries a confirmed factor of 2 =>
    // their combined parity transfers onto b.
    if let (Some(a_ne_0), Some(x_ne_0)) = (
        premises::is_forced_diseq(env, &a, 0),
        premises::is_forced_diseq(env, &x, 0),
    ) {
        let pa = max_confirmed_parity(env, &a);
        let px = max_confirmed_parity(env, &x);
        if pa >= 1 || px >= 1 {
            let k = (pa + px).min(v.width());
            let consequent = SignedConstraint::parity(b.clone(), k);
            if !env.is_forced_true(&consequent) {
                return engine.propagate(env, conflict, i, &[a_ne_0, x_ne_0], consequent);
            }
        }
    }

    // Case 4: b is known not to carry a full pb-bit factor of 2 => that bound can't land
    // entirely on one of a, x either.
    if !premises::is_forced_eq(env, &b, 0) {
        if let Some(k_b) = env.try_eval(&b) {
            if k_b != 0 {
                let pb = k_b.trailing_zeros().min(v.width()) + 1;
                let b_eq_k = SignedConstraint::eq_k(b.clone(), k_b);
                if let Some(fired) = try_back_propagate(engine, env, conflict, i, &a, &x, pb, &b_eq_k) {
                    return fired;
                }
                if let Some(fired) = try_back_propagate(engine, env, conflict, i, &x, &a, pb, &b_eq_k) {
                    return fired;
                }
            }
        }
    }

    false
}

/// One direction of case 4: propagates `!parity(p, pb)` directly, or, for each confirmed
/// `parity(q, k)` with `k < pb`, the sharper `!parity(p, pb - k)`. Returns `None` when nothing in
/// this direction fires, so the caller can try the symmetric direction with `p`/`q` swapped.
fn try_back_propagate(
    engine: &mut SaturationEngine,
    env: &dyn Environment,
    conflict: &mut dyn Conflict,
    i: &Inequality,
    p: &Pdd,
    q: &Pdd,
    pb: u32,
    b_eq_k: &SignedConstraint,
) -> Option<bool> {
    let direct = !SignedConstraint::parity(p.clone(), pb);
    if !env.is_forced_true(&direct) {
        return Some(engine.propagate(env, conflict, i, &[b_eq_k.clone()], direct));
    }
    for k in 1..pb {
        let premise = SignedConstraint::parity(q.clone(), k);
        if !env.is_forced_true(&premise) {
            continue;
        }
        let sharper = !SignedConstraint::parity(p.clone(), pb - k);
        if !env.is_forced_true(&sharper) {
            return Some(engine.propagate(env, conflict, i, &[b_eq_k.clone(), premise], sharper));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_helper::TestEnvironment;
    use crate::engine::EngineConfig;

    fn v(i: u32) -> PVar {
        PVar::new(i, 4)
    }

    #[test]
    fn both_factors_odd_forces_the_remainder_odd() {
        let x = v(0);
        let a_var = v(1);
        let mut fixture = TestEnvironment::new();
        fixture.assign(x, 3).assign(a_var, 5);
        let a = Pdd::var(a_var);
        let b = Pdd::var(v(2));
        let lhs = &(&a * &Pdd::var(x)) + &b;
        let c = SignedConstraint::ule(lhs, Pdd::zero(4));
        fixture.add_constraint(c.clone());
        let mut engine = SaturationEngine::new(EngineConfig::new());
        engine.set_rule("parity");
        let i = c.as_inequality().unwrap();
        let (model, trail, conflict) = fixture.parts();
        assert!(try_parity(&mut engine, model, trail, conflict, x, &i));
        let (tag, clause) = fixture.lemmas().last().unwrap();
        assert_eq!(*tag, "parity");
        assert!(clause
            .literals()
            .iter()
            .any(|lit| *lit == SignedConstraint::odd(b.clone())));
    }

    #[test]
    fn an_odd_remainder_forces_the_coefficient_odd() {
        let x = v(0);
        let a_var = v(1);
        let mut fixture = TestEnvironment::new();
        fixture.assign(v(2), 7); // b = 7, odd
        let a = Pdd::var(a_var);
        let b = Pdd::var(v(2));
        let lhs = &(&a * &Pdd::var(x)) + &b;
        let c = SignedConstraint::ule(lhs, Pdd::zero(4));
        fixture.add_constraint(c.clone());
        let mut engine = SaturationEngine::new(EngineConfig::new());
        engine.set_rule("parity");
        let i = c.as_inequality().unwrap();
        let (model, trail, conflict) = fixture.parts();
        assert!(try_parity(&mut engine, model, trail, conflict, x, &i));
        let (tag, clause) = fixture.lemmas().last().unwrap();
        assert_eq!(*tag, "parity");
        assert!(clause
            .literals()
            .iter()
            .any(|lit| *lit == SignedConstraint::odd(a.clone())));
    }

    #[test]
    fn combines_confirmed_parities_of_a_and_x_onto_the_remainder() {
        let x = v(0);
        let mut fixture = TestEnvironment::new();
        let a = Pdd::constant(4, 4); // tz(4) = 2, and a != 0 syntactically
        let b = Pdd::var(v(2));
        fixture.assign(x, 2); // tz(2) = 1, and x != 0
        let lhs = &(&a * &Pdd::var(x)) + &b;
        let c = SignedConstraint::ule(lhs, Pdd::zero(4));
        fixture.add_constraint(c.clone());
        let mut engine = SaturationEngine::new(EngineConfig::new());
        engine.set_rule("parity");
        let i = c.as_inequality().unwrap();
        let (model, trail, conflict) = fixture.parts();
        assert!(try_parity(&mut engine, model, trail, conflict, x, &i));
        let (tag, clause) = fixture.lemmas().last().unwrap();
        assert_eq!(*tag, "parity");
        assert!(clause
            .literals()
            .iter()
            .any(|lit| *lit == SignedConstraint::parity(b.clone(), 3)));
    }

    #[test]
    fn back_propagates_a_negative_parity_bound_onto_the_coefficient() {
        // a*x + b <= 0 with b = 6 (tz = 1, so pb = 2, the smallest bound at which b's parity
        // fails): a can't also have parity(a, 2), since a*x = -b and b doesn't go that far.
        let x = v(0);
        let a_var = v(1);
        let mut fixture = TestEnvironment::new();
        fixture.assign(v(2), 6);
        let a = Pdd::var(a_var);
        let b = Pdd::var(v(2));
        let lhs = &(&a * &Pdd::var(x)) + &b;
        let c = SignedConstraint::ule(lhs, Pdd::zero(4));
        fixture.add_constraint(c.clone());
        let mut engine = SaturationEngine::new(EngineConfig::new());
        engine.set_rule("parity");
        let i = c.as_inequality().unwrap();
        let (model, trail, conflict) = fixture.parts();
        assert!(try_parity(&mut engine, model, trail, conflict, x, &i));
        let (tag, clause) = fixture.lemmas().last().unwrap();
        assert_eq!(*tag, "parity");
        assert!(clause
            .literals()
            .iter()
            .any(|lit| *lit == !SignedConstraint::parity(a.clone(), 2)));
    }
}
