//! `mul_odd`: a weaker sibling of [`crate::rules::mul_bounds`] — fires even when `a` is merely
//! not provably zero (rather than provably nonzero), deriving parity rather than an exact bound.
//! Invoked as a sub-case of `mul_bounds`, not dispatched directly by the rule engine.

use crate::atoms::Inequality;
use crate::atoms::SignedConstraint;
use crate::basic_types::PVar;
use crate::engine::Environment;
use crate::engine::premises;
use crate::engine::Search;
use crate::engine::Conflict;
use crate::engine::SaturationEngine;
use crate::pdd::Pdd;

/// Given `i` already known to have the shape `a*v <= 0` (i.e. `a*v = 0`), with `a` not forced
/// equal to `0`, propagates `even(v)`: a nonzero-ish `a` still has at least one factor of `2`
/// unaccounted for unless `v` supplies it. (The specification's further "also propagate
/// `even(a)`" refinement, which applies when `v` is additionally forced nonzero, is left for a
/// future rule: the engine only commits to one consequent per firing.)
pub fn try_mul_odd(
    engine: &mut SaturationEngine,
    env: &dyn Environment,
    _search: &dyn Search,
    conflict: &mut dyn Conflict,
    v: PVar,
    i: &Inequality,
    a: &Pdd,
) -> bool {
    if premises::is_forced_eq(env, a, 0) {
        return false;
    }
    let v_pdd = Pdd::var(v);
    let consequent = SignedConstraint::even(v_pdd);
    if env.is_forced_true(&consequent) {
        return false;
    }
    engine.propagate(env, conflict, i, &[], consequent)
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
    fn propagates_evenness_when_a_is_not_forced_zero() {
        let x = v(0);
        let a = v(1);
        let mut fixture = TestEnvironment::new();
        let c = SignedConstraint::ule(&Pdd::var(a) * &Pdd::var(x), Pdd::zero(4));
        fixture.add_constraint(c.clone());
        let mut engine = SaturationEngine::new(EngineConfig::new());
        engine.set_rule("mul_odd");
        let i = c.as_inequality().unwrap();
        let (model, trail, conflict) = fixture.parts();
        assert!(try_mul_odd(&mut engine, model, trail, conflict, x, &i, &Pdd::var(a)));
    }
}
