//! `ugt_x`: cancels a shared non-overflowing factor from both sides of a product inequality.

use crate::atoms::Inequality;
use crate::atoms::SignedConstraint;
use crate::basic_types::PVar;
use crate::engine::Environment;
use crate::engine::premises;
use crate::engine::Search;
use crate::engine::Conflict;
use crate::engine::SaturationEngine;
use crate::pdd::Pdd;

/// Matches `y * v <= z * v` (or the strict form) and, given a non-overflow witness for `v * y`,
/// derives `v = 0 \/ y <= z` (dropping the `v = 0` disjunct in the strict case, since `v = 0`
/// makes both sides `0` and a strict `<` can never hold there).
pub fn try_ugt_x(
    engine: &mut SaturationEngine,
    env: &dyn Environment,
    search: &dyn Search,
    conflict: &mut dyn Conflict,
    v: PVar,
    i: &Inequality,
) -> bool {
    if i.lhs().degree(v) != 1 || i.rhs().degree(v) != 1 {
        return false;
    }
    let (y, b_lhs) = i.lhs().factor_linear(v);
    let (z, b_rhs) = i.rhs().factor_linear(v);
    if b_lhs.val() != Some(0) || b_rhs.val() != Some(0) {
        return false;
    }

    let v_pdd = Pdd::var(v);
    if !i.is_strict() && premises::is_forced_eq(env, &v_pdd, 0) {
        // v = 0 is already known, so the v = 0 disjunct would be redundant.
        return false;
    }
    let Some(witness) = premises::is_non_overflow_witness(env, search, &v_pdd, &y) else {
        return false;
    };

    let mut literals = vec![!i.as_signed_constraint(), witness.literal];
    if !i.is_strict() {
        literals.push(SignedConstraint::eq(v_pdd));
    }
    literals.push(if i.is_strict() {
        SignedConstraint::ult(y, z)
    } else {
        SignedConstraint::ule(y, z)
    });
    engine.emit(conflict, literals)
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
    fn cancels_a_nonoverflowing_shared_factor() {
        let x = v(0);
        let y = v(1);
        let z = v(2);
        let mut fixture = TestEnvironment::new();
        fixture.assign(x, 3).assign(y, 2).assign(z, 1);
        let c = SignedConstraint::ule(&Pdd::var(y) * &Pdd::var(x), &Pdd::var(z) * &Pdd::var(x));
        fixture.add_constraint(c);

        let mut engine = SaturationEngine::new(EngineConfig::new());
        engine.set_rule("ugt_x");
        let (model, trail, conflict) = fixture.parts();
        let i = conflict.constraints()[0].as_inequality().unwrap();
        assert!(try_ugt_x(&mut engine, model, trail, conflict, x, &i));
        assert_eq!(conflict.constraints().len(), 1);
    }

    #[test]
    fn does_not_fire_non_strict_when_v_is_already_forced_zero() {
        let x = v(0);
        let y = v(1);
        let z = v(2);
        let mut fixture = TestEnvironment::new();
        fixture.assign(x, 0).assign(y, 2).assign(z, 1);
        let c = SignedConstraint::ule(&Pdd::var(y) * &Pdd::var(x), &Pdd::var(z) * &Pdd::var(x));
        fixture.add_constraint(c.clone());
        let mut engine = SaturationEngine::new(EngineConfig::new());
        engine.set_rule("ugt_x");
        let (model, trail, conflict) = fixture.parts();
        let i = c.as_inequality().unwrap();
        assert!(!try_ugt_x(&mut engine, model, trail, conflict, x, &i));
    }

    #[test]
    fn does_not_fire_when_the_sides_do_not_share_a_linear_factor_in_v() {
        let x = v(0);
        let y = v(1);
        let fixture_lhs = &Pdd::var(y) + &Pdd::var(x);
        let i = SignedConstraint::ule(fixture_lhs, Pdd::var(x))
            .as_inequality()
            .unwrap();
        let mut engine = SaturationEngine::new(EngineConfig::new());
        let mut fixture = TestEnvironment::new();
        let (model, trail, conflict) = fixture.parts();
        assert!(!try_ugt_x(&mut engine, model, trail, conflict, x, &i));
    }
}
