//! `y_l_ax_and_x_l_z`: chains a bound on `v` through a multiplication, given `y <=⁺ a*v` and an
//! already-true `v <=⁺' z` found elsewhere in the conflict.

use crate::atoms::Inequality;
use crate::atoms::SignedConstraint;
use crate::basic_types::PVar;
use crate::engine::Environment;
use crate::engine::premises;
use crate::engine::Search;
use crate::engine::Conflict;
use crate::engine::SaturationEngine;
use crate::pdd::Pdd;

/// Matches `y <=⁺ a * v` (strict or non-strict) with `a != 1`, and a forced-true `v <=⁺' z`
/// elsewhere in the conflict; given a non-overflow witness for `a * z`, derives `y <=⁺'' a * z`
/// (strict iff either link was strict) — scaling `v` up to `z` can only increase `a * v`, so a
/// strict bound on either link survives into the conclusion.
pub fn try_y_l_ax_and_x_l_z(
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
    let (a, b) = i.rhs().factor_linear(v);
    if b.val() != Some(0) || a.val() == Some(1) {
        return false;
    }
    let y = i.lhs().clone();

    let bound = conflict.constraints().iter().find_map(|c2| {
        let i2 = c2.as_inequality()?;
        if i2.lhs().is_var() != Some(v) {
            return None;
        }
        env.is_forced_true(c2)
            .then(|| (c2.clone(), i2.rhs().clone(), i2.is_strict()))
    });
    let Some((bound_literal, z, bound_strict)) = bound else {
        return false;
    };

    let Some(witness) = premises::is_non_overflow_witness(env, search, &a, &z) else {
        return false;
    };

    let strict = i.is_strict() || bound_strict;
    let consequent = if strict {
        SignedConstraint::ult(y, &a * &z)
    } else {
        SignedConstraint::ule(y, &a * &z)
    };

    engine.emit(
        conflict,
        vec![
            !i.as_signed_constraint(),
            !bound_literal,
            witness.literal,
            consequent,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Bvalue;
    use crate::engine::test_helper::TestEnvironment;
    use crate::engine::EngineConfig;

    fn v(i: u32) -> PVar {
        PVar::new(i, 4)
    }

    #[test]
    fn chains_through_a_forced_true_bound() {
        let x = v(0);
        let a = v(1);
        let y = v(2);
        let z = v(3);
        let mut fixture = TestEnvironment::new();
        fixture.assign(a, 1).assign(z, 5).assign(x, 2);
        let main = SignedConstraint::ult(Pdd::var(y), &Pdd::var(a) * &Pdd::var(x));
        let bound = SignedConstraint::ult(Pdd::var(x), Pdd::var(z));
        fixture.add_constraint(main.clone());
        fixture.add_constraint(bound.clone());
        fixture.set_bvalue(bound, Bvalue::True);

        let mut engine = SaturationEngine::new(EngineConfig::new());
        engine.set_rule("y_l_ax_and_x_l_z");
        let i = main.as_inequality().unwrap();
        let (model, trail, conflict) = fixture.parts();
        assert!(try_y_l_ax_and_x_l_z(&mut engine, model, trail, conflict, x, &i));
    }

    #[test]
    fn chains_two_non_strict_links_into_a_non_strict_conclusion() {
        let x = v(0);
        let a = v(1);
        let y = v(2);
        let z = v(3);
        let mut fixture = TestEnvironment::new();
        fixture.assign(a, 2).assign(z, 5).assign(x, 2);
        let main = SignedConstraint::ule(Pdd::var(y), &Pdd::var(a) * &Pdd::var(x));
        let bound = SignedConstraint::ule(Pdd::var(x), Pdd::var(z));
        fixture.add_constraint(main.clone());
        fixture.add_constraint(bound.clone());
        fixture.set_bvalue(bound, Bvalue::True);

        let mut engine = SaturationEngine::new(EngineConfig::new());
        engine.set_rule("y_l_ax_and_x_l_z");
        let i = main.as_inequality().unwrap();
        let (model, trail, conflict) = fixture.parts();
        assert!(try_y_l_ax_and_x_l_z(&mut engine, model, trail, conflict, x, &i));
        let (tag, clause) = fixture.lemmas().last().unwrap();
        assert_eq!(*tag, "y_l_ax_and_x_l_z");
        assert!(clause
            .literals()
            .iter()
            .any(|lit| *lit == SignedConstraint::ule(Pdd::var(y), &Pdd::var(a) * &Pdd::var(z))));
    }

    #[test]
    fn does_not_fire_when_the_coefficient_is_syntactically_one() {
        let x = v(0);
        let y = v(1);
        let z = v(2);
        let mut fixture = TestEnvironment::new();
        fixture.assign(z, 5).assign(x, 2);
        let main = SignedConstraint::ult(Pdd::var(y), &Pdd::constant(4, 1) * &Pdd::var(x));
        let bound = SignedConstraint::ult(Pdd::var(x), Pdd::var(z));
        fixture.add_constraint(main.clone());
        fixture.add_constraint(bound.clone());
        fixture.set_bvalue(bound, Bvalue::True);

        let mut engine = SaturationEngine::new(EngineConfig::new());
        let i = main.as_inequality().unwrap();
        let (model, trail, conflict) = fixture.parts();
        assert!(!try_y_l_ax_and_x_l_z(&mut engine, model, trail, conflict, x, &i));
    }
}
