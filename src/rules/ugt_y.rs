//! `ugt_y`: like [`crate::rules::ugt_x`], but bridges through a second, already-true inequality
//! found in the conflict to reconstruct the shared-factor shape on the left-hand side.

use crate::atoms::Inequality;
use crate::atoms::SignedConstraint;
use crate::basic_types::PVar;
use crate::engine::Environment;
use crate::engine::premises;
use crate::engine::Search;
use crate::engine::Conflict;
use crate::engine::SaturationEngine;
use crate::pdd::Pdd;

/// Matches `y * v <=⁺ z` (strict or non-strict) where `z` is not itself a multiple of `v`, but
/// another constraint in the conflict already forces `z <=⁺' w * v` for some `w`. Chains the two
/// into `y * v <=⁺'' w * v` (strict iff either link was strict) and, given a non-overflow witness
/// for `v * y`, derives `v = 0 \/ y <=⁺'' w`.
pub fn try_ugt_y(
    engine: &mut SaturationEngine,
    env: &dyn Environment,
    search: &dyn Search,
    conflict: &mut dyn Conflict,
    v: PVar,
    i: &Inequality,
) -> bool {
    if i.lhs().degree(v) != 1 {
        return false;
    }
    let (y, b) = i.lhs().factor_linear(v);
    if b.val() != Some(0) {
        return false;
    }

    let bridge = conflict.constraints().iter().find_map(|c2| {
        let i2 = c2.as_inequality()?;
        if i2.rhs().degree(v) != 1 || !env.is_forced_true(c2) {
            return None;
        }
        let (w, b2) = i2.rhs().factor_linear(v);
        if b2.val() != Some(0) || i2.lhs() != i.rhs() {
            return None;
        }
        Some((c2.clone(), w, i2.is_strict()))
    });
    let Some((bridge_literal, w, bridge_strict)) = bridge else {
        return false;
    };

    let v_pdd = Pdd::var(v);
    let Some(witness) = premises::is_non_overflow_witness(env, search, &v_pdd, &y) else {
        return false;
    };

    let strict = i.is_strict() || bridge_strict;
    let consequent = if strict {
        SignedConstraint::ult(y, w)
    } else {
        SignedConstraint::ule(y, w)
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
    fn does_not_fire_without_a_bridging_constraint() {
        let x = v(0);
        let y = v(1);
        let z = v(2);
        let i = SignedConstraint::ule(&Pdd::var(y) * &Pdd::var(x), Pdd::var(z))
            .as_inequality()
            .unwrap();
        let mut engine = SaturationEngine::new(EngineConfig::new());
        let mut fixture = TestEnvironment::new();
        let (model, trail, conflict) = fixture.parts();
        assert!(!try_ugt_y(&mut engine, model, trail, conflict, x, &i));
    }

    #[test]
    fn chains_a_strict_bridge_into_a_strict_conclusion() {
        let x = v(0);
        let y = v(1);
        let z = v(2);
        let w = v(3);
        let mut fixture = TestEnvironment::new();
        fixture.assign(x, 1).assign(y, 1).assign(w, 3);
        let main = SignedConstraint::ule(&Pdd::var(y) * &Pdd::var(x), Pdd::var(z));
        let bridge = SignedConstraint::ult(Pdd::var(z), &Pdd::var(w) * &Pdd::var(x));
        fixture.add_constraint(main.clone());
        fixture.add_constraint(bridge.clone());
        fixture.set_bvalue(bridge, Bvalue::True);

        let mut engine = SaturationEngine::new(EngineConfig::new());
        engine.set_rule("ugt_y");
        let i = main.as_inequality().unwrap();
        let (model, trail, conflict) = fixture.parts();
        assert!(try_ugt_y(&mut engine, model, trail, conflict, x, &i));
        let (tag, clause) = fixture.lemmas().last().unwrap();
        assert_eq!(*tag, "ugt_y");
        assert!(clause
            .literals()
            .iter()
            .any(|lit| *lit == SignedConstraint::ult(Pdd::var(y), Pdd::var(w))));
    }
}
