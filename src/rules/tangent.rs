//! `tangent`: the fallback rule for an inequality that is nonlinear in `v` but currently violated
//! under the committed model — pins one side to its evaluated value and lets the other move,
//! producing a lemma that contradicts that pinning rather than reasoning about the nonlinear
//! shape directly.

use crate::atoms::Inequality;
use crate::atoms::SignedConstraint;
use crate::basic_types::PVar;
use crate::engine::Environment;
use crate::engine::Search;
use crate::engine::Conflict;
use crate::engine::SaturationEngine;
use crate::pdd::Pdd;

/// Matches any `<=` or `<` inequality `c` whose `lhs` and `rhs` are both non-constant and at least
/// one of them is non-linear in `v`. Evaluates both sides under the current model (`l = eval(lhs)`,
/// `r = eval(rhs)`) and derives:
/// - for non-strict `c` with `l > r`: `!c \/ !(rhs <= r) \/ (lhs <= r)`.
/// - for strict `c` with `l >= r`: `!c \/ !(l <= lhs) \/ (r < rhs)`.
///
/// Skips firing when the side literal introduced into the lemma is already forced false, which
/// would make the lemma a tautology.
pub fn try_tangent(
    engine: &mut SaturationEngine,
    env: &dyn Environment,
    _search: &dyn Search,
    conflict: &mut dyn Conflict,
    v: PVar,
    i: &Inequality,
) -> bool {
    let lhs = i.lhs();
    let rhs = i.rhs();
    if lhs.is_val() || rhs.is_val() {
        return false;
    }
    if lhs.degree(v) < 2 && rhs.degree(v) < 2 {
        return false;
    }
    let Some(l) = env.try_eval(lhs) else {
        return false;
    };
    let Some(r) = env.try_eval(rhs) else {
        return false;
    };
    let width = v.width();

    if !i.is_strict() {
        if l <= r {
            return false;
        }
        let side = SignedConstraint::ule(rhs.clone(), Pdd::constant(width, r));
        if env.is_forced_false(&side) {
            return false;
        }
        let conclusion = SignedConstraint::ule(lhs.clone(), Pdd::constant(width, r));
        engine.emit(conflict, vec![!i.as_signed_constraint(), !side, conclusion])
    } else {
        if l < r {
            return false;
        }
        let side = SignedConstraint::ule(Pdd::constant(width, l), lhs.clone());
        if env.is_forced_false(&side) {
            return false;
        }
        let conclusion = SignedConstraint::ult(Pdd::constant(width, r), rhs.clone());
        engine.emit(conflict, vec![!i.as_signed_constraint(), !side, conclusion])
    }
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
    fn derives_a_bound_lemma_for_a_violated_non_strict_square() {
        // x*x <= y with model {x=3, y=5}: 9 <= 5 is currently false (l=9 > r=5).
        let x = v(0);
        let y = v(1);
        let mut fixture = TestEnvironment::new();
        fixture.assign(x, 3).assign(y, 5);
        let lhs = &Pdd::var(x) * &Pdd::var(x);
        let c = SignedConstraint::ule(lhs, Pdd::var(y));
        fixture.add_constraint(c.clone());
        let mut engine = SaturationEngine::new(EngineConfig::new());
        engine.set_rule("tangent");
        let i = c.as_inequality().unwrap();
        let (model, trail, conflict) = fixture.parts();
        assert!(try_tangent(&mut engine, model, trail, conflict, x, &i));
        let (tag, clause) = fixture.lemmas().last().unwrap();
        assert_eq!(*tag, "tangent");
        assert!(clause.literals().iter().any(|lit| {
            *lit == SignedConstraint::ule(&Pdd::var(x) * &Pdd::var(x), Pdd::constant(4, 5))
        }));
    }

    #[test]
    fn does_not_fire_on_an_already_linear_term() {
        let x = v(0);
        let mut fixture = TestEnvironment::new();
        fixture.assign(x, 2);
        let c = SignedConstraint::ule(Pdd::var(x), Pdd::constant(4, 7));
        fixture.add_constraint(c.clone());
        let mut engine = SaturationEngine::new(EngineConfig::new());
        let i = c.as_inequality().unwrap();
        let (model, trail, conflict) = fixture.parts();
        assert!(!try_tangent(&mut engine, model, trail, conflict, x, &i));
    }

    #[test]
    fn does_not_fire_when_the_inequality_already_holds() {
        // x*x <= y with model {x=2, y=5}: 4 <= 5 already holds (l <= r), nothing to derive.
        let x = v(0);
        let y = v(1);
        let mut fixture = TestEnvironment::new();
        fixture.assign(x, 2).assign(y, 5);
        let lhs = &Pdd::var(x) * &Pdd::var(x);
        let c = SignedConstraint::ule(lhs, Pdd::var(y));
        fixture.add_constraint(c.clone());
        let mut engine = SaturationEngine::new(EngineConfig::new());
        let i = c.as_inequality().unwrap();
        let (model, trail, conflict) = fixture.parts();
        assert!(!try_tangent(&mut engine, model, trail, conflict, x, &i));
    }
}
