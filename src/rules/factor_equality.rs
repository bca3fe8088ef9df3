//! `factor_equality`: reserved slot in the fixed rule order.
//!
//! A complete factor-equality rule would recognise `a*x <= a*y` and derive `x <= y` whenever `a`
//! is forced nonzero, independent of overflow (factoring out a common literal multiplier is valid
//! without an `Ω*` witness, unlike [`crate::rules::ugt_x`]'s variable-times-variable case). That
//! requires matching two independent linear factorisations and is intentionally left unimplemented
//! here; the slot always declines so the fixed rule order stays stable if it is filled in later.

use crate::atoms::Inequality;
use crate::basic_types::PVar;
use crate::engine::Environment;
use crate::engine::Search;
use crate::engine::Conflict;
use crate::engine::SaturationEngine;

pub fn try_factor_equality(
    _engine: &mut SaturationEngine,
    _env: &dyn Environment,
    _search: &dyn Search,
    _conflict: &mut dyn Conflict,
    _v: PVar,
    _i: &Inequality,
) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::SignedConstraint;
    use crate::engine::test_helper::TestEnvironment;
    use crate::engine::EngineConfig;
    use crate::pdd::Pdd;

    #[test]
    fn never_fires() {
        let x = PVar::new(0, 4);
        let c = SignedConstraint::ule(Pdd::var(x), Pdd::var(x));
        let i = c.as_inequality().unwrap();
        let mut engine = SaturationEngine::new(EngineConfig::new());
        let mut fixture = TestEnvironment::new();
        let (model, trail, conflict) = fixture.parts();
        assert!(!try_factor_equality(&mut engine, model, trail, conflict, x, &i));
    }
}
