use thiserror::Error;

/// The fixed set of saturation rules the engine can dispatch (C6/C7), used as the alphabet for
/// [`EngineConfig::rule_order`] and as the tag recorded with every emitted lemma.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleId {
    MulBounds,
    Parity,
    FactorEquality,
    UgtX,
    UgtY,
    UgtZ,
    YLAxAndXLZ,
    Tangent,
}

impl RuleId {
    /// The fixed default order the specification's rule engine tries rules in.
    pub const DEFAULT_ORDER: [RuleId; 8] = [
        RuleId::MulBounds,
        RuleId::Parity,
        RuleId::FactorEquality,
        RuleId::UgtX,
        RuleId::UgtY,
        RuleId::UgtZ,
        RuleId::YLAxAndXLZ,
        RuleId::Tangent,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            RuleId::MulBounds => "mul_bounds",
            RuleId::Parity => "parity",
            RuleId::FactorEquality => "factor_equality",
            RuleId::UgtX => "ugt_x",
            RuleId::UgtY => "ugt_y",
            RuleId::UgtZ => "ugt_z",
            RuleId::YLAxAndXLZ => "y_l_ax_and_x_l_z",
            RuleId::Tangent => "tangent",
        }
    }
}

/// How aggressively the engine re-checks its own premises with [`crate::polysat_assert_moderate`]
/// and friends, independent of the crate-wide `debug-checks` feature (which always forces
/// [`AssertLevel::Extreme`], matching the assert ladder in [`crate::asserts`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AssertLevel {
    Simple,
    #[default]
    Moderate,
    Advanced,
    Extreme,
}

/// The engine's construction-time configuration: the assertion level to run at, and an optional
/// override of the fixed rule order (for testing a single rule in isolation, or for deliberately
/// probing rule-interaction effects).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    assert_level: AssertLevel,
    rule_order: Vec<RuleId>,
}

/// Errors validating an [`EngineConfig`]'s `rule_order` override.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineConfigError {
    #[error("rule_order has {given} entries, expected a permutation of all {expected} rules")]
    NotAPermutation { given: usize, expected: usize },
    #[error("rule_order lists {0:?} more than once")]
    DuplicateRule(RuleId),
}

impl EngineConfig {
    /// The default configuration: [`AssertLevel::Moderate`], default rule order.
    pub fn new() -> Self {
        EngineConfig {
            assert_level: AssertLevel::default(),
            rule_order: RuleId::DEFAULT_ORDER.to_vec(),
        }
    }

    pub fn with_assert_level(mut self, level: AssertLevel) -> Self {
        self.assert_level = level;
        self
    }

    /// Overrides the rule order. `order` must be a permutation of [`RuleId::DEFAULT_ORDER`];
    /// anything else is rejected rather than silently reordered or truncated.
    pub fn with_rule_order(mut self, order: Vec<RuleId>) -> Result<Self, EngineConfigError> {
        if order.len() != RuleId::DEFAULT_ORDER.len() {
            return Err(EngineConfigError::NotAPermutation {
                given: order.len(),
                expected: RuleId::DEFAULT_ORDER.len(),
            });
        }
        let mut seen = Vec::with_capacity(order.len());
        for rule in &order {
            if seen.contains(rule) {
                return Err(EngineConfigError::DuplicateRule(*rule));
            }
            seen.push(*rule);
        }
        self.rule_order = order;
        Ok(self)
    }

    pub fn assert_level(&self) -> AssertLevel {
        self.assert_level
    }

    pub fn rule_order(&self) -> &[RuleId] {
        &self.rule_order
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rule_order_matches_the_fixed_specification_order() {
        let config = EngineConfig::new();
        assert_eq!(config.rule_order(), &RuleId::DEFAULT_ORDER);
    }

    #[test]
    fn rejects_a_short_rule_order() {
        let err = EngineConfig::new()
            .with_rule_order(vec![RuleId::MulBounds])
            .unwrap_err();
        assert_eq!(
            err,
            EngineConfigError::NotAPermutation { given: 1, expected: 8 }
        );
    }

    #[test]
    fn rejects_a_duplicate_rule() {
        let mut order = RuleId::DEFAULT_ORDER.to_vec();
        order[7] = RuleId::MulBounds;
        let err = EngineConfig::new().with_rule_order(order).unwrap_err();
        assert_eq!(err, EngineConfigError::DuplicateRule(RuleId::MulBounds));
    }

    #[test]
    fn accepts_a_genuine_permutation() {
        let mut order = RuleId::DEFAULT_ORDER.to_vec();
        order.reverse();
        assert!(EngineConfig::new().with_rule_order(order).is_ok());
    }
}
