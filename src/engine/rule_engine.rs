use log::debug;
use log::trace;

use crate::atoms::Inequality;
use crate::atoms::SignedConstraint;
use crate::basic_types::PVar;
use crate::engine::config::EngineConfig;
use crate::engine::config::RuleId;
use crate::engine::conflict::Conflict;
use crate::engine::environment::Environment;
use crate::engine::lemma::LemmaBuilder;
use crate::engine::trail::Search;
use crate::polysat_assert_moderate;
use crate::rules;

/// The saturation engine (C6): tries the fixed sequence of rules in [`EngineConfig::rule_order`]
/// against a target variable and the current conflict, stopping at the first rule that fires.
///
/// One engine is built per solver instance (construction validates the configuration once,
/// see [`SaturationEngine::new`]) and reused across every call to [`SaturationEngine::perform`].
pub struct SaturationEngine {
    config: EngineConfig,
    builder: LemmaBuilder,
    rule_tag: &'static str,
}

impl SaturationEngine {
    pub fn new(config: EngineConfig) -> Self {
        SaturationEngine {
            config,
            builder: LemmaBuilder::new(),
            rule_tag: "",
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Stashes a human-readable tag, stored with the next lemma this engine emits.
    pub fn set_rule(&mut self, tag: &'static str) {
        self.rule_tag = tag;
    }

    /// Considers every constraint in `conflict` that has an [`crate::atoms::Inequality`] view and
    /// is not already forced true, and for each one tries every rule in [`EngineConfig::rule_order`]
    /// in turn against `v`, stopping at the first rule that fires for that constraint. Returns
    /// `true` as soon as a rule fires (it will have called [`Conflict::add_lemma`] itself).
    pub fn perform(
        &mut self,
        v: PVar,
        env: &dyn Environment,
        search: &dyn Search,
        conflict: &mut dyn Conflict,
    ) -> bool {
        let order = self.config.rule_order().to_vec();
        for c in conflict.constraints().to_vec() {
            if env.is_forced_true(&c) {
                continue;
            }
            let Some(i) = c.as_inequality() else {
                continue;
            };
            for &rule in &order {
                self.set_rule(rule.tag());
                self.builder.reset();
                trace!("trying rule {} against {c:?}", rule.tag());
                let fired = match rule {
                    RuleId::MulBounds => rules::mul_bounds::try_mul_bounds(self, env, search, conflict, v, &i),
                    RuleId::Parity => rules::parity::try_parity(self, env, search, conflict, v, &i),
                    RuleId::FactorEquality => {
                        rules::factor_equality::try_factor_equality(self, env, search, conflict, v, &i)
                    }
                    RuleId::UgtX => rules::ugt_x::try_ugt_x(self, env, search, conflict, v, &i),
                    RuleId::UgtY => rules::ugt_y::try_ugt_y(self, env, search, conflict, v, &i),
                    RuleId::UgtZ => rules::ugt_z::try_ugt_z(self, env, search, conflict, v, &i),
                    RuleId::YLAxAndXLZ => {
                        rules::y_l_ax_and_x_l_z::try_y_l_ax_and_x_l_z(self, env, search, conflict, v, &i)
                    }
                    RuleId::Tangent => rules::tangent::try_tangent(self, env, search, conflict, v, &i),
                };
                if fired {
                    return true;
                }
                trace!("rule {} declined for {c:?}", rule.tag());
            }
        }
        false
    }

    /// The general emission path most rules use: builds a sound disjunction from `literals`
    /// (inserted via [`LemmaBuilder::insert_eval`], since none of them is individually claimed to
    /// be trail-backed) and hands it to `conflict`.
    pub(crate) fn emit(&mut self, conflict: &mut dyn Conflict, literals: Vec<SignedConstraint>) -> bool {
        self.builder.reset();
        for lit in literals {
            self.builder.insert_eval(lit);
        }
        self.finish(conflict)
    }

    /// Builds the final clause from the builder's current contents, logs it, and hands it to
    /// `conflict`. Always returns `true`, matching every rule's "returned true, so a lemma was
    /// recorded" contract.
    fn finish(&mut self, conflict: &mut dyn Conflict) -> bool {
        let clause = self.builder.build();
        debug!("rule {} emitted a lemma with {} literals", self.rule_tag, clause.len());
        conflict.add_lemma(self.rule_tag, clause);
        true
    }

    /// Finalises the current lemma as a propagation: the matched inequality's own negation `¬i`
    /// is always the first disjunct (sound whether or not `i` happens to be forced true right
    /// now), each of `criticals` must already be forced true (so its negation is forced false),
    /// and `consequent` is inserted as the propagated literal.
    pub fn propagate(
        &mut self,
        env: &dyn Environment,
        conflict: &mut dyn Conflict,
        i: &Inequality,
        criticals: &[SignedConstraint],
        consequent: SignedConstraint,
    ) -> bool {
        self.builder.reset();
        self.builder.insert_eval(!i.as_signed_constraint());
        for critical in criticals {
            polysat_assert_moderate!(
                env.is_forced_true(critical),
                "propagate: critical premise {critical:?} is not forced true"
            );
            self.builder.insert_eval(!critical.clone());
        }
        self.builder.insert(consequent);
        self.finish(conflict)
    }

    /// Finalises the current lemma as a conflict: like [`SaturationEngine::propagate`], but every
    /// critical premise must be committed on the boolean trail (`bvalue = true`), and `consequent`
    /// must already be forced false — the stronger pair of invariants the specification
    /// distinguishes from ordinary propagation.
    pub fn add_conflict(
        &mut self,
        env: &dyn Environment,
        conflict: &mut dyn Conflict,
        i: &Inequality,
        criticals: &[SignedConstraint],
        consequent: SignedConstraint,
    ) -> bool {
        self.builder.reset();
        self.builder.insert_eval(!i.as_signed_constraint());
        for critical in criticals {
            polysat_assert_moderate!(
                env.bvalue(critical).is_true(),
                "add_conflict: critical premise {critical:?} is not on the trail"
            );
            self.builder.insert(!critical.clone());
        }
        polysat_assert_moderate!(
            env.is_forced_false(&consequent),
            "add_conflict: consequent {consequent:?} is not forced false"
        );
        self.builder.insert(consequent);
        self.finish(conflict)
    }
}
