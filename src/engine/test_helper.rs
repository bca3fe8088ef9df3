#![cfg(any(test, doc))]
//! An in-memory stand-in for the surrounding SAT solver, for testing the saturation engine and
//! its rules in isolation.
//!
//! Split into three fields — [`ModelState`], [`TrailState`], [`ConflictState`] — rather than one
//! flat struct, so [`TestEnvironment::parts`] can hand out the disjoint `&Environment`,
//! `&Search`, `&mut Conflict` borrows a rule's signature needs, all from one `&mut`.

use std::collections::HashMap;

use crate::atoms::SignedConstraint;
use crate::basic_types::Bvalue;
use crate::basic_types::PVar;
use crate::basic_types::Value;
use crate::engine::conflict::Conflict;
use crate::engine::environment::Environment;
use crate::engine::lemma::Clause;
use crate::engine::trail::Search;
use crate::engine::trail::TrailEntry;

#[derive(Default, Debug)]
pub struct ModelState {
    values: HashMap<PVar, Value>,
    bvalues: HashMap<SignedConstraint, Bvalue>,
}

impl Environment for ModelState {
    fn value_of(&self, v: PVar) -> Option<Value> {
        self.values.get(&v).copied()
    }

    fn bvalue(&self, c: &SignedConstraint) -> Bvalue {
        self.bvalues.get(c).copied().unwrap_or(Bvalue::Undef)
    }
}

#[derive(Default, Debug)]
pub struct TrailState {
    entries: Vec<TrailEntry>,
}

impl Search for TrailState {
    fn entries(&self) -> &[TrailEntry] {
        &self.entries
    }
}

#[derive(Default, Debug)]
pub struct ConflictState {
    constraints: Vec<SignedConstraint>,
    lemmas: Vec<(&'static str, Clause)>,
}

impl Conflict for ConflictState {
    fn constraints(&self) -> &[SignedConstraint] {
        &self.constraints
    }

    fn add_lemma(&mut self, rule_tag: &'static str, clause: Clause) {
        self.lemmas.push((rule_tag, clause));
    }
}

/// A minimal [`Environment`] + [`Search`] + [`Conflict`] all in one, built up with a handful of
/// setter methods and then split via [`TestEnvironment::parts`] for handing to
/// [`crate::engine::SaturationEngine::perform`] or a single rule's `try_*` function.
#[derive(Default, Debug)]
pub struct TestEnvironment {
    model: ModelState,
    trail: TrailState,
    conflict: ConflictState,
}

impl TestEnvironment {
    pub fn new() -> Self {
        TestEnvironment::default()
    }

    /// Commits `v` to `value` in the model.
    pub fn assign(&mut self, v: PVar, value: Value) -> &mut Self {
        self.model.values.insert(v, value);
        self
    }

    /// Sets `c`'s boolean-trail value directly, independent of what it evaluates to.
    pub fn set_bvalue(&mut self, c: SignedConstraint, value: Bvalue) -> &mut Self {
        self.model.bvalues.insert(c, value);
        self
    }

    /// Appends a decision entry to the trail.
    pub fn decide(&mut self, v: PVar) -> &mut Self {
        self.trail.entries.push(TrailEntry::Decision { var: v });
        self
    }

    /// Appends a boolean trail entry.
    pub fn push_literal(&mut self, literal: SignedConstraint, resolved: bool) -> &mut Self {
        self.trail
            .entries
            .push(TrailEntry::Boolean { literal, resolved });
        self
    }

    /// Adds `c` to the set of constraints the rule engine considers.
    pub fn add_constraint(&mut self, c: SignedConstraint) -> &mut Self {
        self.conflict.constraints.push(c);
        self
    }

    pub fn constraints(&self) -> &[SignedConstraint] {
        &self.conflict.constraints
    }

    /// The lemmas recorded via [`Conflict::add_lemma`] so far, in emission order.
    pub fn lemmas(&self) -> &[(&'static str, Clause)] {
        &self.conflict.lemmas
    }

    /// Splits this fixture into the disjoint `(model, trail, conflict)` borrows a rule call
    /// needs, exploiting that the three fields never alias.
    pub fn parts(&mut self) -> (&ModelState, &TrailState, &mut ConflictState) {
        (&self.model, &self.trail, &mut self.conflict)
    }
}
