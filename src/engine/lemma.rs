use crate::atoms::SignedConstraint;

/// A learned clause: a disjunction of signed constraints, in the order they were inserted.
pub type Clause = Vec<SignedConstraint>;

/// Accumulates the literals of one emitted lemma (C4): a split between literals justified by a
/// semantic (model) evaluation and literals justified by a stronger, trail-backed commitment.
/// [`LemmaBuilder::reset`] at the start of every rule attempt, per the fixed rule order in
/// [`crate::engine::SaturationEngine::perform`].
#[derive(Default)]
pub struct LemmaBuilder {
    evaluated: Vec<SignedConstraint>,
    asserted: Vec<SignedConstraint>,
}

impl LemmaBuilder {
    pub fn new() -> Self {
        LemmaBuilder::default()
    }

    pub fn reset(&mut self) {
        self.evaluated.clear();
        self.asserted.clear();
    }

    /// Inserts a literal whose falsity is only known from evaluating it against the current
    /// model (`insert_eval`): weaker than [`LemmaBuilder::insert`], since the model may change
    /// before this clause is used.
    pub fn insert_eval(&mut self, literal: SignedConstraint) {
        self.evaluated.push(literal);
    }

    /// Inserts a literal that must additionally hold on the boolean trail (`bvalue = false`), the
    /// stronger commitment `insert` describes.
    pub fn insert(&mut self, literal: SignedConstraint) {
        self.asserted.push(literal);
    }

    pub fn evaluated(&self) -> &[SignedConstraint] {
        &self.evaluated
    }

    pub fn asserted(&self) -> &[SignedConstraint] {
        &self.asserted
    }

    /// The accumulated clause: evaluated literals first, then asserted literals, both in
    /// insertion order — a deterministic ordering, as the rule engine's own iteration must be.
    pub fn build(&self) -> Clause {
        self.evaluated
            .iter()
            .cloned()
            .chain(self.asserted.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::PVar;
    use crate::pdd::Pdd;

    #[test]
    fn build_orders_evaluated_literals_before_asserted_ones() {
        let x = Pdd::var(PVar::new(0, 4));
        let y = Pdd::var(PVar::new(1, 4));
        let mut b = LemmaBuilder::new();
        b.insert_eval(SignedConstraint::ule(x.clone(), y.clone()));
        b.insert(SignedConstraint::odd(x));
        let clause = b.build();
        assert_eq!(clause.len(), 2);
        assert!(clause[0].as_inequality().is_some());
    }

    #[test]
    fn reset_clears_both_lists() {
        let x = Pdd::var(PVar::new(0, 4));
        let mut b = LemmaBuilder::new();
        b.insert_eval(SignedConstraint::odd(x));
        b.reset();
        assert!(b.build().is_empty());
    }
}
