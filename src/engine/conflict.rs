use crate::atoms::SignedConstraint;
use crate::engine::lemma::Clause;

/// The set-like carrier of signed constraints currently driving the conflict (C's `Conflict`
/// collaborator): the rule engine reads its constraints to find candidate `<=`-shaped literals to
/// pattern-match, and writes learned clauses back to it via [`Conflict::add_lemma`].
pub trait Conflict {
    /// The constraints currently in the conflict, in the order they were added.
    fn constraints(&self) -> &[SignedConstraint];

    /// Records a learned clause, tagged with the name of the rule that derived it (for
    /// diagnostics; see [`crate::engine::SaturationEngine::set_rule`]).
    fn add_lemma(&mut self, rule_tag: &'static str, clause: Clause);
}
