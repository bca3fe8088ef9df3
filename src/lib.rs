//! The saturation inference core of a polynomial-arithmetic SAT solver for fixed-width,
//! two's-complement bit-vector arithmetic.
//!
//! Given a target variable and an in-progress conflict, [`engine::SaturationEngine::perform`]
//! pattern-matches the conflict's polynomial inequalities against a fixed-order catalogue of
//! arithmetic rewriting rules ([`rules`]) and, on the first match, hands a sound lemma clause back
//! to the surrounding SAT solver through the [`engine::Conflict`] collaborator. Everything this
//! crate consumes from the rest of the solver — the boolean trail, the constraint store, the
//! polynomial representation itself, the e-graph's congruence closure — is a documented
//! collaborator contract rather than something this crate owns.
//!
//! Module map, leaves first:
//! - [`basic_types`]: the modular value domain and the polynomial variable handle.
//! - [`pdd`]: the polynomial view adapter (C1).
//! - [`atoms`]: signed constraints and the inequality abstraction (C2).
//! - [`egraph`]: the read-only slice/e-graph adapter (C8), queried independently of the rule
//!   engine below.
//! - [`engine`]: the premise oracle, lemma builder, and rule-dispatch driver (C3, C4, C6), plus
//!   the ambient configuration and logging surface.
//! - [`rules`]: the individual saturation rules (C7).

pub mod asserts;
pub mod atoms;
pub mod basic_types;
pub mod egraph;
pub mod engine;
pub mod pdd;
pub mod rules;
