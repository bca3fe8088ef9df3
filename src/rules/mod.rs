//! The saturation rules (C7): each tries to match one inequality shape against the dispatch
//! variable and, on a match, emits a sound lemma via the [`crate::engine::SaturationEngine`] it
//! is handed.
//!
//! Every `try_*` function has the same signature — `(engine, env, search, conflict, v, i) ->
//! bool` — and the same contract: return `false` without touching `conflict` on a non-match,
//! return `true` after calling exactly one of [`crate::engine::SaturationEngine::emit`],
//! [`crate::engine::SaturationEngine::propagate`] or
//! [`crate::engine::SaturationEngine::add_conflict`] on a match. [`crate::engine::rule_engine`]
//! relies on this to know whether to keep trying the next rule.

pub mod factor_equality;
pub mod mul_bounds;
pub mod mul_eq_1;
pub mod mul_odd;
pub mod parity;
pub mod tangent;
pub mod ugt_x;
pub mod ugt_y;
pub mod ugt_z;
pub mod y_l_ax_and_x_l_z;
