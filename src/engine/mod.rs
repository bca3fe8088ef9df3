//! The saturation engine (C3, C4, C6) and the collaborator contracts it is built against
//! (C's `Environment`/`Search`/`Conflict`): everything the rules in [`crate::rules`] are written
//! against.

mod config;
mod conflict;
mod environment;
mod lemma;
pub mod premises;
mod rule_engine;
pub mod test_helper;
mod trail;

pub use config::AssertLevel;
pub use config::EngineConfig;
pub use config::EngineConfigError;
pub use config::RuleId;
pub use conflict::Conflict;
pub use environment::Environment;
pub use lemma::Clause;
pub use lemma::LemmaBuilder;
pub use rule_engine::SaturationEngine;
pub use trail::Search;
pub use trail::TrailEntry;
