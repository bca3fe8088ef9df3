//! The debug-assertion ladder: four escalating levels of invariant checking, from "always cheap
//! enough to run" to "only worth it while actively debugging a specific rule".
//!
//! Every saturation rule and polynomial operation that has a non-trivial precondition checks it
//! through one of these macros rather than a bare `assert!`, so the cost of checking scales with
//! [`AssertLevel`] (see [`crate::engine::EngineConfig`]) instead of always paying the strictest
//! check.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const polysat_assert_LEVEL_DEFINITION: u8 = polysat_assert_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const polysat_assert_LEVEL_DEFINITION: u8 = polysat_assert_EXTREME;

pub const polysat_assert_SIMPLE: u8 = 1;
pub const polysat_assert_MODERATE: u8 = 2;
pub const polysat_assert_ADVANCED: u8 = 3;
pub const polysat_assert_EXTREME: u8 = 4;

/// Cheap structural checks that should hold no matter what: width mismatches, malformed
/// polynomials, degree preconditions on [`crate::pdd::Pdd::factor_linear`].
#[macro_export]
#[doc(hidden)]
macro_rules! polysat_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::polysat_assert_LEVEL_DEFINITION >= $crate::asserts::polysat_assert_SIMPLE {
            assert!($($arg)*);
        }
    };
}

/// Premise-soundness checks: that a literal handed to [`crate::engine::SaturationEngine::propagate`]
/// or [`crate::engine::SaturationEngine::add_conflict`] really is forced the way the caller claims.
#[macro_export]
#[doc(hidden)]
macro_rules! polysat_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::polysat_assert_LEVEL_DEFINITION >= $crate::asserts::polysat_assert_MODERATE {
            assert!($($arg)*);
        }
    };
}

/// Per-rule shape invariants: a matcher found exactly the pattern it claims to have found.
#[macro_export]
#[doc(hidden)]
macro_rules! polysat_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::polysat_assert_LEVEL_DEFINITION >= $crate::asserts::polysat_assert_ADVANCED {
            assert!($($arg)*);
        }
    };
}

/// The most expensive checks: re-deriving a result a second way and comparing, or re-checking
/// every antecedent of an emitted lemma against the model.
#[macro_export]
#[doc(hidden)]
macro_rules! polysat_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::polysat_assert_LEVEL_DEFINITION >= $crate::asserts::polysat_assert_EXTREME {
            assert!($($arg)*);
        }
    };
}
