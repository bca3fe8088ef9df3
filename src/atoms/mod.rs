//! Signed constraints (C2's atoms, one level up) and the inequality view over them.
//!
//! A [`SignedConstraint`] is the unit of boolean reasoning the whole crate works with: an atomic
//! proposition about one or two polynomials, paired with a polarity. Rules never touch a raw
//! [`Atom`] directly — they go through the constructors here (`eq`, `ule`, `ult`, ...), exactly
//! the constraint factory the specification lists as something the core consumes from the SAT
//! solver.

mod inequality;

pub use inequality::Inequality;

use std::fmt;
use std::ops::Not;

use crate::basic_types::mask;
use crate::basic_types::mul_overflows;
use crate::basic_types::Value;
use crate::pdd::Pdd;

/// The atomic propositions the saturation core reasons about. See the specification's data model
/// for the semantics of each.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Atom {
    /// `p = 0`.
    Eq(Pdd),
    /// `p = k`.
    EqK(Pdd, Value),
    /// `p <= q`. Negating this atom (rather than toggling a separate `strict` flag) is how `<` is
    /// represented: `p < q` is stored as `!Ule(q, p)`.
    Ule(Pdd, Pdd),
    /// `p >= k`.
    UgeK(Pdd, Value),
    /// `p * q` overflows `2^K` (unsigned multiplication overflow).
    UmulOvfl(Pdd, Pdd),
    /// `p` is odd.
    Odd(Pdd),
    /// `p` is even.
    Even(Pdd),
    /// The low `k` bits of `p` are zero.
    Parity(Pdd, u32),
}

/// An atomic proposition paired with a polarity — the unit of boolean reasoning the rule engine
/// manipulates. Two `SignedConstraint`s are equal iff they assert the same fact with the same
/// polarity, which is what lets a [`std::collections::HashSet`] of them be used for trail-literal
/// deduplication (see the e-graph adapter).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SignedConstraint {
    atom: Atom,
    /// `true`: the atom holds. `false`: its negation holds.
    polarity: bool,
}

impl SignedConstraint {
    /// `p = 0`.
    pub fn eq(p: Pdd) -> Self {
        SignedConstraint {
            atom: Atom::Eq(p),
            polarity: true,
        }
    }

    /// `p = k`.
    pub fn eq_k(p: Pdd, k: Value) -> Self {
        let width = p.width();
        SignedConstraint {
            atom: Atom::EqK(p, k & mask(width)),
            polarity: true,
        }
    }

    /// `p <= q`.
    pub fn ule(p: Pdd, q: Pdd) -> Self {
        SignedConstraint {
            atom: Atom::Ule(p, q),
            polarity: true,
        }
    }

    /// `p < q`, represented as `!(q <= p)`.
    pub fn ult(p: Pdd, q: Pdd) -> Self {
        SignedConstraint {
            atom: Atom::Ule(q, p),
            polarity: false,
        }
    }

    /// `p >= k`.
    pub fn uge(p: Pdd, k: Value) -> Self {
        let width = p.width();
        SignedConstraint {
            atom: Atom::UgeK(p, k & mask(width)),
            polarity: true,
        }
    }

    /// `p * q` overflows `2^K`.
    pub fn umul_ovfl(p: Pdd, q: Pdd) -> Self {
        SignedConstraint {
            atom: Atom::UmulOvfl(p, q),
            polarity: true,
        }
    }

    /// `p` is odd.
    pub fn odd(p: Pdd) -> Self {
        SignedConstraint {
            atom: Atom::Odd(p),
            polarity: true,
        }
    }

    /// `p` is even.
    pub fn even(p: Pdd) -> Self {
        SignedConstraint {
            atom: Atom::Even(p),
            polarity: true,
        }
    }

    /// The low `k` bits of `p` are zero.
    pub fn parity(p: Pdd, k: u32) -> Self {
        SignedConstraint {
            atom: Atom::Parity(p, k),
            polarity: true,
        }
    }

    /// The inequality view of this constraint, if it asserts an order fact (`Ule`, under either
    /// polarity — this is the "if c is not a ≤-constraint, skip" check the rule engine performs).
    pub fn as_inequality(&self) -> Option<Inequality> {
        match &self.atom {
            Atom::Ule(lhs, rhs) => Some(if self.polarity {
                Inequality::new(lhs.clone(), rhs.clone(), false)
            } else {
                Inequality::new(rhs.clone(), lhs.clone(), true)
            }),
            _ => None,
        }
    }

    /// Evaluates this constraint's truth value under `model`, a total function from polynomial
    /// variables to committed values (see [`Pdd::try_eval`]); `None` when some operand is not
    /// fully assigned.
    pub fn evaluate(&self, model: &dyn Fn(crate::basic_types::PVar) -> Option<Value>) -> Option<bool> {
        let raw = match &self.atom {
            Atom::Eq(p) => p.try_eval(model).map(|v| v == 0),
            Atom::EqK(p, k) => p.try_eval(model).map(|v| v == *k),
            Atom::Ule(p, q) => match (p.try_eval(model), q.try_eval(model)) {
                (Some(a), Some(b)) => Some(a <= b),
                _ => None,
            },
            Atom::UgeK(p, k) => p.try_eval(model).map(|v| v >= *k),
            Atom::UmulOvfl(p, q) => match (p.try_eval(model), q.try_eval(model)) {
                (Some(a), Some(b)) => Some(mul_overflows(a, b, p.width())),
                _ => None,
            },
            Atom::Odd(p) => p.try_eval(model).map(|v| v & 1 == 1),
            Atom::Even(p) => p.try_eval(model).map(|v| v & 1 == 0),
            Atom::Parity(p, k) => p.try_eval(model).map(|v| v & mask(*k) == 0),
        };
        raw.map(|holds| holds == self.polarity)
    }

    /// `true` under the current model (see [`SignedConstraint::evaluate`]).
    pub fn is_currently_true(&self, model: &dyn Fn(crate::basic_types::PVar) -> Option<Value>) -> bool {
        self.evaluate(model) == Some(true)
    }

    /// `false` under the current model.
    pub fn is_currently_false(&self, model: &dyn Fn(crate::basic_types::PVar) -> Option<Value>) -> bool {
        self.evaluate(model) == Some(false)
    }

    /// The polynomials this constraint's atom mentions, for trail-scanning comparisons (e.g.
    /// matching `{p, q} = {x, y}` for an overflow witness).
    pub fn operands(&self) -> Vec<&Pdd> {
        match &self.atom {
            Atom::Eq(p) | Atom::EqK(p, _) | Atom::Odd(p) | Atom::Even(p) | Atom::Parity(p, _) => {
                vec![p]
            }
            Atom::Ule(p, q) | Atom::UmulOvfl(p, q) => vec![p, q],
            Atom::UgeK(p, _) => vec![p],
        }
    }

    /// `true` if this is an (un-negated or negated) `umul_ovfl(p, q)` with the unordered operand
    /// pair `{p, q}` equal to `{a, b}` — used to recognise an `Ω*` witness on the trail.
    pub fn is_umul_ovfl_of(&self, a: &Pdd, b: &Pdd) -> bool {
        matches!(&self.atom, Atom::UmulOvfl(p, q) if (p == a && q == b) || (p == b && q == a))
    }

    /// `true` when this constraint is the negated overflow literal `¬umul_ovfl(p, q)`, i.e. the
    /// non-overflow witness `Ω*(p, q)`.
    pub fn is_non_overflow_witness(&self) -> bool {
        matches!(&self.atom, Atom::UmulOvfl(..)) && !self.polarity
    }
}

impl Not for SignedConstraint {
    type Output = SignedConstraint;

    fn not(self) -> SignedConstraint {
        SignedConstraint {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }
}

impl fmt::Debug for SignedConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            write!(f, "¬")?;
        }
        match &self.atom {
            Atom::Eq(p) => write!(f, "({p:?} = 0)"),
            Atom::EqK(p, k) => write!(f, "({p:?} = {k})"),
            Atom::Ule(p, q) => write!(f, "({p:?} <= {q:?})"),
            Atom::UgeK(p, k) => write!(f, "({p:?} >= {k})"),
            Atom::UmulOvfl(p, q) => write!(f, "umul_ovfl({p:?}, {q:?})"),
            Atom::Odd(p) => write!(f, "odd({p:?})"),
            Atom::Even(p) => write!(f, "even({p:?})"),
            Atom::Parity(p, k) => write!(f, "parity({p:?}, {k})"),
        }
    }
}
