//! The polynomial view adapter (C1): a concrete `pdd` implementation exposing exactly the shape
//! queries the rule engine needs — degree, linear factorisation, evaluation, and the handful of
//! shape recognisers (`is_val`, `is_unary`, `is_var`, `is_one`, `is_max`).
//!
//! This is deliberately not the production polynomial-decision-diagram structure (that is a
//! collaborator described only by this contract, see the purpose-and-scope section of the
//! specification this crate implements); it is a small sparse-polynomial adapter in the same
//! spirit as this lineage's `AffineView<Inner>`, which represents `y = a·x + b` as a view rather
//! than a first-class solver structure. Here the view generalises to a sparse sum of monomials so
//! the saturation rules can bind sub-polynomials (`y`, `z`, `a`) rather than only bare variables.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

use crate::basic_types::add_mod;
use crate::basic_types::mask;
use crate::basic_types::mul_mod;
use crate::basic_types::neg_mod;
use crate::basic_types::sub_mod;
use crate::basic_types::two_to_n;
use crate::basic_types::PVar;
use crate::basic_types::Value;
use crate::polysat_assert_simple;

/// A product of distinct polynomial variables raised to positive powers, e.g. `x^2 * y`.
///
/// Stored sorted by [`PVar`] so two monomials over the same variables compare equal regardless of
/// construction order; this is what lets [`Pdd::add`] merge like terms with a linear scan.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Product(Vec<(PVar, u32)>);

impl Product {
    fn var(v: PVar) -> Self {
        Product(vec![(v, 1)])
    }

    fn degree(&self, v: PVar) -> u32 {
        self.0
            .iter()
            .find(|(w, _)| *w == v)
            .map(|(_, k)| *k)
            .unwrap_or(0)
    }

    /// Removes one occurrence of `v`'s exponent, returning the quotient product.
    fn without(&self, v: PVar) -> Product {
        Product(
            self.0
                .iter()
                .filter_map(|&(w, k)| if w == v { None } else { Some((w, k)) })
                .collect(),
        )
    }

    fn merge(&self, other: &Product) -> Product {
        let mut out: Vec<(PVar, u32)> = self.0.clone();
        for &(w, k) in &other.0 {
            if let Some(slot) = out.iter_mut().find(|(v, _)| *v == w) {
                slot.1 += k;
            } else {
                out.push((w, k));
            }
        }
        out.sort_by(|a, b| a.0.cmp(&b.0));
        Product(out)
    }

    fn vars(&self) -> impl Iterator<Item = PVar> + '_ {
        self.0.iter().map(|(v, _)| *v)
    }
}

/// One term of a [`Pdd`]: a nonzero coefficient times a nonempty [`Product`] of variables.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Monomial {
    coeff: Value,
    product: Product,
}

/// A polynomial over `GF(2^K)[X_1..X_n]` in the sense of the specification's data model: a
/// modular sum of monomials plus a constant term, normalised so that equal polynomials compare
/// equal with plain `==`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pdd {
    width: u32,
    constant: Value,
    /// Sorted by [`Product`]'s `Ord`, no two terms share a product, no term has a zero coefficient.
    terms: Vec<Monomial>,
}

impl Pdd {
    /// The constant polynomial `0` of the given width.
    pub fn zero(width: u32) -> Self {
        Pdd {
            width,
            constant: 0,
            terms: Vec::new(),
        }
    }

    /// The constant polynomial `value mod 2^width`.
    pub fn constant(width: u32, value: Value) -> Self {
        Pdd {
            width,
            constant: value & mask(width),
            terms: Vec::new(),
        }
    }

    /// The polynomial consisting of the single variable `v` (coefficient 1, no constant term).
    pub fn var(v: PVar) -> Self {
        Pdd {
            width: v.width(),
            constant: 0,
            terms: vec![Monomial {
                coeff: 1,
                product: Product::var(v),
            }],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    fn canonicalise(&mut self) {
        self.terms.retain(|m| m.coeff != 0);
        self.terms.sort_by(|a, b| a.product.cmp(&b.product));
    }

    // -- Shape recognisers -------------------------------------------------

    /// `true` when this polynomial is a bare constant.
    pub fn is_val(&self) -> bool {
        self.terms.is_empty()
    }

    /// The constant value, if this polynomial is a bare constant.
    pub fn val(&self) -> Option<Value> {
        self.is_val().then_some(self.constant)
    }

    /// `true` when this polynomial is the constant `1`.
    pub fn is_one(&self) -> bool {
        self.val() == Some(1)
    }

    /// `true` when this polynomial is the constant `2^K - 1`, the largest representable value.
    pub fn is_max(&self) -> bool {
        self.val() == Some(mask(self.width))
    }

    /// The bare variable this polynomial equals, if it is exactly one variable with coefficient 1
    /// and no constant term.
    pub fn is_var(&self) -> Option<PVar> {
        if self.constant != 0 || self.terms.len() != 1 {
            return None;
        }
        let m = &self.terms[0];
        if m.coeff == 1 && m.product.0.len() == 1 && m.product.0[0].1 == 1 {
            Some(m.product.0[0].0)
        } else {
            None
        }
    }

    /// `c * x` for a single variable `x` and nonzero constant `c`, if this polynomial has that
    /// shape. Returns `(x, c)`.
    pub fn is_unary(&self) -> Option<(PVar, Value)> {
        if self.constant != 0 || self.terms.len() != 1 {
            return None;
        }
        let m = &self.terms[0];
        if m.product.0.len() == 1 && m.product.0[0].1 == 1 && m.coeff != 0 {
            Some((m.product.0[0].0, m.coeff))
        } else {
            None
        }
    }

    // -- Degree and factorisation --------------------------------------------

    /// The degree of this polynomial in `v`: the largest exponent `v` appears with in any term.
    pub fn degree(&self, v: PVar) -> u32 {
        self.terms
            .iter()
            .map(|m| m.product.degree(v))
            .max()
            .unwrap_or(0)
    }

    /// When `degree(self, v) <= 1`, decomposes `self = a*v + b` where neither `a` nor `b` contains
    /// `v`. Returns `(a, b)`.
    ///
    /// # Panics
    /// Panics (via [`crate::polysat_assert_simple`]) if `degree(self, v) > 1`; callers are
    /// expected to check [`Pdd::degree`] first, exactly as the specification's `factor` contract
    /// requires a prior degree check.
    pub fn factor_linear(&self, v: PVar) -> (Pdd, Pdd) {
        polysat_assert_simple!(self.degree(v) <= 1, "factor_linear called on non-linear term");

        let mut a = Pdd::zero(self.width);
        let mut b = Pdd::constant(self.width, self.constant);

        for m in &self.terms {
            if m.product.degree(v) == 1 {
                let quotient = m.product.without(v);
                a.terms.push(Monomial {
                    coeff: m.coeff,
                    product: quotient,
                });
            } else {
                b.terms.push(m.clone());
            }
        }
        a.canonicalise();
        b.canonicalise();
        (a, b)
    }

    /// Evaluates this polynomial under `model`, which must return a committed value for every
    /// variable `self` mentions; returns `None` otherwise.
    pub fn try_eval(&self, model: &dyn Fn(PVar) -> Option<Value>) -> Option<Value> {
        let mut total = self.constant;
        for m in &self.terms {
            let mut term_value = m.coeff;
            for v in m.product.vars() {
                let value = model(v)?;
                for _ in 0..m.product.degree(v) {
                    term_value = mul_mod(term_value, value, self.width);
                }
            }
            total = add_mod(total, term_value, self.width);
        }
        Some(total)
    }

    /// Divides every coefficient of `self` by the integer `k`, if `k` divides each of them
    /// exactly (taking coefficients as canonical residues in `[0, 2^K)`). This is the contract
    /// `try_div` describes; it is intentionally conservative rather than attempting modular
    /// inverses, since `2^K` is not a field and division is not generally unique.
    pub fn try_div(&self, k: Value) -> Option<Pdd> {
        if k == 0 {
            return None;
        }
        if self.constant % k != 0 {
            return None;
        }
        let mut out = Pdd::constant(self.width, self.constant / k);
        for m in &self.terms {
            if m.coeff % k != 0 {
                return None;
            }
            out.terms.push(Monomial {
                coeff: m.coeff / k,
                product: m.product.clone(),
            });
        }
        out.canonicalise();
        Some(out)
    }

    /// The distinct variables appearing anywhere in this polynomial.
    pub fn variables(&self) -> impl Iterator<Item = PVar> + '_ {
        self.terms.iter().flat_map(|m| m.product.vars())
    }
}

impl Add for &Pdd {
    type Output = Pdd;

    fn add(self, other: &Pdd) -> Pdd {
        polysat_assert_simple!(self.width == other.width, "width mismatch in polynomial add");
        let mut out = Pdd::constant(self.width, add_mod(self.constant, other.constant, self.width));
        let mut terms = self.terms.clone();
        for m in &other.terms {
            if let Some(slot) = terms.iter_mut().find(|t| t.product == m.product) {
                slot.coeff = add_mod(slot.coeff, m.coeff, self.width);
            } else {
                terms.push(m.clone());
            }
        }
        out.terms = terms;
        out.canonicalise();
        out
    }
}

impl Neg for &Pdd {
    type Output = Pdd;

    fn neg(self) -> Pdd {
        let mut out = Pdd::constant(self.width, neg_mod(self.constant, self.width));
        out.terms = self
            .terms
            .iter()
            .map(|m| Monomial {
                coeff: neg_mod(m.coeff, self.width),
                product: m.product.clone(),
            })
            .collect();
        out.canonicalise();
        out
    }
}

impl Sub for &Pdd {
    type Output = Pdd;

    fn sub(self, other: &Pdd) -> Pdd {
        self + &(-other)
    }
}

impl Mul for &Pdd {
    type Output = Pdd;

    fn mul(self, other: &Pdd) -> Pdd {
        polysat_assert_simple!(self.width == other.width, "width mismatch in polynomial mul");
        let width = self.width;
        let mut out = Pdd::zero(width);
        out.constant = mul_mod(self.constant, other.constant, width);

        let mut push_term = |out: &mut Pdd, coeff: Value, product: Product| {
            if coeff == 0 {
                return;
            }
            if product.0.is_empty() {
                out.constant = add_mod(out.constant, coeff, width);
                return;
            }
            if let Some(slot) = out.terms.iter_mut().find(|t| t.product == product) {
                slot.coeff = add_mod(slot.coeff, coeff, width);
            } else {
                out.terms.push(Monomial { coeff, product });
            }
        };

        for m in &self.terms {
            push_term(
                &mut out,
                mul_mod(m.coeff, other.constant, width),
                m.product.clone(),
            );
        }
        for m in &other.terms {
            push_term(
                &mut out,
                mul_mod(self.constant, m.coeff, width),
                m.product.clone(),
            );
        }
        for lm in &self.terms {
            for rm in &other.terms {
                push_term(
                    &mut out,
                    mul_mod(lm.coeff, rm.coeff, width),
                    lm.product.merge(&rm.product),
                );
            }
        }

        out.canonicalise();
        out
    }
}

impl fmt::Debug for Pdd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_val() {
            return write!(f, "{}", self.constant);
        }
        let mut first = true;
        for m in &self.terms {
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            write!(f, "{}", m.coeff)?;
            for (v, k) in &m.product.0 {
                match k.cmp(&1) {
                    Ordering::Equal => write!(f, "*{v:?}")?,
                    _ => write!(f, "*{v:?}^{k}")?,
                }
            }
        }
        if self.constant != 0 {
            write!(f, " + {}", self.constant)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::PVar;

    fn v(i: u32) -> PVar {
        PVar::new(i, 4)
    }

    #[test]
    fn linear_factorisation_recovers_coefficient_and_offset() {
        let x = v(0);
        let a = Pdd::constant(4, 3);
        let b = Pdd::constant(4, 5);
        let p = &(&a * &Pdd::var(x)) + &b;

        assert_eq!(p.degree(x), 1);
        let (fa, fb) = p.factor_linear(x);
        assert_eq!(fa.val(), Some(3));
        assert_eq!(fb.val(), Some(5));
    }

    #[test]
    fn product_of_two_variables_is_not_unary_but_factors_to_the_other_variable() {
        let x = v(0);
        let y = v(1);
        let p = &Pdd::var(y) * &Pdd::var(x);

        assert!(p.is_unary().is_none());
        assert_eq!(p.degree(x), 1);
        let (a, b) = p.factor_linear(x);
        assert_eq!(a.is_var(), Some(y));
        assert!(b.is_val() && b.val() == Some(0));
    }

    #[test]
    fn addition_wraps_modulo_two_to_the_width() {
        let p = Pdd::constant(4, 14);
        let q = Pdd::constant(4, 5);
        assert_eq!((&p + &q).val(), Some(3));
    }

    #[test]
    fn negation_and_subtraction_agree_with_two_complement_semantics() {
        let p = Pdd::constant(4, 1);
        assert_eq!((-&p).val(), Some(15));
        let zero = Pdd::zero(4);
        assert_eq!((&zero - &p).val(), Some(15));
    }

    #[test]
    fn try_div_is_none_when_coefficients_are_not_exactly_divisible() {
        let p = Pdd::constant(4, 7);
        assert!(p.try_div(2).is_none());
        assert_eq!(p.try_div(7).unwrap().val(), Some(1));
    }

    #[test]
    fn try_eval_requires_every_variable_to_be_assigned() {
        let x = v(0);
        let y = v(1);
        let p = &Pdd::var(x) + &Pdd::var(y);
        assert_eq!(p.try_eval(&|w| if w == x { Some(2) } else { None }), None);
        assert_eq!(
            p.try_eval(&|w| if w == x { Some(2) } else { Some(3) }),
            Some(5)
        );
    }

    #[test]
    fn squared_variable_has_degree_two_and_is_not_linear() {
        let x = v(0);
        let p = &Pdd::var(x) * &Pdd::var(x);
        assert_eq!(p.degree(x), 2);
    }

    #[test]
    fn two_to_n_and_power_of_2_are_available_on_a_pvar() {
        let x = v(0);
        assert_eq!(x.two_to_n(), 16);
        assert_eq!(x.power_of_2(), 4);
    }
}
