//! Polynomial rings over a field
//!
//! Coefficients are stored from lowest to highest degree:
//! `[a0, a1, a2, ...] = a0 + a1*x + a2*x^2 + ...`
//!
//! Polynomials are canonical: trailing zero coefficients are trimmed, and the
//! zero polynomial is stored as `[zero]` with no degree.

use super::{Field, Norm, Ring};
use crate::error::{AlgebraError, AlgebraResult};
use crate::radix;
use std::fmt;

/// An immutable polynomial produced by a [`PolynomialRing`].
#[derive(Clone, Debug)]
pub struct Polynomial<E> {
    coeffs: Vec<E>,
    degree: Norm,
    zero: E,
    field_order: usize,
}

impl<E: Clone + PartialEq> Polynomial<E> {
    /// Degree, or `None` for the zero polynomial.
    pub fn degree(&self) -> Norm {
        self.degree
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.degree.is_none()
    }

    /// Canonical coefficients, lowest degree first. `[zero]` for the zero
    /// polynomial.
    pub fn coefficients(&self) -> &[E] {
        &self.coeffs
    }

    /// Coefficient of `x^index`.
    ///
    /// Total over all integers: negative indices and indices past the degree
    /// yield the field's zero.
    pub fn coefficient(&self, index: isize) -> &E {
        match (usize::try_from(index), self.degree) {
            (Ok(i), Some(degree)) if i <= degree => &self.coeffs[i],
            _ => &self.zero,
        }
    }

    /// Coefficient at the degree; the field's zero for the zero polynomial.
    pub fn leading_coefficient(&self) -> &E {
        match self.degree {
            Some(degree) => &self.coeffs[degree],
            None => &self.zero,
        }
    }

    /// Order of the coefficient field.
    pub fn field_order(&self) -> usize {
        self.field_order
    }

    fn coef(&self, i: usize) -> &E {
        match self.degree {
            Some(degree) if i <= degree => &self.coeffs[i],
            _ => &self.zero,
        }
    }
}

impl<E: PartialEq> PartialEq for Polynomial<E> {
    fn eq(&self, other: &Self) -> bool {
        self.field_order == other.field_order
            && self.degree == other.degree
            && self.coeffs == other.coeffs
    }
}

impl<E: Eq> Eq for Polynomial<E> {}

impl<E: PartialEq + fmt::Display> fmt::Display for Polynomial<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(degree) = self.degree else {
            return write!(f, "{}", self.zero);
        };

        let mut terms = Vec::new();
        for i in (0..=degree).rev() {
            let coeff = &self.coeffs[i];
            if *coeff == self.zero {
                continue;
            }

            // Index 1 is the unit of every enumerated field.
            let rendered = coeff.to_string();
            let coeff_str = if i > 0 && rendered == "1" { "" } else { rendered.as_str() };

            let term = match i {
                0 => coeff_str.to_string(),
                1 => format!("{}x", coeff_str),
                _ => format!("{}x^{}", coeff_str, i),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}

/// The ring `F[x]` of polynomials with coefficients in the field `F`.
#[derive(Clone, Debug)]
pub struct PolynomialRing<F: Field> {
    field: F,
}

impl<F: Field> PolynomialRing<F> {
    /// Create the polynomial ring over `field`.
    pub fn new(field: F) -> Self {
        PolynomialRing { field }
    }

    /// The coefficient field.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Build a canonical polynomial, trimming high-order zero coefficients.
    ///
    /// Every coefficient is replaced by the field's canonical representative,
    /// so `7` over `F_7` is stored as `0`. An empty or all-zero coefficient
    /// list yields the zero polynomial.
    pub fn polynom(&self, coeffs: Vec<F::Element>) -> Polynomial<F::Element> {
        let zero = self.field.null_element();
        let mut coeffs: Vec<F::Element> = coeffs.into_iter().map(|c| self.canonical(c)).collect();

        while coeffs.last().is_some_and(|c| self.field.is_zero(c)) {
            coeffs.pop();
        }

        let degree = coeffs.len().checked_sub(1);
        if coeffs.is_empty() {
            coeffs.push(zero.clone());
        }

        Polynomial {
            coeffs,
            degree,
            zero,
            field_order: self.field.order(),
        }
    }

    /// Canonical representative of `c`: the enumerated element at its index,
    /// or `c` itself when the field offers no index for it.
    fn canonical(&self, c: F::Element) -> F::Element {
        match self.field.index(&c) {
            Some(i) => self.field.element(i),
            None => c,
        }
    }

    /// Build a polynomial from the enumeration indices of its coefficients.
    pub fn polynom_from_indices(&self, indices: &[usize]) -> Polynomial<F::Element> {
        let coeffs = indices.iter().map(|&i| self.field.element(i)).collect();
        self.polynom(coeffs)
    }

    /// The zero polynomial.
    pub fn zero(&self) -> Polynomial<F::Element> {
        self.polynom(Vec::new())
    }

    /// The monomial `coeff * x^power`.
    pub fn monomial(&self, coeff: F::Element, power: usize) -> Polynomial<F::Element> {
        let mut coeffs = vec![self.field.null_element(); power + 1];
        coeffs[power] = coeff;
        self.polynom(coeffs)
    }

    /// Evaluate `poly` at `value` using Horner's method.
    pub fn application(&self, poly: &Polynomial<F::Element>, value: &F::Element) -> F::Element {
        let Some(degree) = poly.degree() else {
            return self.field.null_element();
        };

        let mut result = poly.coeffs[degree].clone();
        for i in (0..degree).rev() {
            result = self.field.add(&self.field.mul(&result, value), &poly.coeffs[i]);
        }
        result
    }

    /// Euclidean division: `(quotient, remainder)` such that
    /// `f = quotient * g + remainder` and `deg(remainder) < deg(g)`.
    ///
    /// # Errors
    /// - [`AlgebraError::DivisionByZero`] if `g` is the zero polynomial.
    /// - [`AlgebraError::NotInvertible`] if the leading coefficient of `g`
    ///   cannot be inverted, so the leading term of `f` cannot be cancelled.
    pub fn divmod(
        &self,
        f: &Polynomial<F::Element>,
        g: &Polynomial<F::Element>,
    ) -> AlgebraResult<(Polynomial<F::Element>, Polynomial<F::Element>)> {
        let degree_g = g.degree().ok_or(AlgebraError::DivisionByZero)?;

        let degree_f = match f.degree() {
            Some(degree) if degree >= degree_g => degree,
            _ => return Ok((self.zero(), f.clone())),
        };

        let lead = g.leading_coefficient();
        let not_invertible = || AlgebraError::NotInvertible(lead.to_string());
        let lead_inv = self.field.inverse(lead).ok_or_else(not_invertible)?;

        let mut quotient = vec![self.field.null_element(); degree_f - degree_g + 1];
        let mut remainder = f.clone();

        while let Some(degree_r) = remainder.degree() {
            if degree_r < degree_g {
                break;
            }

            let shift = degree_r - degree_g;
            let term = self.field.mul(remainder.leading_coefficient(), &lead_inv);

            // Subtract term * x^shift * g to cancel the leading coefficient
            let mut coeffs = remainder.coeffs.clone();
            for (j, g_coeff) in g.coeffs.iter().enumerate() {
                let cancel = self.field.opposite(&self.field.mul(&term, g_coeff));
                coeffs[j + shift] = self.field.add(&coeffs[j + shift], &cancel);
            }

            quotient[shift] = term;
            remainder = self.polynom(coeffs);

            // Happens only when the "inverse" is not a true inverse, e.g. a
            // prime field built on a composite modulus.
            if remainder.degree() == Some(degree_r) {
                return Err(not_invertible());
            }
        }

        Ok((self.polynom(quotient), remainder))
    }

    /// Quotient of the Euclidean division.
    pub fn division(
        &self,
        f: &Polynomial<F::Element>,
        g: &Polynomial<F::Element>,
    ) -> AlgebraResult<Polynomial<F::Element>> {
        self.divmod(f, g).map(|(quotient, _)| quotient)
    }
}

impl<F: Field> Ring for PolynomialRing<F> {
    type Element = Polynomial<F::Element>;

    fn add(&self, f: &Self::Element, g: &Self::Element) -> Self::Element {
        let Some(degree) = f.degree().max(g.degree()) else {
            return self.zero();
        };

        let coeffs = (0..=degree)
            .map(|i| self.field.add(f.coef(i), g.coef(i)))
            .collect();
        self.polynom(coeffs)
    }

    /// Convolution of the coefficient sequences.
    fn mul(&self, f: &Self::Element, g: &Self::Element) -> Self::Element {
        let (Some(degree_f), Some(degree_g)) = (f.degree(), g.degree()) else {
            return self.zero();
        };

        let degree = degree_f + degree_g;
        let mut coeffs = Vec::with_capacity(degree + 1);
        for i in 0..=degree {
            let mut acc = self.field.null_element();
            for j in i.saturating_sub(degree_g)..=i.min(degree_f) {
                acc = self.field.add(&acc, &self.field.mul(&f.coeffs[j], &g.coeffs[i - j]));
            }
            coeffs.push(acc);
        }
        self.polynom(coeffs)
    }

    fn opposite(&self, f: &Self::Element) -> Self::Element {
        let coeffs = f.coeffs.iter().map(|c| self.field.opposite(c)).collect();
        self.polynom(coeffs)
    }

    /// The degree.
    fn norm(&self, f: &Self::Element) -> Norm {
        f.degree()
    }

    fn modulo(&self, f: &Self::Element, g: &Self::Element) -> AlgebraResult<Self::Element> {
        self.divmod(f, g).map(|(_, remainder)| remainder)
    }

    fn equal(&self, f: &Self::Element, g: &Self::Element) -> bool {
        if f.field_order != g.field_order || f.degree != g.degree {
            return false;
        }
        match f.degree {
            None => true,
            Some(degree) => (0..=degree).rev().all(|i| self.field.equal(&f.coeffs[i], &g.coeffs[i])),
        }
    }

    /// Digits of `index` in base `q` become the coefficient indices.
    fn element(&self, index: usize) -> Self::Element {
        let order = self.field.order();
        if order < 2 {
            return self.zero();
        }
        self.polynom_from_indices(&radix::expand(index, order))
    }

    fn index(&self, f: &Self::Element) -> Option<usize> {
        let digits = f
            .coeffs
            .iter()
            .map(|c| self.field.index(c))
            .collect::<Option<Vec<_>>>()?;
        Some(radix::contract(&digits, self.field.order()))
    }

    /// `(q - 1) * q^degree` polynomials of each degree, one zero polynomial.
    fn norm_count(&self, norm: Norm) -> usize {
        let order = self.field.order();
        match norm {
            None => 1,
            Some(degree) => radix::checked_pow(order, degree)
                .map_or(usize::MAX, |power| power.saturating_mul(order.saturating_sub(1))),
        }
    }

    fn factor_order(&self, generator: &Self::Element) -> AlgebraResult<usize> {
        let degree = generator
            .degree()
            .ok_or(AlgebraError::FactorizationByZero)?;
        radix::checked_pow(self.field.order(), degree).ok_or(AlgebraError::OrderOverflow)
    }
}
