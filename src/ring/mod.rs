//! Ring and field capabilities
//!
//! Structures in this crate are objects that operate on plain element values:
//! the ring carries the parameters (modulus, coefficient field, generator),
//! the elements are integers, indices or polynomials. This lets the order of
//! a field be chosen at runtime while still checking every composition
//! statically.
//!
//! - [`Ring`]: addition, multiplication, opposites, a Euclidean norm and
//!   remainder, plus a canonical enumeration of elements by index.
//! - [`Field`]: a ring with identity elements and multiplicative inverses.
//!
//! # Laws
//! Implementations must satisfy:
//! - Additive identity: `add(a, zero) = a`
//! - Additive inverse: `add(a, opposite(a)) = zero`
//! - Euclidean remainder: `norm(modulo(a, b)) < norm(b)` for `b != 0`
//! - Enumeration: `index(element(i)) = Some(i)` where a native index exists

pub mod integer;
pub mod polynomial;

use crate::error::{AlgebraError, AlgebraResult};
use std::fmt;

pub use integer::IntegerRing;
pub use polynomial::{Polynomial, PolynomialRing};

/// Euclidean norm of an element.
///
/// `None` marks the zero element, which has no magnitude. Since `None`
/// orders below every `Some`, comparisons between norms behave like
/// comparisons between degrees with `-inf` for the zero polynomial.
pub type Norm = Option<usize>;

/// A commutative Euclidean ring whose elements can be enumerated.
pub trait Ring {
    /// Element values operated on by this ring.
    type Element: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// Sum `a + b`.
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Product `a * b`.
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Additive inverse `-a`.
    fn opposite(&self, a: &Self::Element) -> Self::Element;

    /// Difference `a - b = a + (-b)`.
    fn subtract(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.add(a, &self.opposite(b))
    }

    /// Euclidean norm; `None` for the zero element.
    fn norm(&self, a: &Self::Element) -> Norm;

    /// Checks whether `a` is the additive identity.
    fn is_zero(&self, a: &Self::Element) -> bool {
        self.norm(a).is_none()
    }

    /// Remainder of `a` divided by `b`.
    ///
    /// # Errors
    /// [`AlgebraError::DivisionByZero`] when `b` has no norm.
    fn modulo(&self, a: &Self::Element, b: &Self::Element) -> AlgebraResult<Self::Element>;

    /// Element equality as defined by the ring.
    fn equal(&self, a: &Self::Element, b: &Self::Element) -> bool {
        a == b
    }

    /// The element at position `index` of the canonical enumeration.
    ///
    /// The enumeration lists the zero element first and then the elements
    /// by increasing norm, so that the first `k` elements form a complete
    /// residue system modulo any generator whose factor ring has order `k`.
    fn element(&self, index: usize) -> Self::Element;

    /// Position of `a` in the canonical enumeration.
    ///
    /// The default implementation returns `None`, meaning the ring offers no
    /// native index and callers have to search by [`Ring::equal`].
    fn index(&self, _a: &Self::Element) -> Option<usize> {
        None
    }

    /// Number of enumerated elements whose norm is exactly `norm`.
    fn norm_count(&self, norm: Norm) -> usize;

    /// Order of the factor ring modulo `generator`: the zero class plus
    /// every element whose norm is strictly below the generator's.
    ///
    /// # Errors
    /// [`AlgebraError::FactorizationByZero`] for a zero generator,
    /// [`AlgebraError::OrderOverflow`] if the order does not fit a `usize`.
    fn factor_order(&self, generator: &Self::Element) -> AlgebraResult<usize> {
        let bound = self
            .norm(generator)
            .ok_or(AlgebraError::FactorizationByZero)?;

        (0..bound).try_fold(self.norm_count(None), |order, norm| {
            order
                .checked_add(self.norm_count(Some(norm)))
                .ok_or(AlgebraError::OrderOverflow)
        })
    }

    /// Complete residue system modulo `generator`, in enumeration order.
    ///
    /// # Errors
    /// Same as [`Ring::factor_order`].
    fn factor_set(&self, generator: &Self::Element) -> AlgebraResult<Vec<Self::Element>> {
        let order = self.factor_order(generator)?;
        Ok((0..order).map(|i| self.element(i)).collect())
    }
}

/// A ring in which nonzero elements may have multiplicative inverses.
///
/// [`Field::one_element`] and [`Field::inverse`] return `None` rather than
/// failing: a factor ring built from a reducible generator is a valid value
/// of this trait that simply lacks some inverses.
pub trait Field: Ring {
    /// Number of elements.
    fn order(&self) -> usize;

    /// Additive identity.
    fn null_element(&self) -> Self::Element;

    /// Multiplicative identity, if the structure has one.
    fn one_element(&self) -> Option<Self::Element>;

    /// Multiplicative inverse of `a`, if it exists.
    fn inverse(&self, a: &Self::Element) -> Option<Self::Element>;

    /// Quotient `a / b`, if `b` is invertible.
    fn divide(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        self.inverse(b).map(|inv| self.mul(a, &inv))
    }
}
