//! Finite factor rings R / (g)
//!
//! A factor ring is built once, by enumerating a complete residue system of
//! the base ring modulo the generator and reducing every pairwise sum and
//! product. The resulting tables are the entire state of the structure:
//! after construction every operation is a lookup, whatever the cost of the
//! base ring's arithmetic.
//!
//! Elements are indices into the residue list. With a polynomial ring over
//! `F_p` and an irreducible generator of degree `k`, this is `F_{p^k}`; the
//! result is again a [`Field`] and can serve as the coefficient field of the
//! next extension.
//!
//! Identity elements are found from fixed points: in a ring, `a + a = a`
//! only for `a = 0`, and in a field `a * a = a, a != 0` only for `a = 1`.
//! For quotients that are not integral domains several idempotents may
//! exist; the lowest index is taken.

use crate::config::Limits;
use crate::error::{AlgebraError, AlgebraResult};
use crate::ring::{Field, Norm, Ring};
use log::{debug, trace};
use std::fmt;

/// The quotient of `ring` by the principal ideal generated by `generator`.
#[derive(Clone, Debug)]
pub struct FactorRing<R: Ring> {
    ring: R,
    generator: R::Element,
    elements: Vec<R::Element>,
    addition: Vec<Vec<usize>>,
    multiplication: Vec<Vec<usize>>,
    opposites: Vec<usize>,
    inverses: Vec<Option<usize>>,
    null: usize,
    one: Option<usize>,
}

impl<R: Ring> FactorRing<R> {
    /// Builds `ring / (generator)` under the default [`Limits`].
    ///
    /// # Errors
    /// See [`FactorRing::with_limits`].
    pub fn new(ring: R, generator: R::Element) -> AlgebraResult<Self> {
        Self::with_limits(ring, generator, &Limits::default())
    }

    /// Builds `ring / (generator)`, refusing orders above
    /// `limits.max_factor_order`.
    ///
    /// Construction takes O(order²) time and memory.
    ///
    /// # Errors
    /// - [`AlgebraError::FactorizationByZero`] if `generator` is zero.
    /// - [`AlgebraError::OrderLimitExceeded`] / [`AlgebraError::OrderOverflow`]
    ///   if the ring would be too large.
    /// - Any error of the base ring's `modulo`.
    /// - [`AlgebraError::ResidueNotFound`] / [`AlgebraError::DegenerateTable`]
    ///   if the base ring's enumeration is not a residue system.
    pub fn with_limits(ring: R, generator: R::Element, limits: &Limits) -> AlgebraResult<Self> {
        let order = ring.factor_order(&generator)?;
        if order > limits.max_factor_order {
            return Err(AlgebraError::OrderLimitExceeded {
                order,
                limit: limits.max_factor_order,
            });
        }

        debug!("building factor ring of order {} modulo ({})", order, generator);

        let elements = ring.factor_set(&generator)?;
        let addition = Self::fill_table(&ring, &generator, &elements, R::add)?;
        let multiplication = Self::fill_table(&ring, &generator, &elements, R::mul)?;

        let null = (0..order)
            .find(|&i| addition[i][i] == i)
            .ok_or(AlgebraError::DegenerateTable("no additive identity"))?;
        let one = (0..order).find(|&i| i != null && multiplication[i][i] == i);

        trace!("null element at index {}, one element at {:?}", null, one);

        let opposites = addition
            .iter()
            .map(|row| row.iter().position(|&sum| sum == null))
            .collect::<Option<Vec<_>>>()
            .ok_or(AlgebraError::DegenerateTable("element without an opposite"))?;

        let inverses = multiplication
            .iter()
            .map(|row| one.and_then(|one| row.iter().position(|&product| product == one)))
            .collect();

        Ok(FactorRing {
            ring,
            generator,
            elements,
            addition,
            multiplication,
            opposites,
            inverses,
            null,
            one,
        })
    }

    fn fill_table(
        ring: &R,
        generator: &R::Element,
        elements: &[R::Element],
        op: fn(&R, &R::Element, &R::Element) -> R::Element,
    ) -> AlgebraResult<Vec<Vec<usize>>> {
        elements
            .iter()
            .map(|a| {
                elements
                    .iter()
                    .map(|b| {
                        let residue = ring.modulo(&op(ring, a, b), generator)?;
                        Self::locate(ring, elements, &residue)
                    })
                    .collect::<AlgebraResult<Vec<_>>>()
            })
            .collect()
    }

    /// Index of `residue` among `elements`: the ring's native index when it
    /// has one, a scan by [`Ring::equal`] otherwise.
    fn locate(ring: &R, elements: &[R::Element], residue: &R::Element) -> AlgebraResult<usize> {
        ring.index(residue)
            .filter(|&i| i < elements.len())
            .or_else(|| elements.iter().position(|e| ring.equal(e, residue)))
            .ok_or_else(|| AlgebraError::ResidueNotFound(residue.to_string()))
    }

    /// The base ring.
    pub fn ring(&self) -> &R {
        &self.ring
    }

    /// The generator of the ideal.
    pub fn generator(&self) -> &R::Element {
        &self.generator
    }

    /// Representative in the base ring of the element at `index`.
    pub fn representative(&self, index: usize) -> Option<&R::Element> {
        self.elements.get(index)
    }

    /// All residue representatives, in index order.
    pub fn representatives(&self) -> &[R::Element] {
        &self.elements
    }

    /// Index of the residue class of an arbitrary base-ring element.
    ///
    /// # Errors
    /// Errors of the base ring's `modulo`, or
    /// [`AlgebraError::ResidueNotFound`].
    pub fn residue_index(&self, value: &R::Element) -> AlgebraResult<usize> {
        let residue = self.ring.modulo(value, &self.generator)?;
        Self::locate(&self.ring, &self.elements, &residue)
    }

    /// Renders the element at `index` as its bracketed residue class,
    /// e.g. `[x + 1]`.
    pub fn render(&self, index: usize) -> Option<String> {
        self.elements.get(index).map(|e| format!("[{}]", e))
    }

    /// Like [`FactorRing::render`] with the generator attached, e.g.
    /// `[x + 1]_(x^2 + 1)`.
    pub fn render_modulo(&self, index: usize) -> Option<String> {
        self.render(index)
            .map(|class| format!("{}_({})", class, self.generator))
    }

    /// True when a one element exists and every nonzero element has an
    /// inverse.
    pub fn is_field(&self) -> bool {
        self.one.is_some()
            && self
                .inverses
                .iter()
                .enumerate()
                .all(|(i, inv)| i == self.null || inv.is_some())
    }

    /// Addition table, `addition_table()[i][j] = i + j`.
    pub fn addition_table(&self) -> &[Vec<usize>] {
        &self.addition
    }

    /// Multiplication table, `multiplication_table()[i][j] = i * j`.
    pub fn multiplication_table(&self) -> &[Vec<usize>] {
        &self.multiplication
    }

    /// Opposite of each element.
    pub fn opposite_table(&self) -> &[usize] {
        &self.opposites
    }

    /// Inverse of each element, `None` where there is none.
    pub fn inverse_table(&self) -> &[Option<usize>] {
        &self.inverses
    }
}

/// Table lookups. Indices must be below the order; larger indices panic.
impl<R: Ring> Ring for FactorRing<R> {
    type Element = usize;

    fn add(&self, a: &usize, b: &usize) -> usize {
        self.addition[*a][*b]
    }

    fn mul(&self, a: &usize, b: &usize) -> usize {
        self.multiplication[*a][*b]
    }

    fn opposite(&self, a: &usize) -> usize {
        self.opposites[*a]
    }

    fn norm(&self, a: &usize) -> Norm {
        if *a == self.null {
            None
        } else {
            Some(0)
        }
    }

    fn modulo(&self, _a: &usize, b: &usize) -> AlgebraResult<usize> {
        if self.norm(b).is_none() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(self.null)
    }

    fn element(&self, index: usize) -> usize {
        index
    }

    fn index(&self, a: &usize) -> Option<usize> {
        (*a < self.elements.len()).then_some(*a)
    }

    fn norm_count(&self, norm: Norm) -> usize {
        match norm {
            None => 1,
            Some(0) => self.elements.len() - 1,
            Some(_) => 0,
        }
    }
}

impl<R: Ring> Field for FactorRing<R> {
    fn order(&self) -> usize {
        self.elements.len()
    }

    fn null_element(&self) -> usize {
        self.null
    }

    fn one_element(&self) -> Option<usize> {
        self.one
    }

    fn inverse(&self, a: &usize) -> Option<usize> {
        self.inverses[*a]
    }
}

impl<R: Ring> fmt::Display for FactorRing<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "quotient of order {} modulo ({})", self.elements.len(), self.generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::PrimeField;
    use crate::ring::{IntegerRing, PolynomialRing};

    #[test]
    fn test_integer_quotient_matches_prime_field() {
        let field = PrimeField::new(7).unwrap();
        let table = FactorRing::new(IntegerRing::new(), 7).unwrap();

        assert_eq!(table.order(), 7);
        assert_eq!(table.null_element(), 0);
        assert_eq!(table.one_element(), Some(1));
        for a in 0..7usize {
            for b in 0..7usize {
                assert_eq!(table.add(&a, &b) as u64, field.add(&(a as u64), &(b as u64)));
                assert_eq!(table.mul(&a, &b) as u64, field.mul(&(a as u64), &(b as u64)));
            }
            if a != 0 {
                assert_eq!(table.inverse(&a).map(|i| i as u64), field.inverse(&(a as u64)));
            }
        }
    }

    #[test]
    fn test_composite_quotient_is_not_a_field() {
        let ring = FactorRing::new(IntegerRing::new(), 6).unwrap();
        assert_eq!(ring.one_element(), Some(1));
        assert_eq!(ring.inverse(&2), None);
        assert_eq!(ring.inverse(&5), Some(5));
        assert!(!ring.is_field());
    }

    #[test]
    fn test_zero_generator() {
        let result = FactorRing::new(IntegerRing::new(), 0);
        assert!(matches!(result, Err(AlgebraError::FactorizationByZero)));
    }

    #[test]
    fn test_order_limit() {
        let limits = Limits {
            max_factor_order: 8,
            ..Limits::default()
        };
        let ring = PolynomialRing::new(PrimeField::new(3).unwrap());
        let generator = ring.polynom(vec![1, 0, 1]);
        let result = FactorRing::with_limits(ring, generator, &limits);

        assert!(matches!(
            result,
            Err(AlgebraError::OrderLimitExceeded { order: 9, limit: 8 })
        ));
    }

    #[test]
    fn test_residue_index() {
        let ring = PolynomialRing::new(PrimeField::new(3).unwrap());
        let generator = ring.polynom(vec![1, 0, 1]);
        let field = FactorRing::new(ring.clone(), generator).unwrap();

        // x^2 ≡ -1 = 2 (mod x^2 + 1)
        let x_squared = ring.polynom(vec![0, 0, 1]);
        assert_eq!(field.residue_index(&x_squared), Ok(2));
        assert_eq!(field.representative(4).map(|p| p.coefficients().to_vec()), Some(vec![1, 1]));
        assert_eq!(field.render(4).as_deref(), Some("[x + 1]"));
        assert_eq!(field.render(9), None);
        assert_eq!(field.render_modulo(4).as_deref(), Some("[x + 1]_(x^2 + 1)"));
        assert_eq!(field.render_modulo(0).as_deref(), Some("[0]_(x^2 + 1)"));
    }
}
