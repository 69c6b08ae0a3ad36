//! The ring of integers
//!
//! Elements are plain `i64` values with ordinary arithmetic. The norm is the
//! absolute value, and the canonical residues modulo `n` are `0..|n|`.

use super::{Norm, Ring};
use crate::error::{AlgebraError, AlgebraResult};

/// The ring ℤ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntegerRing;

impl IntegerRing {
    /// Creates the ring of integers.
    pub fn new() -> Self {
        IntegerRing
    }
}

impl Ring for IntegerRing {
    type Element = i64;

    fn add(&self, a: &i64, b: &i64) -> i64 {
        a + b
    }

    fn mul(&self, a: &i64, b: &i64) -> i64 {
        a * b
    }

    fn opposite(&self, a: &i64) -> i64 {
        -a
    }

    fn norm(&self, a: &i64) -> Norm {
        if *a == 0 {
            None
        } else {
            usize::try_from(a.unsigned_abs()).ok()
        }
    }

    /// Truncated remainder: the sign follows the dividend, so non-negative
    /// residues stay non-negative whatever the sign of the divisor.
    fn modulo(&self, a: &i64, b: &i64) -> AlgebraResult<i64> {
        if self.norm(b).is_none() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(a.wrapping_rem(*b))
    }

    fn element(&self, index: usize) -> i64 {
        index as i64
    }

    fn index(&self, a: &i64) -> Option<usize> {
        usize::try_from(*a).ok()
    }

    /// One non-negative representative per magnitude.
    fn norm_count(&self, norm: Norm) -> usize {
        match norm {
            None => 1,
            Some(0) => 0,
            Some(_) => 1,
        }
    }

    fn factor_order(&self, generator: &i64) -> AlgebraResult<usize> {
        self.norm(generator).ok_or(AlgebraError::FactorizationByZero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_set() {
        let ring = IntegerRing::new();
        assert_eq!(ring.factor_set(&3).unwrap(), vec![0, 1, 2]);
        assert_eq!(ring.factor_set(&-4).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(ring.factor_set(&0), Err(AlgebraError::FactorizationByZero));
    }

    #[test]
    fn test_modulo() {
        let ring = IntegerRing::new();
        assert_eq!(ring.modulo(&73, &10), Ok(3));
        assert_eq!(ring.modulo(&0, &243), Ok(0));
        assert_eq!(ring.modulo(&7, &-3), Ok(1));
        assert_eq!(ring.modulo(&1337, &0), Err(AlgebraError::DivisionByZero));
    }

    #[test]
    fn test_norm() {
        let ring = IntegerRing::new();
        assert_eq!(ring.norm(&0), None);
        assert_eq!(ring.norm(&-5), Some(5));
        assert_eq!(ring.norm(&12), Some(12));
        assert!(ring.is_zero(&0));
    }

    #[test]
    fn test_generic_order_matches_magnitude() {
        // The closed form and the norm-count sum agree.
        let ring = IntegerRing::new();
        let summed = (0..7).fold(ring.norm_count(None), |acc, k| acc + ring.norm_count(Some(k)));
        assert_eq!(summed, ring.factor_order(&7).unwrap());
    }

    #[test]
    fn test_arithmetic() {
        let ring = IntegerRing::new();
        assert_eq!(ring.add(&4, &-9), -5);
        assert_eq!(ring.mul(&4, &-9), -36);
        assert_eq!(ring.opposite(&4), -4);
        assert_eq!(ring.subtract(&4, &9), -5);
        assert_eq!(ring.index(&-1), None);
        assert_eq!(ring.index(&ring.element(17)), Some(17));
    }
}
