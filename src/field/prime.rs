//! Prime field F_p implementation
//!
//! Elements are integers reduced into `[0, p)`. The modulus is not checked
//! for primality: a composite modulus yields a ring in which some inverses
//! computed by [`PrimeField::inverse`] are wrong or absent.

use crate::error::{AlgebraError, AlgebraResult};
use crate::ring::{Field, Norm, Ring};
use std::fmt;

/// The field of integers modulo `order`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimeField {
    order: u64,
}

impl PrimeField {
    /// Creates the field of integers modulo `order`.
    ///
    /// # Errors
    /// [`AlgebraError::InvalidConstruction`] if `order <= 1`.
    pub fn new(order: u64) -> AlgebraResult<Self> {
        if order <= 1 || usize::try_from(order).is_err() {
            return Err(AlgebraError::InvalidConstruction(order));
        }
        Ok(PrimeField { order })
    }

    /// The modulus.
    pub fn modulus(&self) -> u64 {
        self.order
    }

    /// Reduces a signed integer into `[0, order)`.
    pub fn normalize(&self, x: i64) -> u64 {
        let reduced = x.unsigned_abs() % self.order;
        if x < 0 {
            self.opposite(&reduced)
        } else {
            reduced
        }
    }

    fn reduce(&self, x: &u64) -> u64 {
        x % self.order
    }
}

impl Ring for PrimeField {
    type Element = u64;

    fn add(&self, a: &u64, b: &u64) -> u64 {
        let sum = self.reduce(a) as u128 + self.reduce(b) as u128;
        (sum % self.order as u128) as u64
    }

    fn mul(&self, a: &u64, b: &u64) -> u64 {
        let product = self.reduce(a) as u128 * self.reduce(b) as u128;
        (product % self.order as u128) as u64
    }

    fn opposite(&self, a: &u64) -> u64 {
        (self.order - self.reduce(a)) % self.order
    }

    /// Every nonzero element is a unit, so all of them share norm 0.
    fn norm(&self, a: &u64) -> Norm {
        if self.reduce(a) == 0 {
            None
        } else {
            Some(0)
        }
    }

    fn modulo(&self, _a: &u64, b: &u64) -> AlgebraResult<u64> {
        if self.norm(b).is_none() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(0)
    }

    fn equal(&self, a: &u64, b: &u64) -> bool {
        self.reduce(a) == self.reduce(b)
    }

    fn element(&self, index: usize) -> u64 {
        index as u64 % self.order
    }

    fn index(&self, a: &u64) -> Option<usize> {
        usize::try_from(self.reduce(a)).ok()
    }

    fn norm_count(&self, norm: Norm) -> usize {
        match norm {
            None => 1,
            Some(0) => self.order() - 1,
            Some(_) => 0,
        }
    }
}

impl Field for PrimeField {
    fn order(&self) -> usize {
        self.order as usize
    }

    fn null_element(&self) -> u64 {
        0
    }

    fn one_element(&self) -> Option<u64> {
        Some(1)
    }

    /// Computes `x^(p-2)` with `p - 3` successive multiplications (Fermat's
    /// little theorem). Only correct when the modulus is prime.
    fn inverse(&self, x: &u64) -> Option<u64> {
        let x = self.reduce(x);
        if x == 0 {
            return None;
        }

        let mut result = x;
        for _ in 3..self.order {
            result = self.mul(&result, &x);
        }
        Some(result)
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "F_{}", self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        assert!(PrimeField::new(2).is_ok());
        assert_eq!(PrimeField::new(1), Err(AlgebraError::InvalidConstruction(1)));
        assert_eq!(PrimeField::new(0), Err(AlgebraError::InvalidConstruction(0)));
    }

    #[test]
    fn test_normalize() {
        let field = PrimeField::new(7).unwrap();
        assert_eq!(field.normalize(10), 3);
        assert_eq!(field.normalize(-1), 6);
        assert_eq!(field.normalize(-14), 0);
        assert_eq!(field.normalize(i64::MIN), field.opposite(&(i64::MIN.unsigned_abs() % 7)));
    }

    #[test]
    fn test_arithmetic() {
        // 3 + 5 = 8 ≡ 1 (mod 7), 3 * 5 = 15 ≡ 1 (mod 7)
        let field = PrimeField::new(7).unwrap();
        assert_eq!(field.add(&3, &5), 1);
        assert_eq!(field.mul(&3, &5), 1);
        assert_eq!(field.opposite(&3), 4);
        assert_eq!(field.opposite(&0), 0);
        assert_eq!(field.subtract(&3, &5), 5);
        // operands outside [0, p) are reduced first
        assert_eq!(field.add(&10, &11), 0);
    }

    #[test]
    fn test_inverse() {
        let field = PrimeField::new(7).unwrap();
        // 3^(-1) ≡ 5 (mod 7) because 3*5 = 15 ≡ 1 (mod 7)
        assert_eq!(field.inverse(&3), Some(5));
        assert_eq!(field.inverse(&0), None);
        assert_eq!(field.divide(&6, &2), Some(3));

        for x in 1..7 {
            let inv = field.inverse(&x).unwrap();
            assert_eq!(field.mul(&x, &inv), 1);
        }
    }

    #[test]
    fn test_inverse_in_smallest_fields() {
        let f2 = PrimeField::new(2).unwrap();
        assert_eq!(f2.inverse(&1), Some(1));

        let f3 = PrimeField::new(3).unwrap();
        assert_eq!(f3.inverse(&2), Some(2));
    }

    #[test]
    fn test_large_modulus_does_not_overflow() {
        let field = PrimeField::new(4_294_967_311).unwrap();
        let a = 4_294_967_310;
        assert_eq!(field.mul(&a, &a), 1);
    }

    #[test]
    fn test_ring_view() {
        let field = PrimeField::new(5).unwrap();
        assert_eq!(field.norm(&0), None);
        assert_eq!(field.norm(&3), Some(0));
        assert_eq!(field.modulo(&3, &2), Ok(0));
        assert_eq!(field.modulo(&3, &0), Err(AlgebraError::DivisionByZero));
        assert_eq!(field.factor_order(&2), Ok(1));
        assert_eq!(field.element(7), 2);
        assert!(field.equal(&8, &3));
        assert!(!field.equal(&8, &4));
        assert_eq!(field.to_string(), "F_5");
    }
}
