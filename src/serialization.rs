//! JSON snapshots of polynomials and factor rings
//!
//! Elements are written as enumeration indices, so a snapshot only makes
//! sense next to the structure it was taken from. A factor ring snapshot
//! carries the complete tables and can be loaded by tools that know nothing
//! about the base ring. It is itself a [`Field`], so a loaded snapshot can be
//! extended again without its base ring.

use crate::error::{AlgebraError, AlgebraResult};
use crate::field::FactorRing;
use crate::ring::{Field, Norm, Polynomial, PolynomialRing, Ring};
use serde::{Deserialize, Serialize};

// ==================== Polynomial Serialization ====================

/// Serializable representation of a polynomial
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PolynomialSnapshot {
    /// `null` for the zero polynomial
    pub degree: Option<usize>,
    /// Coefficient indices, lowest degree first
    pub coefficients: Vec<usize>,
}

impl PolynomialSnapshot {
    /// Snapshot `poly`, writing each coefficient as its field index.
    pub fn from_polynomial<F: Field>(
        ring: &PolynomialRing<F>,
        poly: &Polynomial<F::Element>,
    ) -> AlgebraResult<Self> {
        let coefficients = poly
            .coefficients()
            .iter()
            .map(|c| {
                ring.field()
                    .index(c)
                    .ok_or_else(|| AlgebraError::ResidueNotFound(c.to_string()))
            })
            .collect::<AlgebraResult<Vec<_>>>()?;

        Ok(PolynomialSnapshot {
            degree: poly.degree(),
            coefficients,
        })
    }

    /// Rebuild the polynomial in `ring`.
    ///
    /// Fails if a coefficient index is outside the field or the recorded
    /// degree does not match the coefficients.
    pub fn to_polynomial<F: Field>(
        &self,
        ring: &PolynomialRing<F>,
    ) -> AlgebraResult<Polynomial<F::Element>> {
        let order = ring.field().order();
        if let Some(&bad) = self.coefficients.iter().find(|&&c| c >= order) {
            return Err(AlgebraError::Serialization(format!(
                "coefficient index {} outside a field of order {}",
                bad, order
            )));
        }

        let poly = ring.polynom_from_indices(&self.coefficients);
        if poly.degree() != self.degree {
            return Err(AlgebraError::Serialization(format!(
                "recorded degree {:?} but coefficients give {:?}",
                self.degree,
                poly.degree()
            )));
        }
        Ok(poly)
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> AlgebraResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Create from JSON string
    pub fn from_json(json: &str) -> AlgebraResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ==================== Factor Ring Serialization ====================

/// Serializable representation of a factor ring's tables
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FactorRingSnapshot {
    pub order: usize,
    pub null: usize,
    pub one: Option<usize>,
    pub addition: Vec<Vec<usize>>,
    pub multiplication: Vec<Vec<usize>>,
    pub opposite: Vec<usize>,
    /// `null` entries mark elements without an inverse
    pub inverse: Vec<Option<usize>>,
}

impl FactorRingSnapshot {
    /// Copy the tables out of `ring`.
    pub fn from_factor_ring<R: Ring>(ring: &FactorRing<R>) -> Self {
        FactorRingSnapshot {
            order: ring.order(),
            null: ring.null_element(),
            one: ring.one_element(),
            addition: ring.addition_table().to_vec(),
            multiplication: ring.multiplication_table().to_vec(),
            opposite: ring.opposite_table().to_vec(),
            inverse: ring.inverse_table().to_vec(),
        }
    }

    /// True when a one element exists and every nonzero element has an
    /// inverse.
    pub fn is_field(&self) -> bool {
        self.one.is_some()
            && self
                .inverse
                .iter()
                .enumerate()
                .all(|(i, inv)| i == self.null || inv.is_some())
    }

    /// Checks that every table has the recorded order and every entry is a
    /// valid index.
    pub fn validate(&self) -> AlgebraResult<()> {
        let n = self.order;
        let in_range = |i: &usize| *i < n;
        let square = |table: &[Vec<usize>]| {
            table.len() == n && table.iter().all(|row| row.len() == n && row.iter().all(in_range))
        };

        let consistent = in_range(&self.null)
            && self.one.as_ref().map_or(true, in_range)
            && square(&self.addition)
            && square(&self.multiplication)
            && self.opposite.len() == n
            && self.opposite.iter().all(in_range)
            && self.inverse.len() == n
            && self.inverse.iter().flatten().all(in_range);

        if consistent {
            Ok(())
        } else {
            Err(AlgebraError::Serialization(format!(
                "tables do not describe a structure of order {}",
                n
            )))
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> AlgebraResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Create from JSON string, rejecting inconsistent tables
    pub fn from_json(json: &str) -> AlgebraResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

/// Table lookups, as for [`FactorRing`]. Indices must be below the order.
impl Ring for FactorRingSnapshot {
    type Element = usize;

    fn add(&self, a: &usize, b: &usize) -> usize {
        self.addition[*a][*b]
    }

    fn mul(&self, a: &usize, b: &usize) -> usize {
        self.multiplication[*a][*b]
    }

    fn opposite(&self, a: &usize) -> usize {
        self.opposite[*a]
    }

    fn norm(&self, a: &usize) -> Norm {
        (*a != self.null).then_some(0)
    }

    fn modulo(&self, _a: &usize, b: &usize) -> AlgebraResult<usize> {
        if *b == self.null {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(self.null)
    }

    fn element(&self, index: usize) -> usize {
        index
    }

    fn index(&self, a: &usize) -> Option<usize> {
        (*a < self.order).then_some(*a)
    }

    fn norm_count(&self, norm: Norm) -> usize {
        match norm {
            None => 1,
            Some(0) => self.order.saturating_sub(1),
            Some(_) => 0,
        }
    }
}

impl Field for FactorRingSnapshot {
    fn order(&self) -> usize {
        self.order
    }

    fn null_element(&self) -> usize {
        self.null
    }

    fn one_element(&self) -> Option<usize> {
        self.one
    }

    fn inverse(&self, a: &usize) -> Option<usize> {
        self.inverse[*a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::PrimeField;
    use crate::ring::IntegerRing;

    #[test]
    fn test_polynomial_snapshot() {
        let ring = PolynomialRing::new(PrimeField::new(5).unwrap());
        let poly = ring.polynom(vec![4, 0, 3]);

        let snapshot = PolynomialSnapshot::from_polynomial(&ring, &poly).unwrap();
        assert_eq!(snapshot.degree, Some(2));
        assert_eq!(snapshot.coefficients, vec![4, 0, 3]);

        let json = snapshot.to_json().unwrap();
        let restored = PolynomialSnapshot::from_json(&json).unwrap();
        assert_eq!(restored.to_polynomial(&ring).unwrap(), poly);
    }

    #[test]
    fn test_zero_polynomial_snapshot() {
        let ring = PolynomialRing::new(PrimeField::new(5).unwrap());
        let snapshot = PolynomialSnapshot::from_polynomial(&ring, &ring.zero()).unwrap();

        assert_eq!(snapshot.degree, None);
        assert!(snapshot.to_json().unwrap().contains("\"degree\": null"));
    }

    #[test]
    fn test_polynomial_snapshot_rejects_bad_input() {
        let ring = PolynomialRing::new(PrimeField::new(5).unwrap());
        let out_of_field = PolynomialSnapshot {
            degree: Some(0),
            coefficients: vec![7],
        };
        assert!(matches!(
            out_of_field.to_polynomial(&ring),
            Err(AlgebraError::Serialization(_))
        ));

        let wrong_degree = PolynomialSnapshot {
            degree: Some(3),
            coefficients: vec![1, 2],
        };
        assert!(matches!(
            wrong_degree.to_polynomial(&ring),
            Err(AlgebraError::Serialization(_))
        ));
    }

    #[test]
    fn test_factor_ring_snapshot() {
        let ring = FactorRing::new(IntegerRing::new(), 4).unwrap();
        let snapshot = FactorRingSnapshot::from_factor_ring(&ring);

        assert_eq!(snapshot.order, 4);
        assert_eq!(snapshot.opposite, vec![0, 3, 2, 1]);
        assert_eq!(snapshot.inverse, vec![None, Some(1), None, Some(3)]);
        assert!(!snapshot.is_field());

        let json = snapshot.to_json().unwrap();
        assert_eq!(FactorRingSnapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn test_snapshot_acts_like_its_factor_ring() {
        let ring = PolynomialRing::new(PrimeField::new(3).unwrap());
        let f9 = FactorRing::new(ring.clone(), ring.polynom(vec![1, 0, 1])).unwrap();
        let snapshot = FactorRingSnapshot::from_factor_ring(&f9);

        assert_eq!(snapshot.order(), 9);
        assert_eq!(snapshot.null_element(), f9.null_element());
        assert_eq!(snapshot.one_element(), f9.one_element());
        assert!(snapshot.is_field());
        assert_eq!(snapshot.norm(&0), None);
        assert_eq!(snapshot.norm(&5), Some(0));
        assert_eq!(snapshot.modulo(&5, &0), Err(AlgebraError::DivisionByZero));
        assert_eq!(snapshot.factor_order(&3), Ok(1));
        for a in 0..9 {
            assert_eq!(snapshot.opposite(&a), f9.opposite(&a));
            assert_eq!(snapshot.inverse(&a), f9.inverse(&a));
            for b in 0..9 {
                assert_eq!(snapshot.add(&a, &b), f9.add(&a, &b));
                assert_eq!(snapshot.mul(&a, &b), f9.mul(&a, &b));
            }
        }
    }

    #[test]
    fn test_snapshot_extends_again() {
        // F_4 from JSON, then F_16 = F_4[y]/(y^2 + y + x)
        let ring2 = PolynomialRing::new(PrimeField::new(2).unwrap());
        let f4 = FactorRing::new(ring2.clone(), ring2.polynom(vec![1, 1, 1])).unwrap();
        let json = FactorRingSnapshot::from_factor_ring(&f4).to_json().unwrap();
        let loaded = FactorRingSnapshot::from_json(&json).unwrap();

        let x = f4.residue_index(&ring2.polynom(vec![0, 1])).unwrap();
        let ring4 = PolynomialRing::new(loaded);
        let generator = ring4.polynom(vec![x, 1, 1]);
        assert_eq!(crate::is_irreducible(&ring4, &generator), Ok(true));

        let f16 = FactorRing::new(ring4, generator).unwrap();
        assert_eq!(f16.order(), 16);
        assert!(f16.is_field());
    }

    #[test]
    fn test_factor_ring_snapshot_rejects_ragged_tables() {
        let json = r#"{
            "order": 2, "null": 0, "one": 1,
            "addition": [[0, 1], [1]],
            "multiplication": [[0, 0], [0, 1]],
            "opposite": [0, 1],
            "inverse": [null, 1]
        }"#;
        assert!(matches!(
            FactorRingSnapshot::from_json(json),
            Err(AlgebraError::Serialization(_))
        ));
        assert!(matches!(
            FactorRingSnapshot::from_json("not json"),
            Err(AlgebraError::Serialization(_))
        ));
    }
}
