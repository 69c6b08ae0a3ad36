//! Polynomial catalog
//!
//! Lists the polynomials of a given degree together with their
//! irreducibility, which is what one needs to pick the generator of the next
//! extension. The polynomials of exact degree `d` over a field of order `q`
//! are the indices `[q^d, q^(d+1))` of the polynomial ring's enumeration.

use crate::config::Limits;
use crate::error::{AlgebraError, AlgebraResult};
use crate::irreducible::is_irreducible;
use crate::radix;
use crate::ring::{Field, Polynomial, PolynomialRing, Ring};
use log::debug;

/// One listed polynomial.
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialEntry<E> {
    /// Position in the polynomial ring's enumeration.
    pub index: usize,
    pub polynomial: Polynomial<E>,
    pub irreducible: bool,
}

/// The polynomials of one degree, possibly cut short.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing<E> {
    pub entries: Vec<PolynomialEntry<E>>,
    /// Set when more polynomials of this degree exist than were listed.
    pub truncated: bool,
}

/// Deepest extension degree offered for a field of order `field_order`: the
/// smallest `d >= 1` with `field_order^d >= limits.max_factor_order`.
pub fn max_listed_degree(field_order: usize, limits: &Limits) -> usize {
    if field_order < 2 {
        return 1;
    }

    let mut degree = 1;
    let mut power = field_order;
    while power < limits.max_factor_order {
        power = power.saturating_mul(field_order);
        degree += 1;
    }
    degree
}

/// Polynomials of exact degree `degree` in index order, each flagged with
/// its irreducibility, at most `limits.max_listed_polynomials` of them.
///
/// # Errors
/// [`AlgebraError::OrderOverflow`] if `q^degree` does not fit in a `usize`,
/// and any error of [`is_irreducible`].
pub fn list_polynomials<F: Field>(
    ring: &PolynomialRing<F>,
    degree: usize,
    limits: &Limits,
) -> AlgebraResult<Listing<F::Element>> {
    let order = ring.field().order();
    let start = radix::checked_pow(order, degree).ok_or(AlgebraError::OrderOverflow)?;
    let available = start.saturating_mul(order) - start;
    let count = available.min(limits.max_listed_polynomials);

    debug!(
        "listing {} of {} polynomials of degree {} over a field of order {}",
        count, available, degree, order
    );

    let entries = (start..start + count)
        .map(|index| {
            let polynomial = ring.element(index);
            let irreducible = is_irreducible(ring, &polynomial)?;
            Ok(PolynomialEntry {
                index,
                polynomial,
                irreducible,
            })
        })
        .collect::<AlgebraResult<Vec<_>>>()?;

    Ok(Listing {
        entries,
        truncated: count < available,
    })
}

/// The irreducible entries of [`list_polynomials`].
pub fn irreducibles<F: Field>(
    ring: &PolynomialRing<F>,
    degree: usize,
    limits: &Limits,
) -> AlgebraResult<Vec<PolynomialEntry<F::Element>>> {
    let listing = list_polynomials(ring, degree, limits)?;
    Ok(listing
        .entries
        .into_iter()
        .filter(|entry| entry.irreducible)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::PrimeField;

    #[test]
    fn test_max_listed_degree() {
        let limits = Limits::default();
        // 2^10 = 1024
        assert_eq!(max_listed_degree(2, &limits), 10);
        // 3^6 = 729 < 1024 <= 3^7
        assert_eq!(max_listed_degree(3, &limits), 7);
        assert_eq!(max_listed_degree(2048, &limits), 1);
        assert_eq!(max_listed_degree(1, &limits), 1);
    }

    #[test]
    fn test_quadratics_over_f2() {
        let ring = PolynomialRing::new(PrimeField::new(2).unwrap());
        let listing = list_polynomials(&ring, 2, &Limits::default()).unwrap();

        assert!(!listing.truncated);
        let indices: Vec<usize> = listing.entries.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![4, 5, 6, 7]);

        let irreducible: Vec<String> = listing
            .entries
            .iter()
            .filter(|e| e.irreducible)
            .map(|e| e.polynomial.to_string())
            .collect();
        assert_eq!(irreducible, vec!["x^2 + x + 1"]);
    }

    #[test]
    fn test_truncation() {
        let limits = Limits {
            max_listed_polynomials: 5,
            ..Limits::default()
        };
        let ring = PolynomialRing::new(PrimeField::new(3).unwrap());
        let listing = list_polynomials(&ring, 2, &limits).unwrap();

        assert_eq!(listing.entries.len(), 5);
        assert!(listing.truncated);
        assert_eq!(listing.entries[0].index, 9);
    }

    #[test]
    fn test_constants_and_linear_polynomials() {
        let ring = PolynomialRing::new(PrimeField::new(5).unwrap());

        let constants = list_polynomials(&ring, 0, &Limits::default()).unwrap();
        assert_eq!(constants.entries.len(), 4);
        assert!(constants.entries.iter().all(|e| e.irreducible));

        let linear = list_polynomials(&ring, 1, &Limits::default()).unwrap();
        assert_eq!(linear.entries.len(), 20);
        assert!(linear.entries.iter().all(|e| !e.irreducible));
    }
}
