//! Brute-force irreducibility test
//!
//! A polynomial counts as reducible as soon as it has a root or a divisor of
//! degree `1..n`. The test first looks for roots by evaluating at every field
//! element, then tries every non-constant polynomial of degree below `n` as a
//! divisor. Linear polynomials always have a root and are reported
//! reducible; nonzero constants have neither and are reported irreducible.
//! The divisor search costs O(q^n) divisions, which is fine for the small
//! fields this crate targets.

use crate::error::{AlgebraError, AlgebraResult};
use crate::radix;
use crate::ring::{Field, Polynomial, PolynomialRing, Ring};
use log::trace;

/// Decides whether `poly` is irreducible in `ring`.
///
/// The zero polynomial is reducible (every element is a root of it).
///
/// # Errors
/// - [`AlgebraError::NotInvertible`] if a trial division hits a leading
///   coefficient without an inverse (coefficients form a ring, not a field).
/// - [`AlgebraError::OrderOverflow`] if the candidate range does not fit in
///   a `usize`.
pub fn is_irreducible<F: Field>(
    ring: &PolynomialRing<F>,
    poly: &Polynomial<F::Element>,
) -> AlgebraResult<bool> {
    let Some(degree) = poly.degree() else {
        return Ok(false);
    };

    let field = ring.field();
    let order = field.order();

    if let Some(root) = (0..order)
        .map(|i| field.element(i))
        .find(|value| field.is_zero(&ring.application(poly, value)))
    {
        trace!("{} has the root {}", poly, root);
        return Ok(false);
    }

    // Indices [q, q^degree) are exactly the polynomials of degree 1..degree-1,
    // empty for constants and linear polynomials.
    let end = radix::checked_pow(order, degree).ok_or(AlgebraError::OrderOverflow)?;
    for index in order..end {
        let candidate = ring.element(index);
        if ring.modulo(poly, &candidate)?.is_zero() {
            trace!("{} is divisible by {}", poly, candidate);
            return Ok(false);
        }
    }

    Ok(true)
}
