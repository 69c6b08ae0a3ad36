//! Positional encoding between integers and digit sequences.
//!
//! Every finite structure in the crate addresses its elements by a small
//! integer. A polynomial of degree `< d` over a field of order `q` is the
//! digit sequence of its index in base `q`, least significant digit first:
//!
//! ```text
//! index 5 over F_3  ->  [2, 1]  ->  2 + x
//! index 9 over F_3  ->  [0, 0, 1]  ->  x^2
//! ```

/// Digits of `n` in `base`, least significant first.
///
/// `expand(0, base)` is `[0]`; otherwise the result has no trailing zero.
///
/// # Panics
/// Panics if `base < 2`.
pub fn expand(mut n: usize, base: usize) -> Vec<usize> {
    assert!(base >= 2, "radix base must be at least 2, got {}", base);

    if n == 0 {
        return vec![0];
    }

    let mut digits = Vec::new();
    while n > 0 {
        digits.push(n % base);
        n /= base;
    }
    digits
}

/// Inverse of [`expand`]: `d0 + base * (d1 + base * (d2 + ...))`.
///
/// `contract(&[], base)` is `0`.
pub fn contract(digits: &[usize], base: usize) -> usize {
    digits
        .iter()
        .rev()
        .fold(0, |acc, &digit| acc * base + digit)
}

/// `base^exp`, or `None` if it does not fit in a `usize`.
pub fn checked_pow(base: usize, exp: usize) -> Option<usize> {
    let exp = u32::try_from(exp).ok()?;
    base.checked_pow(exp)
}
