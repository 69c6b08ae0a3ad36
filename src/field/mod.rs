//! Finite field implementations
//!
//! This module provides two ways to obtain a [`Field`](crate::ring::Field):
//! - F_p: Prime fields (order p) - use `PrimeField`
//! - F_p^k and other finite quotients - use `FactorRing`
//!
//! # When to use which implementation
//!
//! - **PrimeField**: For F_p where p is any prime
//!   - Direct modular arithmetic, no tables
//!   - Works for large moduli
//!
//! - **FactorRing<R>**: For R/(g) with R the integers or a polynomial ring
//!   - Addition and multiplication become table lookups
//!   - F_p^k when g is irreducible of degree k over F_p
//!   - Nests: a factor ring can be the coefficient field of the next
//!     polynomial ring

pub mod factor_ring;
pub mod prime;

pub use factor_ring::FactorRing;
pub use prime::PrimeField;
