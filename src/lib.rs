//! # galois - Finite Rings and Fields from First Principles
//!
//! A small computational-algebra engine: prime fields, polynomial rings over
//! any field, and finite factor rings built by exhaustive table construction.
//! Factor rings are fields again when the generator is irreducible, so
//! extensions nest into towers such as `F_2 -> F_4 -> F_16`.
//!
//! ## Features
//!
//! - **Integers (ℤ)**: Euclidean ring with absolute-value norm
//! - **Prime Fields (𝔽_p)**: Modular arithmetic, Fermat inverses
//! - **Polynomial Rings (F[x])**: Canonical polynomials, Euclidean division
//! - **Factor Rings (R/(g))**: Addition and multiplication tables
//! - **Irreducibility**: Root test plus exhaustive trial division
//! - **Serialization**: JSON snapshots of polynomials and tables
//!
//! ## Quick Start
//!
//! ```rust
//! use galois::{is_irreducible, FactorRing, Field, PolynomialRing, PrimeField, Ring};
//!
//! // F_3[x] and the generator x^2 + 1
//! let ring = PolynomialRing::new(PrimeField::new(3).unwrap());
//! let generator = ring.polynom(vec![1, 0, 1]);
//! assert!(is_irreducible(&ring, &generator).unwrap());
//!
//! // F_9 = F_3[x]/(x^2 + 1)
//! let f9 = FactorRing::new(ring, generator).unwrap();
//! assert_eq!(f9.order(), 9);
//! assert!(f9.is_field());
//!
//! // x * x = -1 = 2
//! assert_eq!(f9.mul(&3, &3), 2);
//! ```
//!
//! ## Module Overview
//!
//! - [`radix`] - Integer <-> digit sequence bijection
//! - [`ring`] - `Ring`/`Field` traits, integers and polynomial rings
//! - [`field`] - Prime fields and factor rings
//! - [`irreducible`] - Irreducibility test
//! - [`catalog`] - Polynomials by degree with irreducibility flags
//! - [`serialization`] - JSON snapshots
//! - [`config`] - Size limits
//! - [`error`] - Error type

pub mod catalog;
pub mod config;
pub mod error;
pub mod field;
pub mod irreducible;
pub mod radix;
pub mod ring;
pub mod serialization;

// Re-export commonly used types for convenience
pub use config::Limits;
pub use error::{AlgebraError, AlgebraResult};
pub use field::{FactorRing, PrimeField};
pub use irreducible::is_irreducible;
pub use ring::{Field, IntegerRing, Norm, Polynomial, PolynomialRing, Ring};
pub use serialization::{FactorRingSnapshot, PolynomialSnapshot};
