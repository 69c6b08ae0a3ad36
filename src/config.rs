//! Size limits for table-driven structures
//!
//! Factor rings cost O(order²) to build and the polynomial catalog grows as
//! `q^degree`, so both are bounded by explicit limits. The limits can be
//! loaded from JSON; missing fields take their defaults.
//!
//! ```
//! use galois::Limits;
//!
//! let limits = Limits::from_json_str(r#"{ "max_factor_order": 256 }"#).unwrap();
//! assert_eq!(limits.max_factor_order, 256);
//! assert_eq!(limits.max_listed_polynomials, 64);
//! ```

use crate::error::AlgebraResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_max_factor_order() -> usize {
    1024
}

fn default_max_listed_polynomials() -> usize {
    64
}

/// Upper bounds on the structures the engine agrees to build.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest factor ring order accepted by [`FactorRing`](crate::FactorRing).
    #[serde(default = "default_max_factor_order")]
    pub max_factor_order: usize,

    /// Largest number of entries returned by
    /// [`list_polynomials`](crate::catalog::list_polynomials).
    #[serde(default = "default_max_listed_polynomials")]
    pub max_listed_polynomials: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_factor_order: default_max_factor_order(),
            max_listed_polynomials: default_max_listed_polynomials(),
        }
    }
}

impl Limits {
    /// Parse limits from a JSON object.
    pub fn from_json_str(json: &str) -> AlgebraResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read limits from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> AlgebraResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
