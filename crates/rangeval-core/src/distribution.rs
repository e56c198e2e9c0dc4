//! Synthetic column generation.
//!
//! Distributions are written the way they appear in benchmark parameters:
//! `EXP(0.01)` or `UNIFORM(1635012703,1635016303)`. Generation is seeded so
//! the same descriptor and seed always produce the same column.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Value distribution for generated columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Distribution {
    /// Exponential with rate `lambda`, truncated to integers.
    ///
    /// Smaller rates spread values further and yield more distinct values.
    Exponential {
        /// Rate parameter, strictly positive.
        lambda: f64,
    },
    /// Uniform over `[low, high)`.
    Uniform {
        /// Lowest value, inclusive.
        low: i64,
        /// Highest value, exclusive.
        high: i64,
    },
}

impl Distribution {
    /// Draws `n` values with a generator seeded by `seed`.
    #[must_use]
    pub fn generate(&self, n: usize, seed: u64) -> Vec<i64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n).map(|_| self.sample(&mut rng)).collect()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn sample<R: Rng>(&self, rng: &mut R) -> i64 {
        match *self {
            Self::Exponential { lambda } => {
                // 1 - [0, 1) keeps ln away from zero
                let u: f64 = 1.0 - rng.gen::<f64>();
                (-u.ln() / lambda).floor() as i64
            }
            Self::Uniform { low, high } => rng.gen_range(low..high),
        }
    }
}

impl FromStr for Distribution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDistribution(s.to_string());

        let trimmed = s.trim();
        let open = trimmed.find('(').ok_or_else(invalid)?;
        let args = trimmed[open + 1..].strip_suffix(')').ok_or_else(invalid)?;
        let args: Vec<&str> = args.split(',').map(str::trim).collect();

        match (trimmed[..open].trim().to_ascii_uppercase().as_str(), args.as_slice()) {
            ("EXP", [lambda]) => {
                let lambda: f64 = lambda.parse().map_err(|_| invalid())?;
                if !(lambda.is_finite() && lambda > 0.0) {
                    return Err(invalid());
                }
                Ok(Self::Exponential { lambda })
            }
            ("UNIFORM", [low, high]) => {
                let low: i64 = low.parse().map_err(|_| invalid())?;
                let high: i64 = high.parse().map_err(|_| invalid())?;
                if low >= high {
                    return Err(invalid());
                }
                Ok(Self::Uniform { low, high })
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Distribution {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Distribution> for String {
    fn from(value: Distribution) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exponential { lambda } => write!(f, "EXP({lambda})"),
            Self::Uniform { low, high } => write!(f, "UNIFORM({low},{high})"),
        }
    }
}

impl Default for Distribution {
    fn default() -> Self {
        Self::Exponential { lambda: 0.01 }
    }
}
