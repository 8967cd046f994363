// Shared surface for the recurrence generators.
//
// This is NOT cryptographically secure. Every generator is a single-owner state machine:
// advance it from one place, or move it between threads whole.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseAlgorithmError;

/// A stateful source of normalized pseudo-random values.
pub trait Generator {
    /// Short label drivers print next to each value.
    const NAME: &'static str;

    /// Advance the state and return the next value.
    fn next_f64(&mut self) -> f64;

    #[inline]
    fn fill(&mut self, out: &mut [f64]) {
        for v in out.iter_mut() {
            *v = self.next_f64();
        }
    }
}

/// The four recurrences held by a `GeneratorSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Lcg,
    Bbs,
    Mwc,
    #[cfg_attr(feature = "serde", serde(rename = "xor", alias = "xorshift"))]
    Xorshift,
}

impl Algorithm {
    /// Demo order: one value of each per iteration.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Lcg,
        Algorithm::Bbs,
        Algorithm::Mwc,
        Algorithm::Xorshift,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Lcg => "lcg",
            Algorithm::Bbs => "bbs",
            Algorithm::Mwc => "mwc",
            Algorithm::Xorshift => "xor",
        }
    }

    /// Whether the value 1.0 can be produced (closed upper bound).
    pub fn is_closed(self) -> bool {
        matches!(self, Algorithm::Bbs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let alg = if s.eq_ignore_ascii_case("lcg") {
            Algorithm::Lcg
        } else if s.eq_ignore_ascii_case("bbs") || s.eq_ignore_ascii_case("blumblumshub") {
            Algorithm::Bbs
        } else if s.eq_ignore_ascii_case("mwc") {
            Algorithm::Mwc
        } else if s.eq_ignore_ascii_case("xor") || s.eq_ignore_ascii_case("xorshift") {
            Algorithm::Xorshift
        } else {
            return Err(ParseAlgorithmError);
        };
        Ok(alg)
    }
}
