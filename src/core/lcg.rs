// Linear congruential generator: x' = (a*x + c) mod m.
//
// The product a*x exceeds 64 bits for large seeds, so the step runs in i128 with a Euclidean
// remainder. Negative seeds land in [0, m) after the first step.

use crate::prng::Generator;

pub const LCG_MODULUS: i64 = 1 << 31;
pub const LCG_MULTIPLIER: i64 = 1_103_515_245;
pub const LCG_INCREMENT: i64 = 12_345;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lcg {
    prev: i64,
}

impl Lcg {
    pub fn new(seed: i64) -> Self {
        Self { prev: seed }
    }

    /// Raw state before normalization.
    #[inline]
    pub fn state(&self) -> i64 {
        self.prev
    }

    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        let x = self.prev as i128 * LCG_MULTIPLIER as i128 + LCG_INCREMENT as i128;
        self.prev = x.rem_euclid(LCG_MODULUS as i128) as i64;
        self.prev as f64 / LCG_MODULUS as f64
    }

    /// Integer in `[mini, maxi]`, inclusive on both ends.
    ///
    /// An inverted range yields `mini` and leaves the state untouched.
    pub fn next_range(&mut self, mini: i64, maxi: i64) -> i64 {
        if maxi < mini {
            return mini;
        }
        let span = maxi as i128 - mini as i128 + 1;
        let offset = (self.next_f64() * span as f64) as i128;
        // Spans near 2^64 can round the product up to `span` itself.
        (mini as i128 + offset.min(span - 1)) as i64
    }
}

impl Generator for Lcg {
    const NAME: &'static str = "lcg";

    #[inline]
    fn next_f64(&mut self) -> f64 {
        Lcg::next_f64(self)
    }
}
