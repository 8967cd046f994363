// Multiply-with-carry: t = a*x + c, x' = t mod b, c' = floor(t / b).
//
// State and carry are both written from the same `t`, and the carry stays an integer. The step
// runs in i128 with Euclidean division, so `t == c' * b + x'` holds for negative seeds too.

use crate::prng::Generator;

pub const MWC_MULTIPLIER: i64 = 1_103_515_245;
pub const MWC_BASE: i64 = 1 << 32;
pub const MWC_DEFAULT_CARRY: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mwc {
    prev: i64,
    carry: i64,
}

impl Mwc {
    pub fn new(seed: i64, carry: i64) -> Self {
        Self { prev: seed, carry }
    }

    #[inline]
    pub fn state(&self) -> i64 {
        self.prev
    }

    #[inline]
    pub fn carry(&self) -> i64 {
        self.carry
    }

    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        let t = MWC_MULTIPLIER as i128 * self.prev as i128 + self.carry as i128;
        let base = MWC_BASE as i128;
        // After one step the state is below 2^32 and the carry below `a + 1`; only a caller
        // supplied carry near i64::MAX can push the first quotient past i64.
        self.prev = t.rem_euclid(base) as i64;
        self.carry = t.div_euclid(base) as i64;
        self.prev as f64 / MWC_BASE as f64
    }
}

impl Generator for Mwc {
    const NAME: &'static str = "mwc";

    #[inline]
    fn next_f64(&mut self) -> f64 {
        Mwc::next_f64(self)
    }
}
