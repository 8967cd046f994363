// Blum-Blum-Shub: x' = x^2 mod n, with n = p*q and p, q both 3 mod 4.
//
// Illustrative only. n is below 2^59, so the square always fits in u128.
// The starting residue is a fixed constant coprime with n; it is not derived from the seed.

use crate::error::StateError;
use crate::prng::Generator;

pub const BBS_P: u64 = 492_876_847;
pub const BBS_Q: u64 = 715_225_739;
pub const BBS_MODULUS: u64 = BBS_P * BBS_Q;
pub const BBS_INITIAL_STATE: u64 = 920_419_823;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u64", into = "u64"))]
pub struct Bbs {
    prev: u64,
}

impl Default for Bbs {
    fn default() -> Self {
        Self::new()
    }
}

impl Bbs {
    pub fn new() -> Self {
        Self {
            prev: BBS_INITIAL_STATE,
        }
    }

    /// Resume from a residue, e.g. one taken from `state()`.
    pub fn from_state(state: u64) -> Result<Self, StateError> {
        if state == 0 || state >= BBS_MODULUS {
            return Err(StateError::BbsOutOfRange {
                state,
                modulus: BBS_MODULUS,
            });
        }
        if gcd(state, BBS_MODULUS) != 1 {
            return Err(StateError::BbsNotCoprime { state });
        }
        Ok(Self { prev: state })
    }

    #[inline]
    pub fn state(&self) -> u64 {
        self.prev
    }

    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        let sq = self.prev as u128 * self.prev as u128;
        self.prev = (sq % BBS_MODULUS as u128) as u64;
        self.prev as f64 / BBS_MODULUS as f64
    }
}

impl TryFrom<u64> for Bbs {
    type Error = StateError;

    fn try_from(state: u64) -> Result<Self, Self::Error> {
        Self::from_state(state)
    }
}

impl From<Bbs> for u64 {
    fn from(bbs: Bbs) -> u64 {
        bbs.prev
    }
}

impl Generator for Bbs {
    const NAME: &'static str = "bbs";

    #[inline]
    fn next_f64(&mut self) -> f64 {
        Bbs::next_f64(self)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
