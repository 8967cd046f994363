// MT19937, the 32-bit Mersenne Twister (Matsumoto & Nishimura).
//
// Standalone: not part of `GeneratorSet`. Period 2^19937 - 1, 623-dimensional
// equidistribution, and fully predictable from 624 outputs.

use crate::error::StateError;
use crate::prng::Generator;

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

pub const MT_DEFAULT_SEED: u32 = 5489;

#[derive(Clone)]
pub struct Mt19937 {
    mt: [u32; N],
    mti: usize,
}

impl core::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mt19937").field("mti", &self.mti).finish_non_exhaustive()
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(MT_DEFAULT_SEED)
    }
}

impl Mt19937 {
    pub fn new(seed: u32) -> Self {
        let mut mt = [0u32; N];
        mt[0] = seed;
        for i in 1..N {
            mt[i] = 1_812_433_253_u32
                .wrapping_mul(mt[i - 1] ^ (mt[i - 1] >> 30))
                .wrapping_add(i as u32);
        }
        Self { mt, mti: N }
    }

    /// Initialize from a key of arbitrary length.
    pub fn from_key(key: &[u32]) -> Result<Self, StateError> {
        if key.is_empty() {
            return Err(StateError::EmptyKey);
        }

        let mut g = Self::new(19_650_218);
        let mt = &mut g.mt;
        let (mut i, mut j) = (1usize, 0usize);

        for _ in 0..N.max(key.len()) {
            let prev = mt[i - 1] ^ (mt[i - 1] >> 30);
            mt[i] = (mt[i] ^ prev.wrapping_mul(1_664_525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N {
                mt[0] = mt[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }

        for _ in 0..N - 1 {
            let prev = mt[i - 1] ^ (mt[i - 1] >> 30);
            mt[i] = (mt[i] ^ prev.wrapping_mul(1_566_083_941)).wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                mt[0] = mt[N - 1];
                i = 1;
            }
        }

        // MSB set: the initial array is never all zero.
        mt[0] = UPPER_MASK;
        Ok(g)
    }

    fn twist(&mut self) {
        let mt = &mut self.mt;
        for kk in 0..N {
            let y = (mt[kk] & UPPER_MASK) | (mt[(kk + 1) % N] & LOWER_MASK);
            let mag = if y & 1 == 0 { 0 } else { MATRIX_A };
            mt[kk] = mt[(kk + M) % N] ^ (y >> 1) ^ mag;
        }
        self.mti = 0;
    }

    /// Uniform on [0, 0xffffffff].
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.mti >= N {
            self.twist();
        }

        let mut y = self.mt[self.mti];
        self.mti += 1;

        // Tempering.
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        y
    }

    /// Uniform on [0, 0x7fffffff].
    #[inline]
    pub fn next_u31(&mut self) -> u32 {
        self.next_u32() >> 1
    }

    /// [0,1], divided by 2^32 - 1.
    #[inline]
    pub fn next_f64_closed(&mut self) -> f64 {
        self.next_u32() as f64 * (1.0 / 4_294_967_295.0)
    }

    /// [0,1), divided by 2^32.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 * (1.0 / 4_294_967_296.0)
    }

    /// (0,1).
    #[inline]
    pub fn next_f64_open(&mut self) -> f64 {
        (self.next_u32() as f64 + 0.5) * (1.0 / 4_294_967_296.0)
    }

    /// [0,1) with 53-bit resolution from two draws.
    #[inline]
    pub fn next_f64_53(&mut self) -> f64 {
        let a = (self.next_u32() >> 5) as f64;
        let b = (self.next_u32() >> 6) as f64;
        (a * 67_108_864.0 + b) * (1.0 / 9_007_199_254_740_992.0)
    }
}

impl Generator for Mt19937 {
    const NAME: &'static str = "mt";

    #[inline]
    fn next_f64(&mut self) -> f64 {
        Mt19937::next_f64(self)
    }
}
