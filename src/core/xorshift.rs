// Xorshift on a 64-bit register with shifts 21, 35, 4.
//
// The register is u64 throughout: left shifts wrap at 64 bits and the right shift is logical.
// A signed seed is taken as its two's-complement bit pattern. The shift triple is kept as given
// rather than swapped for a canonical set; sequences from 32-bit implementations of the same
// triple are not reproducible here.

use crate::prng::Generator;

pub const XOR_SHIFT_A: u32 = 21;
pub const XOR_SHIFT_B: u32 = 35;
pub const XOR_SHIFT_C: u32 = 4;

const LOW_MASK: u64 = 0xFFFF_FFFF;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xorshift {
    prev: u64,
}

impl Xorshift {
    /// A zero seed is a fixed point of the recurrence and yields 0.0 forever.
    pub fn new(seed: i64) -> Self {
        Self { prev: seed as u64 }
    }

    #[inline]
    pub fn state(&self) -> u64 {
        self.prev
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.prev;
        x ^= x << XOR_SHIFT_A;
        x ^= x >> XOR_SHIFT_B;
        x ^= x << XOR_SHIFT_C;
        self.prev = x;
        x
    }

    /// Low 32 bits over 2^32, so the result is in [0,1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        let x = self.next_u64() & LOW_MASK;
        x as f64 / (LOW_MASK as f64 + 1.0)
    }
}

impl Generator for Xorshift {
    const NAME: &'static str = "xor";

    #[inline]
    fn next_f64(&mut self) -> f64 {
        Xorshift::next_f64(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_states_from_125() {
        let mut x = Xorshift::new(125);
        assert_eq!(x.next_u64(), 4_120_905_645);
        assert_eq!(x.next_u64(), 141_287_244_173_329_405);
        assert_eq!(x.next_u64(), 11_433_177_509_666_465_254);
    }

    #[test]
    fn normalizes_low_word() {
        let mut x = Xorshift::new(125);
        let v = x.next_f64();
        assert!((v - 4_120_905_645_f64 / 4_294_967_296.0).abs() < 1e-12);
    }

    #[test]
    fn negative_seed_uses_bit_pattern() {
        let a = Xorshift::new(-1);
        assert_eq!(a.state(), u64::MAX);
    }

    #[test]
    fn zero_is_a_fixed_point() {
        let mut x = Xorshift::new(0);
        assert_eq!(x.next_f64(), 0.0);
        assert_eq!(x.state(), 0);
    }

    #[test]
    fn consecutive_outputs_differ() {
        let mut x = Xorshift::new(125);
        let mut last = x.next_f64();
        for _ in 0..1000 {
            let v = x.next_f64();
            assert!((0.0..1.0).contains(&v));
            assert_ne!(v, last);
            last = v;
        }
    }
}
