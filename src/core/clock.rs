// Time source for seeding.
//
// Generators never read the wall clock directly; construction takes a `Clock` so tests can pin
// the "no seed given" path to a known instant.

pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

impl<F> Clock for F
where
    F: Fn() -> i64,
{
    fn now_millis(&self) -> i64 {
        self()
    }
}

/// Wall clock backed by `std::time::SystemTime`.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        use std::time::{SystemTime, UNIX_EPOCH};

        // A clock set before 1970 seeds from zero rather than failing construction.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Derive a seed from one clock reading.
///
/// The millisecond count is truncated to a signed 32-bit integer (low 32 bits, wrapping).
#[inline]
pub fn seed_from_clock<C: Clock + ?Sized>(clock: &C) -> i64 {
    clock.now_millis() as i32 as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_seed_is_stable() {
        let clock = FixedClock(1_700_000_000_123);
        assert_eq!(seed_from_clock(&clock), seed_from_clock(&clock));
    }

    #[test]
    fn seed_wraps_to_low_32_bits() {
        let clock = FixedClock((1_i64 << 32) + 125);
        assert_eq!(seed_from_clock(&clock), 125);

        let clock = FixedClock(0x8000_0000);
        assert_eq!(seed_from_clock(&clock), i32::MIN as i64);
    }

    #[test]
    fn closures_are_clocks() {
        let clock = || 42_i64;
        assert_eq!(seed_from_clock(&clock), 42);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_clock_is_after_epoch() {
        assert!(SystemClock.now_millis() > 0);
    }
}
