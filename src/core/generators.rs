use crate::bbs::Bbs;
use crate::clock::{self, Clock};
use crate::error::StateError;
use crate::lcg::Lcg;
use crate::mwc::{Mwc, MWC_DEFAULT_CARRY};
use crate::prng::Algorithm;
use crate::xorshift::Xorshift;

/// Seeding inputs for a `GeneratorSet`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    // If unset, the seed comes from one clock reading.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<i64>,

    // If unset, MWC starts with a carry of 3.
    #[cfg_attr(feature = "serde", serde(default))]
    pub carry: Option<i64>,
}

/// Four independent recurrences sharing one seeding policy.
///
/// LCG, MWC and Xorshift start from the same seed. BBS always starts from its fixed residue.
/// After construction no generator reads or writes another's state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorSet {
    lcg: Lcg,
    bbs: Bbs,
    mwc: Mwc,
    xorshift: Xorshift,
}

impl GeneratorSet {
    /// Seed from the system clock when `seed` is `None`.
    #[cfg(feature = "std")]
    pub fn new(seed: Option<i64>, carry: Option<i64>) -> Self {
        Self::with_clock(seed, carry, &clock::SystemClock)
    }

    pub fn with_clock<C: Clock + ?Sized>(seed: Option<i64>, carry: Option<i64>, clock: &C) -> Self {
        // One reading: all clocked generators get the same seed.
        let seed = seed.unwrap_or_else(|| clock::seed_from_clock(clock));
        let carry = carry.unwrap_or(MWC_DEFAULT_CARRY);

        Self {
            lcg: Lcg::new(seed),
            bbs: Bbs::new(),
            mwc: Mwc::new(seed, carry),
            xorshift: Xorshift::new(seed),
        }
    }

    pub fn from_config<C: Clock + ?Sized>(cfg: GeneratorConfig, clock: &C) -> Self {
        Self::with_clock(cfg.seed, cfg.carry, clock)
    }

    /// Reassemble a set from raw states, e.g. ones read back through the accessors.
    pub fn from_parts(
        lcg_state: i64,
        bbs_state: u64,
        mwc_state: i64,
        mwc_carry: i64,
        xorshift_state: u64,
    ) -> Result<Self, StateError> {
        Ok(Self {
            lcg: Lcg::new(lcg_state),
            bbs: Bbs::from_state(bbs_state)?,
            mwc: Mwc::new(mwc_state, mwc_carry),
            xorshift: Xorshift::new(xorshift_state as i64),
        })
    }

    #[inline]
    pub fn next_lcg(&mut self) -> f64 {
        self.lcg.next_f64()
    }

    #[inline]
    pub fn next_lcg_range(&mut self, mini: i64, maxi: i64) -> i64 {
        self.lcg.next_range(mini, maxi)
    }

    #[inline]
    pub fn next_bbs(&mut self) -> f64 {
        self.bbs.next_f64()
    }

    #[inline]
    pub fn next_mwc(&mut self) -> f64 {
        self.mwc.next_f64()
    }

    #[inline]
    pub fn next_xorshift(&mut self) -> f64 {
        self.xorshift.next_f64()
    }

    pub fn next(&mut self, alg: Algorithm) -> f64 {
        match alg {
            Algorithm::Lcg => self.next_lcg(),
            Algorithm::Bbs => self.next_bbs(),
            Algorithm::Mwc => self.next_mwc(),
            Algorithm::Xorshift => self.next_xorshift(),
        }
    }

    pub fn lcg(&self) -> &Lcg {
        &self.lcg
    }

    pub fn bbs(&self) -> &Bbs {
        &self.bbs
    }

    pub fn mwc(&self) -> &Mwc {
        &self.mwc
    }

    pub fn xorshift(&self) -> &Xorshift {
        &self.xorshift
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbs::BBS_INITIAL_STATE;
    use crate::clock::FixedClock;
    use crate::lcg::{LCG_INCREMENT, LCG_MODULUS, LCG_MULTIPLIER};

    fn collect(set: &mut GeneratorSet, alg: Algorithm, n: usize) -> Vec<f64> {
        (0..n).map(|_| set.next(alg)).collect()
    }

    #[test]
    fn same_seed_same_sequences() {
        let mut a = GeneratorSet::with_clock(Some(125), None, &FixedClock(0));
        let mut b = GeneratorSet::with_clock(Some(125), None, &FixedClock(999));
        for alg in Algorithm::ALL {
            assert_eq!(collect(&mut a, alg, 100), collect(&mut b, alg, 100), "{}", alg);
        }
    }

    #[test]
    fn explicit_seed_is_shared_and_bbs_is_fixed() {
        let set = GeneratorSet::with_clock(Some(125), Some(7), &FixedClock(0));
        assert_eq!(set.lcg().state(), 125);
        assert_eq!(set.mwc().state(), 125);
        assert_eq!(set.mwc().carry(), 7);
        assert_eq!(set.xorshift().state(), 125);
        assert_eq!(set.bbs().state(), BBS_INITIAL_STATE);
    }

    #[test]
    fn clock_seed_reaches_all_three() {
        let clock = FixedClock(1_700_000_000_123);
        let set = GeneratorSet::with_clock(None, None, &clock);
        let seed = clock::seed_from_clock(&clock);
        assert_eq!(set.lcg().state(), seed);
        assert_eq!(set.mwc().state(), seed);
        assert_eq!(set.xorshift().state(), seed as u64);
        assert_eq!(set.mwc().carry(), MWC_DEFAULT_CARRY);
        assert_eq!(set.bbs().state(), BBS_INITIAL_STATE);
    }

    #[test]
    fn ranges_hold() {
        let mut set = GeneratorSet::with_clock(Some(125), None, &FixedClock(0));
        for _ in 0..2000 {
            for alg in Algorithm::ALL {
                let v = set.next(alg);
                if alg.is_closed() {
                    assert!((0.0..=1.0).contains(&v), "{} gave {}", alg, v);
                } else {
                    assert!((0.0..1.0).contains(&v), "{} gave {}", alg, v);
                }
            }
        }
    }

    #[test]
    fn consecutive_values_differ() {
        let mut set = GeneratorSet::with_clock(Some(125), None, &FixedClock(0));
        for alg in Algorithm::ALL {
            let values = collect(&mut set, alg, 200);
            assert!(values.windows(2).all(|w| w[0] != w[1]), "{} stalled", alg);
        }
    }

    #[test]
    fn one_lcg_step_from_125() {
        let mut set = GeneratorSet::with_clock(Some(125), None, &FixedClock(0));
        let v = set.next_lcg();
        let state = (125 * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        assert_eq!(set.lcg().state(), state);
        assert!((v - state as f64 / LCG_MODULUS as f64).abs() < 1e-9);
    }

    #[test]
    fn generators_do_not_couple() {
        let mut mixed = GeneratorSet::with_clock(Some(31337), None, &FixedClock(0));
        let mut lcg_only = mixed.clone();

        let mut interleaved = Vec::new();
        for _ in 0..20 {
            interleaved.push(mixed.next_lcg());
            mixed.next_bbs();
            mixed.next_mwc();
            mixed.next_xorshift();
        }
        assert_eq!(interleaved, collect(&mut lcg_only, Algorithm::Lcg, 20));
    }

    #[test]
    fn range_uses_lcg_stream() {
        let mut a = GeneratorSet::with_clock(Some(125), None, &FixedClock(0));
        let mut b = a.clone();
        for _ in 0..100 {
            let r = a.next_lcg_range(1, 6);
            assert_eq!(r, 1 + (b.next_lcg() * 6.0) as i64);
        }
    }

    #[test]
    fn from_parts_resumes() {
        let mut set = GeneratorSet::with_clock(Some(125), None, &FixedClock(0));
        for alg in Algorithm::ALL {
            set.next(alg);
        }
        let mut resumed = GeneratorSet::from_parts(
            set.lcg().state(),
            set.bbs().state(),
            set.mwc().state(),
            set.mwc().carry(),
            set.xorshift().state(),
        )
        .unwrap();
        assert_eq!(resumed, set);
        for alg in Algorithm::ALL {
            assert_eq!(resumed.next(alg), set.next(alg));
        }
    }

    #[test]
    fn from_parts_rejects_bad_bbs_state() {
        assert!(GeneratorSet::from_parts(1, 0, 1, 3, 1).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_snapshot_resumes() {
        let mut set = GeneratorSet::with_clock(Some(125), None, &FixedClock(0));
        for alg in Algorithm::ALL {
            set.next(alg);
        }
        let json = serde_json::to_string(&set).unwrap();
        let mut back: GeneratorSet = serde_json::from_str(&json).unwrap();
        for alg in Algorithm::ALL {
            assert_eq!(back.next(alg), set.next(alg));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_fields_default_to_none() {
        let cfg: GeneratorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, GeneratorConfig::default());

        let cfg: GeneratorConfig = serde_json::from_str(r#"{"seed":125}"#).unwrap();
        let set = GeneratorSet::from_config(cfg, &FixedClock(0));
        assert_eq!(set.lcg().state(), 125);
    }
}
