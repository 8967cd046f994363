use core::fmt;

/// Error type for resuming a generator from externally supplied state.
///
/// Advancing a generator never fails; only constructors that accept raw state validate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// BBS residue must satisfy `0 < state < modulus`.
    BbsOutOfRange { state: u64, modulus: u64 },
    /// BBS residue shares a factor with the modulus, so the orbit collapses.
    BbsNotCoprime { state: u64 },
    /// MT19937 key initialization needs at least one word.
    EmptyKey,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::BbsOutOfRange { state, modulus } => {
                write!(f, "BBS state {} is outside (0, {})", state, modulus)
            }
            StateError::BbsNotCoprime { state } => {
                write!(f, "BBS state {} is not coprime with the modulus", state)
            }
            StateError::EmptyKey => write!(f, "MT19937 key must not be empty"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StateError {}

/// Returned when a name does not match any generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseAlgorithmError;

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown generator (expected lcg, bbs, mwc or xor)")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseAlgorithmError {}
