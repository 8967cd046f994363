#![cfg_attr(not(feature = "std"), no_std)]

#[path = "core/clock.rs"]
pub mod clock;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/lcg.rs"]
pub mod lcg;

#[path = "core/bbs.rs"]
pub mod bbs;

#[path = "core/mwc.rs"]
pub mod mwc;

#[path = "core/xorshift.rs"]
pub mod xorshift;

#[path = "core/mt.rs"]
pub mod mt;

#[path = "core/generators.rs"]
pub mod generators;

pub use error::{ParseAlgorithmError, StateError};
pub use generators::{GeneratorConfig, GeneratorSet};
pub use prng::{Algorithm, Generator};
