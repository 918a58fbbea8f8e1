//! Pickup one-time codes
//!
//! A code is a uniformly random six-digit number in `100000..=999999`, so it
//! never has a leading zero. The randomness comes from an [`OtpSource`] owned
//! by the storefront; seeded sources make runs reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Six-digit pickup code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Otp(u32);

impl Otp {
    /// Smallest code
    pub const MIN: u32 = 100_000;
    /// Largest code
    pub const MAX: u32 = 999_999;

    /// Wrap a code, `None` when it is not six digits
    #[must_use]
    pub fn new(code: u32) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&code).then_some(Self(code))
    }

    /// Numeric value
    #[inline]
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Draw a code from `rng`
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self(rng.gen_range(Self::MIN..=Self::MAX))
    }
}

impl fmt::Display for Otp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

/// Supplier of pickup codes
pub trait OtpSource {
    /// Next code
    fn next_otp(&mut self) -> Otp;
}

impl<S: OtpSource + ?Sized> OtpSource for Box<S> {
    fn next_otp(&mut self) -> Otp {
        (**self).next_otp()
    }
}

/// Code source backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RngOtpSource<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngOtpSource<R> {
    /// Wrap a generator
    #[inline]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngOtpSource<StdRng> {
    /// Reproducible source for a seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from OS entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> OtpSource for RngOtpSource<R> {
    fn next_otp(&mut self) -> Otp {
        Otp::generate(&mut self.rng)
    }
}
