//! Uniform random selection over finite domains.

use rand::Rng;

/// Source of uniform random indices.
///
/// Implementations must return an unbiased index in `[0, n)`.
/// Callers guarantee `n > 0`; the behavior for an empty domain is
/// unspecified (debug builds assert).
///
/// The contract is source-agnostic: the default implementation uses a
/// non-cryptographic PRNG, but a CSPRNG-backed implementation can be
/// substituted without any API change.
pub trait RandomSource {
    /// Returns a uniformly distributed index in `[0, n)`.
    fn uniform_index(&mut self, n: usize) -> usize;
}

/// Default source backed by the thread-local PRNG.
///
/// NOT cryptographically secure. Passwords drawn through this source are
/// suitable for the arcade use case, not for high-value secrets.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn uniform_index(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "uniform_index called with an empty domain");
        rand::thread_rng().gen_range(0..n)
    }
}
