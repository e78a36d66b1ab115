use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::field::Field;

use super::Polynomial;

impl<F: Field> Polynomial<F> {
    /// Generate a random [`Polynomial<F>`] with `n` coefficients sampled from
    /// the standard distribution.
    ///
    /// The result is trimmed like any other polynomial, so its degree can
    /// come out lower than `n - 1`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[inline]
    pub fn random<R>(n: usize, rng: &mut R) -> Self
    where
        R: Rng,
        Standard: Distribution<F>,
    {
        Self::random_with_distribution(n, Standard, rng)
    }

    /// Generate a random [`Polynomial<F>`] with a specified distribution
    /// `distribution`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[inline]
    pub fn random_with_distribution<R, D>(n: usize, distribution: D, rng: &mut R) -> Self
    where
        R: Rng,
        D: Distribution<F>,
    {
        assert!(n != 0, "a polynomial needs at least one coefficient");
        Self::normalized(distribution.sample_iter(rng).take(n).collect())
    }
}
