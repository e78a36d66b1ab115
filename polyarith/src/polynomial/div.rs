use num_traits::Zero;

use crate::error::AlgebraError;
use crate::field::Field;

use super::{last_nonzero_index, Polynomial};

impl<F: Field> Polynomial<F> {
    /// Euclidean division, returning `(quotient, remainder)`.
    ///
    /// `self == divisor * quotient + remainder` with
    /// `degree(remainder) < degree(divisor)` or a zero remainder, up to
    /// floating-point rounding for inexact coefficient types.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::ZeroDivisor`] when `divisor` is the zero
    /// polynomial.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), AlgebraError> {
        if divisor.is_zero() {
            return Err(AlgebraError::ZeroDivisor);
        }

        let deg_b = divisor.degree();
        let lead_b = divisor.leading_coefficient();

        let mut rem = self.data.clone();
        let mut quot = vec![F::zero(); self.data.len().saturating_sub(divisor.data.len()) + 1];

        while let Some(deg_r) = last_nonzero_index(&rem) {
            if deg_r < deg_b {
                break;
            }

            let shift = deg_r - deg_b;
            let scale = rem[deg_r] / lead_b;
            quot[shift] = scale;

            // Subtract scale * x^shift * divisor. The leading term cancels
            // exactly, so the remainder degree strictly decreases and the
            // loop runs at most degree(self) - degree(divisor) + 1 times.
            rem[shift..deg_r]
                .iter_mut()
                .zip(divisor.data.iter())
                .for_each(|(r, &b)| *r -= scale * b);
            rem[deg_r] = F::zero();
        }

        Ok((Self::normalized(quot), Self::normalized(rem)))
    }
}
