use core::ops::{Mul, MulAssign};

use num_traits::Zero;

use crate::field::Field;

use super::Polynomial;

impl<F: Field> Polynomial<F> {
    /// Multiply `self` with a scalar.
    #[inline]
    pub fn mul_scalar(mut self, scalar: F) -> Self {
        self.mul_scalar_assign(scalar);
        self
    }

    /// Multiply `self` with a scalar and assign self.
    #[inline]
    pub fn mul_scalar_assign(&mut self, scalar: F) {
        self.data.iter_mut().for_each(|v| *v *= scalar);
        self.trim();
    }

    /// Multiplies `self` by `scale * x^exponent`: the coefficients move up by
    /// `exponent` places and every one of them is scaled.
    ///
    /// A zero `scale` collapses the result to the zero polynomial. The
    /// division loop builds its shifted multiples of the divisor with this.
    pub fn mul_monomial(&self, scale: F, exponent: usize) -> Self {
        let mut data = vec![F::zero(); exponent + self.data.len()];
        data[exponent..]
            .iter_mut()
            .zip(self.data.iter())
            .for_each(|(d, &c)| *d = c * scale);
        Self::normalized(data)
    }
}

impl<F: Field> Mul<&Polynomial<F>> for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, rhs: &Polynomial<F>) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }

        let mut data = vec![F::zero(); self.data.len() + rhs.data.len() - 1];
        for (i, &a) in self.data.iter().enumerate() {
            for (j, &b) in rhs.data.iter().enumerate() {
                data[i + j] += a * b;
            }
        }

        Polynomial::normalized(data)
    }
}

impl<F: Field> Mul for Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn mul(self, rhs: Polynomial<F>) -> Self::Output {
        Mul::mul(&self, &rhs)
    }
}

impl<F: Field> Mul<&Polynomial<F>> for Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn mul(self, rhs: &Polynomial<F>) -> Self::Output {
        Mul::mul(&self, rhs)
    }
}

impl<F: Field> Mul<Polynomial<F>> for &Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn mul(self, rhs: Polynomial<F>) -> Self::Output {
        Mul::mul(self, &rhs)
    }
}

impl<F: Field> MulAssign<&Polynomial<F>> for Polynomial<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: &Polynomial<F>) {
        *self = Mul::mul(&*self, rhs);
    }
}

impl<F: Field> MulAssign for Polynomial<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: Polynomial<F>) {
        *self = Mul::mul(&*self, &rhs);
    }
}
