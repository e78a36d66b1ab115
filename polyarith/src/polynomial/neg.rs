use core::ops::Neg;

use crate::field::Field;

use super::Polynomial;

// Negating flips no coefficient to or from zero, so the canonical form
// survives without a re-trim.

impl<F: Field> Neg for Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn neg(mut self) -> Self::Output {
        self.data.iter_mut().for_each(|v| *v = -*v);
        self
    }
}

impl<F: Field> Neg for &Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn neg(self) -> Self::Output {
        Neg::neg(self.clone())
    }
}
