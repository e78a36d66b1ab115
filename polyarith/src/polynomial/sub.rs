use core::ops::{AddAssign, Sub, SubAssign};

use num_traits::Zero;

use crate::field::Field;

use super::Polynomial;

impl<F: Field> SubAssign<&Polynomial<F>> for Polynomial<F> {
    fn sub_assign(&mut self, rhs: &Polynomial<F>) {
        if self.data.len() < rhs.data.len() {
            self.data.resize(rhs.data.len(), F::zero());
        }
        self.data
            .iter_mut()
            .zip(rhs.data.iter())
            .for_each(|(l, &r)| *l -= r);
        self.trim();
    }
}

impl<F: Field> SubAssign for Polynomial<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Polynomial<F>) {
        SubAssign::sub_assign(self, &rhs);
    }
}

impl<F: Field> Sub for Polynomial<F> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self::Output {
        SubAssign::sub_assign(&mut self, &rhs);
        self
    }
}

impl<F: Field> Sub<&Polynomial<F>> for Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn sub(mut self, rhs: &Polynomial<F>) -> Self::Output {
        SubAssign::sub_assign(&mut self, rhs);
        self
    }
}

impl<F: Field> Sub<Polynomial<F>> for &Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn sub(self, rhs: Polynomial<F>) -> Self::Output {
        // self - rhs == -rhs + self
        let mut rhs = -rhs;
        AddAssign::add_assign(&mut rhs, self);
        rhs
    }
}

impl<F: Field> Sub<&Polynomial<F>> for &Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn sub(self, rhs: &Polynomial<F>) -> Self::Output {
        Sub::sub(self.clone(), rhs)
    }
}
