use core::ops::Index;
use core::slice::SliceIndex;

use crate::field::Field;

use super::Polynomial;

// Mutable counterparts (`IndexMut`, `as_mut_slice`) are deliberately absent:
// writing through them could leave a trailing zero coefficient behind.

impl<F: Field, I: SliceIndex<[F]>> Index<I> for Polynomial<F> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(&*self.data, index)
    }
}

impl<F: Field> AsRef<Polynomial<F>> for Polynomial<F> {
    #[inline]
    fn as_ref(&self) -> &Polynomial<F> {
        self
    }
}

impl<F: Field> AsRef<[F]> for Polynomial<F> {
    #[inline]
    fn as_ref(&self) -> &[F] {
        self.data.as_ref()
    }
}

impl<F: Field> IntoIterator for Polynomial<F> {
    type Item = F;

    type IntoIter = std::vec::IntoIter<F>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, F: Field> IntoIterator for &'a Polynomial<F> {
    type Item = &'a F;

    type IntoIter = core::slice::Iter<'a, F>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type PolyF64 = Polynomial<f64>;

    #[test]
    fn test_index_and_as_ref() {
        let poly = PolyF64::new(vec![2.0, 5.0, 3.0]).unwrap();
        assert_eq!(poly[0], 2.0);
        assert_eq!(&poly[1..], &[5.0, 3.0]);

        let slice: &[f64] = poly.as_ref();
        assert_eq!(slice, poly.as_slice());
    }

    #[test]
    fn test_into_iter() {
        let poly = PolyF64::new(vec![1.0, 4.0]).unwrap();
        let doubled: Vec<f64> = (&poly).into_iter().map(|&c| c * 2.0).collect();
        assert_eq!(doubled, vec![2.0, 8.0]);
        assert_eq!(poly.into_iter().sum::<f64>(), 5.0);
    }
}
