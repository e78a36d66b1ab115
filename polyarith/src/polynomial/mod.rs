//! Definition and implementation of dense univariate polynomials.

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::AlgebraError;
use crate::field::Field;

mod basic;
mod random;

mod add;
mod div;
mod fmt;
mod mul;
mod neg;
mod sub;

/// Represents a dense univariate polynomial with coefficients in a field `F`.
///
/// The coefficients are stored in a vector `data`, the `i`-th element holding
/// the coefficient of the `x^i` term, from the constant term at index 0
/// upwards. The stored sequence is always in canonical form: it is never empty
/// and its last element is nonzero, except for the zero polynomial which is
/// stored as the single coefficient `[0]`. Every constructor trims trailing
/// zeros before the value becomes usable, and the type hands out no mutable
/// access to its coefficients, so a polynomial can never be observed in a
/// non-canonical state.
///
/// Arithmetic never mutates an operand through a reference. The operator
/// impls either consume a value and reuse its buffer or allocate a fresh one,
/// and each result is trimmed exactly once before it is returned.
///
/// # Examples
/// ```
/// use polyarith::Polynomial;
///
/// let poly = Polynomial::new(vec![1.0, 2.0, 3.0, 0.0])?;
/// // `poly` now represents the polynomial 1 + 2x + 3x^2.
/// assert_eq!(poly.degree(), 2);
/// # Ok::<(), polyarith::AlgebraError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    bound(serialize = "F: Serialize", deserialize = "F: Deserialize<'de>"),
    try_from = "Vec<F>",
    into = "Vec<F>"
)]
pub struct Polynomial<F: Field> {
    data: Vec<F>,
}

/// Index of the highest nonzero coefficient, or `None` when every
/// coefficient is zero.
///
/// Both normalization and the division loop lean on this scan.
#[inline]
fn last_nonzero_index<F: Field>(data: &[F]) -> Option<usize> {
    data.iter().rposition(|c| !c.is_zero())
}

impl<F: Field> Polynomial<F> {
    /// Creates a new [`Polynomial<F>`] from a coefficient vector, the `i`-th
    /// element holding the coefficient of `x^i`.
    ///
    /// Trailing zero coefficients are trimmed away so the stored sequence
    /// is in canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::EmptyCoefficients`] if `data` is empty; even
    /// the zero polynomial carries its constant term.
    #[inline]
    pub fn new(data: Vec<F>) -> Result<Self, AlgebraError> {
        if data.is_empty() {
            return Err(AlgebraError::EmptyCoefficients);
        }
        Ok(Self::normalized(data))
    }

    /// Constructs a new polynomial from a slice.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::EmptyCoefficients`] if `data` is empty.
    #[inline]
    pub fn from_slice(data: &[F]) -> Result<Self, AlgebraError> {
        Self::new(data.to_vec())
    }

    /// Creates the constant polynomial `c`.
    #[inline]
    pub fn constant(c: F) -> Self {
        Self { data: vec![c] }
    }

    /// Creates the monomial `coeff * x^exponent`.
    #[inline]
    pub fn monomial(coeff: F, exponent: usize) -> Self {
        let mut data = vec![F::zero(); exponent + 1];
        data[exponent] = coeff;
        Self::normalized(data)
    }

    /// Wraps a non-empty coefficient vector, trimming trailing zeros.
    ///
    /// Internal arithmetic funnels every result through here, so
    /// normalization runs exactly once per operation.
    #[inline]
    fn normalized(mut data: Vec<F>) -> Self {
        debug_assert!(!data.is_empty());
        data.truncate(last_nonzero_index(&data).map_or(1, |i| i + 1));
        Self { data }
    }

    /// Trims trailing zero coefficients in place.
    #[inline]
    fn trim(&mut self) {
        let len = last_nonzero_index(&self.data).map_or(1, |i| i + 1);
        self.data.truncate(len);
    }

    /// Get the coefficient count of the polynomial.
    #[inline]
    pub fn coeff_count(&self) -> usize {
        self.data.len()
    }

    /// Returns the degree of the polynomial.
    ///
    /// The zero polynomial reports degree 0, the index of its constant term.
    #[inline]
    pub fn degree(&self) -> usize {
        self.data.len() - 1
    }

    /// Returns the coefficient at the degree index.
    #[inline]
    pub fn leading_coefficient(&self) -> F {
        self.data[self.data.len() - 1]
    }

    /// Returns the coefficient of `x^i`, which is zero beyond the degree.
    #[inline]
    pub fn coefficient(&self, i: usize) -> F {
        self.data.get(i).copied().unwrap_or_else(F::zero)
    }

    /// Extracts a slice containing the entire coefficient vector.
    ///
    /// Equivalent to `&s[..]`.
    #[inline]
    pub fn as_slice(&self) -> &[F] {
        self.data.as_slice()
    }

    /// Returns an iterator over the coefficients, constant term first.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, F> {
        self.data.iter()
    }

    /// Drop self, and return the data.
    #[inline]
    pub fn inner_data(self) -> Vec<F> {
        self.data
    }

    /// Evaluate `p(x)` by Horner's rule.
    #[inline]
    pub fn evaluate(&self, x: F) -> F {
        self.data.iter().rev().fold(F::zero(), |acc, &a| acc * x + a)
    }
}

impl<F: Field> Zero for Polynomial<F> {
    #[inline]
    fn zero() -> Self {
        Self {
            data: vec![F::zero()],
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.data.len() == 1 && self.data[0].is_zero()
    }
}

impl<F: Field> Default for Polynomial<F> {
    #[inline]
    fn default() -> Self {
        Zero::zero()
    }
}

impl<F: Field> TryFrom<Vec<F>> for Polynomial<F> {
    type Error = AlgebraError;

    #[inline]
    fn try_from(data: Vec<F>) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}

impl<F: Field> From<Polynomial<F>> for Vec<F> {
    #[inline]
    fn from(poly: Polynomial<F>) -> Self {
        poly.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type PolyF64 = Polynomial<f64>;

    #[test]
    fn test_new_trims_trailing_zeros() {
        let poly = PolyF64::new(vec![1.0, 2.0, 0.0, 0.0]).unwrap();
        assert_eq!(poly.as_slice(), &[1.0, 2.0]);
        assert_eq!(poly.degree(), 1);
    }

    #[test]
    fn test_new_collapses_all_zeros() {
        let poly = PolyF64::new(vec![0.0, 0.0, 0.0]).unwrap();
        assert_eq!(poly.as_slice(), &[0.0]);
        assert!(poly.is_zero());
        assert_eq!(poly, PolyF64::zero());
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            PolyF64::new(Vec::new()),
            Err(AlgebraError::EmptyCoefficients)
        );
        assert_eq!(
            PolyF64::from_slice(&[]),
            Err(AlgebraError::EmptyCoefficients)
        );
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = PolyF64::new(vec![3.0, 0.0, 7.0, 0.0]).unwrap();
        let twice = PolyF64::new(once.as_slice().to_vec()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(PolyF64::constant(4.0).as_slice(), &[4.0]);
        assert_eq!(
            PolyF64::monomial(2.0, 3).as_slice(),
            &[0.0, 0.0, 0.0, 2.0]
        );
        assert!(PolyF64::monomial(0.0, 3).is_zero());
        assert!(PolyF64::default().is_zero());
    }

    #[test]
    fn test_queries() {
        let poly = PolyF64::new(vec![2.0, 5.0, 3.0]).unwrap();
        assert_eq!(poly.coeff_count(), 3);
        assert_eq!(poly.degree(), 2);
        assert_eq!(poly.leading_coefficient(), 3.0);
        assert_eq!(poly.coefficient(1), 5.0);
        assert_eq!(poly.coefficient(9), 0.0);
    }

    #[test]
    fn test_evaluate() {
        // 3x^2 + 5x + 2 at x = 2
        let poly = PolyF64::new(vec![2.0, 5.0, 3.0]).unwrap();
        assert_eq!(poly.evaluate(2.0), 24.0);
        assert_eq!(PolyF64::zero().evaluate(7.0), 0.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let poly = PolyF64::new(vec![1.0, 0.0, 2.5]).unwrap();
        let bytes = bincode::serialize(&poly).unwrap();
        let back: PolyF64 = bincode::deserialize(&bytes).unwrap();
        assert_eq!(back, poly);
    }

    #[test]
    fn test_serde_normalizes_input() {
        let bytes = bincode::serialize(&vec![1.0f64, 2.0, 0.0]).unwrap();
        let back: PolyF64 = bincode::deserialize(&bytes).unwrap();
        assert_eq!(back.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_serde_rejects_empty() {
        let bytes = bincode::serialize(&Vec::<f64>::new()).unwrap();
        assert!(bincode::deserialize::<PolyF64>(&bytes).is_err());
    }
}
