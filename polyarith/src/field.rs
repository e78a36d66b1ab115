//! The coefficient contract for dense polynomials.

use core::fmt::Debug;
use core::ops::{AddAssign, Div, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

/// The operations a coefficient type must support.
///
/// A [`Field`] element can be added, subtracted, multiplied, negated and
/// divided (by a nonzero element), and can be compared against zero exactly.
/// The blanket implementation makes every type with the listed standard and
/// [`num_traits`] bounds a field structurally, so `f64` and `f32` qualify out
/// of the box, as does any user-provided exact coefficient type.
pub trait Field:
    Sized
    + Copy
    + Debug
    + PartialEq
    + Zero
    + One
    + Neg<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
}

impl<T> Field for T where
    T: Copy
        + Debug
        + PartialEq
        + Zero
        + One
        + Neg<Output = T>
        + Sub<Output = T>
        + Div<Output = T>
        + AddAssign
        + SubAssign
        + MulAssign
{
}
