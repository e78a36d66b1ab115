#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Dense univariate polynomial arithmetic over a numeric coefficient field.
//!
//! A [`Polynomial<F>`] stores its coefficients in ascending exponent order and
//! keeps them in canonical form: trailing zero coefficients are trimmed on
//! every construction, with the zero polynomial stored as the single
//! coefficient `[0]`. On top of that representation the crate provides the
//! ring operations (`+`, `-`, `*`), Euclidean division with remainder, and a
//! canonical textual rendering.
//!
//! Coefficients can be any type implementing [`Field`]; the blanket
//! implementation covers `f64` and `f32` out of the box. Zero comparisons are
//! exact everywhere, so near-zero values produced by floating-point
//! cancellation are kept as they are.
//!
//! ```
//! use num_traits::Zero;
//! use polyarith::Polynomial;
//!
//! let a = Polynomial::new(vec![2.0, 3.0])?; // 3x + 2
//! let b = Polynomial::new(vec![1.0, 1.0])?; // x + 1
//!
//! let product = &a * &b;
//! assert_eq!(product.as_slice(), &[2.0, 5.0, 3.0]);
//! assert_eq!(product.to_string(), "3x^2 + 5x + 2");
//!
//! let (quotient, remainder) = product.div_rem(&b)?;
//! assert_eq!(quotient, a);
//! assert!(remainder.is_zero());
//! # Ok::<(), polyarith::AlgebraError>(())
//! ```

pub mod error;
pub mod field;
pub mod polynomial;

pub use error::AlgebraError;
pub use field::Field;
pub use polynomial::Polynomial;
