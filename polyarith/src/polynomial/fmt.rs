use core::fmt::{self, Display, Formatter};

use num_traits::{One, Zero};

use crate::field::Field;

use super::Polynomial;

impl<F: Field + Display + PartialOrd> Polynomial<F> {
    /// Renders the polynomial with the highest-degree term first.
    ///
    /// The scan runs from the constant term upwards and prepends each emitted
    /// term, so the output reads from the highest exponent down, e.g.
    /// `"3x^2 + 5x + 2"`. Exact-zero coefficients are skipped unless
    /// `include_zero_terms` is set, and a polynomial with no emitted terms
    /// renders as the empty string.
    ///
    /// A term shows the absolute value of its coefficient, omitting the
    /// numeric literal for magnitude one next to a variable; the sign lives
    /// in the `" + "` / `" - "` joint placed after the term, chosen by the
    /// previously scanned coefficient. The term emitted first (the lowest
    /// passing exponent) gets no joint, so the sign of the highest-degree
    /// coefficient never appears in the output.
    pub fn format_terms(&self, include_zero_terms: bool) -> String {
        let mut output = String::new();
        let mut first = true;
        let mut last_emitted = F::zero();

        for (exponent, &coeff) in self.data.iter().enumerate() {
            if coeff.is_zero() && !include_zero_terms {
                continue;
            }

            let magnitude = if coeff < F::zero() { -coeff } else { coeff };
            let mut term = String::new();

            if exponent == 0 || !magnitude.is_one() {
                term.push_str(&magnitude.to_string());
            }
            match exponent {
                0 => {}
                1 => term.push('x'),
                _ => term.push_str(&format!("x^{exponent}")),
            }

            if first {
                first = false;
            } else if last_emitted < F::zero() {
                term.push_str(" - ");
            } else {
                term.push_str(" + ");
            }

            output.insert_str(0, &term);
            last_emitted = coeff;
        }

        output
    }
}

impl<F: Field + Display + PartialOrd> Display for Polynomial<F> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_terms(false))
    }
}
