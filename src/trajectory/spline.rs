//! Natural cubic spline through a set of knots.
//!
//! Boundary second derivatives are zero, so the ends are straighter than a
//! not-a-knot spline through four or more knots.

use alloc::vec;
use alloc::vec::Vec;

#[derive(Debug, Clone)]
pub struct CubicSpline<'a> {
    knots: &'a [f64],
    values: &'a [f64],
    second_derivatives: Vec<f64>,
}

impl<'a> CubicSpline<'a> {
    /// `knots` must be strictly increasing and of the same length as `values` (at least 2).
    pub fn new(knots: &'a [f64], values: &'a [f64]) -> Self {
        let n = knots.len();
        let mut second_derivatives = vec![0.0; n];

        if n > 2 {
            // Thomas algorithm on the interior equations, natural boundaries.
            let mut diagonal = vec![0.0; n];
            let mut rhs = vec![0.0; n];

            for i in 1..n - 1 {
                let h0 = knots[i] - knots[i - 1];
                let h1 = knots[i + 1] - knots[i];
                diagonal[i] = 2.0 * (h0 + h1);
                rhs[i] = 6.0 * ((values[i + 1] - values[i]) / h1 - (values[i] - values[i - 1]) / h0);
            }

            for i in 2..n - 1 {
                let h0 = knots[i] - knots[i - 1];
                let factor = h0 / diagonal[i - 1];
                diagonal[i] -= factor * h0;
                rhs[i] -= factor * rhs[i - 1];
            }

            for i in (1..n - 1).rev() {
                let h1 = knots[i + 1] - knots[i];
                second_derivatives[i] = (rhs[i] - h1 * second_derivatives[i + 1]) / diagonal[i];
            }
        }

        Self {
            knots,
            values,
            second_derivatives,
        }
    }

    /// Evaluates the spline, extending the end polynomials outside the knot range.
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.knots.len();
        let i = self
            .knots
            .partition_point(|&knot| knot <= x)
            .clamp(1, n - 1)
            - 1;

        let x0 = self.knots[i];
        let x1 = self.knots[i + 1];
        let h = x1 - x0;
        let m0 = self.second_derivatives[i];
        let m1 = self.second_derivatives[i + 1];
        let a = x1 - x;
        let b = x - x0;

        m0 * a * a * a / (6.0 * h)
            + m1 * b * b * b / (6.0 * h)
            + (self.values[i] / h - m0 * h / 6.0) * a
            + (self.values[i + 1] / h - m1 * h / 6.0) * b
    }
}
