use log::{debug, trace};
use nalgebra::{DMatrix, DVector};

use crate::error::SplineError;
use crate::polynomial::COEFFICIENTS_PER_SEGMENT;

/// Dense square system of spline equations, filled one row at a time.
///
/// Columns are segment-major: unknown `term` of segment `segment` lives in column
/// `segment * 4 + term`, terms ordered `[a, b, c, d]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
    equation_counter: usize,
}

impl LinearSystem {
    pub(crate) fn zeros(number_of_segments: usize) -> Self {
        let size = number_of_segments * COEFFICIENTS_PER_SEGMENT;
        LinearSystem {
            matrix: DMatrix::<f64>::zeros(size, size),
            rhs: DVector::<f64>::zeros(size),
            equation_counter: 0,
        }
    }

    /// Writes the next equation: `row` multiplies the unknowns of `segment`.
    pub(crate) fn push_segment_equation(&mut self, segment: usize, row: &[f64; COEFFICIENTS_PER_SEGMENT], value: f64) {
        self.push_equation(&[(segment, *row)], value);
    }

    /// Writes the next equation spanning several segments, e.g. `row_0 * s_0 - row_1 * s_1 = value`.
    pub(crate) fn push_equation(&mut self, terms: &[(usize, [f64; COEFFICIENTS_PER_SEGMENT])], value: f64) {
        debug_assert!(self.equation_counter < self.size(), "too many spline equations");

        for (segment, row) in terms {
            let index_start = segment * COEFFICIENTS_PER_SEGMENT;
            for (c, coefficient) in row.iter().enumerate() {
                self.matrix[(self.equation_counter, index_start + c)] += coefficient;
            }
        }
        self.rhs[self.equation_counter] = value;
        self.equation_counter += 1;
    }

    pub fn size(&self) -> usize {
        self.rhs.len()
    }

    pub fn number_of_equations(&self) -> usize {
        self.equation_counter
    }

    pub fn is_complete(&self) -> bool {
        self.equation_counter == self.size()
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }

    /// Solves the system with LU decomposition with partial pivoting.
    ///
    /// # Errors
    /// [SplineError::SingularSystem] when a pivot is zero or not finite, or when the
    /// solution does not satisfy the equations up to rounding.
    ///
    /// Pivots are not compared with each other: powers of x make them span many orders
    /// of magnitude for well-posed systems far from the origin.
    pub fn solve(&self) -> Result<DVector<f64>, SplineError> {
        trace!("matrix: {}", self.matrix);
        trace!("rhs: {}", self.rhs);

        let lu = self.matrix.clone().lu();
        let pivots = lu.u().diagonal();

        if pivots.iter().any(|pivot| *pivot == 0.0 || !pivot.is_finite()) {
            debug!("singular spline system, zero pivot");
            return Err(SplineError::SingularSystem);
        }

        let solution = lu.solve(&self.rhs).ok_or(SplineError::SingularSystem)?;
        if solution.iter().any(|value| !value.is_finite()) {
            debug!("singular spline system, solution is not finite");
            return Err(SplineError::SingularSystem);
        }

        let backward_error = self.backward_error(&solution);
        if backward_error > self.size() as f64 * f64::EPSILON {
            debug!("singular spline system, backward error {}", backward_error);
            return Err(SplineError::SingularSystem);
        }

        trace!("solution: {}", solution);
        Ok(solution)
    }

    /// Normwise backward error `|A s - rhs| / (|A| |s| + |rhs|)` in the infinity norm.
    fn backward_error(&self, solution: &DVector<f64>) -> f64 {
        let residual = (&self.matrix * solution - &self.rhs).amax();
        let matrix_norm = self
            .matrix
            .row_iter()
            .map(|row| row.iter().map(|value| value.abs()).sum::<f64>())
            .fold(0.0, f64::max);
        let scale = matrix_norm * solution.amax() + self.rhs.amax();

        if scale == 0.0 {
            0.0
        } else {
            residual / scale
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn push_rows() {
        let mut system = LinearSystem::zeros(2);

        system.push_segment_equation(1, &[1.0, 2.0, 3.0, 4.0], 7.0);
        system.push_equation(&[(0, [1.0, 1.0, 0.0, 0.0]), (1, [-1.0, 0.0, 0.0, -1.0])], 0.0);

        assert_eq!(8, system.size());
        assert_eq!(2, system.number_of_equations());
        assert!(!system.is_complete());

        assert_eq!(0.0, system.matrix()[(0, 0)]);
        assert_eq!(1.0, system.matrix()[(0, 4)]);
        assert_eq!(4.0, system.matrix()[(0, 7)]);
        assert_eq!(7.0, system.rhs()[0]);
        assert_eq!(1.0, system.matrix()[(1, 1)]);
        assert_eq!(-1.0, system.matrix()[(1, 4)]);
        assert_eq!(-1.0, system.matrix()[(1, 7)]);
    }

    #[test]
    fn solve_diagonal() {
        let mut system = LinearSystem::zeros(1);
        system.push_segment_equation(0, &[2.0, 0.0, 0.0, 0.0], 4.0);
        system.push_segment_equation(0, &[0.0, 4.0, 0.0, 0.0], 2.0);
        system.push_segment_equation(0, &[0.0, 0.0, 1.0, 0.0], -1.0);
        system.push_segment_equation(0, &[0.0, 0.0, 1.0, 1.0], 0.0);

        let solution = system.solve().unwrap();

        assert_approx_eq!(solution[0], 2.0, 1e-12);
        assert_approx_eq!(solution[1], 0.5, 1e-12);
        assert_approx_eq!(solution[2], -1.0, 1e-12);
        assert_approx_eq!(solution[3], 1.0, 1e-12);
    }

    #[test]
    fn solve_pivots_of_different_magnitude() {
        let mut system = LinearSystem::zeros(1);
        system.push_segment_equation(0, &[1.0e12, 0.0, 0.0, 0.0], 2.0e12);
        system.push_segment_equation(0, &[0.0, 1.0e-6, 0.0, 0.0], 3.0e-6);
        system.push_segment_equation(0, &[0.0, 0.0, 1.0, 0.0], -1.0);
        system.push_segment_equation(0, &[0.0, 0.0, 0.0, 1.0], 4.0);

        let solution = system.solve().unwrap();

        assert_approx_eq!(solution[0], 2.0, 1e-12);
        assert_approx_eq!(solution[1], 3.0, 1e-12);
        assert_approx_eq!(solution[2], -1.0, 1e-12);
        assert_approx_eq!(solution[3], 4.0, 1e-12);
    }

    #[test]
    fn solve_singular() {
        let mut system = LinearSystem::zeros(1);
        system.push_segment_equation(0, &[1.0, 1.0, 1.0, 1.0], 2.0);
        system.push_segment_equation(0, &[1.0, 1.0, 1.0, 1.0], 3.0);
        system.push_segment_equation(0, &[6.0, 2.0, 0.0, 0.0], 0.0);
        system.push_segment_equation(0, &[6.0, 2.0, 0.0, 0.0], 0.0);

        assert!(matches!(system.solve(), Err(SplineError::SingularSystem)));
    }

    #[test]
    fn solve_empty_rows() {
        let system = LinearSystem::zeros(1);

        assert!(matches!(system.solve(), Err(SplineError::SingularSystem)));
    }
}
