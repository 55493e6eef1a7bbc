use nalgebra::DVector;

use crate::polynomial::{SegmentCoefficients, COEFFICIENTS_PER_SEGMENT};

/// Flat, segment-major table of spline coefficients `[a_1, b_1, c_1, d_1, a_2, ...]`.
///
/// Produced by [SplineBuilder](crate::SplineBuilder) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientVector {
    coefficients: Vec<f64>,
}

impl CoefficientVector {
    pub(crate) fn from_solution(solution: DVector<f64>) -> Self {
        CoefficientVector { coefficients: solution.as_slice().to_vec() }
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn number_of_segments(&self) -> usize {
        self.coefficients.len() / COEFFICIENTS_PER_SEGMENT
    }

    pub fn segment(&self, index: usize) -> Option<SegmentCoefficients> {
        let start = index * COEFFICIENTS_PER_SEGMENT;
        self.coefficients
            .get(start..start + COEFFICIENTS_PER_SEGMENT)
            .map(SegmentCoefficients::from_slice)
    }

    pub fn segments(&self) -> impl DoubleEndedIterator<Item = SegmentCoefficients> + ExactSizeIterator + '_ {
        self.coefficients
            .chunks_exact(COEFFICIENTS_PER_SEGMENT)
            .map(SegmentCoefficients::from_slice)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.coefficients
    }
}

impl From<Vec<f64>> for CoefficientVector {
    fn from(coefficients: Vec<f64>) -> Self {
        CoefficientVector { coefficients }
    }
}
