use crate::coefficients::CoefficientVector;
use crate::config::{Extrapolation, SplineConfig};
use crate::error::SplineError;
use crate::point::{validate_points, ControlPoint};
use crate::polynomial::{SegmentCoefficients, COEFFICIENTS_PER_SEGMENT};

/// Evaluates the spline described by a [CoefficientVector] and the control points it was built from.
///
/// Segment `i` covers `[x_i, x_i+1)`, so a query lying exactly on an interior control
/// point uses the segment to its right. The last control point belongs to the last segment.
///
/// # Example
/// ```
/// use natural_spline::{ControlPoint, Extrapolation, SplineBuilder, SplineEvaluator};
///
/// let points = vec![ControlPoint::new(0.0, 1.0), ControlPoint::new(1.0, 3.0), ControlPoint::new(2.0, 2.0)];
/// let coefficients = SplineBuilder::default().build(&points).unwrap();
/// let evaluator = SplineEvaluator::new(&coefficients, &points).unwrap();
///
/// assert!((evaluator.evaluate(1.0).unwrap() - 3.0).abs() < 1e-9);
/// assert!(evaluator.evaluate(2.5).is_err());
///
/// let evaluator = evaluator.with_extrapolation(Extrapolation::Clamp);
/// assert!((evaluator.evaluate(2.5).unwrap() - 2.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SplineEvaluator<'a> {
    coefficients: &'a CoefficientVector,
    points: &'a [ControlPoint],
    extrapolation: Extrapolation,
    min_index: usize,
    max_index: usize,
}

impl<'a> SplineEvaluator<'a> {
    /// Creates evaluator failing outside of control points range.
    ///
    /// # Errors
    /// [SplineError::DegenerateInput] for fewer than 2 points and [SplineError::CoefficientMismatch]
    /// when `coefficients` were not built for that many points.
    pub fn new(coefficients: &'a CoefficientVector, points: &'a [ControlPoint]) -> Result<Self, SplineError> {
        validate_points(points)?;

        if coefficients.len() != COEFFICIENTS_PER_SEGMENT * (points.len() - 1) {
            return Err(SplineError::CoefficientMismatch {
                coefficients: coefficients.len(),
                points: points.len(),
            });
        }

        let mut min_index = 0;
        let mut max_index = 0;
        for (index, point) in points.iter().enumerate() {
            if point.get_x() < points[min_index].get_x() {
                min_index = index;
            }
            if point.get_x() > points[max_index].get_x() {
                max_index = index;
            }
        }

        Ok(SplineEvaluator {
            coefficients,
            points,
            extrapolation: Extrapolation::default(),
            min_index,
            max_index,
        })
    }

    pub fn with_config(
        coefficients: &'a CoefficientVector,
        points: &'a [ControlPoint],
        config: &SplineConfig,
    ) -> Result<Self, SplineError> {
        Ok(SplineEvaluator::new(coefficients, points)?.with_extrapolation(config.extrapolation))
    }

    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    pub fn get_extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    pub fn min_x(&self) -> f64 {
        self.points[self.min_index].get_x()
    }

    pub fn max_x(&self) -> f64 {
        self.points[self.max_index].get_x()
    }

    pub fn evaluate(&self, x: f64) -> Result<f64, SplineError> {
        let (segment, x) = self.locate(x)?;
        Ok(segment.evaluate(x))
    }

    /// Derivative of given `order` (0 to 3). Clamped extrapolation has zero derivatives.
    pub fn derivative(&self, x: f64, order: usize) -> Result<f64, SplineError> {
        let (segment, located_x) = self.locate(x)?;
        let value = segment.derivative(located_x, order)?;
        if order > 0 && located_x != x {
            Ok(0.0)
        } else {
            Ok(value)
        }
    }

    /// Evaluates all of `x_vector`, failing as a whole on the first error.
    pub fn evaluate_batch(&self, x_vector: &[f64]) -> Result<Vec<f64>, SplineError> {
        x_vector.iter().map(|x| self.evaluate(*x)).collect()
    }

    /// Index of the segment containing `x` or `None` when `x` is outside of the control points.
    pub fn find_segment_index(&self, x: f64) -> Option<usize> {
        let number_of_segments = self.points.len() - 1;

        for (index, ends) in self.points.windows(2).enumerate() {
            let left_x = ends[0].get_x();
            let right_x = ends[1].get_x();
            if x == left_x || (x - left_x) * (x - right_x) < 0.0 {
                return Some(index);
            }
        }

        if x == self.points[number_of_segments].get_x() {
            Some(number_of_segments - 1)
        } else {
            None
        }
    }

    /// Segment to evaluate and abscissa to evaluate it at, following extrapolation policy.
    fn locate(&self, x: f64) -> Result<(SegmentCoefficients, f64), SplineError> {
        let (index, x) = match self.find_segment_index(x) {
            Some(index) => (index, x),
            None => {
                let end_index = if x < self.min_x() {
                    self.min_index
                } else if x > self.max_x() {
                    self.max_index
                } else {
                    return Err(self.out_of_domain(x));
                };

                match self.extrapolation {
                    Extrapolation::Error => return Err(self.out_of_domain(x)),
                    Extrapolation::Extend => (self.segment_at_point(end_index), x),
                    Extrapolation::Clamp => (self.segment_at_point(end_index), self.points[end_index].get_x()),
                }
            }
        };

        match self.coefficients.segment(index) {
            Some(segment) => Ok((segment, x)),
            None => Err(SplineError::CoefficientMismatch {
                coefficients: self.coefficients.len(),
                points: self.points.len(),
            }),
        }
    }

    /// Segment starting at control point `index`, or the last one for the last point.
    fn segment_at_point(&self, index: usize) -> usize {
        index.min(self.points.len() - 2)
    }

    fn out_of_domain(&self, x: f64) -> SplineError {
        SplineError::OutOfDomain { x, min_x: self.min_x(), max_x: self.max_x() }
    }
}

/// Evaluates spline at `x`, failing outside of the control points range.
///
/// # Example
/// ```
/// use natural_spline::{evaluate, ControlPoint, SplineBuilder};
///
/// let points = vec![ControlPoint::new(0.0, 21.0), ControlPoint::new(1.0, 24.0), ControlPoint::new(2.0, 24.0)];
/// let coefficients = SplineBuilder::default().build(&points).unwrap();
///
/// assert!((evaluate(2.0, &coefficients, &points).unwrap() - 24.0).abs() < 1e-9);
/// ```
pub fn evaluate(x: f64, coefficients: &CoefficientVector, points: &[ControlPoint]) -> Result<f64, SplineError> {
    SplineEvaluator::new(coefficients, points)?.evaluate(x)
}
