use serde::{Deserialize, Serialize};

use crate::error::SplineError;

/// ControlPoint represents point through which the spline passes.
/// - `x` - coordinate,
/// - `y` - coordinate.
///
/// # Example
/// ```
/// use natural_spline::ControlPoint;
///
/// let point = ControlPoint::new(1.0, 2.0);
/// let from_tuple = ControlPoint::from((1.0, 2.0));
///
/// assert_eq!(point, from_tuple);
/// assert_eq!(2.0, point.get_y());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    x: f64,
    y: f64,
}

impl ControlPoint {
    pub fn new(x: f64, y: f64) -> Self {
        ControlPoint { x, y }
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for ControlPoint {
    fn from(pair: (f64, f64)) -> Self {
        ControlPoint::new(pair.0, pair.1)
    }
}

impl From<[f64; 2]> for ControlPoint {
    fn from(pair: [f64; 2]) -> Self {
        ControlPoint::new(pair[0], pair[1])
    }
}

/// Checks that `points` can carry at least one segment and holds only finite values.
pub(crate) fn validate_points(points: &[ControlPoint]) -> Result<(), SplineError> {
    if points.len() < 2 {
        return Err(SplineError::DegenerateInput { got: points.len() });
    }
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(SplineError::NonFiniteInput { index }),
        None => Ok(()),
    }
}

/// Smallest and largest abscissa of `points`, regardless of their order.
pub(crate) fn x_range(points: &[ControlPoint]) -> (f64, f64) {
    points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(min_x, max_x), p| {
        (min_x.min(p.x), max_x.max(p.x))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let point = ControlPoint::new(1.0, 2.5);

        assert_eq!(1.0, point.x);
        assert_eq!(2.5, point.y);
    }

    #[test]
    fn test_from_array() {
        let point = ControlPoint::from([-3.0, 4.0]);

        assert_eq!(-3.0, point.get_x());
        assert_eq!(4.0, point.get_y());
    }

    #[test]
    fn test_validate_too_few_points() {
        let single = vec![ControlPoint::new(0.0, 1.0)];

        assert!(matches!(validate_points(&[]), Err(SplineError::DegenerateInput { got: 0 })));
        assert!(matches!(validate_points(&single), Err(SplineError::DegenerateInput { got: 1 })));
    }

    #[test]
    fn test_validate_non_finite() {
        let points = vec![
            ControlPoint::new(0.0, 1.0),
            ControlPoint::new(1.0, f64::NAN),
            ControlPoint::new(f64::INFINITY, 1.0),
        ];

        assert!(matches!(validate_points(&points), Err(SplineError::NonFiniteInput { index: 1 })));
    }

    #[test]
    fn test_x_range_unordered() {
        let points = vec![
            ControlPoint::new(2.0, 0.0),
            ControlPoint::new(-1.0, 0.0),
            ControlPoint::new(5.0, 0.0),
        ];

        assert_eq!((-1.0, 5.0), x_range(&points));
    }
}
