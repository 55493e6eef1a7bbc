use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::SplineError;
use crate::point::ControlPoint;
use crate::polynomial::derivative_row;
use crate::system::LinearSystem;

/// Condition closing the set of spline equations with its last 2 rows.
///
/// # Example
/// ```
/// use natural_spline::{BoundaryCondition, ControlPoint, SplineBuilder};
///
/// let points = vec![
///     ControlPoint::new(0.0, 0.0),
///     ControlPoint::new(1.0, 1.0),
///     ControlPoint::new(2.0, 8.0),
///     ControlPoint::new(3.0, 27.0),
/// ];
/// // not-a-knot reproduces a cubic exactly
/// let coefficients = SplineBuilder::new(BoundaryCondition::NotAKnot).build(&points).unwrap();
///
/// assert!((coefficients.as_slice()[0] - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryCondition {
    /// Zero second derivative at the first and the last control point.
    #[default]
    Natural,
    /// Continuous third derivative across the first and the last interior junction.
    NotAKnot,
    /// No cubic term in the first and the last segment.
    QuadraticEnd,
}

impl BoundaryCondition {
    /// Appends the 2 boundary equations for spline through `points` to `system`.
    pub(crate) fn append_equations(&self, points: &[ControlPoint], system: &mut LinearSystem) -> Result<(), SplineError> {
        let number_of_segments = points.len() - 1;
        let last = number_of_segments - 1;

        match self {
            BoundaryCondition::Natural => {
                system.push_segment_equation(0, &derivative_row(points[0].get_x(), 2)?, 0.0);
                system.push_segment_equation(last, &derivative_row(points[number_of_segments].get_x(), 2)?, 0.0);
            }
            BoundaryCondition::NotAKnot => {
                if number_of_segments == 1 {
                    // straight line
                    system.push_segment_equation(0, &[1.0, 0.0, 0.0, 0.0], 0.0);
                    system.push_segment_equation(0, &[0.0, 1.0, 0.0, 0.0], 0.0);
                    return Ok(());
                }

                let third = derivative_row(0.0, 3)?;
                system.push_equation(&[(0, third), (1, negated(&third))], 0.0);
                if number_of_segments == 2 {
                    // both junctions coincide, the result is a single parabola
                    system.push_segment_equation(0, &[1.0, 0.0, 0.0, 0.0], 0.0);
                } else {
                    system.push_equation(&[(last - 1, third), (last, negated(&third))], 0.0);
                }
            }
            BoundaryCondition::QuadraticEnd => {
                system.push_segment_equation(0, &[1.0, 0.0, 0.0, 0.0], 0.0);
                if number_of_segments == 1 {
                    system.push_segment_equation(0, &derivative_row(points[1].get_x(), 2)?, 0.0);
                } else {
                    system.push_segment_equation(last, &[1.0, 0.0, 0.0, 0.0], 0.0);
                }
            }
        }
        Ok(())
    }
}

impl Display for BoundaryCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryCondition::Natural => write!(f, "natural"),
            BoundaryCondition::NotAKnot => write!(f, "not-a-knot"),
            BoundaryCondition::QuadraticEnd => write!(f, "quadratic end"),
        }
    }
}

fn negated(row: &[f64; 4]) -> [f64; 4] {
    row.map(|coefficient| -coefficient)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(xs: &[f64]) -> Vec<ControlPoint> {
        xs.iter().map(|x| ControlPoint::new(*x, 0.0)).collect()
    }

    #[test]
    fn natural_rows() {
        let points = points(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let mut system = LinearSystem::zeros(4);

        BoundaryCondition::Natural.append_equations(&points, &mut system).unwrap();

        assert_eq!(2, system.number_of_equations());
        assert_eq!(0.0, system.matrix()[(0, 0)]);
        assert_eq!(2.0, system.matrix()[(0, 1)]);
        assert_eq!(24.0, system.matrix()[(1, 12)]);
        assert_eq!(2.0, system.matrix()[(1, 13)]);
        assert_eq!(0.0, system.rhs()[1]);
    }

    #[test]
    fn not_a_knot_rows() {
        let points = points(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let mut system = LinearSystem::zeros(4);

        BoundaryCondition::NotAKnot.append_equations(&points, &mut system).unwrap();

        assert_eq!(6.0, system.matrix()[(0, 0)]);
        assert_eq!(-6.0, system.matrix()[(0, 4)]);
        assert_eq!(6.0, system.matrix()[(1, 8)]);
        assert_eq!(-6.0, system.matrix()[(1, 12)]);
        assert_eq!(2, system.matrix().row(0).iter().filter(|v| **v != 0.0).count());
    }

    #[test]
    fn quadratic_end_rows() {
        let points = points(&[0.0, 1.0, 2.0]);
        let mut system = LinearSystem::zeros(2);

        BoundaryCondition::QuadraticEnd.append_equations(&points, &mut system).unwrap();

        assert_eq!(1.0, system.matrix()[(0, 0)]);
        assert_eq!(1.0, system.matrix()[(1, 4)]);
        assert!(!system.is_complete());
    }

    #[test]
    fn deserialize() {
        let condition: BoundaryCondition = serde_json::from_str("\"not_a_knot\"").unwrap();

        assert_eq!(BoundaryCondition::NotAKnot, condition);
        assert_eq!(BoundaryCondition::Natural, BoundaryCondition::default());
        assert_eq!("quadratic end", BoundaryCondition::QuadraticEnd.to_string());
    }
}
