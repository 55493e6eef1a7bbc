use log::debug;

use crate::boundary::BoundaryCondition;
use crate::coefficients::CoefficientVector;
use crate::config::SplineConfig;
use crate::error::SplineError;
use crate::point::{validate_points, ControlPoint};
use crate::polynomial::derivative_row;
use crate::system::LinearSystem;

/// Builds the coefficients of a cubic spline through a sequence of control points.
///
/// Equations are assembled in a fixed order: interpolation of both ends of every
/// segment, first derivative continuity at interior points, second derivative
/// continuity at interior points and finally the 2 boundary equations.
///
/// # Example
/// ```
/// use natural_spline::{ControlPoint, SplineBuilder};
///
/// let points: Vec<ControlPoint> = [(0.0, 21.0), (1.0, 24.0), (2.0, 24.0), (3.0, 18.0), (4.0, 16.0)]
///     .into_iter()
///     .map(ControlPoint::from)
///     .collect();
///
/// let coefficients = SplineBuilder::default().build(&points).unwrap();
/// assert_eq!(16, coefficients.len());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplineBuilder {
    boundary_condition: BoundaryCondition,
}

impl SplineBuilder {
    pub fn new(boundary_condition: BoundaryCondition) -> Self {
        SplineBuilder { boundary_condition }
    }

    pub fn from_config(config: &SplineConfig) -> Self {
        SplineBuilder::new(config.boundary_condition)
    }

    pub fn get_boundary_condition(&self) -> BoundaryCondition {
        self.boundary_condition
    }

    /// Solves the spline equations for `points`.
    ///
    /// # Errors
    /// - [SplineError::DegenerateInput] when fewer than 2 points are given,
    /// - [SplineError::NonFiniteInput] when a point holds NaN or infinity,
    /// - [SplineError::SingularSystem] when equations can not be solved, e.g. two points share x.
    pub fn build(&self, points: &[ControlPoint]) -> Result<CoefficientVector, SplineError> {
        debug!(
            "building {} spline through {} control points",
            self.boundary_condition,
            points.len()
        );
        let system = self.assemble(points)?;
        let solution = system.solve()?;
        Ok(CoefficientVector::from_solution(solution))
    }

    /// Assembles the dense set of spline equations without solving it.
    pub fn assemble(&self, points: &[ControlPoint]) -> Result<LinearSystem, SplineError> {
        validate_points(points)?;

        let number_of_segments = points.len() - 1;
        let mut system = LinearSystem::zeros(number_of_segments);

        interpolation_equations(points, &mut system)?;
        first_derivative_continuity_equations(points, &mut system)?;
        second_derivative_continuity_equations(points, &mut system)?;
        self.boundary_condition.append_equations(points, &mut system)?;

        debug_assert!(system.is_complete());
        Ok(system)
    }
}

fn interpolation_equations(points: &[ControlPoint], system: &mut LinearSystem) -> Result<(), SplineError> {
    for (segment, ends) in points.windows(2).enumerate() {
        for point in ends {
            system.push_segment_equation(segment, &derivative_row(point.get_x(), 0)?, point.get_y());
        }
    }
    Ok(())
}

fn first_derivative_continuity_equations(points: &[ControlPoint], system: &mut LinearSystem) -> Result<(), SplineError> {
    continuity_equations(points, 1, system)
}

fn second_derivative_continuity_equations(points: &[ControlPoint], system: &mut LinearSystem) -> Result<(), SplineError> {
    continuity_equations(points, 2, system)
}

/// Derivative of `order` of segment i minus the one of segment i + 1 is 0 at their shared point.
fn continuity_equations(points: &[ControlPoint], order: usize, system: &mut LinearSystem) -> Result<(), SplineError> {
    let number_of_segments = points.len() - 1;

    for segment in 0..number_of_segments - 1 {
        let row = derivative_row(points[segment + 1].get_x(), order)?;
        let negated_row = row.map(|coefficient| -coefficient);
        system.push_equation(&[(segment, row), (segment + 1, negated_row)], 0.0);
    }
    Ok(())
}
