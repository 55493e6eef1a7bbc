//! Cubic spline interpolation through 2D control points.
//!
//! Coefficients of every segment's cubic `a*x^3 + b*x^2 + c*x + d` are found by solving
//! one dense set of equations: interpolation of both segment ends, continuity of first and
//! second derivatives at interior points and 2 equations given by a [BoundaryCondition].
//!
//! # Example
//! ```
//! use natural_spline::{ControlPoint, SplineBuilder, SplineEvaluator};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let points = vec![
//!     ControlPoint::new(0.0, 21.0),
//!     ControlPoint::new(1.0, 24.0),
//!     ControlPoint::new(2.0, 24.0),
//!     ControlPoint::new(3.0, 18.0),
//!     ControlPoint::new(4.0, 16.0),
//! ];
//! let coefficients = SplineBuilder::default().build(&points).unwrap();
//! let spline = SplineEvaluator::new(&coefficients, &points).unwrap();
//!
//! assert_approx_eq!(21.0, spline.evaluate(0.0).unwrap(), 1e-9);
//! assert_approx_eq!(22.613839, spline.evaluate(0.5).unwrap(), 1e-6);
//! assert_approx_eq!(16.0, spline.evaluate(4.0).unwrap(), 1e-9);
//! ```

mod boundary;
mod builder;
mod coefficients;
mod config;
mod error;
mod evaluator;
mod grid;
mod point;
mod polynomial;
mod system;

pub use boundary::BoundaryCondition;
pub use builder::SplineBuilder;
pub use coefficients::CoefficientVector;
pub use config::{Extrapolation, SplineConfig};
pub use error::SplineError;
pub use evaluator::{evaluate, SplineEvaluator};
pub use grid::sample_grid;
pub use point::ControlPoint;
pub use polynomial::SegmentCoefficients;
pub use system::LinearSystem;
