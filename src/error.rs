use thiserror::Error;

/// Errors returned while building or evaluating a spline.
#[derive(Debug, Error)]
pub enum SplineError {
    #[error("spline must have at least 2 control points, got {got}")]
    DegenerateInput { got: usize },

    #[error("control point {index} is not finite")]
    NonFiniteInput { index: usize },

    #[error("set of spline equations is singular")]
    SingularSystem,

    #[error("x = {x} is out of range [{min_x}, {max_x}]")]
    OutOfDomain { x: f64, min_x: f64, max_x: f64 },

    #[error("{coefficients} coefficients do not describe a spline through {points} control points")]
    CoefficientMismatch { coefficients: usize, points: usize },

    #[error("derivative of order {order} is not defined for a cubic segment")]
    InvalidDerivativeOrder { order: usize },

    #[error("invalid spline configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let error = SplineError::DegenerateInput { got: 1 };
        assert_eq!(error.to_string(), "spline must have at least 2 control points, got 1");

        let error = SplineError::OutOfDomain { x: 5.0, min_x: 0.0, max_x: 4.0 };
        assert_eq!(error.to_string(), "x = 5 is out of range [0, 4]");
    }
}
