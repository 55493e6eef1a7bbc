use crate::error::SplineError;

/// Number of unknowns describing one cubic segment.
pub const COEFFICIENTS_PER_SEGMENT: usize = 4;

/// Highest derivative order with a non-zero value on a cubic.
pub const MAX_DERIVATIVE_ORDER: usize = 3;

/// Coefficients of the cubic `a*x^3 + b*x^2 + c*x + d` of one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl SegmentCoefficients {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        SegmentCoefficients { a, b, c, d }
    }

    pub(crate) fn from_slice(coefficients: &[f64]) -> Self {
        SegmentCoefficients::new(coefficients[0], coefficients[1], coefficients[2], coefficients[3])
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * x.powi(3) + self.b * x.powi(2) + self.c * x + self.d
    }

    /// Value of the derivative of given `order` at `x`. Order 0 is the value itself.
    pub fn derivative(&self, x: f64, order: usize) -> Result<f64, SplineError> {
        let row = derivative_row(x, order)?;
        Ok(row[0] * self.a + row[1] * self.b + row[2] * self.c + row[3] * self.d)
    }
}

/// Multipliers of `[a, b, c, d]` producing the derivative of given `order` at `x`.
///
/// Row for order 0 is `[x^3, x^2, x, 1]`, for order 1 `[3x^2, 2x, 1, 0]` and so on.
pub(crate) fn derivative_row(x: f64, order: usize) -> Result<[f64; COEFFICIENTS_PER_SEGMENT], SplineError> {
    if order > MAX_DERIVATIVE_ORDER {
        return Err(SplineError::InvalidDerivativeOrder { order });
    }

    let mut row = [0.0; COEFFICIENTS_PER_SEGMENT];
    for (term, entry) in row.iter_mut().enumerate() {
        let power = MAX_DERIVATIVE_ORDER - term;
        if power >= order {
            *entry = power_derivative_coefficient(power, order) * x.powi((power - order) as i32);
        }
    }
    Ok(row)
}

fn power_derivative_coefficient(power: usize, order: usize) -> f64 {
    let mut multiplier = 1.0;
    let mut coeff = power as f64;
    for _ in 0..order {
        multiplier *= coeff;
        coeff -= 1.0;
    }
    multiplier
}
