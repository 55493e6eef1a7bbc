use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::boundary::BoundaryCondition;
use crate::error::SplineError;

/// Behaviour of evaluation outside of the range of control points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolation {
    /// Fail with [SplineError::OutOfDomain].
    #[default]
    Error,
    /// Continue the cubic of the segment at the nearest end.
    Extend,
    /// Return the value at the nearest end of the domain.
    Clamp,
}

/// Settings of spline construction and evaluation.
///
/// # Example
/// ```
/// use natural_spline::{BoundaryCondition, Extrapolation, SplineConfig};
///
/// let config = SplineConfig::from_json_str(r#"{ "boundary_condition": "not_a_knot" }"#).unwrap();
///
/// assert_eq!(BoundaryCondition::NotAKnot, config.boundary_condition);
/// assert_eq!(Extrapolation::Error, config.extrapolation);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineConfig {
    pub boundary_condition: BoundaryCondition,
    pub extrapolation: Extrapolation,
}

impl SplineConfig {
    pub fn new(boundary_condition: BoundaryCondition, extrapolation: Extrapolation) -> Self {
        SplineConfig { boundary_condition, extrapolation }
    }

    pub fn from_json_str(json: &str) -> Result<Self, SplineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SplineError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = SplineConfig::from_json_str("{}").unwrap();

        assert_eq!(SplineConfig::default(), config);
        assert_eq!(BoundaryCondition::Natural, config.boundary_condition);
        assert_eq!(Extrapolation::Error, config.extrapolation);
    }

    #[test]
    fn from_reader() {
        let json = br#"{ "boundary_condition": "quadratic_end", "extrapolation": "clamp" }"#;
        let config = SplineConfig::from_reader(&json[..]).unwrap();

        assert_eq!(SplineConfig::new(BoundaryCondition::QuadraticEnd, Extrapolation::Clamp), config);
    }

    #[test]
    fn unknown_variant() {
        let config = SplineConfig::from_json_str(r#"{ "boundary_condition": "clamped" }"#);

        assert!(matches!(config, Err(SplineError::Config(_))));
    }

    #[test]
    fn serialize() {
        let config = SplineConfig::new(BoundaryCondition::NotAKnot, Extrapolation::Extend);
        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(r#"{"boundary_condition":"not_a_knot","extrapolation":"extend"}"#, json);
    }
}
