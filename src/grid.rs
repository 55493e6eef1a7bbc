use crate::point::{x_range, ControlPoint};

/// Abscissas `min_x + k * step` covering the range of `points`, used to sample the curve.
///
/// Returns an empty grid for no points or a step which is not positive and finite.
/// The last abscissa never exceeds the largest x of `points`.
///
/// # Example
/// ```
/// use natural_spline::{sample_grid, ControlPoint};
///
/// let points = vec![ControlPoint::new(0.0, 21.0), ControlPoint::new(1.0, 24.0)];
/// let grid = sample_grid(&points, 0.25);
///
/// assert_eq!(vec![0.0, 0.25, 0.5, 0.75, 1.0], grid);
/// ```
pub fn sample_grid(points: &[ControlPoint], step: f64) -> Vec<f64> {
    if points.is_empty() || !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }

    let (min_x, max_x) = x_range(points);
    let number_of_steps = ((max_x - min_x) / step).floor() as usize;

    (0..=number_of_steps)
        .map(|i| (min_x + step * i as f64).min(max_x))
        .collect()
}
