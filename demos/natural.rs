extern crate natural_spline;

use natural_spline::{sample_grid, ControlPoint, SplineBuilder, SplineEvaluator};

fn main() {

    let points: Vec<ControlPoint> = [(0.0, 21.0), (1.0, 24.0), (2.0, 24.0), (3.0, 18.0), (4.0, 16.0)]
        .into_iter()
        .map(ControlPoint::from)
        .collect();

    let coefficients = SplineBuilder::default().build(&points).unwrap();
    let spline = SplineEvaluator::new(&coefficients, &points).unwrap();

    let x_vector = sample_grid(&points, 0.01);
    let result = spline.evaluate_batch(&x_vector).unwrap();

    println!("x;y");
    for (x, y) in x_vector.iter().zip(result.iter()) {
        println!("{:.2};{:.4}", x, y);
    }
}
