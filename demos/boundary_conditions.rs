extern crate natural_spline;

use natural_spline::{BoundaryCondition, ControlPoint, SplineBuilder, SplineEvaluator};

fn main() {

    let points: Vec<ControlPoint> = [
        (-0.8499, 0.88), (-0.5245, 0.88), (-0.3103, 0.88), (-0.16, 0.875), (0.0, 0.86),
        (0.3103, 1.00), (0.4, 1.074), (0.5245, 1.10), (0.8499, 1.10),
    ]
        .into_iter()
        .map(ControlPoint::from)
        .collect();

    let conditions = [BoundaryCondition::Natural, BoundaryCondition::NotAKnot, BoundaryCondition::QuadraticEnd];
    let coefficients: Vec<_> = conditions
        .iter()
        .map(|condition| SplineBuilder::new(*condition).build(&points).unwrap())
        .collect();
    let splines: Vec<_> = coefficients
        .iter()
        .map(|c| SplineEvaluator::new(c, &points).unwrap())
        .collect();

    let x_min = -0.8499;
    let x_max = 0.8499;
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;{};{};{}", conditions[0], conditions[1], conditions[2]);
    for i in 0..=number_of_steps {
        let x = (x_min + step * i as f64).min(x_max);
        let y: Vec<String> = splines
            .iter()
            .map(|spline| format!("{:.4}", spline.evaluate(x).unwrap()))
            .collect();
        println!("{:.4};{}", x, y.join(";"));
    }
}
