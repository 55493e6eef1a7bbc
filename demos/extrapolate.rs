extern crate natural_spline;

use natural_spline::{ControlPoint, Extrapolation, SplineConfig, SplineBuilder, SplineEvaluator};

fn main() {

    let config = SplineConfig::from_json_str(r#"{ "boundary_condition": "natural", "extrapolation": "extend" }"#).unwrap();

    let points = vec![
        ControlPoint::new(1.0, 1.0),
        ControlPoint::new(2.0, 0.0),
        ControlPoint::new(3.0, -2.0),
        ControlPoint::new(4.0, 1.0),
        ControlPoint::new(5.0, 1.0)
    ];

    let coefficients = SplineBuilder::from_config(&config).build(&points).unwrap();
    let extended = SplineEvaluator::with_config(&coefficients, &points, &config).unwrap();
    let clamped = extended.with_extrapolation(Extrapolation::Clamp);

    let x_min = 0.0;
    let x_max = 6.0;
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;extend;clamp");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!("{:.2};{:.2};{:.2}", x, extended.evaluate(x).unwrap(), clamped.evaluate(x).unwrap());
    }
}
