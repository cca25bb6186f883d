#![cfg(feature = "serde")]

use arc_spline::prelude::{ArcLengthSpline2D, InterpolationKind, SampleOptions};

#[test]
fn test_serialization() {
    let spline = ArcLengthSpline2D::try_new(
        &[-2.5, 0.0, 2.5, 5.0, 7.5],
        &[0.7, -6., -5., -3.5, 0.0],
        InterpolationKind::Cubic,
    )
    .unwrap();
    let json = serde_json::to_string_pretty(&spline).unwrap();
    assert!(json.contains("\"cubic\""));

    let restored: ArcLengthSpline2D<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, spline);

    let samples = spline.sample(&SampleOptions::default()).unwrap();
    let json = serde_json::to_string(&samples).unwrap();
    println!("{}", json);
}
