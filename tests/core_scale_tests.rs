use approx::assert_relative_eq;
use chartable::core::{ChartScales, Dimension, LinearScale, SurfaceSize};

#[test]
fn linear_scale_maps_domain_onto_range() {
    let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0)).expect("valid scale");

    assert_relative_eq!(scale.map(0.0), 0.0);
    assert_relative_eq!(scale.map(5.0), 50.0);
    assert_relative_eq!(scale.map(10.0), 100.0);
    assert_relative_eq!(scale.map(12.0), 120.0);
}

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 640.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.map(original);
    let recovered = scale.invert(px);

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let scale = LinearScale::new((0.0, 0.0), (0.0, 50.0)).expect("degenerate domain is legal");

    assert!(scale.is_degenerate());
    assert_relative_eq!(scale.map(0.0), 25.0);
    assert_relative_eq!(scale.map(7.0), 25.0);
    assert_relative_eq!(scale.invert(10.0), 0.0);
}

#[test]
fn non_finite_domain_is_rejected() {
    assert!(LinearScale::new((0.0, f64::NAN), (0.0, 1.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (f64::INFINITY, 1.0)).is_err());
}

#[test]
fn overflowing_domain_span_is_rejected() {
    assert!(LinearScale::new((-f64::MAX, f64::MAX), (0.0, 50.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (f64::MAX, -f64::MAX)).is_err());

    let size = SurfaceSize::default();
    assert!(ChartScales::from_samples(&[f64::MAX, -f64::MAX], size).is_err());
    assert!(chartable::core::project_line_path(&[f64::MAX, -f64::MAX], size).is_err());
}

#[test]
fn extreme_one_sided_samples_stay_finite() {
    let scales = ChartScales::from_samples(&[f64::MAX, 0.0], SurfaceSize::default())
        .expect("span fits in f64");

    assert_relative_eq!(scales.y.map(f64::MAX), 50.0);
    assert_relative_eq!(scales.y.map(0.0), 0.0);
}

#[test]
fn chart_scales_cover_index_and_value_extent() {
    let size = SurfaceSize::new(100.0, 50.0).expect("size");
    let scales = ChartScales::from_samples(&[1.0, 5.0, 3.0, 2.0], size).expect("scales");

    assert_eq!(scales.x.domain(), (0.0, 3.0));
    assert_eq!(scales.x.range(), (0.0, 100.0));
    assert_eq!(scales.y.domain(), (0.0, 5.0));
    assert_eq!(scales.y.range(), (0.0, 50.0));
}

#[test]
fn empty_and_zero_series_degrade_to_zero_domain() {
    let size = SurfaceSize::default();

    let empty = ChartScales::from_samples(&[], size).expect("empty series");
    assert_eq!(empty.x.domain(), (0.0, 0.0));
    assert_eq!(empty.y.domain(), (0.0, 0.0));

    let zeros = ChartScales::from_samples(&[0.0, 0.0, 0.0], size).expect("zero series");
    assert_eq!(zeros.y.domain(), (0.0, 0.0));
}

#[test]
fn negative_samples_extend_value_domain_below_zero() {
    let size = SurfaceSize::default();

    let mixed = ChartScales::from_samples(&[-2.0, 4.0], size).expect("mixed series");
    assert_eq!(mixed.y.domain(), (-2.0, 4.0));

    let negative = ChartScales::from_samples(&[-3.0, -1.0], size).expect("negative series");
    assert_eq!(negative.y.domain(), (-3.0, -1.0));
}

#[test]
fn dimension_parses_numbers_and_pixel_strings() {
    assert_eq!(Dimension::parse("120", "width").expect("plain").get(), 120.0);
    assert_eq!(Dimension::parse(" 64px ", "width").expect("px suffix").get(), 64.0);
    assert_eq!(Dimension::new(12.0, "height").expect("lower bound").get(), 12.0);
}

#[test]
fn dimension_rejects_values_below_minimum() {
    assert!(Dimension::new(11.9, "width").is_err());
    assert!(Dimension::new(f64::NAN, "width").is_err());
    assert!(Dimension::parse("8", "height").is_err());
    assert!(Dimension::parse("wide", "width").is_err());
}

#[test]
fn dimension_deserializes_from_number_or_string() {
    let from_number: Dimension = serde_json::from_str("48").expect("number");
    let from_text: Dimension = serde_json::from_str("\"48px\"").expect("string");
    assert_eq!(from_number, from_text);

    assert!(serde_json::from_str::<Dimension>("4").is_err());
    assert_eq!(serde_json::to_string(&from_number).expect("serialize"), "48.0");
}
