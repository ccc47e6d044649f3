use approx::assert_relative_eq;
use chartable::core::{SurfaceSize, project_line_path};

fn size(width: f64, height: f64) -> SurfaceSize {
    SurfaceSize::new(width, height).expect("valid size")
}

#[test]
fn four_samples_produce_four_vertices_spanning_width() {
    let path = project_line_path(&[1.0, 5.0, 3.0, 2.0], size(100.0, 50.0)).expect("project");

    assert_eq!(path.len(), 4);
    assert_relative_eq!(path.vertices[0].x, 0.0);
    assert_relative_eq!(path.vertices[3].x, 100.0);
    assert_relative_eq!(path.vertices[1].x, 100.0 / 3.0, epsilon = 1e-9);
    assert_relative_eq!(path.vertices[2].x, 200.0 / 3.0, epsilon = 1e-9);

    let ys: Vec<f64> = path.vertices.iter().map(|vertex| vertex.y).collect();
    for (actual, expected) in ys.iter().zip([10.0, 50.0, 30.0, 20.0]) {
        assert_relative_eq!(*actual, expected, epsilon = 1e-9);
    }
}

#[test]
fn svg_path_data_uses_move_then_line_commands() {
    let path = project_line_path(&[0.0, 10.0, 5.0], size(100.0, 50.0)).expect("project");

    assert_eq!(path.to_svg_d().as_deref(), Some("M0,0L50,50L100,25"));
}

#[test]
fn empty_series_has_no_path_data() {
    let path = project_line_path(&[], size(100.0, 50.0)).expect("empty is legal");

    assert!(path.is_empty());
    assert_eq!(path.to_svg_d(), None);
}

#[test]
fn single_sample_is_centered_and_closed() {
    let zero = project_line_path(&[0.0], size(100.0, 50.0)).expect("single zero");
    assert_eq!(zero.to_svg_d().as_deref(), Some("M50,25Z"));

    let positive = project_line_path(&[4.0], size(100.0, 50.0)).expect("single positive");
    assert_eq!(positive.to_svg_d().as_deref(), Some("M50,50Z"));
}

#[test]
fn all_zero_series_does_not_fail() {
    let path = project_line_path(&[0.0, 0.0], size(40.0, 20.0)).expect("flat series");

    assert_eq!(path.to_svg_d().as_deref(), Some("M0,10L40,10"));
}

#[test]
fn non_finite_samples_are_rejected() {
    assert!(project_line_path(&[1.0, f64::NAN], size(100.0, 50.0)).is_err());
    assert!(project_line_path(&[f64::INFINITY], size(100.0, 50.0)).is_err());
}

#[test]
fn vertices_follow_index_order() {
    let path = project_line_path(&[3.0, 1.0, 2.0, 0.0, 9.0], size(200.0, 90.0)).expect("project");

    for pair in path.vertices.windows(2) {
        assert!(pair[0].x < pair[1].x);
    }
}
