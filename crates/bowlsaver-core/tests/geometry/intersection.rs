use bowlsaver_core::geometry::{
    compute_intersections, intersect_horizontal, intersect_vertical, Arc, Line, Vector,
};

fn close(a: Vector, b: Vector) -> bool {
    (a - b).magnitude() < 1e-9
}

#[test]
fn test_vertical_line_through_full_circle() {
    let arc = Arc::full_circle(Vector::ZERO, 10.0);
    let pts = intersect_vertical(&arc, 0.0);
    assert_eq!(pts.len(), 2);
    assert!(close(pts[0], Vector::new(0.0, 10.0)));
    assert!(close(pts[1], Vector::new(0.0, -10.0)));
}

#[test]
fn test_vertical_tangent_yields_single_point() {
    let arc = Arc::full_circle(Vector::ZERO, 10.0);
    let pts = intersect_vertical(&arc, 10.0);
    assert_eq!(pts.len(), 1);
    assert!(close(pts[0], Vector::new(10.0, 0.0)));
}

#[test]
fn test_vertical_line_missing_circle() {
    let arc = Arc::full_circle(Vector::ZERO, 10.0);
    assert!(intersect_vertical(&arc, 11.0).is_empty());
    assert!(intersect_vertical(&arc, -11.0).is_empty());
}

#[test]
fn test_horizontal_line_filtered_to_quarter_arc() {
    let arc = Arc::new(Vector::ZERO, 10.0, 0.0, 90.0);
    let pts = intersect_horizontal(&arc, 0.0);
    assert_eq!(pts.len(), 1);
    assert!(close(pts[0], Vector::new(10.0, 0.0)));
}

#[test]
fn test_horizontal_line_offset_center() {
    let arc = Arc::full_circle(Vector::new(5.0, 5.0), 5.0);
    let pts = intersect_horizontal(&arc, 5.0);
    assert_eq!(pts.len(), 2);
    assert!(close(pts[0], Vector::new(10.0, 5.0)));
    assert!(close(pts[1], Vector::new(0.0, 5.0)));
}

#[test]
fn test_arc_across_seam_keeps_right_side() {
    // Span 270..90 through 0 covers the right half only
    let arc = Arc::new(Vector::ZERO, 10.0, 270.0, 450.0);
    let pts = intersect_horizontal(&arc, 0.0);
    assert_eq!(pts.len(), 1);
    assert!(close(pts[0], Vector::new(10.0, 0.0)));

    let arc = Arc::new(Vector::ZERO, 10.0, -90.0, 90.0);
    assert_eq!(intersect_horizontal(&arc, 0.0).len(), 1);
}

#[test]
fn test_sloped_line_filtered_by_span() {
    // y = x hits the circle at 45 and 225 degrees
    let r = 10.0;
    let line = Line::Sloped {
        slope: 1.0,
        intercept: 0.0,
    };
    let full = compute_intersections(&Arc::full_circle(Vector::ZERO, r), &line);
    assert_eq!(full.len(), 2);

    let upper = compute_intersections(&Arc::new(Vector::ZERO, r, 0.0, 180.0), &line);
    assert_eq!(upper.len(), 1);
    let h = r / 2.0_f64.sqrt();
    assert!(close(upper[0], Vector::new(h, h)));
}

#[test]
fn test_sloped_line_missing_circle() {
    let line = Line::Sloped {
        slope: 0.5,
        intercept: 100.0,
    };
    assert!(compute_intersections(&Arc::full_circle(Vector::ZERO, 10.0), &line).is_empty());
}

#[test]
fn test_every_survivor_lies_on_circle_and_span() {
    let arc = Arc::new(Vector::new(150.0, 20.0), 91.5, 90.0, 180.0);
    for x in [60.0, 70.0, 80.0, 100.0, 140.0] {
        for p in intersect_vertical(&arc, x) {
            assert!(((p - arc.center).magnitude() - arc.radius).abs() < 1e-9);
            assert!(arc.contains_direction_of(p));
        }
    }
}
