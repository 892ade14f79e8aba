use bowlsaver_core::Vector;
use bowlsaver_designer::{JigGeometry, JigState, Workpiece};

fn scenario_state() -> JigState {
    let mut state = JigState::new(JigGeometry::new(Workpiece::new(80.0, 300.0).unwrap()));
    state.set_radius(90.0);
    state.move_to(Vector::new(150.0, 20.0));
    state.rotate(0.0);
    state
}

#[test]
fn test_entry_point_shown_for_reference_pose() {
    let state = scenario_state();
    let entry = state.entry_point().expect("entry point should be visible");
    assert!(entry.distance > 0.0 && entry.distance < 150.0);
    assert!((entry.point.x - 80.0).abs() < 1e-9);

    // The point sits on the kerf-offset blade path
    let arc = state.cutter_arc();
    assert!(((entry.point - arc.center).magnitude() - 91.5).abs() < 1e-9);
    assert!((entry.distance - (150.0 - entry.point.y)).abs() < 1e-12);
}

#[test]
fn test_entry_point_hidden_when_cutter_clears_workpiece() {
    let mut state = scenario_state();
    state.move_to(Vector::new(200.0, 20.0));
    assert!(state.entry_point().is_none());
}

#[test]
fn test_entry_point_hidden_when_blade_faces_away() {
    let mut state = scenario_state();
    // Blade now sweeps 270..360, away from the front face
    state.rotate(180.0);
    assert!(state.entry_point().is_none());
}

#[test]
fn test_two_crossings_are_suppressed() {
    let mut geometry = JigGeometry::new(Workpiece::new(80.0, 300.0).unwrap());
    geometry.cutter.inherent_rotation = 90.0;
    geometry.cutter.arc_angle = 180.0;
    let mut state = JigState::new(geometry);
    state.set_radius(90.0);
    state.move_to(Vector::new(150.0, 20.0));

    // Blade spans the whole left half, so both crossings survive
    let hits = bowlsaver_core::geometry::intersect_vertical(&state.cutter_arc(), 80.0);
    assert_eq!(hits.len(), 2);
    assert!(state.entry_point().is_none());
}

#[test]
fn test_entry_point_below_centerline_is_out_of_range() {
    let mut state = scenario_state();
    // Lower the pivot so the crossing lands under the centerline
    state.move_to(Vector::new(150.0, -100.0));
    let hits = bowlsaver_core::geometry::intersect_vertical(&state.cutter_arc(), 80.0);
    assert_eq!(hits.len(), 1);
    assert!(hits[0].y < 0.0);
    assert!(state.entry_point().is_none());
}

#[test]
fn test_zero_radius_has_no_entry_point() {
    let mut state = scenario_state();
    state.set_radius(0.0);
    assert!(state.entry_point().is_none());
}
