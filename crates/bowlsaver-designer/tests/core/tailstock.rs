use bowlsaver_core::Vector;
use bowlsaver_designer::JigState;

fn posed(rotation: f64) -> JigState {
    let mut state = JigState::default();
    state.set_radius(90.0);
    state.move_to(Vector::new(150.0, 20.0));
    state.rotate(rotation);
    state
}

#[test]
fn test_tailstock_reaches_centerline_at_rest() {
    assert!(posed(0.0).tailstock_reachable());
}

#[test]
fn test_tailstock_out_of_reach_when_rotated() {
    assert!(!posed(90.0).tailstock_reachable());
}

#[test]
fn test_tailstock_span_across_seam() {
    // 330..390 wraps through 0 and catches the right-hand crossing
    assert!(posed(150.0).tailstock_reachable());
    assert!(posed(-210.0).tailstock_reachable());
}

#[test]
fn test_tailstock_too_far_from_centerline() {
    let mut state = posed(0.0);
    state.move_to(Vector::new(150.0, 130.0));
    assert!(!state.tailstock_reachable());
}

#[test]
fn test_reach_is_recomputed_without_memory() {
    let mut state = posed(0.0);
    assert!(state.tailstock_reachable());
    state.rotate(90.0);
    assert!(!state.tailstock_reachable());
    state.rotate(0.0);
    assert!(state.tailstock_reachable());
}
