use bowlsaver_core::Vector;
use bowlsaver_designer::JigState;

#[test]
fn test_readout_serializes_for_presentation() {
    let mut state = JigState::default();
    state.set_radius(90.0);
    state.move_to(Vector::new(150.0, 20.0));

    let json = serde_json::to_value(state.readout()).unwrap();
    assert_eq!(json["tailstock_reachable"], true);
    assert_eq!(json["edge_distance"]["visible"], true);
    assert_eq!(json["edge_distance"]["value"], 60.0);
    assert!(json["entry_point"]["point"]["x"].is_number());
}

#[test]
fn test_hidden_entry_point_serializes_as_null() {
    let state = JigState::default();
    let json = serde_json::to_value(state.readout()).unwrap();
    assert!(json["entry_point"].is_null());
}

#[test]
fn test_readout_tracks_revision() {
    let mut state = JigState::default();
    let before = state.readout().revision;
    state.rotate(5.0);
    assert_eq!(state.readout().revision, before + 1);
}
