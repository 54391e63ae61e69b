use super::*;

#[test]
fn session_state_default_is_loading_without_user() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user_id.is_none());
}

#[test]
fn restored_marks_loaded() {
    let state = SessionState::restored(Some("u1".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.user_id.as_deref(), Some("u1"));
}

#[test]
fn signed_out_is_loaded_and_empty() {
    assert_eq!(SessionState::signed_out(), SessionState { user_id: None, loading: false });
}
