use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_login() {
    let state = AuthState::default();
    assert_eq!(state.mode, AuthMode::Login);
    assert!(state.is_login());
}

#[test]
fn auth_mode_default_is_login() {
    assert_eq!(AuthMode::default(), AuthMode::Login);
}

// =============================================================
// dispatch
// =============================================================

#[test]
fn dispatch_to_register_switches_mode() {
    let mut state = AuthState::default();
    state.dispatch(AuthMsg::ToRegister);
    assert_eq!(state.mode, AuthMode::Register);
    assert!(!state.is_login());
}

#[test]
fn dispatch_to_login_twice_stays_login() {
    let mut state = AuthState { mode: AuthMode::Register };
    state.dispatch(AuthMsg::ToLogin);
    assert_eq!(state.mode, AuthMode::Login);
    state.dispatch(AuthMsg::ToLogin);
    assert_eq!(state.mode, AuthMode::Login);
}

#[test]
fn dispatch_to_register_is_idempotent() {
    let mut state = AuthState::default();
    state.dispatch(AuthMsg::ToRegister);
    let once = state.clone();
    state.dispatch(AuthMsg::ToRegister);
    assert_eq!(state, once);
}

#[test]
fn mode_tracks_last_dispatched_message() {
    let sequences: [&[AuthMsg]; 4] = [
        &[AuthMsg::ToRegister, AuthMsg::ToLogin],
        &[AuthMsg::ToLogin, AuthMsg::ToRegister],
        &[AuthMsg::ToRegister, AuthMsg::ToRegister, AuthMsg::ToLogin, AuthMsg::ToRegister],
        &[AuthMsg::ToLogin, AuthMsg::ToLogin, AuthMsg::ToLogin],
    ];
    for seq in sequences {
        let mut state = AuthState::default();
        for msg in seq {
            state.dispatch(*msg);
        }
        let expected = match seq.last() {
            Some(AuthMsg::ToRegister) => AuthMode::Register,
            _ => AuthMode::Login,
        };
        assert_eq!(state.mode, expected, "sequence {seq:?}");
    }
}
