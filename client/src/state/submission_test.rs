use super::*;

#[test]
fn submission_default_is_idle() {
    assert_eq!(Submission::default(), Submission::Idle);
    assert!(!Submission::default().is_pending());
}

#[test]
fn begin_from_idle_enters_pending() {
    let mut s = Submission::Idle;
    assert!(s.begin());
    assert_eq!(s, Submission::Pending);
}

#[test]
fn begin_while_pending_is_rejected() {
    let mut s = Submission::Pending;
    assert!(!s.begin());
    assert!(s.is_pending());
}

#[test]
fn begin_after_settled_states_is_allowed() {
    for start in [Submission::Succeeded, Submission::Failed("Login failed".to_owned())] {
        let mut s = start;
        assert!(s.begin());
        assert!(s.is_pending());
    }
}

#[test]
fn failure_exposes_message_only_when_failed() {
    assert_eq!(Submission::Failed("nope".to_owned()).failure(), Some("nope"));
    assert_eq!(Submission::Pending.failure(), None);
    assert_eq!(Submission::Succeeded.failure(), None);
}
