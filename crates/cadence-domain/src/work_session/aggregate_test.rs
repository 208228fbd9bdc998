use chrono::{Duration, Utc};

use super::*;
use crate::shared::UserId;
use crate::DomainError;

#[test]
fn test_stop_records_duration() {
    let mut session = WorkSession::start(UserId::new(), None, None);
    assert!(session.is_running());

    let later = session.started_at() + Duration::seconds(90);
    session.stop(later).unwrap();

    assert!(!session.is_running());
    assert_eq!(session.duration_seconds(), Some(90));
    assert_eq!(session.ended_at(), Some(later));
}

#[test]
fn test_stop_twice_is_an_error() {
    let mut session = WorkSession::start(UserId::new(), None, None);
    session.stop(Utc::now()).unwrap();

    let result = session.stop(Utc::now());
    assert!(matches!(result, Err(DomainError::SessionAlreadyStopped(_))));
}

#[test]
fn test_duration_clamped_for_clock_skew() {
    let mut session = WorkSession::start(UserId::new(), None, None);

    let earlier = session.started_at() - Duration::seconds(30);
    session.stop(earlier).unwrap();

    assert_eq!(session.duration_seconds(), Some(0));
}

#[test]
fn test_blank_note_dropped() {
    let session = WorkSession::start(UserId::new(), None, Some("   ".to_string()));
    assert!(session.note().is_none());
}
