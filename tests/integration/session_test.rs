//! Session persistence and guard flow against the file store.

use chrono::Duration;

use roombook_auth::{GlobalAuthCheck, GuardDecision, Route, RouteGuard};
use roombook_entity::user::UserRole;

use crate::helpers::TestEnv;

#[test]
fn test_session_survives_restart() {
    let env = TestEnv::new();
    let token = env.token(UserRole::Student, Duration::hours(1));

    let mut first = env.open_session();
    first.set_token(Some(token.clone())).unwrap();
    assert!(first.is_authenticated());
    drop(first);

    let restored = env.open_session();
    assert!(restored.is_authenticated());
    assert_eq!(restored.token(), Some(token.as_str()));
    let user = restored.user().unwrap();
    assert_eq!(user.email, "user@example.com");
    assert_eq!(user.role, UserRole::Student);
    assert_eq!(user.student_id.as_deref(), Some("1001"));
}

#[test]
fn test_expired_session_is_discarded_on_restart() {
    let env = TestEnv::new();
    let mut session = env.open_session();
    session
        .set_token(Some(env.token(UserRole::Administrator, Duration::minutes(5))))
        .unwrap();

    env.clock.advance(Duration::minutes(6));

    let restored = env.open_session();
    assert!(!restored.is_authenticated());
    assert!(restored.token().is_none());

    let raw = std::fs::read_to_string(&env.config.store.path).unwrap();
    let persisted: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(persisted.get("auth_token").is_none());
}

#[test]
fn test_logout_clears_file() {
    let env = TestEnv::new();
    let mut session = env.open_session();
    session
        .set_token(Some(env.token(UserRole::Student, Duration::hours(1))))
        .unwrap();
    session.logout().unwrap();

    let restored = env.open_session();
    assert!(restored.token().is_none());
    assert!(restored.user().is_none());
}

#[test]
fn test_guards_follow_session_lifetime() {
    let env = TestEnv::new();
    let mut session = env.open_session();
    session
        .set_token(Some(env.token(UserRole::Administrator, Duration::minutes(10))))
        .unwrap();

    assert_eq!(
        GlobalAuthCheck.evaluate(&mut session, "/admin/facilities"),
        GuardDecision::Allow
    );
    assert_eq!(RouteGuard::Admin.check(&mut session).unwrap(), GuardDecision::Allow);
    assert_eq!(
        RouteGuard::Student.check(&mut session).unwrap(),
        GuardDecision::Redirect(Route::Unauthorized)
    );

    env.clock.advance(Duration::minutes(11));
    assert_eq!(
        GlobalAuthCheck.evaluate(&mut session, "/admin/facilities"),
        GuardDecision::Redirect(Route::Login)
    );
    assert_eq!(
        RouteGuard::Admin.check(&mut session).unwrap(),
        GuardDecision::Redirect(Route::Unauthorized)
    );
    assert!(env.open_session().token().is_none());
}
