use paceline::client::store::{Session, SessionCommand};

#[test]
fn logout_drops_the_token_and_clears_storage() {
    let mut session = Session::from_token(Some("tok-1".to_string()));

    let command = session.logout();

    assert!(!session.logged_in());
    assert_eq!(session.token(), None);
    assert_eq!(command, SessionCommand::DeleteToken);
}

#[test]
// Logging out of an already-anonymous session is harmless and still asks
// for the storage wipe, in case a stale token lingers there
fn logout_is_idempotent() {
    let mut session = Session::anonymous();

    let command = session.logout();

    assert!(!session.logged_in());
    assert_eq!(command, SessionCommand::DeleteToken);
}

#[test]
// The full round trip: sign in, sign out, and the session is exactly as
// anonymous as it started
fn login_then_logout_returns_to_the_initial_state() {
    let mut session = Session::anonymous();

    session.login("tok-1".to_string());
    session.logout();

    assert_eq!(session, Session::anonymous());
}
