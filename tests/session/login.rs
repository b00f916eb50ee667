use paceline::client::store::{Session, SessionCommand};

#[test]
fn login_signs_the_session_in_and_persists_the_token() {
    let mut session = Session::anonymous();

    let command = session.login("tok-1".to_string());

    assert!(session.logged_in());
    assert_eq!(session.token(), Some("tok-1"));
    assert_eq!(command, SessionCommand::SaveToken("tok-1".to_string()));
}

#[test]
// A second login simply replaces the token; the newer one is what gets saved
fn a_fresh_login_replaces_an_existing_token() {
    let mut session = Session::from_token(Some("tok-old".to_string()));

    let command = session.login("tok-new".to_string());

    assert_eq!(session.token(), Some("tok-new"));
    assert_eq!(command, SessionCommand::SaveToken("tok-new".to_string()));
}

#[test]
// Startup hands whatever storage held to from_token; a surviving token means
// the visit starts signed in, nothing in storage means anonymous
fn a_reload_restores_the_session_from_the_persisted_token() {
    assert!(Session::from_token(Some("tok-1".to_string())).logged_in());
    assert!(!Session::from_token(None).logged_in());
}
