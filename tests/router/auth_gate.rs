use paceline::client::router::{auth_redirect, on_hash_change, NavEffect, Page};

#[test]
// The anonymous redirect rewrites the address in place so the denied page
// never enters history
fn anonymous_visits_to_runner_divert_to_login() {
    let redirected = auth_redirect(Page::Runner, false);

    assert_eq!(redirected.page, Page::Login);
    assert_eq!(redirected.effect, Some(NavEffect::ReplaceUrl("#/login")));
}

#[test]
fn signed_in_visits_to_runner_pass_through() {
    let redirected = auth_redirect(Page::Runner, true);

    assert_eq!(redirected.page, Page::Runner);
    assert_eq!(redirected.effect, None);
}

#[test]
fn public_pages_pass_the_gate_in_both_states() {
    for page in [Page::LeaderBoard, Page::Login, Page::NotFound] {
        for logged_in in [false, true] {
            let redirected = auth_redirect(page, logged_in);

            assert_eq!(redirected.page, page);
            assert_eq!(redirected.effect, None);
        }
    }
}

#[test]
// A stale bookmark of the protected page: parsed and gated in one step
fn a_bookmarked_runner_hash_lands_an_anonymous_visitor_on_login() {
    let redirected = on_hash_change("#/runner", false);

    assert_eq!(redirected.page, Page::Login);
    assert_eq!(redirected.effect, Some(NavEffect::ReplaceUrl("#/login")));
}

#[test]
fn the_same_bookmark_works_once_signed_in() {
    let redirected = on_hash_change("#/runner", true);

    assert_eq!(redirected.page, Page::Runner);
    assert_eq!(redirected.effect, None);
}

#[test]
// Typo'd hashes are not a security question; they land on the public
// not-found page whoever you are
fn unknown_hashes_stay_public() {
    let redirected = on_hash_change("#/secret", false);

    assert_eq!(redirected.page, Page::NotFound);
    assert_eq!(redirected.effect, None);
}
