//! The application shell.
//!
//! One place owns the page signal and the session signal; everything else
//! reads them through context. The hash in the address bar is gated once at
//! startup and again on every `hashchange`, so a stale bookmark, a manual
//! hash edit, and the back button all pass through the same rule.

use dioxus::document::Stylesheet;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::Navbar;
use crate::client::nav;
use crate::client::router::{self, Page};
use crate::client::routes::{LeaderBoard, Login, NotFound, Runner};
use crate::client::store::{token, Session};
use crate::config::Config;
use crate::db::CustomerStore;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_context_provider(Config::from_build_env);
    use_context_provider(|| CustomerStore::new(config.clone()));

    // A token left in storage by an earlier visit signs the session back in.
    let session = use_context_provider(|| Signal::new(Session::from_token(token::load())));

    // Gate whatever hash the document loaded with, once, before the first
    // paint; re-renders must not repeat the startup redirect.
    let initial = use_hook(|| {
        let initial = router::on_hash_change(&nav::current_hash(), session.peek().logged_in());
        tracing::debug!("startup hash resolved to {:?}", initial.page);
        if let Some(effect) = initial.effect {
            nav::apply(effect);
        }
        initial.page
    });
    let mut page = use_context_provider(|| Signal::new(initial));

    use_hook(move || {
        nav::on_hash_change(move |hash| {
            let redirected = router::on_hash_change(&hash, session.peek().logged_in());
            tracing::debug!("hash {hash:?} resolved to {:?}", redirected.page);
            if let Some(effect) = redirected.effect {
                nav::apply(effect);
            }
            page.set(redirected.page);
        });
    });

    let body = match page() {
        Page::LeaderBoard => rsx!( LeaderBoard {} ),
        Page::Runner => rsx!( Runner {} ),
        Page::Login => rsx!( Login {} ),
        Page::NotFound => rsx!( NotFound {} ),
    };

    rsx!(
        Stylesheet { href: MAIN_CSS }
        Navbar { active: page() }
        {body}
    )
}
