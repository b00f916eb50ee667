//! Hash routing and the auth gate.
//!
//! The address after `#` is the whole navigation state, so routing stays a
//! pure mapping both ways: hash to [`Page`], [`Page`] back to hash. The gate
//! sits between the two. Every transition comes out as a [`Redirected`]
//! value describing where the app should land and what, if anything, should
//! happen to the address bar; the browser shell applies it afterwards.

/// One screen of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    /// The public standings table. Also the landing page.
    LeaderBoard,
    /// Runner registration and management. Requires a session.
    Runner,
    /// The sign-in form.
    Login,
    /// Anything the hash map does not recognize.
    NotFound,
}

impl Page {
    /// Maps a raw location hash onto a page.
    ///
    /// The empty hash and `#/` are both the leaderboard, so a fresh load of
    /// the bare application URL lands somewhere useful. Unknown fragments
    /// never fail, they land on [`Page::NotFound`].
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.strip_prefix('#').unwrap_or(hash);

        match path {
            "" | "/" => Self::LeaderBoard,
            "/runner" => Self::Runner,
            "/login" => Self::Login,
            _ => Self::NotFound,
        }
    }

    /// The canonical hash for this page, leading `#` included.
    pub fn hash(&self) -> &'static str {
        match self {
            Self::LeaderBoard => "#/",
            Self::Runner => "#/runner",
            Self::Login => "#/login",
            Self::NotFound => "#/not-found",
        }
    }

    /// Whether reaching this page requires a signed-in session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Runner)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::LeaderBoard => "Leaderboard",
            Self::Runner => "Runners",
            Self::Login => "Sign in",
            Self::NotFound => "Not found",
        }
    }
}

/// What the shell should do to the address bar, if anything.
///
/// A replace rewrites the current history entry in place. A push adds a new
/// one, so the back button can return to where the user was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEffect {
    ReplaceUrl(&'static str),
    PushUrl(&'static str),
}

/// Outcome of running a navigation through the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirected {
    pub page: Page,
    pub effect: Option<NavEffect>,
}

impl Redirected {
    fn stay(page: Page) -> Self {
        Self { page, effect: None }
    }
}

/// The gate itself. Anonymous visitors asking for a protected page are sent
/// to the login form instead; the address bar is rewritten in place so the
/// denied destination never enters history. Everything else passes through
/// untouched, including signed-in visits to the login form.
pub fn auth_redirect(target: Page, logged_in: bool) -> Redirected {
    if target.is_protected() && !logged_in {
        return Redirected {
            page: Page::Login,
            effect: Some(NavEffect::ReplaceUrl(Page::Login.hash())),
        };
    }

    Redirected::stay(target)
}

/// Full transition for a hash change: parse, then gate.
pub fn on_hash_change(raw_hash: &str, logged_in: bool) -> Redirected {
    auth_redirect(Page::from_hash(raw_hash), logged_in)
}

/// Where a freshly signed-in user goes. A push, so backing out of the
/// leaderboard returns to the form rather than losing history.
pub fn after_login() -> Redirected {
    Redirected {
        page: Page::LeaderBoard,
        effect: Some(NavEffect::PushUrl(Page::LeaderBoard.hash())),
    }
}

/// Where signing out lands the user. Logout is an explicit navigation to
/// the public landing page, not a passive re-evaluation of the current one.
pub fn after_logout() -> Redirected {
    Redirected {
        page: Page::LeaderBoard,
        effect: Some(NavEffect::PushUrl(Page::LeaderBoard.hash())),
    }
}
