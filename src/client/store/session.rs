//! The signed-in session, or the absence of one.
//!
//! Holding a token is what "logged in" means here; there is no user record
//! beyond it. Transitions return a [`SessionCommand`] describing what should
//! happen to persistent storage, which the browser shell then executes. That
//! keeps the state machine itself free of any storage access.

/// Authentication state for the whole client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

/// Storage work a session transition asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    SaveToken(String),
    DeleteToken,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    /// Rebuilds the session persisted from an earlier visit, if any token
    /// survived in storage.
    pub fn from_token(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Accepts a freshly issued token. The returned command persists it so
    /// the session survives a reload.
    pub fn login(&mut self, token: String) -> SessionCommand {
        self.token = Some(token.clone());
        SessionCommand::SaveToken(token)
    }

    /// Drops the session. The returned command clears the persisted token;
    /// without it a reload would quietly sign the user back in.
    pub fn logout(&mut self) -> SessionCommand {
        self.token = None;
        SessionCommand::DeleteToken
    }
}

#[cfg(feature = "web")]
impl SessionCommand {
    /// Applies this command to browser storage.
    pub fn run(&self) {
        match self {
            Self::SaveToken(token) => super::token::save(token),
            Self::DeleteToken => super::token::delete(),
        }
    }
}
