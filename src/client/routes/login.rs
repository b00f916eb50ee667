//! The sign-in form.
//!
//! Classification of the auth service's answer is kept apart from the
//! request itself: a definite "wrong credentials" renders differently from
//! "could not ask". Only [`LoginOutcome::LoggedIn`] touches the session.

use crate::model::api::{ErrorDto, TokenDto};

#[cfg(feature = "web")]
use dioxus::document::{Meta, Title};
#[cfg(feature = "web")]
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::components::Page as PageShell;
#[cfg(feature = "web")]
use crate::client::router::{self, Page};
#[cfg(feature = "web")]
use crate::client::store::Session;
#[cfg(feature = "web")]
use crate::client::util::sign_in::sign_in;
#[cfg(feature = "web")]
use crate::config::Config;
#[cfg(feature = "web")]
use crate::model::api::LoginRequestDto;

/// Raw credential input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Both fields are required. The password is taken verbatim, spaces
    /// included; only the username is trimmed.
    pub fn validate(&self) -> Result<(String, String), &'static str> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            return Err("enter both username and password");
        }

        Ok((username.to_string(), self.password.clone()))
    }
}

/// What the auth service's answer amounts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted; carries the issued token.
    LoggedIn(String),
    /// The service understood the request and said no.
    Rejected(String),
    /// The service could not be asked, or answered nonsense.
    Failed(String),
}

/// Sorts a sign-in response by status and body.
pub fn classify_response(status: u16, body: &str) -> LoginOutcome {
    match status {
        200 => match serde_json::from_str::<TokenDto>(body) {
            Ok(dto) => LoginOutcome::LoggedIn(dto.token),
            Err(_) => LoginOutcome::Failed("sign-in response could not be read".to_string()),
        },
        400 | 401 | 403 => {
            let message = serde_json::from_str::<ErrorDto>(body)
                .map(|dto| dto.error)
                .unwrap_or_else(|_| "invalid username or password".to_string());
            LoginOutcome::Rejected(message)
        }
        _ => LoginOutcome::Failed(format!("sign-in service unavailable (status {status})")),
    }
}

#[cfg(feature = "web")]
#[component]
pub fn Login() -> Element {
    let config = use_context::<Config>();
    let mut session = use_context::<Signal<Session>>();
    let mut page = use_context::<Signal<Page>>();

    let mut form = use_signal(LoginForm::default);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        if busy() {
            return;
        }

        error.set(None);

        let (username, password) = match form.read().validate() {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_string()));
                return;
            }
        };

        busy.set(true);
        let config = config.clone();
        spawn(async move {
            let request = LoginRequestDto { username, password };
            match sign_in(&config, &request).await {
                LoginOutcome::LoggedIn(token) => {
                    tracing::info!("signed in");
                    let command = session.write().login(token);
                    command.run();

                    let redirected = router::after_login();
                    if let Some(effect) = redirected.effect {
                        crate::client::nav::apply(effect);
                    }
                    page.set(redirected.page);
                }
                LoginOutcome::Rejected(message) => {
                    tracing::warn!("sign-in rejected: {message}");
                    error.set(Some(message));
                }
                LoginOutcome::Failed(message) => {
                    tracing::error!("sign-in failed: {message}");
                    error.set(Some(message));
                }
            }
            busy.set(false);
        });
    };

    rsx!(
        Title { "Sign in | Paceline" }
        Meta {
            name: "description",
            content: "Staff sign-in for race-day management."
        }
        PageShell { class: "justify-center",
            div { class: "card shadow-sm w-full max-w-96",
                div {
                    class: "card-body",
                    h2 {
                        class: "card-title",
                        "Sign in"
                    }
                    if let Some(message) = error.read().clone() {
                        div { class: "alert alert-error",
                            p { "{message}" }
                        }
                    }
                    form {
                        class: "flex flex-col gap-2",
                        onsubmit: onsubmit,
                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text", "Username" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                value: "{form.read().username}",
                                oninput: move |event| form.write().username = event.value()
                            }
                        }
                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text", "Password" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "password",
                                value: "{form.read().password}",
                                oninput: move |event| form.write().password = event.value()
                            }
                        }
                        button {
                            class: "btn btn-primary mt-2",
                            r#type: "submit",
                            disabled: busy(),
                            if busy() { "Signing in..." } else { "Sign in" }
                        }
                    }
                }
            }
        }
    )
}
