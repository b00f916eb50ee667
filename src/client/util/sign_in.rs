use reqwasm::http::Request;

use crate::client::routes::login::{classify_response, LoginOutcome};
use crate::config::Config;
use crate::model::api::LoginRequestDto;

/// Posts credentials to the auth service and classifies whatever comes
/// back. Transport trouble is a failure, not a rejection; the form shows
/// the two differently.
pub async fn sign_in(config: &Config, request: &LoginRequestDto) -> LoginOutcome {
    let body = match serde_json::to_string(request) {
        Ok(body) => body,
        Err(err) => {
            return LoginOutcome::Failed(format!("could not encode sign-in request: {err}"));
        }
    };

    let response = match Request::post(&config.sign_in_url())
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => {
            return LoginOutcome::Failed(format!("could not reach the sign-in service: {err}"));
        }
    };

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    classify_response(status, &body)
}
