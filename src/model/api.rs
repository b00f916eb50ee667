use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Credentials posted to the hosted auth service
#[derive(Serialize, Deserialize)]
pub struct LoginRequestDto {
    pub username: String,
    pub password: String,
}

/// Successful sign-in response carrying the opaque session token
#[derive(Serialize, Deserialize)]
pub struct TokenDto {
    pub token: String,
}
