//! Static configuration for the hosted services the app talks to.
//!
//! Values are baked in at compile time: a WASM bundle has no process
//! environment, so `option_env!` picks up `PACELINE_*` variables from the
//! build and falls back to the development project otherwise. No validation
//! happens here; a bad URL surfaces as a failed request at the call site.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub auth_domain: String,
    pub database_url: String,
    pub storage_bucket: String,
}

impl Config {
    pub fn from_build_env() -> Self {
        Self {
            api_key: option_env!("PACELINE_API_KEY")
                .unwrap_or("paceline-dev-key")
                .to_string(),
            auth_domain: option_env!("PACELINE_AUTH_DOMAIN")
                .unwrap_or("auth.paceline-dev.app")
                .to_string(),
            database_url: option_env!("PACELINE_DATABASE_URL")
                .unwrap_or("https://paceline-dev.rtdb.app")
                .to_string(),
            storage_bucket: option_env!("PACELINE_STORAGE_BUCKET")
                .unwrap_or("paceline-dev.storage.app")
                .to_string(),
        }
    }

    /// Endpoint for the hosted auth service's password sign-in call.
    pub fn sign_in_url(&self) -> String {
        format!(
            "https://{}/v1/accounts:sign_in?key={}",
            self.auth_domain, self.api_key
        )
    }
}
