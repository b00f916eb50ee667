use thiserror::Error;

/// Failures surfaced by the realtime database binding.
///
/// The binding adds nothing on top: no retries, no caching, no conflict
/// resolution. Callers see exactly what the hosted service (or the browser
/// transport) reported and own any user-visible handling.
#[derive(Error, Debug)]
pub enum DbError {
    /// The record has no key; it was never persisted or streamed.
    #[error("record has no database key; persist it before updating or deleting")]
    MissingKey,
    #[error("transport failure talking to the realtime database: {0}")]
    Transport(String),
    #[error("realtime database returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode realtime database payload: {0}")]
    Decode(String),
    #[error("event stream could not be opened: {0}")]
    Stream(String),
}
