//! Thin binding to the hosted realtime database.
//!
//! One logical collection (`customers`), four operations: add, update,
//! delete, and a live listener. Every call maps directly onto the service's
//! REST or streaming surface; consistency, replication, and access control
//! are the service's business entirely. There are no retries and no local
//! cache here: a failed future is the caller's to handle.

pub mod error;
pub mod protocol;
#[cfg(feature = "web")]
pub mod stream;

pub use error::DbError;
#[cfg(feature = "web")]
pub use stream::CustomerListener;

#[cfg(feature = "web")]
use reqwasm::http::{Request, Response};

#[cfg(feature = "web")]
use crate::db::protocol::PushAck;
#[cfg(feature = "web")]
use crate::model::customer::Customer;

use crate::config::Config;

/// Path prefix of the one record collection this application uses.
pub const CUSTOMERS_PATH: &str = "customers";

/// Handle on the `customers` collection.
///
/// Cheap to clone; carries only the service configuration.
#[derive(Clone)]
pub struct CustomerStore {
    config: Config,
}

impl CustomerStore {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// REST endpoint addressing the whole collection.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}.json",
            self.config.database_url.trim_end_matches('/'),
            CUSTOMERS_PATH
        )
    }

    /// REST endpoint addressing one record by its service-assigned key.
    pub fn record_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}.json",
            self.config.database_url.trim_end_matches('/'),
            CUSTOMERS_PATH,
            key
        )
    }
}

#[cfg(feature = "web")]
impl CustomerStore {
    /// Appends a record to the collection. The service assigns the key and
    /// acknowledges with it; any `id` already on the record is not sent.
    pub async fn add(&self, customer: &Customer) -> Result<String, DbError> {
        let mut record = customer.clone();
        record.id = None;

        let body =
            serde_json::to_string(&record).map_err(|e| DbError::Decode(e.to_string()))?;

        let response = Request::post(&self.collection_url())
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| DbError::Transport(e.to_string()))?;
        let response = ensure_ok(response).await?;

        let ack: PushAck = response
            .json()
            .await
            .map_err(|e| DbError::Decode(e.to_string()))?;

        Ok(ack.name)
    }

    /// Overwrites the record at its key with this value in full, a set
    /// rather than a merge. The record must carry the key it was persisted
    /// under.
    pub async fn update(&self, customer: &Customer) -> Result<(), DbError> {
        let key = customer.id.as_deref().ok_or(DbError::MissingKey)?;

        let body =
            serde_json::to_string(customer).map_err(|e| DbError::Decode(e.to_string()))?;

        let response = Request::put(&self.record_url(key))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| DbError::Transport(e.to_string()))?;
        ensure_ok(response).await?;

        Ok(())
    }

    /// Removes the record at its key.
    pub async fn delete(&self, customer: &Customer) -> Result<(), DbError> {
        let key = customer.id.as_deref().ok_or(DbError::MissingKey)?;

        let response = Request::delete(&self.record_url(key))
            .send()
            .await
            .map_err(|e| DbError::Transport(e.to_string()))?;
        ensure_ok(response).await?;

        Ok(())
    }

    /// Opens a live subscription to the collection. The listener yields an
    /// unbounded, non-restartable sequence of changes for as long as it is
    /// held; dropping it closes the underlying stream.
    pub fn customer_listener(&self) -> Result<CustomerListener, DbError> {
        CustomerListener::open(&self.collection_url())
    }
}

#[cfg(feature = "web")]
async fn ensure_ok(response: Response) -> Result<Response, DbError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    Err(DbError::Status { status, body })
}
