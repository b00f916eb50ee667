//! Wire types for the realtime database's REST and streaming surfaces.
//!
//! Everything here is pure interpretation: frame names and JSON payloads in,
//! record-level changes out. Parse failures happen at the serde boundary and
//! are reported as [`DbError::Decode`], never scattered through the stream
//! glue. Unknown frame kinds are tolerated for forward compatibility.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::db::error::DbError;

/// Acknowledgment returned when a record is pushed to a collection: the
/// service responds with the key it assigned, as `{"name": "<key>"}`.
#[derive(Debug, Deserialize)]
pub struct PushAck {
    pub name: String,
}

/// Named event kinds the streaming endpoint emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Put,
    Patch,
    KeepAlive,
    Cancel,
    AuthRevoked,
    /// Unknown frame name - allows forward compatibility
    Unknown,
}

impl FrameKind {
    pub fn parse(name: &str) -> Self {
        match name {
            "put" => Self::Put,
            "patch" => Self::Patch,
            "keep-alive" => Self::KeepAlive,
            "cancel" => Self::Cancel,
            "auth_revoked" => Self::AuthRevoked,
            _ => Self::Unknown,
        }
    }
}

/// Payload of a `put` or `patch` frame. `path` is relative to the streamed
/// location; `data` is the value written there (null for deletions).
#[derive(Debug, Deserialize)]
pub struct FrameBody {
    pub path: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// A change to the streamed collection, at record granularity.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordChange {
    /// The whole collection was rewritten (initial snapshot included).
    Replaced(BTreeMap<String, Value>),
    /// One record was created or fully overwritten.
    Upserted { key: String, value: Value },
    /// Individual fields of one record changed; null deletes the field.
    Patched { key: String, fields: Map<String, Value> },
    /// One record was deleted.
    Removed { key: String },
}

/// Why the stream will deliver no further changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The service revoked read access to the streamed location.
    Cancelled,
    /// The credential attached to the stream expired.
    AuthRevoked,
    /// The transport gave up on the connection.
    Connection,
}

impl CloseReason {
    pub fn describe(self) -> &'static str {
        match self {
            Self::Cancelled => "read access to the collection was revoked",
            Self::AuthRevoked => "stream credential expired",
            Self::Connection => "connection to the database was lost",
        }
    }
}

/// What a held listener delivers, in arrival order, for as long as it lives.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    Opened,
    Reconnecting,
    Changes(Vec<RecordChange>),
    /// Terminal: the sequence is not restartable once closed.
    Closed(CloseReason),
}

/// Interprets one named frame. `Ok(None)` means the frame carries nothing the
/// caller acts on (keep-alives, unknown kinds).
pub fn interpret_frame(kind: FrameKind, data: &str) -> Result<Option<StreamEvent>, DbError> {
    match kind {
        FrameKind::KeepAlive | FrameKind::Unknown => Ok(None),
        FrameKind::Cancel => Ok(Some(StreamEvent::Closed(CloseReason::Cancelled))),
        FrameKind::AuthRevoked => Ok(Some(StreamEvent::Closed(CloseReason::AuthRevoked))),
        FrameKind::Put | FrameKind::Patch => {
            let body: FrameBody =
                serde_json::from_str(data).map_err(|e| DbError::Decode(e.to_string()))?;

            let changes = match kind {
                FrameKind::Put => put_changes(&body),
                _ => patch_changes(&body),
            };

            Ok(Some(StreamEvent::Changes(changes)))
        }
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// A write at the streamed root replaces the collection; non-object roots
/// (the service encodes empty locations as null) clear it.
fn put_changes(body: &FrameBody) -> Vec<RecordChange> {
    let segments = segments(&body.path);

    match segments.as_slice() {
        [] => {
            let records = match &body.data {
                Some(Value::Object(map)) => map
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect::<BTreeMap<_, _>>(),
                _ => BTreeMap::new(),
            };
            vec![RecordChange::Replaced(records)]
        }
        [key] => match &body.data {
            Some(value) if !value.is_null() => vec![RecordChange::Upserted {
                key: (*key).to_string(),
                value: value.clone(),
            }],
            _ => vec![RecordChange::Removed {
                key: (*key).to_string(),
            }],
        },
        [key, field] => {
            let mut fields = Map::new();
            fields.insert(
                (*field).to_string(),
                body.data.clone().unwrap_or(Value::Null),
            );
            vec![RecordChange::Patched {
                key: (*key).to_string(),
                fields,
            }]
        }
        // Writes below field granularity cannot be expressed as a record
        // change; this binding's own writers never produce them.
        _ => vec![],
    }
}

/// A patch sets each named child under the patched location independently.
fn patch_changes(body: &FrameBody) -> Vec<RecordChange> {
    let Some(Value::Object(entries)) = &body.data else {
        return vec![];
    };

    let segments = segments(&body.path);

    match segments.as_slice() {
        [] => entries
            .iter()
            .map(|(key, value)| {
                if value.is_null() {
                    RecordChange::Removed { key: key.clone() }
                } else {
                    RecordChange::Upserted {
                        key: key.clone(),
                        value: value.clone(),
                    }
                }
            })
            .collect(),
        [key] => vec![RecordChange::Patched {
            key: (*key).to_string(),
            fields: entries.clone(),
        }],
        _ => vec![],
    }
}
