//! Browser glue for the collection event stream.
//!
//! An [`EventSource`] feeds named frames into the pure interpreter in
//! [`protocol`](crate::db::protocol); decoded events cross into async land
//! over an unbounded channel so the subscribing task can simply await them.

use dioxus_logger::tracing;
use futures::channel::mpsc;
use futures::StreamExt;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventSource, MessageEvent};

use crate::db::error::DbError;
use crate::db::protocol::{self, CloseReason, FrameKind, StreamEvent};

const FRAME_NAMES: [&str; 5] = ["put", "patch", "keep-alive", "cancel", "auth_revoked"];

/// Live subscription to the customers collection.
///
/// Events keep flowing for as long as the listener is held. Dropping it
/// closes the underlying connection, so tying one to a page's lifetime is
/// enough to stop the stream when the page goes away.
pub struct CustomerListener {
    source: EventSource,
    rx: mpsc::UnboundedReceiver<StreamEvent>,
    // The browser holds raw pointers into these closures; they must live
    // exactly as long as the subscription itself.
    _frame_callbacks: Vec<Closure<dyn FnMut(MessageEvent)>>,
    _lifecycle_callbacks: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

impl CustomerListener {
    pub(crate) fn open(url: &str) -> Result<Self, DbError> {
        let source =
            EventSource::new(url).map_err(|e| DbError::Stream(format!("{e:?}")))?;
        let (tx, rx) = mpsc::unbounded();

        let mut frame_callbacks = Vec::new();
        for name in FRAME_NAMES {
            let kind = FrameKind::parse(name);
            let tx = tx.clone();
            let source_handle = source.clone();

            let callback = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
                let data = event.data().as_string().unwrap_or_default();
                match protocol::interpret_frame(kind, &data) {
                    Ok(Some(event)) => {
                        // Terminal frames end the subscription; the service
                        // will not send anything meaningful after them.
                        if matches!(event, StreamEvent::Closed(_)) {
                            source_handle.close();
                        }
                        let _ = tx.unbounded_send(event);
                    }
                    Ok(None) => {}
                    Err(err) => {
                        tracing::warn!("dropping malformed {name} frame: {err}");
                    }
                }
            });

            source
                .add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
                .map_err(|e| DbError::Stream(format!("{e:?}")))?;
            frame_callbacks.push(callback);
        }

        let mut lifecycle_callbacks = Vec::new();
        {
            let tx = tx.clone();
            let on_open = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                let _ = tx.unbounded_send(StreamEvent::Opened);
            });
            source.set_onopen(Some(on_open.as_ref().unchecked_ref()));
            lifecycle_callbacks.push(on_open);
        }
        {
            let tx = tx.clone();
            let source_handle = source.clone();
            let on_error = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                // The browser retries transient drops on its own; only a
                // CLOSED ready state means the stream is finished.
                if source_handle.ready_state() == EventSource::CLOSED {
                    let _ = tx.unbounded_send(StreamEvent::Closed(CloseReason::Connection));
                } else {
                    let _ = tx.unbounded_send(StreamEvent::Reconnecting);
                }
            });
            source.set_onerror(Some(on_error.as_ref().unchecked_ref()));
            lifecycle_callbacks.push(on_error);
        }

        Ok(Self {
            source,
            rx,
            _frame_callbacks: frame_callbacks,
            _lifecycle_callbacks: lifecycle_callbacks,
        })
    }

    /// Waits for the next event. A finished stream delivers a final
    /// [`StreamEvent::Closed`] and then nothing further.
    pub async fn next(&mut self) -> Option<StreamEvent> {
        self.rx.next().await
    }
}

impl Drop for CustomerListener {
    fn drop(&mut self) {
        self.source.close();
    }
}
