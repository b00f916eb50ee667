//! The standings table, fed live from the record stream.
//!
//! All table state derives from one fold: the stream's record changes are
//! applied to a [`Roster`], and [`Roster::standings`] orders it for display.
//! Staff actions write through the store and never touch the roster
//! directly; the resulting change comes back over the stream like anyone
//! else's.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::db::protocol::{RecordChange, StreamEvent};
use crate::model::customer::Customer;

#[cfg(feature = "web")]
use chrono::Utc;
#[cfg(feature = "web")]
use dioxus::document::{Meta, Title};
#[cfg(feature = "web")]
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_free_icons::icons::fa_solid_icons::{FaFlagCheckered, FaTrash};
#[cfg(feature = "web")]
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::components::Page;
#[cfg(feature = "web")]
use crate::client::store::Session;
#[cfg(feature = "web")]
use crate::db::CustomerStore;

/// Everything the stream has said about the collection so far, keyed by
/// service key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    records: BTreeMap<String, Customer>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Customer> {
        self.records.get(key)
    }

    /// Folds one record change into the roster. Values that do not decode
    /// as runner records are skipped rather than taking the table down;
    /// patches against unknown keys are skipped the same way.
    pub fn apply(&mut self, change: &RecordChange) {
        match change {
            RecordChange::Replaced(records) => {
                self.records = records
                    .iter()
                    .filter_map(|(key, value)| {
                        decode(key, value).map(|customer| (key.clone(), customer))
                    })
                    .collect();
            }
            RecordChange::Upserted { key, value } => {
                if let Some(customer) = decode(key, value) {
                    self.records.insert(key.clone(), customer);
                }
            }
            RecordChange::Patched { key, fields } => {
                let Some(existing) = self.records.get(key) else {
                    return;
                };
                if let Ok(patched) = existing.merge_fields(fields) {
                    self.records.insert(key.clone(), patched);
                }
            }
            RecordChange::Removed { key } => {
                self.records.remove(key);
            }
        }
    }

    /// Display order: finishers first, fastest at the top, then everyone
    /// still on course alphabetically, ignoring case. Equal times share a
    /// place and the next distinct time resumes at its ordinal, so two
    /// runners tied for first leave the next finisher third.
    pub fn standings(&self) -> Vec<Standing> {
        let mut finishers: Vec<&Customer> = Vec::new();
        let mut on_course: Vec<&Customer> = Vec::new();

        for customer in self.records.values() {
            if customer.finished() {
                finishers.push(customer);
            } else {
                on_course.push(customer);
            }
        }

        finishers.sort_by(|a, b| {
            a.finish_seconds
                .cmp(&b.finish_seconds)
                .then_with(|| name_order(a, b))
        });
        on_course.sort_by(|a, b| name_order(a, b));

        let mut standings = Vec::with_capacity(self.records.len());
        let mut place = 0;
        for (index, customer) in finishers.iter().enumerate() {
            if index == 0 || customer.finish_seconds != finishers[index - 1].finish_seconds {
                place = index as u32 + 1;
            }
            standings.push(Standing {
                place: Some(place),
                customer: (*customer).clone(),
            });
        }
        for customer in on_course {
            standings.push(Standing {
                place: None,
                customer: customer.clone(),
            });
        }

        standings
    }
}

fn decode(key: &str, value: &Value) -> Option<Customer> {
    let mut customer: Customer = serde_json::from_value(value.clone()).ok()?;
    customer.id = Some(key.to_string());
    Some(customer)
}

// Case-insensitive, with the raw name keeping the order deterministic when
// two names differ only in case.
fn name_order(a: &Customer, b: &Customer) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// One display row. `place` is assigned to finishers only.
#[derive(Clone, Debug, PartialEq)]
pub struct Standing {
    pub place: Option<u32>,
    pub customer: Customer,
}

/// Case-insensitive match against name or location; bib numbers match
/// exactly. An empty query matches everyone.
pub fn matches_query(customer: &Customer, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    let bib = customer.bib.map(|bib| bib.to_string()).unwrap_or_default();

    customer.name.to_lowercase().contains(&query)
        || customer.location.to_lowercase().contains(&query)
        || bib == query
}

/// `h:mm:ss` once a run crosses the hour, `m:ss` under it.
pub fn format_finish_time(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = total_seconds % 3600 / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Coarse "how long ago" wording for registration times.
pub fn format_relative_time(datetime: &NaiveDateTime, now: &NaiveDateTime) -> String {
    let duration = now.signed_duration_since(*datetime);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!(
            "{} minute{} ago",
            minutes,
            if minutes == 1 { "" } else { "s" }
        )
    } else if hours < 24 {
        format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" })
    } else {
        format!("{} day{} ago", days, if days == 1 { "" } else { "s" })
    }
}

/// Reads `h:mm:ss`, `m:ss`, or plain seconds.
pub fn parse_finish_time(input: &str) -> Result<u32, &'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Err("enter a time");
    }

    let parts: Vec<&str> = input.split(':').collect();
    if parts.len() > 3 {
        return Err("use h:mm:ss, m:ss, or plain seconds");
    }

    let mut total: u32 = 0;
    for (index, part) in parts.iter().enumerate() {
        let value: u32 = part.trim().parse().map_err(|_| "time must be numeric")?;
        if index > 0 && value > 59 {
            return Err("minutes and seconds run 0-59");
        }
        total = total
            .checked_mul(60)
            .and_then(|total| total.checked_add(value))
            .ok_or("time too large")?;
    }

    Ok(total)
}

/// Connection state shown above the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamStatus {
    Connecting,
    Live,
    Reconnecting,
    Closed(String),
}

impl StreamStatus {
    /// Status change for a stream event, if the event carries one.
    pub fn from_event(event: &StreamEvent) -> Option<StreamStatus> {
        match event {
            StreamEvent::Opened => Some(Self::Live),
            StreamEvent::Reconnecting => Some(Self::Reconnecting),
            StreamEvent::Closed(reason) => Some(Self::Closed(reason.describe().to_string())),
            StreamEvent::Changes(_) => None,
        }
    }
}

#[cfg(feature = "web")]
#[component]
pub fn LeaderBoard() -> Element {
    let session = use_context::<Signal<Session>>();
    let store = use_context::<CustomerStore>();

    let mut roster = use_signal(Roster::default);
    let mut status = use_signal(|| StreamStatus::Connecting);
    let mut query = use_signal(String::new);
    let mut action_error = use_signal(|| None::<String>);
    let mut finish_key = use_signal(|| None::<String>);
    let mut finish_input = use_signal(String::new);

    // One subscription for the page's lifetime; leaving the page drops the
    // listener and with it the connection.
    let stream_store = store.clone();
    use_future(move || {
        let store = stream_store.clone();
        async move {
            let mut listener = match store.customer_listener() {
                Ok(listener) => listener,
                Err(err) => {
                    tracing::error!("failed to open runner stream: {err}");
                    status.set(StreamStatus::Closed(err.to_string()));
                    return;
                }
            };

            while let Some(event) = listener.next().await {
                match event {
                    StreamEvent::Changes(changes) => {
                        let mut roster = roster.write();
                        for change in &changes {
                            roster.apply(change);
                        }
                    }
                    other => {
                        if let Some(next) = StreamStatus::from_event(&other) {
                            match &next {
                                StreamStatus::Live => tracing::info!("runner stream live"),
                                StreamStatus::Reconnecting => {
                                    tracing::warn!("runner stream reconnecting")
                                }
                                StreamStatus::Closed(reason) => {
                                    tracing::info!("runner stream closed: {reason}")
                                }
                                StreamStatus::Connecting => {}
                            }

                            let closed = matches!(next, StreamStatus::Closed(_));
                            status.set(next);
                            if closed {
                                break;
                            }
                        }
                    }
                }
            }
        }
    });

    let logged_in = session.read().logged_in();
    let query_text = query.read().clone();
    let now = Utc::now().naive_utc();
    let rows: Vec<Standing> = roster
        .read()
        .standings()
        .into_iter()
        .filter(|standing| matches_query(&standing.customer, &query_text))
        .collect();

    rsx!(
        Title { "Leaderboard | Paceline" }
        Meta {
            name: "description",
            content: "Live race standings, straight from the timing feed."
        }
        Page { class: "gap-4",
            div { class: "w-full max-w-4xl flex flex-col gap-4",
                div { class: "flex items-center justify-between gap-2",
                    h1 { class: "text-2xl font-bold",
                        "Leaderboard"
                    }
                    StatusBadge { status: status.read().clone() }
                }
                input {
                    class: "input input-bordered w-full",
                    r#type: "search",
                    placeholder: "Search by name, location, or bib",
                    value: "{query}",
                    oninput: move |event| query.set(event.value())
                }
                if let Some(message) = action_error.read().clone() {
                    div { class: "alert alert-error",
                        p { "{message}" }
                    }
                }
                if rows.is_empty() {
                    p { class: "text-center p-8",
                        "No runners yet."
                    }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-md",
                            thead {
                                tr {
                                    th { class: "w-16", "Place" }
                                    th { class: "w-16", "Bib" }
                                    th { "Name" }
                                    th { "Location" }
                                    th { class: "w-24", "Time" }
                                    th { class: "w-32", "Registered" }
                                    if logged_in {
                                        th { class: "w-48", "Actions" }
                                    }
                                }
                            }
                            tbody {
                                {rows.iter().map(|standing| {
                                    let key = standing.customer.id.clone().unwrap_or_default();
                                    let place = standing
                                        .place
                                        .map(|place| place.to_string())
                                        .unwrap_or_else(|| "-".to_string());
                                    let medal = match standing.place {
                                        Some(1) => "badge medal-gold",
                                        Some(2) => "badge medal-silver",
                                        Some(3) => "badge medal-bronze",
                                        _ => "",
                                    };
                                    let bib = standing
                                        .customer
                                        .bib
                                        .map(|bib| bib.to_string())
                                        .unwrap_or_default();
                                    let time = standing
                                        .customer
                                        .finish_seconds
                                        .map(format_finish_time)
                                        .unwrap_or_else(|| "on course".to_string());
                                    let registered = standing
                                        .customer
                                        .registered_at
                                        .map(|at| format_relative_time(&at, &now))
                                        .unwrap_or_default();
                                    let editing =
                                        finish_key.read().as_deref() == Some(key.as_str());

                                    rsx!(
                                        tr { key: "{key}",
                                            td { class: "w-16",
                                                if medal.is_empty() {
                                                    "{place}"
                                                } else {
                                                    span { class: "{medal}", "{place}" }
                                                }
                                            }
                                            td { class: "w-16", "{bib}" }
                                            td { "{standing.customer.name}" }
                                            td { "{standing.customer.location}" }
                                            td { class: "w-24", "{time}" }
                                            td { class: "w-32", "{registered}" }
                                            if logged_in {
                                                td { class: "w-48",
                                                    if editing {
                                                        FinishEditor {
                                                            customer: standing.customer.clone(),
                                                            finish_key,
                                                            finish_input,
                                                            action_error,
                                                        }
                                                    } else {
                                                        div { class: "flex gap-1",
                                                            button {
                                                                class: "btn btn-sm btn-outline",
                                                                onclick: {
                                                                    let key = key.clone();
                                                                    let current = standing
                                                                        .customer
                                                                        .finish_seconds;
                                                                    move |_| {
                                                                        finish_input.set(
                                                                            current
                                                                                .map(format_finish_time)
                                                                                .unwrap_or_default(),
                                                                        );
                                                                        finish_key.set(Some(key.clone()));
                                                                    }
                                                                },
                                                                Icon {
                                                                    width: 14,
                                                                    height: 14,
                                                                    icon: FaFlagCheckered
                                                                }
                                                                "Finish"
                                                            }
                                                            button {
                                                                class: "btn btn-sm btn-outline btn-error",
                                                                onclick: {
                                                                    let store = store.clone();
                                                                    let customer =
                                                                        standing.customer.clone();
                                                                    move |_| {
                                                                        let store = store.clone();
                                                                        let customer = customer.clone();
                                                                        action_error.set(None);
                                                                        spawn(async move {
                                                                            if let Err(err) =
                                                                                store.delete(&customer).await
                                                                            {
                                                                                tracing::error!(
                                                                                    "failed to remove runner: {err}"
                                                                                );
                                                                                action_error.set(Some(format!(
                                                                                    "Could not remove {}: {err}",
                                                                                    customer.name
                                                                                )));
                                                                            }
                                                                        });
                                                                    }
                                                                },
                                                                Icon {
                                                                    width: 14,
                                                                    height: 14,
                                                                    icon: FaTrash
                                                                }
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    )
                                })}
                            }
                        }
                    }
                }
            }
        }
    )
}

/// Inline finish-time entry for one row.
#[cfg(feature = "web")]
#[component]
fn FinishEditor(
    customer: Customer,
    finish_key: Signal<Option<String>>,
    finish_input: Signal<String>,
    action_error: Signal<Option<String>>,
) -> Element {
    let store = use_context::<CustomerStore>();

    let mut finish_key = finish_key;
    let mut finish_input = finish_input;
    let mut action_error = action_error;

    rsx!(
        div { class: "flex gap-1",
            input {
                class: "input input-bordered input-sm w-24",
                placeholder: "m:ss",
                value: "{finish_input}",
                oninput: move |event| finish_input.set(event.value())
            }
            button {
                class: "btn btn-sm btn-primary",
                onclick: {
                    let store = store.clone();
                    let customer = customer.clone();
                    move |_| {
                        action_error.set(None);

                        let input = finish_input.read().clone();
                        let seconds = match parse_finish_time(&input) {
                            Ok(seconds) => seconds,
                            Err(message) => {
                                action_error.set(Some(message.to_string()));
                                return;
                            }
                        };

                        let mut updated = customer.clone();
                        updated.finish_seconds = Some(seconds);

                        let store = store.clone();
                        spawn(async move {
                            match store.update(&updated).await {
                                Ok(()) => {
                                    finish_key.set(None);
                                    finish_input.set(String::new());
                                }
                                Err(err) => {
                                    tracing::error!("failed to record finish: {err}");
                                    action_error.set(Some(format!(
                                        "Could not record finish for {}: {err}",
                                        updated.name
                                    )));
                                }
                            }
                        });
                    }
                },
                "Save"
            }
            button {
                class: "btn btn-sm btn-ghost",
                onclick: move |_| finish_key.set(None),
                "Cancel"
            }
        }
    )
}

#[cfg(feature = "web")]
#[component]
fn StatusBadge(status: StreamStatus) -> Element {
    let (class, label) = match &status {
        StreamStatus::Connecting => ("badge badge-ghost", "connecting".to_string()),
        StreamStatus::Live => ("badge badge-success", "live".to_string()),
        StreamStatus::Reconnecting => ("badge badge-warning", "reconnecting".to_string()),
        StreamStatus::Closed(reason) => ("badge badge-error", format!("offline: {reason}")),
    };

    rsx!(
        span { class: "{class}",
            "{label}"
        }
    )
}
