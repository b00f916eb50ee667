//! Runner registration.
//!
//! The form validates locally, stamps the registration time, and appends
//! through the store. Staff see what they entered this session in a small
//! log under the form; the public standings pick the runner up from the
//! stream on their own.

use crate::model::customer::Customer;

#[cfg(feature = "web")]
use chrono::Utc;
#[cfg(feature = "web")]
use dioxus::document::{Meta, Title};
#[cfg(feature = "web")]
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::components::Page;
#[cfg(feature = "web")]
use crate::client::routes::leaderboard::format_relative_time;
#[cfg(feature = "web")]
use crate::db::CustomerStore;

/// Raw form state, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunnerForm {
    pub name: String,
    pub location: String,
    pub bib: String,
}

/// Field-level problems from validation. Empty means the form passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub location: Option<String>,
    pub bib: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none() && self.bib.is_none()
    }
}

impl RunnerForm {
    /// Checks the raw input and builds the record to persist. The record
    /// carries no key and no registration time yet; the caller stamps the
    /// time at submission.
    pub fn validate(&self) -> Result<Customer, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some("name is required".to_string());
        }

        let location = self.location.trim();
        if location.is_empty() {
            errors.location = Some("location is required".to_string());
        }

        let bib = match self.bib.trim() {
            "" => None,
            raw => match raw.parse::<u32>() {
                Ok(bib) => Some(bib),
                Err(_) => {
                    errors.bib = Some("bib must be a whole number".to_string());
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Customer {
            name: name.to_string(),
            location: location.to_string(),
            bib,
            ..Customer::default()
        })
    }
}

#[cfg(feature = "web")]
#[component]
pub fn Runner() -> Element {
    let store = use_context::<CustomerStore>();

    let mut form = use_signal(RunnerForm::default);
    let mut errors = use_signal(FormErrors::default);
    let mut busy = use_signal(|| false);
    let mut notice = use_signal(|| None::<String>);
    let mut submit_error = use_signal(|| None::<String>);
    let mut recent = use_signal(Vec::<Customer>::new);

    let onsubmit = {
        let store = store.clone();
        move |event: FormEvent| {
            event.prevent_default();
            if busy() {
                return;
            }

            notice.set(None);
            submit_error.set(None);

            let mut customer = match form.read().validate() {
                Ok(customer) => customer,
                Err(failed) => {
                    errors.set(failed);
                    return;
                }
            };
            errors.set(FormErrors::default());
            customer.registered_at = Some(Utc::now().naive_utc());

            busy.set(true);
            let store = store.clone();
            spawn(async move {
                match store.add(&customer).await {
                    Ok(key) => {
                        tracing::info!("registered runner under key {key}");
                        notice.set(Some(format!("{} is registered.", customer.name)));
                        form.set(RunnerForm::default());

                        let mut registered = customer;
                        registered.id = Some(key);
                        recent.write().insert(0, registered);
                    }
                    Err(err) => {
                        tracing::error!("failed to register runner: {err}");
                        submit_error.set(Some(format!("Registration failed: {err}")));
                    }
                }
                busy.set(false);
            });
        }
    };

    let now = Utc::now().naive_utc();

    rsx!(
        Title { "Runners | Paceline" }
        Meta {
            name: "description",
            content: "Register runners for race day."
        }
        Page { class: "gap-4",
            div { class: "w-full max-w-xl flex flex-col gap-4",
                div { class: "card shadow-sm w-full",
                    div {
                        class: "card-body",
                        h2 {
                            class: "card-title",
                            "Register a runner"
                        }
                        if let Some(message) = notice.read().clone() {
                            div { class: "alert alert-success",
                                p { "{message}" }
                            }
                        }
                        if let Some(message) = submit_error.read().clone() {
                            div { class: "alert alert-error",
                                p { "{message}" }
                            }
                        }
                        form {
                            class: "flex flex-col gap-2",
                            onsubmit: onsubmit,
                            Field {
                                label: "Name",
                                placeholder: "Mara Voss",
                                value: form.read().name.clone(),
                                error: errors.read().name.clone(),
                                oninput: move |value| form.write().name = value,
                            }
                            Field {
                                label: "Location",
                                placeholder: "Aurora Bay",
                                value: form.read().location.clone(),
                                error: errors.read().location.clone(),
                                oninput: move |value| form.write().location = value,
                            }
                            Field {
                                label: "Bib (optional)",
                                placeholder: "12",
                                value: form.read().bib.clone(),
                                error: errors.read().bib.clone(),
                                oninput: move |value| form.write().bib = value,
                            }
                            button {
                                class: "btn btn-primary mt-2",
                                r#type: "submit",
                                disabled: busy(),
                                if busy() { "Registering..." } else { "Register" }
                            }
                        }
                    }
                }
                if !recent.read().is_empty() {
                    div { class: "card shadow-sm w-full",
                        div {
                            class: "card-body",
                            h2 {
                                class: "card-title",
                                "Registered this session"
                            }
                            div {
                                class: "overflow-x-auto",
                                table {
                                    class: "table table-md",
                                    thead {
                                        tr {
                                            th { "Name" }
                                            th { class: "w-16", "Bib" }
                                            th { class: "w-32", "Registered" }
                                        }
                                    }
                                    tbody {
                                        {recent.read().iter().map(|customer| {
                                            let key = customer.id.clone().unwrap_or_default();
                                            let bib = customer
                                                .bib
                                                .map(|bib| bib.to_string())
                                                .unwrap_or_default();
                                            let when = customer
                                                .registered_at
                                                .map(|at| format_relative_time(&at, &now))
                                                .unwrap_or_default();

                                            rsx!(
                                                tr { key: "{key}",
                                                    td { "{customer.name}" }
                                                    td { class: "w-16", "{bib}" }
                                                    td { class: "w-32", "{when}" }
                                                }
                                            )
                                        })}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

/// One labelled input with its validation message.
#[cfg(feature = "web")]
#[component]
fn Field(
    label: &'static str,
    placeholder: &'static str,
    value: String,
    error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    rsx!(
        label { class: "form-control w-full",
            div { class: "label",
                span { class: "label-text", "{label}" }
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |event: FormEvent| oninput.call(event.value())
            }
            if let Some(message) = error {
                div { class: "label",
                    span { class: "label-text-alt text-error", "{message}" }
                }
            }
        }
    )
}
