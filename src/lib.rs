//! Paceline is a single-page web application for race-day operations: a live
//! leaderboard streamed from a hosted realtime database, a protected page for
//! registering runners, and a login flow against a hosted auth endpoint.
//!
//! The crate is split along a feature boundary. Routing, session transitions,
//! record-stream interpretation, and page logic are plain Rust compiled for
//! every target; everything that touches the browser (Dioxus components,
//! `reqwasm` calls, `EventSource` and `localStorage` glue) sits behind the
//! `web` feature.

pub mod client;
pub mod config;
pub mod db;
pub mod model;
