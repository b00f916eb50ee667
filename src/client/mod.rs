//! Everything that runs in the browser.
//!
//! Navigation and session logic live in plain modules so they stay testable
//! off-browser; the components and glue that need a real `window` sit behind
//! the `web` feature.

#[cfg(feature = "web")]
pub mod app;
#[cfg(feature = "web")]
pub mod components;
#[cfg(feature = "web")]
pub mod nav;
pub mod router;
pub mod routes;
pub mod store;
#[cfg(feature = "web")]
pub mod util;

#[cfg(feature = "web")]
pub use app::App;
