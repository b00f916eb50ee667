//! Client-side state shared across pages.

pub mod session;
#[cfg(feature = "web")]
pub mod token;

pub use session::{Session, SessionCommand};
