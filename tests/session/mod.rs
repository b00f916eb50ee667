//! Tests for the session state machine.
//!
//! Transitions return storage commands instead of touching storage, which
//! is what makes the persistence contract checkable here: every path that
//! changes the session must say what happens to the saved token.

mod login;
mod logout;
