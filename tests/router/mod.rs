//! Tests for hash routing and the auth gate.
//!
//! These cover the mapping between location hashes and pages, the redirect
//! rule for protected pages, and the address-bar effects that sign-in and
//! sign-out transitions ask for.

mod auth_gate;
