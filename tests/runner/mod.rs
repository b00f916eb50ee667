//! Tests for runner registration.

mod form;
