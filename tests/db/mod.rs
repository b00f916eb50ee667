//! Tests for the database binding.
//!
//! The REST and streaming endpoints themselves need a browser; what is
//! checked here is everything around them: the URLs requests go to, the
//! push acknowledgement, and the interpretation of streamed frames.
