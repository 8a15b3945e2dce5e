//! Integration tests for the Mbhaco storefront.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the storefront
//! cargo run -p mbhaco-storefront
//!
//! # Run integration tests
//! cargo test -p mbhaco-integration-tests -- --ignored
//! ```
//!
//! The tests drive the cart flow over HTTP with a cookie-holding client,
//! so each test run gets its own visitor session and carts do not leak
//! between tests.
