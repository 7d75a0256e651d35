//! Trait abstractions for external collaborators.
//!
//! These traits decouple the poller from concrete transport implementations,
//! enabling dependency injection and mocking in tests.

pub mod http;

pub use http::{HttpClient, HttpError, Response};
