//! Adapter implementations of the trait abstractions.
//!
//! Production adapters wrap real transports; the `mock` module provides
//! configurable test doubles.

pub mod mock;
pub mod reqwest_http;

pub use mock::MockHttpClient;
pub use reqwest_http::ReqwestHttpClient;
