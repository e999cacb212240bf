//! HTTP client layer — `LcfHttp`, one method per service endpoint.

pub mod client;

pub use client::LcfHttp;
