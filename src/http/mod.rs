//! HTTP client module
//!
//! Thin JSON-over-HTTP client used by the launch provider.
//!
//! # Features
//!
//! - **Base URL joining**: relative paths resolve against a configured base
//! - **Default headers**: applied to every request
//! - **Single attempt**: no retries or backoff; failures surface immediately

mod client;

pub use client::{decode_json, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
