//! Upstream courts API client implementations.

mod http;

pub use http::HttpCourtsClient;
