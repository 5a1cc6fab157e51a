//! HTTP module
//!
//! Provides the [`Fetcher`] capability consumed by listing sources, and the
//! HTTP client with retry, rate limiting, and backoff behind the default
//! implementation.
//!
//! # Features
//!
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **Localized Fetching**: `Accept-Language` and client headers per request

mod client;
mod fetcher;
mod rate_limit;

pub use client::{default_user_agent, HttpClient, HttpClientConfig, RetryPolicy};
pub use fetcher::{Fetcher, HttpFetcher, DEFAULT_CLIENT_VERSION};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
