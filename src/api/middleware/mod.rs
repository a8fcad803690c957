//! HTTP middleware: request tracing and per-IP rate limiting.

pub mod rate_limit;
pub mod tracing;
