//! Pushbullet API - HTTP client for the Pushbullet v2 REST API.
//!
//! This crate provides a typed HTTP client covering the chat, device, push,
//! and subscription endpoint groups. It handles access-token authentication,
//! JSON request/response handling, and a typed response envelope; each
//! operation is exactly one request with no retry or caching.

pub mod client;
pub mod endpoints;
pub mod response;

// Re-export key types
pub use client::ApiClient;
pub use endpoints::devices::DeviceParams;
pub use endpoints::pushes::PushParams;
pub use response::ApiResponse;
