// Web Seek - API Core
//
// This crate provides the backend for the Web Seek search front:
// phone-number verification proxied to Vonage Verify v2, related-question
// generation proxied to Gemini, and session-gated pages via Clerk.
//
// All providers are reached through kernel traits so handlers stay
// testable with substitute clients.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
