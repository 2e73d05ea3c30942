//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod cache;
pub mod clerk_client;
pub mod deps;
pub mod search;
pub mod test_dependencies;
pub mod traits;

pub use ai::{GeminiModel, GEMINI_FLASH};
pub use cache::{SuggestionCache, SuggestionKey};
pub use clerk_client::ClerkClient;
pub use deps::{ServerDeps, VonageAdapter};
pub use search::{ExaClient, NoopSearchService};
pub use test_dependencies::{
    text_response, MockGenerativeModel, MockSessionService, MockVerifyService,
};
pub use traits::*;
