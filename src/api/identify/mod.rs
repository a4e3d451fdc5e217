//! Part identification API
//!
//! - POST /api/identify-part - Identify a vehicle part and vehicle model
//!   from a caller-supplied image reference

pub mod client;
pub mod config;
pub mod handlers;
pub mod models;
pub mod prompt;

pub use client::{OpenAiVisionClient, ProviderError, VisionCompletion};
pub use config::OpenAiConfig;
pub use handlers::{identify_part, method_not_allowed, IdentifyState};
pub use models::{ErrorBody, IdentifyRequest, PartIdentification};
pub use prompt::IDENTIFY_PROMPT;
