//! Prompts domain module.
//!
//! Static usage guides a client can pull into a conversation. They take no
//! arguments.
//!
//! ## Architecture
//!
//! - `definitions/` - One file per prompt
//! - `registry.rs` - Central prompt registration
//! - `service.rs` - Prompt listing and lookup
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file in `definitions/`
//! 2. Implement the `PromptDefinition` trait
//! 3. Register it in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::{StaticPrompt, get_all_prompts};
pub use service::PromptService;
