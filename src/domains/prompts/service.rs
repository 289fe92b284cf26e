//! Prompt service implementation.
//!
//! Prompts are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new prompt does NOT require modifying this file.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use tracing::info;

use super::error::PromptError;
use super::registry::{StaticPrompt, get_all_prompts};

/// Service for listing and fetching prompts.
pub struct PromptService {
    prompts: Vec<StaticPrompt>,
}

impl PromptService {
    pub fn new() -> Self {
        let prompts = get_all_prompts();
        info!("Registered {} prompts", prompts.len());
        Self { prompts }
    }

    /// List all available prompts.
    pub fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .iter()
            .map(|p| Prompt {
                name: p.name.to_string(),
                title: None,
                description: Some(p.description.to_string()),
                arguments: None,
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt's single user message.
    pub fn get_prompt(&self, name: &str) -> Result<GetPromptResult, PromptError> {
        let prompt = self
            .prompts
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| PromptError::not_found(name))?;

        Ok(GetPromptResult {
            description: Some(prompt.description.to_string()),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                prompt.text.clone(),
            )],
        })
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::PromptMessageContent;

    #[test]
    fn test_list_prompts() {
        let prompts = PromptService::new().list_prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts.iter().all(|p| p.arguments.is_none()));
    }

    #[test]
    fn test_get_prompt_single_user_message() {
        let result = PromptService::new().get_prompt("manage-schema").unwrap();
        assert_eq!(result.messages.len(), 1);

        let message = &result.messages[0];
        assert_eq!(message.role, PromptMessageRole::User);
        match &message.content {
            PromptMessageContent::Text { text } => {
                assert!(text.contains("airtable_create_field"))
            }
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_get_nonexistent_prompt() {
        let err = PromptService::new().get_prompt("nonexistent").unwrap_err();
        assert_eq!(err.to_string(), "Prompt not found: nonexistent");
    }
}
