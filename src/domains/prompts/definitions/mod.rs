//! Prompt definitions module.
//!
//! Each prompt lives in its own file and provides its name, description and
//! the text of its single user message.

mod manage_records;
mod manage_schema;

pub use manage_records::ManageRecordsPrompt;
pub use manage_schema::ManageSchemaPrompt;

/// Trait for prompt definitions.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// Lines of the user message, joined with newlines when rendered.
    const LINES: &'static [&'static str];

    fn text() -> String {
        Self::LINES.join("\n")
    }
}
