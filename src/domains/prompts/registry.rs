//! Prompt Registry - central registration of all prompts.

use super::definitions::{ManageRecordsPrompt, ManageSchemaPrompt, PromptDefinition};

/// A registered prompt, rendered once at startup.
#[derive(Debug, Clone)]
pub struct StaticPrompt {
    pub name: &'static str,
    pub description: &'static str,
    pub text: String,
}

fn build<P: PromptDefinition>() -> StaticPrompt {
    StaticPrompt {
        name: P::NAME,
        description: P::DESCRIPTION,
        text: P::text(),
    }
}

/// Get all registered prompts, in listing order.
pub fn get_all_prompts() -> Vec<StaticPrompt> {
    vec![build::<ManageRecordsPrompt>(), build::<ManageSchemaPrompt>()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        let names: Vec<_> = prompts.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["manage-records", "manage-schema"]);
        assert!(prompts.iter().all(|p| !p.text.is_empty()));
    }
}
