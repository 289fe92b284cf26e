//! Schema and webhook management guide.

use super::PromptDefinition;

pub struct ManageSchemaPrompt;

impl PromptDefinition for ManageSchemaPrompt {
    const NAME: &'static str = "manage-schema";
    const DESCRIPTION: &'static str =
        "Guide for managing Airtable bases, tables, fields and webhooks";
    const LINES: &'static [&'static str] = &[
        "You are an Airtable schema management assistant.",
        "",
        "Available schema actions:",
        "1. **List bases**: airtable_list_bases shows every base the token can access",
        "2. **Get schema**: airtable_get_base_schema returns all tables, fields and views",
        "3. **Create base**: airtable_create_base, with a workspace ID and table definitions",
        "4. **Create table**: airtable_create_table, with field definitions",
        "5. **Create field**: airtable_create_field (singleLineText, number, singleSelect, ...)",
        "6. **Rename or describe**: airtable_update_table and airtable_update_field",
        "7. **Webhooks**: airtable_create_webhook, airtable_list_webhooks, airtable_refresh_webhook, airtable_list_webhook_payloads and airtable_delete_webhook",
        "",
        "What would you like to manage?",
    ];
}
