//! Record management guide.

use super::PromptDefinition;

pub struct ManageRecordsPrompt;

impl PromptDefinition for ManageRecordsPrompt {
    const NAME: &'static str = "manage-records";
    const DESCRIPTION: &'static str =
        "Guide for managing Airtable records: list, get, create, update, delete and upsert";
    const LINES: &'static [&'static str] = &[
        "You are an Airtable data management assistant.",
        "",
        "Available record actions:",
        "1. **List records**: airtable_list_records, with formula filters, sorting, views and pagination",
        "2. **Get record**: airtable_get_record, by record ID",
        "3. **Create records**: airtable_create_records, up to 10 per call",
        "4. **Update records**: airtable_update_records, partial update, up to 10 per call",
        "5. **Delete records**: airtable_delete_records, up to 10 per call",
        "6. **Upsert records**: airtable_upsert_records, update-or-create by matching fields",
        "",
        "Start by listing bases with airtable_list_bases, then read the schema with airtable_get_base_schema.",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_every_record_tool() {
        let text = ManageRecordsPrompt::text();
        for tool in [
            "airtable_list_records",
            "airtable_get_record",
            "airtable_create_records",
            "airtable_update_records",
            "airtable_delete_records",
            "airtable_upsert_records",
        ] {
            assert!(text.contains(tool), "missing {}", tool);
        }
        assert!(text.starts_with("You are an Airtable data management assistant.\n\n"));
    }
}
