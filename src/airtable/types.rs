//! Request payload shapes for the Airtable REST API.
//!
//! Field values, field options and webhook specifications are schema-driven
//! on the Airtable side, so they stay opaque JSON here. Responses are not
//! modelled at all: the client hands back the remote JSON untouched.

use schemars::JsonSchema;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Opaque JSON object (record fields, field options, webhook specification).
pub type JsonMap = Map<String, Value>;

/// Optional count or position that also accepts integral floats (`5.0`).
///
/// Hosts frequently send every JSON number as a double.
pub fn optional_count<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let value = match number.as_u64() {
        Some(n) => n,
        None => match number.as_f64() {
            Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => f as u64,
            _ => {
                return Err(D::Error::custom(format!(
                    "expected a non-negative whole number, got {}",
                    number
                )));
            }
        },
    };

    T::try_from(value)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("{} is out of range", value)))
}

// ============================================================================
// Records
// ============================================================================

/// One sort key: `{"field": "Name", "direction": "desc"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SortSpec {
    /// Field name or ID to sort by.
    pub field: String,

    /// "asc" or "desc". Airtable defaults to ascending when omitted.
    /// Sent as given; Airtable rejects anything else.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

/// Optional parameters of a list-records query.
///
/// Every parameter is omitted from the query string unless it carries a
/// meaningful value (non-empty string, positive number, `true`).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListRecordsOptions {
    /// Number of records per page (1-100, default: 100)
    #[serde(default, deserialize_with = "optional_count")]
    pub page_size: Option<u32>,

    /// Maximum total records to return
    #[serde(default, deserialize_with = "optional_count")]
    pub max_records: Option<u32>,

    /// View name or ID to use for pre-filtering
    #[serde(default)]
    pub view: Option<String>,

    /// Airtable formula to filter records (e.g., "{Status}='Active'")
    #[serde(default)]
    pub filter_by_formula: Option<String>,

    /// Sort keys in priority order: [{"field": "Name", "direction": "asc"}]
    #[serde(default)]
    pub sort: Option<Vec<SortSpec>>,

    /// Field names to include in the response
    #[serde(default)]
    pub fields: Option<Vec<String>>,

    /// Pagination token from previous response
    #[serde(default)]
    pub offset: Option<String>,

    /// Cell value format: "json" (default) or "string" (requires time_zone)
    #[serde(default)]
    pub cell_format: Option<String>,

    /// Time zone used to format dates when cell_format is "string" (e.g., "Europe/Paris")
    #[serde(default)]
    pub time_zone: Option<String>,

    /// Key returned fields by field ID instead of field name
    #[serde(default)]
    pub return_fields_by_field_id: Option<bool>,
}

/// A record to create: `{"fields": {"Name": "value"}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NewRecord {
    /// Field name to value mapping.
    pub fields: JsonMap,
}

/// A partial update of an existing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RecordUpdate {
    /// Record ID (e.g., "recXXXXXXXXXXXXXX").
    pub id: String,

    /// Only these fields are changed.
    pub fields: JsonMap,
}

// ============================================================================
// Schema
// ============================================================================

/// Definition of a field inside a create-table/create-base request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldDefinition {
    /// Field name.
    pub name: String,

    /// Field type (e.g., "singleLineText", "number", "singleSelect").
    #[serde(rename = "type")]
    pub field_type: String,

    /// Type-specific options (e.g., {"choices": [{"name": "Open"}]}).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<JsonMap>,

    /// Field description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Definition of a table inside a create-base request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TableDefinition {
    /// Table name.
    pub name: String,

    /// At least one field; the first one becomes the primary field.
    pub fields: Vec<FieldDefinition>,

    /// Table description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Rename or re-describe a table or a field. Absent members are left as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetadataUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ============================================================================
// Request bodies
// ============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct RecordsBody<'a, R: Serialize> {
    #[serde(rename = "performUpsert", skip_serializing_if = "Option::is_none")]
    pub perform_upsert: Option<PerformUpsert<'a>>,

    pub records: &'a [R],

    #[serde(skip_serializing_if = "Option::is_none")]
    pub typecast: Option<bool>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PerformUpsert<'a> {
    #[serde(rename = "fieldsToMergeOn")]
    pub fields_to_merge_on: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateBaseBody<'a> {
    pub name: &'a str,
    pub workspace_id: &'a str,
    pub tables: &'a [TableDefinition],
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateTableBody<'a> {
    pub name: &'a str,
    pub fields: &'a [FieldDefinition],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateWebhookBody<'a> {
    pub notification_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specification: Option<&'a JsonMap>,
}

/// `typecast` is only ever sent as `true`.
pub(crate) fn typecast_flag(typecast: Option<bool>) -> Option<bool> {
    typecast.filter(|t| *t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sort_spec_direction_optional() {
        let spec: SortSpec = serde_json::from_value(json!({"field": "Name"})).unwrap();
        assert_eq!(spec.direction, None);

        let spec: SortSpec =
            serde_json::from_value(json!({"field": "Age", "direction": "DESC"})).unwrap();
        assert_eq!(spec.direction.as_deref(), Some("DESC"));
    }

    #[test]
    fn test_counts_accept_whole_floats() {
        let options: ListRecordsOptions =
            serde_json::from_value(json!({"page_size": 5.0, "max_records": 100})).unwrap();
        assert_eq!(options.page_size, Some(5));
        assert_eq!(options.max_records, Some(100));

        assert!(serde_json::from_value::<ListRecordsOptions>(json!({"page_size": 5.5})).is_err());
        assert!(serde_json::from_value::<ListRecordsOptions>(json!({"page_size": -1})).is_err());
        assert!(
            serde_json::from_value::<ListRecordsOptions>(json!({"page_size": 5_000_000_000u64}))
                .is_err()
        );
    }

    #[test]
    fn test_field_definition_uses_type_key() {
        let field: FieldDefinition = serde_json::from_value(json!({
            "name": "Status",
            "type": "singleSelect",
            "options": {"choices": [{"name": "Open"}]}
        }))
        .unwrap();
        assert_eq!(field.field_type, "singleSelect");

        let encoded = serde_json::to_value(&field).unwrap();
        assert_eq!(encoded["type"], "singleSelect");
        assert!(encoded.get("description").is_none());
    }

    #[test]
    fn test_upsert_body_shape() {
        let records = vec![NewRecord {
            fields: json!({"Email": "a@example.com"}).as_object().cloned().unwrap(),
        }];
        let merge_on = vec!["Email".to_string()];
        let body = RecordsBody {
            perform_upsert: Some(PerformUpsert {
                fields_to_merge_on: &merge_on,
            }),
            records: &records,
            typecast: typecast_flag(Some(false)),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "performUpsert": {"fieldsToMergeOn": ["Email"]},
                "records": [{"fields": {"Email": "a@example.com"}}]
            })
        );
    }

    #[test]
    fn test_metadata_update_skips_absent_members() {
        let update = MetadataUpdate {
            name: Some("Renamed".to_string()),
            description: None,
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"name": "Renamed"}));
    }
}
