//! Query-string construction for Airtable endpoints.

use super::error::ApiResult;
use super::types::ListRecordsOptions;

/// Ordered list of query pairs, percent-encoded on `finish`.
///
/// Keys may repeat (`fields[]`), and insertion order is kept.
#[derive(Debug, Default)]
pub(crate) struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Push a string only when it is present and non-empty.
    pub fn push_text(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.push(key, value);
        }
    }

    /// Push a number only when it is present and non-zero.
    pub fn push_count(&mut self, key: &str, value: Option<u32>) {
        if let Some(value) = value.filter(|v| *v > 0) {
            self.push(key, value.to_string());
        }
    }

    pub fn finish(self) -> ApiResult<String> {
        Ok(serde_urlencoded::to_string(&self.pairs)?)
    }
}

/// Append `?query` to `path` unless the query is empty.
pub(crate) fn with_query(path: String, query: &str) -> String {
    if query.is_empty() {
        path
    } else {
        format!("{}?{}", path, query)
    }
}

pub(crate) fn list_records(options: &ListRecordsOptions) -> ApiResult<String> {
    let mut query = QueryString::new();
    query.push_count("pageSize", options.page_size);
    query.push_count("maxRecords", options.max_records);
    query.push_text("view", options.view.as_deref());
    query.push_text("filterByFormula", options.filter_by_formula.as_deref());
    query.push_text("cellFormat", options.cell_format.as_deref());
    query.push_text("timeZone", options.time_zone.as_deref());
    query.push_text("offset", options.offset.as_deref());
    if options.return_fields_by_field_id == Some(true) {
        query.push("returnFieldsByFieldId", "true");
    }
    for field in options.fields.iter().flatten() {
        query.push("fields[]", field.as_str());
    }
    for (i, sort) in options.sort.iter().flatten().enumerate() {
        query.push(format!("sort[{}][field]", i), sort.field.as_str());
        query.push_text(&format!("sort[{}][direction]", i), sort.direction.as_deref());
    }
    query.finish()
}

/// `records[]=<id>` pairs joined verbatim; record IDs are already URL-safe.
pub(crate) fn delete_records(record_ids: &[String]) -> String {
    record_ids
        .iter()
        .map(|id| format!("records[]={}", id))
        .collect::<Vec<_>>()
        .join("&")
}

pub(crate) fn list_bases(offset: Option<&str>) -> ApiResult<String> {
    let mut query = QueryString::new();
    query.push_text("offset", offset);
    query.finish()
}

/// A cursor of zero is a real position and is always sent.
pub(crate) fn webhook_payloads(cursor: Option<u64>, limit: Option<u32>) -> ApiResult<String> {
    let mut query = QueryString::new();
    if let Some(cursor) = cursor {
        query.push("cursor", cursor.to_string());
    }
    query.push_count("limit", limit);
    query.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airtable::types::SortSpec;

    fn decode(query: &str) -> Vec<(String, String)> {
        serde_urlencoded::from_str(query).unwrap()
    }

    #[test]
    fn test_empty_options_yield_empty_query() {
        let query = list_records(&ListRecordsOptions::default()).unwrap();
        assert_eq!(query, "");
        assert_eq!(with_query("/app1/Tasks".to_string(), &query), "/app1/Tasks");
    }

    #[test]
    fn test_sort_indices_and_optional_direction() {
        let options = ListRecordsOptions {
            sort: Some(vec![
                SortSpec {
                    field: "Name".to_string(),
                    direction: None,
                },
                SortSpec {
                    field: "Age".to_string(),
                    direction: Some("desc".to_string()),
                },
                SortSpec {
                    field: "Due".to_string(),
                    direction: Some(String::new()),
                },
            ]),
            ..Default::default()
        };
        let pairs = decode(&list_records(&options).unwrap());
        assert_eq!(
            pairs,
            vec![
                ("sort[0][field]".to_string(), "Name".to_string()),
                ("sort[1][field]".to_string(), "Age".to_string()),
                ("sort[1][direction]".to_string(), "desc".to_string()),
                ("sort[2][field]".to_string(), "Due".to_string()),
            ]
        );
    }

    #[test]
    fn test_fields_repeat_in_order() {
        let options = ListRecordsOptions {
            fields: Some(vec!["Name".to_string(), "Due Date".to_string()]),
            ..Default::default()
        };
        let pairs = decode(&list_records(&options).unwrap());
        assert_eq!(
            pairs,
            vec![
                ("fields[]".to_string(), "Name".to_string()),
                ("fields[]".to_string(), "Due Date".to_string()),
            ]
        );
    }

    #[test]
    fn test_flags_and_blank_values() {
        let options = ListRecordsOptions {
            page_size: Some(0),
            view: Some(String::new()),
            return_fields_by_field_id: Some(false),
            max_records: Some(25),
            ..Default::default()
        };
        let pairs = decode(&list_records(&options).unwrap());
        assert_eq!(pairs, vec![("maxRecords".to_string(), "25".to_string())]);

        let options = ListRecordsOptions {
            return_fields_by_field_id: Some(true),
            ..Default::default()
        };
        assert_eq!(list_records(&options).unwrap(), "returnFieldsByFieldId=true");
    }

    #[test]
    fn test_formula_is_percent_encoded() {
        let options = ListRecordsOptions {
            filter_by_formula: Some("{Status}='Active'".to_string()),
            ..Default::default()
        };
        let query = list_records(&options).unwrap();
        assert!(query.starts_with("filterByFormula=%7BStatus%7D"));
        assert_eq!(
            decode(&query),
            vec![("filterByFormula".to_string(), "{Status}='Active'".to_string())]
        );
    }

    #[test]
    fn test_delete_records_joined_verbatim() {
        let ids = vec!["rec1".to_string(), "rec2".to_string()];
        assert_eq!(delete_records(&ids), "records[]=rec1&records[]=rec2");
    }

    #[test]
    fn test_webhook_cursor_zero_is_sent() {
        assert_eq!(webhook_payloads(Some(0), None).unwrap(), "cursor=0");
        assert_eq!(webhook_payloads(None, Some(50)).unwrap(), "limit=50");
        assert_eq!(webhook_payloads(None, None).unwrap(), "");
    }
}
