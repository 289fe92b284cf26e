//! Airtable REST API client.
//!
//! A thin, stateless-per-call translation layer: every logical operation
//! (list records, create base, refresh webhook, ...) becomes exactly one
//! HTTP request, and every response is returned as the JSON Airtable sent.
//!
//! - `client.rs` - [`AirtableConnector`] (shared connection pool) and
//!   [`AirtableClient`] (one credential, one method per endpoint)
//! - `types.rs` - request payload shapes
//! - `query.rs` - query-string construction
//! - `error.rs` - [`ApiError`]

mod client;
mod error;
mod query;
pub mod types;

pub use client::{AirtableClient, AirtableConnector, ApiRequest, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use types::{
    FieldDefinition, JsonMap, ListRecordsOptions, MetadataUpdate, NewRecord, RecordUpdate,
    SortSpec, TableDefinition,
};
