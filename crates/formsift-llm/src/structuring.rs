//! The two structuring operations exposed to the boundary layer.

use serde_json::Value;

use crate::client::StructuringClient;
use crate::error_envelope;
use crate::prompt;

/// Guard message for the extraction operation.
const DATA_REQUIRED: &str = "Data field is required in the request.";

/// Guard message for the schema-mapping operation.
const SCHEMA_AND_DATA_REQUIRED: &str =
    "Both 'schema' and 'data' fields are required in the request.";

/// Two-stage data structurer: checks request preconditions, builds the
/// prompt, and delegates to the completion client.
///
/// Every operation returns a string payload, even on failure, so the HTTP
/// layer needs no fault handling of its own.
#[derive(Clone)]
pub struct DataStructurer {
    client: StructuringClient,
}

impl DataStructurer {
    /// Wrap a completion client.
    pub fn new(client: StructuringClient) -> Self {
        Self { client }
    }

    /// Stage 1: extract structured data from a parsed document payload.
    ///
    /// Requires a `data` field in the request; without it the guard
    /// envelope is returned and no provider call is made.
    pub async fn extract_structured_data(&self, request: &Value) -> String {
        if request.get("data").is_none() {
            return error_envelope(DATA_REQUIRED);
        }

        let prompt = prompt::extraction_prompt(request);
        self.client.complete(&prompt).await
    }

    /// Stage 2: map previously extracted data onto a caller-defined schema.
    ///
    /// Requires both `schema` and `data`; without them the guard envelope
    /// is returned and no provider call is made.
    pub async fn map_to_schema(&self, request: &Value) -> String {
        let (schema, data) = match (request.get("schema"), request.get("data")) {
            (Some(schema), Some(data)) => (schema, data),
            _ => return error_envelope(SCHEMA_AND_DATA_REQUIRED),
        };

        let prompt = prompt::schema_mapping_prompt(schema, data);
        self.client.complete(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn structurer() -> DataStructurer {
        // The guard paths never reach the network, so a dummy credential
        // and unroutable URL are safe here.
        DataStructurer::new(
            StructuringClient::new("test-key").with_base_url("http://127.0.0.1:1/v1"),
        )
    }

    #[tokio::test]
    async fn missing_data_returns_the_literal_guard_envelope() {
        let result = structurer()
            .extract_structured_data(&json!({"other": 1}))
            .await;
        assert_eq!(
            result,
            r#"{"error": "Data field is required in the request."}"#
        );
    }

    #[tokio::test]
    async fn missing_schema_returns_the_literal_guard_envelope() {
        let result = structurer().map_to_schema(&json!({"data": {}})).await;
        assert_eq!(
            result,
            r#"{"error": "Both 'schema' and 'data' fields are required in the request."}"#
        );
    }

    #[tokio::test]
    async fn missing_data_in_mapping_request_is_also_guarded() {
        let result = structurer()
            .map_to_schema(&json!({"schema": {"type": "object"}}))
            .await;
        assert_eq!(
            result,
            r#"{"error": "Both 'schema' and 'data' fields are required in the request."}"#
        );
    }

    #[tokio::test]
    async fn null_data_counts_as_present() {
        // `get` distinguishes an absent key from an explicit null; only
        // absence triggers the guard.
        let result = structurer()
            .extract_structured_data(&json!({"data": null}))
            .await;
        assert!(result.contains("Failed to process request"));
    }
}
