//! Deterministic prompt templates for the two structuring stages.
//!
//! Pure string construction: no validation of the supplied JSON and no
//! I/O. Presence checks on `data`/`schema` are the caller's concern.

use serde_json::Value;

/// Priority order-detail fields the extraction stage is told to surface.
pub const ORDER_FIELDS: [&str; 11] = [
    "order_number",
    "order_date",
    "reference",
    "handler",
    "customer_name",
    "company",
    "address",
    "total_amount",
    "payment_terms",
    "late_fee",
    "business_id",
];

/// Row fields the extraction stage is told to use for `tableData` rows.
pub const TABLE_ROW_FIELDS: [&str; 7] = [
    "item_code",
    "description",
    "quantity",
    "delivery_date",
    "unit_price",
    "discount",
    "net_price",
];

/// Build the stage-1 extraction prompt. The caller's request JSON is
/// appended verbatim at the end.
pub fn extraction_prompt(request: &Value) -> String {
    let mut prompt = String::from(
        "You are an advanced AI specializing in structured data extraction. \
         Your task is to process the following JSON input and return **ONLY** \
         a well-formatted JSON output.\n\n\
         ### **Transformation Rules**\n\
         1. Extract `formData` into a structured JSON object with clear key-value pairs.\n\
         2. Extract relevant order details from `rawData`, including the following priority fields **if present**:\n",
    );
    for field in ORDER_FIELDS {
        prompt.push_str("   - `");
        prompt.push_str(field);
        prompt.push_str("`\n");
    }
    prompt.push_str(
        "3. Convert `rawData` into a structured list called `tableData`, \
         where each row includes the following fields **if they exist**:\n",
    );
    for field in TABLE_ROW_FIELDS {
        prompt.push_str("   - `");
        prompt.push_str(field);
        prompt.push_str("`\n");
    }
    prompt.push_str(
        "4. **Retain any additional fields** from `rawData` that are not \
         explicitly listed above under \"additional_data\". This ensures all \
         relevant data is preserved.\n\
         5. **Return only the final structured JSON output without any \
         additional text or formatting.**\n\n\
         Given the following input JSON:\n",
    );
    prompt.push_str(&request.to_string());
    prompt
}

/// Build the stage-2 schema-mapping prompt from a target schema and
/// previously extracted data.
pub fn schema_mapping_prompt(schema: &Value, data: &Value) -> String {
    format!(
        "You are an AI that maps extracted data into a predefined user schema.\n\
         - **Ensure accuracy and proper data alignment.**\n\
         - **Preserve all relevant details.**\n\
         - **Return ONLY a JSON object matching the given schema.**\n\n\
         ### **Schema Definition**\n\
         {schema}\n\n\
         ### **Extracted Data**\n\
         {data}\n\n\
         **Return only the final JSON output that follows the schema format.**\n"
    )
}
