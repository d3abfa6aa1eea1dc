use serde_json::Value;

use crate::constants::{MEDIA_TYPE_FORM_URLENCODED, MEDIA_TYPE_JSON};
use crate::utils::AcliError;

/// Look up the operation definition for `paths.<path>.<method>`.
pub fn operation<'a>(doc: &'a Value, path: &str, method: &str) -> Result<&'a Value, AcliError> {
    let paths = doc
        .get("paths")
        .ok_or_else(|| AcliError::NotFound("spec document has no paths".to_string()))?;
    let endpoint = paths
        .get(path)
        .ok_or_else(|| AcliError::NotFound(format!("path {path}")))?;
    endpoint
        .get(method)
        .ok_or_else(|| AcliError::NotFound(format!("{method} operation for path {path}")))
}

/// Resolve the example response body for `(path, method, status)`.
///
/// Prefers the `application/json` content body over
/// `application/x-www-form-urlencoded`. Within the chosen body, prefers a
/// single `example`, then the named `examples` collection, then the outer
/// `content.example` shorthand some spec entries use. When none of these
/// exist the result is `Value::Null` rather than an error: "no example
/// available" is a valid answer for an otherwise well-defined response.
pub fn example_response(
    doc: &Value,
    path: &str,
    method: &str,
    status: u16,
) -> Result<Value, AcliError> {
    let op = operation(doc, path, method)?;
    let response = op
        .get("responses")
        .and_then(|r| r.get(status.to_string()))
        .ok_or_else(|| AcliError::NotFound(format!("{status} response for {method} {path}")))?;
    let content = response
        .get("content")
        .ok_or_else(|| AcliError::NotFound(format!("response content for {method} {path}")))?;

    let body = [MEDIA_TYPE_JSON, MEDIA_TYPE_FORM_URLENCODED]
        .iter()
        .find_map(|media_type| content.get(media_type))
        .ok_or_else(|| {
            AcliError::NotFound(format!("supported media type for {method} {path}"))
        })?;

    if let Some(example) = body.get("example") {
        Ok(example.clone())
    } else if let Some(examples) = body.get("examples") {
        Ok(examples.clone())
    } else if let Some(example) = content.get("example") {
        Ok(example.clone())
    } else {
        Ok(Value::Null)
    }
}

/// Resolve the example POST request body for `path`.
pub fn example_request_body(doc: &Value, path: &str) -> Result<Value, AcliError> {
    let op = operation(doc, path, "post")?;
    op.get("requestBody")
        .and_then(|b| b.get("content"))
        .and_then(|c| c.get(MEDIA_TYPE_JSON))
        .and_then(|c| c.get("example"))
        .cloned()
        .ok_or_else(|| AcliError::NotFound(format!("example request body for POST {path}")))
}
