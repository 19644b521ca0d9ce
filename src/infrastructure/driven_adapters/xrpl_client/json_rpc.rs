//! rippled JSON-RPC transport

use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Serialize;
use serde_json::{json, Value};

use crate::shared::errors::LedgerError;

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    method: &'a str,
    params: [Value; 1],
}

/// An open connection to one rippled JSON-RPC endpoint
#[derive(Debug)]
pub struct RpcConnection {
    url: String,
    http_client: HttpClient,
}

impl RpcConnection {
    /// Build the HTTP client and make sure the server answers `server_info`
    pub async fn open(url: &str, timeout: Duration) -> Result<Self, LedgerError> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        let connection = Self {
            url: url.to_string(),
            http_client,
        };

        connection.request("server_info", json!({})).await?;
        tracing::info!(url = %connection.url, "Connected to XRPL node");

        Ok(connection)
    }

    /// Underlying HTTP client, reused for the faucet
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Call `method` and return its `result` object
    pub async fn request(&self, method: &str, params: Value) -> Result<Value, LedgerError> {
        tracing::debug!(method, "XRPL request");

        let body = RpcRequest {
            method,
            params: [params],
        };

        let response: Value = self
            .http_client
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        extract_result(response)
    }
}

/// Unwrap the `result` member, turning rippled error payloads into `LedgerError::Rpc`
fn extract_result(mut response: Value) -> Result<Value, LedgerError> {
    if let Some(error) = response.get("error") {
        return Err(rpc_error(error, &response));
    }

    let result = response
        .get_mut("result")
        .map(Value::take)
        .ok_or_else(|| LedgerError::Malformed("response has no result".into()))?;

    if result["status"].as_str() == Some("error") {
        return Err(rpc_error(&result["error"], &result));
    }

    Ok(result)
}

fn rpc_error(error: &Value, payload: &Value) -> LedgerError {
    let error = match error {
        Value::String(s) => s.clone(),
        Value::Object(obj) => obj
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string(),
        _ => "unknown".to_string(),
    };
    let message = payload["error_message"]
        .as_str()
        .or_else(|| payload["error_exception"].as_str())
        .unwrap_or(&error)
        .to_string();

    LedgerError::Rpc { error, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_result_member() {
        let result = extract_result(json!({
            "result": { "status": "success", "ledger_current_index": 7 }
        }))
        .unwrap();
        assert_eq!(result["ledger_current_index"], 7);
    }

    #[test]
    fn maps_result_level_errors() {
        let err = extract_result(json!({
            "result": {
                "status": "error",
                "error": "actNotFound",
                "error_message": "Account not found."
            }
        }))
        .unwrap_err();
        assert!(err.is_account_not_found());
        assert_eq!(err.to_string(), "actNotFound: Account not found.");
    }

    #[test]
    fn maps_top_level_errors() {
        let err = extract_result(json!({ "error": "invalidParams" })).unwrap_err();
        assert_eq!(err.to_string(), "invalidParams: invalidParams");
    }

    #[test]
    fn missing_result_is_malformed() {
        let err = extract_result(json!({ "id": 1 })).unwrap_err();
        assert!(matches!(err, LedgerError::Malformed(_)));
    }
}
