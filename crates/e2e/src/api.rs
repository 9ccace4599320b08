//! API response waiting
//!
//! The order API responds asynchronously relative to the click that
//! triggers it, so the watcher must be armed before the click and
//! joined after. `ApiWaiter::arm` registers the watcher in the browser
//! session without awaiting; `ArmedResponse::wait` joins it, asserts
//! HTTP 200, and returns the parsed JSON body.

use serde::Deserialize;
use serde_json::Value;

use crate::driver::Command;
use crate::error::{SuiteError, SuiteResult};
use crate::page::Page;

pub struct ApiWaiter;

impl ApiWaiter {
    /// Arm a watcher for the next response whose URL matches
    /// `url_pattern` (a regular expression) with the given HTTP method.
    /// Must be called before the action that triggers the request.
    pub async fn arm(page: &Page, url_pattern: &str, method: &str) -> SuiteResult<ArmedResponse> {
        // Validate the pattern on the Rust side before handing it to
        // the driver's RegExp.
        regex::Regex::new(url_pattern)
            .map_err(|e| SuiteError::Driver(format!("invalid URL pattern {url_pattern:?}: {e}")))?;

        let watch_id = page.session().next_watch_id().await;
        page.send_raw(Command::ArmResponse {
            watch_id,
            pattern: url_pattern.to_string(),
            method: method.to_uppercase(),
        })
        .await?;

        Ok(ArmedResponse {
            page: page.clone(),
            watch_id,
            pattern: url_pattern.to_string(),
            method: method.to_uppercase(),
        })
    }
}

/// A registered response watcher, waiting to be joined.
pub struct ArmedResponse {
    page: Page,
    watch_id: u64,
    pattern: String,
    method: String,
}

impl ArmedResponse {
    /// Join the watcher: asserts status exactly 200 and returns the
    /// parsed JSON body. A timeout propagates with the pattern and
    /// method in the message; it is not retried.
    pub async fn wait(self) -> SuiteResult<Value> {
        let reply = self
            .page
            .send_raw(Command::AwaitResponse { watch_id: self.watch_id })
            .await
            .map_err(|e| match e {
                SuiteError::Timeout(_) => SuiteError::Timeout(format!(
                    "API response matching {} {}",
                    self.method, self.pattern
                )),
                other => other,
            })?;

        let status = reply["status"].as_u64().unwrap_or_default();
        if status != 200 {
            return Err(SuiteError::ApiContract(format!(
                "{} {}: expected status 200, got {status}",
                self.method, self.pattern
            )));
        }

        Ok(reply["body"].clone())
    }
}

/// Expected shape of the order placement response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: String,
    pub status: String,
}

impl OrderResponse {
    /// Parse and validate the order API body: non-empty `orderId` and
    /// `status == "success"`.
    pub fn from_body(body: &Value) -> SuiteResult<Self> {
        let response: OrderResponse = serde_json::from_value(body.clone())
            .map_err(|e| SuiteError::ApiContract(format!("order response shape mismatch: {e}")))?;

        if response.order_id.is_empty() {
            return Err(SuiteError::ApiContract("orderId is empty".to_string()));
        }
        if response.status != "success" {
            return Err(SuiteError::ApiContract(format!(
                "expected status \"success\", got {:?}",
                response.status
            )));
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_order_body_parses() {
        let body = json!({ "orderId": "ORD-1234", "status": "success" });
        let response = OrderResponse::from_body(&body).unwrap();
        assert_eq!(response.order_id, "ORD-1234");
        assert_eq!(response.status, "success");
    }

    #[test]
    fn empty_order_id_is_a_contract_violation() {
        let body = json!({ "orderId": "", "status": "success" });
        let err = OrderResponse::from_body(&body).unwrap_err();
        assert!(matches!(err, SuiteError::ApiContract(_)));
    }

    #[test]
    fn non_success_status_is_a_contract_violation() {
        let body = json!({ "orderId": "ORD-1", "status": "pending" });
        let err = OrderResponse::from_body(&body).unwrap_err();
        assert!(err.to_string().contains("success"));
    }

    #[test]
    fn missing_fields_are_a_shape_mismatch() {
        let body = json!({ "status": "success" });
        let err = OrderResponse::from_body(&body).unwrap_err();
        assert!(err.to_string().contains("shape mismatch"));
    }
}
