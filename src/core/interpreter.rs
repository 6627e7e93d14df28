use crate::domain::model::{Exchange, NormalizedResult};
use serde_json::Value;

/// Only the literal `"true"` counts as success; firmware variants such as
/// `"True"` or `"1"` are reported as failures.
pub fn is_success(response: &Value) -> bool {
    response.get("success").and_then(Value::as_str) == Some("true")
}

pub fn interpret(response: Value, request: String, raw_response: String) -> NormalizedResult {
    NormalizedResult {
        success: is_success(&response),
        body: response,
        original: Exchange {
            request,
            response: raw_response,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result_for(response: Value) -> NormalizedResult {
        interpret(response, "<req/>".to_string(), "<res/>".to_string())
    }

    #[test]
    fn test_success_true_preserves_add_info() {
        let body = json!({
            "success": "true",
            "code": "",
            "status": "2",
            "addInfo": {
                "elementList": "lastCommand,printerStatus,fiscalReceiptNumber,fiscalReceiptAmount,fiscalReceiptDate,fiscalReceiptTime,zRepNumber",
                "lastCommand": "74",
                "printerStatus": "20110",
                "fiscalReceiptNumber": "1",
                "fiscalReceiptAmount": "1,00",
                "fiscalReceiptDate": "01/01/2022",
                "fiscalReceiptTime": "12:00",
                "zRepNumber": "764"
            }
        });

        let result = result_for(body.clone());
        assert!(result.success);
        assert_eq!(result.body, body);
        assert_eq!(result.code(), Some(""));
        assert_eq!(result.status(), Some("2"));
        assert_eq!(result.add_info().unwrap()["fiscalReceiptAmount"], json!("1,00"));
        assert_eq!(result.original.request, "<req/>");
        assert_eq!(result.original.response, "<res/>");
    }

    #[test]
    fn test_anything_but_literal_true_is_failure() {
        for body in [
            json!({ "success": "false", "code": "EPTR_REC_EMPTY" }),
            json!({ "code": "", "status": "2" }),
            json!({ "success": "True" }),
            json!({ "success": "1" }),
            json!({ "success": " true" }),
            json!({ "success": true }),
        ] {
            assert!(!result_for(body.clone()).success, "{}", body);
        }
    }
}
