//! API Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no browser window available")]
    NoWindow,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("request failed with status {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("cannot encode request body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("cannot decode response body: {0}")]
    Decode(String),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Js(message)
    }
}

impl From<serde_wasm_bindgen::Error> for ApiError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ApiError::Status {
            status: 403,
            status_text: "Forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "request failed with status 403 Forbidden");
    }

    #[test]
    fn test_encode_from_serde_json() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = ApiError::from(source);
        assert!(matches!(err, ApiError::Encode(_)));
        assert!(err.to_string().starts_with("cannot encode request body"));
    }
}
