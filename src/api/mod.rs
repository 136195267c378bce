//! REST API Client
//!
//! Frontend bindings to the to-do backend, one HTTP call per operation.

mod todo;

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::config::ApiConfig;
use crate::csrf::{csrf_token, CSRF_HEADER};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Mutating calls carry the CSRF header
    fn needs_csrf(self) -> bool {
        !matches!(self, Method::Get)
    }
}

/// Handle to the backend; cheap to clone into tasks
#[derive(Debug, Clone, Default)]
pub struct TodoClient {
    config: ApiConfig,
}

impl TodoClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

async fn send(method: Method, url: &str, body: Option<String>) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method(method.as_str());
    if let Some(body) = &body {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &init)?;
    let headers = request.headers();
    headers.set("Accept", "application/json")?;
    if body.is_some() {
        headers.set("Content-Type", "application/json")?;
    }
    if method.needs_csrf() {
        headers.set(CSRF_HEADER, &csrf_token().unwrap_or_default())?;
    }

    log::debug!("{} {}", method.as_str(), url);
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    check_status(response.ok(), response.status(), response.status_text())?;
    Ok(response)
}

/// Anything outside 2xx is an error
fn check_status(ok: bool, status: u16, status_text: String) -> Result<(), ApiError> {
    if ok {
        Ok(())
    } else {
        Err(ApiError::Status { status, status_text })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let value = JsFuture::from(response.json()?).await?;
    Ok(serde_wasm_bindgen::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Todo, TodoDraft};

    #[test]
    fn test_only_get_skips_csrf() {
        assert!(!Method::Get.needs_csrf());
        assert!(Method::Post.needs_csrf());
        assert!(Method::Put.needs_csrf());
        assert!(Method::Delete.needs_csrf());
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_save_request_creates_new_draft() {
        let client = TodoClient::new(ApiConfig::new("http://localhost:8000/api"));
        let (method, url) = client.save_request(&TodoDraft::empty());

        assert_eq!(method, Method::Post);
        assert_eq!(url, "http://localhost:8000/api/todos/");
    }

    #[test]
    fn test_save_request_updates_existing_todo() {
        let client = TodoClient::new(ApiConfig::new("/api"));
        let draft = TodoDraft::from(Todo {
            id: 12,
            title: "Water plants".to_string(),
            description: String::new(),
            completed: true,
        });
        let (method, url) = client.save_request(&draft);

        assert_eq!(method, Method::Put);
        assert_eq!(url, "/api/todos/12/");
    }

    #[test]
    fn test_check_status_accepts_success() {
        assert!(check_status(true, 200, "OK".to_string()).is_ok());
        assert!(check_status(true, 204, "No Content".to_string()).is_ok());
    }

    #[test]
    fn test_check_status_rejects_failure() {
        let err = check_status(false, 403, "Forbidden".to_string()).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Status { status: 403, ref status_text } if status_text == "Forbidden"
        ));

        let err = check_status(false, 500, "Internal Server Error".to_string()).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }
}
