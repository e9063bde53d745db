//! Backend API Contract
//!
//! The four CRUD operations the dashboard needs, the routes they map to,
//! and how a failed HTTP response becomes an [`ApiError`].

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{StudentDraft, StudentId, StudentRecord};

/// A failed backend operation. Every variant is shown to the user as a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, timeout)
    #[error("{0}")]
    Network(String),

    /// Non-2xx response
    #[error("Status: {status}. {message}")]
    Server { status: u16, message: String },

    /// 404 on an id-addressed operation
    #[error("Status: 404. {message}")]
    NotFound { message: String },

    /// 2xx whose body was not the expected JSON
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Body text of a failed response. A body that cannot be read is logged
/// and treated as empty.
pub fn failure_body<E: fmt::Display>(status: u16, body: Result<String, E>) -> String {
    body.unwrap_or_else(|e| {
        log::warn!("[API] Could not read the {} response body: {}", status, e);
        String::new()
    })
}

/// Turn a non-2xx response into an error.
///
/// JSON bodies contribute their `message` field; anything else contributes
/// the raw body text. An empty detail falls back to `HTTP {status}`.
pub fn classify_failure(status: u16, content_type: Option<&str>, body: &str) -> ApiError {
    let is_json = content_type.is_some_and(|ct| ct.contains("application/json"));
    let detail = if is_json {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_owned))
            .unwrap_or_else(|| body.to_string())
    } else {
        body.to_string()
    };
    let message = if detail.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        detail
    };

    if status == 404 {
        ApiError::NotFound { message }
    } else {
        ApiError::Server { status, message }
    }
}

/// Student CRUD backend.
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait StudentApi {
    /// GET the full list
    async fn list(&self) -> ApiResult<Vec<StudentRecord>>;

    /// POST a new record; the response carries the assigned id
    async fn create(&self, draft: &StudentDraft) -> ApiResult<StudentRecord>;

    /// PUT new values for an existing id
    async fn update(&self, id: StudentId, draft: &StudentDraft) -> ApiResult<StudentRecord>;

    /// DELETE by id; any 2xx is success
    async fn delete(&self, id: StudentId) -> ApiResult<()>;
}

/// Endpoint URLs under the configured base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    base: String,
}

impl Routes {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn list(&self) -> String {
        format!("{}/students", self.base)
    }

    pub fn create(&self) -> String {
        format!("{}/add", self.base)
    }

    pub fn update(&self, id: StudentId) -> String {
        format!("{}/update/{}", self.base, id)
    }

    pub fn delete(&self, id: StudentId) -> String {
        format!("{}/delete/{}", self.base, id)
    }
}
