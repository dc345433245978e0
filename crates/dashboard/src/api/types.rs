//! Transport-neutral request and response types.

use core::fmt;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use super::error::ApiError;

/// HTTP methods used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    Post,
    Patch,
    Delete,
}

impl ApiMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request against the backend, relative to the API origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: ApiMethod,
    /// Absolute path, e.g. `/api/stores`.
    pub path: String,
    /// JSON body, if any.
    pub body: Option<JsonValue>,
}

impl ApiRequest {
    #[must_use]
    pub const fn post(path: String, body: JsonValue) -> Self {
        Self {
            method: ApiMethod::Post,
            path,
            body: Some(body),
        }
    }

    #[must_use]
    pub const fn patch(path: String, body: JsonValue) -> Self {
        Self {
            method: ApiMethod::Patch,
            path,
            body: Some(body),
        }
    }

    #[must_use]
    pub const fn delete(path: String) -> Self {
        Self {
            method: ApiMethod::Delete,
            path,
            body: None,
        }
    }
}

/// A raw backend response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Turn a non-2xx response into [`ApiError::Status`].
    ///
    /// The message is taken from a `{"error": "..."}` body when present,
    /// otherwise the trimmed body text is used as-is.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` for any status outside 200-299.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            return Ok(self);
        }

        let message = serde_json::from_str::<ErrorBody>(&self.body)
            .map(|b| b.error)
            .unwrap_or_else(|_| self.body.trim().to_string());

        Err(ApiError::Status {
            status: self.status,
            message,
        })
    }

    /// Deserialize the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Response` if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Response(e.to_string()))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// The part of a create response the dashboard consumes.
///
/// The backend returns the full record; only `id` is read, for post-create
/// navigation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedResource<Id> {
    pub id: Id,
}
