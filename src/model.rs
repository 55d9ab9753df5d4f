use serde_json::json;
use thiserror::Error;

/// The invocation payload for an existence check.
///
/// Both fields are required by the contract, but they are modeled as optional
/// so partial events still deserialize and absence is reported through a
/// structured 400 response rather than a deserialization failure.
#[derive(Debug, serde::Deserialize)]
pub struct CheckFileRequest {
    /// The bucket to look in.
    #[serde(default)]
    pub bucket: Option<String>,
    /// The key of the object within the bucket.
    #[serde(default)]
    pub file_key: Option<String>,
}

/// A required request field that was absent from the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Missing required field: '{0}'")]
pub struct MissingField(pub &'static str);

/// A request whose required fields were all present.
#[derive(Debug)]
pub struct ValidatedRequest<'a> {
    pub bucket: &'a str,
    pub file_key: &'a str,
}

impl CheckFileRequest {
    /// Checks that both required fields are present, reporting the first one
    /// found missing. `bucket` is checked before `file_key`.
    ///
    /// Presence is the only local validation; empty or malformed values are
    /// left for the storage service to reject.
    pub fn validated(&self) -> Result<ValidatedRequest<'_>, MissingField> {
        let bucket = self.bucket.as_deref().ok_or(MissingField("bucket"))?;
        let file_key = self.file_key.as_deref().ok_or(MissingField("file_key"))?;

        Ok(ValidatedRequest { bucket, file_key })
    }
}

/// The body of a successful check, JSON-encoded into [`CheckFileResponse`].
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct FileExistsBody {
    /// Whether the object exists in the bucket.
    pub file_exists: bool,
    /// Echo of the requested bucket.
    pub bucket: String,
    /// Echo of the requested key.
    pub file_key: String,
}

#[derive(Debug, serde::Serialize)]
pub struct ResponseHeaders {
    #[serde(rename = "Content-Type")]
    pub content_type: &'static str,
}

impl Default for ResponseHeaders {
    fn default() -> Self {
        Self {
            content_type: "application/json",
        }
    }
}

/// The invocation response: an HTTP-style status code, headers, and a
/// JSON-encoded string body.
#[derive(Debug, serde::Serialize)]
pub struct CheckFileResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: ResponseHeaders,
    pub body: String,
}

impl CheckFileResponse {
    /// A 200 response wrapping an already-encoded body.
    pub fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            headers: ResponseHeaders::default(),
            body,
        }
    }

    /// A 400 response for a request that failed validation.
    pub fn bad_request(message: &str) -> Self {
        Self::error_response(400, message)
    }

    /// A 500 response for a fault outside the validation and lookup paths.
    pub fn internal_error(message: &str) -> Self {
        Self::error_response(500, message)
    }

    fn error_response(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            headers: ResponseHeaders::default(),
            body: json!({ "error": message }).to_string(),
        }
    }
}
