use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use tonic::metadata::{MetadataMap, MetadataValue};

use crate::{Code, ErrorKind};

/// Message carried by every status that must not leak detail
pub const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// Metadata key that carries an extension code through `tonic::Status`
///
/// tonic can only represent the standard codes, so an extension status travels
/// as `Unknown` plus this key until the boundary writes the real code into
/// `grpc-status`.
pub const EXTENSION_CODE_KEY: &str = "dss-extension-code";

const GRPC_STATUS: &str = "grpc-status";

/// Structured error value that crosses the RPC boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct Status {
    code: Code,
    message: String,
    details: Bytes,
}

/// A `grpc-status` header that cannot be read as a status
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// Header value is not an integer
    #[error("invalid grpc-status header: {0:?}")]
    InvalidCode(String),
}

impl Status {
    /// Create a status without details
    pub fn new(code: impl Into<Code>, message: impl Into<String>) -> Self {
        Self::with_details(code, message, Bytes::new())
    }

    /// Create a status with an encoded detail payload
    pub fn with_details(code: impl Into<Code>, message: impl Into<String>, details: Bytes) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details,
        }
    }

    /// The generic internal error returned whenever detail must not reach the caller
    #[must_use]
    pub fn generic_internal() -> Self {
        Self::new(tonic::Code::Internal, INTERNAL_MESSAGE)
    }

    #[must_use]
    pub const fn code(&self) -> Code {
        self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Encoded detail payload (`grpc-status-details-bin`), empty if none
    #[must_use]
    pub const fn details(&self) -> &Bytes {
        &self.details
    }

    /// Domain kind owning this status's code
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        ErrorKind::from_code(self.code)
    }

    /// Encode as a trailers-only gRPC response
    ///
    /// `grpc-status` carries the raw code, including extension codes tonic
    /// itself cannot emit.
    #[must_use]
    pub fn into_http<B: Default>(self) -> http::Response<B> {
        let code = self.code;
        let mut response = tonic::Status::from(self).into_http::<B>();

        if code.is_extension() {
            let headers = response.headers_mut();
            headers.remove(EXTENSION_CODE_KEY);
            headers.insert(GRPC_STATUS, HeaderValue::from(code.value()));
        }

        response
    }

    /// Decode the status of a trailers-only gRPC response
    ///
    /// Returns `Ok(None)` when the headers carry no `grpc-status` (the status,
    /// if any, follows in the body trailers). A status of `Ok` decodes as
    /// `Some` with code `Ok`.
    ///
    /// # Errors
    ///
    /// Returns `WireError::InvalidCode` if `grpc-status` is not an integer
    pub fn from_headers(headers: &HeaderMap) -> Result<Option<Self>, WireError> {
        let Some(raw) = headers.get(GRPC_STATUS) else {
            return Ok(None);
        };

        let value: i32 = raw
            .to_str()
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .ok_or_else(|| WireError::InvalidCode(String::from_utf8_lossy(raw.as_bytes()).into_owned()))?;

        let mut code = Code::from_i32(value);
        if code == tonic::Code::Unknown.into()
            && let Some(extension) = headers
                .get(EXTENSION_CODE_KEY)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_extension)
        {
            code = extension;
        }

        // tonic decodes grpc-message and the details payload; its own code is
        // ignored because it collapses extension values to `Unknown`
        let decoded = tonic::Status::from_header_map(headers);
        let (message, details) = decoded.map_or_else(
            || (String::new(), Bytes::new()),
            |s| (s.message().to_owned(), Bytes::copy_from_slice(s.details())),
        );

        Ok(Some(Self { code, message, details }))
    }
}

/// Parse an extension marker
///
/// Only extension codes owned by an `ErrorKind` are honoured. Anything else,
/// standard codes included, leaves the status as `Unknown`.
fn parse_extension(raw: &str) -> Option<Code> {
    let code = Code::from_i32(raw.trim().parse().ok()?);
    (code.is_extension() && ErrorKind::from_code(code).is_some()).then_some(code)
}

impl From<Status> for tonic::Status {
    fn from(status: Status) -> Self {
        match status.code.standard() {
            Some(code) => Self::with_details(code, status.message, status.details),
            None => {
                let mut metadata = MetadataMap::new();
                metadata.insert(EXTENSION_CODE_KEY, MetadataValue::from(status.code.value()));
                Self::with_details_and_metadata(tonic::Code::Unknown, status.message, status.details, metadata)
            }
        }
    }
}

impl From<&tonic::Status> for Status {
    fn from(status: &tonic::Status) -> Self {
        let mut code = Code::from(status.code());
        if status.code() == tonic::Code::Unknown
            && let Some(extension) = status
                .metadata()
                .get(EXTENSION_CODE_KEY)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_extension)
        {
            code = extension;
        }

        Self {
            code,
            message: status.message().to_owned(),
            details: Bytes::copy_from_slice(status.details()),
        }
    }
}

impl From<tonic::Status> for Status {
    fn from(status: tonic::Status) -> Self {
        Self::from(&status)
    }
}
