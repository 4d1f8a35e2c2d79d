//! Constructors handlers use to signal domain failures
//!
//! Each returns a `Status` with the fixed code of its `ErrorKind`. They never
//! fail and have no side effects.

use std::fmt::Display;

use crate::{ErrorKind, Status};

/// Creating a resource that already exists
pub fn already_exists(id: impl Display) -> Status {
    Status::new(ErrorKind::AlreadyExists.code(), format!("resource already exists: {id}"))
}

/// Updating a resource with an old version
pub fn version_mismatch(msg: impl Into<String>) -> Status {
    Status::new(ErrorKind::VersionMismatch.code(), msg)
}

/// Looking up a resource that doesn't exist
pub fn not_found(id: impl Display) -> Status {
    Status::new(ErrorKind::NotFound.code(), format!("resource not found: {id}"))
}

/// Bad request parameters supplied by the caller
pub fn bad_request(msg: impl Into<String>) -> Status {
    Status::new(ErrorKind::BadRequest.code(), msg)
}

/// Internal server error
///
/// `msg` is discarded: the caller only ever sees the generic internal error.
/// Return the underlying error as an opaque failure instead when the detail
/// needs to reach the logs.
pub fn internal(_msg: impl Into<String>) -> Status {
    Status::generic_internal()
}

/// Too many resources created in a given area
pub fn exhausted(msg: impl Into<String>) -> Status {
    Status::new(ErrorKind::Exhausted.code(), msg)
}

/// Caller may not modify a resource owned by someone else
pub fn permission_denied(msg: impl Into<String>) -> Status {
    Status::new(ErrorKind::PermissionDenied.code(), msg)
}

/// Credentials invalid or not supplied
pub fn unauthenticated(msg: impl Into<String>) -> Status {
    Status::new(ErrorKind::Unauthenticated.code(), msg)
}

/// Requested area is larger than the maximum allowed
///
/// Emits `Code::AREA_TOO_LARGE`, which the HTTP gateway turns into 413.
pub fn area_too_large(msg: impl Into<String>) -> Status {
    Status::new(ErrorKind::AreaTooLarge.code(), msg)
}
