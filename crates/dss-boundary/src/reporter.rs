use std::error::Error;
use std::sync::Arc;

use dss_errors::Status;

/// Logging collaborator the boundary reports failures to
///
/// Called at most once per call, concurrently from many calls.
pub trait Reporter: Send + Sync + 'static {
    /// A handler failed with an error that is not a status
    fn opaque_failure(&self, method: &str, error: &(dyn Error + 'static));

    /// A handler failed with an `Internal` or `Unknown` status
    fn internal_failure(&self, method: &str, status: &Status);
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn opaque_failure(&self, method: &str, error: &(dyn Error + 'static)) {
        (**self).opaque_failure(method, error);
    }

    fn internal_failure(&self, method: &str, status: &Status) {
        (**self).internal_failure(method, status);
    }
}

/// Reporter that emits `tracing` error events
///
/// Internal-failure events carry `method`, `code`, `status_message`, `details`
/// and `error`. `details` is the encoded `grpc-status-details-bin` payload as
/// received, not decoded detail messages.
#[derive(Debug, Clone, Default)]
pub struct TracingReporter;

impl TracingReporter {
    pub const fn new() -> Self {
        Self
    }
}

impl Reporter for TracingReporter {
    fn opaque_failure(&self, method: &str, error: &(dyn Error + 'static)) {
        tracing::error!(method, error = %error, "encountered error during unary server call");
    }

    fn internal_failure(&self, method: &str, status: &Status) {
        tracing::error!(
            method,
            code = %status.code(),
            status_message = status.message(),
            details = ?status.details(),
            error = %status,
            "encountered internal error during unary server call"
        );
    }
}
