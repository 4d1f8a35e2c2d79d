use std::error::Error;
use std::sync::Arc;

use dss_errors::Status;

use crate::{CallError, Reporter, TracingReporter};

/// Terminal state of a single call as seen by the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Handler succeeded; response passes through
    Success,
    /// Handler returned a domain status; passes through unlogged
    DomainFailure,
    /// Handler returned an `Internal` or `Unknown` status; logged and replaced
    DeclaredInternalFailure,
    /// Handler failed with something that is not a status; logged and replaced
    OpaqueFailure,
}

/// Classify a handler result without acting on it
pub fn classify<T>(result: &Result<T, CallError>) -> Outcome {
    match result {
        Ok(_) => Outcome::Success,
        Err(CallError::Unclassified(_)) => Outcome::OpaqueFailure,
        Err(CallError::Classified(status)) if status.code().is_internal() => Outcome::DeclaredInternalFailure,
        Err(CallError::Classified(_)) => Outcome::DomainFailure,
    }
}

/// Identity of the call being intercepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallInfo {
    /// Full method name, e.g. `/dss.v1.DiscoveryAndSynchronizationService/GetSubscription`
    pub full_method: String,
}

impl CallInfo {
    pub fn new(full_method: impl Into<String>) -> Self {
        Self {
            full_method: full_method.into(),
        }
    }

    /// Read the method name from a gRPC request path
    pub fn from_request<B>(request: &http::Request<B>) -> Self {
        Self::new(request.uri().path())
    }
}

/// Error boundary applied to every outgoing response
///
/// Domain statuses pass through untouched. Anything else is reported to the
/// `Reporter` and replaced by `Status::generic_internal()`. Holds no per-call
/// state; clones share the reporter.
#[derive(Debug)]
pub struct Boundary<R = TracingReporter> {
    reporter: Arc<R>,
}

impl<R> Clone for Boundary<R> {
    fn clone(&self) -> Self {
        Self {
            reporter: Arc::clone(&self.reporter),
        }
    }
}

impl<R: Reporter> Boundary<R> {
    pub fn new(reporter: R) -> Self {
        Self {
            reporter: Arc::new(reporter),
        }
    }

    /// Apply the disclosure policy to a handler result
    ///
    /// # Errors
    ///
    /// Returns the handler's status for domain failures and the generic
    /// internal status for every other failure
    pub fn intercept<T>(&self, info: &CallInfo, result: Result<T, CallError>) -> Result<T, Status> {
        match result {
            Ok(response) => Ok(response),
            Err(CallError::Unclassified(error)) => {
                self.report_opaque(info, &*error);
                Err(Status::generic_internal())
            }
            Err(CallError::Classified(status)) if status.code().is_internal() => {
                self.report_internal(info, &status);
                Err(Status::generic_internal())
            }
            Err(CallError::Classified(status)) => Err(status),
        }
    }

    /// Run `handler` and intercept its result
    ///
    /// # Errors
    ///
    /// Same as [`Boundary::intercept`]
    pub async fn around<Req, Resp, F, Fut>(&self, info: &CallInfo, request: Req, handler: F) -> Result<Resp, Status>
    where
        F: FnOnce(Req) -> Fut,
        Fut: Future<Output = Result<Resp, CallError>>,
    {
        let result = handler(request).await;
        self.intercept(info, result)
    }

    pub(crate) fn report_opaque(&self, info: &CallInfo, error: &(dyn Error + 'static)) {
        self.reporter.opaque_failure(&info.full_method, error);
    }

    pub(crate) fn report_internal(&self, info: &CallInfo, status: &Status) {
        self.reporter.internal_failure(&info.full_method, status);
    }
}
