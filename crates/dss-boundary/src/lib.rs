//! Error boundary for the DSS gRPC server
//!
//! Every response leaving the server passes through [`Boundary`]: domain
//! statuses built with the `dss_errors` constructors reach the caller as-is,
//! while internal statuses and unclassified errors are logged and replaced by
//! the generic internal error.

#![allow(clippy::must_use_candidate)]

mod boundary;
mod error;
mod layer;
mod reporter;

pub use boundary::{Boundary, CallInfo, Outcome, classify};
pub use error::{BoxError, CallError};
pub use layer::{BoundaryLayer, BoundaryService, classify_response};
pub use reporter::{Reporter, TracingReporter};

/// Build the layer registered once on the server at startup
pub fn interceptor<R: Reporter>(reporter: R) -> BoundaryLayer<R> {
    BoundaryLayer::new(Boundary::new(reporter))
}
