use std::task::{Context, Poll};

use dss_errors::{Code, EXTENSION_CODE_KEY, Status, WireError};
use futures::future::BoxFuture;
use http::HeaderValue;
use tower::{Layer, Service};

use crate::{BoxError, Boundary, CallInfo, Outcome, Reporter};

/// Tower layer installing the boundary around a tonic server's services
///
/// ```ignore
/// tonic::transport::Server::builder()
///     .layer(dss_boundary::interceptor(TracingReporter::new()))
///     .add_service(service)
/// ```
#[derive(Debug)]
pub struct BoundaryLayer<R> {
    boundary: Boundary<R>,
}

impl<R> Clone for BoundaryLayer<R> {
    fn clone(&self) -> Self {
        Self {
            boundary: self.boundary.clone(),
        }
    }
}

impl<R: Reporter> BoundaryLayer<R> {
    pub const fn new(boundary: Boundary<R>) -> Self {
        Self { boundary }
    }
}

impl<S, R: Reporter> Layer<S> for BoundaryLayer<R> {
    type Service = BoundaryService<S, R>;

    fn layer(&self, inner: S) -> Self::Service {
        BoundaryService {
            inner,
            boundary: self.boundary.clone(),
        }
    }
}

/// Service produced by [`BoundaryLayer`]
#[derive(Debug)]
pub struct BoundaryService<S, R> {
    inner: S,
    boundary: Boundary<R>,
}

impl<S: Clone, R> Clone for BoundaryService<S, R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            boundary: self.boundary.clone(),
        }
    }
}

impl<S, R, ReqBody, ResBody> Service<http::Request<ReqBody>> for BoundaryService<S, R>
where
    S: Service<http::Request<ReqBody>, Response = http::Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: Into<BoxError>,
    R: Reporter,
    ResBody: Default + Send + 'static,
{
    type Response = http::Response<ResBody>;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, request: http::Request<ReqBody>) -> Self::Future {
        let info = CallInfo::from_request(&request);
        let boundary = self.boundary.clone();
        let future = self.inner.call(request);

        Box::pin(async move {
            let response = match future.await {
                Ok(response) => response,
                Err(error) => {
                    let error: BoxError = error.into();
                    boundary.report_opaque(&info, &*error);
                    return Ok(Status::generic_internal().into_http());
                }
            };

            Ok(screen(&boundary, &info, response))
        })
    }
}

/// Classify a trailers-only gRPC response
pub fn classify_response<B>(response: &http::Response<B>) -> Outcome {
    match Status::from_headers(response.headers()) {
        Ok(None) => Outcome::Success,
        Ok(Some(status)) => outcome_of(&status),
        Err(_) => Outcome::OpaqueFailure,
    }
}

fn outcome_of(status: &Status) -> Outcome {
    if status.code() == Code::from(tonic::Code::Ok) {
        Outcome::Success
    } else if status.code().is_internal() {
        Outcome::DeclaredInternalFailure
    } else {
        Outcome::DomainFailure
    }
}

/// Apply the disclosure policy to a response leaving the server
fn screen<R: Reporter, B: Default>(
    boundary: &Boundary<R>,
    info: &CallInfo,
    mut response: http::Response<B>,
) -> http::Response<B> {
    let status = match Status::from_headers(response.headers()) {
        // Status, if any, travels in the body trailers
        Ok(None) => return response,
        Ok(Some(status)) => status,
        Err(error @ WireError::InvalidCode(_)) => {
            boundary.report_opaque(info, &error);
            return Status::generic_internal().into_http();
        }
    };

    match outcome_of(&status) {
        Outcome::DeclaredInternalFailure => {
            boundary.report_internal(info, &status);
            Status::generic_internal().into_http()
        }
        Outcome::DomainFailure if status.code().is_extension() => {
            let headers = response.headers_mut();
            headers.remove(EXTENSION_CODE_KEY);
            headers.insert("grpc-status", HeaderValue::from(status.code().value()));
            response
        }
        _ => {
            response.headers_mut().remove(EXTENSION_CODE_KEY);
            response
        }
    }
}
