//! Stand-in for a tonic-generated service
//!
//! Routes on the request path and encodes handler errors the way tonic's
//! generated server code does: `tonic::Status::into_http`.

use futures::future::BoxFuture;

/// Outcome a fake handler produces for a method
pub enum Handler {
    Respond(&'static str),
    Fail(tonic::Status),
    Crash(&'static str),
}

/// Build a service that dispatches every call to `route(path)`
pub fn service(
    route: fn(&str) -> Handler,
) -> impl tower::Service<
    http::Request<()>,
    Response = http::Response<String>,
    Error = std::io::Error,
    Future = BoxFuture<'static, Result<http::Response<String>, std::io::Error>>,
> + Clone {
    tower::service_fn(move |request: http::Request<()>| {
        let handler = route(request.uri().path());

        Box::pin(async move {
            match handler {
                Handler::Respond(body) => Ok(http::Response::new(body.to_owned())),
                Handler::Fail(status) => Ok(status.into_http()),
                Handler::Crash(reason) => Err(std::io::Error::other(reason)),
            }
        }) as BoxFuture<'static, _>
    })
}

/// Request for a method path
pub fn call(method: &str) -> http::Request<()> {
    http::Request::builder()
        .method(http::Method::POST)
        .uri(format!("http://dss.local{method}"))
        .header("content-type", "application/grpc")
        .body(())
        .unwrap()
}
