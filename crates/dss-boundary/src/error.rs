use dss_errors::Status;

/// Boxed error produced by handlers and inner services
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error returned by a handler before it reaches the boundary
///
/// `Classified` carries a status built deliberately by the handler.
/// `Unclassified` is anything else; the boundary logs it and never lets it
/// reach the caller.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    #[error(transparent)]
    Classified(#[from] Status),

    #[error("{0}")]
    Unclassified(BoxError),
}

impl CallError {
    /// Wrap an error the handler did not classify
    pub fn opaque(error: impl Into<BoxError>) -> Self {
        Self::Unclassified(error.into())
    }
}

impl From<tonic::Status> for CallError {
    fn from(status: tonic::Status) -> Self {
        Self::Classified(status.into())
    }
}
