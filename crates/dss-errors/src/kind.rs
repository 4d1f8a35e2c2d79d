use strum::{Display, EnumIter};

use crate::Code;

/// Domain failure kinds a handler can signal
///
/// Every kind except `Internal` is safe to expose to callers: its message is
/// written by the handler author for external consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ErrorKind {
    /// Creating a resource that already exists
    AlreadyExists,
    /// Updating a resource from a stale version
    VersionMismatch,
    /// Looking up a resource that doesn't exist
    NotFound,
    /// Invalid request parameters
    BadRequest,
    /// Server defect; never exposes detail
    Internal,
    /// Too many resources of a kind in a bounded area or quota
    Exhausted,
    /// Authenticated, but not allowed to touch this resource
    PermissionDenied,
    /// Missing or invalid credentials
    Unauthenticated,
    /// Requested area exceeds the configured maximum
    AreaTooLarge,
}

impl ErrorKind {
    /// Fixed status code for this kind
    #[must_use]
    pub fn code(self) -> Code {
        match self {
            Self::AlreadyExists => tonic::Code::AlreadyExists.into(),
            Self::VersionMismatch => tonic::Code::Aborted.into(),
            Self::NotFound => tonic::Code::NotFound.into(),
            Self::BadRequest => tonic::Code::InvalidArgument.into(),
            Self::Internal => tonic::Code::Internal.into(),
            Self::Exhausted => tonic::Code::ResourceExhausted.into(),
            Self::PermissionDenied => tonic::Code::PermissionDenied.into(),
            Self::Unauthenticated => tonic::Code::Unauthenticated.into(),
            Self::AreaTooLarge => Code::AREA_TOO_LARGE,
        }
    }

    /// Kind owning the given code, if any
    #[must_use]
    pub fn from_code(code: Code) -> Option<Self> {
        use strum::IntoEnumIterator;

        Self::iter().find(|kind| kind.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn codes_are_distinct() {
        let codes: HashSet<_> = ErrorKind::iter().map(ErrorKind::code).collect();
        assert_eq!(codes.len(), ErrorKind::iter().count());
    }

    #[test]
    fn only_area_too_large_uses_the_extension_code() {
        let extension: Vec<_> = ErrorKind::iter()
            .filter(|kind| kind.code() == Code::AREA_TOO_LARGE)
            .collect();
        assert_eq!(extension, vec![ErrorKind::AreaTooLarge]);
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(
            ErrorKind::from_code(tonic::Code::Aborted.into()),
            Some(ErrorKind::VersionMismatch)
        );
        assert_eq!(ErrorKind::from_code(Code::AREA_TOO_LARGE), Some(ErrorKind::AreaTooLarge));
        assert_eq!(ErrorKind::from_code(tonic::Code::Unknown.into()), None);
    }
}
