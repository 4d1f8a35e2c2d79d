use std::fmt;

/// Raw status code as carried in the `grpc-status` header
///
/// The standard codes are tonic's `tonic::Code` (0 through 16). Values outside
/// that range are kept verbatim rather than collapsed to `Unknown`, so the
/// extension code survives classification and re-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(i32);

/// Highest code assigned by the standard gRPC code set (`Unauthenticated`)
const LAST_STANDARD: i32 = 16;

impl Code {
    /// Area-too-large extension code
    ///
    /// Wire contract with the HTTP gateway, which answers 413 Payload Too
    /// Large for it. Pinned to 18: other status code sets may assign meaning
    /// to the same integer, so it must never be renumbered or replaced by an
    /// enum member.
    pub const AREA_TOO_LARGE: Self = Self(18);

    /// Wrap a raw wire value
    #[must_use]
    pub const fn from_i32(value: i32) -> Self {
        Self(value)
    }

    /// The raw wire value
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// The matching standard code, if the value is one
    #[must_use]
    pub fn standard(self) -> Option<tonic::Code> {
        (0..=LAST_STANDARD).contains(&self.0).then(|| tonic::Code::from_i32(self.0))
    }

    /// Whether the value lies outside the standard code set
    #[must_use]
    pub const fn is_extension(self) -> bool {
        self.0 < 0 || self.0 > LAST_STANDARD
    }

    /// Whether the code signals a server defect rather than a domain failure
    #[must_use]
    pub fn is_internal(self) -> bool {
        matches!(self.standard(), Some(tonic::Code::Internal | tonic::Code::Unknown))
    }

    /// Canonical name, if the code has one
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        if self == Self::AREA_TOO_LARGE {
            return Some("AreaTooLarge");
        }

        let name = match self.standard()? {
            tonic::Code::Ok => "Ok",
            tonic::Code::Cancelled => "Cancelled",
            tonic::Code::Unknown => "Unknown",
            tonic::Code::InvalidArgument => "InvalidArgument",
            tonic::Code::DeadlineExceeded => "DeadlineExceeded",
            tonic::Code::NotFound => "NotFound",
            tonic::Code::AlreadyExists => "AlreadyExists",
            tonic::Code::PermissionDenied => "PermissionDenied",
            tonic::Code::ResourceExhausted => "ResourceExhausted",
            tonic::Code::FailedPrecondition => "FailedPrecondition",
            tonic::Code::Aborted => "Aborted",
            tonic::Code::OutOfRange => "OutOfRange",
            tonic::Code::Unimplemented => "Unimplemented",
            tonic::Code::Internal => "Internal",
            tonic::Code::Unavailable => "Unavailable",
            tonic::Code::DataLoss => "DataLoss",
            tonic::Code::Unauthenticated => "Unauthenticated",
        };

        Some(name)
    }
}

impl From<tonic::Code> for Code {
    fn from(code: tonic::Code) -> Self {
        Self(code as i32)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Code({})", self.0),
        }
    }
}
