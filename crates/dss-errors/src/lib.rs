//! Error taxonomy for DSS RPC handlers
//!
//! Handlers signal failures through the constructors re-exported here. The
//! resulting `Status` converts into `tonic::Status` for use in generated
//! service traits.

#![allow(clippy::must_use_candidate)]

mod code;
mod constructors;
mod kind;
mod status;

pub use code::Code;
pub use constructors::*;
pub use kind::ErrorKind;
pub use status::{EXTENSION_CODE_KEY, INTERNAL_MESSAGE, Status, WireError};
