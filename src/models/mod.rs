//! Wire and form types shared by the triage core, the HTTP client and the
//! session.

pub mod enums;
pub mod extraction;
pub mod form;
pub mod payload;
pub mod response;

pub use enums::*;
pub use extraction::*;
pub use form::*;
pub use payload::*;
pub use response::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid value for {field}: {value}")]
    InvalidChoice { field: String, value: String },
}
