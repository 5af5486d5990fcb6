//! Credential checks and the role guard shared by every mutating catalog operation.

pub mod error;
pub mod guard;
pub mod store;

pub use error::*;
pub use guard::*;
pub use store::*;
