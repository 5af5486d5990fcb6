//! Product-specific domain logic, including stock adjustment and the catalog error taxonomy.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
