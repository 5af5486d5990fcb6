//! Pure data structures shared by the catalog actor, the auth store and the console.

pub mod principal;
pub mod product;

pub use principal::*;
pub use product::*;
