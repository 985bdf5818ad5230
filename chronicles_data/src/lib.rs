//! Content catalog for Chronicles of Forgotten Lands.

pub mod catalog;
pub mod defs;
pub mod validate;

pub use catalog::*;
pub use defs::*;
pub use validate::{ValidationError, validate_catalog};
