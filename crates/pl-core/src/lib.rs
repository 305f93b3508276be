//! pl-core: shared foundation for phaseline.
//!
//! Contains:
//! - units (uom SI pressure + constructors, specific volume alias)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::CoreError;
pub use numeric::*;
pub use units::*;
