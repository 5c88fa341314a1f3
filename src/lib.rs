pub mod airfoil;
pub mod convert;
pub mod errors;
pub mod geometry;

pub use airfoil::{Airfoil, Format, SUPPORTED_FORMATS};
pub use errors::{AirfoilError, Result};
