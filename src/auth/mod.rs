pub mod error;
pub mod params;
pub mod revocation;

pub use error::{Error, InvalidArgument, MalformedInput};
pub use revocation::*;
