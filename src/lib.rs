pub mod error;
pub mod io;
pub mod math;
pub mod render;
pub mod topology;

pub use error::{PlaneviewError, Result};
