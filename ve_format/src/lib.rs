pub mod color;
pub mod error;
pub mod material;
pub mod mesh;
pub mod model;

pub use error::{FormatError, Result};
