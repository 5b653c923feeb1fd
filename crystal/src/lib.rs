mod geometry;
mod norm;
mod scalar;
#[cfg(feature = "serde-serialize")]
mod serde;
mod vector;

#[cfg(test)]
mod test_util;

pub mod prelude {
    pub use crate::geometry::{vertex_normals, Aabb};
    pub use crate::norm::Normed;
    pub use crate::scalar::{Abs, One, Zero};
    pub use crate::vector::{Vec2, Vec3};
}
