//! Vector and matrix kernel for interactive 3D graphics.

#[macro_use]
mod macros;

pub mod angle;
pub mod camera;
pub mod error;
pub mod layout;
pub mod matrix;
pub mod transform;
pub mod vector;

pub use error::MathError;
pub use matrix::Matrix4;
pub use vector::Vector4;
