#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod matrix;
mod number_traits;
pub mod quaternion;
pub mod vector;

pub use error::MathError;
pub use matrix::{Identity, Matrix4};
pub use number_traits::Float;
pub use quaternion::Quaternion;
pub use vector::{Vector3, Vector4};
