//! 4-component vector math
//!
//! This crate provides the [`Vector4`] value type used for homogeneous
//! coordinates, clip-space positions and RGBA colours.
//!
//! ## Core Types
//!
//! - [`Vector4`] - x, y, z, w vector with a chainable in-place API
//! - [`Operand`] - right-hand side of component-wise operations
//!   (another vector, four components, or a broadcast scalar)
//! - [`Component`] - named component slot, convertible from a position
//! - [`ComponentIndexError`] - returned for positions outside `0..4`

mod component;
mod component_error;
mod operand;
mod vector4;

pub use component::Component;
pub use component_error::ComponentIndexError;
pub use operand::Operand;
pub use vector4::{Vector4, DEFAULT_EPSILON};
