//! vec4kit - homogeneous point tooling built on [`vec4kit_math::Vector4`]

pub mod config;
pub mod report;

pub use vec4kit_math::Vector4;
