//! Right-hand operands for component-wise vector operations
//!
//! Every component-wise mutator on [`Vector4`] takes `impl Into<Operand>`, so
//! callers can pass another vector, four explicit components (an array or a
//! tuple), or a single scalar that is broadcast to all four slots.

use crate::Vector4;

/// Operand of a component-wise operation
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    /// One value applied to every component
    Uniform(f32),
    /// Per-component values
    Components(Vector4),
}

impl Operand {
    /// Expand into a full vector (uniform values are broadcast)
    #[inline]
    pub fn to_vector(self) -> Vector4 {
        match self {
            Operand::Uniform(f) => Vector4::splat(f),
            Operand::Components(v) => v,
        }
    }
}

impl From<f32> for Operand {
    #[inline]
    fn from(f: f32) -> Self {
        Operand::Uniform(f)
    }
}

impl From<Vector4> for Operand {
    #[inline]
    fn from(v: Vector4) -> Self {
        Operand::Components(v)
    }
}

impl From<&Vector4> for Operand {
    #[inline]
    fn from(v: &Vector4) -> Self {
        Operand::Components(*v)
    }
}

impl From<[f32; 4]> for Operand {
    #[inline]
    fn from(c: [f32; 4]) -> Self {
        Operand::Components(Vector4::from(c))
    }
}

impl From<(f32, f32, f32, f32)> for Operand {
    #[inline]
    fn from((x, y, z, w): (f32, f32, f32, f32)) -> Self {
        Operand::Components(Vector4::new(x, y, z, w))
    }
}
