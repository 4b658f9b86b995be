//! 4-component single-precision vector type

use std::fmt;
use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{Component, ComponentIndexError, Operand};

/// Tolerance used by [`Vector4::equals_approx`]
pub const DEFAULT_EPSILON: f32 = 1e-5;

/// 4-component vector with x, y, z, w components
///
/// Commonly a homogeneous point (w = 1), a direction (w = 0), or an RGBA colour.
/// Mutators work in place and return `&mut Self` so calls can be chained:
///
/// ```
/// use vec4kit_math::Vector4;
/// let mut v = Vector4::new(2.0, 4.0, 6.0, 2.0);
/// v.homogenize().add(1.0);
/// assert_eq!(v, Vector4::new(2.0, 3.0, 4.0, 2.0));
/// ```
///
/// Nothing here guards against zero or negative domains; division, `log`,
/// `pow` and `exp` produce NaN or infinity the way IEEE-754 does.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    pub const NUM_COMPONENTS: usize = 4;

    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0, w: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0, w: 0.0 };
    pub const W: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new Vector4
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Vector with every component set to `f`
    #[inline]
    pub const fn splat(f: f32) -> Self {
        Self::new(f, f, f, f)
    }

    /// Number of components, always 4
    #[inline]
    pub const fn size(&self) -> usize {
        Self::NUM_COMPONENTS
    }

    // Setters

    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        self
    }

    /// Set every component to `f`
    #[inline]
    pub fn set_all(&mut self, f: f32) -> &mut Self {
        self.set(f, f, f, f)
    }

    /// Copy another vector's components into this one
    #[inline]
    pub fn set_from(&mut self, v: impl Into<Operand>) -> &mut Self {
        *self = v.into().to_vector();
        self
    }

    #[inline]
    pub fn set_zero(&mut self) -> &mut Self {
        self.set_all(0.0)
    }

    /// `self = s * v`
    #[inline]
    pub fn set_multiple(&mut self, s: f32, v: impl Into<Operand>) -> &mut Self {
        let v = v.into().to_vector();
        self.set(s * v.x, s * v.y, s * v.z, s * v.w)
    }

    // Component-wise arithmetic

    #[inline]
    fn zip_with(&mut self, rhs: Vector4, f: impl Fn(f32, f32) -> f32) -> &mut Self {
        self.x = f(self.x, rhs.x);
        self.y = f(self.y, rhs.y);
        self.z = f(self.z, rhs.z);
        self.w = f(self.w, rhs.w);
        self
    }

    #[inline]
    pub fn add(&mut self, v: impl Into<Operand>) -> &mut Self {
        self.zip_with(v.into().to_vector(), |a, b| a + b)
    }

    #[inline]
    pub fn sub(&mut self, v: impl Into<Operand>) -> &mut Self {
        self.zip_with(v.into().to_vector(), |a, b| a - b)
    }

    #[inline]
    pub fn mul(&mut self, v: impl Into<Operand>) -> &mut Self {
        self.zip_with(v.into().to_vector(), |a, b| a * b)
    }

    /// Component-wise division.
    ///
    /// A uniform operand multiplies by its reciprocal instead, so `div(0.0)`
    /// gives infinities (or NaN for zero components) rather than panicking.
    #[inline]
    pub fn div(&mut self, v: impl Into<Operand>) -> &mut Self {
        match v.into() {
            Operand::Uniform(f) => self.mul(1.0 / f),
            Operand::Components(v) => self.zip_with(v, |a, b| a / b),
        }
    }

    /// `self = self + s * v` without an intermediate vector
    #[inline]
    pub fn add_multiple(&mut self, s: f32, v: impl Into<Operand>) -> &mut Self {
        self.zip_with(v.into().to_vector(), |a, b| a + s * b)
    }

    /// `self = self - s * v` without an intermediate vector
    #[inline]
    pub fn sub_multiple(&mut self, s: f32, v: impl Into<Operand>) -> &mut Self {
        self.zip_with(v.into().to_vector(), |a, b| a - s * b)
    }

    /// Raise each component to the matching power: `self[i] = self[i] ^ a[i]`
    pub fn pow(&mut self, a: impl Into<Operand>) -> &mut Self {
        self.zip_with(a.into().to_vector(), |base, e| {
            (base as f64).powf(e as f64) as f32
        })
    }

    /// Use each component as an exponent: `self[i] = a[i] ^ self[i]`
    ///
    /// Note the argument order is the reverse of [`pow`](Self::pow).
    pub fn exp(&mut self, a: impl Into<Operand>) -> &mut Self {
        self.zip_with(a.into().to_vector(), |e, base| {
            (base as f64).powf(e as f64) as f32
        })
    }

    /// Logarithm of each component in base `a[i]`
    pub fn log(&mut self, a: impl Into<Operand>) -> &mut Self {
        self.zip_with(a.into().to_vector(), |value, base| {
            ((value as f64).ln() / (base as f64).ln()) as f32
        })
    }

    /// Flip the sign of negative components. `-0.0` is left as is.
    #[inline]
    pub fn abs(&mut self) -> &mut Self {
        for c in Component::ALL {
            if self[c] < 0.0 {
                self[c] = -self[c];
            }
        }
        self
    }

    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.set(-self.x, -self.y, -self.z, -self.w)
    }

    // Geometry

    /// Dot product
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared distance between two points
    #[inline]
    pub fn distance_squared(&self, other: Self) -> f32 {
        let ox = self.x - other.x;
        let oy = self.y - other.y;
        let oz = self.z - other.z;
        let ow = self.w - other.w;
        ox * ox + oy * oy + oz * oz + ow * ow
    }

    /// Distance between two points
    #[inline]
    pub fn distance(&self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Angle between two vectors in radians.
    ///
    /// NaN if either vector has zero length. The cosine ratio is formed in
    /// f32 so a vector measured against itself gives exactly 1.
    pub fn angle(&self, other: Self) -> f32 {
        let cos = self.dot(other) / (self.length() * other.length());
        (cos as f64).acos() as f32
    }

    /// Scale to unit length. A zero vector becomes NaN.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        self.mul(1.0 / len)
    }

    /// Unit-length copy (see [`normalize`](Self::normalize))
    #[inline]
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// Divide x, y, z by w and set w to 1
    #[inline]
    pub fn homogenize(&mut self) -> &mut Self {
        self.x /= self.w;
        self.y /= self.w;
        self.z /= self.w;
        self.w = 1.0;
        self
    }

    /// Linear interpolation toward `v`: `self = (1 - r) * self + r * v`
    ///
    /// `r` is not clamped, values outside [0, 1] extrapolate.
    #[inline]
    pub fn lerp(&mut self, v: impl Into<Operand>, r: f32) -> &mut Self {
        self.mul(1.0 - r).add_multiple(r, v)
    }

    /// Interpolated copy (see [`lerp`](Self::lerp))
    #[inline]
    pub fn lerped(self, v: impl Into<Operand>, r: f32) -> Self {
        let mut out = self;
        out.lerp(v, r);
        out
    }

    // Comparison

    /// True if every component differs by less than [`DEFAULT_EPSILON`]
    #[inline]
    pub fn equals_approx(&self, other: &Self) -> bool {
        self.equals_approx_within(other, DEFAULT_EPSILON)
    }

    /// True if every component differs by strictly less than `epsilon`
    #[inline]
    pub fn equals_approx_within(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
            && (self.w - other.w).abs() < epsilon
    }

    // Positional access

    /// Component at `index` (0 = x ... 3 = w)
    #[inline]
    pub fn get(&self, index: usize) -> Result<f32, ComponentIndexError> {
        Component::try_from(index).map(|c| self[c])
    }

    /// Overwrite the component at `index`, returning the previous value
    #[inline]
    pub fn set_component(&mut self, index: usize, value: f32) -> Result<f32, ComponentIndexError> {
        let c = Component::try_from(index)?;
        Ok(std::mem::replace(&mut self[c], value))
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        bytemuck::cast(self)
    }

    /// Components in x, y, z, w order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = f32> {
        self.to_array().into_iter()
    }
}

impl Index<Component> for Vector4 {
    type Output = f32;

    #[inline]
    fn index(&self, c: Component) -> &f32 {
        match c {
            Component::X => &self.x,
            Component::Y => &self.y,
            Component::Z => &self.z,
            Component::W => &self.w,
        }
    }
}

impl IndexMut<Component> for Vector4 {
    #[inline]
    fn index_mut(&mut self, c: Component) -> &mut f32 {
        match c {
            Component::X => &mut self.x,
            Component::Y => &mut self.y,
            Component::Z => &mut self.z,
            Component::W => &mut self.w,
        }
    }
}

// Panics on out-of-range indices, like slice indexing. Use `get` to avoid that.
impl Index<usize> for Vector4 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        match Component::try_from(index) {
            Ok(c) => &self[c],
            Err(err) => panic!("{}", err),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match Component::try_from(index) {
            Ok(c) => &mut self[c],
            Err(err) => panic!("{}", err),
        }
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from(c: [f32; 4]) -> Self {
        bytemuck::cast(c)
    }
}

impl From<(f32, f32, f32, f32)> for Vector4 {
    #[inline]
    fn from((x, y, z, w): (f32, f32, f32, f32)) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<f32> for Vector4 {
    #[inline]
    fn from(f: f32) -> Self {
        Self::splat(f)
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(v: Vector4) -> Self {
        v.to_array()
    }
}

impl fmt::Display for Vector4 {
    // Debug formatting keeps the decimal point on whole numbers ("1.0")
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:?}, {:?}, {:?}, {:?}}}f", self.x, self.y, self.z, self.w)
    }
}

// Operator overloads

impl std::ops::Add for Vector4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl std::ops::AddAssign for Vector4 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        Vector4::add(self, other);
    }
}

impl std::ops::Sub for Vector4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl std::ops::SubAssign for Vector4 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        Vector4::sub(self, other);
    }
}

impl std::ops::Mul<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl std::ops::Mul for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }
}

impl std::ops::MulAssign<f32> for Vector4 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        Vector4::mul(self, scalar);
    }
}

impl std::ops::Div<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        self * (1.0 / scalar)
    }
}

impl std::ops::Div for Vector4 {
    type Output = Self;
    #[inline]
    fn div(self, other: Self) -> Self {
        Self::new(
            self.x / other.x,
            self.y / other.y,
            self.z / other.z,
            self.w / other.w,
        )
    }
}

impl std::ops::DivAssign<f32> for Vector4 {
    #[inline]
    fn div_assign(&mut self, scalar: f32) {
        Vector4::div(self, scalar);
    }
}

impl std::ops::Neg for Vector4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}
