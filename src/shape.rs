//! Uniform Value Shapes
//!
//! Runtime representation of values a host may hand to a shader uniform.
//!
//! A [`UniformValue`] captures only the *shape* of a value: scalar, short
//! fixed-length sequence, bulk 32-bit buffer or opaque texture handle. The
//! boundary variants ([`UniformValue::Void`], [`UniformValue::Text`],
//! [`UniformValue::Object`]) exist so that foreign input can be represented
//! and then rejected by the classifier instead of at construction.

use glam::{BVec2, BVec3, BVec4, IVec2, IVec3, IVec4, Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};
use slotmap::new_key_type;

use crate::errors::{Result, UniformError};

new_key_type! {
    /// Opaque reference to a texture owned by the rendering backend.
    pub struct TextureHandle;
}

/// Flat 2 element matrix.
pub type Matrix2<T> = [T; 2];
/// Flat 3 element matrix.
pub type Matrix3<T> = [T; 3];
/// 2 by 2 matrix, or a flat 4 element one.
pub type Matrix4<T> = [T; 4];
/// 3 by 3 matrix.
pub type Matrix9<T> = [T; 9];
/// 4 by 4 matrix.
pub type Matrix16<T> = [T; 16];

/// A GLSL boolean: either a real boolean or a numeric bit.
///
/// Any non-zero bit reads as `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlslBoolean {
    Bool(bool),
    Bit(u8),
}

impl GlslBoolean {
    #[inline]
    #[must_use]
    pub fn truthy(self) -> bool {
        match self {
            GlslBoolean::Bool(b) => b,
            GlslBoolean::Bit(bit) => bit != 0,
        }
    }
}

impl From<GlslBoolean> for Component {
    fn from(value: GlslBoolean) -> Self {
        match value {
            GlslBoolean::Bool(b) => Component::Bool(b),
            GlslBoolean::Bit(bit) => Component::Bit(bit),
        }
    }
}

/// One element of a short uniform sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component {
    Bool(bool),
    Bit(u8),
    Number(f64),
}

impl Component {
    /// `Bool` or `Bit`.
    #[inline]
    #[must_use]
    pub fn is_boolean(self) -> bool {
        matches!(self, Component::Bool(_) | Component::Bit(_))
    }

    #[inline]
    #[must_use]
    pub fn is_number(self) -> bool {
        matches!(self, Component::Number(_))
    }
}

/// The shape of a value supplied for a shader uniform.
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar; integer or float is left to the declaration.
    Number(f64),
    /// Short fixed-length sequence of booleans, bits or numbers.
    Sequence(Vec<Component>),
    /// Bulk 32-bit float buffer, used for matrices.
    Float32Buffer(Vec<f32>),
    /// Bulk 32-bit integer buffer. Representable, but never classified.
    Int32Buffer(Vec<i32>),
    /// Sampler binding.
    Texture(TextureHandle),
    /// Absence of a value.
    Void,
    /// A string where a uniform was expected.
    Text(String),
    /// Any other structured value.
    Object,
}

impl UniformValue {
    /// Builds a boolean sequence.
    #[must_use]
    pub fn booleans(values: &[bool]) -> Self {
        UniformValue::Sequence(values.iter().copied().map(Component::Bool).collect())
    }

    /// Builds a bit sequence (`[1, 0]` style booleans).
    #[must_use]
    pub fn bits(values: &[u8]) -> Self {
        UniformValue::Sequence(values.iter().copied().map(Component::Bit).collect())
    }

    /// Builds a numeric sequence.
    #[must_use]
    pub fn numbers(values: &[f64]) -> Self {
        UniformValue::Sequence(values.iter().copied().map(Component::Number).collect())
    }

    /// Decodes a native-endian byte slice into a `Float32Buffer`.
    pub fn float32_from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % std::mem::size_of::<f32>() != 0 {
            return Err(UniformError::InvalidBufferBytes(bytes.len()));
        }
        Ok(UniformValue::Float32Buffer(bytemuck::pod_collect_to_vec(bytes)))
    }

    /// Decodes a native-endian byte slice into an `Int32Buffer`.
    pub fn int32_from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % std::mem::size_of::<i32>() != 0 {
            return Err(UniformError::InvalidBufferBytes(bytes.len()));
        }
        Ok(UniformValue::Int32Buffer(bytemuck::pod_collect_to_vec(bytes)))
    }

    /// Byte view of a bulk buffer, ready for upload. `None` for other shapes.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            UniformValue::Float32Buffer(data) => Some(bytemuck::cast_slice(data.as_slice())),
            UniformValue::Int32Buffer(data) => Some(bytemuck::cast_slice(data.as_slice())),
            _ => None,
        }
    }

    /// Length of a sequence or bulk buffer.
    #[must_use]
    pub fn element_count(&self) -> Option<usize> {
        match self {
            UniformValue::Sequence(items) => Some(items.len()),
            UniformValue::Float32Buffer(data) => Some(data.len()),
            UniformValue::Int32Buffer(data) => Some(data.len()),
            _ => None,
        }
    }

    /// Human readable description of the shape, used in diagnostics.
    #[must_use]
    pub fn shape_name(&self) -> String {
        match self {
            UniformValue::Bool(_) => "boolean".to_string(),
            UniformValue::Number(_) => "number".to_string(),
            UniformValue::Sequence(items) if items.is_empty() => "empty sequence".to_string(),
            UniformValue::Sequence(items) => {
                let kind = if items.iter().all(|c| c.is_boolean()) {
                    "boolean"
                } else if items.iter().all(|c| c.is_number()) {
                    "numeric"
                } else {
                    "mixed"
                };
                format!("{}-element {kind} sequence", items.len())
            }
            UniformValue::Float32Buffer(data) => format!("Float32 buffer of {}", data.len()),
            UniformValue::Int32Buffer(data) => format!("Int32 buffer of {}", data.len()),
            UniformValue::Texture(_) => "texture".to_string(),
            UniformValue::Void => "void".to_string(),
            UniformValue::Text(_) => "string".to_string(),
            UniformValue::Object => "object".to_string(),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for UniformValue {
    fn from(value: bool) -> Self {
        UniformValue::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for UniformValue {
                fn from(value: $ty) -> Self {
                    UniformValue::Number(f64::from(value))
                }
            }
        )*
    };
}

impl_from_number!(f32, f64, i32, u32);

impl<const N: usize> From<[bool; N]> for UniformValue {
    fn from(value: [bool; N]) -> Self {
        UniformValue::booleans(&value)
    }
}

impl<const N: usize> From<[GlslBoolean; N]> for UniformValue {
    fn from(value: [GlslBoolean; N]) -> Self {
        UniformValue::Sequence(value.into_iter().map(Component::from).collect())
    }
}

impl<const N: usize> From<[f32; N]> for UniformValue {
    fn from(value: [f32; N]) -> Self {
        UniformValue::Sequence(value.into_iter().map(|v| Component::Number(f64::from(v))).collect())
    }
}

impl<const N: usize> From<[i32; N]> for UniformValue {
    fn from(value: [i32; N]) -> Self {
        UniformValue::Sequence(value.into_iter().map(|v| Component::Number(f64::from(v))).collect())
    }
}

impl From<Vec<f32>> for UniformValue {
    fn from(value: Vec<f32>) -> Self {
        UniformValue::Float32Buffer(value)
    }
}

impl From<Vec<i32>> for UniformValue {
    fn from(value: Vec<i32>) -> Self {
        UniformValue::Int32Buffer(value)
    }
}

impl From<TextureHandle> for UniformValue {
    fn from(value: TextureHandle) -> Self {
        UniformValue::Texture(value)
    }
}

macro_rules! impl_from_glam {
    ($($ty:ty => $conv:ident),* $(,)?) => {
        $(
            impl From<$ty> for UniformValue {
                fn from(value: $ty) -> Self {
                    UniformValue::from(value.$conv())
                }
            }
        )*
    };
}

impl_from_glam!(
    Vec2 => to_array,
    Vec3 => to_array,
    Vec4 => to_array,
    IVec2 => to_array,
    IVec3 => to_array,
    IVec4 => to_array,
);

impl From<BVec2> for UniformValue {
    fn from(value: BVec2) -> Self {
        UniformValue::from(<[bool; 2]>::from(value))
    }
}

impl From<BVec3> for UniformValue {
    fn from(value: BVec3) -> Self {
        UniformValue::from(<[bool; 3]>::from(value))
    }
}

impl From<BVec4> for UniformValue {
    fn from(value: BVec4) -> Self {
        UniformValue::from(<[bool; 4]>::from(value))
    }
}

// Matrices are uploaded column-major as bulk float buffers.
impl From<Mat2> for UniformValue {
    fn from(value: Mat2) -> Self {
        UniformValue::Float32Buffer(value.to_cols_array().to_vec())
    }
}

impl From<Mat3> for UniformValue {
    fn from(value: Mat3) -> Self {
        UniformValue::Float32Buffer(value.to_cols_array().to_vec())
    }
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        UniformValue::Float32Buffer(value.to_cols_array().to_vec())
    }
}
