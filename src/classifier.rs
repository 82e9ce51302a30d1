//! Uniform Type Classifier
//!
//! Maps the shape of a uniform value to the GLSL type literals it may be
//! declared as.
//!
//! # Rules
//!
//! Checked in order, first match wins:
//!
//! | Shape                                | Declarations                |
//! |--------------------------------------|-----------------------------|
//! | boolean                              | `bool`                      |
//! | number                               | `int`, `float`              |
//! | 2/3/4 booleans or bits               | `bvec2` / `bvec3` / `bvec4` |
//! | 2/3/4 numbers                        | `vecN`, `ivecN`             |
//! | Float32 buffer                       | `mat2`, `mat3`, `mat4`      |
//! | texture handle                       | `sampler2D`, `samplerCube`  |
//!
//! Everything else is rejected with [`UniformError::Unclassifiable`].
//!
//! A Float32 buffer always yields the full matrix set regardless of its
//! length. Narrowing to a single matrix type happens in
//! [`check_declaration`] and [`resolve_matrix`], which validate the exact
//! element count.
//!
//! Types known at compile time implement [`UniformShape`] instead; anything
//! outside the uniform union does not implement it and fails to compile.

use glam::{BVec2, BVec3, BVec4, IVec2, IVec3, IVec4, Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

use crate::errors::{Result, UniformError};
use crate::glsl_type::{GlslType, GlslTypeSet};
use crate::settings::ClassifierSettings;
use crate::shape::{Component, TextureHandle, UniformValue};

/// Classifies `value` with default settings.
pub fn classify(value: &UniformValue) -> Result<GlslTypeSet> {
    Classifier::default().classify(value)
}

/// Verifies that `value` may be declared as `declared`.
pub fn check_declaration(value: &UniformValue, declared: GlslType) -> Result<()> {
    Classifier::default().check_declaration(value, declared)
}

/// Picks the matrix type whose element count equals `len`.
pub fn resolve_matrix(len: usize) -> Result<GlslType> {
    [GlslType::Mat2, GlslType::Mat3, GlslType::Mat4]
        .into_iter()
        .find(|ty| ty.component_count() == len)
        .ok_or(UniformError::MatrixLengthMismatch {
            declared: None,
            len,
        })
}

/// Stateless classifier carrying its [`ClassifierSettings`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    settings: ClassifierSettings,
}

impl Classifier {
    #[must_use]
    pub fn new(settings: ClassifierSettings) -> Self {
        Self { settings }
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &ClassifierSettings {
        &self.settings
    }

    /// Returns every GLSL type `value` may be declared as.
    pub fn classify(&self, value: &UniformValue) -> Result<GlslTypeSet> {
        match Self::match_rules(value) {
            Some(set) => {
                log::trace!("Classified {} as {}", value.shape_name(), set);
                Ok(set)
            }
            None => {
                let shape = value.shape_name();
                if self.settings.log_rejections {
                    log::debug!("Rejected uniform value: {shape}");
                }
                Err(UniformError::unclassifiable(shape))
            }
        }
    }

    /// Verifies that `value` may be declared as `declared`.
    ///
    /// Matrix declarations additionally require the buffer length to equal
    /// the matrix element count.
    pub fn check_declaration(&self, value: &UniformValue, declared: GlslType) -> Result<()> {
        let accepted = self.classify(value)?;
        if !accepted.has(declared) {
            return Err(UniformError::DeclarationMismatch { declared, accepted });
        }

        if declared.is_matrix()
            && let UniformValue::Float32Buffer(data) = value
            && data.len() != declared.component_count()
        {
            return Err(UniformError::MatrixLengthMismatch {
                declared: Some(declared),
                len: data.len(),
            });
        }

        Ok(())
    }

    /// Same as [`Classifier::check_declaration`], with the declaration given
    /// as a raw literal such as `"vec3"`.
    pub fn check_declaration_str(&self, value: &UniformValue, declared: &str) -> Result<()> {
        let declared: GlslType = declared.parse()?;
        self.check_declaration(value, declared)
    }

    fn match_rules(value: &UniformValue) -> Option<GlslTypeSet> {
        match value {
            UniformValue::Bool(_) => Some(GlslTypeSet::BOOL),
            UniformValue::Number(_) => Some(GlslTypeSet::SCALAR_NUMBER),
            UniformValue::Sequence(items) => Self::match_sequence(items),
            UniformValue::Float32Buffer(_) => Some(GlslTypeSet::MATRIX),
            UniformValue::Texture(_) => Some(GlslTypeSet::SAMPLER),
            UniformValue::Int32Buffer(_)
            | UniformValue::Void
            | UniformValue::Text(_)
            | UniformValue::Object => None,
        }
    }

    // Boolean sequences are tested before numeric ones of the same length.
    fn match_sequence(items: &[Component]) -> Option<GlslTypeSet> {
        if items.iter().all(|c| c.is_boolean()) {
            return match items.len() {
                2 => Some(GlslTypeSet::BVEC2),
                3 => Some(GlslTypeSet::BVEC3),
                4 => Some(GlslTypeSet::BVEC4),
                _ => None,
            };
        }
        if items.iter().all(|c| c.is_number()) {
            return match items.len() {
                2 => Some(GlslTypeSet::VEC2 | GlslTypeSet::IVEC2),
                3 => Some(GlslTypeSet::VEC3 | GlslTypeSet::IVEC3),
                4 => Some(GlslTypeSet::VEC4 | GlslTypeSet::IVEC4),
                _ => None,
            };
        }
        None
    }
}

impl UniformValue {
    /// Shorthand for [`classify`].
    pub fn declarations(&self) -> Result<GlslTypeSet> {
        classify(self)
    }
}

// ============================================================================
// Compile-time shapes
// ============================================================================

/// A Rust type whose values are always valid uniforms.
///
/// `T::declarations()` equals the runtime classification of
/// `value.to_uniform_value()` for every value of `T`.
pub trait UniformShape {
    fn declarations() -> GlslTypeSet;

    fn to_uniform_value(&self) -> UniformValue;
}

macro_rules! impl_uniform_shape {
    ($($ty:ty => $set:expr),* $(,)?) => {
        $(
            impl UniformShape for $ty {
                #[inline]
                fn declarations() -> GlslTypeSet {
                    $set
                }

                fn to_uniform_value(&self) -> UniformValue {
                    UniformValue::from(*self)
                }
            }
        )*
    };
}

impl_uniform_shape!(
    bool => GlslTypeSet::BOOL,
    f32 => GlslTypeSet::SCALAR_NUMBER,
    f64 => GlslTypeSet::SCALAR_NUMBER,
    i32 => GlslTypeSet::SCALAR_NUMBER,
    u32 => GlslTypeSet::SCALAR_NUMBER,

    [bool; 2] => GlslTypeSet::BVEC2,
    [bool; 3] => GlslTypeSet::BVEC3,
    [bool; 4] => GlslTypeSet::BVEC4,
    BVec2 => GlslTypeSet::BVEC2,
    BVec3 => GlslTypeSet::BVEC3,
    BVec4 => GlslTypeSet::BVEC4,

    [f32; 2] => GlslTypeSet::VEC2 | GlslTypeSet::IVEC2,
    [f32; 3] => GlslTypeSet::VEC3 | GlslTypeSet::IVEC3,
    [f32; 4] => GlslTypeSet::VEC4 | GlslTypeSet::IVEC4,
    [i32; 2] => GlslTypeSet::VEC2 | GlslTypeSet::IVEC2,
    [i32; 3] => GlslTypeSet::VEC3 | GlslTypeSet::IVEC3,
    [i32; 4] => GlslTypeSet::VEC4 | GlslTypeSet::IVEC4,
    Vec2 => GlslTypeSet::VEC2 | GlslTypeSet::IVEC2,
    Vec3 => GlslTypeSet::VEC3 | GlslTypeSet::IVEC3,
    Vec4 => GlslTypeSet::VEC4 | GlslTypeSet::IVEC4,
    IVec2 => GlslTypeSet::VEC2 | GlslTypeSet::IVEC2,
    IVec3 => GlslTypeSet::VEC3 | GlslTypeSet::IVEC3,
    IVec4 => GlslTypeSet::VEC4 | GlslTypeSet::IVEC4,

    Mat2 => GlslTypeSet::MATRIX,
    Mat3 => GlslTypeSet::MATRIX,
    Mat4 => GlslTypeSet::MATRIX,

    TextureHandle => GlslTypeSet::SAMPLER,
);
