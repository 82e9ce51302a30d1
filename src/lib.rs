//! GLSL uniform type classification for WebGL.
//!
//! Validates that a value handed to a shader uniform has a shape compatible
//! with the uniform's declared GLSL type.
//!
//! ```rust,ignore
//! use glsl_uniform::{classify, check_declaration, GlslType, UniformValue};
//!
//! let value = UniformValue::from([1.0_f32, 2.0, 3.0]);
//! assert_eq!(classify(&value)?.to_string(), "{ivec3, vec3}");
//! check_declaration(&value, GlslType::Vec3)?;
//! ```

pub mod classifier;
pub mod errors;
pub mod glsl_type;
pub mod json;
pub mod settings;
pub mod shape;

pub use classifier::{Classifier, UniformShape, check_declaration, classify, resolve_matrix};
pub use errors::{Result, UniformError};
pub use glsl_type::{GlslType, GlslTypeSet};
pub use json::classify_json;
pub use settings::ClassifierSettings;
pub use shape::{
    Component, GlslBoolean, Matrix2, Matrix3, Matrix4, Matrix9, Matrix16, TextureHandle,
    UniformValue,
};
