//! GLSL Type Literals
//!
//! This module defines the closed vocabulary of GLSL declaration types that a
//! WebGL uniform may be declared as.
//!
//! # Overview
//!
//! - [`GlslType`] is the canonical enumeration. Every literal has exactly one
//!   textual spelling (`vec3`, `sampler2D`, ...).
//! - [`GlslTypeSet`] is a compact bit set of literals, returned by the
//!   classifier when a value shape admits several declarations.
//!
//! # Usage
//!
//! ```rust,ignore
//! use glsl_uniform::GlslType;
//!
//! let ty: GlslType = "vec3".parse()?;
//! assert_eq!(ty.component_count(), 3);
//! assert_eq!(ty.to_string(), "vec3");
//! ```

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::errors::UniformError;

/// A GLSL type literal valid for a WebGL uniform declaration.
///
/// The set is fixed and never extended at runtime. Serialises as the literal
/// string itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GlslType {
    #[serde(rename = "void")]
    Void,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "bvec2")]
    BVec2,
    #[serde(rename = "bvec3")]
    BVec3,
    #[serde(rename = "bvec4")]
    BVec4,
    #[serde(rename = "ivec2")]
    IVec2,
    #[serde(rename = "ivec3")]
    IVec3,
    #[serde(rename = "ivec4")]
    IVec4,
    #[serde(rename = "vec2")]
    Vec2,
    #[serde(rename = "vec3")]
    Vec3,
    #[serde(rename = "vec4")]
    Vec4,
    #[serde(rename = "mat2")]
    Mat2,
    #[serde(rename = "mat3")]
    Mat3,
    #[serde(rename = "mat4")]
    Mat4,
    #[serde(rename = "sampler2D")]
    Sampler2D,
    #[serde(rename = "samplerCube")]
    SamplerCube,
}

impl GlslType {
    /// All literals, in declaration order.
    pub const ALL: [GlslType; 18] = [
        GlslType::Void,
        GlslType::Bool,
        GlslType::Int,
        GlslType::Float,
        GlslType::BVec2,
        GlslType::BVec3,
        GlslType::BVec4,
        GlslType::IVec2,
        GlslType::IVec3,
        GlslType::IVec4,
        GlslType::Vec2,
        GlslType::Vec3,
        GlslType::Vec4,
        GlslType::Mat2,
        GlslType::Mat3,
        GlslType::Mat4,
        GlslType::Sampler2D,
        GlslType::SamplerCube,
    ];

    /// The literal as written in GLSL source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GlslType::Void => "void",
            GlslType::Bool => "bool",
            GlslType::Int => "int",
            GlslType::Float => "float",
            GlslType::BVec2 => "bvec2",
            GlslType::BVec3 => "bvec3",
            GlslType::BVec4 => "bvec4",
            GlslType::IVec2 => "ivec2",
            GlslType::IVec3 => "ivec3",
            GlslType::IVec4 => "ivec4",
            GlslType::Vec2 => "vec2",
            GlslType::Vec3 => "vec3",
            GlslType::Vec4 => "vec4",
            GlslType::Mat2 => "mat2",
            GlslType::Mat3 => "mat3",
            GlslType::Mat4 => "mat4",
            GlslType::Sampler2D => "sampler2D",
            GlslType::SamplerCube => "samplerCube",
        }
    }

    /// Number of scalar components a value of this type carries.
    ///
    /// `void` and the sampler types carry no components.
    #[must_use]
    pub const fn component_count(self) -> usize {
        match self {
            GlslType::Void | GlslType::Sampler2D | GlslType::SamplerCube => 0,
            GlslType::Bool | GlslType::Int | GlslType::Float => 1,
            GlslType::BVec2 | GlslType::IVec2 | GlslType::Vec2 => 2,
            GlslType::BVec3 | GlslType::IVec3 | GlslType::Vec3 => 3,
            GlslType::BVec4 | GlslType::IVec4 | GlslType::Vec4 | GlslType::Mat2 => 4,
            GlslType::Mat3 => 9,
            GlslType::Mat4 => 16,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_sampler(self) -> bool {
        matches!(self, GlslType::Sampler2D | GlslType::SamplerCube)
    }

    #[inline]
    #[must_use]
    pub const fn is_matrix(self) -> bool {
        matches!(self, GlslType::Mat2 | GlslType::Mat3 | GlslType::Mat4)
    }

    #[inline]
    #[must_use]
    pub const fn is_vector(self) -> bool {
        matches!(
            self,
            GlslType::BVec2
                | GlslType::BVec3
                | GlslType::BVec4
                | GlslType::IVec2
                | GlslType::IVec3
                | GlslType::IVec4
                | GlslType::Vec2
                | GlslType::Vec3
                | GlslType::Vec4
        )
    }

    /// The single-bit flag for this literal.
    #[must_use]
    pub const fn flag(self) -> GlslTypeSet {
        GlslTypeSet::from_bits_retain(1 << self as u32)
    }

    /// Parses either the exact literal or an enumerant-style spelling.
    ///
    /// `"sampler2D"`, `"SAMPLER2D"` and `"Sampler2D"` all resolve to
    /// [`GlslType::Sampler2D`]. Use [`str::parse`] for strict matching.
    pub fn parse_lenient(s: &str) -> Result<Self, UniformError> {
        if let Ok(ty) = s.parse() {
            return Ok(ty);
        }
        GlslType::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UniformError::UnknownTypeLiteral(s.to_string()))
    }
}

impl fmt::Display for GlslType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GlslType {
    type Err = UniformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GlslType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| UniformError::UnknownTypeLiteral(s.to_string()))
    }
}

impl From<GlslType> for GlslTypeSet {
    #[inline]
    fn from(ty: GlslType) -> Self {
        ty.flag()
    }
}

bitflags! {
    /// A set of GLSL type literals.
    ///
    /// Bit positions follow the declaration order of [`GlslType`], so
    /// iteration via [`GlslTypeSet::types`] is stable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GlslTypeSet: u32 {
        const VOID = 1 << 0;
        const BOOL = 1 << 1;
        const INT = 1 << 2;
        const FLOAT = 1 << 3;
        const BVEC2 = 1 << 4;
        const BVEC3 = 1 << 5;
        const BVEC4 = 1 << 6;
        const IVEC2 = 1 << 7;
        const IVEC3 = 1 << 8;
        const IVEC4 = 1 << 9;
        const VEC2 = 1 << 10;
        const VEC3 = 1 << 11;
        const VEC4 = 1 << 12;
        const MAT2 = 1 << 13;
        const MAT3 = 1 << 14;
        const MAT4 = 1 << 15;
        const SAMPLER_2D = 1 << 16;
        const SAMPLER_CUBE = 1 << 17;

        const SCALAR_NUMBER = Self::INT.bits() | Self::FLOAT.bits();
        const MATRIX = Self::MAT2.bits() | Self::MAT3.bits() | Self::MAT4.bits();
        const SAMPLER = Self::SAMPLER_2D.bits() | Self::SAMPLER_CUBE.bits();
    }
}

impl GlslTypeSet {
    /// Whether `ty` is a member.
    #[inline]
    #[must_use]
    pub const fn has(self, ty: GlslType) -> bool {
        self.contains(ty.flag())
    }

    /// Whether the raw literal names a member. Unknown literals are never members.
    #[must_use]
    pub fn contains_literal(self, literal: &str) -> bool {
        literal.parse::<GlslType>().is_ok_and(|ty| self.has(ty))
    }

    /// Members in declaration order.
    pub fn types(self) -> impl Iterator<Item = GlslType> {
        GlslType::ALL.into_iter().filter(move |ty| self.has(*ty))
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.bits().count_ones() as usize
    }
}

impl FromIterator<GlslType> for GlslTypeSet {
    fn from_iter<I: IntoIterator<Item = GlslType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(GlslTypeSet::empty(), |set, ty| set | ty.flag())
    }
}

impl fmt::Display for GlslTypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, ty) in self.types().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(ty.as_str())?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_follow_declaration_order() {
        for (i, ty) in GlslType::ALL.into_iter().enumerate() {
            assert_eq!(ty.flag().bits(), 1 << i, "{ty} has wrong bit");
        }
        assert_eq!(GlslType::Sampler2D.flag(), GlslTypeSet::SAMPLER_2D);
        assert_eq!(GlslType::Mat4.flag(), GlslTypeSet::MAT4);
    }

    #[test]
    fn test_display_set() {
        let set = GlslTypeSet::VEC3 | GlslTypeSet::IVEC3;
        assert_eq!(set.to_string(), "{ivec3, vec3}");
        assert_eq!(GlslTypeSet::empty().to_string(), "{}");
    }

    #[test]
    fn test_lenient_parse() {
        assert_eq!(GlslType::parse_lenient("SAMPLERCUBE").unwrap(), GlslType::SamplerCube);
        assert_eq!(GlslType::parse_lenient("Vec3").unwrap(), GlslType::Vec3);
        assert!(GlslType::parse_lenient("vec5").is_err());
    }

    #[test]
    fn test_collect() {
        let set: GlslTypeSet = [GlslType::Int, GlslType::Float].into_iter().collect();
        assert_eq!(set, GlslTypeSet::SCALAR_NUMBER);
        assert_eq!(set.len(), 2);
    }
}
