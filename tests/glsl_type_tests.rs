//! GLSL Type Literal Tests
//!
//! Tests for:
//! - GlslType: literal spelling, strict and lenient parsing, serde
//! - GlslType helpers: component counts, sampler/matrix/vector predicates
//! - GlslTypeSet: membership by literal, ordering, display

use glsl_uniform::{GlslType, GlslTypeSet, UniformError};

// ============================================================================
// Literals & Parsing
// ============================================================================

#[test]
fn every_literal_parses_back() {
    for ty in GlslType::ALL {
        assert_eq!(ty.as_str().parse::<GlslType>().unwrap(), ty);
        assert_eq!(ty.to_string(), ty.as_str());
    }
}

#[test]
fn strict_parse_is_case_sensitive() {
    assert_eq!("sampler2D".parse::<GlslType>().unwrap(), GlslType::Sampler2D);
    assert!(matches!(
        "SAMPLER2D".parse::<GlslType>(),
        Err(UniformError::UnknownTypeLiteral(_))
    ));
}

#[test]
fn lenient_parse_accepts_enumerant_names() {
    assert_eq!(GlslType::parse_lenient("SAMPLER2D").unwrap(), GlslType::Sampler2D);
    assert_eq!(GlslType::parse_lenient("BVEC4").unwrap(), GlslType::BVec4);
    assert_eq!(GlslType::parse_lenient("mat3").unwrap(), GlslType::Mat3);
}

#[test]
fn unknown_literals_are_rejected() {
    for raw in ["", "double", "vec5", "mat3x3", "sampler3D", " vec2"] {
        assert!(raw.parse::<GlslType>().is_err(), "{raw:?} should not parse");
    }
}

#[test]
fn serde_uses_literal_strings() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_string(&GlslType::SamplerCube)?, r#""samplerCube""#);
    let ty: GlslType = serde_json::from_str(r#""ivec2""#)?;
    assert_eq!(ty, GlslType::IVec2);
    assert!(serde_json::from_str::<GlslType>(r#""IVEC2""#).is_err());
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

#[test]
fn component_counts() {
    assert_eq!(GlslType::Void.component_count(), 0);
    assert_eq!(GlslType::Float.component_count(), 1);
    assert_eq!(GlslType::BVec3.component_count(), 3);
    assert_eq!(GlslType::IVec4.component_count(), 4);
    assert_eq!(GlslType::Mat2.component_count(), 4);
    assert_eq!(GlslType::Mat3.component_count(), 9);
    assert_eq!(GlslType::Mat4.component_count(), 16);
    assert_eq!(GlslType::SamplerCube.component_count(), 0);
}

#[test]
fn predicates_partition_the_literals() {
    let samplers = GlslType::ALL.iter().filter(|t| t.is_sampler()).count();
    let matrices = GlslType::ALL.iter().filter(|t| t.is_matrix()).count();
    let vectors = GlslType::ALL.iter().filter(|t| t.is_vector()).count();
    assert_eq!((samplers, matrices, vectors), (2, 3, 9));

    for ty in GlslType::ALL {
        let kinds = [ty.is_sampler(), ty.is_matrix(), ty.is_vector()];
        assert!(kinds.iter().filter(|k| **k).count() <= 1, "{ty} in several groups");
    }
}

// ============================================================================
// GlslTypeSet
// ============================================================================

#[test]
fn set_membership_by_literal() {
    let set = GlslTypeSet::SAMPLER;
    assert!(set.contains_literal("sampler2D"));
    assert!(set.contains_literal("samplerCube"));
    assert!(!set.contains_literal("vec2"));
    assert!(!set.contains_literal("texture"));
}

#[test]
fn set_iterates_in_declaration_order() {
    let set = GlslTypeSet::MAT4 | GlslTypeSet::INT | GlslTypeSet::VEC2;
    let types: Vec<_> = set.types().collect();
    assert_eq!(types, vec![GlslType::Int, GlslType::Vec2, GlslType::Mat4]);
    assert_eq!(set.to_string(), "{int, vec2, mat4}");
}

#[test]
fn composite_sets() {
    assert_eq!(GlslTypeSet::MATRIX.len(), 3);
    assert!(GlslTypeSet::SCALAR_NUMBER.has(GlslType::Int));
    assert!(GlslTypeSet::SCALAR_NUMBER.has(GlslType::Float));
    assert!(!GlslTypeSet::SCALAR_NUMBER.has(GlslType::Bool));
    assert_eq!(GlslTypeSet::from(GlslType::Bool), GlslTypeSet::BOOL);
}
