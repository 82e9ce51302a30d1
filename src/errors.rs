//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`UniformError`] covers all failure modes including:
//! - Values whose shape matches no uniform classification rule
//! - Raw strings that are not GLSL type literals
//! - Declarations that disagree with the supplied value
//! - Malformed bulk buffers and JSON input
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for `std::result::Result<T, UniformError>`.
//!
//! ```rust,ignore
//! use glsl_uniform::errors::{UniformError, Result};
//!
//! fn declare() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::glsl_type::{GlslType, GlslTypeSet};

/// The main error type for uniform classification.
#[derive(Error, Debug)]
pub enum UniformError {
    // ========================================================================
    // Classification Errors
    // ========================================================================
    /// The value matches none of the uniform shapes.
    #[error("Unclassifiable uniform shape: {shape}")]
    Unclassifiable {
        /// Short description of the rejected shape
        shape: String,
    },

    /// A raw string that is not a GLSL type literal.
    #[error("Unknown GLSL type literal: {0:?}")]
    UnknownTypeLiteral(String),

    // ========================================================================
    // Declaration Errors
    // ========================================================================
    /// The declared type is not valid for the supplied value.
    #[error("Cannot declare value as `{declared}`; valid declarations are {accepted}")]
    DeclarationMismatch {
        /// Type the caller declared
        declared: GlslType,
        /// Types the value may be declared as
        accepted: GlslTypeSet,
    },

    /// A matrix buffer whose length does not fit the matrix type.
    #[error("Matrix buffer of length {len} does not match {}", expected_matrix(.declared))]
    MatrixLengthMismatch {
        /// Declared matrix type, if any
        declared: Option<GlslType>,
        /// Actual buffer length
        len: usize,
    },

    // ========================================================================
    // Input Errors
    // ========================================================================
    /// Byte slice length is not a multiple of the element size.
    #[error("Buffer of {0} bytes is not a whole number of 32-bit elements")]
    InvalidBufferBytes(usize),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

fn expected_matrix(declared: &Option<GlslType>) -> String {
    match *declared {
        Some(ty) => format!("`{ty}` ({} elements)", ty.component_count()),
        None => "any of mat2 (4), mat3 (9) or mat4 (16)".to_string(),
    }
}

impl UniformError {
    pub(crate) fn unclassifiable(shape: impl Into<String>) -> Self {
        UniformError::Unclassifiable {
            shape: shape.into(),
        }
    }
}

/// Alias for `Result<T, UniformError>`.
pub type Result<T> = std::result::Result<T, UniformError>;
