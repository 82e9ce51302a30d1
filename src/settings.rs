//! Classifier Settings
//!
//! Configuration for [`Classifier`](crate::classifier::Classifier) and the
//! JSON boundary.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use glsl_uniform::ClassifierSettings;
//!
//! // Default: `[1, 0]` style integer arrays are bit vectors
//! let settings = ClassifierSettings::default();
//!
//! // Treat every numeric JSON array as a numeric vector
//! let settings = ClassifierSettings {
//!     integer_bits: false,
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

/// Tunables for uniform classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    /// When reading untyped input, arrays made only of booleans and the
    /// integer literals `0`/`1` become bit vectors (`bvecN`) instead of
    /// numeric vectors.
    ///
    /// Default: `true`
    pub integer_bits: bool,

    /// Emit a `debug` log record for every rejected shape.
    ///
    /// Default: `true`
    pub log_rejections: bool,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            integer_bits: true,
            log_rejections: true,
        }
    }
}

impl ClassifierSettings {
    #[must_use]
    pub fn with_integer_bits(mut self, enabled: bool) -> Self {
        self.integer_bits = enabled;
        self
    }

    #[must_use]
    pub fn with_log_rejections(mut self, enabled: bool) -> Self {
        self.log_rejections = enabled;
        self
    }
}
