//! Geometry error types.

use thiserror::Error;

/// Errors raised while constructing geometry.
///
/// Buffer building itself never fails; only malformed input is rejected, and
/// only at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("{attribute} has {actual} entries but the mesh has {expected} vertices")]
    AttributeLengthMismatch {
        attribute: &'static str,
        expected: usize,
        actual: usize,
    },
}
