//! Error types for molbox.
//!
//! The physics pipeline itself is total - every pass is a pure mutation of
//! well-formed numeric state and cannot fail. The only fallible surface is
//! simulation construction.

use std::fmt;

/// Errors that can occur while building a simulation.
#[derive(Debug)]
pub enum BuildError {
    /// No regions or substances were registered on the builder.
    NoRegions,
    /// A body factory produced a body with no atoms. Empty bodies have a
    /// zero bounding radius and would silently degrade collision
    /// resolution, so the builder rejects them up front.
    EmptyBody {
        /// Name of the region whose factory misbehaved.
        region: String,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::NoRegions => write!(
                f,
                "No regions registered. Use .with_substance() or .with_region() to add one."
            ),
            BuildError::EmptyBody { region } => {
                write!(f, "Body factory for region '{}' produced a body with no atoms", region)
            }
        }
    }
}

impl std::error::Error for BuildError {}
