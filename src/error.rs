//! Error types for mesh loading and preparation
//!
//! Loading errors are fatal to startup; the animation side of the crate has
//! no runtime error conditions.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or normalizing a mesh
#[derive(Error, Debug)]
pub enum MeshError {
    /// The OBJ file could not be read or parsed
    #[error("failed to load model {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    /// The OBJ file parsed but contains no triangles
    #[error("model {} contains no triangles", path.display())]
    Empty { path: PathBuf },

    /// Normalization needs a vertex set with a non-zero, finite extent
    #[error("cannot normalize degenerate geometry ({vertex_count} vertices, no finite extent)")]
    DegenerateGeometry { vertex_count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_names_path_and_cause() {
        let err = MeshError::Load {
            path: PathBuf::from("assets/dice.obj"),
            source: tobj::LoadError::OpenFileFailed,
        };
        let message = err.to_string();
        assert!(message.contains("assets/dice.obj"));
        assert!(message.contains(&tobj::LoadError::OpenFileFailed.to_string()));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_degenerate_geometry_message() {
        let err = MeshError::DegenerateGeometry { vertex_count: 0 };
        assert!(err.to_string().contains("0 vertices"));
    }
}
