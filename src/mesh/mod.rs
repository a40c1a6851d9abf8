//! # Mesh Module
//!
//! Loading, indexing and normalization of the dice mesh.
//!
//! ## Key Components
//!
//! - [`Vertex`] - GPU vertex with position and grayscale tint
//! - [`build_indexed_mesh`] - Deduplicates a raw triangle soup by position
//! - [`IndexedMesh::standardize`] - Recenters and rescales into `[-1, 1]^3`
//! - [`load_indexed_mesh`] - OBJ file to upload-ready mesh in one call
//!
//! ## Usage
//!
//! ```no_run
//! use dicebox::mesh::load_indexed_mesh;
//!
//! let mesh = load_indexed_mesh("assets/dice.obj")?;
//! println!("{} triangles", mesh.triangle_count());
//! # Ok::<(), dicebox::error::MeshError>(())
//! ```

pub mod indexer;
pub mod loader;
pub mod vertex;

// Re-export main types
pub use indexer::{build_indexed_mesh, Bounds, IndexedMesh, RawTriangle};
pub use loader::{load_indexed_mesh, load_triangles, triangles_from_obj_reader};
pub use vertex::Vertex;
