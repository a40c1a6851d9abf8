//! # Mesh Indexing
//!
//! Turns a raw triangle soup into an indexed mesh: a table of unique vertices
//! plus a triangle-list index sequence referencing it. Also provides the
//! one-shot normalization pass that recenters and rescales the mesh into the
//! canonical `[-1, 1]^3` volume.
//!
//! ## Vertex identity
//!
//! Vertices are deduplicated by position only. When two triangles share a
//! position but carry different face-group ids, the vertex keeps the tint of
//! the first triangle that introduced it.

use std::collections::HashMap;

use cgmath::{InnerSpace, Vector3};

use crate::error::MeshError;

use super::vertex::{PositionKey, Vertex};

/// One triangle of the raw input, with the face-group id shared by its corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawTriangle {
    pub corners: [[f32; 3]; 3],
    pub group_id: u32,
}

impl RawTriangle {
    pub fn new(corners: [[f32; 3]; 3], group_id: u32) -> Self {
        Self { corners, group_id }
    }
}

/// Axis-aligned bounding box over vertex positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl Bounds {
    /// Computes the bounds of a set of vertices, `None` when the set is empty
    pub fn from_vertices(vertices: &[Vertex]) -> Option<Self> {
        let first = vertices.first()?;
        let mut min = Vector3::from(first.position);
        let mut max = min;

        for vertex in vertices.iter().skip(1) {
            let v = Vector3::from(vertex.position);
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }

        Some(Self { min, max })
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) / 2.0
    }

    /// Length of the box diagonal
    pub fn diagonal(&self) -> f32 {
        (self.max - self.min).magnitude()
    }
}

/// Deduplicated vertex table plus triangle-list indices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl IndexedMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_vertices(&self.vertices)
    }

    /// Centers the mesh on the origin and scales it so the bounding box
    /// diagonal has length 2.
    ///
    /// Returns the bounds the mesh had before normalization. Fails without
    /// touching any vertex when the mesh is empty or has no finite extent.
    pub fn standardize(&mut self) -> Result<Bounds, MeshError> {
        let degenerate = || MeshError::DegenerateGeometry {
            vertex_count: self.vertices.len(),
        };

        let bounds = self.bounds().ok_or_else(degenerate)?;
        let diagonal = bounds.diagonal();
        if !diagonal.is_finite() || diagonal <= 0.0 {
            return Err(degenerate());
        }

        let center = bounds.center();
        let scale = 2.0 / diagonal;
        for vertex in &mut self.vertices {
            let p = (Vector3::from(vertex.position) - center) * scale;
            vertex.position = p.into();
        }

        Ok(bounds)
    }
}

/// Builds an indexed mesh from raw triangles.
///
/// Corners are visited in input order. A corner whose position was already
/// seen reuses that vertex's index; otherwise it is appended with the next
/// sequential index. Every corner contributes exactly one index.
pub fn build_indexed_mesh(triangles: &[RawTriangle]) -> IndexedMesh {
    let mut mesh = IndexedMesh {
        vertices: Vec::new(),
        indices: Vec::with_capacity(triangles.len() * 3),
    };
    let mut lookup: HashMap<PositionKey, u32> = HashMap::new();

    for triangle in triangles {
        for position in triangle.corners {
            let index = *lookup.entry(PositionKey::new(position)).or_insert_with(|| {
                mesh.vertices
                    .push(Vertex::with_group(position, triangle.group_id));
                (mesh.vertices.len() - 1) as u32
            });
            mesh.indices.push(index);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared_edge_pair(second_group: u32) -> Vec<RawTriangle> {
        vec![
            RawTriangle::new([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], 0),
            RawTriangle::new(
                [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
                second_group,
            ),
        ]
    }

    fn assert_close(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-5, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_two_triangles_sharing_an_edge() {
        let mesh = build_indexed_mesh(&shared_edge_pair(0));

        assert_eq!(mesh.vertices.len(), 4);
        let positions: Vec<[f32; 3]> = mesh.vertices.iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0]
            ]
        );
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 1, 3]);
    }

    #[test]
    fn test_first_seen_tint_wins() {
        let mesh = build_indexed_mesh(&shared_edge_pair(1));

        assert_eq!(mesh.vertices.len(), 4);
        // Shared corners keep the tint of the first triangle
        assert_eq!(mesh.vertices[0].tint, [0.0; 3]);
        assert_eq!(mesh.vertices[1].tint, [0.0; 3]);
        // The new corner takes the second triangle's group
        assert_eq!(mesh.vertices[3].tint, [1.0; 3]);
    }

    #[test]
    fn test_index_invariants_hold() {
        let mut triangles = shared_edge_pair(3);
        triangles.push(RawTriangle::new(
            [[2.0, 2.0, 2.0], [2.0, 2.0, 2.0], [0.0, 1.0, 0.0]],
            2,
        ));
        let mesh = build_indexed_mesh(&triangles);

        assert_eq!(mesh.indices.len(), triangles.len() * 3);
        assert_eq!(mesh.indices.len() % 3, 0);
        assert!(mesh
            .indices
            .iter()
            .all(|&i| (i as usize) < mesh.vertices.len()));
        assert_eq!(mesh.triangle_count(), 3);
        assert_eq!(mesh.vertex_count(), 5);
    }

    #[test]
    fn test_empty_input_builds_empty_mesh() {
        let mesh = build_indexed_mesh(&[]);
        assert!(mesh.vertices.is_empty());
        assert!(mesh.indices.is_empty());
        assert!(mesh.bounds().is_none());
    }

    #[test]
    fn test_standardize_recenters_and_scales() {
        let mut mesh = build_indexed_mesh(&[RawTriangle::new(
            [[2.0, 2.0, 2.0], [4.0, 2.0, 2.0], [4.0, 4.0, 4.0]],
            0,
        )]);

        let previous = mesh.standardize().unwrap();
        assert_close(previous.center().into(), [3.0, 3.0, 3.0]);

        let bounds = mesh.bounds().unwrap();
        assert!((bounds.diagonal() - 2.0).abs() < 1e-5);
        assert_close(bounds.center().into(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_standardize_is_idempotent() {
        let mut mesh = build_indexed_mesh(&shared_edge_pair(0));
        mesh.standardize().unwrap();
        let once = mesh.clone();

        mesh.standardize().unwrap();
        for (a, b) in once.vertices.iter().zip(&mesh.vertices) {
            assert_close(a.position, b.position);
        }
        assert_eq!(once.indices, mesh.indices);
    }

    #[test]
    fn test_standardize_rejects_empty_mesh() {
        let mut mesh = IndexedMesh::default();
        assert!(matches!(
            mesh.standardize(),
            Err(MeshError::DegenerateGeometry { vertex_count: 0 })
        ));
    }

    #[test]
    fn test_standardize_rejects_single_point() {
        let mut mesh = build_indexed_mesh(&[RawTriangle::new([[1.0, 1.0, 1.0]; 3], 0)]);
        let before = mesh.clone();

        assert!(mesh.standardize().is_err());
        assert_eq!(mesh, before);
    }
}
