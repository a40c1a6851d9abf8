//! OBJ loading
//!
//! Parses OBJ geometry with `tobj` and flattens it into the raw triangle list
//! the indexer consumes. `tobj` splits a file into one model per material, so
//! a model's material id is the face-group id of every triangle it holds.

use std::io::BufRead;
use std::path::Path;

use log::{debug, info, warn};

use crate::error::MeshError;

use super::indexer::{build_indexed_mesh, IndexedMesh, RawTriangle};

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: false,
        ..Default::default()
    }
}

/// Flattens parsed models into triangles tagged with their group id
pub fn triangles_from_models(models: &[tobj::Model]) -> Vec<RawTriangle> {
    let mut triangles = Vec::new();

    for model in models {
        let mesh = &model.mesh;
        let group_id = mesh.material_id.map_or(0, |id| {
            u32::try_from(id).unwrap_or_else(|_| {
                warn!("model '{}': material id {} clamped to {}", model.name, id, u32::MAX);
                u32::MAX
            })
        });
        let position = |index: u32| {
            let start = index as usize * 3;
            [
                mesh.positions[start],
                mesh.positions[start + 1],
                mesh.positions[start + 2],
            ]
        };

        debug!(
            "model '{}': {} triangles, group {}",
            model.name,
            mesh.indices.len() / 3,
            group_id
        );

        triangles.extend(mesh.indices.chunks_exact(3).map(|corner| {
            RawTriangle::new(
                [position(corner[0]), position(corner[1]), position(corner[2])],
                group_id,
            )
        }));
    }

    triangles
}

/// Loads the triangles of an OBJ file.
///
/// A missing or broken MTL library is not fatal: the geometry still loads and
/// every triangle falls into group 0.
pub fn load_triangles(path: impl AsRef<Path>) -> Result<Vec<RawTriangle>, MeshError> {
    let path = path.as_ref();
    let (models, materials) =
        tobj::load_obj(path, &load_options()).map_err(|source| MeshError::Load {
            path: path.to_path_buf(),
            source,
        })?;

    if let Err(e) = materials {
        warn!("No usable MTL library for {} ({}), using group 0", path.display(), e);
    }

    Ok(triangles_from_models(&models))
}

/// Parses OBJ data from a reader.
///
/// `origin` is only used to name the source in errors; `material_loader`
/// resolves `mtllib` statements the same way `tobj::load_obj_buf` does.
pub fn triangles_from_obj_reader<R, ML>(
    reader: &mut R,
    origin: &Path,
    material_loader: ML,
) -> Result<Vec<RawTriangle>, MeshError>
where
    R: BufRead,
    ML: Fn(&Path) -> tobj::MTLLoadResult,
{
    let (models, materials) = tobj::load_obj_buf(reader, &load_options(), material_loader)
        .map_err(|source| MeshError::Load {
            path: origin.to_path_buf(),
            source,
        })?;

    if let Err(e) = materials {
        warn!("No usable MTL library for {} ({}), using group 0", origin.display(), e);
    }

    Ok(triangles_from_models(&models))
}

/// Loads, indexes and normalizes a mesh, ready for upload
pub fn load_indexed_mesh(path: impl AsRef<Path>) -> Result<IndexedMesh, MeshError> {
    let path = path.as_ref();
    let triangles = load_triangles(path)?;
    if triangles.is_empty() {
        return Err(MeshError::Empty {
            path: path.to_path_buf(),
        });
    }

    let mut mesh = build_indexed_mesh(&triangles);
    let bounds = mesh.standardize()?;

    info!(
        "Loaded {}: {} triangles, {} unique vertices (source extent {:.3})",
        path.display(),
        mesh.triangle_count(),
        mesh.vertex_count(),
        bounds.diagonal()
    );

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_GROUP_OBJ: &str = "\
mtllib dice.mtl
v 0 0 0
v 1 0 0
v 0 1 0
v 0 0 1
usemtl white
f 1 2 3
usemtl black
f 1 2 4
";

    const TWO_GROUP_MTL: &str = "\
newmtl white
Kd 1 1 1
newmtl black
Kd 0 0 0
";

    const QUAD_OBJ: &str = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";

    fn no_materials(_: &Path) -> tobj::MTLLoadResult {
        Err(tobj::LoadError::OpenFileFailed)
    }

    #[test]
    fn test_material_ids_become_group_ids() {
        let triangles = triangles_from_obj_reader(
            &mut TWO_GROUP_OBJ.as_bytes(),
            Path::new("dice.obj"),
            |_| tobj::load_mtl_buf(&mut TWO_GROUP_MTL.as_bytes()),
        )
        .unwrap();

        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[0].group_id, 0);
        assert_eq!(triangles[1].group_id, 1);
        assert_eq!(triangles[1].corners[2], [0.0, 0.0, 1.0]);

        let mesh = build_indexed_mesh(&triangles);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 1, 3]);
    }

    #[test]
    fn test_oversized_material_id_is_clamped() {
        let mesh = tobj::Mesh {
            positions: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            indices: vec![0, 1, 2],
            material_id: Some(usize::MAX),
            ..Default::default()
        };
        let models = [tobj::Model::new(mesh, "huge".to_string())];

        let triangles = triangles_from_models(&models);
        assert_eq!(triangles.len(), 1);
        assert_eq!(triangles[0].group_id, u32::MAX);
    }

    #[test]
    fn test_missing_material_library_falls_back_to_group_zero() {
        let triangles = triangles_from_obj_reader(
            &mut TWO_GROUP_OBJ.as_bytes(),
            Path::new("dice.obj"),
            no_materials,
        )
        .unwrap();

        assert_eq!(triangles.len(), 2);
        assert!(triangles.iter().all(|t| t.group_id == 0));
    }

    #[test]
    fn test_polygons_are_triangulated() {
        let triangles =
            triangles_from_obj_reader(&mut QUAD_OBJ.as_bytes(), Path::new("quad.obj"), no_materials)
                .unwrap();

        assert_eq!(triangles.len(), 2);
        let mesh = build_indexed_mesh(&triangles);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices.len(), 6);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("definitely/not/here/dice.obj");
        let err = load_triangles(path).unwrap_err();

        assert!(matches!(err, MeshError::Load { .. }));
        assert!(err.to_string().contains("definitely/not/here/dice.obj"));
    }

    #[test]
    fn test_load_indexed_mesh_standardizes() {
        let path = std::env::temp_dir().join(format!("dicebox_loader_{}.obj", std::process::id()));
        std::fs::write(&path, QUAD_OBJ).unwrap();

        let mesh = load_indexed_mesh(&path);
        std::fs::remove_file(&path).unwrap();

        let mesh = mesh.unwrap();
        let bounds = mesh.bounds().unwrap();
        assert!((bounds.diagonal() - 2.0).abs() < 1e-5);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_load_indexed_mesh_rejects_empty_model() {
        let path = std::env::temp_dir().join(format!("dicebox_empty_{}.obj", std::process::id()));
        std::fs::write(&path, "# nothing here\n").unwrap();

        let result = load_indexed_mesh(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(MeshError::Empty { .. })));
    }
}
