//! GPU-resident copies of indexed meshes

use crate::mesh::IndexedMesh;

/// Vertex and index buffers uploaded from an [`IndexedMesh`]
pub struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    pub fn upload(device: &wgpu::Device, mesh: &IndexedMesh) -> Self {
        let vertex_buffer = wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some("Dice Vertex Buffer"),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );
        let index_buffer = wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some("Dice Index Buffer"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        );

        log::debug!(
            "Uploaded mesh: {} vertices, {} indices",
            mesh.vertices.len(),
            mesh.indices.len()
        );

        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

/// Clamps a requested index count to what the mesh holds, rounded down to
/// whole triangles.
pub fn clamp_index_count(requested: u32, available: u32) -> u32 {
    let count = requested.min(available);
    count - count % 3
}

pub trait DrawMesh<'a> {
    /// Draws the first `index_limit` indices of `mesh`
    fn draw_mesh(&mut self, mesh: &'a GpuMesh, index_limit: u32);
}

impl<'a, 'b> DrawMesh<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh(&mut self, mesh: &'b GpuMesh, index_limit: u32) {
        let count = clamp_index_count(index_limit, mesh.index_count());
        if count == 0 {
            return;
        }

        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..count, 0, 0..1);
    }
}
