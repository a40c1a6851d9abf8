//! # Vertex Data Structures
//!
//! GPU-compatible vertex format for the dice mesh.

/// A mesh vertex with a position and an achromatic tint.
///
/// The tint is derived from the face-group id of the triangle that first
/// introduced this position, copied into all three channels.
///
/// # Memory Layout
///
/// `#[repr(C)]` keeps the layout C-compatible so the vertex slice can be
/// cast straight into a GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// Grayscale tint [r, g, b], all channels equal
    pub tint: [f32; 3],
}

impl Vertex {
    /// Builds a vertex whose tint is the face-group id in every channel
    pub fn with_group(position: [f32; 3], group_id: u32) -> Self {
        let shade = group_id as f32;
        Self {
            position,
            tint: [shade, shade, shade],
        }
    }

    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// - Attribute 0: Position (Float32x3) at shader location 0
    /// - Attribute 1: Tint (Float32x3) at shader location 1
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Hashable identity of a vertex position.
///
/// Floats are compared by bit pattern, with `-0.0` folded onto `0.0` so both
/// zeros name the same position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PositionKey([u32; 3]);

impl PositionKey {
    pub fn new(position: [f32; 3]) -> Self {
        Self(position.map(|c| if c == 0.0 { 0.0f32.to_bits() } else { c.to_bits() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_matches_struct() {
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[1].offset, 12);
    }

    #[test]
    fn test_group_tint_is_grayscale() {
        let vertex = Vertex::with_group([1.0, 2.0, 3.0], 2);
        assert_eq!(vertex.tint, [2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_signed_zero_positions_share_a_key() {
        assert_eq!(
            PositionKey::new([0.0, -0.0, 1.0]),
            PositionKey::new([-0.0, 0.0, 1.0])
        );
        assert_ne!(
            PositionKey::new([0.0, 0.0, 1.0]),
            PositionKey::new([0.0, 0.0, -1.0])
        );
    }
}
