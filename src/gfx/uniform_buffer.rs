//! Typed uniform buffers and the dice uniform block

use std::marker::PhantomData;

use super::display::DrawParams;

/// Remembers the last bytes written to a buffer
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContentTracker {
    previous_content: Vec<u8>,
}

impl ContentTracker {
    pub fn new(initial: &[u8]) -> Self {
        Self {
            previous_content: initial.to_vec(),
        }
    }

    /// Records `content` and reports whether it differs from the last record
    pub fn update(&mut self, content: &[u8]) -> bool {
        if self.previous_content == content {
            return false;
        }
        self.previous_content.clear();
        self.previous_content.extend_from_slice(content);
        true
    }
}

/// Uniform buffer holding one `Content` value
///
/// Skips writes that would not change the buffer.
pub struct UniformBuffer<Content> {
    buffer: wgpu::Buffer,
    content_type: PhantomData<Content>,
    tracker: ContentTracker,
}

impl<Content: bytemuck::Pod> UniformBuffer<Content> {
    fn name() -> &'static str {
        let type_name = std::any::type_name::<Content>();
        match type_name.rfind(':') {
            Some(pos) => &type_name[(pos + 1)..],
            None => type_name,
        }
    }

    /// Create buffer with initial data
    pub fn new_with_data(device: &wgpu::Device, initial_content: &Content) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("UniformBuffer: {}", Self::name())),
            size: std::mem::size_of::<Content>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: true,
        });

        buffer
            .slice(..)
            .get_mapped_range_mut()
            .clone_from_slice(bytemuck::bytes_of(initial_content));
        buffer.unmap();

        UniformBuffer {
            buffer,
            content_type: PhantomData,
            tracker: ContentTracker::new(bytemuck::bytes_of(initial_content)),
        }
    }

    /// Update buffer content (skips the write when nothing changed)
    pub fn update_content(&mut self, queue: &wgpu::Queue, content: Content) {
        let new_content = bytemuck::bytes_of(&content);
        if self.tracker.update(new_content) {
            queue.write_buffer(&self.buffer, 0, new_content);
        }
    }

    /// Get binding resource
    pub fn binding_resource(&self) -> wgpu::BindingResource<'_> {
        self.buffer.as_entire_binding()
    }
}

/// Per-frame uniform block consumed by `dice.wgsl`
///
/// MUST match the `DiceUniform` struct in the shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DiceUniform {
    /// Rotation angles in radians (x, y, z), w unused
    pub rotation: [f32; 4],
    /// Translation (x, y), zw unused
    pub translation: [f32; 4],
    /// Surface width, height, model scale, unused
    pub viewport: [f32; 4],
}

impl DiceUniform {
    /// Fraction of the view the normalized mesh spans
    pub const MODEL_SCALE: f32 = 0.35;

    pub fn new(params: &DrawParams, surface_size: (u32, u32)) -> Self {
        Self {
            rotation: [params.angle.x, params.angle.y, params.angle.z, 0.0],
            translation: [params.translation.x, params.translation.y, 0.0, 0.0],
            viewport: [
                surface_size.0 as f32,
                surface_size.1 as f32,
                Self::MODEL_SCALE,
                0.0,
            ],
        }
    }
}

impl Default for DiceUniform {
    fn default() -> Self {
        Self::new(&DrawParams::default(), (1, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Vector2, Vector3};

    #[test]
    fn test_tracker_skips_identical_content() {
        let uniform = DiceUniform::default();
        let mut tracker = ContentTracker::new(bytemuck::bytes_of(&uniform));

        assert!(!tracker.update(bytemuck::bytes_of(&uniform)));

        let mut moved = uniform;
        moved.translation[0] = 0.25;
        assert!(tracker.update(bytemuck::bytes_of(&moved)));
        assert!(!tracker.update(bytemuck::bytes_of(&moved)));
        assert!(tracker.update(bytemuck::bytes_of(&uniform)));
    }

    #[test]
    fn test_uniform_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<DiceUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<DiceUniform>(), 48);
    }

    #[test]
    fn test_uniform_carries_pose() {
        let params = DrawParams {
            angle: Vector3::new(0.1, 0.2, 0.3),
            translation: Vector2::new(-1.0, 0.5),
            ..Default::default()
        };
        let uniform = DiceUniform::new(&params, (800, 600));

        assert_eq!(uniform.rotation, [0.1, 0.2, 0.3, 0.0]);
        assert_eq!(uniform.translation, [-1.0, 0.5, 0.0, 0.0]);
        assert_eq!(uniform.viewport[0], 800.0);
        assert_eq!(uniform.viewport[1], 600.0);
    }
}
