//! Lifecycle contract between the window host and a scene

use crate::gfx::{DrawParams, GpuMesh};

/// Anything [`HostApp`](crate::app::HostApp) can drive
///
/// Per redraw the host calls, in order: [`on_frame`](Renderable::on_frame),
/// [`on_ui`](Renderable::on_ui), then reads [`gpu_mesh`](Renderable::gpu_mesh)
/// and [`draw_params`](Renderable::draw_params) to render.
pub trait Renderable {
    /// Called once after the GPU device exists, before the first frame
    fn on_init(&mut self, device: &wgpu::Device) -> anyhow::Result<()>;

    /// Advances the scene by one frame
    fn on_frame(&mut self, delta_time: f32, frame_rate: f32);

    /// Builds this frame's UI
    fn on_ui(&mut self, ui: &imgui::Ui);

    fn on_resize(&mut self, width: u32, height: u32);

    /// Called once when the host exits; releases GPU resources
    fn on_shutdown(&mut self);

    fn draw_params(&self) -> DrawParams;

    /// The mesh to draw, `None` before `on_init` or after `on_shutdown`
    fn gpu_mesh(&self) -> Option<&GpuMesh>;
}
