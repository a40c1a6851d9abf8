//! WGPU-based rendering engine for the dice scene
//!
//! Owns the surface, device, depth buffer, per-frame uniform and one
//! pipeline per display mode. A frame is a single depth-tested pass over the
//! dice mesh followed by an optional UI overlay.

use std::sync::Arc;

use anyhow::Context;
use wgpu::TextureFormat;

use super::{
    display::{DisplayMode, DrawParams},
    gpu_mesh::{DrawMesh, GpuMesh},
    pipeline_manager::{PipelineConfig, PipelineManager},
    texture_resource::DepthTexture,
    uniform_buffer::{DiceUniform, UniformBuffer},
};

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.1,
    g: 0.2,
    b: 0.3,
    a: 1.0,
};

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: DepthTexture,
    format: TextureFormat,
    pipeline_manager: PipelineManager,
    dice_uniform: UniformBuffer<DiceUniform>,
    uniform_bind_group: wgpu::BindGroup,
}

impl RenderEngine {
    /// Creates a new render engine for the given window
    ///
    /// # Errors
    /// Fails if no compatible adapter or device is available.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> anyhow::Result<RenderEngine> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .context("Failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("Failed to request adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("Failed to request a device")?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .context("Surface reports no supported formats")?;
        let alpha_mode = surface_capabilities
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: present_mode(vsync),
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "Surface configured: {}x{} {:?}, {:?}",
            config.width,
            config.height,
            format,
            config.present_mode
        );

        let depth_texture = DepthTexture::create_depth_texture(&device, &config, "depth_texture");

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Dice Uniform Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let dice_uniform = UniformBuffer::new_with_data(&device, &DiceUniform::default());
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Dice Uniform Bind Group"),
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: dice_uniform.binding_resource(),
            }],
        });

        let device_handle: Arc<wgpu::Device> = device.into();
        let queue_handle: Arc<wgpu::Queue> = queue.into();
        let mut pipeline_manager = PipelineManager::new(device_handle.clone());

        pipeline_manager.load_shader("dice", include_str!("dice.wgsl"));

        for mode in DisplayMode::variants() {
            pipeline_manager.register_pipeline(
                mode.pipeline_name(),
                PipelineConfig::default()
                    .with_label(mode.pipeline_name())
                    .with_shader("dice")
                    .with_cull_mode(mode.cull_mode())
                    .with_front_face(mode.front_face.to_wgpu())
                    .with_depth_stencil(DepthTexture::DEPTH_FORMAT)
                    .with_bind_group_layouts(vec![uniform_bind_group_layout.clone()])
                    .with_color_targets(vec![Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })]),
            );
        }

        if let Err(errors) = pipeline_manager.create_all_pipelines() {
            for error in errors {
                log::error!("{}", error);
            }
        }

        Ok(RenderEngine {
            surface,
            device: device_handle,
            queue: queue_handle,
            config,
            depth_texture,
            format,
            pipeline_manager,
            dice_uniform,
            uniform_bind_group,
        })
    }

    /// Renders one frame: the dice mesh, then the optional UI overlay
    ///
    /// Frames whose surface texture cannot be acquired are skipped; a lost or
    /// outdated surface is reconfigured for the next frame.
    pub fn render_frame<F>(
        &mut self,
        mesh: Option<&GpuMesh>,
        params: &DrawParams,
        ui_callback: Option<F>,
    ) where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(e) => {
                log::warn!("Skipping frame: {}", e);
                return;
            }
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniform = DiceUniform::new(params, self.get_surface_size());
        self.dice_uniform.update_content(&self.queue, uniform);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Dice Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if let Some(mesh) = mesh {
                render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);

                let pipeline_name = params.display.pipeline_name();
                if let Some(pipeline) = self.pipeline_manager.get_pipeline(pipeline_name) {
                    render_pass.set_pipeline(pipeline);
                    render_pass.draw_mesh(mesh, params.indices_to_draw);
                } else {
                    log::warn!("Pipeline '{}' unavailable", pipeline_name);
                }
            }
        }

        if let Some(ui_callback) = ui_callback {
            ui_callback(
                &self.device,
                &self.queue,
                &mut encoder,
                &surface_texture_view,
            );
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
    }

    /// Resizes the surface and recreates the depth buffer
    ///
    /// Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture =
            DepthTexture::create_depth_texture(&self.device, &self.config, "depth_texture");
    }

    /// Switches between vsync'd and uncapped presentation
    pub fn set_vsync(&mut self, enable: bool) {
        let present_mode = present_mode(enable);
        if self.config.present_mode == present_mode {
            return;
        }
        self.config.present_mode = present_mode;
        self.surface.configure(&self.device, &self.config);
        log::info!("Present mode: {:?}", present_mode);
    }

    /// Current surface dimensions in pixels
    pub fn get_surface_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.format
    }
}

fn present_mode(vsync: bool) -> wgpu::PresentMode {
    if vsync {
        wgpu::PresentMode::AutoVsync
    } else {
        wgpu::PresentMode::AutoNoVsync
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_mode_follows_vsync() {
        assert_eq!(present_mode(true), wgpu::PresentMode::AutoVsync);
        assert_eq!(present_mode(false), wgpu::PresentMode::AutoNoVsync);
    }
}
