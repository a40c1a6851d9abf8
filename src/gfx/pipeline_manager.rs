//! Render pipeline management
//!
//! Pipelines are registered by name from a [`PipelineConfig`] and built
//! either all at once or lazily on first request.

use std::{collections::HashMap, sync::Arc};
use wgpu::*;

use crate::mesh::Vertex;

/// Configuration for creating a render pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub label: String,
    pub shader: String,
    pub bind_group_layouts: Vec<BindGroupLayout>,
    pub cull_mode: Option<Face>,
    pub front_face: FrontFace,
    pub depth_format: Option<TextureFormat>,
    pub color_targets: Vec<Option<ColorTargetState>>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            label: "Default Pipeline".to_string(),
            shader: "shader.wgsl".to_string(),
            bind_group_layouts: Vec::new(),
            cull_mode: None,
            front_face: FrontFace::Ccw,
            depth_format: None,
            color_targets: vec![Some(ColorTargetState {
                format: TextureFormat::Bgra8Unorm,
                blend: Some(BlendState::REPLACE),
                write_mask: ColorWrites::ALL,
            })],
        }
    }
}

impl PipelineConfig {
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_owned();
        self
    }

    pub fn with_shader(mut self, shader: &str) -> Self {
        self.shader = shader.to_string();
        self
    }

    pub fn with_cull_mode(mut self, face: Option<Face>) -> Self {
        self.cull_mode = face;
        self
    }

    pub fn with_front_face(mut self, front_face: FrontFace) -> Self {
        self.front_face = front_face;
        self
    }

    /// Sets all bind group layouts at once (builder pattern)
    pub fn with_bind_group_layouts(mut self, layouts: Vec<BindGroupLayout>) -> Self {
        self.bind_group_layouts = layouts;
        self
    }

    /// Enables depth testing against a buffer of the given format
    pub fn with_depth_stencil(mut self, format: TextureFormat) -> Self {
        self.depth_format = Some(format);
        self
    }

    pub fn with_color_targets(mut self, targets: Vec<Option<ColorTargetState>>) -> Self {
        self.color_targets = targets;
        self
    }
}

/// Manages render pipelines with caching and lazy creation
pub struct PipelineManager {
    device: Arc<Device>,
    pipelines: HashMap<String, RenderPipeline>,
    pipeline_configs: HashMap<String, PipelineConfig>,
    shader_modules: HashMap<String, ShaderModule>,
    pending_pipelines: Vec<String>,
}

impl PipelineManager {
    pub fn new(device: Arc<Device>) -> Self {
        Self {
            device,
            pipelines: HashMap::new(),
            pipeline_configs: HashMap::new(),
            shader_modules: HashMap::new(),
            pending_pipelines: Vec::new(),
        }
    }

    /// Registers a pipeline configuration without creating it
    ///
    /// Pipelines are created lazily when first requested via `get_pipeline()`.
    pub fn register_pipeline(&mut self, name: &str, config: PipelineConfig) {
        self.pipeline_configs.insert(name.to_string(), config);
        self.pending_pipelines.push(name.to_string());
    }

    /// Compiles a WGSL shader module under `name`
    pub fn load_shader(&mut self, name: &str, source: &str) {
        let shader_module = self.device.create_shader_module(ShaderModuleDescriptor {
            label: Some(name),
            source: ShaderSource::Wgsl(source.into()),
        });

        self.shader_modules.insert(name.to_string(), shader_module);
    }

    /// Gets or creates a pipeline (lazy loading)
    ///
    /// Returns `None` if no configuration is registered under `name` or the
    /// pipeline could not be built.
    pub fn get_pipeline(&mut self, name: &str) -> Option<&RenderPipeline> {
        if self.pipelines.contains_key(name) {
            return self.pipelines.get(name);
        }

        let config = self.pipeline_configs.get(name).cloned()?;
        match self.create_pipeline_from_config(name, &config) {
            Ok(pipeline) => {
                self.pipelines.insert(name.to_string(), pipeline);
                self.pending_pipelines.retain(|n| n != name);
                self.pipelines.get(name)
            }
            Err(e) => {
                log::error!("Failed to create pipeline '{}': {}", name, e);
                None
            }
        }
    }

    /// Creates all pending pipelines immediately
    ///
    /// Returns one message per pipeline that failed to build.
    pub fn create_all_pipelines(&mut self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let pending = std::mem::take(&mut self.pending_pipelines);

        for name in pending {
            let Some(config) = self.pipeline_configs.get(&name).cloned() else {
                continue;
            };
            match self.create_pipeline_from_config(&name, &config) {
                Ok(pipeline) => {
                    self.pipelines.insert(name, pipeline);
                }
                Err(e) => {
                    errors.push(format!("Pipeline '{}': {}", name, e));
                    self.pending_pipelines.push(name);
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn create_pipeline_from_config(
        &self,
        name: &str,
        config: &PipelineConfig,
    ) -> Result<RenderPipeline, String> {
        let shader = self
            .shader_modules
            .get(&config.shader)
            .ok_or_else(|| format!("Shader '{}' not found", config.shader))?;

        let bind_group_layout_refs: Vec<&BindGroupLayout> =
            config.bind_group_layouts.iter().collect();
        let pipeline_layout = self
            .device
            .create_pipeline_layout(&PipelineLayoutDescriptor {
                label: Some(&format!("{} Layout", name)),
                bind_group_layouts: &bind_group_layout_refs,
                push_constant_ranges: &[],
            });

        let depth_stencil = config.depth_format.map(|format| DepthStencilState {
            format,
            depth_write_enabled: true,
            depth_compare: CompareFunction::Less,
            stencil: StencilState::default(),
            bias: DepthBiasState::default(),
        });

        let pipeline = self
            .device
            .create_render_pipeline(&RenderPipelineDescriptor {
                label: Some(&config.label),
                layout: Some(&pipeline_layout),
                vertex: VertexState {
                    module: shader,
                    entry_point: Some("vs_main"),
                    buffers: &[Vertex::desc()],
                    compilation_options: PipelineCompilationOptions::default(),
                },
                fragment: Some(FragmentState {
                    module: shader,
                    entry_point: Some("fs_main"),
                    targets: &config.color_targets,
                    compilation_options: PipelineCompilationOptions::default(),
                }),
                primitive: PrimitiveState {
                    topology: PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: config.front_face,
                    cull_mode: config.cull_mode,
                    polygon_mode: PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil,
                multisample: MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        Ok(pipeline)
    }

    /// Checks if a pipeline is registered (created or pending)
    pub fn has_pipeline(&self, name: &str) -> bool {
        self.pipeline_configs.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = PipelineConfig::default()
            .with_label("DICE")
            .with_shader("dice")
            .with_cull_mode(Some(Face::Back))
            .with_front_face(FrontFace::Cw)
            .with_depth_stencil(TextureFormat::Depth32Float);

        assert_eq!(config.label, "DICE");
        assert_eq!(config.shader, "dice");
        assert_eq!(config.cull_mode, Some(Face::Back));
        assert_eq!(config.front_face, FrontFace::Cw);
        assert_eq!(config.depth_format, Some(TextureFormat::Depth32Float));
    }

    #[test]
    fn test_default_config_draws_both_sides() {
        let config = PipelineConfig::default();
        assert_eq!(config.cull_mode, None);
        assert!(config.depth_format.is_none());
        assert_eq!(config.color_targets.len(), 1);
    }
}
