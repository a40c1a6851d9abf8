//! # Graphics Module
//!
//! GPU side of the dice scene: surface and device setup, the dice pipeline
//! in each display mode, mesh buffers and the per-frame uniform.
//!
//! ## Key Components
//!
//! - [`RenderEngine`] - Owns the surface, depth buffer and pipelines; draws a frame
//! - [`GpuMesh`] - Vertex and index buffers uploaded from an indexed mesh
//! - [`DrawParams`] - Pose, index limit and display mode for one frame
//! - [`PipelineManager`] - Named pipelines built from [`PipelineConfig`]
//!
//! ## Usage
//!
//! ```no_run
//! use dicebox::gfx::{DrawParams, GpuMesh, RenderEngine};
//!
//! // The render engine is created by the host once a window exists
//! // let mut engine = pollster::block_on(RenderEngine::new(window, w, h, true))?;
//! // let mesh = GpuMesh::upload(engine.device(), &indexed_mesh);
//! // engine.render_frame(Some(&mesh), &DrawParams::default(), None::<fn(_, _, _, _)>);
//! ```

pub mod display;
pub mod gpu_mesh;
pub mod pipeline_manager;
pub mod render_engine;
pub mod texture_resource;
pub mod uniform_buffer;

// Re-export commonly used types
pub use display::{DisplayMode, DrawParams, FrontFaceMode};
pub use gpu_mesh::{DrawMesh, GpuMesh};
pub use pipeline_manager::{PipelineConfig, PipelineManager};
pub use render_engine::RenderEngine;
pub use uniform_buffer::{DiceUniform, UniformBuffer};
