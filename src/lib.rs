//! Dicebox
//!
//! An interactive 3D die built on wgpu and winit. An OBJ model is indexed
//! by vertex position and normalized into the unit cube, then rolled by a
//! scripted animation from an ImGui panel.

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod mesh;
pub mod performance;
pub mod renderable;
pub mod scene;
pub mod ui;

// Re-export main types for convenience
pub use app::HostApp;
pub use config::DiceConfig;
pub use renderable::Renderable;
pub use scene::DiceScene;
