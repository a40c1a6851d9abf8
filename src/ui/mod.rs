//! # User Interface Module
//!
//! Dear ImGui overlay for the dice scene.
//!
//! ## Key Components
//!
//! - [`UiManager`] - ImGui integration with winit and wgpu
//! - [`roll_panel`] - "Roll!" button with the last result
//! - [`display_panel`] - Triangle limit, back-face culling and winding order
//!
//! The FPS overlay lives with the frame timer in
//! [`performance`](crate::performance).

pub mod manager;
pub mod panel;

// Re-export main types
pub use manager::UiManager;
pub use panel::{display_panel, roll_panel, DisplaySettings};
