//! The dice scene
//!
//! Ties the indexed mesh, the roll animator and the display settings
//! together behind the [`Renderable`] lifecycle.

use log::info;
use rand::{rngs::StdRng, Rng};

use crate::{
    animation::RollAnimator,
    gfx::{DisplayMode, DrawParams, GpuMesh},
    mesh::IndexedMesh,
    renderable::Renderable,
    ui::{display_panel, roll_panel, DisplaySettings},
};

/// One die on a table, rolled from the UI
pub struct DiceScene<R: Rng = StdRng> {
    mesh: IndexedMesh,
    animator: RollAnimator<R>,
    gpu_mesh: Option<GpuMesh>,
    display: DisplaySettings,
    frame_rate: f32,
    viewport: (u32, u32),
}

impl<R: Rng> DiceScene<R> {
    pub fn new(mesh: IndexedMesh, animator: RollAnimator<R>) -> Self {
        let display = DisplaySettings::showing_all(mesh.triangle_count() as u32);
        let frame_rate = animator.config().nominal_frame_rate;
        Self {
            mesh,
            animator,
            gpu_mesh: None,
            display,
            frame_rate,
            viewport: (0, 0),
        }
    }

    pub fn animator(&self) -> &RollAnimator<R> {
        &self.animator
    }

    /// Starts with presentation synced or uncapped
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.display.vsync = vsync;
        self
    }

    /// Starts a roll at the last measured frame rate.
    ///
    /// Returns `false` if a roll is already in progress.
    pub fn roll(&mut self) -> bool {
        let started = self.animator.request_roll(self.frame_rate, self.viewport);
        if started {
            info!("Rolling at {:.0} fps", self.frame_rate);
        }
        started
    }

    pub fn display_settings(&self) -> DisplaySettings {
        self.display
    }

    /// Replaces the display settings, clamping the triangle limit to the mesh
    pub fn set_display_settings(&mut self, settings: DisplaySettings) {
        self.display = DisplaySettings {
            triangles_to_draw: settings.triangles_to_draw.min(self.triangle_count()),
            ..settings
        };
    }

    fn triangle_count(&self) -> u32 {
        self.mesh.triangle_count() as u32
    }
}

impl<R: Rng> Renderable for DiceScene<R> {
    fn on_init(&mut self, device: &wgpu::Device) -> anyhow::Result<()> {
        self.gpu_mesh = Some(GpuMesh::upload(device, &self.mesh));
        Ok(())
    }

    fn on_frame(&mut self, delta_time: f32, frame_rate: f32) {
        self.frame_rate = frame_rate;
        if let Some(face) = self.animator.tick(delta_time) {
            info!("Landed on {}", face);
        }
    }

    fn on_ui(&mut self, ui: &imgui::Ui) {
        if roll_panel(ui, self.animator.last_face(), self.animator.is_rolling()) {
            self.roll();
        }

        let triangle_count = self.triangle_count();
        display_panel(ui, &mut self.display, triangle_count);
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.animator.set_viewport(width, height);
    }

    fn on_shutdown(&mut self) {
        self.gpu_mesh = None;
    }

    fn draw_params(&self) -> DrawParams {
        DrawParams {
            angle: self.animator.angle(),
            translation: self.animator.translation(),
            indices_to_draw: self.display.indices_to_draw(),
            display: self.display.mode,
            vsync: self.display.vsync,
        }
    }

    fn gpu_mesh(&self) -> Option<&GpuMesh> {
        self.gpu_mesh.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        animation::{landing_angles, RollConfig},
        gfx::FrontFaceMode,
        mesh::{build_indexed_mesh, RawTriangle},
    };
    use rand::SeedableRng;

    fn cube_mesh() -> IndexedMesh {
        let triangles = vec![
            RawTriangle::new([[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0]], 0),
            RawTriangle::new([[-1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]], 0),
            RawTriangle::new([[-1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0]], 1),
        ];
        build_indexed_mesh(&triangles)
    }

    fn scene(seed: u64) -> DiceScene<StdRng> {
        let animator = RollAnimator::new(RollConfig::default(), StdRng::seed_from_u64(seed));
        DiceScene::new(cube_mesh(), animator)
    }

    #[test]
    fn test_new_scene_draws_everything_at_rest() {
        let scene = scene(1);
        let params = scene.draw_params();

        assert!(!scene.animator().is_rolling());
        assert!(scene.gpu_mesh().is_none());
        assert_eq!(params.indices_to_draw, 9);
        assert_eq!(params.display, DisplayMode::default());
        assert_eq!(params.angle, scene.animator().angle());
    }

    #[test]
    fn test_roll_runs_to_a_landing() {
        let mut scene = scene(2);
        scene.on_resize(800, 600);
        assert!(scene.roll());
        assert!(!scene.roll());

        let mut frames = 0;
        while scene.animator().is_rolling() {
            scene.on_frame(1.0 / 60.0, 60.0);
            frames += 1;
            assert!(frames <= 301, "roll did not finish");
        }

        let face = scene.animator().last_face().unwrap();
        let (x, y) = landing_angles(face).unwrap();
        let params = scene.draw_params();
        assert!((params.angle.x - x.0).abs() < 1e-5);
        assert!((params.angle.y - y.0).abs() < 1e-5);
    }

    #[test]
    fn test_frame_rate_sizes_the_next_roll() {
        let mut scene = scene(3);
        scene.on_frame(0.0, 30.0);
        assert!(scene.roll());

        let max_frames = scene.animator().state().max_frames;
        assert!((60..=150).contains(&max_frames));
    }

    #[test]
    fn test_display_settings_are_clamped() {
        let mut scene = scene(4);
        scene.set_display_settings(DisplaySettings {
            triangles_to_draw: 100,
            mode: DisplayMode {
                back_face_culling: true,
                front_face: FrontFaceMode::Ccw,
            },
            vsync: false,
        });

        let params = scene.draw_params();
        assert_eq!(params.indices_to_draw, 9);
        assert!(params.display.back_face_culling);
        assert_eq!(params.display.front_face, FrontFaceMode::Ccw);
        assert!(!params.vsync);

        scene.set_display_settings(DisplaySettings::showing_all(1));
        assert_eq!(scene.draw_params().indices_to_draw, 3);
    }

    #[test]
    fn test_vsync_reaches_draw_params() {
        let scene = scene(6);
        assert!(scene.draw_params().vsync);

        let scene = scene.with_vsync(false);
        assert!(!scene.display_settings().vsync);
        assert!(!scene.draw_params().vsync);
    }

    #[test]
    fn test_shutdown_without_init() {
        let mut scene = scene(5);
        scene.on_shutdown();
        assert!(scene.gpu_mesh().is_none());
    }
}
