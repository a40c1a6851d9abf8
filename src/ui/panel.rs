//! Dice control panels
//!
//! Panels only read and edit plain state; the scene decides what a click
//! means.

use crate::gfx::{DisplayMode, FrontFaceMode};

/// Display options edited by [`display_panel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Triangles drawn from the start of the index buffer
    pub triangles_to_draw: u32,
    pub mode: DisplayMode,
    pub vsync: bool,
}

impl DisplaySettings {
    /// Draw everything, no culling, clockwise front faces, vsync on
    pub fn showing_all(triangle_count: u32) -> Self {
        Self {
            triangles_to_draw: triangle_count,
            mode: DisplayMode::default(),
            vsync: true,
        }
    }

    pub fn indices_to_draw(&self) -> u32 {
        self.triangles_to_draw.saturating_mul(3)
    }
}

/// Roll button with the last result. Returns whether "Roll!" was clicked.
pub fn roll_panel(ui: &imgui::Ui, last_face: Option<u8>, rolling: bool) -> bool {
    let mut clicked = false;

    ui.window("Dice")
        .size([260.0, 160.0], imgui::Condition::FirstUseEver)
        .position([20.0, 20.0], imgui::Condition::FirstUseEver)
        .resizable(false)
        .build(|| {
            // Disabled while rolling; a click then would be ignored anyway
            ui.disabled(rolling, || {
                clicked = ui.button_with_size("Roll!", [ui.content_region_avail()[0], 40.0]);
            });

            ui.separator();
            match last_face {
                Some(face) => ui.text(format!("Last roll: {}", face)),
                None => ui.text("Last roll: -"),
            }
            if rolling {
                ui.text_colored([1.0, 0.8, 0.2, 1.0], "Rolling...");
            } else {
                ui.text("At rest");
            }
        });

    clicked
}

/// Triangle limit, culling, winding and vsync controls
pub fn display_panel(ui: &imgui::Ui, settings: &mut DisplaySettings, triangle_count: u32) {
    ui.window("Display")
        .size([360.0, 220.0], imgui::Condition::FirstUseEver)
        .position([20.0, 200.0], imgui::Condition::FirstUseEver)
        .build(|| {
            ui.slider(
                "Triangles",
                0,
                triangle_count,
                &mut settings.triangles_to_draw,
            );
            settings.triangles_to_draw = settings.triangles_to_draw.min(triangle_count);

            ui.checkbox("Back-face culling", &mut settings.mode.back_face_culling);

            let labels = FrontFaceMode::ALL.map(FrontFaceMode::label);
            let mut current = front_face_index(settings.mode.front_face);
            if ui.combo_simple_string("Front face", &mut current, &labels) {
                settings.mode.front_face = FrontFaceMode::ALL[current];
            }

            ui.checkbox("VSync", &mut settings.vsync);
        });
}

fn front_face_index(mode: FrontFaceMode) -> usize {
    FrontFaceMode::ALL
        .iter()
        .position(|m| *m == mode)
        .unwrap_or_default()
}
