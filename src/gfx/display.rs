//! Per-frame draw parameters
//!
//! Everything the render step reads from the scene each frame: the die's
//! pose and how it should be drawn.

use cgmath::{Vector2, Vector3, Zero};

/// Winding order treated as the front of a triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontFaceMode {
    /// Clockwise, the orientation the dice model is authored in
    #[default]
    Cw,
    Ccw,
}

impl FrontFaceMode {
    pub const ALL: [FrontFaceMode; 2] = [FrontFaceMode::Cw, FrontFaceMode::Ccw];

    pub fn label(self) -> &'static str {
        match self {
            FrontFaceMode::Cw => "CW",
            FrontFaceMode::Ccw => "CCW",
        }
    }

    pub fn to_wgpu(self) -> wgpu::FrontFace {
        match self {
            FrontFaceMode::Cw => wgpu::FrontFace::Cw,
            FrontFaceMode::Ccw => wgpu::FrontFace::Ccw,
        }
    }
}

/// Rasterizer settings selectable from the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayMode {
    pub back_face_culling: bool,
    pub front_face: FrontFaceMode,
}

impl DisplayMode {
    /// Every mode that needs its own pipeline
    pub fn variants() -> [DisplayMode; 3] {
        [
            DisplayMode {
                back_face_culling: false,
                front_face: FrontFaceMode::Cw,
            },
            DisplayMode {
                back_face_culling: true,
                front_face: FrontFaceMode::Cw,
            },
            DisplayMode {
                back_face_culling: true,
                front_face: FrontFaceMode::Ccw,
            },
        ]
    }

    /// Pipeline registered for this mode.
    ///
    /// Without culling the winding order has no visible effect, so both
    /// front-face settings share one pipeline.
    pub fn pipeline_name(self) -> &'static str {
        match (self.back_face_culling, self.front_face) {
            (false, _) => "Dice",
            (true, FrontFaceMode::Cw) => "DiceCullCw",
            (true, FrontFaceMode::Ccw) => "DiceCullCcw",
        }
    }

    pub fn cull_mode(self) -> Option<wgpu::Face> {
        self.back_face_culling.then_some(wgpu::Face::Back)
    }
}

/// What the render step needs from the scene for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    /// Rotation per axis, radians
    pub angle: Vector3<f32>,
    pub translation: Vector2<f32>,
    /// Number of indices to draw, starting from the first
    pub indices_to_draw: u32,
    pub display: DisplayMode,
    /// Present in sync with the display refresh
    pub vsync: bool,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            angle: Vector3::zero(),
            translation: Vector2::zero(),
            indices_to_draw: 0,
            display: DisplayMode::default(),
            vsync: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_have_distinct_pipelines() {
        let names: Vec<_> = DisplayMode::variants()
            .iter()
            .map(|m| m.pipeline_name())
            .collect();
        assert_eq!(names, vec!["Dice", "DiceCullCw", "DiceCullCcw"]);
    }

    #[test]
    fn test_every_mode_maps_to_a_registered_pipeline() {
        let registered: Vec<_> = DisplayMode::variants()
            .iter()
            .map(|m| m.pipeline_name())
            .collect();
        for back_face_culling in [false, true] {
            for front_face in FrontFaceMode::ALL {
                let mode = DisplayMode {
                    back_face_culling,
                    front_face,
                };
                assert!(registered.contains(&mode.pipeline_name()));
            }
        }
    }

    #[test]
    fn test_cull_mode() {
        assert_eq!(DisplayMode::default().cull_mode(), None);
        let culled = DisplayMode {
            back_face_culling: true,
            ..Default::default()
        };
        assert_eq!(culled.cull_mode(), Some(wgpu::Face::Back));
    }
}
