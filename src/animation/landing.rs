//! Landing orientations for each die face
//!
//! Angles were picked by hand so the matching face of the dice model points
//! at the viewer. Only the X and Y rotations are set on landing; Z is left
//! wherever the roll put it.

use std::ops::RangeInclusive;

use cgmath::{Deg, Rad};

/// Faces of the die, numbered as printed on the model
pub const FACES: RangeInclusive<u8> = 1..=6;

/// `(angle_x, angle_y)` in degrees, indexed by `face - 1`
pub const LANDING_ANGLES_DEG: [(f32, f32); 6] = [
    (115.0, 108.0),
    (342.0, 167.0),
    (68.0, 193.0),
    (68.0, 14.0),
    (342.0, 347.0),
    (115.0, 288.0),
];

/// Returns the landing rotation for a face, `None` outside `1..=6`
pub fn landing_angles(face: u8) -> Option<(Rad<f32>, Rad<f32>)> {
    if !FACES.contains(&face) {
        return None;
    }
    let (x, y) = LANDING_ANGLES_DEG[usize::from(face - 1)];
    Some((Rad::from(Deg(x)), Rad::from(Deg(y))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_face_has_an_entry() {
        for face in FACES {
            assert!(landing_angles(face).is_some(), "face {} missing", face);
        }
    }

    #[test]
    fn test_out_of_range_faces() {
        assert!(landing_angles(0).is_none());
        assert!(landing_angles(7).is_none());
    }

    #[test]
    fn test_angles_are_converted_to_radians() {
        let (x, y) = landing_angles(4).unwrap();
        assert!((x.0 - 68.0f32.to_radians()).abs() < 1e-6);
        assert!((y.0 - 14.0f32.to_radians()).abs() < 1e-6);
    }
}
