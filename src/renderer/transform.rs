//! Entity transform construction.

use glam::{Mat4, Quat, Vec2};

/// Build the column-major transform that places one entity: scale the unit
/// quad by the entity's pixel size, then translate to its field position.
/// No rotation, z fixed at 0.
///
/// The shared quad spans one pixel at the reference resolution, so a
/// pixel-sized scale yields pixel-accurate extents.
#[inline]
pub fn entity_transform(pos: Vec2, size: Vec2) -> Mat4 {
    Mat4::from_scale_rotation_translation(size.extend(1.0), Quat::IDENTITY, pos.extend(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_column_major_layout() {
        let m = entity_transform(Vec2::new(-0.92, 0.25), Vec2::new(8.0, 80.0));
        let cols = m.to_cols_array();
        assert_eq!(cols[0], 8.0);
        assert_eq!(cols[5], 80.0);
        assert_eq!(cols[10], 1.0);
        assert_eq!(cols[12], -0.92);
        assert_eq!(cols[13], 0.25);
        assert_eq!(cols[15], 1.0);
        for i in [1, 2, 3, 4, 6, 7, 8, 9, 11, 14] {
            assert_eq!(cols[i], 0.0);
        }
    }

    #[test]
    fn test_scale_then_translate() {
        // A corner one pixel from center lands size-scaled pixels away from
        // the entity position.
        let m = entity_transform(Vec2::ZERO, Vec2::new(8.0, 80.0));
        let corner = m * Vec4::new(1.0 / 800.0, 1.0 / 600.0, 0.0, 1.0);
        assert!((corner.x - 8.0 / 800.0).abs() < EPS);
        assert!((corner.y - 80.0 / 600.0).abs() < EPS);
    }

    #[test]
    fn test_translation_applies_after_scale() {
        let m = entity_transform(Vec2::new(0.5, -0.5), Vec2::new(2.0, 2.0));
        let center = m * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((center.x - 0.5).abs() < EPS);
        assert!((center.y + 0.5).abs() < EPS);
    }
}
