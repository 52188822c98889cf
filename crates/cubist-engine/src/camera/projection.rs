use glam::Mat4;

/// Vertical field of view for the perspective frustum.
const FOV_Y: f32 = 65.0 * (std::f32::consts::PI / 180.0);

/// Half-extent of the fixed orthographic frustum.
const ORTHO_HALF_EXTENT: f32 = 3.0;

const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

/// Projection kind selected by the input surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Projection {
    #[default]
    Perspective,
    Orthographic,
}

impl Projection {
    /// Toggles between the two kinds.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Self::Perspective => Self::Orthographic,
            Self::Orthographic => Self::Perspective,
        }
    }
}

/// Derives the projection matrix for `kind` at the given viewport aspect
/// ratio (width / height, always > 0 since the surface is never configured
/// at zero size).
///
/// The orthographic frustum is a fixed ±3 symmetric box and deliberately does
/// not track the viewport aspect.
pub fn projection_matrix(kind: Projection, aspect: f32) -> Mat4 {
    match kind {
        Projection::Perspective => Mat4::perspective_rh(FOV_Y, aspect, Z_NEAR, Z_FAR),
        Projection::Orthographic => Mat4::orthographic_rh(
            -ORTHO_HALF_EXTENT,
            ORTHO_HALF_EXTENT,
            -ORTHO_HALF_EXTENT,
            ORTHO_HALF_EXTENT,
            Z_NEAR,
            Z_FAR,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perspective_aspect_changes_only_the_horizontal_scale() {
        let narrow = projection_matrix(Projection::Perspective, 1.0).to_cols_array();
        let wide = projection_matrix(Projection::Perspective, 2.0).to_cols_array();

        // Column-major: element 0 is the horizontal scale term.
        assert_ne!(narrow[0], wide[0]);
        for (i, (a, b)) in narrow.iter().zip(wide.iter()).enumerate().skip(1) {
            assert_eq!(a, b, "element {i} should not depend on aspect");
        }
    }

    #[test]
    fn orthographic_ignores_aspect() {
        let a = projection_matrix(Projection::Orthographic, 1.0);
        let b = projection_matrix(Projection::Orthographic, 2.0);
        assert_eq!(a, b);
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Projection::Perspective.toggled(), Projection::Orthographic);
        assert_eq!(Projection::Perspective.toggled().toggled(), Projection::Perspective);
    }
}
