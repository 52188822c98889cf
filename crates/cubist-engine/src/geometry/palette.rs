use super::cube::{FACE_COUNT, VERTEX_COUNT};

/// Straight-alpha RGBA color, components in `[0, 1]`.
///
/// The cube pipeline draws opaque faces without blending, so no premultiply
/// step is needed anywhere in this crate.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Ordered set of six face colors, one per cube face in catalog face order
/// (front, rear, top, bottom, right, left).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub colors: [Color; FACE_COUNT],
}

impl Palette {
    #[inline]
    pub const fn new(colors: [Color; FACE_COUNT]) -> Self {
        Self { colors }
    }

    /// Expands the palette into one RGBA entry per vertex.
    ///
    /// Each face color is repeated four times, matching the catalog's
    /// face-major vertex layout, for 24 entries total.
    pub fn vertex_colors(&self) -> [[f32; 4]; VERTEX_COUNT] {
        let mut out = [[0.0f32; 4]; VERTEX_COUNT];
        for (face, color) in self.colors.iter().enumerate() {
            for corner in 0..4 {
                out[face * 4 + corner] = color.to_array();
            }
        }
        out
    }

    /// Looks up a built-in palette by name.
    ///
    /// Returns `None` for unknown names; callers keep their current palette
    /// and warn rather than tearing down the frame loop.
    pub fn named(name: &str) -> Option<&'static Palette> {
        match name {
            "classic" => Some(&CLASSIC),
            "muted" => Some(&MUTED),
            "pastel" => Some(&PASTEL),
            _ => None,
        }
    }

    /// Names of all built-in palettes, in selection order.
    pub const NAMES: [&'static str; 3] = ["classic", "muted", "pastel"];
}

/// Saturated primaries; the default.
pub const CLASSIC: Palette = Palette::new([
    Color::rgba(0.0, 1.0, 1.0, 1.0), // front: cyan
    Color::rgba(1.0, 0.5, 0.0, 1.0), // rear: orange
    Color::rgba(0.0, 1.0, 0.0, 1.0), // top: green
    Color::rgba(0.0, 0.0, 1.0, 1.0), // bottom: blue
    Color::rgba(1.0, 1.0, 0.0, 1.0), // right: yellow
    Color::rgba(1.0, 0.0, 1.0, 1.0), // left: magenta
]);

pub const MUTED: Palette = Palette::new([
    Color::rgba(0.5, 0.5, 0.5, 1.0), // gray
    Color::rgba(0.8, 0.4, 0.0, 1.0), // orange
    Color::rgba(0.3, 0.7, 0.0, 1.0), // olive
    Color::rgba(0.6, 0.2, 0.8, 1.0), // purple
    Color::rgba(0.2, 0.8, 0.6, 1.0), // aqua
    Color::rgba(1.0, 1.0, 1.0, 1.0), // white
]);

pub const PASTEL: Palette = Palette::new([
    Color::rgba(1.0, 0.4, 0.4, 1.0), // light red
    Color::rgba(0.4, 1.0, 0.4, 1.0), // light green
    Color::rgba(0.4, 0.4, 1.0, 1.0), // light blue
    Color::rgba(1.0, 1.0, 0.4, 1.0), // light yellow
    Color::rgba(1.0, 0.4, 1.0, 1.0), // light magenta
    Color::rgba(0.4, 1.0, 1.0, 1.0), // light cyan
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Face;

    #[test]
    fn expansion_repeats_each_face_color_four_times_in_face_order() {
        let colors = CLASSIC.vertex_colors();
        assert_eq!(colors.len(), VERTEX_COUNT);
        for face in Face::ALL {
            let expected = CLASSIC.colors[face.ordinal()].to_array();
            for v in face.vertex_range() {
                assert_eq!(colors[v], expected);
            }
        }
    }

    #[test]
    fn builtin_palettes_stay_in_unit_range() {
        for name in Palette::NAMES {
            let palette = Palette::named(name).expect("built-in palette");
            for c in palette.colors {
                for component in c.to_array() {
                    assert!((0.0..=1.0).contains(&component), "{name}: {component}");
                }
            }
        }
    }

    #[test]
    fn unknown_palette_name_is_none() {
        assert!(Palette::named("neon").is_none());
        assert!(Palette::named("").is_none());
    }
}
