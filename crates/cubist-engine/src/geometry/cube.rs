use super::VisualizationMode;

/// Number of cube faces.
pub const FACE_COUNT: usize = 6;

/// Number of vertices in the cube mesh.
///
/// Four per face, six faces. Faces do not share vertices: each face needs its
/// own flat color, so corner positions are duplicated into every face that
/// touches them.
pub const VERTEX_COUNT: usize = FACE_COUNT * 4;

/// Cube face, in the fixed catalog order.
///
/// This ordering is load-bearing: positions, index sets, and palettes all
/// assume face `f` owns vertices `4*f .. 4*f + 4`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Face {
    Front,
    Rear,
    Top,
    Bottom,
    Right,
    Left,
}

impl Face {
    pub const ALL: [Face; FACE_COUNT] = [
        Face::Front,
        Face::Rear,
        Face::Top,
        Face::Bottom,
        Face::Right,
        Face::Left,
    ];

    /// Face ordinal, 0–5.
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Range of vertex indices owned by this face.
    #[inline]
    pub fn vertex_range(self) -> std::ops::Range<usize> {
        let base = self.ordinal() * 4;
        base..base + 4
    }
}

/// Vertex positions, 24 vertices × 3 components, fixed for the lifetime of
/// the program. Each face lists its four corners in CCW order as seen from
/// outside the cube.
#[rustfmt::skip]
pub const POSITIONS: [f32; VERTEX_COUNT * 3] = [
    // front
    -1.0, -1.0,  1.0,   1.0, -1.0,  1.0,   1.0,  1.0,  1.0,  -1.0,  1.0,  1.0,
    // rear
    -1.0, -1.0, -1.0,  -1.0,  1.0, -1.0,   1.0,  1.0, -1.0,   1.0, -1.0, -1.0,
    // top
    -1.0,  1.0, -1.0,  -1.0,  1.0,  1.0,   1.0,  1.0,  1.0,   1.0,  1.0, -1.0,
    // bottom
    -1.0, -1.0, -1.0,   1.0, -1.0, -1.0,   1.0, -1.0,  1.0,  -1.0, -1.0,  1.0,
    // right
     1.0, -1.0, -1.0,   1.0,  1.0, -1.0,   1.0,  1.0,  1.0,   1.0, -1.0,  1.0,
    // left
    -1.0, -1.0, -1.0,  -1.0, -1.0,  1.0,  -1.0,  1.0,  1.0,  -1.0,  1.0, -1.0,
];

/// Solid index set: two triangles per face (`0,1,2 / 0,2,3` offset by
/// `4*face`), CCW winding matching the face vertex order.
#[rustfmt::skip]
pub const SOLID_INDICES: [u16; 36] = [
     0,  1,  2,   0,  2,  3, // front
     4,  5,  6,   4,  6,  7, // rear
     8,  9, 10,   8, 10, 11, // top
    12, 13, 14,  12, 14, 15, // bottom
    16, 17, 18,  16, 18, 19, // right
    20, 21, 22,  20, 22, 23, // left
];

/// Wireframe index set: the four edges of each face as line-list pairs
/// (`(0,1),(1,2),(2,3),(3,0)` offset by `4*face`).
#[rustfmt::skip]
pub const WIREFRAME_INDICES: [u16; 48] = [
     0,  1,   1,  2,   2,  3,   3,  0, // front
     4,  5,   5,  6,   6,  7,   7,  4, // rear
     8,  9,   9, 10,  10, 11,  11,  8, // top
    12, 13,  13, 14,  14, 15,  15, 12, // bottom
    16, 17,  17, 18,  18, 19,  19, 16, // right
    20, 21,  21, 22,  22, 23,  23, 20, // left
];

/// Returns the index set for `mode`.
///
/// The shading placeholder modes share the solid triangle list.
#[inline]
pub fn indices(mode: VisualizationMode) -> &'static [u16] {
    if mode.is_solid() {
        &SOLID_INDICES
    } else {
        &WIREFRAME_INDICES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── index sets ────────────────────────────────────────────────────────

    #[test]
    fn solid_has_36_indices_within_vertex_range() {
        assert_eq!(SOLID_INDICES.len(), 36);
        assert!(SOLID_INDICES.iter().all(|&i| (i as usize) < VERTEX_COUNT));
    }

    #[test]
    fn wireframe_has_48_indices_within_vertex_range() {
        assert_eq!(WIREFRAME_INDICES.len(), 48);
        assert!(WIREFRAME_INDICES.iter().all(|&i| (i as usize) < VERTEX_COUNT));
    }

    #[test]
    fn solid_triangles_follow_the_per_face_pattern() {
        for face in 0..FACE_COUNT as u16 {
            let base = face * 4;
            let tri = &SOLID_INDICES[face as usize * 6..face as usize * 6 + 6];
            assert_eq!(tri, [base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    #[test]
    fn wireframe_edges_close_each_face_loop() {
        for face in 0..FACE_COUNT as u16 {
            let base = face * 4;
            let edges = &WIREFRAME_INDICES[face as usize * 8..face as usize * 8 + 8];
            assert_eq!(
                edges,
                [base, base + 1, base + 1, base + 2, base + 2, base + 3, base + 3, base]
            );
        }
    }

    #[test]
    fn mode_selection_is_stable_across_toggles() {
        let first = indices(VisualizationMode::Solid);
        let _ = indices(VisualizationMode::Wireframe);
        let again = indices(VisualizationMode::Solid);
        assert_eq!(bytemuck::cast_slice::<u16, u8>(first), bytemuck::cast_slice::<u16, u8>(again));
    }

    #[test]
    fn shading_modes_share_the_solid_index_set() {
        assert_eq!(indices(VisualizationMode::FlatShading), &SOLID_INDICES);
        assert_eq!(indices(VisualizationMode::SmoothShading), &SOLID_INDICES);
    }

    // ── positions / faces ─────────────────────────────────────────────────

    #[test]
    fn positions_are_unit_cube_corners() {
        assert_eq!(POSITIONS.len(), VERTEX_COUNT * 3);
        assert!(POSITIONS.iter().all(|c| c.abs() == 1.0));
    }

    #[test]
    fn face_vertex_ranges_tile_the_vertex_array() {
        let mut next = 0;
        for face in Face::ALL {
            let range = face.vertex_range();
            assert_eq!(range.start, next);
            assert_eq!(range.len(), 4);
            next = range.end;
        }
        assert_eq!(next, VERTEX_COUNT);
    }
}
