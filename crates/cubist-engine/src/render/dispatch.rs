use crate::geometry::{cube, VisualizationMode};

/// Primitive topology and index count for one indexed draw call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawParams {
    pub topology: wgpu::PrimitiveTopology,
    pub index_count: u32,
}

/// Looks up the draw parameters for `mode`.
///
/// Wireframe submits the 48-entry edge list as lines; every other mode
/// (including the shading placeholders) submits the 36-entry triangle list.
#[inline]
pub fn draw_params(mode: VisualizationMode) -> DrawParams {
    if mode.is_solid() {
        DrawParams {
            topology: wgpu::PrimitiveTopology::TriangleList,
            index_count: cube::SOLID_INDICES.len() as u32,
        }
    } else {
        DrawParams {
            topology: wgpu::PrimitiveTopology::LineList,
            index_count: cube::WIREFRAME_INDICES.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wireframe_draws_48_lines() {
        let p = draw_params(VisualizationMode::Wireframe);
        assert_eq!(p.topology, wgpu::PrimitiveTopology::LineList);
        assert_eq!(p.index_count, 48);
    }

    #[test]
    fn non_wireframe_modes_draw_36_triangles() {
        for mode in [
            VisualizationMode::Solid,
            VisualizationMode::FlatShading,
            VisualizationMode::SmoothShading,
        ] {
            let p = draw_params(mode);
            assert_eq!(p.topology, wgpu::PrimitiveTopology::TriangleList);
            assert_eq!(p.index_count, 36);
        }
    }

    #[test]
    fn bogus_mode_string_draws_like_solid() {
        let bogus = draw_params(VisualizationMode::parse("Bogus"));
        assert_eq!(bogus, draw_params(VisualizationMode::Solid));
    }
}
