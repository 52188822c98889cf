use wgpu::util::DeviceExt;

use crate::geometry::{cube, Palette, VisualizationMode};

/// The cube's three GPU buffers.
///
/// - position: uploaded once at creation, immutable thereafter
/// - color: rewritten in place when the palette changes (fixed byte length)
/// - index: recreated when the visualization mode changes
///
/// The index buffer and its count are updated together in [`set_mode`], so a
/// stale count can never be paired with a fresh buffer. Ordering discipline:
/// the owner must apply `set_mode` before the draw call that depends on it;
/// the render path itself never mutates this set.
///
/// [`set_mode`]: BufferSet::set_mode
pub struct BufferSet {
    position: wgpu::Buffer,
    color: wgpu::Buffer,
    index: wgpu::Buffer,
    index_count: u32,
    mode: VisualizationMode,
}

impl BufferSet {
    /// Allocates and uploads all three buffers.
    pub fn new(device: &wgpu::Device, palette: &Palette, mode: VisualizationMode) -> Self {
        let position = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cubist position vbo"),
            contents: bytemuck::cast_slice(&cube::POSITIONS),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // COPY_DST: palette swaps rewrite this buffer in place.
        let color = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cubist color vbo"),
            contents: bytemuck::cast_slice(&palette.vertex_colors()),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let (index, index_count) = create_index_buffer(device, mode);

        Self {
            position,
            color,
            index,
            index_count,
            mode,
        }
    }

    #[inline]
    pub fn position(&self) -> &wgpu::Buffer {
        &self.position
    }

    #[inline]
    pub fn color(&self) -> &wgpu::Buffer {
        &self.color
    }

    #[inline]
    pub fn index(&self) -> &wgpu::Buffer {
        &self.index
    }

    /// Number of indices in the currently bound index buffer.
    #[inline]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Mode the index buffer was last built for.
    #[inline]
    pub fn mode(&self) -> VisualizationMode {
        self.mode
    }

    /// Rewrites the color buffer for a new palette.
    ///
    /// The expansion always produces 24 RGBA entries, so the byte length
    /// matches the original allocation and the write happens in place.
    /// Position and index buffers are untouched.
    pub fn set_palette(&mut self, queue: &wgpu::Queue, palette: &Palette) {
        queue.write_buffer(
            &self.color,
            0,
            bytemuck::cast_slice(&palette.vertex_colors()),
        );
    }

    /// Rebuilds the index buffer for `mode`.
    ///
    /// No-op when the mode is unchanged; callers must not trigger redundant
    /// uploads per logical change. The solid and wireframe lists differ in
    /// length, so a mode change allocates a fresh buffer rather than writing
    /// over the old one.
    pub fn set_mode(&mut self, device: &wgpu::Device, mode: VisualizationMode) {
        if mode == self.mode {
            return;
        }

        let (index, index_count) = create_index_buffer(device, mode);
        self.index = index;
        self.index_count = index_count;
        self.mode = mode;
        log::debug!("index buffer rebuilt for mode {mode}");
    }
}

fn create_index_buffer(device: &wgpu::Device, mode: VisualizationMode) -> (wgpu::Buffer, u32) {
    let data = cube::indices(mode);
    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("cubist index buffer"),
        contents: bytemuck::cast_slice(data),
        usage: wgpu::BufferUsages::INDEX,
    });
    (buffer, data.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    // GPU allocation itself needs a device; what matters for correctness is
    // that the CPU-side data fed to the uploads round-trips exactly.

    #[test]
    fn mode_toggle_yields_byte_identical_index_data() {
        let before: &[u8] = bytemuck::cast_slice(cube::indices(VisualizationMode::Solid));
        let _wire: &[u8] = bytemuck::cast_slice(cube::indices(VisualizationMode::Wireframe));
        let after: &[u8] = bytemuck::cast_slice(cube::indices(VisualizationMode::Solid));
        assert_eq!(before, after);
    }

    #[test]
    fn color_upload_length_is_mode_independent() {
        use crate::geometry::palette::{CLASSIC, MUTED, PASTEL};
        let len = |p: &Palette| bytemuck::cast_slice::<[f32; 4], u8>(&p.vertex_colors()).len();
        assert_eq!(len(&CLASSIC), len(&MUTED));
        assert_eq!(len(&MUTED), len(&PASTEL));
        assert_eq!(len(&CLASSIC), cube::VERTEX_COUNT * 4 * std::mem::size_of::<f32>());
    }
}
