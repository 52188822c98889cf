use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::camera::{projection_matrix, CameraState};
use crate::device::DEPTH_FORMAT;
use crate::geometry::VisualizationMode;
use crate::render::{draw_params, BufferSet, RenderCtx, RenderTarget};

/// Fixed translation composed with the look-at transform to push the cube in
/// front of the camera. Composes with, does not replace, the view matrix.
const CUBE_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -6.0);

/// View + projection uniforms, uploaded once per frame.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CameraUniform {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
}

/// Cube render dispatcher.
///
/// wgpu bakes the primitive topology into the pipeline, so the two index
/// topologies map to two pipelines compiled from the same shader; everything
/// else about the draw is shared. Mode selection is a lookup, not branching
/// draw code.
pub struct CubeRenderer {
    pipeline_triangles: wgpu::RenderPipeline,
    pipeline_lines: wgpu::RenderPipeline,
    camera_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl CubeRenderer {
    /// Compiles the shader and builds both pipelines.
    ///
    /// Shader module or pipeline creation failure is a fatal initialization
    /// error surfaced through wgpu validation before the render loop starts.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cubist cube shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/cube.wgsl").into()),
        });

        let camera_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cubist camera ubo"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("cubist camera bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: std::num::NonZeroU64::new(
                            std::mem::size_of::<CameraUniform>() as u64,
                        ),
                    },
                    count: None,
                }],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cubist camera bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_ubo.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("cubist cube pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let build = |topology: wgpu::PrimitiveTopology, label: &str| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[position_layout(), color_layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::LessEqual,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),

                multiview_mask: None,
                cache: None,
            })
        };

        let pipeline_triangles =
            build(wgpu::PrimitiveTopology::TriangleList, "cubist cube pipeline (triangles)");
        let pipeline_lines =
            build(wgpu::PrimitiveTopology::LineList, "cubist cube pipeline (lines)");

        Self {
            pipeline_triangles,
            pipeline_lines,
            camera_ubo,
            bind_group,
        }
    }

    /// Issues the one indexed draw for this frame.
    ///
    /// Expects the clear pass to have run already (loads color and depth).
    /// `buffers` must have been reconciled with `mode` before this call; the
    /// index buffer is never rebuilt mid-draw.
    pub fn render(
        &self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        buffers: &BufferSet,
        camera: &CameraState,
        mode: VisualizationMode,
    ) {
        debug_assert_eq!(
            buffers.mode(),
            mode,
            "index buffer must be rebuilt before the draw that depends on it"
        );

        let view = camera.view_matrix() * Mat4::from_translation(CUBE_OFFSET);
        let proj = projection_matrix(camera.projection(), ctx.aspect_ratio);

        let uniform = CameraUniform {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
        };
        ctx.queue
            .write_buffer(&self.camera_ubo, 0, bytemuck::bytes_of(&uniform));

        let params = draw_params(mode);
        let pipeline = match params.topology {
            wgpu::PrimitiveTopology::LineList => &self.pipeline_lines,
            _ => &self.pipeline_triangles,
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("cubist cube pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, buffers.position().slice(..));
        rpass.set_vertex_buffer(1, buffers.color().slice(..));
        rpass.set_index_buffer(buffers.index().slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..params.index_count, 0, 0..1);
    }
}

// Positions and colors live in separate tightly-packed buffers, so each
// vertex layout is a single attribute.

fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
    wgpu::VertexBufferLayout {
        array_stride: (3 * std::mem::size_of::<f32>()) as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRS,
    }
}

fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x4];
    wgpu::VertexBufferLayout {
        array_stride: (4 * std::mem::size_of::<f32>()) as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cube_offset_composes_with_look_at() {
        // Composing with the offset is the same as looking at a cube whose
        // origin sits at CUBE_OFFSET in world space; it does not replace the
        // look-at transform.
        let camera = CameraState::initial();
        let composed = camera.view_matrix() * Mat4::from_translation(CUBE_OFFSET);
        let a = composed.transform_point3(Vec3::ZERO);
        let b = camera.view_matrix().transform_point3(CUBE_OFFSET);
        assert_relative_eq!((a - b).length(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn projection_toggle_leaves_the_view_matrix_alone() {
        let mut camera = CameraState::initial();
        let before = camera.view_matrix();
        camera.set_projection(camera.projection().toggled());
        assert_eq!(camera.view_matrix(), before);
    }
}
