use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::geometry::{FLOATS_PER_VERTEX, House, Part};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderMode, RenderTarget};

use super::shader::create_wgsl_module;

/// Renders the house parts from one shared vertex buffer and one shared index
/// buffer.
///
/// - Vertices are re-flattened and uploaded every frame (the house moves).
/// - Indices are uploaded once; moving never changes them.
/// - One pipeline per [`RenderMode`], built lazily for the surface format.
/// - Each part has its own color uniform, drawn in wall → roof → door order.
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipelines: Option<[wgpu::RenderPipeline; 3]>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,

    parts: Vec<PartSlot>,

    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: u64,
    staging: Vec<f32>,

    index_buffer: Option<wgpu::Buffer>,
    index_count: usize,
}

struct PartSlot {
    ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct PartUniform {
    color: [f32; 4],
}

const VERTEX_STRIDE: u64 = (FLOATS_PER_VERTEX * std::mem::size_of::<f32>()) as u64;

const VERTEX_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: VERTEX_STRIDE,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

fn part_ubo_min_binding_size() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(std::mem::size_of::<PartUniform>() as u64)
}

/// Index range and base vertex drawn for each part, trimmed to whole primitives
/// of `mode`.
fn part_draws(house: &House, mode: RenderMode) -> [(Range<u32>, i32); 3] {
    house.draw_ranges().map(|r| {
        let start = r.indices.start;
        let count = mode.primitive_aligned(r.indices.end - start);
        (start..start + count, r.base_vertex)
    })
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads the current house geometry and draws every part with `mode`.
    ///
    /// `color_of` picks the fill/line/point color of each part.
    pub fn render<F>(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        house: &House,
        mode: RenderMode,
        color_of: F,
    ) where
        F: Fn(Part) -> Color,
    {
        self.ensure_pipelines(ctx);
        if self.pipelines.is_none() {
            return;
        }
        self.ensure_part_bindings(ctx);
        self.ensure_index_buffer(ctx, house);

        // Mutating methods must happen before borrowing pipeline/buffers immutably.
        self.upload_vertices(ctx, house);
        for (slot, part) in self.parts.iter().zip(Part::ALL) {
            let u = PartUniform {
                color: color_of(part).to_array(),
            };
            ctx.queue.write_buffer(&slot.ubo, 0, bytemuck::bytes_of(&u));
        }

        let Some(pipelines) = self.pipelines.as_ref() else { return };
        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else { return };
        let Some(index_buffer) = self.index_buffer.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("gable mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&pipelines[mode.slot()]);
        rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
        rpass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);

        for ((indices, base_vertex), slot) in part_draws(house, mode).into_iter().zip(&self.parts) {
            if indices.is_empty() {
                continue;
            }
            rpass.set_bind_group(0, &slot.bind_group, &[]);
            rpass.draw_indexed(indices, base_vertex, 0..1);
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        // A format that failed once is not retried every frame.
        if self.pipeline_format == Some(ctx.surface_format) {
            return;
        }
        self.pipeline_format = Some(ctx.surface_format);
        self.pipelines = None;

        let Some(shader) = create_wgsl_module(
            ctx.device,
            "gable mesh shader",
            include_str!("shaders/mesh.wgsl"),
        ) else {
            log::warn!("mesh shader unavailable; skipping house draws");
            return;
        };

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("gable mesh bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: part_ubo_min_binding_size(),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("gable mesh pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipelines = RenderMode::ALL.map(|mode| {
            ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(match mode {
                    RenderMode::Triangles => "gable mesh pipeline (triangles)",
                    RenderMode::Lines => "gable mesh pipeline (lines)",
                    RenderMode::Points => "gable mesh pipeline (points)",
                }),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[vertex_layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: mode.topology(),
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        });

        log::debug!("mesh pipelines built for {:?}", ctx.surface_format);

        self.pipelines = Some(pipelines);
        self.bind_group_layout = Some(bind_group_layout);

        // Bind groups belong to the old layout.
        self.parts.clear();
    }

    fn ensure_part_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.parts.len() == Part::ALL.len() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        self.parts = Part::ALL
            .iter()
            .map(|part| {
                let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some(part.name()),
                    size: std::mem::size_of::<PartUniform>() as u64,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });

                let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(part.name()),
                    layout: bgl,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: ubo.as_entire_binding(),
                    }],
                });

                PartSlot { ubo, bind_group }
            })
            .collect();
    }

    fn ensure_index_buffer(&mut self, ctx: &RenderCtx<'_>, house: &House) {
        if self.index_buffer.is_some() && self.index_count == house.index_count() {
            return;
        }

        let indices = house.flatten_indices();
        self.index_buffer = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("gable mesh ibo"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        }));
        self.index_count = indices.len();

        log::debug!("uploaded {} indices", indices.len());
    }

    fn upload_vertices(&mut self, ctx: &RenderCtx<'_>, house: &House) {
        house.flatten_vertices_into(&mut self.staging);
        let bytes: &[u8] = bytemuck::cast_slice(&self.staging);
        let required = bytes.len() as u64;

        if self.vertex_buffer.is_none() || required > self.vertex_capacity {
            self.vertex_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("gable mesh vbo"),
                size: required,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vertex_capacity = required;
        }

        let Some(vbo) = self.vertex_buffer.as_ref() else { return };
        ctx.queue.write_buffer(vbo, 0, bytes);
    }
}
