use std::num::NonZeroU32;

use wgpu::util::DeviceExt;

use super::image::ImageData;
use super::texture::Texture2d;
use super::{RenderCtx, RenderTarget};

/// Number of texture views bound to the shader's binding array.
const TEXTURE_SLOTS: u32 = 2;

/// Instances drawn per frame (one quad per texture slot).
const QUAD_INSTANCES: u32 = 2;

/// Index list for one quad over the corner order
/// top-left, bottom-left, bottom-right, top-right.
const QUAD_INDICES: [u16; 6] = [0, 1, 2, 3, 0, 2];

/// Textures bound per slot: slot 0 shows the front texture, slot 1 is pinned
/// to the second image. Toggling the front alternates what the first quad
/// displays while the second quad stays fixed.
fn view_order(front: usize) -> [usize; 2] {
    [front, 1]
}

fn src_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

/// Renderer for a pair of textured quads driven by a two-element texture
/// binding array.
///
/// The quad geometry is generated in the vertex shader from the vertex and
/// instance indices; the only GPU buffer is the shared index list. Requires
/// `Features::TEXTURE_BINDING_ARRAY` on the device.
///
/// GPU resources are created lazily on first render and survive for the
/// renderer's lifetime. The bind group is rebuilt whenever the front texture
/// changes or the pipeline is recreated for a new surface format.
pub struct QuadRenderer {
    shader_src: String,
    images: Option<[ImageData; 2]>,

    /// Index of the texture currently bound to array slot 0.
    front: usize,

    // pipeline
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,

    // bindings (rebuilt when the front texture changes)
    bind_group: Option<wgpu::BindGroup>,
    sampler: Option<wgpu::Sampler>,
    binding_generation: u64,
    bind_group_generation: u64,

    // GPU resources
    textures: Option<[Texture2d; 2]>,
    index_buffer: Option<wgpu::Buffer>,
}

impl QuadRenderer {
    /// Creates a renderer from shader source and two decoded images.
    ///
    /// No GPU work happens here; resources are created on first render.
    pub fn new(shader_src: String, images: [ImageData; 2]) -> Self {
        Self {
            shader_src,
            images: Some(images),
            front: 0,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            sampler: None,
            binding_generation: 0,
            bind_group_generation: u64::MAX,
            textures: None,
            index_buffer: None,
        }
    }

    /// Index of the texture currently shown by the first quad.
    pub fn front(&self) -> usize {
        self.front
    }

    /// Alternates the texture bound to array slot 0.
    ///
    /// Takes effect on the next render, when the bind group is rebuilt.
    pub fn toggle_front(&mut self) {
        self.front ^= 1;
        self.binding_generation += 1;
    }

    /// Draws both quads into `target`.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_pipeline(ctx);
        self.ensure_textures(ctx);
        self.ensure_sampler(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(index_buffer) = self.index_buffer.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("glint quad pass"),
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

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..QUAD_INSTANCES);
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("glint quad shader"),
            source: wgpu::ShaderSource::Wgsl(self.shader_src.as_str().into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("glint quad bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: NonZeroU32::new(TEXTURE_SLOTS),
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("glint quad pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("glint quad pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(src_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
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
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bgl);

        self.bind_group = None;
        self.bind_group_generation = u64::MAX;
    }

    fn ensure_textures(&mut self, ctx: &RenderCtx<'_>) {
        if self.textures.is_some() {
            return;
        }
        let Some([first, second]) = self.images.take() else { return };

        self.textures = Some([
            Texture2d::from_image(ctx, first, "glint quad texture 0"),
            Texture2d::from_image(ctx, second, "glint quad texture 1"),
        ]);
        self.binding_generation += 1;
    }

    fn ensure_sampler(&mut self, ctx: &RenderCtx<'_>) {
        if self.sampler.is_some() {
            return;
        }
        self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("glint quad sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            lod_min_clamp: 0.0,
            lod_max_clamp: 1.0,
            ..Default::default()
        }));
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.index_buffer.is_some() {
            return;
        }
        self.index_buffer = Some(ctx.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("glint quad ibo"),
                contents: bytemuck::cast_slice(&QUAD_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            },
        ));
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group_generation == self.binding_generation && self.bind_group.is_some() {
            return;
        }

        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        let Some(textures) = self.textures.as_ref() else { return };
        let Some(sampler) = self.sampler.as_ref() else { return };

        let order = view_order(self.front);
        let views = [&textures[order[0]].view, &textures[order[1]].view];

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("glint quad bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureViewArray(&views),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        self.bind_group = Some(bind_group);
        self.bind_group_generation = self.binding_generation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_renderer() -> QuadRenderer {
        let images = [
            ImageData::solid_color(2, 2, [255, 0, 0, 255]),
            ImageData::solid_color(2, 2, [0, 255, 0, 255]),
        ];
        QuadRenderer::new(String::from("// placeholder"), images)
    }

    #[test]
    fn indices_cover_all_four_corners() {
        let mut seen: Vec<u16> = QUAD_INDICES.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(QUAD_INDICES.len(), 6);
    }

    #[test]
    fn front_starts_at_slot_zero() {
        assert_eq!(test_renderer().front(), 0);
    }

    #[test]
    fn toggle_alternates_front_slot() {
        let mut renderer = test_renderer();

        renderer.toggle_front();
        assert_eq!(renderer.front(), 1);
        renderer.toggle_front();
        assert_eq!(renderer.front(), 0);
    }

    #[test]
    fn second_slot_is_pinned() {
        assert_eq!(view_order(0), [0, 1]);
        assert_eq!(view_order(1), [1, 1]);
    }
}
