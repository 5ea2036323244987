pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::collections::BTreeSet;

use crate::camera::Camera;
use crate::mesh::{tessellate, Mesh};
use glam::{Mat4, Vec3};
use goal_core::{Background, Scene};
use pipeline::PipelineState;
use resources::{ObjectUniform, SceneBuffers};
use wgpu::*;

/// Clear colour used while skybox images are not loaded
const SKY_FALLBACK: Color = Color {
    r: 0.24,
    g: 0.52,
    b: 0.78,
    a: 1.0,
};

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    // Pipelines
    pub pipelines: PipelineState,

    // Bind Groups
    pub scene_bind_group: BindGroup,
    pub object_bind_group: BindGroup,

    // Resources
    pub buffers: SceneBuffers,
    pub depth_view: TextureView,
    pub meshes: Vec<Mesh>, // one per scene item, same order

    pub clear_color: Color,
}

impl Renderer {
    /// Build GPU resources for `scene`. Later frames must pass a scene with the same
    /// items in the same order; only transforms, materials and visibility may change.
    pub async fn new(canvas: web_sys::HtmlCanvasElement, scene: &Scene) -> Result<Self, String> {
        let ctx = init::init_gpu(canvas).await?;
        let camera = Camera::new(ctx.size.0, ctx.size.1);

        let buffers =
            resources::create_buffers(&ctx.device, &camera, &scene.lights, scene.items.len());
        let depth_view = resources::create_depth_view(&ctx.device, &ctx.config);
        let pipelines = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        // Meshes
        let meshes = scene
            .items
            .iter()
            .map(|item| Mesh::new(&ctx.device, &ctx.queue, &tessellate(&item.shape)))
            .collect();

        // Bind Groups
        let scene_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &pipelines.scene_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.scene.as_entire_binding(),
            }],
        });

        let object_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Object Bind Group"),
            layout: &pipelines.object_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: BindingResource::Buffer(BufferBinding {
                    buffer: &buffers.objects,
                    offset: 0,
                    size: BufferSize::new(std::mem::size_of::<ObjectUniform>() as u64),
                }),
            }],
        });

        let clear_color = match &scene.background {
            Background::Color(color) => Color {
                r: f64::from(color.r).powf(2.2),
                g: f64::from(color.g).powf(2.2),
                b: f64::from(color.b).powf(2.2),
                a: 1.0,
            },
            Background::Skybox(faces) => {
                log::warn!(
                    "Skybox images are not loaded ({}); using a flat sky colour",
                    faces.join(", ")
                );
                SKY_FALLBACK
            }
        };

        let textures: BTreeSet<&str> = scene
            .items
            .iter()
            .filter_map(|item| item.material.texture)
            .collect();
        for path in textures {
            log::warn!("Texture {} is not loaded; drawing its flat colour", path);
        }

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            pipelines,
            scene_bind_group,
            object_bind_group,
            buffers,
            depth_view,
            meshes,
            clear_color,
        })
    }

    pub fn draw(
        &mut self,
        scene: &Scene,
        view: Mat4,
        eye: Vec3,
        wireframe: bool,
    ) -> Result<(), String> {
        self.camera.set_view(view, eye);
        draw::draw_frame(self, scene, wireframe)
    }
}
