use crate::camera::{Camera, SceneUniform};
use goal_core::{Light, RenderItem};
use wgpu::util::DeviceExt;
use wgpu::*;

pub const DEPTH_FORMAT: TextureFormat = TextureFormat::Depth32Float;

/// Per-item uniform, one 256-byte slot per scene item (dynamic offsets).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    model: [[f32; 4]; 4], // 64 bytes
    color: [f32; 4],      // rgba
    flags: [f32; 4],      // unlit, double sided
    _padding: [f32; 40],  // 160 bytes padding to reach 256
}

impl ObjectUniform {
    pub fn new(item: &RenderItem) -> Self {
        let material = &item.material;
        Self {
            model: item.transform.to_cols_array_2d(),
            color: material.color.to_rgba(material.opacity),
            flags: [
                f32::from(u8::from(material.unlit)),
                f32::from(u8::from(material.double_sided)),
                0.0,
                0.0,
            ],
            _padding: [0.0; 40],
        }
    }
}

pub const OBJECT_STRIDE: u64 = std::mem::size_of::<ObjectUniform>() as u64;

pub struct SceneBuffers {
    pub scene: Buffer,
    pub objects: Buffer,
    pub object_capacity: usize,
}

pub fn create_buffers(
    device: &Device,
    camera: &Camera,
    lights: &[Light],
    object_capacity: usize,
) -> SceneBuffers {
    let scene_uniform = SceneUniform::new(camera, lights);
    let scene = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Scene Buffer"),
        contents: bytemuck::cast_slice(&[scene_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    // At least one slot so the bind group is valid for an empty scene
    let object_capacity = object_capacity.max(1);
    let objects = device.create_buffer(&BufferDescriptor {
        label: Some("Object Uniform Buffer"),
        size: OBJECT_STRIDE * object_capacity as u64,
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    SceneBuffers {
        scene,
        objects,
        object_capacity,
    }
}

pub fn create_depth_view(device: &Device, config: &SurfaceConfiguration) -> TextureView {
    let texture = device.create_texture(&TextureDescriptor {
        label: Some("Depth Texture"),
        size: Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&TextureViewDescriptor::default())
}
