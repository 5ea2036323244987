//! Mesh generation for the goal scenes
//!
//! Each scene shape is tessellated once at start-up. Sizes are baked into the vertices;
//! item transforms only place, rotate and scale the goal group.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use goal_core::Shape;
use wgpu::util::DeviceExt;
use wgpu::*;

const SPHERE_WIDTH_SEGMENTS: u32 = 32;
const SPHERE_HEIGHT_SEGMENTS: u32 = 16;
const CYLINDER_RADIAL_SEGMENTS: u32 = 32;
const TORUS_RADIAL_SEGMENTS: u32 = 12;
const TORUS_TUBULAR_SEGMENTS: u32 = 48;

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// CPU-side geometry: triangle list plus line-list indices for edges
#[derive(Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<u16>,
    pub lines: Vec<u16>,
}

impl MeshData {
    fn from_triangles(vertices: Vec<Vertex>, triangles: Vec<u16>) -> Self {
        let lines = triangles
            .chunks_exact(3)
            .flat_map(|tri| [tri[0], tri[1], tri[1], tri[2], tri[2], tri[0]])
            .collect();
        Self {
            vertices,
            triangles,
            lines,
        }
    }
}

pub fn tessellate(shape: &Shape) -> MeshData {
    match shape {
        Shape::Sphere { radius } => create_sphere(*radius),
        Shape::Cylinder { radius, height } => create_cylinder(*radius, *height),
        Shape::Torus { radius, tube } => create_torus(*radius, *tube),
        Shape::Plane { width, height } => create_plane(*width, *height),
        Shape::Triangle { vertices } => create_triangle(vertices),
        Shape::Cuboid {
            width,
            height,
            depth,
        } => create_cuboid(*width, *height, *depth),
        Shape::Polyline { points } => create_polyline(points),
    }
}

/// Sphere centred on the origin
pub fn create_sphere(radius: f32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for i in 0..=SPHERE_HEIGHT_SEGMENTS {
        let theta = PI * i as f32 / SPHERE_HEIGHT_SEGMENTS as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for j in 0..=SPHERE_WIDTH_SEGMENTS {
            let phi = TAU * j as f32 / SPHERE_WIDTH_SEGMENTS as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();
            let normal = Vec3::new(sin_theta * cos_phi, cos_theta, sin_theta * sin_phi);
            vertices.push(Vertex::new(normal * radius, normal));
        }
    }

    let row = SPHERE_WIDTH_SEGMENTS + 1;
    for i in 0..SPHERE_HEIGHT_SEGMENTS {
        for j in 0..SPHERE_WIDTH_SEGMENTS {
            let first = (i * row + j) as u16;
            let second = first + row as u16;
            indices.extend_from_slice(&[first, second, first + 1, second, second + 1, first + 1]);
        }
    }

    MeshData::from_triangles(vertices, indices)
}

/// Closed cylinder along Y, centred on the origin
pub fn create_cylinder(radius: f32, height: f32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let half = height * 0.5;
    let segments = CYLINDER_RADIAL_SEGMENTS;

    // Side
    for j in 0..=segments {
        let angle = TAU * j as f32 / segments as f32;
        let (sin, cos) = angle.sin_cos();
        let normal = Vec3::new(sin, 0.0, cos);
        vertices.push(Vertex::new(Vec3::new(radius * sin, half, radius * cos), normal));
        vertices.push(Vertex::new(Vec3::new(radius * sin, -half, radius * cos), normal));
    }
    for j in 0..segments {
        let top = (j * 2) as u16;
        let bottom = top + 1;
        indices.extend_from_slice(&[top, bottom, top + 2, bottom, bottom + 2, top + 2]);
    }

    // Caps
    for (y, normal) in [(half, Vec3::Y), (-half, Vec3::NEG_Y)] {
        let centre = vertices.len() as u16;
        vertices.push(Vertex::new(Vec3::new(0.0, y, 0.0), normal));
        for j in 0..=segments {
            let angle = TAU * j as f32 / segments as f32;
            let (sin, cos) = angle.sin_cos();
            vertices.push(Vertex::new(Vec3::new(radius * sin, y, radius * cos), normal));
        }
        for j in 0..segments as u16 {
            let a = centre + 1 + j;
            if y > 0.0 {
                indices.extend_from_slice(&[centre, a, a + 1]);
            } else {
                indices.extend_from_slice(&[centre, a + 1, a]);
            }
        }
    }

    MeshData::from_triangles(vertices, indices)
}

/// Torus in the XY plane around the origin
pub fn create_torus(radius: f32, tube: f32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for j in 0..=TORUS_RADIAL_SEGMENTS {
        let v = TAU * j as f32 / TORUS_RADIAL_SEGMENTS as f32;
        let (sin_v, cos_v) = v.sin_cos();
        for i in 0..=TORUS_TUBULAR_SEGMENTS {
            let u = TAU * i as f32 / TORUS_TUBULAR_SEGMENTS as f32;
            let (sin_u, cos_u) = u.sin_cos();
            let ring = radius + tube * cos_v;
            let position = Vec3::new(ring * cos_u, ring * sin_u, tube * sin_v);
            let centre = Vec3::new(radius * cos_u, radius * sin_u, 0.0);
            vertices.push(Vertex::new(position, (position - centre).normalize_or_zero()));
        }
    }

    let row = TORUS_TUBULAR_SEGMENTS + 1;
    for j in 1..=TORUS_RADIAL_SEGMENTS {
        for i in 1..=TORUS_TUBULAR_SEGMENTS {
            let a = (row * j + i - 1) as u16;
            let b = (row * (j - 1) + i - 1) as u16;
            let c = (row * (j - 1) + i) as u16;
            let d = (row * j + i) as u16;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    MeshData::from_triangles(vertices, indices)
}

/// Rectangle in the XY plane facing +Z
pub fn create_plane(width: f32, height: f32) -> MeshData {
    let (hw, hh) = (width * 0.5, height * 0.5);
    let vertices = [
        Vec3::new(-hw, -hh, 0.0),
        Vec3::new(hw, -hh, 0.0),
        Vec3::new(hw, hh, 0.0),
        Vec3::new(-hw, hh, 0.0),
    ]
    .into_iter()
    .map(|p| Vertex::new(p, Vec3::Z))
    .collect();

    MeshData::from_triangles(vertices, vec![0, 1, 2, 2, 3, 0])
}

pub fn create_triangle(corners: &[Vec3; 3]) -> MeshData {
    let normal = (corners[1] - corners[0])
        .cross(corners[2] - corners[0])
        .normalize_or_zero();
    let vertices = corners.iter().map(|&p| Vertex::new(p, normal)).collect();
    MeshData::from_triangles(vertices, vec![0, 1, 2])
}

/// Box centred on the origin
pub fn create_cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let half = Vec3::new(width, height, depth) * 0.5;
    // (normal, two in-face axes); corners wind counter-clockwise seen from outside
    let faces = [
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, u, v) in faces {
        let base = vertices.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let corner = normal + u * su + v * sv;
            vertices.push(Vertex::new(corner * half, normal));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    MeshData::from_triangles(vertices, indices)
}

/// Open line strip through `points`, drawn as a line list
pub fn create_polyline(points: &[Vec3]) -> MeshData {
    let vertices = points.iter().map(|&p| Vertex::new(p, Vec3::Y)).collect();
    let lines = (1..points.len() as u16)
        .flat_map(|i| [i - 1, i])
        .collect();
    MeshData {
        vertices,
        triangles: Vec::new(),
        lines,
    }
}

/// Mesh data with GPU buffers
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub triangle_buffer: Option<Buffer>,
    pub triangle_count: u32,
    pub line_buffer: Option<Buffer>,
    pub line_count: u32,
}

impl Mesh {
    pub fn new(device: &Device, queue: &Queue, data: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer(&BufferDescriptor {
            label: Some("Vertex Buffer"),
            size: std::mem::size_of_val(data.vertices.as_slice()) as u64,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&vertex_buffer, 0, bytemuck::cast_slice(&data.vertices));

        Self {
            vertex_buffer,
            triangle_buffer: index_buffer(device, "Triangle Index Buffer", &data.triangles),
            triangle_count: data.triangles.len() as u32,
            line_buffer: index_buffer(device, "Line Index Buffer", &data.lines),
            line_count: data.lines.len() as u32,
        }
    }

    pub fn has_triangles(&self) -> bool {
        self.triangle_count > 0
    }
}

// create_buffer_init pads odd u16 counts up to the copy alignment
fn index_buffer(device: &Device, label: &str, indices: &[u16]) -> Option<Buffer> {
    if indices.is_empty() {
        return None;
    }
    Some(device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(indices),
        usage: BufferUsages::INDEX,
    }))
}
