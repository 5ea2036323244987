use super::resources::{ObjectUniform, OBJECT_STRIDE};
use super::Renderer;
use crate::camera::SceneUniform;
use crate::mesh::Mesh;
use goal_core::{RenderItem, Scene};
use wgpu::*;

/// Which pass draws an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Opaque,
    Lines,
    Transparent,
}

fn layer(item: &RenderItem, mesh: &Mesh, wireframe: bool) -> Layer {
    if !mesh.has_triangles() || wireframe {
        Layer::Lines
    } else if item.material.is_transparent() {
        Layer::Transparent
    } else {
        Layer::Opaque
    }
}

pub fn draw_frame(renderer: &mut Renderer, scene: &Scene, wireframe: bool) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            log::warn!("Surface lost; reconfiguring and skipping frame");
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(SurfaceError::Timeout) => {
            log::warn!("Surface timed out; skipping frame");
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, scene);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(renderer.clear_color),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(RenderPassDepthStencilAttachment {
                view: &renderer.depth_view,
                depth_ops: Some(Operations {
                    load: LoadOp::Clear(1.0),
                    store: StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_items(renderer, scene, wireframe, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &Renderer, scene: &Scene) {
    let uniform = SceneUniform::new(&renderer.camera, &scene.lights);
    renderer
        .queue
        .write_buffer(&renderer.buffers.scene, 0, bytemuck::bytes_of(&uniform));

    let objects: Vec<ObjectUniform> = scene
        .items
        .iter()
        .take(renderer.buffers.object_capacity)
        .map(ObjectUniform::new)
        .collect();
    if !objects.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.objects, 0, bytemuck::cast_slice(&objects));
    }
}

fn draw_items(renderer: &Renderer, scene: &Scene, wireframe: bool, pass: &mut RenderPass<'_>) {
    let items: Vec<(usize, &RenderItem, &Mesh)> = scene
        .items
        .iter()
        .zip(&renderer.meshes)
        .enumerate()
        .take(renderer.buffers.object_capacity)
        .filter(|(_, (item, _))| item.visible)
        .map(|(index, (item, mesh))| (index, item, mesh))
        .collect();

    pass.set_bind_group(0, &renderer.scene_bind_group, &[]);

    // Opaque geometry first, then lines, then transparent surfaces far to near
    pass.set_pipeline(&renderer.pipelines.opaque_pipeline);
    for &(index, item, mesh) in &items {
        if layer(item, mesh, wireframe) == Layer::Opaque {
            draw_mesh(renderer, pass, index, mesh, false);
        }
    }

    pass.set_pipeline(&renderer.pipelines.line_pipeline);
    for &(index, item, mesh) in &items {
        if layer(item, mesh, wireframe) == Layer::Lines {
            draw_mesh(renderer, pass, index, mesh, true);
        }
    }

    let eye = renderer.camera.eye;
    let mut transparent: Vec<_> = items
        .iter()
        .filter(|(_, item, mesh)| layer(item, mesh, wireframe) == Layer::Transparent)
        .collect();
    transparent.sort_by(|a, b| {
        let da = a.1.translation().distance_squared(eye);
        let db = b.1.translation().distance_squared(eye);
        db.total_cmp(&da)
    });
    pass.set_pipeline(&renderer.pipelines.transparent_pipeline);
    for &&(index, _, mesh) in &transparent {
        draw_mesh(renderer, pass, index, mesh, false);
    }
}

fn draw_mesh(
    renderer: &Renderer,
    pass: &mut RenderPass<'_>,
    index: usize,
    mesh: &Mesh,
    lines: bool,
) {
    let (buffer, count) = if lines {
        (&mesh.line_buffer, mesh.line_count)
    } else {
        (&mesh.triangle_buffer, mesh.triangle_count)
    };
    let Some(buffer) = buffer else {
        return;
    };

    let offset = (index as u64 * OBJECT_STRIDE) as u32;
    pass.set_bind_group(1, &renderer.object_bind_group, &[offset]);
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..count, 0, 0..1);
}
