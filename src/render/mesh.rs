use crate::glb::{LoadedModel, MeshVertex};
use glam::Mat4;
use wgpu::util::DeviceExt;

/// GPU buffers for one spawned model instance.
pub struct MeshBuffers {
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
    index_count: u32,
    transform: wgpu::Buffer,
}

impl MeshBuffers {
    pub fn upload(device: &wgpu::Device, model: &LoadedModel) -> Self {
        let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_vertices"),
            contents: bytemuck::cast_slice(&model.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_indices"),
            contents: bytemuck::cast_slice(&model.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let transform = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_transform"),
            contents: bytemuck::bytes_of(&Mat4::IDENTITY.to_cols_array()),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        Self {
            vertex,
            index,
            index_count: model.indices.len() as u32,
            transform,
        }
    }

    pub fn write_transform(&self, queue: &wgpu::Queue, m: Mat4) {
        queue.write_buffer(&self.transform, 0, bytemuck::bytes_of(&m.to_cols_array()));
    }

    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertex.slice(..));
        rpass.set_vertex_buffer(1, self.transform.slice(..));
        rpass.set_index_buffer(self.index.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

pub fn vertex_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
    const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
    const TRANSFORM_ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4
    ];
    [
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRS,
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 16]>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &TRANSFORM_ATTRS,
        },
    ]
}
