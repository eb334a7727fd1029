use crate::constants::{BUTTON_COLOR, DECORATION_COLOR, MAX_BILLBOARDS, RING_COLOR};
use billboard_core::{BillboardView, MarkerKind};
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct QuadInstance {
    pub(crate) center_kind: [f32; 4],
    pub(crate) axis_x: [f32; 4],
    pub(crate) axis_y: [f32; 4],
    pub(crate) color: [f32; 4],
}

pub(crate) struct BillboardResources {
    pub(crate) instances: wgpu::Buffer,
    pub(crate) count: u32,
}

impl BillboardResources {
    pub(crate) fn new(device: &wgpu::Device) -> Self {
        let instances = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("billboard_instances"),
            size: (std::mem::size_of::<QuadInstance>() * MAX_BILLBOARDS) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            instances,
            count: 0,
        }
    }

    /// Upload this frame's quads. Rings go first so buttons draw over them.
    pub(crate) fn write(&mut self, queue: &wgpu::Queue, views: &[BillboardView]) {
        let mut packed: Vec<QuadInstance> = views.iter().map(pack).collect();
        packed.sort_by_key(|q| match q.center_kind[3] as u32 {
            1 => 0,
            0 => 1,
            _ => 2,
        });
        packed.truncate(MAX_BILLBOARDS);
        self.count = packed.len() as u32;
        if !packed.is_empty() {
            queue.write_buffer(&self.instances, 0, bytemuck::cast_slice(&packed));
        }
    }
}

fn pack(view: &BillboardView) -> QuadInstance {
    let (kind, color) = match view.kind {
        MarkerKind::Button => (0.0, BUTTON_COLOR),
        MarkerKind::Ring => (1.0, RING_COLOR),
        MarkerKind::Decorative => (2.0, DECORATION_COLOR),
    };
    let ax: Vec3 = view.rotation * Vec3::X;
    let ay: Vec3 = view.rotation * Vec3::Y;
    QuadInstance {
        center_kind: [view.position.x, view.position.y, view.position.z, kind],
        axis_x: [ax.x, ax.y, ax.z, view.size.x],
        axis_y: [ay.x, ay.y, ay.z, view.size.y],
        color,
    }
}

pub(crate) fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x4,
        1 => Float32x4,
        2 => Float32x4,
        3 => Float32x4
    ];
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<QuadInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &ATTRS,
    }
}
