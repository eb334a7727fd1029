use billboard_core::EngineError;
use glam::{Mat3, Mat4, Vec3};
use gltf::mesh::util::ReadIndices;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub pos: [f32; 3],
    pub nrm: [f32; 3],
}

/// CPU-side model: every primitive of the default scene merged into one
/// indexed mesh in model space, plus clip lengths for the animation gate.
#[derive(Clone, Debug)]
pub struct LoadedModel {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    pub clip_durations: Vec<f32>,
}

/// Parse a binary glTF. Only the embedded BIN chunk is read; external buffer
/// URIs are not followed.
pub fn parse_glb(path: &str, bytes: &[u8]) -> Result<LoadedModel, EngineError> {
    let parsed = gltf::Gltf::from_slice(bytes).map_err(|e| EngineError::Parse {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    let blob = parsed.blob.as_deref();
    let doc = &parsed.document;

    let mut model = LoadedModel {
        vertices: Vec::new(),
        indices: Vec::new(),
        clip_durations: Vec::new(),
    };

    let scene = doc.default_scene().or_else(|| doc.scenes().next());
    match scene {
        Some(scene) => {
            for node in scene.nodes() {
                append_node(&node, Mat4::IDENTITY, blob, &mut model);
            }
        }
        None => {
            for mesh in doc.meshes() {
                append_mesh(&mesh, Mat4::IDENTITY, blob, &mut model);
            }
        }
    }

    for anim in doc.animations() {
        let mut end = 0.0_f32;
        for channel in anim.channels() {
            let reader = channel.reader(|b| buffer_bytes(b, blob));
            if let Some(inputs) = reader.read_inputs() {
                end = inputs.fold(end, f32::max);
            }
        }
        model.clip_durations.push(end);
    }

    if model.vertices.is_empty() || model.indices.is_empty() {
        return Err(EngineError::NoGeometry {
            path: path.to_string(),
        });
    }
    log::info!(
        "[load] {}: {} vertices, {} triangles, {} clips",
        path,
        model.vertices.len(),
        model.indices.len() / 3,
        model.clip_durations.len()
    );
    Ok(model)
}

fn buffer_bytes<'s>(buffer: gltf::Buffer<'_>, blob: Option<&'s [u8]>) -> Option<&'s [u8]> {
    match buffer.source() {
        gltf::buffer::Source::Bin => blob,
        gltf::buffer::Source::Uri(_) => None,
    }
}

fn append_node(node: &gltf::Node<'_>, parent: Mat4, blob: Option<&[u8]>, out: &mut LoadedModel) {
    let local = Mat4::from_cols_array_2d(&node.transform().matrix());
    let world = parent * local;
    if let Some(mesh) = node.mesh() {
        append_mesh(&mesh, world, blob, out);
    }
    for child in node.children() {
        append_node(&child, world, blob, out);
    }
}

fn append_mesh(mesh: &gltf::Mesh<'_>, world: Mat4, blob: Option<&[u8]>, out: &mut LoadedModel) {
    let normal_m = Mat3::from_mat4(world).inverse().transpose();
    for prim in mesh.primitives() {
        if prim.mode() != gltf::mesh::Mode::Triangles {
            continue;
        }
        let reader = prim.reader(|b| buffer_bytes(b, blob));
        let pos: Vec<[f32; 3]> = match reader.read_positions() {
            Some(it) => it.collect(),
            None => continue,
        };
        let nrm: Vec<[f32; 3]> = match reader.read_normals() {
            Some(it) => it.collect(),
            None => vec![[0.0, 1.0, 0.0]; pos.len()],
        };
        let base = out.vertices.len() as u32;
        for (p, n) in pos.iter().zip(nrm.iter()) {
            let wp = world.transform_point3(Vec3::from(*p));
            let wn = (normal_m * Vec3::from(*n)).normalize_or_zero();
            out.vertices.push(MeshVertex {
                pos: wp.to_array(),
                nrm: wn.to_array(),
            });
        }
        match reader.read_indices() {
            Some(ReadIndices::U8(it)) => out.indices.extend(it.map(|i| base + i as u32)),
            Some(ReadIndices::U16(it)) => out.indices.extend(it.map(|i| base + i as u32)),
            Some(ReadIndices::U32(it)) => out.indices.extend(it.map(|i| base + i)),
            None => out.indices.extend(base..base + pos.len() as u32),
        }
    }
}
