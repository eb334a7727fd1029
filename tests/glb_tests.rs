// Host-side tests for GLB parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod glb {
    include!("../src/glb.rs");
}

use billboard_core::EngineError;
use glam::Vec3;
use glb::{parse_glb, LoadedModel};

fn bounds(model: &LoadedModel) -> Option<(Vec3, Vec3)> {
    let first = Vec3::from(model.vertices.first()?.pos);
    Some(model.vertices.iter().fold((first, first), |(lo, hi), v| {
        let p = Vec3::from(v.pos);
        (lo.min(p), hi.max(p))
    }))
}

/// Minimal binary glTF: one triangle, node translated to z = 2.
fn triangle_glb() -> Vec<u8> {
    let positions: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let bin: Vec<u8> = bytemuck::cast_slice(&positions).to_vec();
    let json = r#"{"asset":{"version":"2.0"},"scene":0,"scenes":[{"nodes":[0]}],"nodes":[{"mesh":0,"translation":[0,0,2]}],"meshes":[{"primitives":[{"attributes":{"POSITION":0}}]}],"buffers":[{"byteLength":36}],"bufferViews":[{"buffer":0,"byteOffset":0,"byteLength":36}],"accessors":[{"bufferView":0,"componentType":5126,"count":3,"type":"VEC3","min":[0,0,0],"max":[1,1,0]}]}"#;
    let mut json_bytes = json.as_bytes().to_vec();
    while json_bytes.len() % 4 != 0 {
        json_bytes.push(b' ');
    }
    let total = 12 + 8 + json_bytes.len() + 8 + bin.len();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json_bytes.len() as u32).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&json_bytes);
    out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    out.extend_from_slice(b"BIN\0");
    out.extend_from_slice(&bin);
    out
}

#[test]
fn parses_triangle_in_world_space() {
    let model = parse_glb("tri.glb", &triangle_glb()).expect("parse");
    assert_eq!(model.vertices.len(), 3);
    assert_eq!(model.indices, vec![0, 1, 2]);
    assert_eq!(model.vertices[1].pos, [1.0, 0.0, 2.0]);
    // missing normals default to +Y
    assert_eq!(model.vertices[0].nrm, [0.0, 1.0, 0.0]);
    assert!(model.clip_durations.is_empty());

    let (lo, hi) = bounds(&model).expect("bounds");
    assert_eq!(lo.to_array(), [0.0, 0.0, 2.0]);
    assert_eq!(hi.to_array(), [1.0, 1.0, 2.0]);
}

#[test]
fn garbage_is_a_parse_error() {
    let err = parse_glb("bad.glb", b"not a model").unwrap_err();
    assert!(matches!(err, EngineError::Parse { ref path, .. } if path == "bad.glb"));
}

#[test]
fn empty_document_has_no_geometry() {
    let err = parse_glb("empty.gltf", br#"{"asset":{"version":"2.0"}}"#).unwrap_err();
    assert_eq!(
        err,
        EngineError::NoGeometry {
            path: "empty.gltf".to_string()
        }
    );
}
