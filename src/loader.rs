use crate::glb::{parse_glb, LoadedModel};
use billboard_core::{EngineError, ModelLoader};
use js_sys::Uint8Array;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetches `.glb` assets over HTTP and parses them into CPU meshes.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlbLoader;

impl ModelLoader for GlbLoader {
    type Model = LoadedModel;

    async fn load(&self, path: &str) -> Result<LoadedModel, EngineError> {
        let bytes = fetch_bytes(path).await.map_err(|e| EngineError::Fetch {
            path: path.to_string(),
            reason: format!("{:#}", e),
        })?;
        parse_glb(path, &bytes)
    }
}

async fn fetch_bytes(path: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_val = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| anyhow::anyhow!("fetch rejected: {:?}", e))?;
    let resp: web::Response = resp_val
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a Response: {:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("HTTP {} {}", resp.status(), resp.status_text());
    }
    let buf_promise = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!("array_buffer: {:?}", e))?;
    let buf = JsFuture::from(buf_promise)
        .await
        .map_err(|e| anyhow::anyhow!("reading body: {:?}", e))?;
    Ok(Uint8Array::new(&buf).to_vec())
}
