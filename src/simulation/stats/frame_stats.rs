use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameStats {
    pub(super) frame_ms: f64,
    pub(super) frames_run: u32,
    pub(super) frames_skipped: u32,
    pub(super) respawned: u32,
    pub(super) connections_drawn: u32,
    pub(super) sparkles_drawn: u32,
    pub(super) particle_count: u32,
}

impl FrameStats {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[wasm_bindgen]
impl FrameStats {
    /// Time spent in the last executed frame
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn frames_run(&self) -> u32 { self.frames_run }
    /// Callbacks rejected by the frame gate
    #[wasm_bindgen(getter)]
    pub fn frames_skipped(&self) -> u32 { self.frames_skipped }
    #[wasm_bindgen(getter)]
    pub fn respawned(&self) -> u32 { self.respawned }
    #[wasm_bindgen(getter)]
    pub fn connections_drawn(&self) -> u32 { self.connections_drawn }
    #[wasm_bindgen(getter)]
    pub fn sparkles_drawn(&self) -> u32 { self.sparkles_drawn }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
}
