/// Facades - process-wide entry points over a single `DebugWeb` instance.

#[cfg(target_arch = "wasm32")]
pub mod wasm;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;
