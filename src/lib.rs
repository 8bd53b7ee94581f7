pub mod content;
pub mod reveal;
pub mod scroll;
pub mod tilt;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
