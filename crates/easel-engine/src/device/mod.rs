//! GPU device + surface management for on-screen presentation.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain) as a copy target
//! - uploading a CPU `Surface` into each acquired frame

mod gpu;
mod init;
mod pack;

pub use gpu::{Gpu, SurfaceErrorAction};
pub use init::GpuInit;
