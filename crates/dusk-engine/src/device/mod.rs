//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and mapping surface errors to actions

mod gpu;
mod surface;

pub use gpu::{Gpu, GpuFrame, GpuInit};
pub use surface::SurfaceErrorAction;
