//! GPU device management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue, with or without a window
//! - creating & configuring the Surface (swapchain) for windowed contexts
//! - acquiring frames and providing encoders/views for rendering

mod error;
mod frame;
mod gpu;
mod headless;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use headless::HeadlessGpu;
pub use init::GpuInit;
